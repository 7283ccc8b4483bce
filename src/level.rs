//! Severity levels for the logging facade.
//!
//! A [`Level`] wraps an `i8` rank. The four named constants cover the
//! defined range `DEBUG < INFO < ERROR < FATAL`; any other rank is still a
//! valid value that orders by its integer and renders as `"???"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseLevelError;

/// Name rendered for ranks outside the defined range.
pub const UNKNOWN_LEVEL_NAME: &str = "???";

/// Ordered severity of a log record.
///
/// The default value is [`Level::DEBUG`], the lowest defined rank.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(i8);

impl Level {
    /// Diagnostic detail.
    pub const DEBUG: Self = Self(0);
    /// Normal operational messages.
    pub const INFO: Self = Self(1);
    /// Failures the caller recovered from.
    pub const ERROR: Self = Self(2);
    /// Unrecoverable failures. Logging at this level aborts the caller.
    pub const FATAL: Self = Self(3);

    /// Every defined level, lowest rank first.
    pub const ALL: [Self; 4] = [Self::DEBUG, Self::INFO, Self::ERROR, Self::FATAL];

    /// Builds a level from a raw rank. Out-of-range ranks are accepted.
    #[must_use]
    pub const fn from_rank(rank: i8) -> Self {
        Self(rank)
    }

    /// Returns the integer rank.
    #[must_use]
    pub const fn rank(self) -> i8 {
        self.0
    }

    /// Returns `true` for the four defined levels.
    #[must_use]
    pub const fn is_known(self) -> bool {
        self.0 >= Self::DEBUG.0 && self.0 <= Self::FATAL.0
    }

    /// Returns the canonical upper-case name, or `"???"` for unknown ranks.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self.0 {
            0 => "DEBUG",
            1 => "INFO",
            2 => "ERROR",
            3 => "FATAL",
            _ => UNKNOWN_LEVEL_NAME,
        }
    }
}

/// Prints the canonical name, or `Level(rank)` for unknown ranks.
impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            f.write_str(self.as_str())
        } else {
            f.debug_tuple("Level").field(&self.0).finish()
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts a level name in any case, or an integer rank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(level) = Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
        {
            return Ok(level);
        }
        trimmed
            .parse::<i8>()
            .map(Self::from_rank)
            .map_err(|_| ParseLevelError {
                input: s.to_owned(),
            })
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_known() {
            serializer.serialize_str(self.as_str())
        } else {
            serializer.serialize_i8(self.0)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Rank(i8),
    Name(String),
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match LevelRepr::deserialize(deserializer)? {
            LevelRepr::Rank(rank) => Ok(Self::from_rank(rank)),
            LevelRepr::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}
