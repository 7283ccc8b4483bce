//! Shared integration-test harness for running the `logwrap` binary as a
//! child process.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Environment variables that would leak host configuration into a run.
const ISOLATED_ENV: [&str; 5] = [
    "LOGWRAP_MIN_LEVEL",
    "LOGWRAP_TIMESTAMPS",
    "LOGWRAP_OBSERVE_ALL",
    "LOGWRAP_CONFIG",
    "LOGWRAP_LOG",
];

/// Captured result of one `logwrap` invocation.
pub struct LogwrapRun {
    pub output: Output,
}

impl LogwrapRun {
    /// Runs the binary to completion with the given arguments.
    pub fn spawn_command(args: &[&str]) -> Self {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_logwrap"));
        for var in ISOLATED_ENV {
            cmd.env_remove(var);
        }
        let output = cmd.args(args).output().expect("failed to run logwrap");
        Self { output }
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stderr_lines(&self) -> Vec<String> {
        self.stderr().lines().map(str::to_owned).collect()
    }

    /// Writes `contents` into a fresh temp dir and returns the file path.
    pub fn config_file(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("logwrap.yaml");
        std::fs::write(&path, contents).expect("write config");
        (dir, path)
    }
}
