mod common;

use chrono::DateTime;
use common::LogwrapRun;

// ============================================================================
// emit
// ============================================================================

#[test]
fn emit_writes_record_to_stderr() {
    let run = LogwrapRun::spawn_command(&["--quiet", "emit", "--level", "info", "-C", "ctx", "hello"]);
    assert_eq!(run.code(), Some(0), "stderr: {}", run.stderr());
    assert_eq!(run.stderr_lines(), vec!["[ctx] INFO - hello"]);
    assert!(run.stdout().is_empty());
}

#[test]
fn emit_below_minimum_is_silent() {
    let run = LogwrapRun::spawn_command(&[
        "--quiet",
        "emit",
        "--min-level",
        "info",
        "--level",
        "debug",
        "-C",
        "ctx",
        "hello",
    ]);
    assert_eq!(run.code(), Some(0));
    assert!(run.stderr().is_empty(), "unexpected output: {}", run.stderr());
}

#[test]
fn emit_with_error_and_timestamp() {
    let run = LogwrapRun::spawn_command(&[
        "--quiet",
        "emit",
        "--timestamps",
        "--level",
        "error",
        "-C",
        "db",
        "--error",
        "timeout",
        "conn failed",
    ]);
    assert_eq!(run.code(), Some(0));

    let lines = run.stderr_lines();
    assert_eq!(lines.len(), 1, "got: {lines:?}");
    let (ts, rest) = lines[0].split_once(' ').unwrap();
    assert!(DateTime::parse_from_rfc3339(ts).is_ok(), "bad timestamp: {ts}");
    assert_eq!(rest, "[db] ERROR - conn failed (timeout)");
}

#[test]
fn emit_unknown_rank_renders_marker() {
    let run = LogwrapRun::spawn_command(&["--quiet", "emit", "--level", "9", "-C", "x", "odd"]);
    assert_eq!(run.code(), Some(0));
    assert_eq!(run.stderr_lines(), vec!["[x] ??? - odd"]);
}

#[test]
fn emit_fatal_terminates_abnormally() {
    let run = LogwrapRun::spawn_command(&["--quiet", "emit", "--level", "fatal", "-C", "svc", "shutdown"]);
    assert_eq!(run.code(), Some(70));

    let lines = run.stderr_lines();
    assert_eq!(lines[0], "[svc] FATAL - shutdown");
    // The abort payload is printed again by the panic hook.
    assert!(lines[1..].iter().any(|l| l == "[svc] FATAL - shutdown"), "got: {lines:?}");
}

#[test]
fn emit_fatal_terminates_even_when_filtered() {
    let run = LogwrapRun::spawn_command(&[
        "--quiet", "emit", "--min-level", "4", "--level", "fatal", "-C", "svc", "hidden",
    ]);
    assert_eq!(run.code(), Some(70));
    assert!(!run.stderr().contains("[svc]"), "got: {}", run.stderr());
}

#[test]
fn emit_reads_config_file() {
    let (_dir, path) = LogwrapRun::config_file("minimum_level: error\n");
    let run = LogwrapRun::spawn_command(&[
        "--quiet",
        "emit",
        "--config",
        path.to_str().unwrap(),
        "--level",
        "info",
        "skipped",
    ]);
    assert_eq!(run.code(), Some(0));
    assert!(run.stderr().is_empty(), "got: {}", run.stderr());
}

#[test]
fn emit_missing_config_exits_with_config_error() {
    let run = LogwrapRun::spawn_command(&[
        "--quiet",
        "emit",
        "--config",
        "/nonexistent/logwrap.yaml",
        "x",
    ]);
    assert_eq!(run.code(), Some(2));
    assert!(run.stderr().contains("file not found"), "got: {}", run.stderr());
}

#[test]
fn emit_rejects_bad_level() {
    let run = LogwrapRun::spawn_command(&["emit", "--level", "loud", "x"]);
    assert!(!run.output.status.success());
}

// ============================================================================
// check-config
// ============================================================================

#[test]
fn check_config_json() {
    let (_dir, path) =
        LogwrapRun::config_file("minimum_level: info\nuse_timestamps: true\n");
    let run = LogwrapRun::spawn_command(&[
        "--quiet",
        "check-config",
        path.to_str().unwrap(),
        "--format",
        "json",
    ]);
    assert_eq!(run.code(), Some(0), "stderr: {}", run.stderr());

    let parsed: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(parsed["minimum_level"], "INFO");
    assert_eq!(parsed["use_timestamps"], true);
    assert_eq!(parsed["forward_to_tracing"], false);
}

#[test]
fn check_config_human() {
    let (_dir, path) = LogwrapRun::config_file("minimum_level: fatal\n");
    let run = LogwrapRun::spawn_command(&["--quiet", "check-config", path.to_str().unwrap()]);
    assert_eq!(run.code(), Some(0));
    assert!(run.stdout().contains("minimum_level: FATAL"));
}

#[test]
fn check_config_invalid_yaml() {
    let (_dir, path) = LogwrapRun::config_file("minimum_level: [nope\n");
    let run = LogwrapRun::spawn_command(&["--quiet", "check-config", path.to_str().unwrap()]);
    assert_eq!(run.code(), Some(2));
    assert!(run.stderr().contains("parse error"), "got: {}", run.stderr());
}

// ============================================================================
// version
// ============================================================================

#[test]
fn version_human() {
    let run = LogwrapRun::spawn_command(&["version"]);
    assert_eq!(run.code(), Some(0));
    assert!(run.stdout().starts_with("logwrap "));
    assert!(run.stdout().contains("levels: DEBUG < INFO < ERROR < FATAL"));
}

#[test]
fn version_json() {
    let run = LogwrapRun::spawn_command(&["version", "--format", "json"]);
    assert_eq!(run.code(), Some(0));
    let parsed: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(parsed["name"], "logwrap");
    assert!(parsed.get("version").is_some());
    assert_eq!(
        parsed["levels"],
        serde_json::json!(["DEBUG", "INFO", "ERROR", "FATAL"])
    );
}

#[test]
fn json_diagnostics_format() {
    let (_dir, path) = LogwrapRun::config_file("minimum_level: info\n");
    let run = LogwrapRun::spawn_command(&[
        "-vv",
        "--log-format",
        "json",
        "check-config",
        path.to_str().unwrap(),
    ]);
    assert_eq!(run.code(), Some(0), "stderr: {}", run.stderr());

    let diagnostics: Vec<serde_json::Value> = run
        .stderr_lines()
        .iter()
        .map(|line| serde_json::from_str(line).expect("diagnostics line is JSON"))
        .collect();
    assert!(
        diagnostics
            .iter()
            .any(|d| d["fields"]["message"] == "configuration loaded"),
        "got: {}",
        run.stderr()
    );
}
