use std::path::{Path, PathBuf};

use tcgen_core::interchange::{ResponseStatus, TestRequest};
use tcgen_core::runner::{response_from_output, ProcessOutput, RunError, ScriptRunner, TestRunner};
use tempfile::tempdir;

fn output(stdout: &str, stderr: &str, code: i32) -> ProcessOutput {
    ProcessOutput {
        stdout: stdout.into(),
        stderr: stderr.into(),
        code: Some(code),
        success: code == 0,
    }
}

#[test]
fn clean_exit_returns_stdout() {
    let response = response_from_output(&output("O(n)\n", "", 0), None);
    assert_eq!(response.status, ResponseStatus::Success);
    assert_eq!(response.message, "O(n)\n");
}

#[test]
fn stderr_output_is_an_error_even_on_success() {
    let response = response_from_output(&output("", "warning: x\n", 0), None);
    assert_eq!(response.status, ResponseStatus::Error);
    assert_eq!(response.message, "warning: x\n");
}

#[test]
fn nonzero_exit_without_stderr_reports_status() {
    let response = response_from_output(&output("", "", 3), None);
    assert_eq!(response.status, ResponseStatus::Error);
    assert!(response.message.contains("status 3"));
}

#[test]
fn report_file_is_preferred_over_stdout() {
    let tmp = tempdir().unwrap();
    let report = tmp.path().join("output.txt");
    std::fs::write(&report, "report body").unwrap();

    let response = response_from_output(&output("ignored", "", 0), Some(&report));
    assert!(response.is_success());
    assert_eq!(response.message, "report body");
}

#[test]
fn missing_report_file_is_an_error_response() {
    let tmp = tempdir().unwrap();
    let response = response_from_output(&output("", "", 0), Some(&tmp.path().join("none.txt")));
    assert_eq!(response.status, ResponseStatus::Error);
}

#[test]
fn runner_rejects_path_like_names() {
    let tmp = tempdir().unwrap();
    let runner = ScriptRunner::new("/bin/true", tmp.path());
    let err = runner.run(&TestRequest::new("../escape", 1, "")).unwrap_err();
    assert!(matches!(err, RunError::InvalidRequest(_)));
}

#[test]
fn runner_reports_spawn_failure() {
    let tmp = tempdir().unwrap();
    let runner = ScriptRunner::new(tmp.path().join("no-such-script"), tmp.path().join("cache"));
    let err = runner.run(&TestRequest::new("t", 1, "code")).unwrap_err();
    assert!(matches!(err, RunError::Spawn { .. }), "unexpected error: {err}");
    // Code is cached before the spawn attempt.
    assert_eq!(std::fs::read_to_string(runner.cached_source_path("t")).unwrap(), "code");
}

#[cfg(unix)]
fn write_script(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("test_input.sh");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn runner_passes_name_budget_and_cached_path() {
    let tmp = tempdir().unwrap();
    let script = write_script(tmp.path(), r#"echo "$1 $2 $(basename "$3")""#);
    let runner = ScriptRunner::new(script, tmp.path().join("cache"));

    let response = runner.run(&TestRequest::new("input-1", 750, "// code")).expect("run");
    assert!(response.is_success(), "unexpected response: {response:?}");
    assert_eq!(response.message, "input-1 750 input-1.cpp\n");
}

#[cfg(unix)]
#[test]
fn runner_surfaces_script_failure() {
    let tmp = tempdir().unwrap();
    let script = write_script(tmp.path(), "echo 'compile error' >&2\nexit 1");
    let runner = ScriptRunner::new(script, tmp.path().join("cache"));

    let response = runner.run(&TestRequest::new("bad", 10, "x")).expect("run");
    assert_eq!(response.status, ResponseStatus::Error);
    assert_eq!(response.message, "compile error\n");
}

#[cfg(unix)]
#[test]
fn runner_reads_configured_output_file() {
    let tmp = tempdir().unwrap();
    let report = tmp.path().join("output.txt");
    let script = write_script(tmp.path(), &format!("echo measured > '{}'", report.display()));
    let runner =
        ScriptRunner::new(script, tmp.path().join("cache")).with_output_file(Some(report.clone()));

    let response = runner.run(&TestRequest::new("ok", 10, "x")).expect("run");
    assert!(response.is_success());
    assert_eq!(response.message, "measured\n");
    assert_eq!(runner.name(), "script");
}
