use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

const SQUARE: &str = "// ~TC-TEST~\nint square(int x){\n    return x * x;\n}\n";

/// Running without a subcommand should fail with usage help.
#[test]
fn missing_subcommand_fails() {
    assert_cmd::cargo::cargo_bin_cmd!("tcgen").assert().failure();
}

/// generate writes `<dir>/<name>/main.cpp` with the harness appended.
#[test]
fn generate_writes_program_into_named_dir() {
    let dir = tempdir().expect("tempdir");
    let src = dir.path().join("square.cpp");
    fs::write(&src, SQUARE).unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("tcgen")
        .arg("generate")
        .arg(&src)
        .arg("--name")
        .arg("square-prog")
        .arg("--budget")
        .arg("1200")
        .arg("--directory")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("tcgen v{}", tcgen_core::version())))
        .stdout(predicate::str::contains("square -> square"));

    let main =
        fs::read_to_string(dir.path().join("square-prog").join("main.cpp")).expect("main.cpp");
    assert!(main.starts_with("#include \"time_complexity.h\"\n"));
    assert!(main.contains("time_complexity tc(1200);"));
    assert!(main.contains("tc.compute_complexity(\"square\", square);"));
}

/// --stdout prints the program and writes nothing.
#[test]
fn generate_stdout_prints_program() {
    let dir = tempdir().expect("tempdir");
    let src = dir.path().join("quad.cpp");
    fs::write(&src, "// ~TC-TEST~ quad_test\nlong long quad(long long n){ return n * n; }\n")
        .unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("tcgen")
        .current_dir(dir.path())
        .arg("generate")
        .arg(&src)
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::contains("tc.compute_complexity(\"quad_test\", quad);"))
        .stdout(predicate::str::contains("time_complexity tc(5000);"));

    assert!(!dir.path().join("quad").exists());
}

/// A source that already has `main` is rejected with a non-zero exit.
#[test]
fn generate_fails_on_existing_main() {
    let dir = tempdir().expect("tempdir");
    let src = dir.path().join("has_main.cpp");
    fs::write(&src, "// ~TC-TEST~\nint f(int n){ return n; }\nint main(){}\n").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("tcgen")
        .arg("generate")
        .arg(&src)
        .arg("--directory")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already defines an entry point"));

    assert!(!dir.path().join("has_main").exists());
}

/// Without --name the program is named after the first source file.
#[test]
fn generate_names_program_after_first_source() {
    let dir = tempdir().expect("tempdir");
    let first = dir.path().join("cube.cpp");
    let second = dir.path().join("helpers.cpp");
    fs::write(&first, "// ~TC-TEST~\nint cube(int n){ return n * n * n; }\n").unwrap();
    fs::write(&second, "int unused(int n){ return n; }\n").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("tcgen")
        .arg("generate")
        .arg(&first)
        .arg(&second)
        .arg("--directory")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: cube"));

    let main = fs::read_to_string(dir.path().join("cube").join("main.cpp")).expect("main.cpp");
    assert!(main.contains("int unused(int n)"));
    assert!(main.contains("tc.compute_complexity(\"cube\", cube);"));
}

/// markers --json lists resolved entries.
#[test]
fn markers_json_lists_entries() {
    let dir = tempdir().expect("tempdir");
    let src = dir.path().join("two.cpp");
    fs::write(&src, "// ~TC-TEST~ first\nvoid a(int n){}\n// ~TC-TEST~\nvoid b(int n){}\n")
        .unwrap();

    let output = assert_cmd::cargo::cargo_bin_cmd!("tcgen")
        .arg("markers")
        .arg(&src)
        .arg("--json")
        .output()
        .expect("run markers");
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    let entries = parsed.as_array().expect("array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["test_name"], "first");
    assert_eq!(entries[1]["function_name"], "b");
    assert_eq!(entries[1]["index"], 1);
}

/// package writes a request JSON that round-trips the source.
#[test]
fn package_writes_request_json() {
    let dir = tempdir().expect("tempdir");
    let src = dir.path().join("input.cpp");
    fs::write(&src, SQUARE).unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("tcgen")
        .arg("package")
        .arg("input-1")
        .arg("750")
        .arg(&src)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .success();

    let body = fs::read_to_string(dir.path().join("input-1.json")).expect("request json");
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["name"], "input-1");
    assert_eq!(parsed["budget"], 750);
    assert_eq!(parsed["code"], SQUARE);
}

/// plot renders an SVG next to the result file.
#[test]
fn plot_writes_svg_next_to_result() {
    let dir = tempdir().expect("tempdir");
    let result = dir.path().join("run-3.json");
    fs::write(&result, r#"{"data": {"O(n)": {"x": [1, 2, 3], "y": [1.0, 1.1, 0.9]}}}"#).unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("tcgen")
        .arg("plot")
        .arg(&result)
        .assert()
        .success()
        .stdout(predicate::str::contains("O(n) [aqua] points=3"));

    let svg = fs::read_to_string(dir.path().join("run-3.svg")).expect("svg");
    assert!(svg.contains("Data Scatterplot for run-3"));
}

/// list-results prints saved entries from --data-dir.
#[test]
fn list_results_prints_entries() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("run-1.json"), "{}").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("tcgen")
        .arg("list-results")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("run-1.json"));
}

/// A bad --config path fails before any command runs.
#[test]
fn missing_config_file_fails() {
    let dir = tempdir().expect("tempdir");
    assert_cmd::cargo::cargo_bin_cmd!("tcgen")
        .arg("--config")
        .arg(dir.path().join("absent.json"))
        .arg("list-results")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load tool config"));
}

/// run reports a transform error as an ERROR response without spawning the script.
#[test]
fn run_rejects_request_without_markers() {
    let dir = tempdir().expect("tempdir");
    let request = dir.path().join("req.json");
    fs::write(&request, r#"{"name":"nomark","budget":10,"code":"int f(int n);"}"#).unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("tcgen")
        .arg("run")
        .arg(&request)
        .arg("--script")
        .arg(dir.path().join("never-spawned"))
        .arg("--cache-dir")
        .arg(dir.path().join("cache"))
        .arg("--json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"status\": \"ERROR\""))
        .stdout(predicate::str::contains("no test marker found"));

    assert!(!dir.path().join("cache").exists());
}
