use std::fs;
use std::path::Path;

use tcgen::{canonicalize_or_current, infer_program_name, read_sources};
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_resolves_existing_path() {
    let tmp = tempdir().expect("tempdir");
    let subdir = tmp.path().join("nested");
    fs::create_dir_all(&subdir).expect("create nested");

    let result = canonicalize_or_current(subdir.to_str().unwrap()).expect("canonicalize nested");
    assert_eq!(result, subdir.canonicalize().expect("canonicalize subdir"));
}

#[test]
fn canonicalize_or_current_keeps_missing_paths_absolute() {
    let result = canonicalize_or_current("does-not-exist-yet").expect("resolve");
    assert!(result.is_absolute());
    assert!(result.ends_with("does-not-exist-yet"));
}

#[test]
fn infer_program_name_uses_file_stem() {
    assert_eq!(infer_program_name(Path::new("/tmp/input-#1.cpp")), "input-#1");
    assert_eq!(infer_program_name(Path::new("src/square.cc")), "square");
}

#[test]
fn infer_program_name_falls_back_when_missing() {
    assert_eq!(infer_program_name(Path::new("/")), "unnamed-program");
}

#[test]
fn read_sources_joins_files_in_order() {
    let tmp = tempdir().unwrap();
    let a = tmp.path().join("a.cpp");
    let b = tmp.path().join("b.cpp");
    fs::write(&a, "int a;").unwrap();
    fs::write(&b, "int b;").unwrap();

    let joined = read_sources(&[
        a.to_string_lossy().to_string(),
        b.to_string_lossy().to_string(),
    ])
    .expect("read");
    assert_eq!(joined, "int a;\nint b;");
}

#[test]
fn read_sources_reports_missing_file() {
    let err = read_sources(&["/definitely/missing.cpp".to_string()]).unwrap_err();
    assert!(err.to_string().contains("Failed to read source file"), "unexpected error: {err}");
}

#[test]
fn read_sources_requires_at_least_one_path() {
    assert!(read_sources(&[]).is_err());
}
