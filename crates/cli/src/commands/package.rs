use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tcgen_core::interchange::TestRequest;
use tcgen_core::output::validate_program_name;

use crate::canonicalize_or_current;

/// Package a source file as a `{name, budget, code}` request at `<out_dir>/<name>.json`.
pub fn package_command(name: &str, budget: u64, file: &str, out_dir: &str) -> Result<PathBuf> {
    validate_program_name(name)?;
    let request = TestRequest::from_source_file(name, budget, Path::new(file))
        .with_context(|| format!("Failed to package {}", file))?;

    let dir = canonicalize_or_current(out_dir)?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output dir: {}", dir.display()))?;
    let path = dir.join(format!("{name}.json"));

    let json = serde_json::to_string_pretty(&request)?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write request: {}", path.display()))?;

    println!("Packaged request:");
    println!("  Name: {}", request.name);
    println!("  Budget: {} ms", request.budget);
    println!("  Path: {}", path.display());

    Ok(path)
}
