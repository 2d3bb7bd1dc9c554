use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

pub mod commands;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "TCGEN_LOG";

/// Install a stderr fmt subscriber; stdout stays reserved for command output.
///
/// `TCGEN_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Canonicalize a directory path if possible, falling back to the given string
/// relative to the current working directory.
pub fn canonicalize_or_current(dir: &str) -> Result<PathBuf> {
    let path = Path::new(dir);
    if path == Path::new(".") {
        Ok(env::current_dir().context("Failed to get current directory")?)
    } else {
        // Try to canonicalize; if it fails (e.g., path does not yet exist),
        // join it with the current dir to get an absolute path.
        match path.canonicalize() {
            Ok(p) => Ok(p),
            Err(_) => {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                Ok(cwd.join(path))
            }
        }
    }
}

/// Infer a program name from a source path.
///
/// If the path has no file stem (e.g., `/`), fallback to `unnamed-program`.
pub fn infer_program_name(path: &Path) -> String {
    path.file_stem().and_then(|os_str| os_str.to_str()).unwrap_or("unnamed-program").to_string()
}

/// Read every source file and join their contents with newlines, in argument order.
pub fn read_sources(paths: &[String]) -> Result<String> {
    if paths.is_empty() {
        return Err(anyhow!("At least one source file is required"));
    }
    let mut parts = Vec::with_capacity(paths.len());
    for path in paths {
        let body = fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {}", path))?;
        parts.push(body);
    }
    Ok(parts.join("\n"))
}
