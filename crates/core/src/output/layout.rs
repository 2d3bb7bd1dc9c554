use std::path::{Path, PathBuf};

/// On-disk location of one generated program.
///
/// This is derived from a chosen parent directory. It does *not* perform any IO itself;
/// writers are responsible for creating the directory and file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramLayout {
    /// Parent directory holding every generated program.
    pub root: PathBuf,
    /// Per-program directory (`<root>/<name>`).
    pub program_dir: PathBuf,
    /// Generated source file (`<root>/<name>/main.<ext>`).
    pub source_path: PathBuf,
}

impl ProgramLayout {
    /// Compute the layout for program `name` under `root`.
    ///
    /// This does *not* touch the filesystem or validate `name`.
    pub fn new(root: impl AsRef<Path>, name: &str, extension: &str) -> Self {
        let root = root.as_ref().to_path_buf();
        let program_dir = root.join(name);
        let source_path = program_dir.join(format!("main.{extension}"));
        Self { root, program_dir, source_path }
    }

    /// Source path relative to `root`, for display.
    pub fn source_path_relative_string(&self) -> String {
        match self.source_path.strip_prefix(&self.root) {
            Ok(rel) => rel.to_string_lossy().to_string(),
            Err(_) => self.source_path.to_string_lossy().to_string(),
        }
    }
}
