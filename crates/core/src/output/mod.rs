//! Persistence of generated programs.
//!
//! Generated programs land at `<root>/<name>/main.<ext>`. The transformer never
//! touches the filesystem itself; callers hand a `GeneratedProgram` to a
//! `ProgramWriter`:
//! - `DirectoryWriter`: real filesystem, atomic replace of `main.<ext>`
//! - `MemoryWriter`: in-memory map, for tests and dry runs

mod layout;

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

use crate::model::GeneratedProgram;

pub use layout::ProgramLayout;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Names become directory names, so separators and dot-entries are refused.
    #[error("Invalid program name '{0}': must be non-empty and contain no path separators")]
    InvalidName(String),

    #[error("Failed to create program dir {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write program {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Port for persisting generated programs.
pub trait ProgramWriter: Send + Sync {
    /// Persist `program`, returning where it was written.
    fn write(&self, program: &GeneratedProgram) -> Result<PathBuf, OutputError>;
}

/// Reject names that would escape or alias the output root.
pub fn validate_program_name(name: &str) -> Result<(), OutputError> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if bad {
        return Err(OutputError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Writes `<root>/<name>/main.<ext>` on the real filesystem.
///
/// The program directory is created when absent and tolerated when present;
/// the root itself must already exist. Content is staged in a temp file in the
/// program directory and renamed into place, so concurrent writes of the same
/// name never interleave.
#[derive(Debug, Clone)]
pub struct DirectoryWriter {
    root: PathBuf,
    extension: String,
}

impl DirectoryWriter {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self { root: root.into(), extension: extension.into() }
    }

    pub fn layout(&self, name: &str) -> ProgramLayout {
        ProgramLayout::new(&self.root, name, &self.extension)
    }
}

impl ProgramWriter for DirectoryWriter {
    fn write(&self, program: &GeneratedProgram) -> Result<PathBuf, OutputError> {
        validate_program_name(&program.name)?;
        let layout = self.layout(&program.name);

        match fs::create_dir(&layout.program_dir) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(source) => {
                return Err(OutputError::CreateDir { path: layout.program_dir.clone(), source })
            }
        }

        write_atomically(&layout.source_path, &program.text)?;
        info!(
            name = %program.name,
            path = %layout.source_path.display(),
            entries = program.entries.len(),
            "wrote harness program"
        );
        Ok(layout.source_path)
    }
}

/// Stage `contents` in a temp file beside `path`, then rename it over `path`.
///
/// The staged file is removed on drop if any step fails.
fn write_atomically(path: &Path, contents: &str) -> Result<(), OutputError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let write_err = |source: io::Error| OutputError::Write { path: path.to_path_buf(), source };

    let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
    staged.write_all(contents.as_bytes()).map_err(write_err)?;
    staged.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Keeps written programs in memory, keyed by the path a `DirectoryWriter` would use.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    root: PathBuf,
    extension: String,
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemoryWriter {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self { root: root.into(), extension: extension.into(), files: Mutex::new(BTreeMap::new()) }
    }

    /// Contents last written to `path`, if any.
    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().ok().and_then(|files| files.get(path).cloned())
    }

    /// All written paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().map(|files| files.keys().cloned().collect()).unwrap_or_default()
    }
}

impl ProgramWriter for MemoryWriter {
    fn write(&self, program: &GeneratedProgram) -> Result<PathBuf, OutputError> {
        validate_program_name(&program.name)?;
        let layout = ProgramLayout::new(&self.root, &program.name, &self.extension);
        let mut files = self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        files.insert(layout.source_path.clone(), program.text.clone());
        Ok(layout.source_path)
    }
}
