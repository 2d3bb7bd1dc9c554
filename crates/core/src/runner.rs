use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::RunnerConfig;
use crate::interchange::{TestRequest, TestResponse};
use crate::output::validate_program_name;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to prepare {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to spawn {script}: {source}")]
    Spawn {
        script: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Captured result of one script invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
    pub success: bool,
}

/// Trait implemented by anything that can compile and measure a request.
pub trait TestRunner: Send + Sync {
    fn run(&self, request: &TestRequest) -> Result<TestResponse, RunError>;
    fn name(&self) -> &'static str;
}

/// Runner that shells out to an external build-and-run script.
///
/// The request code is written to `<cache_dir>/<name>.cpp` and the script is
/// invoked as `<script> <name> <budget> <path>`.
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    pub script: PathBuf,
    pub cache_dir: PathBuf,
    pub output_file: Option<PathBuf>,
}

impl ScriptRunner {
    pub fn new(script: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self { script: script.into(), cache_dir: cache_dir.into(), output_file: None }
    }

    pub fn from_config(config: &RunnerConfig) -> Self {
        Self {
            script: config.script.clone(),
            cache_dir: config.cache_dir.clone(),
            output_file: config.output_file.clone(),
        }
    }

    pub fn with_output_file(mut self, path: Option<PathBuf>) -> Self {
        self.output_file = path;
        self
    }

    /// Path the request code is cached at before the script runs.
    pub fn cached_source_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(format!("{name}.cpp"))
    }

    fn invoke(&self, request: &TestRequest, source_path: &Path) -> Result<ProcessOutput, RunError> {
        let output = Command::new(&self.script)
            .arg(&request.name)
            .arg(request.budget.to_string())
            .arg(source_path)
            .output()
            .map_err(|source| RunError::Spawn { script: self.script.clone(), source })?;
        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            code: output.status.code(),
            success: output.status.success(),
        })
    }
}

impl TestRunner for ScriptRunner {
    fn run(&self, request: &TestRequest) -> Result<TestResponse, RunError> {
        validate_program_name(&request.name)
            .map_err(|e| RunError::InvalidRequest(e.to_string()))?;

        fs::create_dir_all(&self.cache_dir)
            .map_err(|source| RunError::Io { path: self.cache_dir.clone(), source })?;
        let source_path = self.cached_source_path(&request.name);
        fs::write(&source_path, &request.code)
            .map_err(|source| RunError::Io { path: source_path.clone(), source })?;

        info!(
            script = %self.script.display(),
            name = %request.name,
            budget = request.budget,
            "running test script"
        );
        let output = self.invoke(request, &source_path)?;
        debug!(
            stdout = %output.stdout,
            stderr = %output.stderr,
            code = ?output.code,
            "script finished"
        );

        Ok(response_from_output(&output, self.output_file.as_deref()))
    }

    fn name(&self) -> &'static str {
        "script"
    }
}

/// Classify a finished invocation.
///
/// A non-zero exit or any stderr output is an error; otherwise the report is
/// read from `output_file` when configured, falling back to stdout.
pub fn response_from_output(output: &ProcessOutput, output_file: Option<&Path>) -> TestResponse {
    if !output.success || !output.stderr.is_empty() {
        let message = if output.stderr.is_empty() {
            match output.code {
                Some(code) => format!("test script exited with status {code}"),
                None => "test script terminated by signal".to_string(),
            }
        } else {
            output.stderr.clone()
        };
        warn!(%message, "test script reported an error");
        return TestResponse::error(message);
    }

    match output_file {
        Some(path) => match fs::read_to_string(path) {
            Ok(report) => TestResponse::success(report),
            Err(e) => TestResponse::error(format!("Failed to read {}: {e}", path.display())),
        },
        None => TestResponse::success(output.stdout.clone()),
    }
}
