use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default harness time budget in milliseconds.
pub const DEFAULT_BUDGET: u64 = 5000;

/// Default comment token flagging a function for measurement.
pub const DEFAULT_MARKER: &str = "// ~TC-TEST~";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse config YAML at {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unsupported config format '{0}'; expected json, yaml, or yml")]
    UnsupportedFormat(String),
}

/// Names of the external harness API the generated program calls into.
///
/// The harness itself lives in a C++ header; only these names are known here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessProfile {
    /// Comment token marking a function for measurement.
    pub marker: String,
    /// Text whose presence means the source already has an entry point.
    pub entry_point_signature: String,
    /// Header path placed in the `#include` directive.
    pub header: String,
    /// Harness class name.
    pub harness_type: String,
    /// Local variable name of the harness instance.
    pub instance: String,
    /// Boolean member toggling automatic interval selection.
    pub auto_interval_field: String,
    /// Method taking `(label, function)` and running the measurement.
    pub measure_method: String,
    /// Extension of the generated source file.
    pub extension: String,
}

impl Default for HarnessProfile {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            entry_point_signature: "int main(".to_string(),
            header: "time_complexity.h".to_string(),
            harness_type: "time_complexity".to_string(),
            instance: "tc".to_string(),
            auto_interval_field: "auto_interval".to_string(),
            measure_method: "compute_complexity".to_string(),
            extension: "cpp".to_string(),
        }
    }
}

/// Settings for the external build-and-run script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Script invoked as `<script> <name> <budget> <path>`.
    pub script: PathBuf,
    /// Directory receiving `<name>.cpp` before the script runs.
    pub cache_dir: PathBuf,
    /// File the script writes its report to; stdout is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            script: PathBuf::from("./test_input"),
            cache_dir: PathBuf::from("cpp-file-cache"),
            output_file: None,
        }
    }
}

/// Serializable tool configuration.
///
/// Every field has a default, so a partial file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub default_budget: u64,
    /// Parent directory for generated `<name>/main.<ext>` programs.
    pub output_dir: PathBuf,
    /// Directory holding saved result documents.
    pub data_dir: PathBuf,
    pub profile: HarnessProfile,
    pub runner: RunnerConfig,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            default_budget: DEFAULT_BUDGET,
            output_dir: PathBuf::from("."),
            data_dir: PathBuf::from("data"),
            profile: HarnessProfile::default(),
            runner: RunnerConfig::default(),
        }
    }
}

impl ToolConfig {
    /// Load a config file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let body = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        match ext {
            "json" => serde_json::from_str(&body)
                .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source }),
            "yaml" | "yml" => serde_yaml::from_str(&body)
                .map_err(|source| ConfigError::Yaml { path: path.to_path_buf(), source }),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Load `path` when given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
