//! Request/response payloads exchanged with a test service or script wrapper.
//!
//! A request carries `{name, budget, code}`; a response carries
//! `{status, message}` with status `SUCCESS` or `ERROR`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::SourceDocument;

#[derive(Debug, Error)]
pub enum InterchangeError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request must contain fields for name, budget, and code (missing: {})", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("request field '{0}' has the wrong type")]
    InvalidField(String),
}

/// A single test submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRequest {
    pub name: String,
    /// Time budget in milliseconds.
    pub budget: u64,
    /// Annotated C/C++ source.
    pub code: String,
}

impl TestRequest {
    pub fn new(name: impl Into<String>, budget: u64, code: impl Into<String>) -> Self {
        Self { name: name.into(), budget, code: code.into() }
    }

    /// Package a source file as a request.
    pub fn from_source_file(
        name: impl Into<String>,
        budget: u64,
        path: &Path,
    ) -> Result<Self, InterchangeError> {
        let code = std::fs::read_to_string(path)
            .map_err(|source| InterchangeError::Read { path: path.to_path_buf(), source })?;
        Ok(Self::new(name, budget, code))
    }

    /// Parse a request body, naming every missing field rather than the first.
    pub fn parse(body: &str) -> Result<Self, InterchangeError> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        let missing: Vec<String> = ["name", "budget", "code"]
            .iter()
            .filter(|field| value.get(**field).is_none())
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(InterchangeError::MissingFields(missing));
        }

        let invalid = |field: &str| InterchangeError::InvalidField(field.to_string());
        let name = value["name"].as_str().ok_or_else(|| invalid("name"))?;
        let budget = value["budget"].as_u64().ok_or_else(|| invalid("budget"))?;
        let code = value["code"].as_str().ok_or_else(|| invalid("code"))?;
        Ok(Self::new(name, budget, code))
    }

    /// Read and parse a request file.
    pub fn load(path: &Path) -> Result<Self, InterchangeError> {
        let body = std::fs::read_to_string(path)
            .map_err(|source| InterchangeError::Read { path: path.to_path_buf(), source })?;
        Self::parse(&body)
    }

    pub fn to_document(&self) -> SourceDocument {
        SourceDocument::new(&self.name, self.budget, &self.code)
    }
}

/// Outcome reported for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    Error,
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::Success => "SUCCESS",
            ResponseStatus::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResponse {
    pub status: ResponseStatus,
    pub message: String,
}

impl TestResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self { status: ResponseStatus::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { status: ResponseStatus::Error, message: message.into() }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}
