use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tcgen_core::config::ToolConfig;
use tcgen_core::interchange::{TestRequest, TestResponse};
use tcgen_core::runner::{ScriptRunner, TestRunner};

use crate::commands::transformer_for;

/// Command-line overrides for the configured runner.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub script: Option<String>,
    pub cache_dir: Option<String>,
    pub output_file: Option<String>,
}

/// Build the script runner from config, applying any overrides.
pub fn script_runner(config: &ToolConfig, overrides: &RunOverrides) -> ScriptRunner {
    let mut runner = ScriptRunner::from_config(&config.runner);
    if let Some(script) = &overrides.script {
        runner.script = PathBuf::from(script);
    }
    if let Some(cache_dir) = &overrides.cache_dir {
        runner.cache_dir = PathBuf::from(cache_dir);
    }
    if let Some(output_file) = &overrides.output_file {
        runner.output_file = Some(PathBuf::from(output_file));
    }
    runner
}

/// Execute a request, rejecting unusable sources before the script is spawned.
///
/// Transformer failures become `ERROR` responses; runner failures (spawn, IO)
/// are returned as errors.
pub fn run_request(
    config: &ToolConfig,
    request: &TestRequest,
    runner: &dyn TestRunner,
) -> Result<TestResponse> {
    if let Err(e) = transformer_for(config).resolve_entries(&request.code) {
        return Ok(TestResponse::error(e.to_string()));
    }
    runner.run(request).with_context(|| {
        format!("Runner '{}' failed for request '{}'", runner.name(), request.name)
    })
}

/// Load a request file, run it, and print the response.
pub fn run_command(
    config: &ToolConfig,
    request_path: &str,
    overrides: &RunOverrides,
    json: bool,
) -> Result<TestResponse> {
    let request = TestRequest::load(Path::new(request_path))
        .with_context(|| format!("Failed to load request {}", request_path))?;
    let runner = script_runner(config, overrides);
    let response = run_request(config, &request, &runner)?;

    if json {
        let serialized = serde_json::to_string_pretty(&response)
            .context("Failed to serialize response to JSON")?;
        println!("{}", serialized);
    } else {
        println!("Test '{}' [{}]", request.name, response.status.as_str());
        if !response.message.is_empty() {
            println!("{}", response.message.trim_end());
        }
    }

    Ok(response)
}
