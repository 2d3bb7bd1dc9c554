use std::path::Path;

use anyhow::{Context, Result};
use tcgen_core::config::ToolConfig;
use tcgen_core::Transformer;
use tracing::debug;

/// Load the tool config from `--config`, or defaults when none was given.
pub fn load_tool_config(config: Option<&str>) -> Result<ToolConfig> {
    let loaded = ToolConfig::load_or_default(config.map(Path::new))
        .with_context(|| format!("Failed to load tool config at {}", config.unwrap_or_default()))?;
    debug!(source = config.unwrap_or("<defaults>"), "loaded tool config");
    Ok(loaded)
}

/// Transformer built from the config's harness profile.
pub fn transformer_for(config: &ToolConfig) -> Transformer {
    Transformer::new(config.profile.clone())
}
