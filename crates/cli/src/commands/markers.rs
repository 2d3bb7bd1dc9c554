use anyhow::{Context, Result};
use serde::Serialize;
use tcgen_core::config::ToolConfig;

use crate::commands::transformer_for;
use crate::read_sources;

#[derive(Debug, Serialize)]
pub struct MarkerInfo {
    pub index: usize,
    pub offset: usize,
    pub test_name: String,
    pub function_name: String,
}

/// Resolve markers in the given sources without generating anything.
pub fn collect_markers(config: &ToolConfig, sources: &[String]) -> Result<Vec<MarkerInfo>> {
    let text = read_sources(sources)?;
    let transformer = transformer_for(config);
    let entries = transformer.resolve_entries(&text).context("Failed to resolve test markers")?;

    Ok(transformer
        .markers(&text)
        .zip(entries)
        .map(|(marker, entry)| MarkerInfo {
            index: marker.index,
            offset: marker.offset,
            test_name: entry.test_name,
            function_name: entry.function_name,
        })
        .collect())
}

/// List the test entries the generator would emit.
pub fn markers_command(config: &ToolConfig, sources: &[String], json: bool) -> Result<()> {
    let markers = collect_markers(config, sources)?;

    if json {
        let serialized =
            serde_json::to_string_pretty(&markers).context("Failed to serialize markers to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Markers ({}):", markers.len());
    for m in markers {
        println!("  - #{} @{}: {} -> {}", m.index, m.offset, m.test_name, m.function_name);
    }

    Ok(())
}
