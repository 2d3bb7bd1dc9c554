use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tcgen_core::config::ToolConfig;
use tcgen_core::results::{color_for, list_results, plot_title, render_svg, ResultDocument};

/// List saved result entries in the data directory.
pub fn list_results_command(config: &ToolConfig, data_dir: Option<&str>, json: bool) -> Result<()> {
    let dir = data_dir.map(PathBuf::from).unwrap_or_else(|| config.data_dir.clone());
    let names = list_results(&dir)
        .with_context(|| format!("Failed to list results in {}", dir.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    println!("Saved results ({}):", names.len());
    if names.is_empty() {
        println!("  (none)");
    }
    for name in names {
        println!("  - {}", name);
    }
    Ok(())
}

/// Default SVG path: the result path with its extension swapped for `.svg`.
pub fn default_plot_path(result: &Path) -> PathBuf {
    result.with_extension("svg")
}

/// Render a result document as an SVG scatterplot and print a per-series summary.
pub fn plot_command(result: &str, output: Option<&str>) -> Result<PathBuf> {
    let result_path = Path::new(result);
    let doc = ResultDocument::load(result_path)
        .with_context(|| format!("Failed to load result document {}", result))?;

    let title = plot_title(result_path);
    let svg = render_svg(&title, &doc);
    let out_path = output.map(PathBuf::from).unwrap_or_else(|| default_plot_path(result_path));
    fs::write(&out_path, svg)
        .with_context(|| format!("Failed to write plot: {}", out_path.display()))?;

    println!("Plot: {}", title);
    for (name, series) in doc.ordered_series() {
        let max_x = series.max_x().map(|x| x.to_string()).unwrap_or_else(|| "-".to_string());
        println!("  - {} [{}] points={} max_x={}", name, color_for(name), series.len(), max_x);
    }
    println!("  Written: {}", out_path.display());

    Ok(out_path)
}
