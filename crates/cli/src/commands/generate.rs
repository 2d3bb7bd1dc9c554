use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tcgen_core::config::ToolConfig;
use tcgen_core::output::{DirectoryWriter, ProgramWriter};
use tcgen_core::{GeneratedProgram, SourceDocument};

use crate::commands::transformer_for;
use crate::{canonicalize_or_current, infer_program_name, read_sources};

/// Transform `doc` and hand the result to `writer`.
pub fn generate_with_writer(
    config: &ToolConfig,
    doc: &SourceDocument,
    writer: &dyn ProgramWriter,
) -> Result<(GeneratedProgram, PathBuf)> {
    let program = transformer_for(config)
        .transform(doc)
        .with_context(|| format!("Failed to generate harness program '{}'", doc.name))?;
    let path = writer
        .write(&program)
        .with_context(|| format!("Failed to write harness program '{}'", doc.name))?;
    Ok((program, path))
}

/// Generate a harness program from one or more annotated source files.
///
/// Writes `<directory>/<name>/main.<ext>`, or prints the program with `to_stdout`.
/// Without an explicit `name`, the first source's file stem is used.
pub fn generate_command(
    config: &ToolConfig,
    name: Option<&str>,
    sources: &[String],
    budget: Option<u64>,
    directory: Option<&str>,
    to_stdout: bool,
) -> Result<()> {
    let text = read_sources(sources)?;
    let name = match name {
        Some(n) => n.to_string(),
        None => infer_program_name(Path::new(&sources[0])),
    };
    let budget = budget.unwrap_or(config.default_budget);
    let doc = SourceDocument::new(&name, budget, text);

    if to_stdout {
        let program = transformer_for(config)
            .transform(&doc)
            .with_context(|| format!("Failed to generate harness program '{}'", name))?;
        println!("{}", program.text);
        return Ok(());
    }

    let dir = match directory {
        Some(d) => canonicalize_or_current(d)?,
        None => canonicalize_or_current(&config.output_dir.to_string_lossy())?,
    };
    let writer = DirectoryWriter::new(&dir, config.profile.extension.clone());
    let (program, path) = generate_with_writer(config, &doc, &writer)?;

    println!("tcgen v{}", tcgen_core::version());
    println!("Generated harness program:");
    println!("  Name: {}", program.name);
    println!("  Budget: {} ms", program.budget);
    println!("  Tests ({}):", program.entries.len());
    for entry in &program.entries {
        println!("    - {} -> {}", entry.test_name, entry.function_name);
    }
    println!("  Path: {}", path.display());

    Ok(())
}
