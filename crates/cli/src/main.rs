use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tcgen::commands::{
    generate_command, list_results_command, load_tool_config, markers_command, package_command,
    plot_command, run_command, RunOverrides,
};
use tcgen::init_tracing;

/// Time-complexity harness generator CLI.
///
/// This CLI is a thin wrapper around `tcgen-core` (exposed in code as `tcgen_core`).
/// All substantive logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "tcgen",
    version,
    about = "Generate time-complexity harness programs from marked C/C++ sources",
    long_about = None
)]
struct Cli {
    /// Optional tool config file (JSON or YAML).
    #[arg(long, global = true)]
    config: Option<String>,

    /// Enable debug logging (overridden by TCGEN_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transform marked sources into a harness program.
    ///
    /// Mark each function to measure with `// ~TC-TEST~ [NAME-OF-TEST]` on the
    /// line above it. The program is written to `<directory>/<name>/main.cpp`.
    Generate {
        /// Source files, concatenated in order.
        #[arg(required = true)]
        sources: Vec<String>,

        /// Name of the program (and its output directory). Defaults to the first
        /// source's file stem.
        #[arg(long, short)]
        name: Option<String>,

        /// Time budget in milliseconds. Defaults to the config value (5000).
        #[arg(long, short)]
        budget: Option<u64>,

        /// Parent directory for the generated program. Defaults to the config value.
        #[arg(long, short)]
        directory: Option<String>,

        /// Print the program instead of writing it.
        #[arg(long, default_value_t = false)]
        stdout: bool,
    },

    /// List the test entries that would be generated.
    Markers {
        #[arg(required = true)]
        sources: Vec<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Package a source file as a JSON request (`<out-dir>/<name>.json`).
    Package {
        name: String,

        /// Time budget in milliseconds (the harness default is 5000).
        budget: u64,

        /// Annotated source file to embed.
        file: String,

        #[arg(long, default_value = ".")]
        out_dir: String,
    },

    /// Run a JSON request through the external test script.
    Run {
        /// Path to the request JSON.
        request: String,

        /// Build-and-run script, invoked as `<script> <name> <budget> <path>`.
        #[arg(long)]
        script: Option<String>,

        /// Directory the request code is cached in before running.
        #[arg(long)]
        cache_dir: Option<String>,

        /// File the script writes its report to (stdout is used otherwise).
        #[arg(long)]
        output_file: Option<String>,

        /// Emit the response as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List saved result documents.
    ListResults {
        #[arg(long)]
        data_dir: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Render a result document as an SVG scatterplot.
    Plot {
        /// Result JSON (`{"data": {<series>: {"x": [...], "y": [...]}}}`).
        result: String,

        /// Output SVG path. Defaults to the result path with a `.svg` extension.
        #[arg(long, short)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_tool_config(cli.config.as_deref())?;

    match cli.command {
        Command::Generate { sources, name, budget, directory, stdout } => generate_command(
            &config,
            name.as_deref(),
            &sources,
            budget,
            directory.as_deref(),
            stdout,
        )?,
        Command::Markers { sources, json } => markers_command(&config, &sources, json)?,
        Command::Package { name, budget, file, out_dir } => {
            package_command(&name, budget, &file, &out_dir)?;
        }
        Command::Run { request, script, cache_dir, output_file, json } => {
            let overrides = RunOverrides { script, cache_dir, output_file };
            let response = run_command(&config, &request, &overrides, json)?;
            if !response.is_success() {
                return Err(anyhow!("Test run reported {}", response.status.as_str()));
            }
        }
        Command::ListResults { data_dir, json } => {
            list_results_command(&config, data_dir.as_deref(), json)?
        }
        Command::Plot { result, output } => {
            plot_command(&result, output.as_deref())?;
        }
    }

    Ok(())
}
