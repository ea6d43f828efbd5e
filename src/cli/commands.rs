use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::generator::{
    generate_features, load_config, resolve_config_path, write_boilerplate, FsSink,
    GeneratorConfig,
};
use crate::schema::load_manifest;

/// Command-line interface for featuregen
#[derive(Parser)]
#[command(name = "featuregen-gen")]
#[command(about = "featuregen CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the CQRS artifact set from a feature manifest
    Generate {
        /// Path to the feature manifest file (YAML or JSON)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Output directory for generated sources
        #[arg(short, long, default_value = "generated")]
        output: PathBuf,

        /// Path to featuregen.toml (default: alongside the manifest)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Write the marker attribute boilerplate sources
    Boilerplate {
        /// Output directory for the marker sources
        #[arg(short, long, default_value = "generated")]
        output: PathBuf,
    },
}

/// Execute a parsed CLI invocation.
///
/// # Errors
///
/// Returns an error if the manifest or config cannot be loaded, or if
/// writing output fails.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate {
            manifest,
            output,
            config,
        } => {
            let registry = load_manifest(manifest)?;
            let config = match resolve_config_path(config.as_deref(), manifest) {
                Some(path) => load_config(&path)?.unwrap_or_default(),
                None => GeneratorConfig::default(),
            };
            let mut sink = FsSink::new(output.clone())?;
            let summary = generate_features(&registry, &config, &mut sink)?;
            println!(
                "✅ Generated {} artifacts for {} features ({} duplicates suppressed)",
                summary.emitted, summary.features, summary.suppressed
            );
            Ok(())
        }
        Commands::Boilerplate { output } => write_boilerplate(output),
    }
}
