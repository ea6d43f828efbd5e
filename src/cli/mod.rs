//! # CLI Module
//!
//! Command-line interface for the featuregen code generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate the CQRS artifact set from a feature manifest:
//!
//! ```bash
//! featuregen-gen generate --manifest features.yaml --output src/Generated
//! ```
//!
//! Options:
//! - `--manifest <FILE>` - Path to the feature manifest, YAML or JSON (required)
//! - `--output <DIR>` - Output directory for generated sources (default: `generated`)
//! - `--config <FILE>` - Path to `featuregen.toml` (default: alongside the manifest)
//!
//! ### `boilerplate`
//!
//! Write the three marker attribute sources consumed by annotated projects:
//!
//! ```bash
//! featuregen-gen boilerplate --output src/Markers
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use featuregen::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! run_cli(Cli::parse())?;
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands};
