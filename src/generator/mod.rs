//! # Generator Module
//!
//! The orchestration side of featuregen: walk a schema registry, expand the
//! catalog per feature, and forward finished artifacts to an emission sink.
//!
//! ## Overview
//!
//! ```text
//! SchemaRegistry → generate_features → catalog expansion → dedup → ArtifactSink
//! ```
//!
//! For each schema the command family is produced first, then the query
//! family. Artifact ids are deduplicated across the whole run with a
//! first-write-wins policy: a second artifact with an already-emitted id is
//! dropped silently (logged at `warn`), never overwritten.
//!
//! Each run is self-contained and idempotent — the orchestrator holds no
//! state across invocations, so repeated generation (e.g. once per
//! incremental build) always produces the same output set from the same
//! input snapshot.
//!
//! ## Sinks
//!
//! [`ArtifactSink`] is the host boundary: anything accepting
//! `(artifact id, source text)` pairs. Two implementations ship here —
//! [`FsSink`] writing `<id>.cs` files and [`MemorySink`] collecting in
//! memory.
//!
//! ## Boilerplate
//!
//! The three marker attribute sources consumed by annotated projects
//! (`FeatureConfigAttribute`, `FeatureAttribute`, `FeatureIgnoreAttribute`)
//! are fixed templates; [`write_boilerplate`] distributes them. The config
//! attribute's companion-project names reappear in [`GeneratorConfig`] as
//! descriptive metadata.

mod boilerplate;
mod config;
mod emit;
mod generate;

#[cfg(test)]
mod tests;

pub use boilerplate::{boilerplate_sources, write_boilerplate};
pub use config::{
    load_config, resolve_config_path, GeneratorConfig, ProjectsConfig, CONFIG_FILE_NAME,
};
pub use emit::{ArtifactSink, FsSink, MemorySink};
pub use generate::{generate_features, GenerationSummary};
