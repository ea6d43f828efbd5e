//! # featuregen
//!
//! **featuregen** is a deterministic code generator for CQRS feature scaffolding: it
//! turns a declarative schema — one entity name plus an ordered list of typed fields —
//! into the fixed catalog of C# command/query/handler sources (MediatR-style) that a
//! feature slice needs.
//!
//! ## Overview
//!
//! For each feature schema the generator derives up to 15 type definitions:
//! create-or-update and delete command pairs, list / paged-list / get-by-id query
//! triples, and an export query pair. Every artifact is rendered through a staged,
//! order-enforcing type builder and emitted as one canonical text block, so repeated
//! runs over the same input are byte-identical — safe to wire into an incremental
//! build.
//!
//! ## Architecture
//!
//! The library is organized into four modules, leaf-first:
//!
//! - **[`builder`]** - Definition model and the typestate [`TypeBuilder`]: construction
//!   order (namespace → imports → kind → name → body → build) is enforced at compile
//!   time, and `build()` consumes the builder so an artifact is rendered exactly once
//! - **[`schema`]** - Normalized [`FeatureSchema`] records, the six operation toggles,
//!   the caller-owned first-write-wins [`SchemaRegistry`], and the YAML/JSON manifest
//!   loader
//! - **[`catalog`]** - The fixed mapping from one schema to its command and query
//!   artifact families
//! - **[`generator`]** - Orchestration over a registry, duplicate-id suppression,
//!   emission sinks ([`FsSink`], [`MemorySink`]), TOML configuration, and the marker
//!   attribute boilerplate
//!
//! ### Generation Flow
//!
//! ```text
//! features.yaml → schema::load_manifest → SchemaRegistry
//!     → generator::generate_features
//!         → catalog::command_artifacts / catalog::query_artifacts
//!             → TypeBuilder::create()...build() → Artifact { id, text }
//!         → first-write-wins dedup → ArtifactSink
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use featuregen::{
//!     generate_features, FeatureSchema, FieldSpec, GeneratorConfig, MemorySink,
//!     SchemaRegistry,
//! };
//!
//! let mut registry = SchemaRegistry::new();
//! registry.insert(FeatureSchema::new(
//!     "Widget",
//!     vec![FieldSpec::new("int", "Id"), FieldSpec::new("string", "Title")],
//! ));
//!
//! let mut sink = MemorySink::new();
//! let summary = generate_features(&registry, &GeneratorConfig::default(), &mut sink)?;
//! assert_eq!(summary.emitted, 15);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## CLI
//!
//! The same flow is available as the `featuregen-gen` binary:
//!
//! ```bash
//! featuregen-gen generate --manifest features.yaml --output src/Generated
//! featuregen-gen boilerplate --output src/Markers
//! ```
//!
//! ## Determinism
//!
//! The core is pure computation over in-memory data: no timestamps, no randomness, no
//! ordering dependence on hash maps. Each run operates on its own input snapshot and
//! holds no state across invocations; duplicate artifact ids within one run are
//! resolved first-write-wins.

pub mod builder;
pub mod catalog;
pub mod cli;
pub mod generator;
pub mod schema;

pub use builder::{Artifact, TypeBuilder, TypeKind};
pub use generator::{
    generate_features, write_boilerplate, ArtifactSink, FsSink, GenerationSummary,
    GeneratorConfig, MemorySink,
};
pub use schema::{load_manifest, FeatureSchema, FeatureToggles, FieldSpec, SchemaRegistry};
