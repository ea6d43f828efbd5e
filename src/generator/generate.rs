use std::collections::HashSet;

use crate::builder::Artifact;
use crate::catalog::{command_artifacts, query_artifacts};
use crate::schema::SchemaRegistry;

use super::config::GeneratorConfig;
use super::emit::ArtifactSink;

/// Totals for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Schemas processed
    pub features: usize,
    /// Artifacts forwarded to the sink
    pub emitted: usize,
    /// Duplicate artifact ids dropped (first write wins)
    pub suppressed: usize,
}

/// Run the full catalog over every schema in the registry.
///
/// For each schema the command family is expanded first, then the query
/// family. An artifact whose id was already emitted this run is dropped
/// silently; the first registration wins. The run holds no state beyond its
/// own seen-set, so repeated invocations over the same registry are
/// idempotent and byte-identical.
///
/// # Errors
///
/// Propagates the first sink failure; generation stops there.
pub fn generate_features(
    registry: &SchemaRegistry,
    config: &GeneratorConfig,
    sink: &mut dyn ArtifactSink,
) -> anyhow::Result<GenerationSummary> {
    let mut seen = HashSet::new();
    let mut summary = GenerationSummary::default();

    for schema in registry.iter() {
        summary.features += 1;
        tracing::debug!(feature = %schema.name, "expanding artifact catalog");

        let mut artifacts = command_artifacts(schema, &config.root_namespace);
        artifacts.extend(query_artifacts(schema, &config.root_namespace));

        for artifact in artifacts {
            forward(&artifact, &mut seen, sink, &mut summary)?;
        }
    }

    Ok(summary)
}

// First-write-wins: an id that was already emitted this run is dropped, never
// overwritten.
pub(crate) fn forward(
    artifact: &Artifact,
    seen: &mut HashSet<String>,
    sink: &mut dyn ArtifactSink,
    summary: &mut GenerationSummary,
) -> anyhow::Result<()> {
    if !seen.insert(artifact.id.clone()) {
        tracing::warn!(artifact = %artifact.id, "duplicate artifact id, keeping first");
        summary.suppressed += 1;
        return Ok(());
    }
    sink.accept(artifact)?;
    summary.emitted += 1;
    Ok(())
}
