use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use super::types::{FeatureSchema, SchemaRegistry};

#[derive(Debug, Deserialize)]
struct Manifest {
    features: Vec<FeatureSchema>,
}

/// Load a schema registry from a feature manifest file.
///
/// The format is chosen by extension: `.yaml`/`.yml` parse as YAML, anything
/// else as JSON. Duplicate feature names keep the first entry; a feature with
/// an empty name is rejected.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if a feature has
/// an empty name.
pub fn load_manifest(path: &Path) -> anyhow::Result<SchemaRegistry> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

    let is_yaml = path
        .extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false);
    let manifest: Manifest = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))?
    };

    let mut registry = SchemaRegistry::new();
    for feature in manifest.features {
        if feature.name.is_empty() {
            anyhow::bail!("Feature with empty name in {}", path.display());
        }
        let name = feature.name.clone();
        if !registry.insert(feature) {
            tracing::warn!(feature = %name, "duplicate feature in manifest, keeping first");
        }
    }
    Ok(registry)
}
