//! Generator configuration, loaded from a TOML file that sits alongside the
//! feature manifest.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file name, resolved next to the manifest.
pub const CONFIG_FILE_NAME: &str = "featuregen.toml";

/// Configuration for one generation run.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Root namespace for generated artifacts; `<root>.<Entity>.Commands`
    /// and `<root>.<Entity>.Queries` hang off it
    #[serde(default = "default_root_namespace")]
    pub root_namespace: String,

    /// Companion project names; descriptive metadata only
    #[serde(default)]
    pub projects: ProjectsConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root_namespace: default_root_namespace(),
            projects: ProjectsConfig::default(),
        }
    }
}

fn default_root_namespace() -> String {
    "Generators".to_string()
}

/// Companion project/layer names, mirroring the ten properties of the
/// feature-config marker attribute. The catalog never consults these; they
/// exist so hosts can describe where generated families are meant to land.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectsConfig {
    pub commands: Option<String>,
    pub queries: Option<String>,
    pub profiles: Option<String>,
    pub filter_specifications: Option<String>,
    pub validators: Option<String>,
    pub repositories: Option<String>,
    pub constants: Option<String>,
    pub managers: Option<String>,
    pub endpoints: Option<String>,
    pub controllers: Option<String>,
}

/// Load configuration from a TOML file.
///
/// # Returns
///
/// `Ok(Some(config))` if the file exists and parses, `Ok(None)` if it does
/// not exist (not an error), `Err` if it exists but fails to parse.
pub fn load_config(config_path: &Path) -> anyhow::Result<Option<GeneratorConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let config: GeneratorConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;
    Ok(Some(config))
}

/// Resolve the config path for a run.
///
/// Priority: an explicitly provided path that exists, then
/// `featuregen.toml` next to the manifest, then none.
pub fn resolve_config_path(explicit_path: Option<&Path>, manifest_path: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let candidate = manifest_path.parent()?.join(CONFIG_FILE_NAME);
    if candidate.exists() {
        Some(candidate)
    } else {
        None
    }
}
