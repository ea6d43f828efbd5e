//! Boilerplate distribution: the three static marker-attribute sources that
//! annotated projects compile against. Fixed text, rendered from Askama
//! templates; nothing here feeds back into the catalog.

use anyhow::Context;
use askama::Template;
use std::fs;
use std::path::Path;

/// Marker carrying companion project names; descriptive metadata only.
#[derive(Template)]
#[template(path = "feature_config_attribute.cs.txt", escape = "none")]
struct FeatureConfigAttributeTemplate;

/// Marker declaring an entity eligible, with the six operation toggles.
#[derive(Template)]
#[template(path = "feature_attribute.cs.txt", escape = "none")]
struct FeatureAttributeTemplate;

/// Marker excluding one member from the extracted field list.
#[derive(Template)]
#[template(path = "feature_ignore_attribute.cs.txt", escape = "none")]
struct FeatureIgnoreAttributeTemplate;

/// Render the three marker sources as `(type name, source text)` pairs.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn boilerplate_sources() -> anyhow::Result<Vec<(&'static str, String)>> {
    Ok(vec![
        (
            "FeatureConfigAttribute",
            FeatureConfigAttributeTemplate.render()?,
        ),
        ("FeatureAttribute", FeatureAttributeTemplate.render()?),
        (
            "FeatureIgnoreAttribute",
            FeatureIgnoreAttributeTemplate.render()?,
        ),
    ])
}

/// Write the three marker sources to `<dir>/<Name>.cs`.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a file cannot be
/// written.
pub fn write_boilerplate(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    for (name, text) in boilerplate_sources()? {
        let path = dir.join(format!("{name}.cs"));
        fs::write(&path, text)
            .with_context(|| format!("Failed to write boilerplate: {}", path.display()))?;
        println!("✅ Wrote {}", path.display());
    }
    Ok(())
}
