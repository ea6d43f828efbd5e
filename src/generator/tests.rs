#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::builder::Artifact;
use crate::schema::{FeatureSchema, FieldSpec, SchemaRegistry};
use std::collections::HashSet;
use std::io::Write;

fn registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry.insert(FeatureSchema::new(
        "Widget",
        vec![FieldSpec::new("int", "Id"), FieldSpec::new("string", "Title")],
    ));
    registry.insert(FeatureSchema::new(
        "Gadget",
        vec![FieldSpec::new("int", "Id")],
    ));
    registry
}

#[test]
fn test_generate_full_registry() {
    let mut sink = MemorySink::new();
    let summary =
        generate_features(&registry(), &GeneratorConfig::default(), &mut sink).unwrap();
    assert_eq!(
        summary,
        GenerationSummary {
            features: 2,
            emitted: 30,
            suppressed: 0,
        }
    );
    assert_eq!(sink.artifacts().len(), 30);
    // Commands come first within each feature, features in insertion order.
    assert_eq!(sink.artifacts()[0].id, "AddEditWidgetCommand");
    assert_eq!(sink.artifacts()[15].id, "AddEditGadgetCommand");
}

#[test]
fn test_generate_is_idempotent() {
    let registry = registry();
    let config = GeneratorConfig::default();
    let mut first = MemorySink::new();
    let mut second = MemorySink::new();
    generate_features(&registry, &config, &mut first).unwrap();
    generate_features(&registry, &config, &mut second).unwrap();
    assert_eq!(first.artifacts(), second.artifacts());
}

#[test]
fn test_forward_suppresses_duplicate_ids() {
    let mut seen = HashSet::new();
    let mut sink = MemorySink::new();
    let mut summary = GenerationSummary::default();

    let first = Artifact {
        id: "Thing".to_string(),
        text: "first".to_string(),
    };
    let second = Artifact {
        id: "Thing".to_string(),
        text: "second".to_string(),
    };
    super::generate::forward(&first, &mut seen, &mut sink, &mut summary).unwrap();
    super::generate::forward(&second, &mut seen, &mut sink, &mut summary).unwrap();

    assert_eq!(summary.emitted, 1);
    assert_eq!(summary.suppressed, 1);
    assert_eq!(sink.artifacts().len(), 1);
    assert_eq!(sink.artifacts()[0].text, "first");
}

#[test]
fn test_fs_sink_writes_artifact_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = FsSink::new(dir.path().join("out")).unwrap();
    let summary =
        generate_features(&registry(), &GeneratorConfig::default(), &mut sink).unwrap();
    assert_eq!(summary.emitted, 30);

    let path = dir.path().join("out").join("AddEditWidgetCommand.cs");
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.starts_with("//Feature:Widget\n"));
    assert!(text.contains("public partial class AddEditWidgetCommand"));
}

#[test]
fn test_config_missing_file_is_none() {
    assert!(load_config(std::path::Path::new("/nonexistent/featuregen.toml"))
        .unwrap()
        .is_none());
}

#[test]
fn test_config_parse() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        "root_namespace = \"Acme.Server\"\n\n[projects]\ncommands = \"Acme.Application\"\n"
    )
    .unwrap();
    let config = load_config(file.path()).unwrap().unwrap();
    assert_eq!(config.root_namespace, "Acme.Server");
    assert_eq!(config.projects.commands.as_deref(), Some("Acme.Application"));
    assert!(config.projects.queries.is_none());
}

#[test]
fn test_config_malformed_is_error() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(file, "root_namespace = [not toml").unwrap();
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_config_default_root_namespace() {
    let config = GeneratorConfig::default();
    assert_eq!(config.root_namespace, "Generators");
}

#[test]
fn test_resolve_config_path_prefers_explicit() {
    let dir = tempfile::tempdir().unwrap();
    let explicit = dir.path().join("custom.toml");
    std::fs::write(&explicit, "").unwrap();
    let manifest = dir.path().join("features.yaml");
    std::fs::write(&manifest, "features: []").unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();

    assert_eq!(
        resolve_config_path(Some(&explicit), &manifest),
        Some(explicit)
    );
}

#[test]
fn test_resolve_config_path_falls_back_to_manifest_dir() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("features.yaml");
    std::fs::write(&manifest, "features: []").unwrap();
    let alongside = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&alongside, "").unwrap();

    assert_eq!(resolve_config_path(None, &manifest), Some(alongside));
}

#[test]
fn test_resolve_config_path_none_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("features.yaml");
    std::fs::write(&manifest, "features: []").unwrap();
    assert_eq!(resolve_config_path(None, &manifest), None);
}

#[test]
fn test_boilerplate_sources() {
    let sources = boilerplate_sources().unwrap();
    let names: Vec<_> = sources.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        [
            "FeatureConfigAttribute",
            "FeatureAttribute",
            "FeatureIgnoreAttribute"
        ]
    );
    let (_, feature) = &sources[1];
    assert!(feature.contains("bool addEditEnabled = false"));
    assert!(feature.contains("public bool ExportEnabled { get; private set; }"));
    let (_, ignore) = &sources[2];
    assert!(ignore.contains("AttributeTargets.Property"));
}

#[test]
fn test_write_boilerplate_creates_three_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("markers");
    write_boilerplate(&out).unwrap();
    for name in [
        "FeatureConfigAttribute.cs",
        "FeatureAttribute.cs",
        "FeatureIgnoreAttribute.cs",
    ] {
        assert!(out.join(name).exists(), "{name} missing");
    }
}
