//! End-to-end generation tests: manifest in, canonical sources out.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use featuregen::{
    generate_features, load_manifest, FsSink, GeneratorConfig, MemorySink,
};
use std::fs;
use std::path::Path;

const WIDGET_MANIFEST: &str = "\
features:
  - name: Widget
    fields:
      - { type: int, name: Id }
      - { type: string, name: Title }
";

fn write_manifest(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_manifest_to_files_full_set() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path(), "features.yaml", WIDGET_MANIFEST);
    let out = dir.path().join("generated");

    let registry = load_manifest(&manifest).unwrap();
    let mut sink = FsSink::new(&out).unwrap();
    let summary = generate_features(&registry, &GeneratorConfig::default(), &mut sink).unwrap();

    assert_eq!(summary.features, 1);
    assert_eq!(summary.emitted, 15);
    assert_eq!(summary.suppressed, 0);

    let expected = [
        "AddEditWidgetCommand",
        "AddEditWidgetCommandHandler",
        "DeleteWidgetCommand",
        "DeleteWidgetCommandHandler",
        "GetAllWidgetQuery",
        "GetAllWidgetResponse",
        "GetAllWidgetQueryHandler",
        "GetAllPagedWidgetQuery",
        "GetAllPagedWidgetResponse",
        "GetAllPagedWidgetQueryHandler",
        "GetWidgetByIdQuery",
        "GetWidgetByIdResponse",
        "GetWidgetByIdQueryHandler",
        "ExportWidgetQuery",
        "ExportWidgetQueryHandler",
    ];
    for id in expected {
        assert!(out.join(format!("{id}.cs")).exists(), "{id}.cs missing");
    }
    assert_eq!(fs::read_dir(&out).unwrap().count(), expected.len());
}

#[test]
fn test_generated_command_golden_text() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path(), "features.yaml", WIDGET_MANIFEST);
    let out = dir.path().join("generated");

    let registry = load_manifest(&manifest).unwrap();
    let mut sink = FsSink::new(&out).unwrap();
    generate_features(&registry, &GeneratorConfig::default(), &mut sink).unwrap();

    let text = fs::read_to_string(out.join("AddEditWidgetCommand.cs")).unwrap();
    assert_eq!(
        text,
        "//Feature:Widget\n\
         using MediatR;\n\
         using Server;\n\
         \n\
         namespace Generators.Widget.Commands\n\
         {\n\
         \x20   public partial class AddEditWidgetCommand : IRequest<Result<int>>\n\
         \x20   {\n\
         \x20       public int Id { get; set; }\n\
         \x20       public string Title { get; set; }\n\
         \x20   }\n\
         }\n"
    );
}

#[test]
fn test_two_runs_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path(), "features.yaml", WIDGET_MANIFEST);
    let registry = load_manifest(&manifest).unwrap();

    let run = || {
        let mut sink = MemorySink::new();
        generate_features(&registry, &GeneratorConfig::default(), &mut sink).unwrap();
        sink.into_artifacts()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_config_alongside_manifest_changes_namespace() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path(), "features.yaml", WIDGET_MANIFEST);
    fs::write(
        dir.path().join("featuregen.toml"),
        "root_namespace = \"Acme.Server\"\n",
    )
    .unwrap();

    let registry = load_manifest(&manifest).unwrap();
    let config_path = featuregen::generator::resolve_config_path(None, &manifest).unwrap();
    let config = featuregen::generator::load_config(&config_path)
        .unwrap()
        .unwrap();

    let mut sink = MemorySink::new();
    generate_features(&registry, &config, &mut sink).unwrap();
    assert!(sink.artifacts()[0]
        .text
        .contains("namespace Acme.Server.Widget.Commands\n"));
}

#[test]
fn test_json_manifest_with_toggles() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(
        dir.path(),
        "features.json",
        r#"{
  "features": [
    {
      "name": "Widget",
      "fields": [{ "type": "int", "name": "Id" }],
      "operations": { "export": false, "get_all_paged": false }
    }
  ]
}"#,
    );

    let registry = load_manifest(&manifest).unwrap();
    let mut sink = MemorySink::new();
    let summary = generate_features(&registry, &GeneratorConfig::default(), &mut sink).unwrap();

    assert_eq!(summary.emitted, 10);
    assert!(!sink.artifacts().iter().any(|a| a.id.starts_with("Export")));
    assert!(!sink
        .artifacts()
        .iter()
        .any(|a| a.id.starts_with("GetAllPaged")));
}

#[test]
fn test_multiple_features_share_one_run() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(
        dir.path(),
        "features.yaml",
        "features:\n  - name: Widget\n    fields:\n      - { type: int, name: Id }\n  - name: Gadget\n    fields:\n      - { type: int, name: Id }\n",
    );

    let registry = load_manifest(&manifest).unwrap();
    let mut sink = MemorySink::new();
    let summary = generate_features(&registry, &GeneratorConfig::default(), &mut sink).unwrap();
    assert_eq!(summary.features, 2);
    assert_eq!(summary.emitted, 30);

    // Cross-feature names never collide: each id embeds its entity name.
    let mut ids: Vec<_> = sink.artifacts().iter().map(|a| a.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 30);
}

#[test]
fn test_boilerplate_matches_marker_contract() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("markers");
    featuregen::write_boilerplate(&out).unwrap();

    let feature = fs::read_to_string(out.join("FeatureAttribute.cs")).unwrap();
    assert!(feature.contains("public sealed class FeatureAttribute : Attribute"));
    for toggle in [
        "addEditEnabled",
        "deleteEnabled",
        "getAllEnabled",
        "getAllPagedEnabled",
        "getByIdEnabled",
        "exportEnabled",
    ] {
        assert!(feature.contains(toggle), "{toggle} missing");
    }

    let config = fs::read_to_string(out.join("FeatureConfigAttribute.cs")).unwrap();
    assert!(config.contains("public string CommandsProject { get; set; }"));
    assert!(config.contains("public string ControllersProject { get; set; }"));
}
