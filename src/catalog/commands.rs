//! Command family: the create-or-update and delete pairs.

use crate::builder::{Artifact, PropertyDefinition, TypeBuilder, TypeKind};
use crate::schema::FeatureSchema;

use super::{handle_method, handler_constructor, handler_fields, schema_properties, HANDLER_USINGS};

/// Produce the command-family artifacts for one schema, gated by its
/// `add_edit` and `delete` toggles. With both enabled this is exactly four
/// artifacts: the AddEdit and Delete commands and their handlers.
pub fn command_artifacts(schema: &FeatureSchema, root_namespace: &str) -> Vec<Artifact> {
    let name = schema.name.as_str();
    let ns = format!("{root_namespace}.{name}.Commands");
    let mut artifacts = Vec::new();

    if schema.toggles.add_edit {
        artifacts.push(
            TypeBuilder::create()
                .namespace(&ns)
                .imports(["MediatR", "Server"])
                .kind(TypeKind::Class)
                .name(&format!("AddEdit{name}Command"))
                .derivations(["IRequest<Result<int>>"])
                .properties(&schema_properties(schema))
                .build(Some(name)),
        );
        artifacts.push(
            TypeBuilder::create()
                .namespace(&ns)
                .imports(HANDLER_USINGS)
                .kind(TypeKind::Class)
                .name(&format!("AddEdit{name}CommandHandler"))
                .derivations([format!(
                    "IRequestHandler<AddEdit{name}Command, Result<int>>"
                )])
                .fields(&handler_fields())
                .constructors(&[handler_constructor()])
                .methods(&[handle_method(
                    "Result<int>",
                    &format!("AddEdit{name}Command"),
                    "command",
                )])
                .build(Some(name)),
        );
    }

    if schema.toggles.delete {
        artifacts.push(
            TypeBuilder::create()
                .namespace(&ns)
                .imports(["MediatR", "Server"])
                .kind(TypeKind::Class)
                .name(&format!("Delete{name}Command"))
                .derivations(["IRequest<Result<int>>"])
                .properties(&[PropertyDefinition::new("int", "Id")])
                .build(Some(name)),
        );
        artifacts.push(
            TypeBuilder::create()
                .namespace(&ns)
                .imports(HANDLER_USINGS)
                .kind(TypeKind::Class)
                .name(&format!("Delete{name}CommandHandler"))
                .derivations([format!(
                    "IRequestHandler<Delete{name}Command, Result<int>>"
                )])
                .fields(&handler_fields())
                .constructors(&[handler_constructor()])
                .methods(&[handle_method(
                    "Result<int>",
                    &format!("Delete{name}Command"),
                    "command",
                )])
                .build(Some(name)),
        );
    }

    artifacts
}
