//! # Catalog Module
//!
//! The template catalog: the fixed mapping from one feature schema to its
//! dependent artifact set.
//!
//! For an entity `<E>` the catalog produces up to 15 artifacts in two
//! families, each through one [`TypeBuilder`](crate::builder::TypeBuilder)
//! invocation:
//!
//! - **Commands** (`<root>.<E>.Commands`): `AddEdit<E>Command` +
//!   handler, `Delete<E>Command` + handler.
//! - **Queries** (`<root>.<E>.Queries`): `GetAll<E>` query/response/handler,
//!   `GetAllPaged<E>` query/response/handler, `Get<E>ById`
//!   query/response/handler, `Export<E>` query/handler.
//!
//! The schema's operation toggles gate each group. Handler bodies are
//! scaffolding: `//Body here` plus a null return, for a human to fill in.
//! Output is deterministic — same schema, same bytes, on every invocation.

mod commands;
mod queries;


pub use commands::command_artifacts;
pub use queries::query_artifacts;

use crate::builder::{
    ConstructorDefinition, FieldDefinition, MethodDefinition, ParameterDefinition,
    PropertyDefinition,
};
use crate::schema::FeatureSchema;

// Handler scaffolding body; continuation lines carry the statement indent.
pub(crate) const STUB_BODY: &str = "//Body here\n            return null;";

pub(crate) const HANDLER_USINGS: [&str; 5] = [
    "AutoMapper",
    "MediatR",
    "System.Threading",
    "System.Threading.Tasks",
    "Server",
];

pub(crate) const LIST_HANDLER_USINGS: [&str; 6] = [
    "AutoMapper",
    "MediatR",
    "System.Threading",
    "System.Threading.Tasks",
    "System.Collections.Generic",
    "Server",
];

/// Schema fields rendered verbatim as public auto-properties, in order.
pub(crate) fn schema_properties(schema: &FeatureSchema) -> Vec<PropertyDefinition> {
    schema
        .fields
        .iter()
        .map(|f| PropertyDefinition::new(&f.ty, &f.name))
        .collect()
}

/// Collaborator fields shared by every handler except export: mapper plus
/// unit-of-work.
pub(crate) fn handler_fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::with_access("private readonly", "IMapper", "_mapper"),
        FieldDefinition::with_access("private readonly", "IUnitOfWork<int>", "_unitOfWork"),
    ]
}

/// The injecting constructor matching [`handler_fields`].
pub(crate) fn handler_constructor() -> ConstructorDefinition {
    ConstructorDefinition::injecting(&[
        ParameterDefinition::new("IMapper", "mapper"),
        ParameterDefinition::new("IUnitOfWork<int>", "unitOfWork"),
    ])
}

/// The async `Handle` scaffolding method: request plus cancellation token in,
/// declared result type out, stub body.
pub(crate) fn handle_method(
    result: &str,
    request_ty: &str,
    request_name: &str,
) -> MethodDefinition {
    MethodDefinition::new(
        "public async",
        &format!("Task<{result}>"),
        "Handle",
        &[
            ParameterDefinition::new(request_ty, request_name),
            ParameterDefinition::new("CancellationToken", "cancellationToken"),
        ],
        STUB_BODY,
    )
}
