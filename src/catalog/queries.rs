//! Query family: list, paged list, get-by-id and export.

use crate::builder::{
    Artifact, ConstructorDefinition, FieldDefinition, ParameterDefinition, PropertyDefinition,
    TypeBuilder, TypeKind,
};
use crate::schema::FeatureSchema;

use super::{
    handle_method, handler_constructor, handler_fields, schema_properties, HANDLER_USINGS,
    LIST_HANDLER_USINGS,
};

// Paged-query constructor body: the order-by string splits into an array
// only when non-blank, otherwise the property stays unset.
const PAGED_CTOR_BODY: &str = "PageNumber = pageNumber;\n            PageSize = pageSize;\n            SearchString = searchString;\n            if (!string.IsNullOrWhiteSpace(orderBy)) OrderBy = orderBy.Split(',');";

/// Produce the query-family artifacts for one schema, gated per operation
/// kind. With every toggle enabled this is exactly eleven artifacts: the
/// GetAll, GetAllPaged and GetById triples plus the Export pair.
pub fn query_artifacts(schema: &FeatureSchema, root_namespace: &str) -> Vec<Artifact> {
    let name = schema.name.as_str();
    let ns = format!("{root_namespace}.{name}.Queries");
    let mut artifacts = Vec::new();

    if schema.toggles.get_all {
        artifacts.push(
            TypeBuilder::create()
                .namespace(&ns)
                .imports(["MediatR", "System.Collections.Generic", "Server"])
                .kind(TypeKind::Class)
                .name(&format!("GetAll{name}Query"))
                .derivations([format!("IRequest<Result<List<GetAll{name}Response>>>")])
                .build(Some(name)),
        );
        artifacts.push(
            TypeBuilder::create()
                .namespace(&ns)
                .imports(["MediatR", "Server"])
                .kind(TypeKind::Class)
                .name(&format!("GetAll{name}Response"))
                .properties(&schema_properties(schema))
                .build(Some(name)),
        );
        artifacts.push(
            TypeBuilder::create()
                .namespace(&ns)
                .imports(LIST_HANDLER_USINGS)
                .kind(TypeKind::Class)
                .name(&format!("GetAll{name}QueryHandler"))
                .derivations([format!(
                    "IRequestHandler<GetAll{name}Query, Result<List<GetAll{name}Response>>>"
                )])
                .fields(&handler_fields())
                .constructors(&[handler_constructor()])
                .methods(&[handle_method(
                    &format!("Result<List<GetAll{name}Response>>"),
                    &format!("GetAll{name}Query"),
                    "query",
                )])
                .build(Some(name)),
        );
    }

    if schema.toggles.get_all_paged {
        artifacts.push(
            TypeBuilder::create()
                .namespace(&ns)
                .imports(["MediatR", "System.Collections.Generic", "Server"])
                .kind(TypeKind::Class)
                .name(&format!("GetAllPaged{name}Query"))
                .derivations([format!(
                    "IRequest<Result<List<GetAllPaged{name}Response>>>"
                )])
                .constructors(&[ConstructorDefinition::with_body(
                    &[
                        ParameterDefinition::new("int", "pageNumber"),
                        ParameterDefinition::new("int", "pageSize"),
                        ParameterDefinition::new("string", "searchString"),
                        ParameterDefinition::new("string", "orderBy"),
                    ],
                    PAGED_CTOR_BODY,
                )])
                .properties(&[
                    PropertyDefinition::new("int", "PageNumber"),
                    PropertyDefinition::new("int", "PageSize"),
                    PropertyDefinition::new("string", "SearchString"),
                    PropertyDefinition::new("string[]", "OrderBy"),
                ])
                .build(Some(name)),
        );
        artifacts.push(
            TypeBuilder::create()
                .namespace(&ns)
                .imports(["MediatR", "Server"])
                .kind(TypeKind::Class)
                .name(&format!("GetAllPaged{name}Response"))
                .properties(&schema_properties(schema))
                .build(Some(name)),
        );
        artifacts.push(
            TypeBuilder::create()
                .namespace(&ns)
                .imports(LIST_HANDLER_USINGS)
                .kind(TypeKind::Class)
                .name(&format!("GetAllPaged{name}QueryHandler"))
                .derivations([format!(
                    "IRequestHandler<GetAllPaged{name}Query, Result<List<GetAllPaged{name}Response>>>"
                )])
                .fields(&handler_fields())
                .constructors(&[handler_constructor()])
                .methods(&[handle_method(
                    &format!("Result<List<GetAllPaged{name}Response>>"),
                    &format!("GetAllPaged{name}Query"),
                    "query",
                )])
                .build(Some(name)),
        );
    }

    if schema.toggles.get_by_id {
        artifacts.push(
            TypeBuilder::create()
                .namespace(&ns)
                .imports(["MediatR", "Server"])
                .kind(TypeKind::Class)
                .name(&format!("Get{name}ByIdQuery"))
                .derivations([format!("IRequest<Result<Get{name}ByIdResponse>>")])
                .properties(&[PropertyDefinition::new("int", "Id")])
                .build(Some(name)),
        );
        artifacts.push(
            TypeBuilder::create()
                .namespace(&ns)
                .imports(["MediatR", "Server"])
                .kind(TypeKind::Class)
                .name(&format!("Get{name}ByIdResponse"))
                .properties(&schema_properties(schema))
                .build(Some(name)),
        );
        artifacts.push(
            TypeBuilder::create()
                .namespace(&ns)
                .imports(HANDLER_USINGS)
                .kind(TypeKind::Class)
                .name(&format!("Get{name}ByIdQueryHandler"))
                .derivations([format!(
                    "IRequestHandler<Get{name}ByIdQuery, Result<Get{name}ByIdResponse>>"
                )])
                .fields(&handler_fields())
                .constructors(&[handler_constructor()])
                .methods(&[handle_method(
                    &format!("Result<Get{name}ByIdResponse>"),
                    &format!("Get{name}ByIdQuery"),
                    "query",
                )])
                .build(Some(name)),
        );
    }

    if schema.toggles.export {
        artifacts.push(
            TypeBuilder::create()
                .namespace(&ns)
                .imports(["MediatR", "Server"])
                .kind(TypeKind::Class)
                .name(&format!("Export{name}Query"))
                .derivations(["IRequest<Result<string>>"])
                .constructors(&[ConstructorDefinition::with_body(
                    &[ParameterDefinition::with_default(
                        "string",
                        "searchString",
                        "\"\"",
                    )],
                    "SearchString = searchString;",
                )])
                .properties(&[PropertyDefinition::new("string", "SearchString")])
                .build(Some(name)),
        );
        artifacts.push(
            TypeBuilder::create()
                .namespace(&ns)
                .imports(HANDLER_USINGS)
                .kind(TypeKind::Class)
                .name(&format!("Export{name}QueryHandler"))
                .derivations([format!(
                    "IRequestHandler<Export{name}Query, Result<string>>"
                )])
                // No mapper here: export goes straight through the unit of work.
                .fields(&[FieldDefinition::with_access(
                    "private readonly",
                    "IUnitOfWork<int>",
                    "_unitOfWork",
                )])
                .constructors(&[ConstructorDefinition::injecting(&[
                    ParameterDefinition::new("IUnitOfWork<int>", "unitOfWork"),
                ])])
                .methods(&[handle_method(
                    "Result<string>",
                    &format!("Export{name}Query"),
                    "query",
                )])
                .build(Some(name)),
        );
    }

    artifacts
}
