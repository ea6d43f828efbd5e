//! # Builder Module
//!
//! The builder module provides the staged type builder at the heart of featuregen:
//! a typestate API that assembles exactly one C# type definition and renders it to
//! canonical source text.
//!
//! ## Overview
//!
//! Construction order is enforced by the type system rather than runtime checks.
//! A [`TypeBuilder`] walks through five stages:
//!
//! ```text
//! create() → namespace() → imports() → kind() → name() → body elements → build()
//! ```
//!
//! Each stage method consumes the builder and returns the next stage's type, so
//! calling an out-of-order operation is a compile error. Once the name stage is
//! passed, the body elements (derivations, fields, constructors, properties,
//! methods) may be supplied in any order, each replacing the prior value for its
//! slot. `build()` consumes the builder for good — a built instance cannot be
//! re-rendered.
//!
//! ## Rendering
//!
//! `build()` produces an [`Artifact`]: the generated type name plus one canonical
//! text block. The layout is fixed: optional feature comment, import block,
//! namespace wrapper, `public partial <kind> <name>` with an optional derivation
//! clause, and the four member blocks (fields, constructors, properties, methods)
//! separated by single blank lines where adjacent blocks are non-empty.
//!
//! ## Example
//!
//! ```rust,ignore
//! use featuregen::builder::{PropertyDefinition, TypeBuilder, TypeKind};
//!
//! let artifact = TypeBuilder::create()
//!     .namespace("Generators.Widget.Commands")
//!     .imports(["MediatR", "Server"])
//!     .kind(TypeKind::Class)
//!     .name("DeleteWidgetCommand")
//!     .derivations(["IRequest<Result<int>>"])
//!     .properties(&[PropertyDefinition::new("int", "Id")])
//!     .build(Some("Widget"));
//! assert_eq!(artifact.id, "DeleteWidgetCommand");
//! ```

mod definitions;
mod stages;


pub use definitions::{
    ConstructorDefinition, FieldDefinition, MethodDefinition, ParameterDefinition,
    PropertyDefinition,
};
pub use stages::{
    Artifact, BodyStage, ImportsStage, KindStage, NameStage, NamespaceStage, TypeBuilder, TypeKind,
};
