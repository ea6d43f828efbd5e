//! Staged builder: typestate-enforced assembly of one type definition.
//!
//! The stage markers are uninhabited types carried in a phantom parameter;
//! each transition consumes the builder and returns the next stage's type.
//! Member declarations are rendered to text at accumulation time — the name
//! stage precedes the body stage, so constructor rendering always has the
//! type name available.

use std::marker::PhantomData;

use super::definitions::{
    ConstructorDefinition, FieldDefinition, MethodDefinition, PropertyDefinition,
};

/// Kind of emitted type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeKind {
    /// `public partial class`
    #[default]
    Class,
    /// `public partial struct`
    Struct,
}

impl TypeKind {
    fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
        }
    }
}

/// One finished type definition: its registered id (the generated type name)
/// and its canonical source text. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Artifact id, unique within one generation run
    pub id: String,
    /// Canonical source text
    pub text: String,
}

/// Stage marker: the builder still needs a namespace.
pub enum NamespaceStage {}
/// Stage marker: the builder still needs its import list.
pub enum ImportsStage {}
/// Stage marker: the builder still needs a type kind.
pub enum KindStage {}
/// Stage marker: the builder still needs a type name.
pub enum NameStage {}
/// Stage marker: body elements may be supplied, then `build()`.
pub enum BodyStage {}

#[derive(Debug, Default)]
struct TypeSpec {
    namespace: String,
    usings: Vec<String>,
    kind: TypeKind,
    name: String,
    derivations: Vec<String>,
    fields: Vec<String>,
    constructors: Vec<String>,
    properties: Vec<String>,
    methods: Vec<String>,
}

/// Order-enforcing accumulator for exactly one type definition.
///
/// See the [module docs](super) for the stage walk and an example.
#[derive(Debug)]
pub struct TypeBuilder<S> {
    spec: TypeSpec,
    _stage: PhantomData<S>,
}

impl<S> TypeBuilder<S> {
    fn advance<T>(self) -> TypeBuilder<T> {
        TypeBuilder {
            spec: self.spec,
            _stage: PhantomData,
        }
    }
}

impl TypeBuilder<NamespaceStage> {
    /// Start a fresh builder.
    pub fn create() -> Self {
        TypeBuilder {
            spec: TypeSpec::default(),
            _stage: PhantomData,
        }
    }

    /// Set the namespace the generated type lives in.
    pub fn namespace(mut self, namespace: &str) -> TypeBuilder<ImportsStage> {
        self.spec.namespace = namespace.to_string();
        self.advance()
    }
}

impl TypeBuilder<ImportsStage> {
    /// Set the import list. Each entry is normalized to a `using <entry>;`
    /// statement; order is preserved.
    pub fn imports<I, S>(mut self, imports: I) -> TypeBuilder<KindStage>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.spec.usings = imports
            .into_iter()
            .map(|u| format!("using {};", u.as_ref()))
            .collect();
        self.advance()
    }
}

impl TypeBuilder<KindStage> {
    /// Set the declaration kind (class or struct).
    pub fn kind(mut self, kind: TypeKind) -> TypeBuilder<NameStage> {
        self.spec.kind = kind;
        self.advance()
    }
}

impl TypeBuilder<NameStage> {
    /// Set the type name and unlock the body stage.
    pub fn name(mut self, name: &str) -> TypeBuilder<BodyStage> {
        self.spec.name = name.to_string();
        self.advance()
    }
}

impl TypeBuilder<BodyStage> {
    /// Set the derivation (base/interface) list. Replaces any prior value.
    pub fn derivations<I, S>(mut self, derivations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.spec.derivations = derivations
            .into_iter()
            .map(|d| d.as_ref().to_string())
            .collect();
        self
    }

    /// Set the field list. Replaces any prior value.
    pub fn fields(mut self, fields: &[FieldDefinition]) -> Self {
        self.spec.fields = fields.iter().map(FieldDefinition::render).collect();
        self
    }

    /// Set the constructor list. Replaces any prior value.
    pub fn constructors(mut self, constructors: &[ConstructorDefinition]) -> Self {
        let name = self.spec.name.clone();
        self.spec.constructors = constructors.iter().map(|c| c.render(&name)).collect();
        self
    }

    /// Set the property list. Replaces any prior value.
    pub fn properties(mut self, properties: &[PropertyDefinition]) -> Self {
        self.spec.properties = properties.iter().map(PropertyDefinition::render).collect();
        self
    }

    /// Set the method list. Replaces any prior value.
    pub fn methods(mut self, methods: &[MethodDefinition]) -> Self {
        self.spec.methods = methods.iter().map(MethodDefinition::render).collect();
        self
    }

    /// Render the accumulated definition to its canonical text.
    ///
    /// Terminal: consumes the builder, so a second render is a compile error.
    /// Rendering itself never fails — empty slots degrade to omitted sections.
    pub fn build(self, feature: Option<&str>) -> Artifact {
        let TypeSpec {
            namespace,
            usings,
            kind,
            name,
            derivations,
            fields,
            constructors,
            properties,
            methods,
        } = self.spec;

        let feature = feature
            .map(|tag| format!("//Feature:{tag}\n"))
            .unwrap_or_default();
        let usings = if usings.is_empty() {
            String::new()
        } else {
            format!("{}\n\n", usings.join("\n"))
        };
        let derivations = if derivations.is_empty() {
            String::new()
        } else {
            format!(" : {}", derivations.join(",\n        "))
        };

        let fields = member_block(
            &fields,
            !(constructors.is_empty() && properties.is_empty() && methods.is_empty()),
        );
        let constructors = member_block(
            &constructors,
            !(properties.is_empty() && methods.is_empty()),
        );
        let properties = member_block(&properties, !methods.is_empty());
        let methods = member_block(&methods, false);

        let text = format!(
            "{feature}{usings}namespace {namespace}\n{{\n    public partial {kind} {name}{derivations}\n    {{\n{fields}{constructors}{properties}{methods}\n    }}\n}}\n",
            kind = kind.keyword(),
        );
        Artifact { id: name, text }
    }
}

// Members render at 8-space indent; a non-empty block followed by another
// non-empty block is separated from it by exactly one blank line.
fn member_block(members: &[String], followed_by_nonempty: bool) -> String {
    if members.is_empty() {
        return String::new();
    }
    let block = format!("        {}", members.join("\n        "));
    if followed_by_nonempty {
        format!("{block}\n\n")
    } else {
        block
    }
}
