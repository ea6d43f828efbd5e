//! Definition model: plain value records for the members of one type definition.
//!
//! These records carry no behavior beyond construction helpers and rendering to
//! single member declarations. Types are opaque strings throughout — the builder
//! composes text, it does not interpret the target language.

/// A field declaration (access modifier, type, name, optional initializer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Access modifier text, e.g. `private` or `private readonly`
    pub access: String,
    /// Field type as written in the output
    pub ty: String,
    /// Simple member name
    pub name: String,
    /// Optional initializer expression
    pub default: Option<String>,
}

impl FieldDefinition {
    /// Create a private field with no initializer.
    pub fn new(ty: &str, name: &str) -> Self {
        Self::with_access("private", ty, name)
    }

    /// Create a field with an explicit access modifier.
    pub fn with_access(access: &str, ty: &str, name: &str) -> Self {
        Self {
            access: access.to_string(),
            ty: ty.to_string(),
            name: name.to_string(),
            default: None,
        }
    }

    /// Attach an initializer expression.
    pub fn default_value(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    pub(crate) fn render(&self) -> String {
        match &self.default {
            Some(default) => format!("{} {} {} = {};", self.access, self.ty, self.name, default),
            None => format!("{} {} {};", self.access, self.ty, self.name),
        }
    }
}

/// An auto-property declaration. Always rendered `public` with `{ get; set; }`
/// accessors — generated properties are never read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    /// Property type as written in the output
    pub ty: String,
    /// Simple member name
    pub name: String,
    /// Optional initializer expression
    pub default: Option<String>,
}

impl PropertyDefinition {
    /// Create a property with no initializer.
    pub fn new(ty: &str, name: &str) -> Self {
        Self {
            ty: ty.to_string(),
            name: name.to_string(),
            default: None,
        }
    }

    /// Attach an initializer expression.
    pub fn default_value(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    pub(crate) fn render(&self) -> String {
        match &self.default {
            Some(default) => format!(
                "public {} {} {{ get; set; }} = {};",
                self.ty, self.name, default
            ),
            None => format!("public {} {} {{ get; set; }}", self.ty, self.name),
        }
    }
}

/// A single parameter of a constructor or method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDefinition {
    /// Parameter type as written in the output
    pub ty: String,
    /// Parameter name
    pub name: String,
    /// Optional default value expression
    pub default: Option<String>,
}

impl ParameterDefinition {
    /// Create a parameter with no default value.
    pub fn new(ty: &str, name: &str) -> Self {
        Self {
            ty: ty.to_string(),
            name: name.to_string(),
            default: None,
        }
    }

    /// Create a parameter with a default value expression.
    pub fn with_default(ty: &str, name: &str, default: &str) -> Self {
        Self {
            ty: ty.to_string(),
            name: name.to_string(),
            default: Some(default.to_string()),
        }
    }

    /// Parameter name without leading underscores. Constructor parameters are
    /// rendered with this form so a `_mapper` backing-field name yields a
    /// `mapper` parameter.
    pub(crate) fn stripped_name(&self) -> &str {
        self.name.trim_start_matches('_')
    }

    pub(crate) fn render(&self) -> String {
        self.render_named(&self.name)
    }

    pub(crate) fn render_stripped(&self) -> String {
        self.render_named(self.stripped_name())
    }

    fn render_named(&self, name: &str) -> String {
        match &self.default {
            Some(default) => format!("{} {} = {}", self.ty, name, default),
            None => format!("{} {}", self.ty, name),
        }
    }
}

/// A constructor declaration.
///
/// With `auto_assign`, every parameter is assigned to a backing field named
/// `_<param>` ahead of the extra body, separated from it by one blank line when
/// both are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDefinition {
    /// Access modifier text
    pub access: String,
    /// Ordered parameter list
    pub parameters: Vec<ParameterDefinition>,
    /// Whether to synthesize `_<param> = <param>;` assignments
    pub auto_assign: bool,
    /// Extra body text; lines after the first carry their own statement indent
    pub body: String,
}

impl ConstructorDefinition {
    /// A public constructor that assigns each parameter to its backing field.
    pub fn injecting(parameters: &[ParameterDefinition]) -> Self {
        Self {
            access: "public".to_string(),
            parameters: parameters.to_vec(),
            auto_assign: true,
            body: String::new(),
        }
    }

    /// A public constructor with an explicit body and no synthesized
    /// assignments.
    pub fn with_body(parameters: &[ParameterDefinition], body: &str) -> Self {
        Self {
            access: "public".to_string(),
            parameters: parameters.to_vec(),
            auto_assign: false,
            body: body.to_string(),
        }
    }

    pub(crate) fn render(&self, type_name: &str) -> String {
        let parameters = self
            .parameters
            .iter()
            .map(ParameterDefinition::render_stripped)
            .collect::<Vec<_>>()
            .join(", ");
        let assignments = if self.auto_assign {
            self.parameters
                .iter()
                .map(|p| {
                    let name = p.stripped_name();
                    format!("_{name} = {name};")
                })
                .collect::<Vec<_>>()
        } else {
            Vec::new()
        };
        let content = match (assignments.is_empty(), self.body.is_empty()) {
            (false, false) => format!(
                "{}\n\n            {}",
                assignments.join("\n            "),
                self.body
            ),
            (false, true) => assignments.join("\n            "),
            (true, false) => self.body.clone(),
            (true, true) => String::new(),
        };
        format!(
            "{} {}({})\n        {{\n{}\n        }}",
            self.access,
            type_name,
            parameters,
            statement_line(&content)
        )
    }
}

/// A method declaration with an opaque body fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDefinition {
    /// Access modifier text, e.g. `public` or `public async`
    pub access: String,
    /// Return type as written in the output
    pub return_type: String,
    /// Method name
    pub name: String,
    /// Ordered parameter list
    pub parameters: Vec<ParameterDefinition>,
    /// Body text; lines after the first carry their own statement indent
    pub body: String,
}

impl MethodDefinition {
    /// Create a method declaration.
    pub fn new(
        access: &str,
        return_type: &str,
        name: &str,
        parameters: &[ParameterDefinition],
        body: &str,
    ) -> Self {
        Self {
            access: access.to_string(),
            return_type: return_type.to_string(),
            name: name.to_string(),
            parameters: parameters.to_vec(),
            body: body.to_string(),
        }
    }

    pub(crate) fn render(&self) -> String {
        let parameters = self
            .parameters
            .iter()
            .map(ParameterDefinition::render)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} {} {}({})\n        {{\n{}\n        }}",
            self.access,
            self.return_type,
            self.name,
            parameters,
            statement_line(&self.body)
        )
    }
}

// An empty body renders as an empty line, not a line of trailing whitespace.
fn statement_line(content: &str) -> String {
    if content.is_empty() {
        String::new()
    } else {
        format!("            {content}")
    }
}
