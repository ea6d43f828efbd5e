use serde::Deserialize;
use std::collections::HashSet;

/// One typed member of a feature entity.
///
/// `name` is the simple (unqualified) member name. Field order is significant
/// and preserved from the manifest — it drives generated property order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldSpec {
    /// Field type, opaque to the generator (e.g. `int`, `string`, `DateTime?`)
    #[serde(rename = "type")]
    pub ty: String,
    /// Simple member name
    pub name: String,
}

impl FieldSpec {
    /// Create a field spec.
    pub fn new(ty: &str, name: &str) -> Self {
        Self {
            ty: ty.to_string(),
            name: name.to_string(),
        }
    }
}

/// Per-feature generation toggles, one per operation kind.
///
/// These mirror the six booleans of the feature marker attribute. A toggle
/// omitted from the manifest defaults to enabled, so a bare feature entry
/// produces the full 15-artifact set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeatureToggles {
    /// Emit the AddEdit command pair
    pub add_edit: bool,
    /// Emit the Delete command pair
    pub delete: bool,
    /// Emit the GetAll query triple
    pub get_all: bool,
    /// Emit the GetAllPaged query triple
    pub get_all_paged: bool,
    /// Emit the GetById query triple
    pub get_by_id: bool,
    /// Emit the Export query pair
    pub export: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            add_edit: true,
            delete: true,
            get_all: true,
            get_all_paged: true,
            get_by_id: true,
            export: true,
        }
    }
}

impl FeatureToggles {
    /// All operation kinds enabled.
    pub fn all() -> Self {
        Self::default()
    }

    /// No operation kinds enabled.
    pub fn none() -> Self {
        Self {
            add_edit: false,
            delete: false,
            get_all: false,
            get_all_paged: false,
            get_by_id: false,
            export: false,
        }
    }
}

/// The normalized description of one user-declared entity.
///
/// Constructed once by the extraction side (manifest loader or API caller),
/// immutable thereafter, consumed read-only by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeatureSchema {
    /// Entity name; drives every artifact name
    pub name: String,
    /// Ordered field list; may be empty
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    /// Operation toggles; omitted toggles default to enabled
    #[serde(default, rename = "operations")]
    pub toggles: FeatureToggles,
}

impl FeatureSchema {
    /// Create a schema with all operation kinds enabled.
    pub fn new(name: &str, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.to_string(),
            fields,
            toggles: FeatureToggles::all(),
        }
    }

    /// Replace the operation toggles.
    pub fn with_toggles(mut self, toggles: FeatureToggles) -> Self {
        self.toggles = toggles;
        self
    }
}

/// Ordered, first-write-wins accumulator of feature schemas.
///
/// Created empty at the start of a run, populated during discovery, consumed
/// once by the orchestrator, discarded at the end of the run. Repeated
/// discovery of an entity name leaves the registry untouched.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: Vec<FeatureSchema>,
    seen: HashSet<String>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a schema if its name has not been seen yet.
    ///
    /// Returns `true` when the schema was inserted, `false` when an earlier
    /// schema with the same name already won.
    pub fn insert(&mut self, schema: FeatureSchema) -> bool {
        if !self.seen.insert(schema.name.clone()) {
            return false;
        }
        self.schemas.push(schema);
        true
    }

    /// Iterate schemas in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureSchema> {
        self.schemas.iter()
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
