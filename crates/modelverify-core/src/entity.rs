//! Object-model types: entities and their declared properties

use serde::{Deserialize, Serialize};

/// Classification of a declared property
///
/// Only scalar properties are eligible to be matched against columns; the
/// other kinds represent relationships to other entities and are excluded
/// from column matching by every entity source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Plain storable value, mapped to a column
    Scalar,

    /// To-one relationship to another entity
    Navigation,

    /// To-many relationship to other entities
    Collection,
}

impl Default for PropertyKind {
    fn default() -> Self {
        Self::Scalar
    }
}

/// A declared property on an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name
    pub name: String,

    /// Qualified name of the property's declared type
    /// (e.g. "i64" or "crate::billing::Invoice")
    pub type_name: String,

    /// Property classification
    pub kind: PropertyKind,
}

impl Property {
    /// Create a scalar (column-eligible) property
    pub fn scalar(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind: PropertyKind::Scalar,
        }
    }

    /// Create a to-one navigation property
    pub fn navigation(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind: PropertyKind::Navigation,
        }
    }

    /// Create a to-many collection property
    pub fn collection(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind: PropertyKind::Collection,
        }
    }

    /// Whether the property can be matched against a column at all
    pub fn is_column_candidate(&self) -> bool {
        self.kind == PropertyKind::Scalar
    }
}

/// An object-model type intended to map onto a single table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity name, the reference used for table matching
    pub name: String,

    /// Declared properties, in declaration order
    pub properties: Vec<Property>,
}

impl Entity {
    /// Create an entity with no properties
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Add a property
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Add several properties at once
    pub fn with_properties(mut self, properties: Vec<Property>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Find a declared property by name
    pub fn find_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// All declared property names, in declaration order
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }
}
