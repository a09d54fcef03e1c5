//! Model manifest (model.json) parsing
//!
//! The declarative alternative to the programmatic registry: entities and
//! properties are listed in a JSON document, optionally overriding the
//! mapped table name per entity and the mapped column name per property.
//! Overrides are resolved when the manifest is loaded, so the produced
//! entities already carry the names verification should match against.

use crate::source::{column_candidates, EntitySource, ModelError};
use modelverify_core::{Entity, Property, PropertyKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Model manifest structure (model.json)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelManifest {
    /// Metadata about the manifest
    #[serde(default)]
    pub metadata: ManifestMetadata,

    /// Entity entries keyed by entity name
    pub entities: HashMap<String, EntityEntry>,
}

/// Manifest metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestMetadata {
    /// Display name of the model
    #[serde(default)]
    pub model_name: Option<String>,

    /// Timestamp the manifest was produced (ISO 8601)
    #[serde(default)]
    pub generated_at: Option<String>,
}

/// One entity entry in the manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityEntry {
    /// Mapped table name; the entry key is used when absent
    #[serde(default)]
    pub table: Option<String>,

    /// Property entries keyed by property name
    #[serde(default)]
    pub properties: HashMap<String, PropertyEntry>,
}

/// One property entry in the manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyEntry {
    /// Qualified type path of the property
    #[serde(rename = "type", default)]
    pub type_name: String,

    /// Mapped column name; the entry key is used when absent
    #[serde(default)]
    pub column: Option<String>,

    /// Property classification
    #[serde(default)]
    pub kind: PropertyKind,
}

impl ModelManifest {
    /// Load manifest from file
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ModelError::IoError(path.display().to_string(), e.to_string()))?;

        Self::from_str(&contents)
    }

    /// Parse manifest from JSON string
    pub fn from_str(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::ParseError(e.to_string()))
    }

    /// Resolve every entry into an entity value, applying table and column
    /// name overrides.
    ///
    /// Entries without properties are skipped; entities come out sorted by
    /// resolved name, properties sorted within each entity.
    pub fn resolve(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = self
            .entities
            .iter()
            .filter(|(_, entry)| !entry.properties.is_empty())
            .map(|(name, entry)| resolve_entry(name, entry))
            .collect();
        entities.sort_by(|a, b| a.name.cmp(&b.name));
        entities
    }
}

fn resolve_entry(name: &str, entry: &EntityEntry) -> Entity {
    let resolved_name = entry.table.clone().unwrap_or_else(|| name.to_string());

    let mut properties: Vec<Property> = entry
        .properties
        .iter()
        .map(|(property_name, p)| Property {
            name: p.column.clone().unwrap_or_else(|| property_name.clone()),
            type_name: p.type_name.clone(),
            kind: p.kind,
        })
        .collect();
    properties.sort_by(|a, b| a.name.cmp(&b.name));

    Entity {
        name: resolved_name,
        properties,
    }
}

/// Entity source backed by a resolved model manifest
///
/// Unlike the registry, this source only answers `columns_for` for entities
/// it produced itself; asking about anything else is a
/// [`ModelError::UnknownEntity`].
#[derive(Debug, Clone)]
pub struct ManifestEntitySource {
    entities: Vec<Entity>,
}

impl ManifestEntitySource {
    /// Build a source from an already-parsed manifest
    pub fn new(manifest: &ModelManifest) -> Self {
        let entities = manifest.resolve();
        debug!("resolved {} entities from model manifest", entities.len());
        Self { entities }
    }

    /// Load and resolve a manifest file
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        Ok(Self::new(&ModelManifest::from_file(path)?))
    }

    /// Parse and resolve a manifest from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(Self::new(&ModelManifest::from_str(json)?))
    }
}

impl EntitySource for ManifestEntitySource {
    fn entities(&self) -> Result<Vec<Entity>, ModelError> {
        Ok(self.entities.clone())
    }

    fn columns_for(
        &self,
        entity: &Entity,
        ignore_namespaces: &[String],
    ) -> Result<Vec<String>, ModelError> {
        let known = self
            .entities
            .iter()
            .find(|e| e.name == entity.name)
            .ok_or_else(|| ModelError::UnknownEntity(entity.name.clone()))?;

        Ok(column_candidates(known, ignore_namespaces))
    }
}
