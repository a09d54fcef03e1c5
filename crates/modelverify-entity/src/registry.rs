//! Programmatic entity registry
//!
//! The convention-free source: entities and their properties are declared
//! directly against a builder and held in memory. Useful when the object
//! model is defined in the same crate that runs verification, and as the
//! model side of engine tests.

use crate::source::{column_candidates, EntitySource, ModelError};
use modelverify_core::Entity;

/// In-memory entity source built up entity by entity
///
/// Entities are produced in declaration order. `columns_for` answers for
/// whatever entity value it is handed, so the registry can also vet
/// entities it did not itself produce.
///
/// # Example
///
/// ```rust,ignore
/// let source = RegistryEntitySource::new()
///     .with_entity(
///         Entity::new("Order")
///             .with_property(Property::scalar("Id", "i64"))
///             .with_property(Property::navigation("Customer", "crate::Customer")),
///     );
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistryEntitySource {
    entities: Vec<Entity>,
}

impl RegistryEntitySource {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entity
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    /// Add several entities at once
    pub fn with_entities(mut self, entities: Vec<Entity>) -> Self {
        self.entities.extend(entities);
        self
    }

    /// Number of registered entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

impl EntitySource for RegistryEntitySource {
    fn entities(&self) -> Result<Vec<Entity>, ModelError> {
        Ok(self.entities.clone())
    }

    fn columns_for(
        &self,
        entity: &Entity,
        ignore_namespaces: &[String],
    ) -> Result<Vec<String>, ModelError> {
        Ok(column_candidates(entity, ignore_namespaces))
    }
}
