//! Entity source trait: where the object model comes from

use modelverify_core::Entity;

/// Errors produced by entity sources
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read model manifest {0}: {1}")]
    IoError(String, String),

    #[error("Failed to parse model manifest: {0}")]
    ParseError(String),

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),
}

/// Trait for sources that produce the object model to verify
///
/// A source represents one mapping convention. It is consulted twice per
/// verification run: once for the full entity list, then once per entity for
/// the property names that should be compared against columns.
pub trait EntitySource {
    /// List every entity in the model.
    fn entities(&self) -> Result<Vec<Entity>, ModelError>;

    /// Column-eligible property names of one entity.
    ///
    /// Properties whose qualified type name contains any of the
    /// `ignore_namespaces` substrings are excluded, on top of whatever the
    /// source's own convention excludes.
    fn columns_for(
        &self,
        entity: &Entity,
        ignore_namespaces: &[String],
    ) -> Result<Vec<String>, ModelError>;
}

/// The shared column convention: scalar properties only, minus any property
/// whose declared type is excluded by namespace, sorted ascending by name.
pub fn column_candidates(entity: &Entity, ignore_namespaces: &[String]) -> Vec<String> {
    let mut names: Vec<String> = entity
        .properties
        .iter()
        .filter(|p| p.is_column_candidate())
        .filter(|p| !ignore_namespaces.iter().any(|ns| p.type_name.contains(ns.as_str())))
        .map(|p| p.name.clone())
        .collect();
    names.sort();
    names
}
