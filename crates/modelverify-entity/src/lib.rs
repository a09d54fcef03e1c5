//! Entity model loading for verification
//!
//! This crate handles:
//! - The [`EntitySource`] abstraction the verification engine consumes
//! - In-memory entity registries built in code
//! - Model manifests exported as JSON, with table and column overrides
//! - Deriving column candidates from entity properties

pub mod manifest;
pub mod registry;
pub mod source;

pub use manifest::{EntityEntry, ManifestEntitySource, ManifestMetadata, ModelManifest, PropertyEntry};
pub use registry::RegistryEntitySource;
pub use source::{column_candidates, EntitySource, ModelError};
