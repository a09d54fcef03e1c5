//! modelverify engine - verification orchestration
//!
//! This crate ties the model and catalog crates together:
//! - Entity-to-table matching under a configurable tolerance
//! - Property-to-column comparison per matched entity
//! - Report memoization and errors-as-data failure handling

pub mod verifier;

pub use verifier::Verifier;
