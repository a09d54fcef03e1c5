//! Modelverify Core
//!
//! Core domain model for model-vs-database schema verification: entities and
//! their declared properties, enumerated tables, the identifier-matching
//! rules, and the per-entity `Summary` records a verification run produces.
//!
//! This crate holds no I/O beyond config and report file helpers; entity and
//! table enumeration live behind the source traits in `modelverify-entity`
//! and `modelverify-catalog`.

pub mod config;
pub mod entity;
pub mod matching;
pub mod report;
pub mod summary;
pub mod table;

pub use config::{Config, ConfigError, ConnectionConfig, MAX_TOLERANCE};
pub use entity::{Entity, Property, PropertyKind};
pub use report::{build_message, Report, ReportError, ReportVersion};
pub use summary::Summary;
pub use table::Table;
