//! Database table sources for model verification
//!
//! This crate provides sources that list the tables of a database together
//! with their column names, so a model can be checked against the live
//! schema.
//!
//! ## Features
//!
//! Enable database support via Cargo features:
//! - `postgres` - PostgreSQL/Redshift support via the blocking `postgres` client
//!
//! The mock and aggregate sources are always available.
//!
//! ## Example
//!
//! ```rust,ignore
//! use modelverify_catalog::{PostgresTableSource, TableSource};
//!
//! let source = PostgresTableSource::connect(
//!     "host=localhost dbname=sales user=postgres password=secret"
//! )?;
//! let tables = source.tables()?;
//! ```

pub mod mock;
pub mod multi;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod source;

pub use mock::MockTableSource;
pub use multi::MultiTableSource;
#[cfg(feature = "postgres")]
pub use postgres::PostgresTableSource;
pub use source::{CatalogError, TableSource};
