//! Aggregation of several table sources behind one [`TableSource`]
//!
//! A model frequently spans more than one database. `MultiTableSource` owns a
//! list of child sources, enumerates all of their tables in order, and routes
//! column lookups back to the child that owns the table's database.
//!
//! ## Routing
//!
//! A table belongs to the child whose connection identifier contains the
//! table's database label. Lookups for a database no child owns fail with
//! [`CatalogError::RoutingError`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use modelverify_catalog::{MockTableSource, MultiTableSource, TableSource};
//!
//! let combined = MultiTableSource::new()
//!     .with_source(sales_source)
//!     .with_source(audit_source);
//!
//! let tables = combined.tables()?;
//! ```

use crate::source::{CatalogError, TableSource};
use modelverify_core::Table;
use tracing::debug;

/// Table source that fans out over an ordered list of child sources
pub struct MultiTableSource {
    sources: Vec<Box<dyn TableSource>>,
}

impl MultiTableSource {
    /// Create an aggregate with no children
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Append one child source
    pub fn with_source(mut self, source: impl TableSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Build from an already-boxed list of children
    pub fn from_sources(sources: Vec<Box<dyn TableSource>>) -> Self {
        Self { sources }
    }

    /// Open one PostgreSQL source per connection string, in order
    #[cfg(feature = "postgres")]
    pub fn from_connection_strings<S: AsRef<str>>(
        connection_strings: &[S],
    ) -> Result<Self, CatalogError> {
        let mut sources: Vec<Box<dyn TableSource>> = Vec::with_capacity(connection_strings.len());
        for connection_string in connection_strings {
            let source = crate::postgres::PostgresTableSource::connect(connection_string.as_ref())?;
            sources.push(Box::new(source));
        }
        Ok(Self { sources })
    }

    /// Number of child sources
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    fn route(&self, database: &str) -> Result<&dyn TableSource, CatalogError> {
        self.sources
            .iter()
            .map(|source| source.as_ref())
            .find(|source| source.connection_id().contains(database))
            .ok_or_else(|| CatalogError::RoutingError(database.to_string()))
    }
}

impl Default for MultiTableSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TableSource for MultiTableSource {
    /// First non-empty child identifier, or empty when there is none
    fn connection_id(&self) -> String {
        self.sources
            .iter()
            .map(|source| source.connection_id())
            .find(|id| !id.is_empty())
            .unwrap_or_default()
    }

    fn tables(&self) -> Result<Vec<Table>, CatalogError> {
        let mut tables = Vec::new();
        for source in &self.sources {
            tables.extend(source.tables()?);
        }
        debug!("enumerated {} tables across {} sources", tables.len(), self.sources.len());
        Ok(tables)
    }

    fn matching_columns(
        &self,
        table: &Table,
        entity_name: &str,
        tolerance: u32,
    ) -> Result<Vec<String>, CatalogError> {
        let owner = self.route(&table.database)?;
        owner.matching_columns(table, entity_name, tolerance)
    }

    /// Tables from `tables()` already carry their columns, so the aggregate
    /// answers from the value instead of routing a second query.
    fn columns_of(&self, table: &Table) -> Result<Vec<String>, CatalogError> {
        Ok(table.columns.clone())
    }
}
