//! Mock table source for testing
//!
//! This source serves predefined tables without touching a database. It's
//! useful for:
//! - Unit testing verification logic
//! - CI pipelines without database credentials
//! - Simulating no-connection and enumeration-failure conditions
//!
//! ## Usage
//!
//! ```rust,ignore
//! use modelverify_catalog::{MockTableSource, TableSource};
//! use modelverify_core::Table;
//!
//! let source = MockTableSource::new()
//!     .with_table(Table::new("Order", "sales").with_columns(vec!["Id", "Total"]));
//!
//! let tables = source.tables()?;
//! ```
//!
//! ## Simulating failures
//!
//! ```rust,ignore
//! // No usable connection
//! let source = MockTableSource::new().with_connection_id("");
//!
//! // Enumeration failure
//! let source = MockTableSource::new().with_enumeration_error("connection reset");
//! assert!(source.tables().is_err());
//! ```

use crate::source::{CatalogError, TableSource};
use modelverify_core::{matching, Table};
use std::cell::Cell;

/// In-memory table source with declared tables
///
/// Tables come back in declaration order. The source also counts how many
/// times `tables()` was invoked, so memoization behavior can be asserted in
/// tests.
#[derive(Debug, Clone, Default)]
pub struct MockTableSource {
    connection_id: String,
    tables: Vec<Table>,
    enumeration_error: Option<String>,
    tables_calls: Cell<usize>,
}

impl MockTableSource {
    /// Create an empty source with a usable connection identifier
    pub fn new() -> Self {
        Self {
            connection_id: "mock://local".to_string(),
            tables: Vec::new(),
            enumeration_error: None,
            tables_calls: Cell::new(0),
        }
    }

    /// Override the connection identifier; empty simulates no connection
    pub fn with_connection_id(mut self, id: impl Into<String>) -> Self {
        self.connection_id = id.into();
        self
    }

    /// Add one table
    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Add several tables at once
    pub fn with_tables(mut self, tables: Vec<Table>) -> Self {
        self.tables.extend(tables);
        self
    }

    /// Make every `tables()` call fail with the given message
    pub fn with_enumeration_error(mut self, message: impl Into<String>) -> Self {
        self.enumeration_error = Some(message.into());
        self
    }

    /// Number of declared tables
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// How many times `tables()` has been invoked on this source
    pub fn tables_call_count(&self) -> usize {
        self.tables_calls.get()
    }
}

impl TableSource for MockTableSource {
    fn connection_id(&self) -> String {
        self.connection_id.clone()
    }

    fn tables(&self) -> Result<Vec<Table>, CatalogError> {
        self.tables_calls.set(self.tables_calls.get() + 1);

        if let Some(message) = &self.enumeration_error {
            return Err(CatalogError::QueryError(message.clone()));
        }

        Ok(self.tables.clone())
    }

    fn matching_columns(
        &self,
        _table: &Table,
        entity_name: &str,
        tolerance: u32,
    ) -> Result<Vec<String>, CatalogError> {
        let resolved = matching::best_table(tolerance, entity_name, &self.tables).ok_or_else(
            || CatalogError::TableNotFound(format!("Table matching '{entity_name}' does not exist")),
        )?;

        Ok(resolved.columns.clone())
    }

    fn columns_of(&self, table: &Table) -> Result<Vec<String>, CatalogError> {
        self.tables
            .iter()
            .find(|t| t.name == table.name && t.database == table.database)
            .map(|t| t.columns.clone())
            .ok_or_else(|| CatalogError::TableNotFound(table.to_string()))
    }
}
