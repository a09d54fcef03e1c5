//! Table source trait for fetching database metadata

use modelverify_core::Table;

/// Errors produced by table sources
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Connection failed: {0}")]
    ConnectionError(String),

    #[error("Query failed: {0}")]
    QueryError(String),

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("No source owns database: {0}")]
    RoutingError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Trait for sources that enumerate database tables and their columns
///
/// A source wraps one connection (or a set of them, for the composite). It
/// is pull-only and synchronous: callers drain `tables()` once per run and
/// ask follow-up questions afterwards.
pub trait TableSource {
    /// Identifier of the underlying connection. Empty means no usable
    /// connection; callers report that instead of enumerating.
    fn connection_id(&self) -> String;

    /// Enumerate every table, columns populated.
    fn tables(&self) -> Result<Vec<Table>, CatalogError>;

    /// Columns of the table that best matches `entity_name` at `tolerance`.
    ///
    /// Resolution runs against the snapshot taken by the most recent
    /// `tables()` call on this source; `table` is used by composite sources
    /// to route the question to the connection owning it.
    fn matching_columns(
        &self,
        table: &Table,
        entity_name: &str,
        tolerance: u32,
    ) -> Result<Vec<String>, CatalogError>;

    /// Columns of one already-enumerated table.
    fn columns_of(&self, table: &Table) -> Result<Vec<String>, CatalogError>;
}
