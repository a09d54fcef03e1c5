//! Per-entity verification results

use crate::matching;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entity label of the summary reporting an unusable connection.
pub const INVALID_CONNECTION: &str = "Invalid Connection";

/// Entity label of the synthetic summary listing unmatched entities.
pub const MISSING_TABLES: &str = "Missing tables";

/// Entity label of the summary reporting a terminal enumeration failure.
pub const DATABASE_ERROR: &str = "Database";

/// The verification result for one entity, or one synthetic failure entry.
///
/// A summary is immutable once constructed. `missing_columns` is computed
/// eagerly in [`Summary::new`] and holds the subset of `properties` with no
/// matching column — except when `table_missing` is set, in which case it
/// carries the unmatched entity names (for [`Summary::missing_tables`]) or
/// the failure message (for [`Summary::database_error`]) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Entity name, or one of the synthetic labels
    pub entity: String,

    /// Database the resolved table lives in (empty on synthetic entries)
    pub database: String,

    /// Resolved table name (empty on synthetic entries)
    pub table: String,

    /// Column-eligible property names, as the entity source produced them
    pub properties: Vec<String>,

    /// Column names of the resolved table
    pub columns: Vec<String>,

    /// Properties with no matching column; entity names or a failure
    /// message when `table_missing` is set
    pub missing_columns: Vec<String>,

    /// Whether this entry reports missing tables or a failed run rather
    /// than a per-column comparison
    pub table_missing: bool,

    tolerance: u32,
}

impl Summary {
    /// Build the comparison record for one entity against its resolved table.
    pub fn new(
        entity: impl Into<String>,
        database: impl Into<String>,
        table: impl Into<String>,
        properties: Vec<String>,
        columns: Vec<String>,
        tolerance: u32,
    ) -> Self {
        let missing_columns = properties
            .iter()
            .filter(|p| !has_column(tolerance, p, &columns))
            .cloned()
            .collect();

        Self {
            entity: entity.into(),
            database: database.into(),
            table: table.into(),
            properties,
            columns,
            missing_columns,
            table_missing: false,
            tolerance,
        }
    }

    /// Summary reporting that the table source has no usable connection.
    pub fn invalid_connection() -> Self {
        Self::synthetic(INVALID_CONNECTION, Vec::new())
    }

    /// Summary listing the entities for which no table matched.
    pub fn missing_tables(entity_names: Vec<String>) -> Self {
        Self::synthetic(MISSING_TABLES, entity_names)
    }

    /// Summary reporting an enumeration failure; the error text rides in
    /// `missing_columns`.
    pub fn database_error(message: impl Into<String>) -> Self {
        Self::synthetic(DATABASE_ERROR, vec![message.into()])
    }

    fn synthetic(entity: &str, missing_columns: Vec<String>) -> Self {
        Self {
            entity: entity.to_string(),
            database: String::new(),
            table: String::new(),
            properties: Vec::new(),
            columns: Vec::new(),
            missing_columns,
            table_missing: true,
            tolerance: 0,
        }
    }

    /// Whether anything is missing: columns, or names/messages on a
    /// `table_missing` entry.
    pub fn has_missing_columns(&self) -> bool {
        !self.missing_columns.is_empty()
    }

    /// Property name → the first column that matched it, for diagnostic
    /// display. `None` means no column matched at the summary's tolerance.
    pub fn comparison(&self) -> BTreeMap<String, Option<String>> {
        self.properties
            .iter()
            .map(|p| {
                let matched = self
                    .columns
                    .iter()
                    .find(|c| matching::column_matches(self.tolerance, p, c))
                    .cloned();
                (p.clone(), matched)
            })
            .collect()
    }
}

fn has_column(tolerance: u32, property: &str, columns: &[String]) -> bool {
    columns
        .iter()
        .any(|c| matching::column_matches(tolerance, property, c))
}
