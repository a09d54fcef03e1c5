//! Database-side types: enumerated tables

use serde::{Deserialize, Serialize};
use std::fmt;

/// A physical table enumerated from a table source
///
/// `database` disambiguates tables that share a name across the underlying
/// connections of a composite source. Column names are populated at
/// enumeration time and are immutable for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table name
    pub name: String,

    /// Name of the database the table lives in
    pub database: String,

    /// Column names, in the order the source produced them
    pub columns: Vec<String>,
}

impl Table {
    /// Create a table with no columns
    pub fn new(name: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            database: database.into(),
            columns: Vec::new(),
        }
    }

    /// Set the column names
    pub fn with_columns<S: Into<String>>(mut self, columns: Vec<S>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the table has a column with exactly this name
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Column names as string slices
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(String::as_str).collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.database, self.name)
    }
}
