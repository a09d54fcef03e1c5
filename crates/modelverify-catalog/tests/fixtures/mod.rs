//! Test fixtures for table source integration tests
//!
//! This module provides reusable table definitions for testing sources and
//! verification. Column lists are sorted ascending, matching what a real
//! information_schema query returns.

use modelverify_core::Table;

/// Create a typical orders table
///
/// Represents an e-commerce orders table with:
/// - Primary key (OrderId)
/// - Foreign key (CustomerId)
/// - Shipping and financial data
pub fn orders_table() -> Table {
    Table::new("Orders", "sales").with_columns(vec![
        "CustomerId",
        "OrderDate",
        "OrderId",
        "ShippedOn",
        "Total",
    ])
}

/// Create a typical customers table
pub fn customers_table() -> Table {
    Table::new("Customers", "sales").with_columns(vec!["Address", "CustomerId", "Email", "Name"])
}

/// Create an audit log table living in a second database
pub fn audit_log_table() -> Table {
    Table::new("AuditLog", "audit").with_columns(vec!["At", "EntryId", "Payload"])
}

/// Create a table whose name is empty (edge case)
///
/// Some catalogs surface nameless system relations; matching must skip them.
pub fn nameless_table() -> Table {
    Table::new("", "sales").with_columns(vec!["Anything"])
}

/// All tables of the sales database, in enumeration order
pub fn sales_tables() -> Vec<Table> {
    vec![orders_table(), customers_table()]
}

/// Create a wide table with `num_columns` columns
///
/// Useful for testing behavior with large schemas.
pub fn wide_table(num_columns: usize) -> Table {
    let columns: Vec<String> = (0..num_columns).map(|i| format!("Column{i:03}")).collect();
    Table::new("Wide", "sales").with_columns(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_table() {
        let table = orders_table();
        assert_eq!(table.name, "Orders");
        assert_eq!(table.database, "sales");
        assert_eq!(table.columns.len(), 5);
        assert!(table.has_column("OrderId"));
    }

    #[test]
    fn test_fixture_columns_are_sorted() {
        for table in sales_tables() {
            let mut sorted = table.columns.clone();
            sorted.sort();
            assert_eq!(table.columns, sorted, "{} columns out of order", table.name);
        }
    }

    #[test]
    fn test_nameless_table() {
        assert!(nameless_table().name.is_empty());
    }

    #[test]
    fn test_wide_table() {
        let table = wide_table(100);
        assert_eq!(table.columns.len(), 100);
        assert!(table.has_column("Column000"));
        assert!(table.has_column("Column099"));
    }
}
