//! Test fixtures for verification engine integration tests
//!
//! A small sales model with its backing tables, shared by the scenario
//! tests. Table column lists are sorted ascending, as a real catalog source
//! returns them.

use modelverify_core::{Entity, Property, Table};

/// Order entity whose model matches [`order_table`] exactly
pub fn order_entity() -> Entity {
    Entity::new("Order").with_properties(vec![
        Property::scalar("Id", "i64"),
        Property::scalar("Total", "f64"),
        Property::scalar("CustomerId", "i64"),
    ])
}

/// Order entity carrying a property the database lacks
pub fn drifted_order_entity() -> Entity {
    Entity::new("Order").with_properties(vec![
        Property::scalar("Id", "i64"),
        Property::scalar("Total", "f64"),
        Property::scalar("ShipDate", "chrono::NaiveDate"),
    ])
}

/// Customer entity with a collection property that must not be matched
pub fn customer_entity() -> Entity {
    Entity::new("Customer").with_properties(vec![
        Property::scalar("Id", "i64"),
        Property::scalar("Name", "String"),
        Property::scalar("Email", "String"),
        Property::collection("Orders", "Vec<Order>"),
    ])
}

/// Entity mapped onto [`audit_log_table`]
pub fn audit_log_entity() -> Entity {
    Entity::new("AuditLog").with_properties(vec![
        Property::scalar("EntryId", "i64"),
        Property::scalar("At", "chrono::DateTime<chrono::Utc>"),
        Property::scalar("Payload", "String"),
    ])
}

/// Table backing [`order_entity`]
pub fn order_table() -> Table {
    Table::new("Order", "sales").with_columns(vec!["CustomerId", "Id", "Total"])
}

/// Order table missing the ShipDate column
pub fn trimmed_order_table() -> Table {
    Table::new("Order", "sales").with_columns(vec!["Id", "Total"])
}

/// Customers table; the plural name only matches within tolerance
pub fn customers_table() -> Table {
    Table::new("Customers", "sales").with_columns(vec!["Email", "Id", "Name"])
}

/// Audit table living in a second database
pub fn audit_log_table() -> Table {
    Table::new("AuditLog", "audit").with_columns(vec!["At", "EntryId", "Payload"])
}

/// A model manifest in exported-JSON form, with a table override
/// (`Order` is stored in `Orders`) and a column override (`ShipDate` is
/// stored as `ShippedOn`)
pub fn sample_manifest_json() -> &'static str {
    r#"{
        "metadata": { "model_name": "sales" },
        "entities": {
            "Order": {
                "table": "Orders",
                "properties": {
                    "Id": { "type": "i64" },
                    "Total": { "type": "f64" },
                    "ShipDate": { "type": "chrono::NaiveDate", "column": "ShippedOn" },
                    "Customer": { "type": "Customer", "kind": "navigation" }
                }
            }
        }
    }"#
}

/// Table backing the manifest model after its overrides are applied
pub fn orders_table_for_manifest() -> Table {
    Table::new("Orders", "sales").with_columns(vec!["Id", "ShippedOn", "Total"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_fixtures_agree() {
        let entity = order_entity();
        let table = order_table();
        for property in &entity.properties {
            assert!(table.has_column(&property.name));
        }
    }

    #[test]
    fn test_table_columns_are_sorted() {
        for table in [order_table(), customers_table(), audit_log_table()] {
            let mut sorted = table.columns.clone();
            sorted.sort();
            assert_eq!(table.columns, sorted, "{} columns out of order", table.name);
        }
    }
}
