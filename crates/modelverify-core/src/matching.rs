//! Identifier matching rules
//!
//! Names are compared with an exact-or-prefix rule under a `tolerance`: the
//! maximum length difference permitted for a prefix match to still count.
//! At tolerance 0 the prefix rule degenerates to exact equality.
//!
//! The two call sites use mirrored rules:
//! - entity vs. table is case-sensitive, and the *table* must start with the
//!   entity name (`Order` matches table `Orders`);
//! - property vs. column is case-insensitive (ASCII folding — these are
//!   identifiers, not prose), and the *property* must start with the column
//!   name (`CustomerId` matches column `Customer` at tolerance 2).
//!
//! An empty table name matches any entity. That rule exists so sources can
//! signal "no candidate available" without producing false negatives, and it
//! means existence checks must never let a nameless table witness that an
//! entity's table exists; [`table_exists`] and [`best_table`] skip them.

use crate::table::Table;

/// Whether `table` is an acceptable name match for `entity`.
///
/// Case-sensitive. An empty `table` matches anything; see the module notes
/// for the guard callers need around that.
pub fn table_matches(tolerance: u32, entity: &str, table: &str) -> bool {
    if table.is_empty() {
        return true;
    }
    entity == table || (table.starts_with(entity) && length_gap(entity, table) <= tolerance as usize)
}

/// Whether `column` is an acceptable name match for `property`.
///
/// Case-insensitive, and the prefix direction is reversed from the table
/// rule: the property must start with the column name.
pub fn column_matches(tolerance: u32, property: &str, column: &str) -> bool {
    property.eq_ignore_ascii_case(column)
        || (starts_with_ignore_ascii_case(property, column)
            && length_gap(property, column) <= tolerance as usize)
}

/// Whether any table in `tables` witnesses the existence of `entity`'s table.
///
/// Nameless tables are skipped: an empty catalog, or one containing only
/// unnamed rows, reports the entity as missing rather than silently passing.
pub fn table_exists(tolerance: u32, entity: &str, tables: &[Table]) -> bool {
    tables
        .iter()
        .any(|t| !t.name.is_empty() && table_matches(tolerance, entity, &t.name))
}

/// Resolve the table an entity maps to.
///
/// Deterministic selection, not a closeness metric: candidates are ordered
/// by name ascending, then name length ascending, and the first match wins;
/// tables with identical names keep their source order. Nameless tables are
/// never selected, so this agrees with [`table_exists`] on whether a table
/// can be resolved at all.
pub fn best_table<'t>(tolerance: u32, entity: &str, tables: &'t [Table]) -> Option<&'t Table> {
    let mut ordered: Vec<&Table> = tables.iter().collect();
    ordered.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.name.len().cmp(&b.name.len()))
    });
    ordered
        .into_iter()
        .find(|t| !t.name.is_empty() && table_matches(tolerance, entity, &t.name))
}

fn length_gap(a: &str, b: &str) -> usize {
    a.len().abs_diff(b.len())
}

fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_names_match_at_any_tolerance() {
        for tolerance in 0..=5 {
            assert!(table_matches(tolerance, "Order", "Order"));
            assert!(column_matches(tolerance, "Total", "Total"));
        }
    }

    #[test]
    fn table_rule_is_case_sensitive() {
        assert!(!table_matches(5, "order", "Order"));
        assert!(!table_matches(5, "Order", "ORDERS"));
    }

    #[test]
    fn table_prefix_direction() {
        // The table must extend the entity name, not the other way round.
        assert!(table_matches(1, "Order", "Orders"));
        assert!(!table_matches(1, "Orders", "Order"));
    }

    #[test]
    fn column_rule_ignores_case() {
        assert!(column_matches(0, "customerid", "CustomerId"));
        assert!(column_matches(2, "customerid", "CUSTOMER"));
    }

    #[test]
    fn column_prefix_direction() {
        // The property must extend the column name.
        assert!(column_matches(2, "CustomerId", "Customer"));
        assert!(!column_matches(2, "Customer", "CustomerId"));
    }

    #[test]
    fn tolerance_bounds_the_length_gap() {
        assert!(table_matches(2, "Order", "Orders"));
        assert!(table_matches(2, "Order", "OrderXY"));
        assert!(!table_matches(2, "Order", "OrderLine"));
        assert!(!column_matches(1, "ShipDateTime", "Ship"));
    }

    #[test]
    fn tolerance_zero_is_exact_match() {
        assert!(table_matches(0, "Order", "Order"));
        assert!(!table_matches(0, "Order", "Orders"));
        assert!(column_matches(0, "total", "Total"));
        assert!(!column_matches(0, "Totals", "Total"));
    }

    #[test]
    fn matching_is_monotonic_in_tolerance() {
        let pairs = [("Order", "Orders"), ("Cust", "Customer"), ("A", "ABCDEF")];
        for (entity, table) in pairs {
            for tolerance in 0..5 {
                if table_matches(tolerance, entity, table) {
                    assert!(
                        table_matches(tolerance + 1, entity, table),
                        "{} vs {} matched at {} but not {}",
                        entity,
                        table,
                        tolerance,
                        tolerance + 1
                    );
                }
            }
        }
    }

    #[test]
    fn empty_table_name_matches_anything() {
        assert!(table_matches(0, "Order", ""));
        assert!(table_matches(5, "", ""));
    }

    #[test]
    fn existence_ignores_nameless_tables() {
        let tables = vec![Table::new("", "sales")];
        assert!(!table_exists(5, "Order", &tables));
        assert!(best_table(5, "Order", &tables).is_none());
    }

    #[test]
    fn existence_on_empty_catalog_is_false() {
        assert!(!table_exists(5, "Order", &[]));
    }

    #[test]
    fn best_table_prefers_alphabetical_order() {
        let tables = vec![
            Table::new("OrderLines", "sales"),
            Table::new("OrderA", "sales"),
            Table::new("OrderB", "sales"),
        ];
        let resolved = best_table(5, "Order", &tables).unwrap();
        assert_eq!(resolved.name, "OrderA");
    }

    #[test]
    fn best_table_keeps_source_order_for_identical_names() {
        let tables = vec![
            Table::new("Order", "first"),
            Table::new("Order", "second"),
        ];
        let resolved = best_table(0, "Order", &tables).unwrap();
        assert_eq!(resolved.database, "first");
    }

    #[test]
    fn best_table_agrees_with_table_exists() {
        let tables = vec![
            Table::new("", "sales"),
            Table::new("Customer", "sales"),
            Table::new("Orders", "sales"),
        ];
        for entity in ["Order", "Customer", "Invoice", ""] {
            for tolerance in 0..=5 {
                assert_eq!(
                    table_exists(tolerance, entity, &tables),
                    best_table(tolerance, entity, &tables).is_some(),
                    "disagreement for {:?} at tolerance {}",
                    entity,
                    tolerance
                );
            }
        }
    }
}
