// SPDX-License-Identifier: Apache-2.0

//! Deterministic keyword-to-SQL rules used whenever the model path is
//! unavailable or its output was rejected. Branch order is semantics:
//! categories are checked top to bottom and the first hit wins, so an input
//! like "cheap supplier" (no inventory keyword) lands in the suppliers
//! branch, never the inventory price branch. Reordering silently changes
//! results for ambiguous inputs; the tests pin the full table.

use chainview_model::SqlStatement;

const INVENTORY_LOW_STOCK: &str =
    "SELECT * FROM inventory WHERE quantity < 10 ORDER BY quantity ASC;";
const INVENTORY_MOST_EXPENSIVE: &str =
    "SELECT * FROM inventory ORDER BY unit_price DESC LIMIT 10;";
const INVENTORY_CHEAPEST: &str = "SELECT * FROM inventory ORDER BY unit_price ASC LIMIT 10;";
const INVENTORY_LISTING: &str = "SELECT * FROM inventory LIMIT 20;";
const SUPPLIERS_ACTIVE: &str = "SELECT * FROM suppliers WHERE is_active = TRUE;";
const SUPPLIERS_LISTING: &str = "SELECT * FROM suppliers LIMIT 20;";
const ORDERS_PENDING: &str = "SELECT * FROM orders WHERE status = 'pending';";
const ORDERS_COMPLETED: &str = "SELECT * FROM orders WHERE status = 'completed';";
const ORDERS_CANCELLED: &str = "SELECT * FROM orders WHERE status = 'cancelled';";
const ORDERS_LISTING: &str = "SELECT * FROM orders LIMIT 20;";
const USERS_LISTING: &str = "SELECT id, email, full_name, is_active FROM users LIMIT 20;";
const DEFAULT_QUERY: &str = "SELECT * FROM inventory LIMIT 10;";

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Map free text to one of the canned SELECT statements. Total: every
/// input, including the empty string, resolves to some query.
#[must_use]
pub fn fallback_sql(query_text: &str) -> &'static str {
    let q = query_text.to_lowercase();

    if contains_any(&q, &["inventory", "product", "item", "stock"]) {
        if q.contains("low") || q.contains("out of") {
            INVENTORY_LOW_STOCK
        } else if q.contains("expensive") || q.contains("highest price") {
            INVENTORY_MOST_EXPENSIVE
        } else if q.contains("cheap") || q.contains("lowest price") {
            INVENTORY_CHEAPEST
        } else {
            INVENTORY_LISTING
        }
    } else if contains_any(&q, &["supplier", "vendor", "provider"]) {
        if q.contains("active") {
            SUPPLIERS_ACTIVE
        } else {
            SUPPLIERS_LISTING
        }
    } else if contains_any(&q, &["order", "purchase"]) {
        if q.contains("pending") {
            ORDERS_PENDING
        } else if q.contains("completed") {
            ORDERS_COMPLETED
        } else if q.contains("cancelled") || q.contains("canceled") {
            ORDERS_CANCELLED
        } else {
            ORDERS_LISTING
        }
    } else if contains_any(&q, &["user", "account"]) {
        USERS_LISTING
    } else {
        DEFAULT_QUERY
    }
}

#[must_use]
pub fn fallback_statement(query_text: &str) -> SqlStatement {
    SqlStatement::new(fallback_sql(query_text))
}
