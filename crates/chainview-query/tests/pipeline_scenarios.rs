// SPDX-License-Identifier: Apache-2.0

//! End-to-end pipeline scenarios over a real on-disk store opened the way
//! the request layer opens it (read-only, one scoped connection per call).

use chainview_llm::{CompletionProvider, CompletionRequest, ProviderError};
use chainview_model::{catalog_ddl, QueryOutcome, ScalarValue};
use chainview_query::{open_store_readonly, QueryService, Translator};
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

fn provisioned_store() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chainview.sqlite");
    let conn = Connection::open(&path).expect("create store");
    conn.execute_batch(catalog_ddl()).expect("provision tables");
    conn.execute_batch(
        "INSERT INTO inventory (id, product_name, quantity, unit_price)
         VALUES (1, 'Shrink wrap', 3, 6.0);
         INSERT INTO suppliers (id, name, is_active) VALUES (1, 'Acme Logistics', TRUE);
         INSERT INTO orders (id, order_date, status, total_amount, supplier_id)
         VALUES (1, '2024-05-01', 'pending', 42.0, 1),
                (2, '2024-05-02', 'cancelled', 10.0, 1);",
    )
    .expect("seed rows");
    (dir, path)
}

struct CannedProvider(&'static str);

impl CompletionProvider for CannedProvider {
    fn complete(&self, _request: &CompletionRequest) -> Result<String, ProviderError> {
        Ok(self.0.to_string())
    }

    fn name(&self) -> &'static str {
        "canned"
    }
}

fn fallback_service() -> QueryService {
    QueryService::new(Translator::new(None))
}

fn model_service(completion: &'static str) -> QueryService {
    QueryService::new(Translator::new(Some(Arc::new(CannedProvider(completion)))))
}

#[test]
fn low_stock_question_round_trips_to_the_seeded_row() {
    let (_dir, path) = provisioned_store();
    let conn = open_store_readonly(&path).expect("open store");
    match fallback_service().answer(&conn, "show me low stock items") {
        QueryOutcome::Success {
            query_text,
            sql,
            rows,
        } => {
            assert_eq!(query_text, "show me low stock items");
            assert_eq!(
                sql.as_str(),
                "SELECT * FROM inventory WHERE quantity < 10 ORDER BY quantity ASC;"
            );
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].get("quantity"), Some(&ScalarValue::Integer(3)));
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[test]
fn pending_orders_question_round_trips() {
    let (_dir, path) = provisioned_store();
    let conn = open_store_readonly(&path).expect("open store");
    match fallback_service().answer(&conn, "list pending orders") {
        QueryOutcome::Success { sql, rows, .. } => {
            assert_eq!(sql.as_str(), "SELECT * FROM orders WHERE status = 'pending';");
            assert_eq!(rows.len(), 1);
            assert_eq!(
                rows[0].get("status"),
                Some(&ScalarValue::Text("pending".to_string()))
            );
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[test]
fn markdown_wrapped_completion_is_cleaned_then_executed() {
    let (_dir, path) = provisioned_store();
    let conn = open_store_readonly(&path).expect("open store");
    let service = model_service("Here is your query:\n\nSELECT name FROM suppliers");
    match service.answer(&conn, "supplier names") {
        QueryOutcome::Success { sql, rows, .. } => {
            assert_eq!(sql.as_str(), "SELECT name FROM suppliers;");
            assert_eq!(rows.len(), 1);
            assert_eq!(
                rows[0].get("name"),
                Some(&ScalarValue::Text("Acme Logistics".to_string()))
            );
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[test]
fn delete_completion_falls_back_and_store_stays_intact() {
    let (_dir, path) = provisioned_store();
    let conn = open_store_readonly(&path).expect("open store");
    let service = model_service("DELETE FROM inventory;");
    match service.answer(&conn, "remove it all") {
        QueryOutcome::Success { sql, rows, .. } => {
            assert_eq!(sql.as_str(), "SELECT * FROM inventory LIMIT 10;");
            assert_eq!(rows.len(), 1);
        }
        other => panic!("expected success, got {other:?}"),
    }
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM inventory", [], |row| row.get(0))
        .expect("count");
    assert_eq!(count, 1);
}

#[test]
fn unknown_table_reaches_the_caller_as_failure() {
    let (_dir, path) = provisioned_store();
    let conn = open_store_readonly(&path).expect("open store");
    let service = model_service("SELECT * FROM nonexistent;");
    match service.answer(&conn, "query something missing") {
        QueryOutcome::Failure { error_message, .. } => {
            assert!(error_message.contains("nonexistent"), "got: {error_message}");
        }
        other => panic!("expected failure, got {other:?}"),
    }
}
