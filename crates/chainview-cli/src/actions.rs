use chainview_api::{ask_response_from_outcome, AskResponseDto};
use chainview_llm::{AzureOpenAiClient, AzureOpenAiConfig, CompletionProvider};
use chainview_model::catalog_ddl;
use chainview_query::{open_store_readonly, QueryService, Translator};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

const SEED_SQL: &str = "
    INSERT INTO inventory (product_name, description, quantity, unit_price, category, location, last_updated) VALUES
      ('Stretch film roll', '500m industrial stretch film', 3, 14.50, 'packaging', 'A-01', '2024-05-01T09:00:00Z'),
      ('Pallet jack', 'Manual 2.5t pallet jack', 12, 310.00, 'equipment', 'B-03', '2024-05-01T09:00:00Z'),
      ('Thermal labels 4x6', 'Box of 1000 labels', 240, 18.90, 'packaging', 'A-02', '2024-05-02T10:30:00Z'),
      ('Forklift battery', '48V lead-acid battery', 2, 1850.00, 'equipment', 'C-01', '2024-05-03T08:15:00Z');

    INSERT INTO suppliers (name, contact_name, email, phone, address, is_active) VALUES
      ('Acme Logistics', 'Rita Okafor', 'rita@acme-logistics.example', '+1-555-0101', '12 Dock Rd', TRUE),
      ('Harbor Supply Co', 'Jon Meyer', 'jon@harborsupply.example', '+1-555-0102', '8 Quay St', TRUE),
      ('Dormant Goods', NULL, NULL, NULL, NULL, FALSE);

    INSERT INTO orders (order_date, status, total_amount, supplier_id) VALUES
      ('2024-05-01T12:00:00Z', 'pending', 435.00, 1),
      ('2024-04-28T12:00:00Z', 'completed', 1850.00, 2),
      ('2024-04-20T12:00:00Z', 'cancelled', 56.70, 1);

    INSERT INTO order_items (order_id, inventory_id, quantity, unit_price) VALUES
      (1, 1, 30, 14.50), (2, 4, 1, 1850.00), (3, 3, 3, 18.90);

    INSERT INTO users (email, hashed_password, full_name, is_active) VALUES
      ('ops@chainview.example', '$argon2id$stub$ops', 'Ops Admin', TRUE),
      ('viewer@chainview.example', '$argon2id$stub$viewer', 'Read Only', TRUE);

    INSERT INTO activity_logs (user_id, action, entity_type, entity_id, details, timestamp) VALUES
      (1, 'create', 'order', 1, 'order placed with Acme Logistics', '2024-05-01T12:00:01Z'),
      (1, 'update', 'inventory', 1, 'cycle count adjusted quantity to 3', '2024-05-02T15:40:00Z');
";

pub(crate) fn init_store(db: &Path, seed: bool) -> Result<String, String> {
    let conn = Connection::open(db).map_err(|e| e.to_string())?;
    conn.execute_batch(catalog_ddl()).map_err(|e| e.to_string())?;
    if seed {
        conn.execute_batch(SEED_SQL).map_err(|e| e.to_string())?;
    }
    Ok(format!(
        "initialized {} ({})",
        db.display(),
        if seed { "with demo data" } else { "empty" }
    ))
}

fn build_provider() -> Option<Arc<dyn CompletionProvider>> {
    let config = AzureOpenAiConfig::from_env();
    if !config.is_configured() {
        return None;
    }
    AzureOpenAiClient::new(&config)
        .ok()
        .map(|client| Arc::new(client) as Arc<dyn CompletionProvider>)
}

pub(crate) fn ask(db: &Path, question: &str) -> Result<AskResponseDto, String> {
    let conn = open_store_readonly(db)
        .map_err(|e| format!("cannot open store {}: {e}", db.display()))?;
    let service = QueryService::new(Translator::new(build_provider()));
    Ok(ask_response_from_outcome(service.answer(&conn, question)))
}

pub(crate) fn print_plain(response: &AskResponseDto) {
    println!("query: {}", response.query);
    if let Some(sql) = &response.sql {
        println!("sql:   {sql}");
    }
    match (&response.results, &response.error) {
        (Some(rows), _) => {
            println!("rows:  {}", rows.len());
            for row in rows {
                match serde_json::to_string(row) {
                    Ok(rendered) => println!("  {rendered}"),
                    Err(_) => println!("  <unrenderable row>"),
                }
            }
        }
        (None, Some(error)) => println!("error: {error}"),
        (None, None) => {}
    }
}
