// SPDX-License-Identifier: Apache-2.0

//! The fixed six-table schema handed to the translation layer. The catalog
//! text is a prompt contract: the model only ever sees these tables, and the
//! executor must not assume anything beyond them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: &'static str,
    /// Attributes rendered inside the parenthesis ("primary key", "indexed",
    /// "foreign key to suppliers.id"). Empty when none.
    pub attrs: &'static str,
    /// Enumerated values rendered after the column line. Empty when open.
    pub values: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [ColumnSpec],
}

const fn col(name: &'static str, kind: &'static str, attrs: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        kind,
        attrs,
        values: "",
    }
}

const fn col_enum(
    name: &'static str,
    kind: &'static str,
    attrs: &'static str,
    values: &'static str,
) -> ColumnSpec {
    ColumnSpec {
        name,
        kind,
        attrs,
        values,
    }
}

pub const CATALOG_TABLES: &[TableSpec] = &[
    TableSpec {
        name: "inventory",
        columns: &[
            col("id", "int", "primary key"),
            col("product_name", "string", "indexed"),
            col("description", "string", ""),
            col("quantity", "int", ""),
            col("unit_price", "float", ""),
            col("category", "string", "indexed"),
            col("location", "string", ""),
            col("last_updated", "datetime", ""),
        ],
    },
    TableSpec {
        name: "suppliers",
        columns: &[
            col("id", "int", "primary key"),
            col("name", "string", "indexed"),
            col("contact_name", "string", ""),
            col("email", "string", ""),
            col("phone", "string", ""),
            col("address", "string", ""),
            col("is_active", "boolean", ""),
        ],
    },
    TableSpec {
        name: "orders",
        columns: &[
            col("id", "int", "primary key"),
            col("order_date", "datetime", ""),
            col_enum("status", "string", "indexed", "pending, completed, cancelled"),
            col("total_amount", "float", ""),
            col("supplier_id", "int", "foreign key to suppliers.id"),
        ],
    },
    TableSpec {
        name: "order_items",
        columns: &[
            col("id", "int", "primary key"),
            col("order_id", "int", "foreign key to orders.id"),
            col("inventory_id", "int", "foreign key to inventory.id"),
            col("quantity", "int", ""),
            col("unit_price", "float", ""),
        ],
    },
    TableSpec {
        name: "users",
        columns: &[
            col("id", "int", "primary key"),
            col("email", "string", "unique, indexed"),
            col("hashed_password", "string", ""),
            col("full_name", "string", ""),
            col("is_active", "boolean", ""),
        ],
    },
    TableSpec {
        name: "activity_logs",
        columns: &[
            col("id", "int", "primary key"),
            col("user_id", "int", "foreign key to users.id"),
            col("action", "string", ""),
            col_enum("entity_type", "string", "", "inventory, order, supplier"),
            col("entity_id", "int", ""),
            col("details", "text", ""),
            col("timestamp", "datetime", ""),
        ],
    },
];

#[must_use]
pub fn table_names() -> Vec<&'static str> {
    CATALOG_TABLES.iter().map(|t| t.name).collect()
}

/// Render the catalog as the textual schema description supplied to the
/// language model. Layout is part of the prompt contract; keep it stable.
#[must_use]
pub fn render_catalog() -> String {
    let mut out = String::from("Tables:\n");
    for (i, table) in CATALOG_TABLES.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, table.name));
        for column in table.columns {
            if column.attrs.is_empty() {
                out.push_str(&format!("   - {} ({})", column.name, column.kind));
            } else {
                out.push_str(&format!(
                    "   - {} ({}, {})",
                    column.name, column.kind, column.attrs
                ));
            }
            if !column.values.is_empty() {
                out.push_str(&format!(" - values: {}", column.values));
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// DDL batch provisioning the six catalog tables in a SQLite store. Used by
/// the CLI `init` command and by tests; the query core itself never writes.
#[must_use]
pub fn catalog_ddl() -> &'static str {
    "
    CREATE TABLE IF NOT EXISTS inventory (
      id INTEGER PRIMARY KEY,
      product_name TEXT NOT NULL,
      description TEXT,
      quantity INTEGER NOT NULL DEFAULT 0,
      unit_price REAL NOT NULL DEFAULT 0,
      category TEXT,
      location TEXT,
      last_updated TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_inventory_product_name ON inventory(product_name);
    CREATE INDEX IF NOT EXISTS idx_inventory_category ON inventory(category);

    CREATE TABLE IF NOT EXISTS suppliers (
      id INTEGER PRIMARY KEY,
      name TEXT NOT NULL,
      contact_name TEXT,
      email TEXT,
      phone TEXT,
      address TEXT,
      is_active BOOLEAN NOT NULL DEFAULT TRUE
    );
    CREATE INDEX IF NOT EXISTS idx_suppliers_name ON suppliers(name);

    CREATE TABLE IF NOT EXISTS orders (
      id INTEGER PRIMARY KEY,
      order_date TEXT,
      status TEXT NOT NULL DEFAULT 'pending',
      total_amount REAL,
      supplier_id INTEGER REFERENCES suppliers(id)
    );
    CREATE INDEX IF NOT EXISTS idx_orders_status ON orders(status);

    CREATE TABLE IF NOT EXISTS order_items (
      id INTEGER PRIMARY KEY,
      order_id INTEGER REFERENCES orders(id),
      inventory_id INTEGER REFERENCES inventory(id),
      quantity INTEGER NOT NULL,
      unit_price REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS users (
      id INTEGER PRIMARY KEY,
      email TEXT NOT NULL UNIQUE,
      hashed_password TEXT NOT NULL,
      full_name TEXT,
      is_active BOOLEAN NOT NULL DEFAULT TRUE
    );

    CREATE TABLE IF NOT EXISTS activity_logs (
      id INTEGER PRIMARY KEY,
      user_id INTEGER REFERENCES users(id),
      action TEXT NOT NULL,
      entity_type TEXT,
      entity_id INTEGER,
      details TEXT,
      timestamp TEXT
    );
    "
}
