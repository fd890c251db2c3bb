// SPDX-License-Identifier: Apache-2.0

use chainview_model::{ResultRow, ScalarValue, SqlStatement};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use std::fmt::{Display, Formatter};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// The store could not be opened at all.
    Store(String),
    /// The engine rejected or failed the statement; carries its raw message.
    Sql(String),
}

impl Display for ExecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(msg) | Self::Sql(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ExecError {}

/// Open one read-only connection to the store. Callers scope it to a single
/// request and drop it at the end of the call, success or not.
pub fn open_store_readonly(path: &Path) -> Result<Connection, ExecError> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| ExecError::Store(e.to_string()))
}

fn scalar_from_ref(value: ValueRef<'_>) -> ScalarValue {
    match value {
        ValueRef::Null => ScalarValue::Null,
        ValueRef::Integer(v) => ScalarValue::Integer(v),
        ValueRef::Real(v) => ScalarValue::Real(v),
        ValueRef::Text(bytes) => ScalarValue::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => ScalarValue::Blob(bytes.to_vec()),
    }
}

/// Run one statement and materialize every row, preserving the projected
/// column order. Any engine complaint (bad syntax, unknown table or column,
/// broken connection) surfaces verbatim; no rows accompany an error.
pub fn execute_select(
    conn: &Connection,
    sql: &SqlStatement,
) -> Result<Vec<ResultRow>, ExecError> {
    let mut stmt = conn
        .prepare(sql.as_str())
        .map_err(|e| ExecError::Sql(e.to_string()))?;
    let column_names: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(ToString::to_string)
        .collect();

    let mut rows = stmt.query([]).map_err(|e| ExecError::Sql(e.to_string()))?;
    let mut out = Vec::new();
    while let Some(row) = rows.next().map_err(|e| ExecError::Sql(e.to_string()))? {
        let mut pairs = Vec::with_capacity(column_names.len());
        for (idx, name) in column_names.iter().enumerate() {
            let value = row
                .get_ref(idx)
                .map_err(|e| ExecError::Sql(e.to_string()))?;
            pairs.push((name.clone(), scalar_from_ref(value)));
        }
        out.push(ResultRow::from_pairs(pairs));
    }
    Ok(out)
}
