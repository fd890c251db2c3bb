// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Chainview model SSOT: the fixed relational schema catalog and the
//! transient value types one natural-language query produces.

mod catalog;
mod outcome;
mod statement;
mod value;

pub use catalog::{
    catalog_ddl, render_catalog, table_names, ColumnSpec, TableSpec, CATALOG_TABLES,
};
pub use outcome::QueryOutcome;
pub use statement::SqlStatement;
pub use value::{ResultRow, ScalarValue};
