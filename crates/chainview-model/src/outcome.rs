// SPDX-License-Identifier: Apache-2.0

use crate::statement::SqlStatement;
use crate::value::ResultRow;

/// Terminal result of one natural-language query. Never persisted; the wire
/// envelope in `chainview-api` is derived from it.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Success {
        query_text: String,
        sql: SqlStatement,
        rows: Vec<ResultRow>,
    },
    Failure {
        query_text: String,
        error_message: String,
    },
}

impl QueryOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub fn query_text(&self) -> &str {
        match self {
            Self::Success { query_text, .. } | Self::Failure { query_text, .. } => query_text,
        }
    }
}
