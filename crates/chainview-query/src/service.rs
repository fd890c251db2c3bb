// SPDX-License-Identifier: Apache-2.0

use crate::executor::execute_select;
use crate::translator::{Translation, TranslationSource, Translator};
use chainview_model::QueryOutcome;
use rusqlite::Connection;
use tracing::{debug, warn};

/// Orchestrates one natural-language request: translate (total), execute,
/// wrap. The sole entry point for the request layer; owns no retry logic —
/// a single attempt per call, an execution error is terminal for that
/// request.
pub struct QueryService {
    translator: Translator,
}

impl QueryService {
    #[must_use]
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    #[must_use]
    pub fn model_path_enabled(&self) -> bool {
        self.translator.model_path_enabled()
    }

    #[must_use]
    pub fn answer(&self, conn: &Connection, query_text: &str) -> QueryOutcome {
        let Translation { sql, source } = self.translator.translate(query_text);
        let source_label = match source {
            TranslationSource::Model => "model",
            TranslationSource::Fallback => "fallback",
        };
        debug!(source = source_label, sql = sql.as_str(), "translated query");

        match execute_select(conn, &sql) {
            Ok(rows) => QueryOutcome::Success {
                query_text: query_text.to_string(),
                sql,
                rows,
            },
            Err(e) => {
                warn!(error = %e, sql = sql.as_str(), "query execution failed");
                QueryOutcome::Failure {
                    query_text: query_text.to_string(),
                    error_message: format!("error executing query: {e}"),
                }
            }
        }
    }
}
