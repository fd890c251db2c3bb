// SPDX-License-Identifier: Apache-2.0

use crate::fallback::fallback_statement;
use chainview_llm::{CompletionProvider, CompletionRequest, ProviderError};
use chainview_model::{render_catalog, SqlStatement};
use std::sync::Arc;
use tracing::debug;

/// Completions shorter than this are rejected as noise regardless of shape.
const MIN_COMPLETION_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationSource {
    Model,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub sql: SqlStatement,
    pub source: TranslationSource,
}

/// Build the fixed system prompt: instruction plus the rendered schema
/// catalog. The wording is part of the model contract.
#[must_use]
pub fn system_prompt() -> String {
    format!(
        "You are a SQL expert. Convert the following natural language query into a SQL query \
         for a supply chain management system.\n\
         Use the following database schema information:\n\n{}\n\
         Only return the SQL query without any explanations or markdown formatting.\n\
         The query must be a SELECT statement for security reasons.",
        render_catalog()
    )
}

/// Free text to SQL. Total: every input yields a statement, because any
/// model misbehavior collapses into the fallback rule table.
pub struct Translator {
    provider: Option<Arc<dyn CompletionProvider>>,
    system: String,
}

impl Translator {
    /// `provider: None` means the model path is off (unconfigured endpoint);
    /// translation then never attempts a network call.
    #[must_use]
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self {
            provider,
            system: system_prompt(),
        }
    }

    #[must_use]
    pub fn model_path_enabled(&self) -> bool {
        self.provider.is_some()
    }

    #[must_use]
    pub fn translate(&self, query_text: &str) -> Translation {
        match self.model_statement(query_text) {
            Some(sql) => Translation {
                sql,
                source: TranslationSource::Model,
            },
            None => Translation {
                sql: fallback_statement(query_text),
                source: TranslationSource::Fallback,
            },
        }
    }

    fn model_statement(&self, query_text: &str) -> Option<SqlStatement> {
        let provider = self.provider.as_ref()?;
        let request = CompletionRequest {
            system: self.system.clone(),
            user: format!("Convert to SQL: {query_text}"),
            ..CompletionRequest::default()
        };
        match provider.complete(&request) {
            Ok(raw) => {
                let cleaned = sanitize_completion(&raw);
                if cleaned.is_none() {
                    debug!(provider = provider.name(), "completion rejected, using fallback");
                }
                cleaned
            }
            Err(ProviderError(message)) => {
                debug!(provider = provider.name(), error = %message, "completion failed, using fallback");
                None
            }
        }
    }
}

/// Post-process a raw completion into a statement, or reject it.
///
/// Deliberately a string scan, not a SQL parse: drop everything before the
/// first case-insensitive `select` (models like to prepend prose or
/// markdown fences), normalize, then gate on length and the SELECT prefix.
/// Tolerating fenced output is observable behavior; do not replace this
/// with a parser.
pub(crate) fn sanitize_completion(raw: &str) -> Option<SqlStatement> {
    let lowered = raw.to_ascii_lowercase();
    let candidate = match lowered.find("select") {
        Some(idx) => &raw[idx..],
        None => raw,
    };
    let statement = SqlStatement::new(candidate);
    if statement.len() < MIN_COMPLETION_LEN || !statement.is_select() {
        return None;
    }
    Some(statement)
}
