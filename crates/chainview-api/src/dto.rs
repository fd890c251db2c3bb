// SPDX-License-Identifier: Apache-2.0

use chainview_model::{QueryOutcome, ResultRow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AskRequestDto {
    pub query: String,
}

/// Uniform response envelope. Success and failure are both HTTP 200; the
/// `success` flag is the discriminator, and absent fields are omitted
/// rather than serialized as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AskResponseDto {
    pub success: bool,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ResultRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[must_use]
pub fn ask_response_from_outcome(outcome: QueryOutcome) -> AskResponseDto {
    match outcome {
        QueryOutcome::Success {
            query_text,
            sql,
            rows,
        } => AskResponseDto {
            success: true,
            query: query_text,
            sql: Some(sql.into_inner()),
            results: Some(rows),
            error: None,
        },
        QueryOutcome::Failure {
            query_text,
            error_message,
        } => AskResponseDto {
            success: false,
            query: query_text,
            sql: None,
            results: None,
            error: Some(error_message),
        },
    }
}
