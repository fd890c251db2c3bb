// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Request-layer rejections only. Executor failures are not API errors —
/// they ride the ask envelope with `success: false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ApiErrorCode {
    InvalidRequestBody,
    EmptyQuery,
    InternalError,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn invalid_request_body(reason: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidRequestBody,
            "invalid request body",
            json!({ "reason": reason }),
        )
    }

    #[must_use]
    pub fn empty_query() -> Self {
        Self::new(
            ApiErrorCode::EmptyQuery,
            "query must not be empty",
            json!({ "field": "query" }),
        )
    }

    #[must_use]
    pub fn internal(reason: &str) -> Self {
        Self::new(
            ApiErrorCode::InternalError,
            "internal error",
            json!({ "reason": reason }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_serialize_snake_case() {
        let json = serde_json::to_value(ApiError::empty_query()).expect("serialize");
        assert_eq!(json["code"], "empty_query");
        assert_eq!(json["details"]["field"], "query");
    }
}
