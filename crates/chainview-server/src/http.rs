use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chainview_api::{ask_response_from_outcome, ApiError, AskRequestDto};
use chainview_model::{QueryOutcome, SqlStatement};
use chainview_query::{execute_select, open_store_readonly};
use serde_json::{json, Value};
use tracing::{info, warn};

pub(crate) fn api_error_response(status: StatusCode, err: ApiError) -> Response {
    (status, Json(json!({ "error": err }))).into_response()
}

pub(crate) async fn ask_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    let request: AskRequestDto = match serde_json::from_value(body) {
        Ok(req) => req,
        Err(e) => {
            return api_error_response(
                StatusCode::BAD_REQUEST,
                ApiError::invalid_request_body(&e.to_string()),
            );
        }
    };

    let query_text = request.query.trim().to_string();
    if query_text.is_empty() {
        return api_error_response(StatusCode::BAD_REQUEST, ApiError::empty_query());
    }

    info!(query = %query_text, "ask request");

    // The core is synchronous (blocking store read plus at most one blocking
    // model call), so the whole chain runs off the async workers. One scoped
    // connection per request, dropped with the closure.
    let state_for_call = state.clone();
    let joined = tokio::task::spawn_blocking(move || {
        let conn = match open_store_readonly(&state_for_call.db_path) {
            Ok(conn) => conn,
            Err(e) => {
                warn!(error = %e, "store open failed");
                return QueryOutcome::Failure {
                    query_text,
                    error_message: format!("error executing query: {e}"),
                };
            }
        };
        state_for_call.service.answer(&conn, &query_text)
    })
    .await;

    match joined {
        Ok(outcome) => (StatusCode::OK, Json(ask_response_from_outcome(outcome))).into_response(),
        Err(e) => api_error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::internal(&e.to_string()),
        ),
    }
}

pub(crate) async fn healthz_handler() -> Response {
    (StatusCode::OK, "ok").into_response()
}

pub(crate) async fn readyz_handler(State(state): State<AppState>) -> Response {
    let joined = tokio::task::spawn_blocking(move || {
        let conn = open_store_readonly(&state.db_path)?;
        execute_select(&conn, &SqlStatement::new("SELECT 1")).map(|_| ())
    })
    .await;

    match joined {
        Ok(Ok(())) => (StatusCode::OK, "ready").into_response(),
        Ok(Err(e)) => {
            warn!(error = %e, "readiness probe failed");
            (StatusCode::SERVICE_UNAVAILABLE, "store unavailable").into_response()
        }
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "store unavailable").into_response(),
    }
}
