#![forbid(unsafe_code)]
//! HTTP surface for the NL-to-SQL core. Authentication and the entity CRUD
//! surface live elsewhere; this service owns exactly the ask endpoint and
//! the operational probes.

mod config;
mod http;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use chainview_query::QueryService;
use std::path::PathBuf;
use std::sync::Arc;

pub use config::{validate_startup_config, ServerConfig};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<QueryService>,
    pub db_path: Arc<PathBuf>,
    pub max_body_bytes: usize,
}

impl AppState {
    #[must_use]
    pub fn new(service: QueryService, db_path: PathBuf, max_body_bytes: usize) -> Self {
        Self {
            service: Arc::new(service),
            db_path: Arc::new(db_path),
            max_body_bytes,
        }
    }
}

#[must_use]
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;
    Router::new()
        .route("/v1/ask", post(http::ask_handler))
        .route("/healthz", get(http::healthz_handler))
        .route("/readyz", get(http::readyz_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
