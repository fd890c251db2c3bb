#![forbid(unsafe_code)]

use chainview_llm::{AzureOpenAiClient, AzureOpenAiConfig, CompletionProvider};
use chainview_query::{QueryService, Translator};
use chainview_server::{build_router, validate_startup_config, AppState, ServerConfig};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn build_provider(timeout: Duration) -> Option<Arc<dyn CompletionProvider>> {
    let config = AzureOpenAiConfig::from_env().with_timeout(timeout);
    if !config.is_configured() {
        info!("model endpoint unconfigured; every request will use the fallback rules");
        return None;
    }
    match AzureOpenAiClient::new(&config) {
        Ok(client) => {
            info!(provider = client.name(), "model endpoint configured");
            Some(Arc::new(client))
        }
        Err(e) => {
            warn!(error = %e, "model client build failed; falling back to rules");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = ServerConfig {
        bind: env::var("CHAINVIEW_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        db_path: PathBuf::from(
            env::var("CHAINVIEW_DB").unwrap_or_else(|_| "chainview.sqlite".to_string()),
        ),
        max_body_bytes: env_usize("CHAINVIEW_MAX_BODY_BYTES", 16 * 1024),
        llm_timeout: Duration::from_millis(env_u64("CHAINVIEW_LLM_TIMEOUT_MS", 10_000)),
        log_json: env_bool("CHAINVIEW_LOG_JSON", true),
    };
    init_tracing(config.log_json);
    validate_startup_config(&config)?;

    let provider = build_provider(config.llm_timeout);
    let service = QueryService::new(Translator::new(provider));
    let state = AppState::new(service, config.db_path.clone(), config.max_body_bytes);
    let app = build_router(state);

    let listener = TcpListener::bind(&config.bind)
        .await
        .map_err(|e| format!("bind failed on {}: {e}", config.bind))?;
    info!("chainview-server listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
