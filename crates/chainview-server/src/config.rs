use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub db_path: PathBuf,
    pub max_body_bytes: usize,
    pub llm_timeout: Duration,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            db_path: PathBuf::from("chainview.sqlite"),
            max_body_bytes: 16 * 1024,
            llm_timeout: Duration::from_secs(10),
            log_json: true,
        }
    }
}

pub fn validate_startup_config(config: &ServerConfig) -> Result<(), String> {
    if config.max_body_bytes == 0 {
        return Err("max body bytes must be > 0".to_string());
    }
    if config.llm_timeout.is_zero() {
        return Err("llm timeout must be > 0".to_string());
    }
    if config.db_path.as_os_str().is_empty() {
        return Err("db path must not be empty".to_string());
    }
    config
        .bind
        .parse::<std::net::SocketAddr>()
        .map_err(|e| format!("invalid bind addr {}: {e}", config.bind))?;
    Ok(())
}
