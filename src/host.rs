//! Static host for the compiled bundle (`trunk build` output).
//!
//! Serves `DIST_DIR` and falls back to its `index.html` for unknown paths so
//! the single-page app can be reloaded anywhere.

use crate::log::{log_event, LogLevel, DEFAULT_LOG_LEVEL};
use axum::Router;
use serde_json::json;
use std::path::PathBuf;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const DEFAULT_DIST_DIR: &str = "dist";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = non_empty(lookup("DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = LogLevel::parse_or(lookup("LOG_LEVEL").as_deref(), DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            log_level,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

fn parse_u16_with_bounds(value: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn router(config: &HostConfig) -> Router {
    let static_service =
        ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(config.index_path()));

    Router::new().fallback_service(static_service)
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env();
    let app = router(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    log_event(
        config.log_level,
        LogLevel::Info,
        "host_listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> HostConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[("PORT", " 3000 "), ("DIST_DIR", "public"), ("LOG_LEVEL", "warn")]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.index_path(), PathBuf::from("public/index.html"));
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn invalid_port_falls_back() {
        assert_eq!(config_from(&[("PORT", "0")]).port, 8080);
        assert_eq!(config_from(&[("PORT", "70000")]).port, 8080);
        assert_eq!(config_from(&[("PORT", "http")]).port, 8080);
    }

    #[test]
    fn blank_dist_dir_falls_back() {
        assert_eq!(config_from(&[("DIST_DIR", "   ")]).dist_dir, PathBuf::from("dist"));
    }
}
