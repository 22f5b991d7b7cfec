use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;
use cofipei_core::constants::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
use cofipei_core::reports::ChartConfig;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub chart_width: u32,
    pub chart_height: u32,
    /// Overrides the bundled chart face when set.
    pub chart_font: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("COFIPEI_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid COFIPEI_LISTEN_ADDR")?;
        let db_path =
            std::env::var("COFIPEI_DB_PATH").unwrap_or_else(|_| "./db/cofipei.db".into());
        let cors_allow = std::env::var("COFIPEI_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("COFIPEI_REQUEST_TIMEOUT_MS", 30000);
        let chart_font = std::env::var("COFIPEI_CHART_FONT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            chart_width: env_or("COFIPEI_CHART_WIDTH", DEFAULT_CHART_WIDTH),
            chart_height: env_or("COFIPEI_CHART_HEIGHT", DEFAULT_CHART_HEIGHT),
            chart_font,
        })
    }

    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            width: self.chart_width,
            height: self.chart_height,
        }
    }
}

/// Reads a numeric variable; unset or unparseable values use the default.
fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
