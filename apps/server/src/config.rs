use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use farmdesk_core::settings::DashboardSettings;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// `text` or `json`
    pub log_format: String,
    pub dashboard: DashboardSettings,
}

impl Config {
    /// Reads `FD_*` variables, loading a `.env` file first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listen_addr: SocketAddr = lookup("FD_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid FD_LISTEN_ADDR")?;
        let cors_allow = lookup("FD_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = lookup("FD_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(30000);
        let log_format = lookup("FD_LOG_FORMAT").unwrap_or_else(|| "text".into());

        let mut dashboard = DashboardSettings::default();
        if let Some(symbol) = lookup("FD_CURRENCY_SYMBOL") {
            dashboard.currency_symbol = symbol;
        }
        if let Some(months) = lookup("FD_TREND_MONTHS") {
            dashboard.trend_months = months
                .trim()
                .parse()
                .context("Invalid FD_TREND_MONTHS")?;
        }
        if let Some(timezone) = lookup("FD_TIMEZONE") {
            dashboard.timezone = timezone;
        }
        dashboard.validate()?;

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
            dashboard,
        })
    }
}
