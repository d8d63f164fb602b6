use std::sync::Arc;

use crate::config::Config;
use farmdesk_core::dashboard::{DashboardService, DashboardServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub dashboard_service: Arc<dyn DashboardServiceTrait + Send + Sync>,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    config.dashboard.validate()?;
    tracing::info!(
        "Dashboard settings: currency '{}', {} trend months, timezone {}",
        config.dashboard.currency_symbol,
        config.dashboard.trend_months,
        config.dashboard.timezone
    );

    let dashboard_service = Arc::new(DashboardService::new(config.dashboard.clone()));

    Ok(Arc::new(AppState { dashboard_service }))
}
