//! Dashboard module - derived metrics and the farm overview.
//!
//! `metrics` holds the pure aggregation functions; `DashboardService` composes
//! them into the summary shown on the dashboard and reports screens.

mod dashboard_model;
mod dashboard_service;
mod metrics;

pub use dashboard_model::*;
pub use dashboard_service::{DashboardService, DashboardServiceTrait};
pub use metrics::*;

#[cfg(test)]
mod metrics_tests;
