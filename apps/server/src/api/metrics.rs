use std::sync::Arc;

use axum::{routing::post, Json, Router};
use farmdesk_core::dashboard::{capacity_utilization, percent_delta, PercentDelta};
use farmdesk_core::utils::coercion::{lenient_i64, lenient_u64};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PercentDeltaRequest {
    #[serde(default, deserialize_with = "lenient_i64")]
    current: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    previous: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UtilizationRequest {
    #[serde(default, deserialize_with = "lenient_u64")]
    total_stock: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    total_capacity: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UtilizationResponse {
    utilization: Decimal,
}

async fn get_percent_delta(Json(request): Json<PercentDeltaRequest>) -> Json<PercentDelta> {
    Json(percent_delta(request.current, request.previous))
}

async fn get_capacity_utilization(
    Json(request): Json<UtilizationRequest>,
) -> Json<UtilizationResponse> {
    Json(UtilizationResponse {
        utilization: capacity_utilization(request.total_stock, request.total_capacity),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/metrics/percent-delta", post(get_percent_delta))
        .route(
            "/metrics/capacity-utilization",
            post(get_capacity_utilization),
        )
}
