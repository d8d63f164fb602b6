use std::sync::Arc;

use axum::{routing::post, Json, Router};
use farmdesk_core::dashboard::StockDirection;
use farmdesk_core::ponds::Pond;
use farmdesk_core::utils::coercion::lenient_u64;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StockAdjustmentRequest {
    pond: Pond,
    #[serde(default, deserialize_with = "lenient_u64")]
    delta: u64,
    direction: StockDirection,
}

/// Returns the pond with its new stock, or 409 when the change is rejected.
async fn adjust_stock(Json(request): Json<StockAdjustmentRequest>) -> ApiResult<Json<Pond>> {
    if request.delta == 0 {
        return Err(ApiError::BadRequest(
            "Stock adjustment must be greater than zero".to_string(),
        ));
    }
    let mut pond = request.pond;
    let adjusted = pond.adjust_stock(request.delta, request.direction)?;
    tracing::info!(
        "Adjusted stock of pond {} ({:?} {}): now {}",
        pond.id,
        request.direction,
        request.delta,
        adjusted
    );
    Ok(Json(pond))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/ponds/stock-adjustment", post(adjust_stock))
}
