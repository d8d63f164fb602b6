use std::sync::Arc;

use axum::{routing::post, Json, Router};
use farmdesk_core::dashboard::{roi_projection, RoiProjection};
use serde::Deserialize;

use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoiRequest {
    initial: i64,
    monthly_return: i64,
    months: i64,
}

async fn get_roi_projection(Json(request): Json<RoiRequest>) -> Json<RoiProjection> {
    Json(roi_projection(
        request.initial,
        request.monthly_return,
        request.months,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/investments/roi-projection", post(get_roi_projection))
}
