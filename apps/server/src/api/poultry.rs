use std::sync::Arc;

use axum::{routing::post, Json, Router};
use farmdesk_core::poultry::{NewPoultryBatch, PoultryBatch};

use crate::{error::ApiResult, main_lib::AppState};

/// Builds the batch row to store, with the creation-time egg and feed figures.
async fn derive_batch(Json(new_batch): Json<NewPoultryBatch>) -> ApiResult<Json<PoultryBatch>> {
    let batch = new_batch.into_batch()?;
    Ok(Json(batch))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/poultry/batches/derive", post(derive_batch))
}
