use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::NaiveDate;
use farmdesk_core::dashboard::{DashboardSummary, FarmData, MonthlyTrendPoint};
use farmdesk_core::expenses::Expense;
use farmdesk_core::utils::coercion::lenient_vec;
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryRequest {
    #[serde(default)]
    data: FarmData,
    reference_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseTrendRequest {
    #[serde(default, deserialize_with = "lenient_vec")]
    expenses: Vec<Expense>,
    reference_date: Option<NaiveDate>,
}

fn reference_date(state: &AppState, requested: Option<NaiveDate>) -> ApiResult<NaiveDate> {
    match requested {
        Some(date) => Ok(date),
        None => Ok(state.dashboard_service.settings().today()?),
    }
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummaryRequest>,
) -> ApiResult<Json<DashboardSummary>> {
    let date = reference_date(&state, request.reference_date)?;
    let summary = state
        .dashboard_service
        .get_dashboard_summary(&request.data, date);
    Ok(Json(summary))
}

async fn get_expense_trend(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExpenseTrendRequest>,
) -> ApiResult<Json<Vec<MonthlyTrendPoint>>> {
    let date = reference_date(&state, request.reference_date)?;
    let trend = state
        .dashboard_service
        .get_expense_trend(&request.expenses, date);
    Ok(Json(trend))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/summary", post(get_summary))
        .route("/dashboard/expense-trend", post(get_expense_trend))
}
