//! Display-ready values produced by the aggregation engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::equipment::EquipmentItem;
use crate::expenses::Expense;
use crate::investments::Investment;
use crate::livestock::LivestockAnimal;
use crate::ponds::Pond;
use crate::poultry::PoultryBatch;
use crate::utils::coercion::lenient_vec;

/// Whether a stock adjustment adds or removes fish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockDirection {
    Increase,
    Decrease,
}

/// Relative change between two periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum PercentDelta {
    /// The previous period was zero, so no ratio exists.
    NoBaseline,
    /// Percentage change rounded to one decimal place.
    Change(Decimal),
}

impl PercentDelta {
    pub fn value(&self) -> Option<Decimal> {
        match self {
            PercentDelta::NoBaseline => None,
            PercentDelta::Change(value) => Some(*value),
        }
    }
}

/// One group of a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub label: String,
    pub total: i64,
    /// Share of the grand total (0-100), one decimal place
    pub percentage: Decimal,
}

/// Total for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotal {
    /// `YYYY-MM`
    pub month: String,
    pub month_start: NaiveDate,
    pub total: i64,
}

/// A month in a trend series with its change from the month before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    pub month: String,
    pub total: i64,
    pub change: PercentDelta,
}

/// Projected return on an investment.
///
/// `valid` is false when the initial outlay or the horizon is not positive;
/// every derived field is zero in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiProjection {
    pub valid: bool,
    pub total_return: i64,
    pub roi_percent: Decimal,
    pub monthly_roi_percent: Decimal,
}

impl RoiProjection {
    pub fn invalid() -> Self {
        Self {
            valid: false,
            total_return: 0,
            roi_percent: Decimal::ZERO,
            monthly_roi_percent: Decimal::ZERO,
        }
    }
}

/// Every collection the dashboard reads, already fetched from storage.
/// Absent collections are treated as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmData {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub ponds: Vec<Pond>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub poultry_batches: Vec<PoultryBatch>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub livestock: Vec<LivestockAnimal>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub expenses: Vec<Expense>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub investments: Vec<Investment>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub equipment: Vec<EquipmentItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PondSummary {
    pub pond_count: usize,
    pub active_ponds: usize,
    pub total_capacity: u64,
    pub total_stock: u64,
    /// Whole percent of capacity in use
    pub capacity_utilization: Decimal,
    /// Square metres
    pub total_surface_area: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoultrySummary {
    pub batch_count: usize,
    pub active_batches: usize,
    pub total_birds: u64,
    pub total_daily_eggs: u64,
    /// Kilograms per day
    pub total_feed_consumption: Decimal,
    pub birds_by_breed: Vec<CategoryBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivestockSummary {
    pub head_count: usize,
    pub healthy_count: usize,
    pub total_purchase_value: i64,
    pub head_by_animal_type: Vec<CategoryBreakdown>,
    pub value_by_animal_type: Vec<CategoryBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub expenses_this_month: i64,
    pub expenses_last_month: i64,
    pub expense_change: PercentDelta,
    pub total_expenses: i64,
    pub total_investments: i64,
    pub investments_this_month: i64,
    /// Investments minus expenses
    pub net_position: i64,
    pub expenses_by_category: Vec<CategoryBreakdown>,
    pub expenses_by_section: Vec<CategoryBreakdown>,
    pub investments_by_type: Vec<CategoryBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSummary {
    pub item_count: usize,
    pub total_quantity: u64,
    pub items_by_category: Vec<CategoryBreakdown>,
}

/// Headline figures pre-formatted for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFigures {
    pub total_expenses: String,
    pub expenses_this_month: String,
    pub expense_change: String,
    pub total_investments: String,
    pub net_position: String,
    pub capacity_utilization: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub reference_date: NaiveDate,
    pub currency_symbol: String,
    pub ponds: PondSummary,
    pub poultry: PoultrySummary,
    pub livestock: LivestockSummary,
    pub finance: FinanceSummary,
    pub equipment: EquipmentSummary,
    pub display: DisplayFigures,
}
