use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use super::dashboard_model::{
    DashboardSummary, DisplayFigures, EquipmentSummary, FarmData, FinanceSummary,
    LivestockSummary, MonthlyTrendPoint, PercentDelta, PondSummary, PoultrySummary,
};
use super::metrics::{
    capacity_utilization, category_breakdown, count_by, month_to_date_total, monthly_totals,
    percent_delta, previous_month_total, total_count, total_decimal, total_of,
};
use crate::equipment::EquipmentItem;
use crate::expenses::Expense;
use crate::investments::Investment;
use crate::livestock::LivestockAnimal;
use crate::ponds::Pond;
use crate::poultry::PoultryBatch;
use crate::settings::DashboardSettings;
use crate::utils::format::{format_currency, format_percent};

/// Builds the dashboard and reports views from fetched collections.
pub trait DashboardServiceTrait: Send + Sync {
    /// Summary for the dashboard; month figures use the month of `reference_date`.
    fn get_dashboard_summary(&self, data: &FarmData, reference_date: NaiveDate)
        -> DashboardSummary;

    /// Monthly expense totals ending with the month of `reference_date`, each
    /// compared with the month before it.
    fn get_expense_trend(
        &self,
        expenses: &[Expense],
        reference_date: NaiveDate,
    ) -> Vec<MonthlyTrendPoint>;

    fn settings(&self) -> &DashboardSettings;
}

pub struct DashboardService {
    settings: DashboardSettings,
}

impl DashboardService {
    pub fn new(settings: DashboardSettings) -> Self {
        DashboardService { settings }
    }

    fn summarize_ponds(ponds: &[Pond]) -> PondSummary {
        let total_capacity = total_count(ponds, |p| p.capacity);
        let total_stock = total_count(ponds, |p| p.current_stock);
        PondSummary {
            pond_count: ponds.len(),
            active_ponds: ponds.iter().filter(|p| p.is_active()).count(),
            total_capacity,
            total_stock,
            capacity_utilization: capacity_utilization(total_stock, total_capacity),
            total_surface_area: total_decimal(ponds, Pond::surface_area),
        }
    }

    fn summarize_poultry(batches: &[PoultryBatch]) -> PoultrySummary {
        PoultrySummary {
            batch_count: batches.len(),
            active_batches: batches.iter().filter(|b| b.is_active()).count(),
            total_birds: total_count(batches, |b| b.quantity),
            total_daily_eggs: total_count(batches, |b| b.daily_eggs),
            total_feed_consumption: total_decimal(batches, |b| b.feed_consumption),
            birds_by_breed: category_breakdown(
                batches,
                |b| b.breed.as_str(),
                |b| i64::try_from(b.quantity).unwrap_or(i64::MAX),
            ),
        }
    }

    fn summarize_livestock(animals: &[LivestockAnimal]) -> LivestockSummary {
        LivestockSummary {
            head_count: animals.len(),
            healthy_count: animals.iter().filter(|a| a.is_healthy()).count(),
            total_purchase_value: total_of(animals, |a| a.purchase_price),
            head_by_animal_type: count_by(animals, |a| a.animal_type.as_str()),
            value_by_animal_type: category_breakdown(
                animals,
                |a| a.animal_type.as_str(),
                |a| a.purchase_price,
            ),
        }
    }

    fn summarize_finance(
        expenses: &[Expense],
        investments: &[Investment],
        reference_date: NaiveDate,
    ) -> FinanceSummary {
        let expenses_this_month =
            month_to_date_total(expenses, |e| e.date, |e| e.amount, reference_date);
        let expenses_last_month =
            previous_month_total(expenses, |e| e.date, |e| e.amount, reference_date);
        let total_expenses = total_of(expenses, |e| e.amount);
        let total_investments = total_of(investments, |i| i.amount);

        FinanceSummary {
            expenses_this_month,
            expenses_last_month,
            expense_change: percent_delta(expenses_this_month, expenses_last_month),
            total_expenses,
            total_investments,
            investments_this_month: month_to_date_total(
                investments,
                |i| i.date,
                |i| i.amount,
                reference_date,
            ),
            net_position: total_investments.saturating_sub(total_expenses),
            expenses_by_category: category_breakdown(
                expenses,
                |e| e.category.as_str(),
                |e| e.amount,
            ),
            expenses_by_section: category_breakdown(
                expenses,
                |e| e.farm_section.as_str(),
                |e| e.amount,
            ),
            investments_by_type: category_breakdown(
                investments,
                |i| i.investment_type.as_str(),
                |i| i.amount,
            ),
        }
    }

    fn summarize_equipment(items: &[EquipmentItem]) -> EquipmentSummary {
        EquipmentSummary {
            item_count: items.len(),
            total_quantity: total_count(items, |i| i.quantity),
            items_by_category: count_by(items, |i| i.category.as_str()),
        }
    }

    fn display_figures(&self, ponds: &PondSummary, finance: &FinanceSummary) -> DisplayFigures {
        let symbol = self.settings.currency_symbol.as_str();
        DisplayFigures {
            total_expenses: format_currency(finance.total_expenses, symbol),
            expenses_this_month: format_currency(finance.expenses_this_month, symbol),
            expense_change: match finance.expense_change {
                PercentDelta::NoBaseline => "No prior month".to_string(),
                PercentDelta::Change(change) if change > Decimal::ZERO => {
                    format!("+{}", format_percent(change))
                }
                PercentDelta::Change(change) => format_percent(change),
            },
            total_investments: format_currency(finance.total_investments, symbol),
            net_position: format_currency(finance.net_position, symbol),
            capacity_utilization: format_percent(ponds.capacity_utilization),
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_dashboard_summary(
        &self,
        data: &FarmData,
        reference_date: NaiveDate,
    ) -> DashboardSummary {
        debug!(
            "Building dashboard summary for {}: {} ponds, {} batches, {} animals, {} expenses, {} investments, {} equipment items",
            reference_date,
            data.ponds.len(),
            data.poultry_batches.len(),
            data.livestock.len(),
            data.expenses.len(),
            data.investments.len(),
            data.equipment.len()
        );

        let ponds = Self::summarize_ponds(&data.ponds);
        let finance = Self::summarize_finance(&data.expenses, &data.investments, reference_date);
        let display = self.display_figures(&ponds, &finance);

        DashboardSummary {
            reference_date,
            currency_symbol: self.settings.currency_symbol.clone(),
            ponds,
            poultry: Self::summarize_poultry(&data.poultry_batches),
            livestock: Self::summarize_livestock(&data.livestock),
            finance,
            equipment: Self::summarize_equipment(&data.equipment),
            display,
        }
    }

    fn get_expense_trend(
        &self,
        expenses: &[Expense],
        reference_date: NaiveDate,
    ) -> Vec<MonthlyTrendPoint> {
        let months = self.settings.trend_months;
        debug!(
            "Building {}-month expense trend ending {}",
            months, reference_date
        );

        // One extra month so the oldest point has something to compare with
        let series = monthly_totals(expenses, |e| e.date, |e| e.amount, reference_date, months.saturating_add(1));
        series
            .windows(2)
            .map(|pair| MonthlyTrendPoint {
                month: pair[1].month.clone(),
                total: pair[1].total,
                change: percent_delta(pair[1].total, pair[0].total),
            })
            .collect()
    }

    fn settings(&self) -> &DashboardSettings {
        &self.settings
    }
}
