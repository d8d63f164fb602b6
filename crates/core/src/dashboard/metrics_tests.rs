//! Unit tests for the aggregation functions.

use super::*;
use crate::errors::StockError;
use crate::expenses::Expense;
use crate::ponds::Pond;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn expense(day: Option<NaiveDate>, category: &str, amount: i64) -> Expense {
    Expense {
        id: format!("{category}-{amount}"),
        date: day,
        category: category.to_string(),
        amount,
        farm_section: "Fishery".to_string(),
        payment_method: "Cash".to_string(),
    }
}

fn sample_expenses() -> Vec<Expense> {
    vec![
        expense(Some(date(2026, 9, 30)), "Feed", 40_000),
        expense(Some(date(2026, 10, 1)), "Feed", 25_000),
        expense(Some(date(2026, 10, 15)), "Labour", 15_000),
        expense(Some(date(2026, 10, 31)), "Feed", 10_000),
        expense(Some(date(2026, 11, 1)), "Vet", 5_000),
        expense(None, "Fuel", 2_000),
    ]
}

// ==================== total_of ====================

#[test]
fn test_total_of_sums_field() {
    let expenses = sample_expenses();
    assert_eq!(total_of(&expenses, |e| e.amount), 97_000);
}

#[test]
fn test_total_of_empty_is_zero() {
    let expenses: Vec<Expense> = Vec::new();
    assert_eq!(total_of(&expenses, |e| e.amount), 0);
    assert_eq!(total_count(&Vec::<Pond>::new(), |p| p.capacity), 0);
}

#[test]
fn test_total_of_saturates() {
    let expenses = vec![
        expense(None, "a", i64::MAX),
        expense(None, "b", 1),
    ];
    assert_eq!(total_of(&expenses, |e| e.amount), i64::MAX);
}

// ==================== filter_by_date_range ====================

#[test]
fn test_filter_by_date_range_is_inclusive() {
    let expenses = sample_expenses();
    let hits = filter_by_date_range(&expenses, |e| e.date, date(2026, 10, 1), date(2026, 10, 31));
    let amounts: Vec<i64> = hits.iter().map(|e| e.amount).collect();
    assert_eq!(amounts, vec![25_000, 15_000, 10_000]);
}

#[test]
fn test_filter_by_date_range_single_day_and_inverted() {
    let expenses = sample_expenses();
    let day = filter_by_date_range(&expenses, |e| e.date, date(2026, 10, 15), date(2026, 10, 15));
    assert_eq!(day.len(), 1);
    assert_eq!(day[0].category, "Labour");

    let inverted =
        filter_by_date_range(&expenses, |e| e.date, date(2026, 11, 1), date(2026, 10, 1));
    assert!(inverted.is_empty());
}

// ==================== month totals ====================

#[test]
fn test_month_to_date_total_covers_calendar_month() {
    let expenses = sample_expenses();
    assert_eq!(
        month_to_date_total(&expenses, |e| e.date, |e| e.amount, date(2026, 10, 2)),
        50_000
    );
    assert_eq!(
        previous_month_total(&expenses, |e| e.date, |e| e.amount, date(2026, 10, 2)),
        40_000
    );
    assert_eq!(
        month_to_date_total(&expenses, |e| e.date, |e| e.amount, date(2025, 1, 1)),
        0
    );
}

#[test]
fn test_monthly_totals_fills_gaps_oldest_first() {
    let expenses = sample_expenses();
    let series = monthly_totals(&expenses, |e| e.date, |e| e.amount, date(2026, 11, 20), 4);
    let months: Vec<&str> = series.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months, vec!["2026-08", "2026-09", "2026-10", "2026-11"]);
    let totals: Vec<i64> = series.iter().map(|m| m.total).collect();
    assert_eq!(totals, vec![0, 40_000, 50_000, 5_000]);
    assert_eq!(series[0].month_start, date(2026, 8, 1));

    assert!(monthly_totals(&expenses, |e| e.date, |e| e.amount, date(2026, 11, 20), 0).is_empty());
}

// ==================== percent_delta ====================

#[test]
fn test_percent_delta_without_baseline() {
    assert_eq!(percent_delta(100, 0), PercentDelta::NoBaseline);
    assert_eq!(percent_delta(0, 0), PercentDelta::NoBaseline);
    assert_eq!(percent_delta(100, 0).value(), None);
}

#[test]
fn test_percent_delta_rounds_to_one_decimal() {
    assert_eq!(percent_delta(150, 100), PercentDelta::Change(dec!(50)));
    assert_eq!(percent_delta(50, 100), PercentDelta::Change(dec!(-50)));
    // 1/3 = 33.333..
    assert_eq!(percent_delta(4, 3), PercentDelta::Change(dec!(33.3)));
    // 2/3 = 66.666..
    assert_eq!(percent_delta(5, 3), PercentDelta::Change(dec!(66.7)));
    // 0.05 exactly rounds up
    assert_eq!(percent_delta(2_001, 2_000), PercentDelta::Change(dec!(0.1)));
}

// ==================== capacity_utilization ====================

#[test]
fn test_capacity_utilization_zero_capacity() {
    assert_eq!(capacity_utilization(0, 0), Decimal::ZERO);
    assert_eq!(capacity_utilization(500, 0), Decimal::ZERO);
}

#[test]
fn test_capacity_utilization_rounds() {
    assert_eq!(capacity_utilization(1300, 1500), dec!(87));
    assert_eq!(capacity_utilization(1, 200), dec!(1));
    assert_eq!(capacity_utilization(1, 3), dec!(33));
    assert_eq!(capacity_utilization(120, 100), dec!(120));
}

#[test]
fn test_capacity_utilization_over_pond_collection() {
    let ponds = vec![
        Pond {
            capacity: 1000,
            current_stock: 800,
            ..Default::default()
        },
        Pond {
            capacity: 500,
            current_stock: 500,
            ..Default::default()
        },
    ];
    let stock = total_count(&ponds, |p| p.current_stock);
    let capacity = total_count(&ponds, |p| p.capacity);
    assert_eq!((stock, capacity), (1300, 1500));
    assert_eq!(capacity_utilization(stock, capacity), dec!(87));
}

// ==================== category_breakdown ====================

#[test]
fn test_category_breakdown_groups_and_sorts() {
    let expenses = sample_expenses();
    let breakdown = category_breakdown(&expenses, |e| e.category.as_str(), |e| e.amount);
    let labels: Vec<&str> = breakdown.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Feed", "Labour", "Vet", "Fuel"]);
    assert_eq!(breakdown[0].total, 75_000);
    // 75000 / 97000 = 77.319..
    assert_eq!(breakdown[0].percentage, dec!(77.3));
    assert_eq!(breakdown[1].percentage, dec!(15.5));
    // Half-up alone gives 100.1; Vet (5.15..) rounded up the most
    assert_eq!(breakdown[2].percentage, dec!(5.1));
    assert_eq!(breakdown[3].percentage, dec!(2.1));
    let sum: Decimal = breakdown.iter().map(|b| b.percentage).sum();
    assert_eq!(sum, dec!(100));
}

#[test]
fn test_category_breakdown_never_sums_past_hundred() {
    let expenses: Vec<Expense> = ["A", "B", "C", "D", "E", "F"]
        .iter()
        .map(|label| expense(None, label, 1))
        .collect();
    let breakdown = category_breakdown(&expenses, |e| e.category.as_str(), |e| e.amount);
    let percentages: Vec<Decimal> = breakdown.iter().map(|b| b.percentage).collect();
    assert_eq!(
        percentages,
        vec![dec!(16.7), dec!(16.7), dec!(16.7), dec!(16.7), dec!(16.6), dec!(16.6)]
    );
    let sum: Decimal = percentages.iter().sum();
    assert_eq!(sum, dec!(100));
}

#[test]
fn test_total_decimal_saturates() {
    let ponds = vec![
        Pond {
            length: Decimal::MAX,
            width: dec!(1),
            ..Default::default()
        },
        Pond {
            length: dec!(10),
            width: dec!(2),
            ..Default::default()
        },
    ];
    assert_eq!(total_decimal(&ponds, Pond::surface_area), Decimal::MAX);
    assert_eq!(total_decimal(&ponds[1..], Pond::surface_area), dec!(20));
    assert_eq!(total_decimal(&Vec::<Pond>::new(), Pond::surface_area), Decimal::ZERO);
}

#[test]
fn test_category_breakdown_excludes_zero_groups_and_labels_blanks() {
    let expenses = vec![
        expense(None, "Feed", 300),
        expense(None, "Repairs", 0),
        expense(None, "  ", 100),
    ];
    let breakdown = category_breakdown(&expenses, |e| e.category.as_str(), |e| e.amount);
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].label, "Feed");
    assert_eq!(breakdown[0].percentage, dec!(75));
    assert_eq!(breakdown[1].label, "Uncategorized");
    assert_eq!(breakdown[1].percentage, dec!(25));
}

#[test]
fn test_category_breakdown_ties_sorted_by_label() {
    let expenses = vec![
        expense(None, "Vet", 100),
        expense(None, "Fuel", 100),
        expense(None, "Labour", 100),
    ];
    let breakdown = category_breakdown(&expenses, |e| e.category.as_str(), |e| e.amount);
    let labels: Vec<&str> = breakdown.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Fuel", "Labour", "Vet"]);
    let sum: Decimal = breakdown.iter().map(|b| b.percentage).sum();
    assert_eq!(sum, dec!(99.9));
}

#[test]
fn test_category_breakdown_empty() {
    let expenses: Vec<Expense> = Vec::new();
    assert!(category_breakdown(&expenses, |e| e.category.as_str(), |e| e.amount).is_empty());
}

#[test]
fn test_count_by() {
    let expenses = sample_expenses();
    let counts = count_by(&expenses, |e| e.category.as_str());
    assert_eq!(counts[0].label, "Feed");
    assert_eq!(counts[0].total, 3);
    assert_eq!(counts[0].percentage, dec!(50));
}

// ==================== roi_projection ====================

#[test]
fn test_roi_projection_example() {
    let roi = roi_projection(500_000, 50_000, 12);
    assert!(roi.valid);
    assert_eq!(roi.total_return, 600_000);
    assert_eq!(roi.roi_percent, dec!(20.0));
    assert_eq!(roi.monthly_roi_percent, dec!(1.67));
}

#[test]
fn test_roi_projection_rounding() {
    // 50000 / 300000 = 16.66..%, over 35 months 0.476..%
    let roi = roi_projection(300_000, 10_000, 35);
    assert_eq!(roi.total_return, 350_000);
    assert_eq!(roi.roi_percent, dec!(16.7));
    assert_eq!(roi.monthly_roi_percent, dec!(0.48));
}

#[test]
fn test_roi_projection_loss() {
    let roi = roi_projection(1_000_000, 50_000, 10);
    assert_eq!(roi.total_return, 500_000);
    assert_eq!(roi.roi_percent, dec!(-50));
    assert_eq!(roi.monthly_roi_percent, dec!(-5));
}

#[test]
fn test_roi_projection_invalid_input() {
    assert_eq!(roi_projection(0, 50_000, 12), RoiProjection::invalid());
    assert_eq!(roi_projection(-10, 50_000, 12), RoiProjection::invalid());
    assert_eq!(roi_projection(500_000, 50_000, 0), RoiProjection::invalid());
    assert_eq!(roi_projection(500_000, 50_000, -3), RoiProjection::invalid());
    assert!(!roi_projection(0, 0, 0).valid);
}

// ==================== stock_adjustment ====================

#[test]
fn test_stock_adjustment_capacity_exceeded() {
    assert_eq!(
        stock_adjustment(80, 30, 100, StockDirection::Increase),
        Err(StockError::CapacityExceeded {
            current_stock: 80,
            delta: 30,
            capacity: 100
        })
    );
}

#[test]
fn test_stock_adjustment_within_capacity() {
    assert_eq!(stock_adjustment(80, 30, 150, StockDirection::Increase), Ok(110));
    assert_eq!(stock_adjustment(70, 30, 100, StockDirection::Increase), Ok(100));
}

#[test]
fn test_stock_adjustment_without_capacity_limit() {
    assert_eq!(stock_adjustment(80, 30, 0, StockDirection::Increase), Ok(110));
    assert_eq!(stock_adjustment(u64::MAX, 1, 0, StockDirection::Increase), Ok(u64::MAX));
    assert!(stock_adjustment(u64::MAX, 1, 10, StockDirection::Increase).is_err());
}

#[test]
fn test_stock_adjustment_insufficient_stock() {
    assert_eq!(
        stock_adjustment(20, 25, 100, StockDirection::Decrease),
        Err(StockError::InsufficientStock {
            current_stock: 20,
            delta: 25
        })
    );
    assert_eq!(stock_adjustment(20, 20, 100, StockDirection::Decrease), Ok(0));
}

#[test]
fn test_stock_error_messages() {
    let err = stock_adjustment(80, 30, 100, StockDirection::Increase).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Adding 30 to a stock of 80 exceeds the capacity of 100"
    );
}
