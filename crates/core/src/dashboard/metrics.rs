//! Pure aggregation functions over entity collections.
//!
//! Field access goes through accessor closures, so one function serves every
//! entity (`total_of(&expenses, |e| e.amount)`). None of these functions fail
//! except [`stock_adjustment`]: empty input yields zero and every division by
//! zero has a defined result.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::dashboard_model::{
    CategoryBreakdown, MonthlyTotal, PercentDelta, RoiProjection, StockDirection,
};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, PERCENT_DISPLAY_PRECISION, UNCATEGORIZED_LABEL};
use crate::errors::StockError;
use crate::utils::time_utils::{month_end, month_key, month_start, months_back};

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum of `amount` across `records`; zero for an empty collection.
pub fn total_of<T>(records: &[T], amount: impl Fn(&T) -> i64) -> i64 {
    records
        .iter()
        .fold(0i64, |acc, record| acc.saturating_add(amount(record)))
}

/// Sum of a count field (stock, birds, quantities).
pub fn total_count<T>(records: &[T], count: impl Fn(&T) -> u64) -> u64 {
    records
        .iter()
        .fold(0u64, |acc, record| acc.saturating_add(count(record)))
}

/// Sum of a decimal measure (areas, feed in kg), saturating at the decimal
/// bounds.
pub fn total_decimal<T>(records: &[T], value: impl Fn(&T) -> Decimal) -> Decimal {
    records.iter().fold(Decimal::ZERO, |acc, record| {
        let value = value(record);
        acc.checked_add(value).unwrap_or(if value.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
    })
}

/// Records whose date lies in `from..=to`. Records without a date never match.
pub fn filter_by_date_range<'a, T>(
    records: &'a [T],
    date: impl Fn(&T) -> Option<NaiveDate>,
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| date(*record).is_some_and(|d| from <= d && d <= to))
        .collect()
}

/// Total for the calendar month that contains `reference_date`.
pub fn month_to_date_total<T>(
    records: &[T],
    date: impl Fn(&T) -> Option<NaiveDate>,
    amount: impl Fn(&T) -> i64,
    reference_date: NaiveDate,
) -> i64 {
    filter_by_date_range(
        records,
        date,
        month_start(reference_date),
        month_end(reference_date),
    )
    .into_iter()
    .fold(0i64, |acc, record| acc.saturating_add(amount(record)))
}

/// Total for the calendar month before the one containing `reference_date`.
pub fn previous_month_total<T>(
    records: &[T],
    date: impl Fn(&T) -> Option<NaiveDate>,
    amount: impl Fn(&T) -> i64,
    reference_date: NaiveDate,
) -> i64 {
    month_to_date_total(records, date, amount, months_back(reference_date, 1))
}

/// Change from `previous` to `current` in percent, one decimal place.
pub fn percent_delta(current: i64, previous: i64) -> PercentDelta {
    if previous == 0 {
        return PercentDelta::NoBaseline;
    }
    let previous = Decimal::from(previous);
    let change = (Decimal::from(current) - previous) / previous * dec!(100);
    PercentDelta::Change(round_half_up(change, PERCENT_DISPLAY_PRECISION))
}

/// Whole percent of capacity in use; zero when there is no capacity.
pub fn capacity_utilization(total_stock: u64, total_capacity: u64) -> Decimal {
    if total_capacity == 0 {
        return Decimal::ZERO;
    }
    let ratio = Decimal::from(total_stock) / Decimal::from(total_capacity) * dec!(100);
    round_half_up(ratio, 0)
}

fn label_or_uncategorized(label: &str) -> String {
    let label = label.trim();
    if label.is_empty() {
        UNCATEGORIZED_LABEL.to_string()
    } else {
        label.to_string()
    }
}

/// Moves rounded shares one display step at a time until their sum lies
/// within one step below 100. `shares` pairs each group with its unrounded
/// percentage; the group whose rounding drifted furthest moves first.
fn balance_percentages(shares: &mut [(Decimal, CategoryBreakdown)]) {
    if shares.is_empty() {
        return;
    }
    let step = Decimal::new(1, PERCENT_DISPLAY_PRECISION);
    let hundred = dec!(100);
    let mut sum: Decimal = shares.iter().map(|(_, group)| group.percentage).sum();

    while sum > hundred {
        let Some((_, group)) = shares
            .iter_mut()
            .filter(|(_, group)| group.percentage >= step)
            .max_by(|(raw_a, a), (raw_b, b)| {
                (a.percentage - *raw_a).cmp(&(b.percentage - *raw_b))
            })
        else {
            break;
        };
        group.percentage -= step;
        sum -= step;
    }

    while sum < hundred - step {
        let Some((_, group)) = shares.iter_mut().max_by(|(raw_a, a), (raw_b, b)| {
            (*raw_a - a.percentage).cmp(&(*raw_b - b.percentage))
        }) else {
            break;
        };
        group.percentage += step;
        sum += step;
    }
}

fn into_breakdown(groups: HashMap<String, i64>) -> Vec<CategoryBreakdown> {
    let groups: Vec<(String, i64)> = groups
        .into_iter()
        .filter(|(_, total)| *total > 0)
        .collect();
    let grand_total = Decimal::from(groups.iter().fold(0i64, |acc, (_, t)| acc.saturating_add(*t)));

    let mut shares: Vec<(Decimal, CategoryBreakdown)> = groups
        .into_iter()
        .map(|(label, total)| {
            let raw = if grand_total > Decimal::ZERO {
                Decimal::from(total) / grand_total * dec!(100)
            } else {
                Decimal::ZERO
            };
            let group = CategoryBreakdown {
                label,
                total,
                percentage: round_half_up(raw, PERCENT_DISPLAY_PRECISION),
            };
            (raw, group)
        })
        .collect();

    // Largest first, ties by label
    shares.sort_by(|(_, a), (_, b)| b.total.cmp(&a.total).then_with(|| a.label.cmp(&b.label)));
    balance_percentages(&mut shares);
    shares.into_iter().map(|(_, group)| group).collect()
}

/// Groups `records` by `category`, sums `amount` per group and computes each
/// group's share of the grand total. Groups whose total is not positive
/// are dropped. Shares are rounded half up to one decimal place and then
/// nudged so they never sum past 100.
pub fn category_breakdown<T>(
    records: &[T],
    category: impl Fn(&T) -> &str,
    amount: impl Fn(&T) -> i64,
) -> Vec<CategoryBreakdown> {
    let mut groups: HashMap<String, i64> = HashMap::new();
    for record in records {
        let entry = groups
            .entry(label_or_uncategorized(category(record)))
            .or_insert(0);
        *entry = entry.saturating_add(amount(record));
    }
    into_breakdown(groups)
}

/// Number of records per label, with the same ordering as [`category_breakdown`].
pub fn count_by<T>(records: &[T], label: impl Fn(&T) -> &str) -> Vec<CategoryBreakdown> {
    category_breakdown(records, label, |_| 1)
}

/// Projects the return on `initial` given a flat `monthly_return` over `months`.
pub fn roi_projection(initial: i64, monthly_return: i64, months: i64) -> RoiProjection {
    if initial <= 0 || months <= 0 {
        return RoiProjection::invalid();
    }
    let total_return = monthly_return.saturating_mul(months);
    let initial_dec = Decimal::from(initial);
    let roi = (Decimal::from(total_return) - initial_dec) / initial_dec * dec!(100);
    let monthly_roi = roi / Decimal::from(months);

    RoiProjection {
        valid: true,
        total_return,
        roi_percent: round_half_up(roi, PERCENT_DISPLAY_PRECISION),
        monthly_roi_percent: round_half_up(monthly_roi, DISPLAY_DECIMAL_PRECISION),
    }
}

/// Applies a stock change to a pond.
///
/// An increase may not take the stock past `capacity` (a capacity of zero
/// means the pond has no recorded limit). A decrease may not remove more
/// fish than are present.
pub fn stock_adjustment(
    current_stock: u64,
    delta: u64,
    capacity: u64,
    direction: StockDirection,
) -> Result<u64, StockError> {
    match direction {
        StockDirection::Increase => {
            let exceeded = StockError::CapacityExceeded {
                current_stock,
                delta,
                capacity,
            };
            match current_stock.checked_add(delta) {
                Some(adjusted) if capacity > 0 && adjusted > capacity => Err(exceeded),
                Some(adjusted) => Ok(adjusted),
                None if capacity > 0 => Err(exceeded),
                None => Ok(u64::MAX),
            }
        }
        StockDirection::Decrease => {
            if delta > current_stock {
                return Err(StockError::InsufficientStock {
                    current_stock,
                    delta,
                });
            }
            Ok(current_stock - delta)
        }
    }
}

/// Totals for the `months` calendar months ending with the month of
/// `reference_date`, oldest first. Months without records are present with
/// a zero total.
pub fn monthly_totals<T>(
    records: &[T],
    date: impl Fn(&T) -> Option<NaiveDate>,
    amount: impl Fn(&T) -> i64,
    reference_date: NaiveDate,
    months: u32,
) -> Vec<MonthlyTotal> {
    if months == 0 {
        return Vec::new();
    }
    let first = months_back(reference_date, months - 1);
    let last = month_end(reference_date);

    let mut buckets: HashMap<String, i64> = HashMap::new();
    for record in filter_by_date_range(records, &date, first, last) {
        if let Some(d) = date(record) {
            let entry = buckets.entry(month_key(d)).or_insert(0);
            *entry = entry.saturating_add(amount(record));
        }
    }

    (0..months)
        .rev()
        .map(|offset| {
            let start = months_back(reference_date, offset);
            let month = month_key(start);
            let total = buckets.get(&month).copied().unwrap_or(0);
            MonthlyTotal {
                month,
                month_start: start,
                total,
            }
        })
        .collect()
}
