//! Default coercion for loosely typed rows.
//!
//! Rows come from a hosted database through form submissions, so numeric
//! columns may be missing, `null`, empty strings or text such as `"1,200"`.
//! These deserializers turn every such value into a defined number instead of
//! failing the whole collection. Pair them with `#[serde(default)]` so that
//! absent keys also land on zero.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::time_utils::parse_date;

fn numeric_text(raw: &str) -> String {
    raw.trim().replace([',', '_', ' '], "")
}

fn finite_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => numeric_text(s).parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

/// Coerces a JSON value into a whole currency amount. Fractions are rounded
/// half away from zero.
pub fn coerce_i64(value: &Value) -> i64 {
    if let Value::Number(n) = value {
        if let Some(i) = n.as_i64() {
            return i;
        }
    }
    finite_f64(value)
        .map(|f| f.round().clamp(i64::MIN as f64, i64::MAX as f64) as i64)
        .unwrap_or(0)
}

/// Coerces a JSON value into a non-negative count.
pub fn coerce_u64(value: &Value) -> u64 {
    if let Value::Number(n) = value {
        if let Some(u) = n.as_u64() {
            return u;
        }
    }
    finite_f64(value)
        .map(|f| f.round().clamp(0.0, u64::MAX as f64) as u64)
        .unwrap_or(0)
}

/// Coerces a JSON value into a decimal quantity.
pub fn coerce_decimal(value: &Value) -> Decimal {
    let parsed = match value {
        Value::String(s) => Decimal::from_str(&numeric_text(s))
            .ok()
            .or_else(|| finite_f64(value).and_then(Decimal::from_f64)),
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .ok()
            .or_else(|| finite_f64(value).and_then(Decimal::from_f64)),
        _ => finite_f64(value).and_then(Decimal::from_f64),
    };
    parsed.unwrap_or(Decimal::ZERO)
}

/// Coerces a JSON value into a calendar date, `None` when it is not one.
pub fn coerce_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date(s).ok(),
        _ => None,
    }
}

/// Coerces a JSON value into text, rendering numbers and treating `null` as empty.
pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

pub fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_i64).unwrap_or(0))
}

pub fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_u64).unwrap_or(0))
}

pub fn lenient_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_decimal).unwrap_or(Decimal::ZERO))
}

pub fn lenient_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_date))
}

pub fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_string).unwrap_or_default())
}

/// Absent or `null` collections become empty; malformed rows are not skipped.
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
