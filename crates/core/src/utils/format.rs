//! Display formatting for dashboard figures.

use rust_decimal::Decimal;

/// Formats a whole currency amount with thousands separators, e.g. `₦1,250,000`.
/// Negative amounts keep the sign ahead of the symbol: `-₦4,500`.
pub fn format_currency(amount: i64, symbol: &str) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{symbol}{grouped}")
}

/// Formats a percentage that was already rounded, e.g. `87%` or `-12.5%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", value.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0, "₦"), "₦0");
        assert_eq!(format_currency(999, "₦"), "₦999");
        assert_eq!(format_currency(1000, "₦"), "₦1,000");
        assert_eq!(format_currency(1_250_000, "$"), "$1,250,000");
        assert_eq!(format_currency(-4500, "₦"), "-₦4,500");
        assert_eq!(format_currency(i64::MIN, ""), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(87)), "87%");
        assert_eq!(format_percent(dec!(-12.50)), "-12.5%");
        assert_eq!(format_percent(dec!(20.0)), "20%");
    }
}
