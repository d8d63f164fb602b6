/// Decimal precision for percentages shown on the dashboard
pub const PERCENT_DISPLAY_PRECISION: u32 = 1;

/// Decimal precision for ROI figures and feed quantities
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Label used for records whose category field is blank
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Status value marking a pond or batch as in production
pub const STATUS_ACTIVE: &str = "active";

/// Health status value counted as healthy livestock
pub const HEALTH_STATUS_HEALTHY: &str = "healthy";

/// Default currency symbol for formatted amounts
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₦";

/// Default number of months in trend series
pub const DEFAULT_TREND_MONTHS: u32 = 6;

/// Upper bound for trend series length
pub const MAX_TREND_MONTHS: u32 = 36;

/// Default timezone used to derive "today" for month boundaries
pub const DEFAULT_FARM_TIMEZONE: &str = "Africa/Lagos";
