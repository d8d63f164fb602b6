//! Display settings for the dashboard.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CURRENCY_SYMBOL, DEFAULT_FARM_TIMEZONE, DEFAULT_TREND_MONTHS, MAX_TREND_MONTHS,
};
use crate::errors::{Error, Result};
use crate::utils::time_utils::farm_date_today;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSettings {
    /// Prefix for formatted currency amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Number of months in trend series
    #[serde(default = "default_trend_months")]
    pub trend_months: u32,
    /// IANA timezone name used to decide which month "today" falls in
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_trend_months() -> u32 {
    DEFAULT_TREND_MONTHS
}

fn default_timezone() -> String {
    DEFAULT_FARM_TIMEZONE.to_string()
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            trend_months: default_trend_months(),
            timezone: default_timezone(),
        }
    }
}

impl DashboardSettings {
    pub fn validate(&self) -> Result<()> {
        if self.trend_months == 0 || self.trend_months > MAX_TREND_MONTHS {
            return Err(Error::InvalidConfigValue(format!(
                "trend months must be between 1 and {}, got {}",
                MAX_TREND_MONTHS, self.trend_months
            )));
        }
        self.tz()?;
        Ok(())
    }

    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| Error::InvalidConfigValue(format!("unknown timezone '{}'", self.timezone)))
    }

    /// Today in the farm's timezone.
    pub fn today(&self) -> Result<NaiveDate> {
        Ok(farm_date_today(self.tz()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.trend_months, 6);
        assert_eq!(settings.tz().unwrap(), chrono_tz::Africa::Lagos);
        assert!(settings.validate().is_ok());
        assert!(settings.today().is_ok());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: DashboardSettings =
            serde_json::from_str(r#"{"currencySymbol":"$"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.timezone, "Africa/Lagos");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut settings = DashboardSettings {
            trend_months: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(Error::InvalidConfigValue(_))));

        settings.trend_months = 12;
        settings.timezone = "Mars/Olympus".to_string();
        assert!(matches!(settings.validate(), Err(Error::InvalidConfigValue(_))));
    }
}
