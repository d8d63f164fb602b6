use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, ValidationError};
use crate::utils::coercion::{lenient_date, lenient_i64, lenient_string};
use crate::utils::validation::{require_non_negative, require_text};

/// Capital invested in the farm (land, ponds, housing, stock purchase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub amount: i64,
    /// Investment type, e.g. "Infrastructure" or "Equipment"
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub investment_type: String,
}

impl Investment {
    pub fn apply_update(&mut self, update: InvestmentUpdate) -> Result<()> {
        update.validate()?;
        self.name = update.name;
        self.date = Some(update.date);
        self.amount = update.amount;
        self.investment_type = update.investment_type;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub amount: i64,
    #[serde(rename = "type", default)]
    pub investment_type: String,
}

impl NewInvestment {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        if self.date.is_none() {
            return Err(ValidationError::MissingField("date".to_string()).into());
        }
        require_non_negative("amount", self.amount)
    }

    pub fn into_investment(self) -> Result<Investment> {
        self.validate()?;
        Ok(Investment {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name.trim().to_string(),
            date: self.date,
            amount: self.amount,
            investment_type: self.investment_type,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentUpdate {
    pub name: String,
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub amount: i64,
    #[serde(rename = "type", default)]
    pub investment_type: String,
}

impl InvestmentUpdate {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_non_negative("amount", self.amount)
    }
}
