use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, ValidationError};
use crate::utils::coercion::{lenient_date, lenient_i64, lenient_string};
use crate::utils::validation::{require_non_negative, require_text};

/// A single expense. Amounts are whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub amount: i64,
    /// Part of the farm the money went to (fishery, poultry, livestock...)
    #[serde(default, deserialize_with = "lenient_string")]
    pub farm_section: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub payment_method: String,
}

impl Expense {
    pub fn apply_update(&mut self, update: ExpenseUpdate) -> Result<()> {
        update.validate()?;
        self.date = Some(update.date);
        self.category = update.category;
        self.amount = update.amount;
        self.farm_section = update.farm_section;
        self.payment_method = update.payment_method;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: Option<NaiveDate>,
    pub category: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub amount: i64,
    #[serde(default)]
    pub farm_section: String,
    #[serde(default)]
    pub payment_method: String,
}

impl NewExpense {
    pub fn validate(&self) -> Result<()> {
        if self.date.is_none() {
            return Err(ValidationError::MissingField("date".to_string()).into());
        }
        require_text("category", &self.category)?;
        require_non_negative("amount", self.amount)
    }

    pub fn into_expense(self) -> Result<Expense> {
        self.validate()?;
        Ok(Expense {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            date: self.date,
            category: self.category.trim().to_string(),
            amount: self.amount,
            farm_section: self.farm_section,
            payment_method: self.payment_method,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub date: NaiveDate,
    pub category: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub amount: i64,
    #[serde(default)]
    pub farm_section: String,
    #[serde(default)]
    pub payment_method: String,
}

impl ExpenseUpdate {
    pub fn validate(&self) -> Result<()> {
        require_text("category", &self.category)?;
        require_non_negative("amount", self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_expense_row_with_timestamp_date() {
        let expense: Expense = serde_json::from_str(
            r#"{"id":"e1","date":"2026-10-02T09:15:00Z","category":"Feed","amount":"45,000","farmSection":"Poultry"}"#,
        )
        .unwrap();
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2026, 10, 2));
        assert_eq!(expense.amount, 45_000);
        assert_eq!(expense.payment_method, "");
    }

    #[test]
    fn test_expense_row_with_bad_date() {
        let expense: Expense =
            serde_json::from_str(r#"{"date":"last week","amount":null}"#).unwrap();
        assert_eq!(expense.date, None);
        assert_eq!(expense.amount, 0);
    }

    #[test]
    fn test_new_expense_requires_date() {
        let new_expense = NewExpense {
            id: None,
            date: None,
            category: "Feed".to_string(),
            amount: 100,
            farm_section: String::new(),
            payment_method: String::new(),
        };
        assert!(matches!(
            new_expense.into_expense(),
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[test]
    fn test_update_replaces_fields() {
        let mut expense = Expense {
            id: "e1".to_string(),
            amount: 10,
            ..Default::default()
        };
        expense
            .apply_update(ExpenseUpdate {
                date: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
                category: "Vet".to_string(),
                amount: 7_500,
                farm_section: "Livestock".to_string(),
                payment_method: "Transfer".to_string(),
            })
            .unwrap();
        assert_eq!(expense.id, "e1");
        assert_eq!(expense.amount, 7_500);
        assert_eq!(expense.category, "Vet");
    }
}
