//! Pond domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::STATUS_ACTIVE;
use crate::dashboard::{stock_adjustment, StockDirection};
use crate::errors::{Result, StockError, ValidationError};
use crate::utils::coercion::{lenient_decimal, lenient_string, lenient_u64};
use crate::utils::validation::{require_non_negative, require_text};

/// A fish pond as stored by the hosted database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pond {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Length in metres
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub length: Decimal,
    /// Width in metres
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub width: Decimal,
    #[serde(default, deserialize_with = "lenient_string")]
    pub breed: String,
    /// Maximum number of fish the pond may hold
    #[serde(default, deserialize_with = "lenient_u64")]
    pub capacity: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub current_stock: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
}

impl Pond {
    /// Surface area in square metres, saturating at the decimal bounds.
    pub fn surface_area(&self) -> Decimal {
        self.length.checked_mul(self.width).unwrap_or_else(|| {
            if self.length.is_sign_negative() != self.width.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            }
        })
    }

    pub fn is_active(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case(STATUS_ACTIVE)
    }

    /// Adds or removes fish. On rejection the pond is left untouched.
    pub fn adjust_stock(
        &mut self,
        delta: u64,
        direction: StockDirection,
    ) -> std::result::Result<u64, StockError> {
        let adjusted = stock_adjustment(self.current_stock, delta, self.capacity, direction)?;
        self.current_stock = adjusted;
        Ok(adjusted)
    }

    /// Full replace of the editable fields.
    pub fn apply_update(&mut self, update: PondUpdate) -> Result<()> {
        update.validate()?;
        self.name = update.name;
        self.length = update.length;
        self.width = update.width;
        self.breed = update.breed;
        self.capacity = update.capacity;
        self.current_stock = update.current_stock;
        self.status = update.status;
        Ok(())
    }
}

/// Input model for creating a pond.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPond {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub length: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub width: Decimal,
    #[serde(default)]
    pub breed: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub capacity: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub current_stock: u64,
    #[serde(default)]
    pub status: String,
}

impl NewPond {
    /// Validates the form input. Stock above capacity is accepted here and
    /// only checked once the pond is edited.
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_non_negative("length", self.length)?;
        require_non_negative("width", self.width)?;
        Ok(())
    }

    pub fn into_pond(self) -> Result<Pond> {
        self.validate()?;
        Ok(Pond {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name.trim().to_string(),
            length: self.length,
            width: self.width,
            breed: self.breed,
            capacity: self.capacity,
            current_stock: self.current_stock,
            status: if self.status.trim().is_empty() {
                STATUS_ACTIVE.to_string()
            } else {
                self.status
            },
        })
    }
}

/// Input model for editing a pond.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PondUpdate {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub length: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub width: Decimal,
    #[serde(default)]
    pub breed: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub capacity: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub current_stock: u64,
    #[serde(default)]
    pub status: String,
}

impl PondUpdate {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_non_negative("length", self.length)?;
        require_non_negative("width", self.width)?;
        if self.capacity > 0 && self.current_stock > self.capacity {
            return Err(ValidationError::InvalidInput(format!(
                "Current stock {} exceeds pond capacity {}",
                self.current_stock, self.capacity
            ))
            .into());
        }
        Ok(())
    }
}
