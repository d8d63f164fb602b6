//! Poultry batch domain models.
//!
//! Egg and feed figures are a snapshot taken when the batch is recorded.
//! Later edits to quantity or breed do not recompute them; the farm updates
//! those numbers by hand once real production data exists.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::poultry_constants::{breed_factor, DEFAULT_FEED_PER_BIRD_KG};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, STATUS_ACTIVE};
use crate::errors::Result;
use crate::utils::coercion::{lenient_decimal, lenient_string, lenient_u64};
use crate::utils::validation::require_text;

/// A poultry batch as stored by the hosted database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PoultryBatch {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub batch_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub breed: String,
    /// Number of birds
    #[serde(default, deserialize_with = "lenient_u64")]
    pub quantity: u64,
    /// Expected eggs per day, fixed at creation
    #[serde(default, deserialize_with = "lenient_u64")]
    pub daily_eggs: u64,
    /// Feed per day in kg, fixed at creation
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub feed_consumption: Decimal,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
}

impl PoultryBatch {
    pub fn is_active(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case(STATUS_ACTIVE)
    }

    /// Full replace of the editable fields. The creation-time egg and feed
    /// snapshot is kept as is.
    pub fn apply_update(&mut self, update: PoultryBatchUpdate) -> Result<()> {
        update.validate()?;
        self.batch_name = update.batch_name;
        self.breed = update.breed;
        self.quantity = update.quantity;
        self.status = update.status;
        Ok(())
    }
}

/// Expected daily eggs for `quantity` birds of `breed`, rounded half up.
pub(crate) fn expected_daily_eggs(quantity: u64, breed: &str) -> u64 {
    let lay_factor = breed_factor(breed).map_or(Decimal::ZERO, |f| f.lay_factor);
    (Decimal::from(quantity) * lay_factor)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}

/// Expected daily feed in kg for `quantity` birds of `breed`.
pub(crate) fn expected_feed_consumption(quantity: u64, breed: &str) -> Decimal {
    let per_bird = breed_factor(breed).map_or(DEFAULT_FEED_PER_BIRD_KG, |f| f.feed_per_bird_kg);
    (Decimal::from(quantity) * per_bird).round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Input model for recording a new batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPoultryBatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub batch_name: String,
    #[serde(default)]
    pub breed: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub quantity: u64,
    #[serde(default)]
    pub status: String,
}

impl NewPoultryBatch {
    pub fn validate(&self) -> Result<()> {
        require_text("batchName", &self.batch_name)?;
        require_text("breed", &self.breed)?;
        Ok(())
    }

    /// Builds the stored batch, deriving daily eggs and feed from the breed.
    pub fn into_batch(self) -> Result<PoultryBatch> {
        self.validate()?;
        let daily_eggs = expected_daily_eggs(self.quantity, &self.breed);
        let feed_consumption = expected_feed_consumption(self.quantity, &self.breed);
        Ok(PoultryBatch {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            batch_name: self.batch_name.trim().to_string(),
            breed: self.breed.trim().to_string(),
            quantity: self.quantity,
            daily_eggs,
            feed_consumption,
            status: if self.status.trim().is_empty() {
                STATUS_ACTIVE.to_string()
            } else {
                self.status
            },
        })
    }
}

/// Input model for editing a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoultryBatchUpdate {
    pub batch_name: String,
    #[serde(default)]
    pub breed: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub quantity: u64,
    #[serde(default)]
    pub status: String,
}

impl PoultryBatchUpdate {
    pub fn validate(&self) -> Result<()> {
        require_text("batchName", &self.batch_name)
    }
}
