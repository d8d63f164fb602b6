use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::HEALTH_STATUS_HEALTHY;
use crate::errors::Result;
use crate::utils::coercion::{lenient_i64, lenient_string};
use crate::utils::validation::{require_non_negative, require_text};

/// A tagged animal (cattle, goat, sheep, pig...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LivestockAnimal {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tag_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub animal_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub breed: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub purchase_price: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gender: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub health_status: String,
}

impl LivestockAnimal {
    pub fn is_healthy(&self) -> bool {
        self.health_status
            .trim()
            .eq_ignore_ascii_case(HEALTH_STATUS_HEALTHY)
    }

    pub fn apply_update(&mut self, update: LivestockUpdate) -> Result<()> {
        update.validate()?;
        self.tag_id = update.tag_id;
        self.animal_type = update.animal_type;
        self.breed = update.breed;
        self.purchase_price = update.purchase_price;
        self.gender = update.gender;
        self.health_status = update.health_status;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLivestockAnimal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub tag_id: String,
    pub animal_type: String,
    #[serde(default)]
    pub breed: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub purchase_price: i64,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub health_status: String,
}

impl NewLivestockAnimal {
    pub fn validate(&self) -> Result<()> {
        require_text("tagId", &self.tag_id)?;
        require_text("animalType", &self.animal_type)?;
        require_non_negative("purchasePrice", self.purchase_price)
    }

    pub fn into_animal(self) -> Result<LivestockAnimal> {
        self.validate()?;
        Ok(LivestockAnimal {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            tag_id: self.tag_id.trim().to_string(),
            animal_type: self.animal_type.trim().to_string(),
            breed: self.breed,
            purchase_price: self.purchase_price,
            gender: self.gender,
            health_status: if self.health_status.trim().is_empty() {
                HEALTH_STATUS_HEALTHY.to_string()
            } else {
                self.health_status
            },
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivestockUpdate {
    pub tag_id: String,
    pub animal_type: String,
    #[serde(default)]
    pub breed: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub purchase_price: i64,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub health_status: String,
}

impl LivestockUpdate {
    pub fn validate(&self) -> Result<()> {
        require_text("tagId", &self.tag_id)?;
        require_text("animalType", &self.animal_type)?;
        require_non_negative("purchasePrice", self.purchase_price)
    }
}
