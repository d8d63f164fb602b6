use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::Result;
use crate::utils::coercion::{lenient_string, lenient_u64};
use crate::utils::validation::require_text;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub quantity: u64,
    /// Unit of measure ("pcs", "bags", "litres")
    #[serde(default, deserialize_with = "lenient_string")]
    pub unit: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
}

impl EquipmentItem {
    pub fn apply_update(&mut self, update: EquipmentUpdate) -> Result<()> {
        update.validate()?;
        self.name = update.name;
        self.category = update.category;
        self.quantity = update.quantity;
        self.unit = update.unit;
        self.notes = update.notes;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEquipmentItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub quantity: u64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub notes: String,
}

impl NewEquipmentItem {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)
    }

    pub fn into_item(self) -> Result<EquipmentItem> {
        self.validate()?;
        Ok(EquipmentItem {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name.trim().to_string(),
            category: self.category,
            quantity: self.quantity,
            unit: self.unit,
            notes: self.notes,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentUpdate {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub quantity: u64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub notes: String,
}

impl EquipmentUpdate {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)
    }
}
