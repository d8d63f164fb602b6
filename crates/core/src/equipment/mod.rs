//! Equipment module - tools, machinery and consumables on hand.

mod equipment_model;

pub use equipment_model::{EquipmentItem, EquipmentUpdate, NewEquipmentItem};
