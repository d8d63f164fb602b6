//! Livestock module - individually tagged animals.

mod livestock_model;

pub use livestock_model::{LivestockAnimal, LivestockUpdate, NewLivestockAnimal};
