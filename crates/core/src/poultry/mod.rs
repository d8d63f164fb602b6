//! Poultry module - laying and broiler batches.

mod poultry_constants;
mod poultry_model;

pub use poultry_constants::*;
pub use poultry_model::{NewPoultryBatch, PoultryBatch, PoultryBatchUpdate};
