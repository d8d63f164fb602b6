//! Ponds module - fish pond records and stock handling.

mod ponds_model;

pub use ponds_model::{NewPond, Pond, PondUpdate};
