//! Farmdesk Core - Farm entity records, derived metrics and dashboard aggregation.
//!
//! This crate contains the computational core of Farmdesk. It never talks to
//! storage: callers hand it collections that were already fetched from the
//! hosted database and get display-ready values back.

pub mod constants;
pub mod dashboard;
pub mod equipment;
pub mod errors;
pub mod expenses;
pub mod investments;
pub mod livestock;
pub mod ponds;
pub mod poultry;
pub mod settings;
pub mod utils;

// Re-export the aggregation engine at the crate root
pub use dashboard::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
