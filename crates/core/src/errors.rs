//! Core error types for Farmdesk.
//!
//! Aggregation functions are total and never fail. The only operations that
//! can be rejected are input validation and stock adjustments, which guard the
//! physical limits of a pond.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Stock adjustment rejected: {0}")]
    Stock(#[from] StockError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Rejections raised by `stock_adjustment`.
///
/// The caller surfaces these to the user and keeps the previous stock.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StockError {
    #[error("Adding {delta} to a stock of {current_stock} exceeds the capacity of {capacity}")]
    CapacityExceeded {
        current_stock: u64,
        delta: u64,
        capacity: u64,
    },

    #[error("Cannot remove {delta} from a stock of {current_stock}")]
    InsufficientStock { current_stock: u64, delta: u64 },
}

/// Validation errors for user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Field '{field}' must not be negative (got {value})")]
    NegativeValue { field: String, value: String },

    #[error("Failed to parse date: {0}")]
    DateParse(String),
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
