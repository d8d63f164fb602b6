pub mod coercion;
pub mod format;
pub mod time_utils;
pub mod validation;
