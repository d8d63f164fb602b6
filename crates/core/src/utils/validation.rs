use crate::errors::{Result, ValidationError};

/// Rejects blank required text fields.
pub fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field.to_string()).into());
    }
    Ok(())
}

/// Rejects negative amounts and quantities.
pub fn require_non_negative<T>(field: &str, value: T) -> Result<()>
where
    T: PartialOrd + Default + ToString,
{
    if value < T::default() {
        return Err(ValidationError::NegativeValue {
            field: field.to_string(),
            value: value.to_string(),
        }
        .into());
    }
    Ok(())
}
