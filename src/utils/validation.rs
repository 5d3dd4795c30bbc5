use crate::utils::error::{HotelError, Result};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HotelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number<T: PartialOrd + Display + Copy>(
    field_name: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(HotelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(HotelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one entry is required".to_string(),
        });
    }
    Ok(())
}

/// Fails on the first value that appears twice.
pub fn validate_unique<T, I>(field_name: &str, values: I) -> Result<()>
where
    T: Eq + Hash + Display,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    for value in values {
        if seen.contains(&value) {
            return Err(HotelError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate value".to_string(),
            });
        }
        seen.insert(value);
    }
    Ok(())
}
