//! Form validation
//!
//! Turns raw dialog values into request payloads, rejecting bad input before
//! anything is sent. Bounds follow the backend schema: names up to 200
//! characters, inventory of at least 0, category ids of at least 1.

use crate::api::{NewStock, StockPatch};
use crate::dialog::{FormValues, FIELD_CATEGORY, FIELD_INVENTORY, FIELD_NAME};
use crate::error::ValidationError;

pub const NAME_MAX_CHARS: usize = 200;

/// Parse an integer field; blank input is `Ok(None)`
///
/// Any number with an integral value is accepted, so `"3.0"` and `"1e2"`
/// parse while `"3.5"`, `"NaN"` and `"inf"` are rejected.
///
/// # Examples
/// ```
/// use stocktui::logic::validation::parse_integer;
///
/// assert_eq!(parse_integer("inventory", " 12 "), Ok(Some(12)));
/// assert_eq!(parse_integer("inventory", "1e2"), Ok(Some(100)));
/// assert_eq!(parse_integer("inventory", ""), Ok(None));
/// assert!(parse_integer("inventory", "3.5").is_err());
/// ```
pub fn parse_integer(field: &'static str, raw: &str) -> Result<Option<i64>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(Some(value));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if is_integral_i64(value) => Ok(Some(value as i64)),
        _ => Err(ValidationError::NotAnInteger {
            field,
            raw: trimmed.to_string(),
        }),
    }
}

// 2^63 is exactly representable; i64::MAX as f64 rounds up to it.
fn is_integral_i64(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64
}

fn check_min(field: &'static str, value: i64, min: i64) -> Result<i64, ValidationError> {
    if value < min {
        Err(ValidationError::OutOfRange { field, min })
    } else {
        Ok(value)
    }
}

fn check_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(ValidationError::NameTooLong {
            max: NAME_MAX_CHARS,
        });
    }
    Ok(name.to_string())
}

/// Payload for creating a stock; every field is required
pub fn build_new_stock(values: &FormValues) -> Result<NewStock, ValidationError> {
    let name = check_name(values.get(FIELD_NAME))?;

    // blank inventory means the prefilled default was erased
    let inventory = parse_integer(FIELD_INVENTORY, values.get(FIELD_INVENTORY))?.unwrap_or(0);
    let inventory = check_min(FIELD_INVENTORY, inventory, 0)?;

    let category_id = parse_integer(FIELD_CATEGORY, values.get(FIELD_CATEGORY))?
        .ok_or(ValidationError::MissingCategory)?;
    let category_id = check_min(FIELD_CATEGORY, category_id, 1)?;

    Ok(NewStock {
        name,
        inventory,
        category_id,
    })
}

/// Partial payload for updating a stock; blank fields are left out
pub fn build_patch(values: &FormValues) -> Result<StockPatch, ValidationError> {
    let raw_name = values.get(FIELD_NAME).trim();
    let name = if raw_name.is_empty() {
        None
    } else {
        Some(check_name(raw_name)?)
    };

    let inventory = parse_integer(FIELD_INVENTORY, values.get(FIELD_INVENTORY))?
        .map(|v| check_min(FIELD_INVENTORY, v, 0))
        .transpose()?;

    let category_id = parse_integer(FIELD_CATEGORY, values.get(FIELD_CATEGORY))?
        .map(|v| check_min(FIELD_CATEGORY, v, 1))
        .transpose()?;

    Ok(StockPatch {
        name,
        inventory,
        category_id,
    })
}
