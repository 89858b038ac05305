use crate::domain::rules;
use crate::utils::error::{AppError, AppResult};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> AppResult<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> AppResult<()> {
    if !allowed.contains(&value) {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// Parses an ISO `YYYY-MM-DD` date that a loan can still start on.
pub fn validate_date(field_name: &str, value: &str) -> AppResult<NaiveDate> {
    let date =
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected a date like 2024-01-31 ({})", e),
        })?;

    if rules::due_date(date).is_none() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Date is too late: loans starting then have no due date".to_string(),
        });
    }
    Ok(date)
}
