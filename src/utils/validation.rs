use crate::utils::error::{RecordError, Result};
use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// Builds the validation error for a rejected value and records the rejection.
pub fn reject(field: &'static str, value: impl ToString, reason: impl Into<String>) -> RecordError {
    let value = value.to_string();
    let reason = reason.into();
    tracing::debug!(field, value = %value, "rejected: {}", reason);
    RecordError::invalid_field(field, value, reason)
}

pub fn validate_non_empty_string(field_name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(reject(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Length is counted in characters on the raw input, before trimming.
pub fn validate_max_length(field_name: &'static str, value: &str, max_len: usize) -> Result<()> {
    if value.chars().count() > max_len {
        return Err(reject(
            field_name,
            value,
            format!("Value cannot exceed {} characters", max_len),
        ));
    }
    Ok(())
}

/// Non-blank, bounded free text. Returns the trimmed value.
pub fn validate_text(field_name: &'static str, value: &str, max_len: usize) -> Result<String> {
    validate_non_empty_string(field_name, value)?;
    validate_max_length(field_name, value, max_len)?;
    Ok(value.trim().to_string())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &'static str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(reject(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_finite(field_name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(reject(field_name, value, "Value must be a finite number"));
    }
    Ok(())
}

/// Rejects dates after `today` or before January 1st of `min_year`.
pub fn validate_past_date(
    field_name: &'static str,
    date: NaiveDate,
    today: NaiveDate,
    min_year: i32,
) -> Result<()> {
    if date > today {
        return Err(reject(field_name, date, "Date cannot be in the future"));
    }
    if date.year() < min_year {
        return Err(reject(
            field_name,
            date,
            format!("Date cannot be earlier than {}", min_year),
        ));
    }
    Ok(())
}

/// January 1st of `year`.
pub fn first_day_of(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Round to one decimal place, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round half-up to cents and pin the scale at exactly two digits.
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Positive, capped price normalised to cents. A value that only rounds
/// down to zero is rejected as well.
pub fn validate_price(field_name: &'static str, value: Decimal, max: Decimal) -> Result<Decimal> {
    if value <= Decimal::ZERO {
        return Err(reject(field_name, value, "Price must be greater than 0"));
    }
    if value > max {
        return Err(reject(
            field_name,
            value,
            format!("Price cannot exceed ${}", max),
        ));
    }
    let rounded = round_currency(value);
    if rounded.is_zero() {
        return Err(reject(field_name, value, "Price must be at least $0.01"));
    }
    Ok(rounded)
}

/// Picks the entry of `choices` whose canonical spelling matches the trimmed
/// input, either exactly or ignoring case.
pub fn match_choice<T: Copy>(
    field_name: &'static str,
    raw: &str,
    choices: &[T],
    spelling: fn(&T) -> &'static str,
    ignore_case: bool,
) -> Result<T> {
    validate_non_empty_string(field_name, raw)?;
    let wanted = raw.trim();
    let found = if ignore_case {
        let wanted = wanted.to_lowercase();
        choices
            .iter()
            .find(|choice| spelling(choice).to_lowercase() == wanted)
    } else {
        choices.iter().find(|choice| spelling(choice) == wanted)
    };

    found.copied().ok_or_else(|| {
        let valid: Vec<&str> = choices.iter().map(spelling).collect();
        reject(
            field_name,
            raw,
            format!("Unsupported value. Use: {}", valid.join(", ")),
        )
    })
}
