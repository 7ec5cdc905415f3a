//! Validation of raw operator input.
//! Every parser trims its input and reports the offending field by name.

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?\d+$").unwrap());
static DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").unwrap());
// digits with optional leading '+' and separators, e.g. "+1 (951) 555-0100"
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[\d(][\d\s().-]*$").unwrap());

// phNo is NUMERIC(10, 0)
const PHONE_MAX_DIGITS: usize = 10;

pub fn required(field: &'static str, raw: &str) -> AppResult<String> {
    let v = raw.trim();
    if v.is_empty() {
        return Err(AppError::invalid(field, "must not be empty"));
    }
    Ok(v.to_string())
}

pub fn integer(field: &'static str, raw: &str) -> AppResult<i32> {
    let v = required(field, raw)?;
    if !INTEGER.is_match(&v) {
        return Err(AppError::invalid(field, format!("'{v}' is not a number")));
    }
    v.parse::<i32>()
        .map_err(|e| AppError::invalid(field, e.to_string()))
}

/// A strictly positive count such as the K of a top-K report.
pub fn positive(field: &'static str, raw: &str) -> AppResult<i64> {
    let n = integer(field, raw)?;
    if n <= 0 {
        return Err(AppError::invalid(field, "must be greater than zero"));
    }
    Ok(i64::from(n))
}

pub fn decimal(field: &'static str, raw: &str) -> AppResult<Decimal> {
    let v = required(field, raw)?;
    if !DECIMAL.is_match(&v) {
        return Err(AppError::invalid(field, format!("'{v}' is not an amount")));
    }
    Decimal::from_str(&v).map_err(|e| AppError::invalid(field, e.to_string()))
}

/// Phone numbers are stored as a bare numeric value.
pub fn phone(field: &'static str, raw: &str) -> AppResult<Decimal> {
    let v = required(field, raw)?;
    if !PHONE.is_match(&v) {
        return Err(AppError::invalid(field, format!("'{v}' is not a phone number")));
    }
    let digits: String = v.chars().filter(char::is_ascii_digit).collect();
    if digits.len() > PHONE_MAX_DIGITS {
        return Err(AppError::invalid(
            field,
            format!("'{v}' has more than {PHONE_MAX_DIGITS} digits"),
        ));
    }
    Decimal::from_str(&digits).map_err(|e| AppError::invalid(field, e.to_string()))
}

pub fn date(field: &'static str, raw: &str) -> AppResult<NaiveDate> {
    let v = required(field, raw)?;
    date::parse_date(&v)
        .ok_or_else(|| AppError::invalid(field, format!("'{v}' is not a date (mm/dd/yyyy)")))
}

pub fn yes_no(field: &'static str, raw: &str) -> AppResult<bool> {
    let v = required(field, raw)?;
    match v.to_lowercase().as_str() {
        "y" | "yes" | "true" => Ok(true),
        "n" | "no" | "false" => Ok(false),
        _ => Err(AppError::invalid(field, format!("'{v}' is not Y or N"))),
    }
}
