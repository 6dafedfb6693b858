use crate::utils::error::{Iso8601Error, Result};

pub const MIN_YEAR: i32 = 0;
pub const MAX_YEAR: i32 = 9999;

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(Iso8601Error::Invalid {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Checks that a year fits the four-digit field of the text layout.
pub fn validate_year(year: i32) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Iso8601Error::Range { year });
    }
    Ok(())
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Validates the calendar and clock fields shared by the parser and `Time::new`.
pub fn validate_fields(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<()> {
    validate_range("month", month, 1, 12)?;
    validate_range("day", day, 1, days_in_month(year, month))?;
    validate_range("hour", hour, 0, 23)?;
    validate_range("minute", minute, 0, 59)?;
    validate_range("second", second, 0, 59)?;
    Ok(())
}

pub fn validate_offset(offset_seconds: i32) -> Result<()> {
    validate_range("offset", offset_seconds, -86_399, 86_399)
}
