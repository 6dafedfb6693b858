//! The accepted text layout and its parser.
//!
//! The grammar is fixed: `YYYY-MM-DDTHH:MM:SS[.fraction](Z|±HH:MM)`. The
//! fraction holds one to nine digits and is left-aligned to nanoseconds, so
//! `.1` is 100ms and `.987373613` is exact. Nothing is trimmed or guessed;
//! any deviation is a parse error.

use chrono::{FixedOffset, NaiveDate};

use crate::domain::model::Time;
use crate::utils::error::{Iso8601Error, Result};
use crate::utils::validation::validate_fields;

/// Human-readable form of the layout, used in error messages.
pub const LAYOUT: &str = "YYYY-MM-DDTHH:MM:SS[.fffffffff](Z|±HH:MM)";

const MAX_FRACTION_DIGITS: usize = 9;

/// Parses the unquoted layout into a [`Time`].
pub fn parse(value: &str) -> Result<Time> {
    let result = Parser::new(value).parse();
    if let Err(e) = &result {
        tracing::debug!(error = %e, "rejected date-time text");
    }
    result
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn parse(mut self) -> Result<Time> {
        let year = self.number(4, "year")?;
        self.literal(b'-')?;
        let month = self.number(2, "month")?;
        self.literal(b'-')?;
        let day = self.number(2, "day")?;
        self.literal(b'T')?;
        let hour = self.number(2, "hour")?;
        self.literal(b':')?;
        let minute = self.number(2, "minute")?;
        self.literal(b':')?;
        let second = self.number(2, "second")?;
        let nanosecond = self.fraction()?;
        let offset_seconds = self.offset()?;

        if self.pos != self.bytes.len() {
            return Err(self.error(format!(
                "extra text: {:?}",
                &self.input[self.pos..]
            )));
        }

        // The four-digit field bounds the year to [0, 9999].
        let year = year as i32;
        validate_fields(year, month, day, hour, minute, second).map_err(|e| match e {
            Iso8601Error::Invalid { field, .. } => self.error(format!("{field} out of range")),
            other => other,
        })?;

        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_nano_opt(hour, minute, second, nanosecond))
            .ok_or_else(|| self.error("date out of range"))?;
        let offset = FixedOffset::east_opt(offset_seconds)
            .ok_or_else(|| self.error("time zone offset out of range"))?;
        let time = Time::from_local(naive, offset).ok_or_else(|| self.error("date out of range"))?;

        tracing::trace!(value = self.input, "parsed date-time");
        Ok(time)
    }

    fn error(&self, reason: impl Into<String>) -> Iso8601Error {
        Iso8601Error::parse(self.input, reason)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn found(&self) -> String {
        match self.input.get(self.pos..).and_then(|rest| rest.chars().next()) {
            Some(c) => format!("{c:?}"),
            None => "end of input".to_string(),
        }
    }

    fn literal(&mut self, expected: u8) -> Result<()> {
        if self.peek() == Some(expected) {
            self.pos += 1;
            return Ok(());
        }
        Err(self.error(format!(
            "expected {:?} at byte {}, found {}",
            expected as char,
            self.pos,
            self.found()
        )))
    }

    /// Reads exactly `width` ASCII digits.
    fn number(&mut self, width: usize, field: &str) -> Result<u32> {
        let mut value = 0u32;
        for _ in 0..width {
            match self.peek() {
                Some(b @ b'0'..=b'9') => {
                    value = value * 10 + u32::from(b - b'0');
                    self.pos += 1;
                }
                _ => {
                    return Err(self.error(format!(
                        "expected {width}-digit {field} at byte {}, found {}",
                        self.pos,
                        self.found()
                    )))
                }
            }
        }
        Ok(value)
    }

    /// Reads an optional `.` fraction, padded with trailing zeros to nanoseconds.
    fn fraction(&mut self) -> Result<u32> {
        if self.peek() != Some(b'.') {
            return Ok(0);
        }
        self.pos += 1;

        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        let digits = &self.bytes[start..self.pos];

        if digits.is_empty() {
            return Err(self.error(format!(
                "expected fractional digits at byte {}, found {}",
                self.pos,
                self.found()
            )));
        }
        if digits.len() > MAX_FRACTION_DIGITS {
            return Err(self.error(format!(
                "fractional second has {} digits, at most {MAX_FRACTION_DIGITS} allowed",
                digits.len()
            )));
        }

        let nanos = (0..MAX_FRACTION_DIGITS).fold(0u32, |acc, i| {
            let digit = digits.get(i).map_or(0, |b| u32::from(b - b'0'));
            acc * 10 + digit
        });
        Ok(nanos)
    }

    /// Reads `Z` or `±HH:MM`, returning seconds east of UTC.
    fn offset(&mut self) -> Result<i32> {
        let sign = match self.peek() {
            Some(b'Z') => {
                self.pos += 1;
                return Ok(0);
            }
            Some(b'+') => 1,
            Some(b'-') => -1,
            _ => {
                return Err(self.error(format!(
                    "expected time zone 'Z' or ±HH:MM at byte {}, found {}",
                    self.pos,
                    self.found()
                )))
            }
        };
        self.pos += 1;

        let hour = self.number(2, "time zone offset hour")?;
        self.literal(b':')?;
        let minute = self.number(2, "time zone offset minute")?;
        if hour > 23 {
            return Err(self.error("time zone offset hour out of range"));
        }
        if minute > 59 {
            return Err(self.error("time zone offset minute out of range"));
        }

        Ok(sign * ((hour * 60 + minute) * 60) as i32)
    }
}
