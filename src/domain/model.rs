use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
};

use crate::core::{format, json, layout};
use crate::utils::error::{Iso8601Error, Result};
use crate::utils::validation::{validate_fields, validate_offset, validate_range};

/// An instant in time that keeps the UTC offset it was written with.
///
/// Serializes to and from RFC 3339 text with nanosecond precision, e.g.
/// `"2017-08-23T01:24:48.756+07:00"`. Equality is structural: the same
/// instant at two different offsets compares unequal. Use
/// [`Time::same_instant`] to compare absolute instants.
#[derive(Debug, Clone, Copy)]
pub struct Time(DateTime<FixedOffset>);

impl Time {
    /// Builds a `Time` from calendar fields and an offset east of UTC in seconds.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
        offset_seconds: i32,
    ) -> Result<Self> {
        validate_fields(year, month, day, hour, minute, second)?;
        validate_range("nanosecond", nanosecond, 0, 999_999_999)?;
        validate_offset(offset_seconds)?;

        let invalid = || Iso8601Error::Invalid {
            field: "year".to_string(),
            value: year.to_string(),
            reason: "date is not representable".to_string(),
        };
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_nano_opt(hour, minute, second, nanosecond))
            .ok_or_else(invalid)?;
        let offset = FixedOffset::east_opt(offset_seconds).ok_or_else(invalid)?;
        Self::from_local(naive, offset).ok_or_else(invalid)
    }

    pub(crate) fn from_local(naive: NaiveDateTime, offset: FixedOffset) -> Option<Self> {
        offset.from_local_datetime(&naive).single().map(Time)
    }

    pub fn now() -> Self {
        Time(Utc::now().into())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Seconds field; 60 when the value carries a leap second.
    pub fn second(&self) -> u32 {
        self.0.second() + self.0.nanosecond() / 1_000_000_000
    }

    /// Sub-second fraction in nanoseconds, always below one second.
    pub fn nanosecond(&self) -> u32 {
        self.0.nanosecond() % 1_000_000_000
    }

    /// Offset east of UTC in seconds.
    pub fn offset_seconds(&self) -> i32 {
        self.0.offset().local_minus_utc()
    }

    /// Reports whether this is the zero value, `0001-01-01T00:00:00Z`.
    pub fn is_zero(&self) -> bool {
        *self == Time::default()
    }

    /// Compares absolute instants, ignoring the offsets.
    pub fn same_instant(&self, other: &Time) -> bool {
        self.0 == other.0
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }

    /// Renders the unquoted layout, failing for years outside [0, 9999].
    pub fn to_iso8601(&self) -> Result<String> {
        format::format(self)
    }

    pub fn marshal_json(&self) -> Result<Vec<u8>> {
        json::marshal_json(self)
    }

    /// Replaces `self` with the decoded value; `null` leaves it untouched.
    pub fn unmarshal_json(&mut self, bytes: &[u8]) -> Result<()> {
        json::unmarshal_json(self, bytes)
    }
}

impl Default for Time {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        let naive = NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("0001-01-01 to be within chrono's range");
        Time(Utc.from_utc_datetime(&naive).into())
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.0.offset() == other.0.offset()
    }
}

impl Eq for Time {}

impl Hash for Time {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.naive_local().hash(state);
        self.offset_seconds().hash(state);
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_layout(f, self)
    }
}

impl FromStr for Time {
    type Err = Iso8601Error;

    fn from_str(s: &str) -> Result<Self> {
        layout::parse(s)
    }
}

impl From<DateTime<FixedOffset>> for Time {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Time(datetime)
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(datetime: DateTime<Utc>) -> Self {
        Time(datetime.into())
    }
}

impl From<Time> for DateTime<FixedOffset> {
    fn from(time: Time) -> Self {
        time.0
    }
}

impl From<Time> for DateTime<Utc> {
    fn from(time: Time) -> Self {
        time.to_utc()
    }
}
