//! JSON embedding of [`Time`].
//!
//! [`marshal_json`] and [`unmarshal_json`] work on the raw bytes of a single
//! JSON value, quotes included. The serde impls route through the same
//! layout code so a `Time` field behaves identically inside any document.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};

use crate::core::{format, layout};
use crate::domain::model::Time;
use crate::utils::error::{Iso8601Error, Result};

const NULL: &[u8] = b"null";

/// Encodes `time` as a quoted JSON string.
pub fn marshal_json(time: &Time) -> Result<Vec<u8>> {
    let text = format::format(time)?;
    let mut out = Vec::with_capacity(text.len() + 2);
    out.push(b'"');
    out.extend_from_slice(text.as_bytes());
    out.push(b'"');
    Ok(out)
}

/// Decodes a quoted JSON string into `target`.
///
/// The literal `null` succeeds and leaves `target` as it was.
pub fn unmarshal_json(target: &mut Time, bytes: &[u8]) -> Result<()> {
    if bytes == NULL {
        tracing::trace!("null date-time, leaving target unchanged");
        return Ok(());
    }

    let text = std::str::from_utf8(bytes).map_err(|_| {
        Iso8601Error::parse(&String::from_utf8_lossy(bytes), "input is not valid UTF-8")
    })?;
    let inner = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| Iso8601Error::parse(text, "expected a double-quoted string"))?;

    *target = layout::parse(inner)?;
    Ok(())
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = format::format(self).map_err(<S::Error as ser::Error>::custom)?;
        serializer.serialize_str(&text)
    }
}

struct TimeVisitor;

impl<'de> Visitor<'de> for TimeVisitor {
    type Value = Time;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a date-time string in the layout \"{}\" or null", layout::LAYOUT)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Time, E> {
        layout::parse(value).map_err(E::custom)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Time, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TimeVisitor)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Time, E> {
        Ok(Time::default())
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Time, E> {
        Ok(Time::default())
    }
}

impl<'de> Deserialize<'de> for Time {
    /// `null` yields the zero `Time`; use `Option<Time>` to tell it apart.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(TimeVisitor)
    }
}

/// `#[serde(with = "iso8601_time::rfc3339")]` for plain
/// `chrono::DateTime<FixedOffset>` fields.
pub mod rfc3339 {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::domain::model::Time;

    pub fn serialize<S: Serializer>(
        datetime: &DateTime<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        Time::from(*datetime).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<FixedOffset>, D::Error> {
        Time::deserialize(deserializer).map(Into::into)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            option: &Option<DateTime<FixedOffset>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            option.map(Time::from).serialize(serializer)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
            Option::<Time>::deserialize(deserializer).map(|time| time.map(Into::into))
        }
    }
}
