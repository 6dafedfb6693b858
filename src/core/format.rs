use std::fmt::{self, Write};

use crate::domain::model::Time;
use crate::utils::error::Result;
use crate::utils::validation::validate_year;

/// Renders the unquoted layout. Years outside [0, 9999] are a range error.
pub fn format(time: &Time) -> Result<String> {
    if let Err(e) = validate_year(time.year()) {
        tracing::debug!(error = %e, "refusing to format date-time");
        return Err(e);
    }
    Ok(time.to_string())
}

/// Writes the layout without checking the year range.
pub(crate) fn write_layout<W: Write>(w: &mut W, time: &Time) -> fmt::Result {
    write!(
        w,
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        time.year(),
        time.month(),
        time.day(),
        time.hour(),
        time.minute(),
        time.second()
    )?;
    write_fraction(w, time.nanosecond())?;
    write_offset(w, time.offset_seconds())
}

// Trailing zeros are dropped; a zero fraction writes nothing.
fn write_fraction<W: Write>(w: &mut W, nanos: u32) -> fmt::Result {
    if nanos == 0 {
        return Ok(());
    }
    let mut digits = nanos;
    let mut width = 9;
    while digits % 10 == 0 {
        digits /= 10;
        width -= 1;
    }
    write!(w, ".{digits:0width$}")
}

fn write_offset<W: Write>(w: &mut W, offset_seconds: i32) -> fmt::Result {
    if offset_seconds == 0 {
        return w.write_char('Z');
    }
    let sign = if offset_seconds >= 0 { '+' } else { '-' };
    let abs = offset_seconds.unsigned_abs();
    write!(w, "{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
}
