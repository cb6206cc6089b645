//! Short human-readable labels for execution start times.
//!
//! ERROR HANDLING
//! ==============
//! Parsing is fallible, labelling is not. [`format_timestamp`] absorbs any
//! parse fault into [`INVALID_DATE_LABEL`] so a single bad row cannot break the
//! history view.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::borrow::Cow;

use time::format_description::well_known::Rfc3339;
use time::{Duration, Month, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::ExecutionsError;

/// Label rendered in place of an unparseable timestamp.
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

/// Parse an ISO-8601 date-time.
///
/// Values without an offset are read as UTC, and a space is accepted in place
/// of the `T` separator.
///
/// # Errors
///
/// Returns [`ExecutionsError::InvalidTimestamp`] when neither form parses.
pub fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, ExecutionsError> {
    let normalized = normalize_separator(raw.trim());
    if let Ok(parsed) = OffsetDateTime::parse(&normalized, &Rfc3339) {
        return Ok(parsed);
    }
    OffsetDateTime::parse(&format!("{normalized}Z"), &Rfc3339)
        .map_err(|_| ExecutionsError::InvalidTimestamp { raw: raw.to_owned() })
}

/// Format `raw` as `"Mar 5, 2:07 PM"` in the viewer's `offset`.
#[must_use]
pub fn format_timestamp(raw: &str, offset: UtcOffset) -> String {
    let local = parse_timestamp(raw).and_then(|instant| {
        shift_to_offset(instant, offset).ok_or_else(|| ExecutionsError::InvalidTimestamp { raw: raw.to_owned() })
    });
    match local {
        Ok(local) => format_local(local),
        Err(err) => {
            log::debug!("execution timestamp not rendered: {err}");
            INVALID_DATE_LABEL.to_owned()
        }
    }
}

fn normalize_separator(raw: &str) -> Cow<'_, str> {
    if raw.get(10..11) == Some(" ") {
        Cow::Owned(format!("{}T{}", &raw[..10], &raw[11..]))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Wall-clock time of `instant` as seen at `offset`; `None` past the
/// representable date range.
fn shift_to_offset(instant: OffsetDateTime, offset: UtcOffset) -> Option<PrimitiveDateTime> {
    let delta = i64::from(offset.whole_seconds()) - i64::from(instant.offset().whole_seconds());
    PrimitiveDateTime::new(instant.date(), instant.time()).checked_add(Duration::seconds(delta))
}

fn format_local(at: PrimitiveDateTime) -> String {
    let (hour, period) = match at.hour() {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    format!(
        "{} {}, {}:{:02} {}",
        short_month(at.month()),
        at.day(),
        hour,
        at.minute(),
        period
    )
}

fn short_month(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
