//! Viewer time zone for timestamp labels.
//!
//! TRADE-OFFS
//! ==========
//! The browser knows the viewer's offset; the server does not. SSR renders
//! UTC, which is fine because history is only fetched after hydration.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use time::UtcOffset;

/// The viewer's current UTC offset, or UTC outside the browser.
pub fn viewer_offset() -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        offset_from_js_minutes(js_sys::Date::new_0().get_timezone_offset())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        UtcOffset::UTC
    }
}

/// Convert `Date.prototype.getTimezoneOffset()` (minutes *behind* UTC) into
/// a [`UtcOffset`]. Out-of-range or non-finite input falls back to UTC.
#[must_use]
pub fn offset_from_js_minutes(minutes: f64) -> UtcOffset {
    if !minutes.is_finite() || minutes.abs() > 24.0 * 60.0 {
        return UtcOffset::UTC;
    }
    #[allow(clippy::cast_possible_truncation)]
    let seconds = (-minutes * 60.0).round() as i32;
    UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
}
