//! Time-of-day helpers: `"HHMM"` strings, combining them with calendar dates,
//! and the one-day storage window.
//!
//! All instants are business-local wall-clock times (`NaiveDateTime`). No
//! timezone conversion happens anywhere in this crate.

use crate::error::{Result, SlotError};
use chrono::{DateTime, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Parse a 4-digit 24-hour `"HHMM"` string into a time of day.
///
/// Hours are `hhmm / 100` and minutes are `hhmm % 100`. Anything that is not
/// exactly four ASCII digits, or whose hour or minute is out of range
/// (`"2400"`, `"0960"`), is rejected.
///
/// # Errors
/// Returns `SlotError::InvalidInput` for malformed strings.
pub fn parse_hhmm(hhmm: &str) -> Result<NaiveTime> {
    if hhmm.len() != 4 || !hhmm.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SlotError::InvalidInput(format!(
            "expected a 4-digit HHMM time, got '{}'",
            hhmm
        )));
    }

    let value: u32 = hhmm
        .parse()
        .map_err(|_| SlotError::InvalidInput(format!("invalid HHMM time '{}'", hhmm)))?;
    let hours = value / 100;
    let minutes = value % 100;

    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(|| {
        SlotError::InvalidInput(format!("HHMM time '{}' is out of range", hhmm))
    })
}

/// Combine an `"HHMM"` time of day with a calendar date.
///
/// ```
/// use chrono::NaiveDate;
/// use slot_engine::combine_time_of_day;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
/// let instant = combine_time_of_day("0930", date).unwrap();
/// assert_eq!(instant.to_string(), "2026-03-16 09:30:00");
/// ```
///
/// # Errors
/// Returns `SlotError::InvalidInput` if `hhmm` is not a valid time.
pub fn combine_time_of_day(hhmm: &str, date: NaiveDate) -> Result<NaiveDateTime> {
    Ok(date.and_time(parse_hhmm(hhmm)?))
}

/// Parse an ISO 8601 datetime into a business-local instant.
///
/// Accepts naive local time (`2026-03-16T14:00:00`, seconds optional) and
/// RFC 3339 with an offset (`2026-03-16T14:00:00+02:00`), whose wall-clock part
/// is kept and offset dropped.
///
/// # Errors
/// Returns `SlotError::InvalidInput` if no accepted format matches.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| SlotError::InvalidInput(format!("invalid datetime '{}': {}", s, e)))
}

/// `instant + minutes`, or `None` when the result leaves chrono's range.
pub fn add_minutes(instant: NaiveDateTime, minutes: i64) -> Option<NaiveDateTime> {
    Duration::try_minutes(minutes).and_then(|d| instant.checked_add_signed(d))
}

/// The half-open `[date 00:00, date+1 00:00)` window covering one business day.
///
/// Appointments whose start falls in this window are the ones a caller must
/// fetch before computing slots for `date`.
pub fn day_window(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    let end = date
        .checked_add_days(Days::new(1))
        .map(|next| next.and_time(NaiveTime::MIN))
        .unwrap_or(NaiveDateTime::MAX);
    (start, end)
}
