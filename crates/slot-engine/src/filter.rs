//! Reduce candidate start times to the bookable ones.

use crate::booking::ExistingAppointment;
use crate::clock::add_minutes;
use crate::conflict::{classify_overlap, Overlap};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Why a candidate start time cannot be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "overlap", rename_all = "camelCase")]
pub enum Rejection {
    /// The service span would run past closing time.
    PastClosing,
    /// The service span collides with an existing appointment.
    Overlap(Overlap),
}

/// Decide whether a booking of `span_minutes` starting at `start` is possible.
///
/// Returns `None` when the booking fits before `close_time` and clears every
/// existing appointment. Ending exactly at `close_time` is allowed.
pub fn rejection_for(
    start: NaiveDateTime,
    existing: &[ExistingAppointment],
    span_minutes: i64,
    close_time: NaiveDateTime,
) -> Option<Rejection> {
    let slot_end = match add_minutes(start, span_minutes) {
        Some(end) if end <= close_time => end,
        _ => return Some(Rejection::PastClosing),
    };
    existing
        .iter()
        .find_map(|appointment| classify_overlap(start, slot_end, appointment))
        .map(Rejection::Overlap)
}

/// Keep the candidates that can actually be booked, preserving their order.
///
/// A candidate survives when its full service span (duration plus break) ends
/// at or before `close_time` and it conflicts with none of `existing`. An empty
/// result is a valid answer, not an error.
pub fn filter_bookable_slots(
    candidates: &[NaiveDateTime],
    existing: &[ExistingAppointment],
    span_minutes: i64,
    close_time: NaiveDateTime,
) -> Vec<NaiveDateTime> {
    candidates
        .iter()
        .copied()
        .filter(|&start| match rejection_for(start, existing, span_minutes, close_time) {
            None => true,
            Some(rejection) => {
                trace!(%start, ?rejection, "candidate rejected");
                false
            }
        })
        .collect()
}
