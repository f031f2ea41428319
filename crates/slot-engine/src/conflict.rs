//! Detect which existing appointments a proposed booking collides with.
//!
//! A proposed booking `[t, slot_end)` conflicts with an appointment `a` under
//! three rules, checked in order:
//!
//! - start-inside: `a.start <= t < a.end`
//! - end-inside: `a.start < slot_end <= a.end`
//! - envelopment: `t < a.start && slot_end > a.end`
//!
//! Back-to-back bookings (`slot_end == a.start` or `t == a.end`) are NOT conflicts.

use crate::booking::ExistingAppointment;
use crate::clock::add_minutes;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Which overlap rule rejected a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Overlap {
    /// The candidate starts while the appointment is in progress.
    StartInside,
    /// The candidate ends while the appointment is in progress.
    EndInside,
    /// The candidate starts before and ends after the appointment.
    Envelops,
}

/// A detected conflict between a proposed booking and an existing appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub appointment: ExistingAppointment,
    pub kind: Overlap,
    pub overlap_minutes: i64,
}

/// Return the first overlap rule that fires for `[start, slot_end)` against `appointment`.
pub fn classify_overlap(
    start: NaiveDateTime,
    slot_end: NaiveDateTime,
    appointment: &ExistingAppointment,
) -> Option<Overlap> {
    let a_start = appointment.appointment_time;
    let a_end = appointment.appointment_end;

    if a_start <= start && start < a_end {
        Some(Overlap::StartInside)
    } else if a_start < slot_end && slot_end <= a_end {
        Some(Overlap::EndInside)
    } else if start < a_start && slot_end > a_end {
        Some(Overlap::Envelops)
    } else {
        None
    }
}

/// Find every existing appointment that a booking of `span_minutes` starting at
/// `start` would collide with.
///
/// The overlap duration is `min(slot_end, a.end) - max(start, a.start)`. A span
/// reaching past the representable range is treated as open-ended.
pub fn find_conflicts(
    start: NaiveDateTime,
    span_minutes: i64,
    existing: &[ExistingAppointment],
) -> Vec<Conflict> {
    let slot_end = add_minutes(start, span_minutes).unwrap_or(NaiveDateTime::MAX);

    existing
        .iter()
        .filter_map(|appointment| {
            let kind = classify_overlap(start, slot_end, appointment)?;
            let overlap_start = start.max(appointment.appointment_time);
            let overlap_end = slot_end.min(appointment.appointment_end);
            Some(Conflict {
                appointment: *appointment,
                kind,
                overlap_minutes: (overlap_end - overlap_start).num_minutes(),
            })
        })
        .collect()
}
