//! End-to-end slot computation for one business, service and date.
//!
//! The caller resolves the weekday's operating hours, the service span and the
//! appointments already booked that day, then hands them over as a
//! [`SlotRequest`]. Nothing here performs I/O or keeps state, so requests can
//! be served concurrently without coordination.

use crate::booking::ExistingAppointment;
use crate::candidates::CandidateSlots;
use crate::clock::add_minutes;
use crate::error::{Result, SlotError};
use crate::filter::{filter_bookable_slots, rejection_for, Rejection};
use crate::hours::OperatingHours;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything needed to compute bookable start times for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRequest {
    /// Hours for the weekday `date` falls on.
    pub operating_hours: OperatingHours,
    /// Service duration plus break, in minutes.
    pub service_duration_minutes: i64,
    /// Step between candidate start times, in minutes.
    pub appointment_time_slot: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub existing_appointments: Vec<ExistingAppointment>,
}

impl SlotRequest {
    /// Parse a request from its JSON body.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the request describes a computable day.
    ///
    /// # Errors
    /// `SlotError::InvalidInput` for malformed hours, `SlotError::InvalidConfiguration`
    /// for reversed hours, a non-positive step, or a non-positive service span.
    pub fn validate(&self) -> Result<()> {
        self.operating_hours.validate()?;
        if self.appointment_time_slot <= 0 {
            return Err(SlotError::InvalidConfiguration(format!(
                "appointment time slot step must be a positive number of minutes, got {}",
                self.appointment_time_slot
            )));
        }
        if self.service_duration_minutes <= 0 {
            return Err(SlotError::InvalidConfiguration(format!(
                "service span must be a positive number of minutes, got {}",
                self.service_duration_minutes
            )));
        }
        Ok(())
    }

    fn candidates(&self) -> Result<(CandidateSlots, NaiveDateTime)> {
        let open = self.operating_hours.opens_on(self.date)?;
        let close = self.operating_hours.closes_on(self.date)?;
        let candidates = CandidateSlots::new(open, close, self.appointment_time_slot)?;
        Ok((candidates, close))
    }
}

/// Response body listing bookable start times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotResponse {
    pub times: Vec<NaiveDateTime>,
}

impl From<Vec<NaiveDateTime>> for SlotResponse {
    fn from(times: Vec<NaiveDateTime>) -> Self {
        Self { times }
    }
}

/// Compute every bookable start time for the request, in ascending order.
///
/// Candidates are stepped from opening to closing time, then reduced by
/// [`filter_bookable_slots`]. Calling this twice with the same request returns
/// the same answer.
///
/// # Errors
/// See [`SlotRequest::validate`].
pub fn compute_available_slots(request: &SlotRequest) -> Result<Vec<NaiveDateTime>> {
    request.validate()?;

    let (candidates, close) = request.candidates()?;
    let candidates: Vec<NaiveDateTime> = candidates.collect();

    let times = filter_bookable_slots(
        &candidates,
        &request.existing_appointments,
        request.service_duration_minutes,
        close,
    );

    debug!(
        date = %request.date,
        weekday = %request.operating_hours.weekday,
        candidates = candidates.len(),
        existing = request.existing_appointments.len(),
        available = times.len(),
        "computed available slots"
    );

    Ok(times)
}

/// Outcome of re-checking one requested start time at booking time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "camelCase")]
pub enum BookingVerdict {
    /// The start time is free; the booking would occupy `[start, end)`.
    Bookable { end: NaiveDateTime },
    /// The start time is not one of the day's candidate slots.
    OffGrid,
    /// The start time is a candidate but cannot be booked.
    Rejected { rejection: Rejection },
}

impl BookingVerdict {
    pub fn is_bookable(&self) -> bool {
        matches!(self, BookingVerdict::Bookable { .. })
    }
}

/// Re-check a single requested start time against the current appointments.
///
/// Slots are usually listed in one request and booked in a later one; callers
/// run this with freshly fetched appointments right before persisting a booking.
/// A start is bookable exactly when [`compute_available_slots`] would list it.
///
/// # Errors
/// See [`SlotRequest::validate`].
pub fn verify_booking(request: &SlotRequest, start: NaiveDateTime) -> Result<BookingVerdict> {
    request.validate()?;

    let (mut candidates, close) = request.candidates()?;
    if !candidates.any(|t| t == start) {
        debug!(%start, date = %request.date, "requested start is not on the slot grid");
        return Ok(BookingVerdict::OffGrid);
    }

    let verdict = match rejection_for(
        start,
        &request.existing_appointments,
        request.service_duration_minutes,
        close,
    ) {
        Some(rejection) => BookingVerdict::Rejected { rejection },
        None => match add_minutes(start, request.service_duration_minutes) {
            Some(end) => BookingVerdict::Bookable { end },
            None => BookingVerdict::Rejected {
                rejection: Rejection::PastClosing,
            },
        },
    };
    debug!(%start, ?verdict, "verified booking");
    Ok(verdict)
}
