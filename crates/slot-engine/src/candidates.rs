//! Candidate start times stepped across a business day.
//!
//! Candidates start at opening time and advance by a fixed step while they are
//! at or before closing time. Whether a candidate is actually bookable is
//! decided later by [`crate::filter`].

use crate::clock::combine_time_of_day;
use crate::error::{Result, SlotError};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Lazy, finite iterator over candidate start times in `[first, last]`.
#[derive(Debug, Clone)]
pub struct CandidateSlots {
    next: Option<NaiveDateTime>,
    last: NaiveDateTime,
    step: Duration,
}

impl CandidateSlots {
    /// Iterate from `first` to `last` inclusive in steps of `step_minutes`.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidConfiguration` if `step_minutes` is not positive
    /// or too large to represent.
    pub fn new(first: NaiveDateTime, last: NaiveDateTime, step_minutes: i64) -> Result<Self> {
        let step = Duration::try_minutes(step_minutes)
            .filter(|_| step_minutes > 0)
            .ok_or_else(|| {
                SlotError::InvalidConfiguration(format!(
                    "appointment time slot step must be a positive number of minutes, got {}",
                    step_minutes
                ))
            })?;
        Ok(Self {
            next: (first <= last).then_some(first),
            last,
            step,
        })
    }
}

impl Iterator for CandidateSlots {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current
            .checked_add_signed(self.step)
            .filter(|t| *t <= self.last);
        Some(current)
    }
}

/// Generate every candidate start time between `start_time` and `end_time` on `date`.
///
/// The sequence is strictly ascending, consecutive elements differ by exactly
/// `step_minutes`, and the closing instant itself is included when the step
/// lands on it.
///
/// # Arguments
/// - `start_time` -- opening time as `"HHMM"`
/// - `end_time` -- closing time as `"HHMM"`
/// - `step_minutes` -- spacing between candidates, must be positive
/// - `date` -- the day to generate candidates for
///
/// # Errors
/// Returns `SlotError::InvalidConfiguration` if `step_minutes` is not positive.
/// Returns `SlotError::InvalidInput` if either time is not valid `"HHMM"`.
pub fn generate_candidate_slots(
    start_time: &str,
    end_time: &str,
    step_minutes: i64,
    date: NaiveDate,
) -> Result<Vec<NaiveDateTime>> {
    let first = combine_time_of_day(start_time, date)?;
    let last = combine_time_of_day(end_time, date)?;
    Ok(CandidateSlots::new(first, last, step_minutes)?.collect())
}
