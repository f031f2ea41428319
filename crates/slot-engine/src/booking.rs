//! Services and the appointments already booked against them.

use crate::clock::{add_minutes, parse_datetime};
use crate::error::{Result, SlotError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// A bookable service.
///
/// A booking occupies `duration_minutes + break_minutes` for conflict purposes;
/// the trailing break counts as busy time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    #[serde(alias = "duration_minutes")]
    pub duration_minutes: u32,
    #[serde(default, alias = "break_minutes")]
    pub break_minutes: u32,
}

impl Service {
    pub fn new(id: &str, duration_minutes: u32, break_minutes: u32) -> Self {
        Self {
            id: id.to_string(),
            duration_minutes,
            break_minutes,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.duration_minutes == 0 {
            return Err(SlotError::InvalidConfiguration(format!(
                "service '{}' must last at least one minute",
                self.id
            )));
        }
        Ok(())
    }

    /// Total minutes a booking of this service occupies.
    pub fn span_minutes(&self) -> i64 {
        i64::from(self.duration_minutes) + i64::from(self.break_minutes)
    }

    /// End of the occupied interval for a booking starting at `start`, or `None`
    /// if it falls outside the representable range.
    pub fn appointment_end(&self, start: NaiveDateTime) -> Option<NaiveDateTime> {
        add_minutes(start, self.span_minutes())
    }
}

/// An appointment already on the books, occupying `[appointment_time, appointment_end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingAppointment {
    #[serde(deserialize_with = "deserialize_instant")]
    pub appointment_time: NaiveDateTime,
    #[serde(deserialize_with = "deserialize_instant")]
    pub appointment_end: NaiveDateTime,
}

fn deserialize_instant<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).map_err(serde::de::Error::custom)
}

impl ExistingAppointment {
    pub fn new(appointment_time: NaiveDateTime, appointment_end: NaiveDateTime) -> Self {
        Self {
            appointment_time,
            appointment_end,
        }
    }

    /// Whether this appointment starts inside the half-open `[start, end)` window.
    pub fn starts_within(&self, (start, end): (NaiveDateTime, NaiveDateTime)) -> bool {
        self.appointment_time >= start && self.appointment_time < end
    }
}
