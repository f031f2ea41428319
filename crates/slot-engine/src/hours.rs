//! Business operating hours, one entry per weekday.

use crate::clock::{combine_time_of_day, parse_hhmm};
use crate::error::{NotFound, Result, SlotError};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Opening and closing time for one weekday.
///
/// Times are 4-digit 24-hour `"HHMM"` strings. Hours are same-day only:
/// `start_time <= end_time`, no overnight spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingHours {
    pub weekday: Weekday,
    #[serde(alias = "start_time")]
    pub start_time: String,
    #[serde(alias = "end_time")]
    pub end_time: String,
}

impl OperatingHours {
    pub fn new(weekday: Weekday, start_time: &str, end_time: &str) -> Self {
        Self {
            weekday,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }

    /// Check both times parse and that the business opens before it closes.
    ///
    /// # Errors
    /// `SlotError::InvalidInput` for malformed times, `SlotError::InvalidConfiguration`
    /// when `start_time > end_time`.
    pub fn validate(&self) -> Result<()> {
        let open = parse_hhmm(&self.start_time)?;
        let close = parse_hhmm(&self.end_time)?;
        if open > close {
            return Err(SlotError::InvalidConfiguration(format!(
                "{} opens at {} but closes at {}",
                self.weekday, self.start_time, self.end_time
            )));
        }
        Ok(())
    }

    /// Opening instant on `date`.
    pub fn opens_on(&self, date: NaiveDate) -> Result<NaiveDateTime> {
        combine_time_of_day(&self.start_time, date)
    }

    /// Closing instant on `date`.
    pub fn closes_on(&self, date: NaiveDate) -> Result<NaiveDateTime> {
        combine_time_of_day(&self.end_time, date)
    }
}

/// A business's weekly schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyHours {
    entries: Vec<OperatingHours>,
}

impl WeeklyHours {
    /// Build a schedule, rejecting duplicate weekdays and invalid entries.
    pub fn new(entries: Vec<OperatingHours>) -> Result<Self> {
        let hours = Self { entries };
        hours.validate()?;
        Ok(hours)
    }

    pub fn validate(&self) -> Result<()> {
        for (i, entry) in self.entries.iter().enumerate() {
            entry.validate()?;
            if self.entries[..i].iter().any(|e| e.weekday == entry.weekday) {
                return Err(SlotError::InvalidConfiguration(format!(
                    "operating hours for {} are defined more than once",
                    entry.weekday
                )));
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[OperatingHours] {
        &self.entries
    }

    pub fn for_weekday(&self, weekday: Weekday) -> Result<&OperatingHours> {
        self.entries
            .iter()
            .find(|e| e.weekday == weekday)
            .ok_or_else(|| NotFound::OperatingHoursMissing { weekday }.into())
    }

    /// Look up the hours for the weekday `date` falls on.
    ///
    /// # Errors
    /// `SlotError::NotFound` when the business is closed that weekday.
    pub fn for_date(&self, date: NaiveDate) -> Result<&OperatingHours> {
        self.for_weekday(date.weekday())
    }
}
