//! A business's booking configuration: slot step, weekly hours and services.

use crate::booking::{ExistingAppointment, Service};
use crate::clock::day_window;
use crate::error::{NotFound, Result, SlotError};
use crate::hours::WeeklyHours;
use crate::slots::SlotRequest;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub name: String,
    /// Step between candidate start times, in minutes.
    #[serde(alias = "appointment_time_slot")]
    pub appointment_time_slot: i64,
    #[serde(default, alias = "operating_hours")]
    pub operating_hours: WeeklyHours,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl BusinessProfile {
    /// Check every setting the slot computation depends on.
    pub fn validate(&self) -> Result<()> {
        if self.appointment_time_slot <= 0 {
            return Err(SlotError::InvalidConfiguration(format!(
                "business '{}' has a non-positive appointment time slot ({} minutes)",
                self.name, self.appointment_time_slot
            )));
        }
        self.operating_hours.validate()?;
        for (i, service) in self.services.iter().enumerate() {
            service.validate()?;
            if self.services[..i].iter().any(|s| s.id == service.id) {
                return Err(SlotError::InvalidConfiguration(format!(
                    "service '{}' is defined more than once",
                    service.id
                )));
            }
        }
        Ok(())
    }

    pub fn service(&self, id: &str) -> Result<&Service> {
        self.services
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| NotFound::Service { id: id.to_string() }.into())
    }

    /// Resolve the slot request for booking `service_id` on `date`.
    ///
    /// Only appointments starting on `date` are carried into the request, the
    /// same one-day window storage is queried with.
    ///
    /// # Errors
    /// `SlotError::NotFound` if the service is unknown or the business is closed
    /// on that weekday.
    pub fn request_for(
        &self,
        service_id: &str,
        date: NaiveDate,
        appointments: &[ExistingAppointment],
    ) -> Result<SlotRequest> {
        let service = self.service(service_id)?;
        service.validate()?;
        let hours = self.operating_hours.for_date(date)?;
        let window = day_window(date);

        Ok(SlotRequest {
            operating_hours: hours.clone(),
            service_duration_minutes: service.span_minutes(),
            appointment_time_slot: self.appointment_time_slot,
            date,
            existing_appointments: appointments
                .iter()
                .filter(|a| a.starts_within(window))
                .copied()
                .collect(),
        })
    }
}
