//! Loading the business profile and appointment files the CLI works from.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use slot_engine::{BusinessProfile, ExistingAppointment};
use std::path::Path;
use tracing::debug;

/// Read and validate a TOML business profile.
pub fn load_profile(path: &Path) -> Result<BusinessProfile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read business profile: {}", path.display()))?;
    let profile: BusinessProfile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse business profile: {}", path.display()))?;
    profile
        .validate()
        .with_context(|| format!("Invalid business profile: {}", path.display()))?;

    debug!(
        business = %profile.name,
        services = profile.services.len(),
        weekdays = profile.operating_hours.entries().len(),
        "loaded business profile"
    );
    Ok(profile)
}

/// Read a JSON array of existing appointments, or none when no file is given.
pub fn load_appointments(path: Option<&Path>) -> Result<Vec<ExistingAppointment>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read appointments: {}", path.display()))?;
    let appointments: Vec<ExistingAppointment> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse appointments: {}", path.display()))?;

    debug!(count = appointments.len(), "loaded existing appointments");
    Ok(appointments)
}

/// Parse a requested start time with the engine's datetime rules.
pub fn parse_start(s: &str) -> Result<NaiveDateTime> {
    slot_engine::parse_datetime(s).with_context(|| format!("Invalid start time '{}'", s))
}
