//! WASM bindings for slot-engine.
//!
//! Exposes available-slot computation, booking verification and conflict
//! detection to JavaScript via `wasm-bindgen`. All complex types are passed as
//! JSON strings.
//!
//! The JSON-level functions in [`json`] do the work and report errors as plain
//! strings; the `#[wasm_bindgen]` exports only wrap them in `JsValue`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

pub mod json {
    use chrono::NaiveDateTime;
    use serde::Serialize;
    use slot_engine::{parse_datetime, ExistingAppointment, Overlap, SlotRequest, SlotResponse};

    // -----------------------------------------------------------------------
    // Serde-friendly DTOs for crossing the WASM boundary as JSON
    // -----------------------------------------------------------------------

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct ConflictDto {
        appointment_time: NaiveDateTime,
        appointment_end: NaiveDateTime,
        kind: Overlap,
        overlap_minutes: i64,
    }

    fn parse_request(json: &str) -> Result<SlotRequest, String> {
        SlotRequest::from_json(json).map_err(|e| format!("Invalid request: {}", e))
    }

    fn parse_start(start: &str) -> Result<NaiveDateTime, String> {
        parse_datetime(start).map_err(|e| e.to_string())
    }

    fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
        serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
    }

    /// Request JSON in, `{"times": [...]}` JSON out.
    pub fn compute_available_slots(request_json: &str) -> Result<String, String> {
        let request = parse_request(request_json)?;
        let times = slot_engine::compute_available_slots(&request).map_err(|e| e.to_string())?;
        to_json(&SlotResponse::from(times))
    }

    /// Request JSON and a start time in, verdict JSON out.
    pub fn verify_booking(request_json: &str, start: &str) -> Result<String, String> {
        let request = parse_request(request_json)?;
        let start = parse_start(start)?;
        let verdict = slot_engine::verify_booking(&request, start).map_err(|e| e.to_string())?;
        to_json(&verdict)
    }

    /// Every appointment a booking of `span_minutes` at `start` would collide with.
    pub fn find_conflicts(
        start: &str,
        span_minutes: u32,
        appointments_json: &str,
    ) -> Result<String, String> {
        let start = parse_start(start)?;
        let appointments: Vec<ExistingAppointment> = serde_json::from_str(appointments_json)
            .map_err(|e| format!("Invalid appointments JSON: {}", e))?;

        let conflicts = slot_engine::find_conflicts(start, i64::from(span_minutes), &appointments);
        let dtos: Vec<ConflictDto> = conflicts
            .into_iter()
            .map(|c| ConflictDto {
                appointment_time: c.appointment.appointment_time,
                appointment_end: c.appointment.appointment_end,
                kind: c.kind,
                overlap_minutes: c.overlap_minutes,
            })
            .collect();
        to_json(&dtos)
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute bookable start times for one business day.
///
/// `request_json` is a slot request object (`operatingHours`,
/// `serviceDurationMinutes`, `appointmentTimeSlot`, `date`,
/// `existingAppointments`). Returns `{"times": [...]}` as a JSON string.
#[wasm_bindgen(js_name = "computeAvailableSlots")]
pub fn compute_available_slots(request_json: &str) -> Result<String, JsValue> {
    json::compute_available_slots(request_json).map_err(|e| JsValue::from_str(&e))
}

/// Re-check a single start time against the request's appointments.
///
/// Returns a verdict object: `{"verdict": "bookable", "end": ...}`,
/// `{"verdict": "offGrid"}` or `{"verdict": "rejected", "rejection": {...}}`.
#[wasm_bindgen(js_name = "verifyBooking")]
pub fn verify_booking(request_json: &str, start: &str) -> Result<String, JsValue> {
    json::verify_booking(request_json, start).map_err(|e| JsValue::from_str(&e))
}

/// List the existing appointments a proposed booking would collide with.
#[wasm_bindgen(js_name = "findConflicts")]
pub fn find_conflicts(
    start: &str,
    span_minutes: u32,
    appointments_json: &str,
) -> Result<String, JsValue> {
    json::find_conflicts(start, span_minutes, appointments_json).map_err(|e| JsValue::from_str(&e))
}
