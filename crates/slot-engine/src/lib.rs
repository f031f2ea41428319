//! # slot-engine
//!
//! Bookable appointment slot computation for service businesses.
//!
//! Given a business's operating hours for a weekday, a service's duration and
//! break, a date, and the appointments already booked that day, the engine
//! computes which start times can still be booked. A start is bookable when
//! the full service span ends by closing time and does not overlap any
//! existing appointment. Back-to-back bookings are allowed.
//!
//! ## Modules
//!
//! - [`clock`] — `"HHMM"` parsing, combining times with dates, day windows
//! - [`hours`] — Per-weekday operating hours
//! - [`booking`] — Services and existing appointments
//! - [`candidates`] — Stepped candidate start times across a day
//! - [`conflict`] — Overlap rules between a proposed booking and existing ones
//! - [`filter`] — Closing-time and overlap filtering of candidates
//! - [`slots`] — End-to-end computation and booking-time verification
//! - [`profile`] — Business configuration that resolves slot requests
//! - [`error`] — Error types

pub mod booking;
pub mod candidates;
pub mod clock;
pub mod conflict;
pub mod error;
pub mod filter;
pub mod hours;
pub mod profile;
pub mod slots;

pub use booking::{ExistingAppointment, Service};
pub use candidates::{generate_candidate_slots, CandidateSlots};
pub use clock::{add_minutes, combine_time_of_day, day_window, parse_datetime, parse_hhmm};
pub use conflict::{classify_overlap, find_conflicts, Conflict, Overlap};
pub use error::{NotFound, SlotError};
pub use filter::{filter_bookable_slots, rejection_for, Rejection};
pub use hours::{OperatingHours, WeeklyHours};
pub use profile::BusinessProfile;
pub use slots::{compute_available_slots, verify_booking, BookingVerdict, SlotRequest, SlotResponse};
