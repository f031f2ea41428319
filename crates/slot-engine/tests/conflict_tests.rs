//! Tests for the three overlap rules and conflict reporting.

use chrono::{NaiveDate, NaiveDateTime};
use slot_engine::booking::ExistingAppointment;
use slot_engine::{classify_overlap, find_conflicts, Overlap};

/// Helper to build an instant on 2026-03-16 from hour and minute.
fn at(hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 16)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

/// Helper to create an appointment from hour ranges on 2026-03-16.
fn appointment(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> ExistingAppointment {
    ExistingAppointment::new(at(start_hour, start_min), at(end_hour, end_min))
}

#[test]
fn exact_match_is_start_inside() {
    // Booking 10:00-11:00 vs appointment 10:00-11:00
    let a = appointment(10, 0, 11, 0);
    assert_eq!(
        classify_overlap(at(10, 0), at(11, 0), &a),
        Some(Overlap::StartInside)
    );
}

#[test]
fn start_during_appointment_is_start_inside() {
    // Booking 10:30-11:30 vs appointment 10:00-11:00
    let a = appointment(10, 0, 11, 0);
    assert_eq!(
        classify_overlap(at(10, 30), at(11, 30), &a),
        Some(Overlap::StartInside)
    );
}

#[test]
fn end_during_appointment_is_end_inside() {
    // Booking 09:30-10:30 vs appointment 10:00-11:00
    let a = appointment(10, 0, 11, 0);
    assert_eq!(
        classify_overlap(at(9, 30), at(10, 30), &a),
        Some(Overlap::EndInside)
    );
}

#[test]
fn end_on_appointment_end_is_end_inside() {
    // Booking 09:00-11:00 vs appointment 10:00-11:00, both end together
    let a = appointment(10, 0, 11, 0);
    assert_eq!(
        classify_overlap(at(9, 0), at(11, 0), &a),
        Some(Overlap::EndInside)
    );
}

#[test]
fn straddling_booking_envelops_appointment() {
    // Booking 09:00-12:00 vs appointment 10:00-11:00
    let a = appointment(10, 0, 11, 0);
    assert_eq!(
        classify_overlap(at(9, 0), at(12, 0), &a),
        Some(Overlap::Envelops)
    );
}

#[test]
fn back_to_back_before_is_not_a_conflict() {
    // Booking 09:00-10:00 ends exactly when the appointment starts
    let a = appointment(10, 0, 11, 0);
    assert_eq!(classify_overlap(at(9, 0), at(10, 0), &a), None);
}

#[test]
fn back_to_back_after_is_not_a_conflict() {
    // Booking 11:00-12:00 starts exactly when the appointment ends
    let a = appointment(10, 0, 11, 0);
    assert_eq!(classify_overlap(at(11, 0), at(12, 0), &a), None);
}

#[test]
fn find_conflicts_reports_overlap_minutes() {
    // Booking 09:30-10:30 overlaps 10:00-11:00 by 30 minutes
    let existing = vec![appointment(10, 0, 11, 0), appointment(14, 0, 15, 0)];

    let conflicts = find_conflicts(at(9, 30), 60, &existing);

    assert_eq!(conflicts.len(), 1, "should detect exactly one conflict");
    assert_eq!(conflicts[0].kind, Overlap::EndInside);
    assert_eq!(conflicts[0].overlap_minutes, 30);
    assert_eq!(conflicts[0].appointment, existing[0]);
}

#[test]
fn find_conflicts_lists_every_colliding_appointment() {
    // Booking 09:00-12:00 collides with two short appointments inside it
    let existing = vec![appointment(9, 30, 10, 0), appointment(11, 0, 11, 45)];

    let conflicts = find_conflicts(at(9, 0), 180, &existing);

    assert_eq!(conflicts.len(), 2);
    assert!(conflicts.iter().all(|c| c.kind == Overlap::Envelops));
    assert_eq!(conflicts[0].overlap_minutes, 30);
    assert_eq!(conflicts[1].overlap_minutes, 45);
}

#[test]
fn empty_appointment_list_no_conflicts() {
    let conflicts = find_conflicts(at(9, 0), 60, &[]);
    assert!(
        conflicts.is_empty(),
        "empty list should produce no conflicts"
    );
}
