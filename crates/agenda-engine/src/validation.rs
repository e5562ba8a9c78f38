//! Decide whether a candidate appointment fits into an existing schedule.
//!
//! Adjacent appointments (where one ends exactly when another starts) are NOT
//! conflicts, so back-to-back bookings are allowed.

use chrono::Duration;
use serde::Serialize;

use crate::appointment::Appointment;

/// An existing appointment that collides with a candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict<'a> {
    pub appointment: &'a Appointment,
    pub overlap_minutes: i64,
}

/// Returns `true` when `candidate` overlaps none of the `existing` appointments.
///
/// An empty schedule always accepts the candidate. Stops at the first overlap.
/// Malformed appointments (`end <= start`) are not rejected; the comparison is
/// applied to them as-is.
pub fn can_add_appointment(candidate: &Appointment, existing: &[Appointment]) -> bool {
    !existing.iter().any(|booked| candidate.overlaps(booked))
}

/// Collect every existing appointment that overlaps `candidate`, in input order.
///
/// The overlap duration is `min(a.end, b.end) - max(a.start, b.start)`, rounded
/// up to whole minutes, so any overlap between well-formed appointments is
/// reported as at least one minute. Malformed inputs can produce an empty or
/// negative overlap; it is reported as 0.
///
/// The result is empty exactly when [`can_add_appointment`] returns `true`.
pub fn find_conflicting_appointments<'a>(
    candidate: &Appointment,
    existing: &'a [Appointment],
) -> Vec<Conflict<'a>> {
    existing
        .iter()
        .filter(|booked| candidate.overlaps(booked))
        .map(|booked| {
            let overlap_start = candidate.start.max(booked.start);
            let overlap_end = candidate.end.min(booked.end);
            Conflict {
                appointment: booked,
                overlap_minutes: ceil_minutes(overlap_end - overlap_start).max(0),
            }
        })
        .collect()
}

/// Whole minutes in `delta`, counting a partial minute as a full one.
fn ceil_minutes(delta: Duration) -> i64 {
    let minutes = delta.num_minutes();
    if delta > Duration::minutes(minutes) {
        minutes + 1
    } else {
        minutes
    }
}
