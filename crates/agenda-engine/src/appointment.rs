//! The appointment value type checked by [`crate::validation`].
//!
//! Only `start` and `end` take part in conflict checks. The id, description and
//! patient reference are carried through untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};

/// A booked (or proposed) appointment occupying the half-open range `[start, end)`.
///
/// Serializes timestamps as RFC 3339. Deserializes them with
/// [`crate::timestamp::parse_datetime`], so naive UTC timestamps are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub start: DateTime<Utc>,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
    pub patient_id: u64,
}

impl Appointment {
    /// Build an appointment without checking that `start < end`.
    pub fn new(
        id: u64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        description: impl Into<String>,
        patient_id: u64,
    ) -> Self {
        Self {
            id,
            start,
            end,
            description: description.into(),
            patient_id,
        }
    }

    /// Build an appointment, rejecting empty or inverted ranges.
    ///
    /// # Errors
    /// Returns `AgendaError::InvalidInterval` when `end <= start`.
    pub fn try_new(
        id: u64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        description: impl Into<String>,
        patient_id: u64,
    ) -> Result<Self> {
        if end <= start {
            return Err(AgendaError::InvalidInterval { start, end });
        }
        Ok(Self::new(id, start, end, description, patient_id))
    }

    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Length of the appointment in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Two appointments overlap when `a.start < b.end && b.start < a.end`.
    ///
    /// Back-to-back appointments, where one ends exactly when the other starts,
    /// do not overlap.
    pub fn overlaps(&self, other: &Appointment) -> bool {
        self.start < other.end && other.start < self.end
    }
}
