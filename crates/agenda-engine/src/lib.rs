//! # agenda-engine
//!
//! Appointment conflict validation for medical office schedules.
//!
//! Given a proposed appointment and the appointments already booked for a
//! doctor or room, decide whether the new one can be added. Appointments are
//! half-open ranges `[start, end)`: one that ends at 14:00 does not collide
//! with one that starts at 14:00.
//!
//! ```rust
//! use agenda_engine::{can_add_appointment, parse_datetime, Appointment};
//!
//! let booked = vec![Appointment::new(
//!     1,
//!     parse_datetime("2026-03-02T13:00:00Z").unwrap(),
//!     parse_datetime("2026-03-02T14:00:00Z").unwrap(),
//!     "checkup",
//!     10,
//! )];
//! let next = Appointment::new(
//!     2,
//!     parse_datetime("2026-03-02T14:00:00Z").unwrap(),
//!     parse_datetime("2026-03-02T15:00:00Z").unwrap(),
//!     "",
//!     11,
//! );
//! assert!(can_add_appointment(&next, &booked));
//! ```
//!
//! ## Modules
//!
//! - [`appointment`] — `Appointment` value type and the overlap rule
//! - [`validation`] — `can_add_appointment` and conflict reporting
//! - [`timestamp`] — RFC 3339 / naive `YYYY-MM-DDTHH:MM:SS` parsing into UTC
//! - [`error`] — Error types

pub mod appointment;
pub mod error;
pub mod timestamp;
pub mod validation;

pub use appointment::Appointment;
pub use error::AgendaError;
pub use timestamp::parse_datetime;
pub use validation::{can_add_appointment, find_conflicting_appointments, Conflict};
