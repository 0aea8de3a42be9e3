//! Engine data model: loose collaborator rows, typed appointments, time
//! slots, and the ingestion rules between them.

pub mod appointment;
pub mod enums;
pub mod slot;

pub use appointment::{generate_appointment_id, parse_records, Appointment, RawAppointmentRecord};
pub use enums::AppointmentStatus;
pub use slot::TimeSlot;
