//! Appointment records as exchanged with the surrounding application.
//!
//! The persistence and spreadsheet collaborators hand over loose rows
//! (`RawAppointmentRecord`, column names matching the `appointments`
//! table); the engine works on the typed `Appointment`. All defaulting and
//! skipping rules live in the conversion here, not at call sites.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::APPOINTMENT_MINUTES;
use crate::error::RecordError;

use super::enums::AppointmentStatus;
use super::slot::TimeSlot;

/// One row of the `appointments` table, untrusted free-form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAppointmentRecord {
    pub id: String,
    /// Agent name as typed by the operator. Free text, resolved through
    /// the agent directory before any comparison.
    pub agente: Option<String>,
    /// Appointment date, `YYYY-MM-DD`.
    pub data: Option<String>,
    /// Appointment start time, `HH:MM`.
    pub ora: Option<String>,
    pub azienda: Option<String>,
    pub referente: Option<String>,
    pub cliente: Option<String>,
    pub operatore: Option<String>,
    pub stato: Option<String>,
}

/// A validated appointment. Duration is implicit: every appointment
/// occupies [`APPOINTMENT_MINUTES`] from its start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub agent: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// The window this appointment occupies, before any buffer expansion.
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::from_start(self.start(), APPOINTMENT_MINUTES)
    }
}

impl TryFrom<&RawAppointmentRecord> for Appointment {
    type Error = RecordError;

    fn try_from(raw: &RawAppointmentRecord) -> Result<Self, Self::Error> {
        let data = raw.data.as_deref().unwrap_or("").trim();
        let date = NaiveDate::parse_from_str(data, "%Y-%m-%d").map_err(|_| {
            RecordError::InvalidDate { value: data.into() }
        })?;

        let ora = raw.ora.as_deref().unwrap_or("").trim();
        let time = NaiveTime::parse_from_str(ora, "%H:%M").map_err(|_| {
            RecordError::InvalidTime { value: ora.into() }
        })?;

        Ok(Appointment {
            id: raw.id.clone(),
            agent: raw.agente.clone().unwrap_or_default(),
            date,
            time,
            status: AppointmentStatus::from_raw(raw.stato.as_deref().unwrap_or("")),
        })
    }
}

/// Convert a batch of collaborator rows, skipping malformed ones.
///
/// A record with an unparseable date or time is dropped with a warning;
/// the rest of the batch is unaffected.
pub fn parse_records(records: &[RawAppointmentRecord]) -> Vec<Appointment> {
    records
        .iter()
        .filter_map(|raw| match Appointment::try_from(raw) {
            Ok(appointment) => Some(appointment),
            Err(e) => {
                tracing::warn!(id = %raw.id, error = %e, "Skipping malformed appointment record");
                None
            }
        })
        .collect()
}

const ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Mint an appointment id: "MH" + 10 uppercase base-36 characters, the
/// format the dashboard has always written.
pub fn generate_appointment_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..10)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("MH{suffix}")
}
