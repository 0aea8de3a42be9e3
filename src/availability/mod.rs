//! Availability — free appointment slots for an agent within a visible
//! calendar range.
//!
//! Candidate slots come off the working-day grid, existing bookings are
//! widened by the buffer and subtracted, and the survivors are grouped by
//! day. Everything here is a pure function of its inputs, recomputed per
//! call; the host supplies a consistent snapshot of the records.

mod occupancy;
mod slots;

pub use occupancy::{expand_bookings, filter_available};
pub use slots::generate_day_slots;

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::agents::{canonicalize, directory_from_records, normalized_key, DEFAULT_MAX_DISTANCE};
use crate::config::ScheduleConfig;
use crate::models::{parse_records, Appointment, RawAppointmentRecord, TimeSlot};

/// Visible calendar range, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Booked windows of one agent, selected by fuzzy identity.
///
/// Each appointment's agent is canonicalized against the directory (with
/// the requested name joining the known set, in case it is not yet listed)
/// and kept when it lands on the same canonical identity as `agent`. An
/// empty or blank `agent` selects nothing.
pub fn bookings_for_agent(
    appointments: &[Appointment],
    agent: &str,
    directory: &[String],
) -> Vec<TimeSlot> {
    let target_key = normalized_key(agent);
    if target_key.is_empty() {
        return Vec::new();
    }

    let mut known = Vec::with_capacity(directory.len() + 1);
    known.push(agent.to_string());
    known.extend_from_slice(directory);

    appointments
        .iter()
        .filter(|appointment| {
            let canon = canonicalize(&appointment.agent, &known, DEFAULT_MAX_DISTANCE);
            normalized_key(&canon) == target_key
        })
        .map(Appointment::slot)
        .collect()
}

/// Free slots per day across the range.
///
/// Saturdays and Sundays are skipped; every other day contributes its grid
/// candidates minus everything within a buffer of a booking. Days left
/// with no free slot are omitted from the map entirely.
pub fn available_slots_by_day(
    range: DateRange,
    booked: &[TimeSlot],
    config: &ScheduleConfig,
) -> BTreeMap<NaiveDate, Vec<TimeSlot>> {
    let mut by_day = BTreeMap::new();
    for day in range.start.iter_days().take_while(|d| *d <= range.end) {
        if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }
        let candidates = generate_day_slots(
            day,
            config.work_start_hour,
            config.work_end_hour,
            config.slot_minutes,
        );
        let free = filter_available(&candidates, booked, config.buffer_minutes);
        if !free.is_empty() {
            by_day.insert(day, free);
        }
    }
    tracing::debug!(
        days = by_day.len(),
        bookings = booked.len(),
        "Computed availability"
    );
    by_day
}

/// End-to-end availability for a free-text agent, straight from
/// collaborator rows: parse (malformed rows are skipped), build the
/// directory, select the agent's bookings, compute the free grid.
pub fn agent_availability(
    records: &[RawAppointmentRecord],
    agent: &str,
    range: DateRange,
    config: &ScheduleConfig,
) -> BTreeMap<NaiveDate, Vec<TimeSlot>> {
    let appointments = parse_records(records);
    let directory = directory_from_records(records);
    let booked = bookings_for_agent(&appointments, agent, &directory);
    available_slots_by_day(range, &booked, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;
    use chrono::NaiveTime;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    fn appointment(id: &str, agent: &str, day: u32, hour: u32) -> Appointment {
        Appointment {
            id: id.to_string(),
            agent: agent.to_string(),
            date: date(day),
            time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            status: AppointmentStatus::Programmato,
        }
    }

    fn record(id: &str, agent: &str, day: u32, ora: &str) -> RawAppointmentRecord {
        RawAppointmentRecord {
            id: id.to_string(),
            agente: Some(agent.to_string()),
            data: Some(format!("2024-05-{day:02}")),
            ora: Some(ora.to_string()),
            ..Default::default()
        }
    }

    // 2024-05-06 is a Monday
    fn week() -> DateRange {
        DateRange {
            start: date(6),
            end: date(12),
        }
    }

    #[test]
    fn empty_calendar_offers_every_weekday_slot() {
        let by_day = available_slots_by_day(week(), &[], &ScheduleConfig::default());
        // Mon-Fri only, 9 hourly slots each
        assert_eq!(by_day.len(), 5);
        assert!(!by_day.contains_key(&date(11)));
        assert!(!by_day.contains_key(&date(12)));
        for slots in by_day.values() {
            assert_eq!(slots.len(), 9);
        }
    }

    #[test]
    fn booking_with_buffer_carves_out_neighbors() {
        let booked = vec![TimeSlot::from_start(
            date(6).and_hms_opt(12, 0, 0).unwrap(),
            60,
        )];
        let by_day = available_slots_by_day(week(), &booked, &ScheduleConfig::default());
        let monday = &by_day[&date(6)];
        // 11:00, 12:00 and 13:00 starts fall inside 11:00-14:00 occupied
        assert_eq!(monday.len(), 6);
        assert!(monday
            .iter()
            .all(|slot| slot.end.time() <= NaiveTime::from_hms_opt(11, 0, 0).unwrap()
                || slot.start.time() >= NaiveTime::from_hms_opt(14, 0, 0).unwrap()));
        // other days untouched
        assert_eq!(by_day[&date(7)].len(), 9);
    }

    #[test]
    fn fully_swallowed_day_is_omitted() {
        let booked = vec![TimeSlot::from_start(
            date(6).and_hms_opt(13, 0, 0).unwrap(),
            60,
        )];
        let config = ScheduleConfig {
            buffer_minutes: 240, // occupies 09:00-18:00
            ..Default::default()
        };
        let by_day = available_slots_by_day(week(), &booked, &config);
        assert!(!by_day.contains_key(&date(6)));
        assert_eq!(by_day.len(), 4);
    }

    #[test]
    fn bookings_follow_fuzzy_agent_identity() {
        let appointments = vec![
            appointment("MH0000000001", "Mario Rossi", 6, 10),
            appointment("MH0000000002", "mario  rosi", 7, 11), // typo, distance 1
            appointment("MH0000000003", "Giulia Bianchi", 8, 9),
        ];
        let directory = vec!["Giulia Bianchi".to_string(), "Mario Rossi".to_string()];
        let booked = bookings_for_agent(&appointments, "mario rossi", &directory);
        assert_eq!(booked.len(), 2);
        assert_eq!(booked[0].start, date(6).and_hms_opt(10, 0, 0).unwrap());
        assert_eq!(booked[1].start, date(7).and_hms_opt(11, 0, 0).unwrap());
    }

    #[test]
    fn exact_directory_variant_stays_its_own_agent() {
        // when the typo itself is listed in the directory, exact match wins
        // and the row is not merged into the requested agent
        let appointments = vec![appointment("MH0000000001", "Mario Rosi", 6, 10)];
        let directory = vec!["Mario Rosi".to_string(), "Mario Rossi".to_string()];
        let booked = bookings_for_agent(&appointments, "Mario Rossi", &directory);
        assert!(booked.is_empty());
    }

    #[test]
    fn blank_agent_selects_nothing() {
        let appointments = vec![appointment("MH0000000001", "Mario Rossi", 6, 10)];
        assert!(bookings_for_agent(&appointments, "  ", &[]).is_empty());
    }

    #[test]
    fn end_to_end_availability_from_raw_records() {
        let records = vec![
            record("MH0000000001", "mario rossi", 6, "12:00"),
            record("MH0000000002", "MARIO ROSSI", 7, "9:00"),
            record("MH0000000003", "Giulia Bianchi", 6, "15:00"),
            record("MH0000000004", "mario rossi", 6, "not-a-time"), // skipped
        ];
        let by_day = agent_availability(
            &records,
            "Mario Rossi",
            week(),
            &ScheduleConfig::default(),
        );
        // Monday: 12:00 booking blocks 11:00-14:00 starts; Giulia's 15:00
        // booking belongs to another agent and blocks nothing
        assert_eq!(by_day[&date(6)].len(), 6);
        // Tuesday: 09:00 booking blocks 09:00 and 10:00 starts (08:00-11:00)
        assert_eq!(by_day[&date(7)].len(), 7);
        assert_eq!(by_day[&date(8)].len(), 9);
    }

    #[test]
    fn availability_serializes_with_iso_date_keys() {
        let by_day = available_slots_by_day(
            DateRange {
                start: date(6),
                end: date(6),
            },
            &[],
            &ScheduleConfig::default(),
        );
        let json = serde_json::to_value(&by_day).unwrap();
        let monday = &json["2024-05-06"];
        assert_eq!(monday.as_array().unwrap().len(), 9);
        assert_eq!(monday[0]["start"], "2024-05-06T09:00:00");
        assert_eq!(monday[0]["end"], "2024-05-06T10:00:00");
    }
}
