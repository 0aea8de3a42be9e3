//! Candidate slot generation on the working-day grid.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::config::SLOT_STRIDE_MINUTES;
use crate::models::TimeSlot;

/// Generate the candidate slots of one working day.
///
/// Slots start at `start_hour:00` and advance on the fixed hourly grid;
/// `slot_minutes` sets only the width. A slot survives while it ends at or
/// before `end_hour:00`; ending exactly on the closing hour is allowed.
/// Both ends must fall on `day` itself, so nothing straddles midnight.
///
/// The generator is day-agnostic: weekend (or holiday) policy belongs to
/// the caller. A degenerate range (`end_hour <= start_hour`) yields no
/// slots.
pub fn generate_day_slots(
    day: NaiveDate,
    start_hour: u32,
    end_hour: u32,
    slot_minutes: i64,
) -> Vec<TimeSlot> {
    let midnight = day.and_time(NaiveTime::MIN);
    let day_start = midnight + Duration::hours(i64::from(start_hour));
    let day_end = midnight + Duration::hours(i64::from(end_hour));

    let width = Duration::minutes(slot_minutes);
    let stride = Duration::minutes(SLOT_STRIDE_MINUTES);

    let mut slots = Vec::new();
    let mut cursor = day_start;
    while cursor + width <= day_end {
        let slot = TimeSlot::new(cursor, cursor + width);
        if slot.start.date() == day && slot.end.date() == day {
            slots.push(slot);
        }
        cursor += stride;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()
    }

    #[test]
    fn full_working_day_yields_nine_hourly_slots() {
        let slots = generate_day_slots(monday(), 9, 18, 60);
        assert_eq!(slots.len(), 9);
        assert_eq!(slots[0].start, monday().and_hms_opt(9, 0, 0).unwrap());
        // boundary: the 17:00 slot ends exactly at 18:00 and is included
        assert_eq!(slots[8].start, monday().and_hms_opt(17, 0, 0).unwrap());
        assert_eq!(slots[8].end, monday().and_hms_opt(18, 0, 0).unwrap());
    }

    #[test]
    fn slot_width_is_independent_of_stride() {
        let slots = generate_day_slots(monday(), 9, 12, 30);
        // starts stay hourly, width shrinks to 30 minutes
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[1].start, monday().and_hms_opt(10, 0, 0).unwrap());
        assert_eq!(slots[1].end, monday().and_hms_opt(10, 30, 0).unwrap());
    }

    #[test]
    fn degenerate_range_yields_nothing() {
        assert!(generate_day_slots(monday(), 18, 9, 60).is_empty());
        assert!(generate_day_slots(monday(), 9, 9, 60).is_empty());
    }

    #[test]
    fn slots_never_straddle_midnight() {
        let slots = generate_day_slots(monday(), 22, 24, 60);
        // the 23:00 slot would end at next-day 00:00 and is excluded
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start, monday().and_hms_opt(22, 0, 0).unwrap());
        assert_eq!(slots[0].end, monday().and_hms_opt(23, 0, 0).unwrap());
    }
}
