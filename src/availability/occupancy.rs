//! Booking expansion and candidate filtering.

use crate::models::TimeSlot;

/// Expand booked slots into occupied intervals: the buffer is added on
/// both sides, so nothing can be scheduled closer than `buffer_minutes` to
/// an existing booking.
pub fn expand_bookings(booked: &[TimeSlot], buffer_minutes: i64) -> Vec<TimeSlot> {
    booked.iter().map(|slot| slot.expanded(buffer_minutes)).collect()
}

/// Keep the candidates that overlap no occupied interval.
///
/// Each candidate is checked independently against every booking; at a
/// handful of bookings per agent per day the quadratic scan is fine.
/// Stateless: same inputs, same output.
pub fn filter_available(
    candidates: &[TimeSlot],
    booked: &[TimeSlot],
    buffer_minutes: i64,
) -> Vec<TimeSlot> {
    let occupied = expand_bookings(booked, buffer_minutes);
    candidates
        .iter()
        .filter(|candidate| !occupied.iter().any(|interval| candidate.overlaps(interval)))
        .copied()
        .collect()
}
