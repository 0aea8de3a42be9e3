//! Scheduling policy configuration.
//!
//! The defaults mirror the production booking policy: 60-minute
//! appointments on an hourly grid between 09:00 and 18:00, with a
//! 60-minute buffer before and after every existing booking.

use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "Agendario";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Implicit duration of a stored appointment (minutes). Records carry only
/// a start date/time; the end is always derived.
pub const APPOINTMENT_MINUTES: i64 = 60;

/// Stride of the candidate grid (minutes). Fixed: slot width may vary,
/// candidate starts stay on the hourly grid.
pub const SLOT_STRIDE_MINUTES: i64 = 60;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "agendario=info".to_string()
}

/// Availability policy for a single agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Width of a bookable slot in minutes.
    pub slot_minutes: i64,
    /// Minimum distance from an existing booking, applied on both sides.
    pub buffer_minutes: i64,
    /// First hour of the working day; the first candidate slot starts here.
    pub work_start_hour: u32,
    /// End of the working day; a slot may end exactly on this hour.
    pub work_end_hour: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            slot_minutes: 60,
            buffer_minutes: 60,
            work_start_hour: 9,
            work_end_hour: 18,
        }
    }
}
