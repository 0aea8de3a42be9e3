//! Agendario core — the scheduling engine of the appointment manager.
//!
//! Two jobs with real algorithmic content live here: computing free
//! appointment slots for a field agent inside a visible calendar range
//! (working hours, slot grid, booking buffers), and resolving free-text
//! agent-name variants into one canonical identity with fuzzy matching.
//! Persistence, spreadsheets, UI and mail stay with the surrounding
//! application; this crate only consumes and produces plain data.

pub mod agents; // canonical directory + fuzzy name resolution
pub mod availability; // slot grid, occupancy, by-day grouping
pub mod config;
pub mod error;
pub mod models;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a host that has no subscriber of its own.
/// Call once at startup; honors RUST_LOG.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Agendario core v{}", config::APP_VERSION);
}
