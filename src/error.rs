use thiserror::Error;

/// Errors raised while converting collaborator-supplied records into typed
/// values. Batch ingestion never propagates these; it logs and skips the
/// affected record (see `models::parse_records`).
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Invalid date: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("Invalid time: {value:?} (expected HH:MM)")]
    InvalidTime { value: String },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
