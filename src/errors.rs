use thiserror::Error;
use uuid::Uuid;

/// Error type for the edges of the schedules pipeline: snapshot and config
/// persistence, recurrence validation, and controller actions.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid recurrence: {0}")]
    InvalidRecurrence(String),
    #[error("Schedule not found: {0}")]
    UnknownSchedule(Uuid),
    #[error("Configuration error: {0}")]
    Config(String),
}
