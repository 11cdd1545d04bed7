//! Error handling

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Sensor snapshot rejected before scoring.
    #[error("invalid sensor reading `{field}`: {reason}")]
    InvalidSensorReading { field: &'static str, reason: String },

    /// Engine configuration is inconsistent.
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    /// Feature vectors of different length.
    #[error("feature length mismatch: expected {expected}, got {actual}")]
    FeatureMismatch { expected: usize, actual: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    pub(crate) fn invalid_reading(field: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidSensorReading {
            field,
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller's snapshot (not by config or I/O).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EngineError::InvalidSensorReading { .. })
    }
}
