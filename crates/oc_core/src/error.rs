use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// Shot designation outside {1..6, leg_bye, bye, overthrow}.
    InvalidShotType(u8),
}

#[derive(Debug)]
pub enum CoreError {
    InvalidParameter(String),
    PlayerNotFound(String),
    UnsupportedMetric(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScoringError::InvalidShotType(value) => {
                write!(f, "Invalid shot type: {}", value)
            }
        }
    }
}

impl std::error::Error for ScoringError {}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoreError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            CoreError::PlayerNotFound(name) => write!(f, "Player not found: {}", name),
            CoreError::UnsupportedMetric(metric) => {
                write!(f, "Unsupported comparison metric: {}", metric)
            }
            CoreError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            CoreError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            CoreError::DeserializationError(err.to_string())
        } else {
            CoreError::SerializationError(err.to_string())
        }
    }
}

impl From<ScoringError> for CoreError {
    fn from(err: ScoringError) -> Self {
        CoreError::InvalidParameter(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
