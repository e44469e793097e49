use thiserror::Error;

#[derive(Debug, Error)]
pub enum DealEngineError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown credit tier: {0}")]
    UnknownCreditTier(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for DealEngineError {
    fn from(e: serde_json::Error) -> Self {
        DealEngineError::SerializationError(e.to_string())
    }
}
