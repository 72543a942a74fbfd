//! Error types for preference synchronization

use atrium_common::AtriumError;
use thiserror::Error;

/// Errors raised by the preference synchronizer
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// The requested locale is not served by this deployment
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// The persisted record could not be interpreted
    #[error("Corrupted preference record: {reason}")]
    CorruptedRecord {
        /// Why the record was rejected
        reason: String,
    },

    /// The record could not be serialized
    #[error("Failed to serialize preference record: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for preference operations
pub type PreferenceResult<T> = Result<T, PreferenceError>;

impl From<PreferenceError> for AtriumError {
    fn from(err: PreferenceError) -> Self {
        match err {
            PreferenceError::UnsupportedLocale(code) => {
                AtriumError::validation_field(format!("unsupported locale {code}"), "locale")
            }
            PreferenceError::Serialization(source) => AtriumError::Serialization(source),
            PreferenceError::CorruptedRecord { reason } => {
                AtriumError::preference(format!("corrupted preference record: {reason}"))
            }
        }
    }
}
