//! Error types and utilities for Atrium

use thiserror::Error;

/// Result type alias for Atrium operations
pub type Result<T> = std::result::Result<T, AtriumError>;

/// Main error type for Atrium operations
#[derive(Error, Debug)]
pub enum AtriumError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internationalization and localization errors
    #[error("Localization error: {message}")]
    Localization {
        /// Human readable description
        message: String,
        /// Locale code involved, if known
        locale: Option<String>,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Preference persistence errors
    #[error("Preference error: {message}")]
    Preference {
        /// Human readable description
        message: String,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
        /// Offending field, if known
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AtriumError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error
    pub fn localization(msg: impl Into<String>, locale: Option<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale,
            source: None,
        }
    }

    /// Create a new localization error with source
    pub fn localization_with_source(
        msg: impl Into<String>,
        locale: Option<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Localization {
            message: msg.into(),
            locale,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new preference error
    pub fn preference(msg: impl Into<String>) -> Self {
        Self::Preference {
            message: msg.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error for a specific field
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
            Self::Localization { .. } => "localization",
            Self::Preference { .. } => "preference",
            Self::Validation { .. } => "validation",
            Self::Generic { .. } => "generic",
        }
    }

    /// Whether the process can keep serving after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config { .. } | Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_categories() {
        assert_eq!(AtriumError::config("bad").category(), "config");
        assert_eq!(AtriumError::preference("bad").category(), "preference");
        assert_eq!(
            AtriumError::validation_field("bad", "locale").category(),
            "validation"
        );
    }

    #[test]
    fn test_source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AtriumError::localization_with_source("table missing", Some("fr".into()), io);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "Localization error: table missing");
    }

    #[test]
    fn test_recoverability() {
        assert!(!AtriumError::config("x").is_recoverable());
        assert!(AtriumError::localization("x", None).is_recoverable());
    }
}
