//! Server error types using thiserror.

use atrium_common::AtriumError;
use atrium_config::ConfigError;
use atrium_i18n::I18nError;

/// Errors raised while starting or running the server.
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Locale set or translation table could not be built.
    #[error("Localization error: {0}")]
    I18n(#[from] I18nError),

    /// Logging could not be initialized.
    #[error("Startup error: {0}")]
    Startup(#[from] AtriumError),

    /// The listening socket could not be bound.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        /// Address that was requested
        address: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// I/O error while serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the server.
pub type ServerResult<T> = Result<T, ServerError>;
