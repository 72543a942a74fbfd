//! Error types for internationalization operations

use atrium_common::AtriumError;
use thiserror::Error;

/// Errors that can occur while building the locale set or loading translations.
///
/// Key resolution itself never produces an error.
#[derive(Error, Debug)]
pub enum I18nError {
    /// A locale code outside the compiled locale set
    #[error("Unsupported locale code: {0}")]
    UnknownLocale(String),

    /// The locale set has no members
    #[error("The supported locale set is empty")]
    EmptyLocaleSet,

    /// The default locale is not part of the supported set
    #[error("Default locale {0} is not in the supported set")]
    DefaultNotSupported(String),

    /// Failed to load a resource file
    #[error("Failed to load translation file {path}: {source}")]
    ResourceLoadError {
        /// File that could not be read
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Translation source is not a valid table
    #[error("Failed to parse translations for locale {locale}: {source}")]
    ParseError {
        /// Locale the source belongs to
        locale: String,
        /// Underlying JSON failure
        #[source]
        source: serde_json::Error,
    },

    /// A locale subtree must be a JSON object
    #[error("Translations for locale {0} must be an object at the top level")]
    NotABranch(String),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for AtriumError {
    fn from(err: I18nError) -> Self {
        let locale = match &err {
            I18nError::UnknownLocale(code)
            | I18nError::DefaultNotSupported(code)
            | I18nError::NotABranch(code) => Some(code.clone()),
            I18nError::ParseError { locale, .. } => Some(locale.clone()),
            _ => None,
        };
        AtriumError::localization_with_source("i18n setup failed", locale, err)
    }
}
