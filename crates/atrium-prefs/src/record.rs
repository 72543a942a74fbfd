//! The persisted preference record

use crate::appearance::Appearance;
use crate::error::{PreferenceError, PreferenceResult};
use atrium_i18n::{Locale, LocaleSet};
use serde::{Deserialize, Serialize};

/// Locale and appearance as persisted in durable storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// Selected locale
    pub locale: Locale,
    /// Selected appearance
    pub appearance: Appearance,
}

impl PreferenceRecord {
    /// Default record: the default locale with system appearance
    pub const fn defaults(locales: &LocaleSet) -> Self {
        Self {
            locale: locales.default_locale(),
            appearance: Appearance::System,
        }
    }

    /// Serialize for durable storage
    pub fn to_json(&self) -> PreferenceResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a stored record, rejecting locales outside `locales`
    pub fn from_json(raw: &str, locales: &LocaleSet) -> PreferenceResult<Self> {
        let record: Self =
            serde_json::from_str(raw).map_err(|e| PreferenceError::CorruptedRecord {
                reason: e.to_string(),
            })?;

        if !locales.contains(record.locale) {
            return Err(PreferenceError::CorruptedRecord {
                reason: format!("locale {} is not supported", record.locale),
            });
        }
        Ok(record)
    }
}
