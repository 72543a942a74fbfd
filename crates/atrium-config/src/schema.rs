//! Configuration schema definitions using serde.

use atrium_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for Atrium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale set and translation table location.
    pub i18n: I18nSettings,
    /// Request-time locale routing.
    pub routing: RoutingSettings,
    /// Client preference persistence.
    pub preferences: PreferenceSettings,
    /// Navigation loading indicator behaviour.
    pub navigation: NavigationSettings,
    /// HTTP edge server.
    pub server: ServerSettings,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Locale and translation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nSettings {
    /// Locale used whenever resolution fails.
    pub default_locale: String,
    /// Locale codes served by this deployment.
    pub supported_locales: Vec<String>,
    /// Directory holding one `<code>.json` translation file per locale.
    pub translations_dir: PathBuf,
}

/// Locale routing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingSettings {
    /// Path prefixes that are never rewritten (internal and static assets).
    pub excluded_prefixes: Vec<String>,
    /// Prefer the locale cookie over the default locale when redirecting.
    pub honor_locale_cookie: bool,
}

/// `SameSite` attribute for preference cookies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    /// Cookie only sent on same-site requests.
    Strict,
    /// Cookie also sent on top-level cross-site navigations.
    #[default]
    Lax,
    /// Cookie sent on every request (requires `Secure`).
    None,
}

impl SameSite {
    /// Attribute value as written in a `Set-Cookie` header.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

/// Preference persistence configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceSettings {
    /// Durable storage key holding the serialized preference record.
    pub storage_key: String,
    /// Cookie carrying the appearance preference.
    pub appearance_cookie: String,
    /// Cookie carrying the locale preference.
    pub locale_cookie: String,
    /// Cookie lifetime in days.
    pub cookie_max_age_days: u32,
    /// Cookie `SameSite` policy.
    pub same_site: SameSite,
    /// Document attribute reflecting the rendered colour scheme.
    pub scheme_attribute: String,
}

/// Navigation coordinator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Delay before scrolling to top after a route change, in milliseconds.
    pub scroll_delay_ms: u64,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Socket address to bind.
    pub bind_address: String,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), crate::ConfigError> {
        crate::ConfigValidator::validate(self)
    }
}
