//! Default values for every configuration section.

use crate::schema::*;
use atrium_common::LoggingConfig;

/// Default locale code.
pub const DEFAULT_LOCALE: &str = "en";

/// Default durable storage key for the preference record.
pub const DEFAULT_STORAGE_KEY: &str = "atrium.preferences";

/// Default prefixes excluded from locale routing.
pub const DEFAULT_EXCLUDED_PREFIXES: &[&str] = &["/_next", "/api", "/static", "/assets", "/favicon"];

/// One year, the lifetime of preference cookies.
pub const DEFAULT_COOKIE_MAX_AGE_DAYS: u32 = 365;

impl Default for Config {
    fn default() -> Self {
        Self {
            i18n: I18nSettings::default(),
            routing: RoutingSettings::default(),
            preferences: PreferenceSettings::default(),
            navigation: NavigationSettings::default(),
            server: ServerSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            supported_locales: vec!["en".to_string(), "fr".to_string()],
            translations_dir: "locales".into(),
        }
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            excluded_prefixes: DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(ToString::to_string)
                .collect(),
            honor_locale_cookie: true,
        }
    }
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            appearance_cookie: "appearance".to_string(),
            locale_cookie: "locale".to_string(),
            cookie_max_age_days: DEFAULT_COOKIE_MAX_AGE_DAYS,
            same_site: SameSite::Lax,
            scheme_attribute: "data-theme".to_string(),
        }
    }
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self { scroll_delay_ms: 0 }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}
