//! Semantic validation of a parsed configuration.

use crate::loader::ConfigError;
use crate::schema::Config;
use std::collections::HashSet;
use std::net::SocketAddr;

/// Upper bound for the post-navigation scroll delay.
pub const MAX_SCROLL_DELAY_MS: u64 = 2_000;

/// Longest cookie lifetime browsers honour.
pub const MAX_COOKIE_MAX_AGE_DAYS: u32 = 400;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting every problem found at once.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let mut issues = Vec::new();

        Self::check_locales(config, &mut issues);
        Self::check_routing(config, &mut issues);
        Self::check_preferences(config, &mut issues);

        if config.navigation.scroll_delay_ms > MAX_SCROLL_DELAY_MS {
            issues.push(format!(
                "navigation.scroll_delay_ms must be at most {MAX_SCROLL_DELAY_MS}"
            ));
        }

        if config.server.bind_address.parse::<SocketAddr>().is_err() {
            issues.push(format!(
                "server.bind_address '{}' is not a socket address",
                config.server.bind_address
            ));
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(issues))
        }
    }

    fn check_locales(config: &Config, issues: &mut Vec<String>) {
        let i18n = &config.i18n;
        if i18n.supported_locales.is_empty() {
            issues.push("i18n.supported_locales must not be empty".to_string());
        }

        let mut seen = HashSet::new();
        for code in &i18n.supported_locales {
            if !is_locale_code(code) {
                issues.push(format!("i18n.supported_locales: '{code}' is not a locale code"));
            }
            if !seen.insert(code.as_str()) {
                issues.push(format!("i18n.supported_locales: '{code}' is listed twice"));
            }
        }

        if !i18n.supported_locales.contains(&i18n.default_locale) {
            issues.push(format!(
                "i18n.default_locale '{}' is not among the supported locales",
                i18n.default_locale
            ));
        }
    }

    fn check_routing(config: &Config, issues: &mut Vec<String>) {
        for prefix in &config.routing.excluded_prefixes {
            if !prefix.starts_with('/') || prefix.len() < 2 {
                issues.push(format!(
                    "routing.excluded_prefixes: '{prefix}' must start with '/' and name a segment"
                ));
            }
        }
    }

    fn check_preferences(config: &Config, issues: &mut Vec<String>) {
        let prefs = &config.preferences;
        if prefs.storage_key.trim().is_empty() {
            issues.push("preferences.storage_key must not be empty".to_string());
        }
        for (field, name) in [
            ("preferences.appearance_cookie", &prefs.appearance_cookie),
            ("preferences.locale_cookie", &prefs.locale_cookie),
        ] {
            if !is_cookie_name(name) {
                issues.push(format!("{field}: '{name}' is not a valid cookie name"));
            }
        }
        if prefs.appearance_cookie == prefs.locale_cookie {
            issues.push("preferences cookies must have distinct names".to_string());
        }
        if prefs.cookie_max_age_days == 0 {
            issues.push("preferences.cookie_max_age_days must be positive".to_string());
        } else if prefs.cookie_max_age_days > MAX_COOKIE_MAX_AGE_DAYS {
            issues.push(format!(
                "preferences.cookie_max_age_days must be at most {MAX_COOKIE_MAX_AGE_DAYS}"
            ));
        }
        if prefs.scheme_attribute.trim().is_empty() {
            issues.push("preferences.scheme_attribute must not be empty".to_string());
        }
    }
}

/// Two or three lowercase ASCII letters.
fn is_locale_code(code: &str) -> bool {
    (2..=3).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_lowercase())
}

/// RFC 6265 token characters.
fn is_cookie_name(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_graphic()
                && !matches!(
                    b,
                    b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'"'
                        | b'/' | b'[' | b']' | b'?' | b'=' | b'{' | b'}'
                )
        })
}
