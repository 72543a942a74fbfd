//! Integration tests for atrium-config crate.

use atrium_config::{Config, ConfigCache, ConfigError, ConfigLoader};
use proptest::prelude::*;
use std::io::Write;

#[test]
fn test_config_cache() {
    let config = Config::default();
    let cache = ConfigCache::new(config.clone());

    let cached_config = cache.get();
    assert_eq!(cached_config.i18n.default_locale, config.i18n.default_locale);

    let mut new_config = config;
    new_config.i18n.default_locale = "fr".to_string();
    cache.update(new_config).unwrap();

    assert_eq!(cache.get().i18n.default_locale, "fr");
}

#[test]
fn test_config_cache_rejects_invalid_update() {
    let cache = ConfigCache::default();

    let mut invalid = Config::default();
    invalid.i18n.supported_locales.clear();

    assert!(matches!(
        cache.update(invalid),
        Err(ConfigError::ValidationError(_))
    ));
    assert_eq!(cache.get().i18n.supported_locales, vec!["en", "fr"]);
}

#[test]
fn test_load_config_validates() {
    let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(file, "i18n:\n  default_locale: de\n  supported_locales: [en, fr]").unwrap();

    let result = ConfigLoader::load_config(file.path());
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_yaml_round_trip_of_defaults() {
    let yaml = serde_yaml::to_string(&Config::default()).unwrap();
    let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, Config::default());
}

proptest! {
    #[test]
    fn scroll_delay_bound_is_enforced(delay in 0u64..10_000) {
        let mut config = Config::default();
        config.navigation.scroll_delay_ms = delay;
        prop_assert_eq!(
            config.validate().is_ok(),
            delay <= atrium_config::MAX_SCROLL_DELAY_MS
        );
    }
}
