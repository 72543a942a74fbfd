//! Test utilities and shared test helpers for Atrium.
//!
//! Fixtures here are shared by the unit and integration tests of every crate
//! in the workspace through the `testing` feature.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// English translation fixture shaped like the production bundle.
pub const EN_FIXTURE: &str = r#"{
    "nav": {
        "home": "Home",
        "blog": "Blog",
        "contact": "Contact"
    },
    "hero": {
        "greeting": "Hi :name",
        "welcome": "Welcome back, :name! You have :count new messages."
    },
    "blog": {
        "posts": "one post;:count posts",
        "minutes": ["one minute read", ":count minutes read"]
    },
    "theme": {
        "light": "Light",
        "dark": "Dark",
        "system": "System"
    }
}"#;

/// French translation fixture, intentionally missing `nav.contact`.
pub const FR_FIXTURE: &str = r#"{
    "nav": {
        "home": "Accueil",
        "blog": "Blog"
    },
    "hero": {
        "greeting": "Salut :name",
        "welcome": "Bon retour, :name ! Vous avez :count nouveaux messages."
    },
    "blog": {
        "posts": ":count article;:count articles",
        "minutes": [":count minute de lecture", ":count minutes de lecture"]
    },
    "theme": {
        "light": "Clair",
        "dark": "Sombre",
        "system": "Système"
    }
}"#;

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `en.json` and `fr.json` fixtures into a fresh temporary directory.
#[cfg(feature = "tempfile")]
pub fn create_translation_dir() -> tempfile::TempDir {
    let dir = create_temp_dir();
    std::fs::write(dir.path().join("en.json"), EN_FIXTURE).expect("Failed to write en.json");
    std::fs::write(dir.path().join("fr.json"), FR_FIXTURE).expect("Failed to write fr.json");
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_valid_json() {
        let en: serde_json::Value = serde_json::from_str(EN_FIXTURE).unwrap();
        let fr: serde_json::Value = serde_json::from_str(FR_FIXTURE).unwrap();
        assert!(en["nav"]["contact"].is_string());
        assert!(fr["nav"]["contact"].is_null());
    }

    #[test]
    fn test_init_test_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
    }
}
