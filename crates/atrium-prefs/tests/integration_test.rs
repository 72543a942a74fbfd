//! Integration tests for atrium-prefs

use atrium_common::test_utils::init_test_logging;
use atrium_config::PreferenceSettings;
use atrium_i18n::{Locale, LocaleSet};
use atrium_prefs::{
    Appearance, ColorScheme, CookieJar, DocumentState, DurableStorage, MemorySurfaces,
    PreferenceRecord, PreferenceSynchronizer, LANG_ATTRIBUTE,
};
use proptest::prelude::*;

const KEY: &str = "atrium.preferences";

fn synchronizer(surfaces: &MemorySurfaces) -> PreferenceSynchronizer {
    init_test_logging();
    PreferenceSynchronizer::init(
        surfaces.surfaces(),
        LocaleSet::default(),
        PreferenceSettings::default(),
    )
    .expect("synchronizer initializes")
}

/// Every surface reflects the synchronizer's current record
fn assert_surfaces_agree(sync: &PreferenceSynchronizer, surfaces: &MemorySurfaces) {
    let record = sync.current();
    let stored = surfaces.storage.get(KEY).expect("record persisted");
    assert_eq!(
        PreferenceRecord::from_json(&stored, sync.locales()).unwrap(),
        record
    );
    assert_eq!(
        surfaces.cookies.get("appearance").as_deref(),
        Some(record.appearance.as_str())
    );
    assert_eq!(
        surfaces.cookies.get("locale").as_deref(),
        Some(record.locale.code())
    );
    assert_eq!(
        surfaces.document.attribute(LANG_ATTRIBUTE).as_deref(),
        Some(record.locale.code())
    );
    assert_eq!(
        surfaces.document.attribute("data-theme").as_deref(),
        Some(sync.effective_scheme().as_str())
    );
}

#[test]
fn test_reload_restores_persisted_preferences() {
    let surfaces = MemorySurfaces::new(ColorScheme::Light);
    {
        let mut sync = synchronizer(&surfaces);
        sync.set_locale("fr").unwrap();
        sync.set_appearance(Appearance::Dark).unwrap();
    }

    let reloaded = synchronizer(&surfaces);
    assert_eq!(
        reloaded.current(),
        PreferenceRecord {
            locale: Locale::French,
            appearance: Appearance::Dark,
        }
    );
    assert_surfaces_agree(&reloaded, &surfaces);
}

#[test]
fn test_system_appearance_follows_platform_without_rewriting_storage() {
    let surfaces = MemorySurfaces::new(ColorScheme::Light);
    let sync = synchronizer(&surfaces);
    let stored = surfaces.storage.get(KEY);

    surfaces.color_scheme.set(ColorScheme::Dark);

    assert_eq!(sync.effective_scheme(), ColorScheme::Dark);
    assert_eq!(surfaces.document.attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(surfaces.storage.get(KEY), stored);
    assert_eq!(sync.current().appearance, Appearance::System);
}

#[test]
fn test_returning_to_system_resubscribes() {
    let surfaces = MemorySurfaces::new(ColorScheme::Light);
    let mut sync = synchronizer(&surfaces);

    sync.set_appearance(Appearance::Light).unwrap();
    surfaces.color_scheme.set(ColorScheme::Dark);
    assert_eq!(surfaces.document.attribute("data-theme").as_deref(), Some("light"));

    sync.set_appearance(Appearance::System).unwrap();
    assert_eq!(surfaces.document.attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(surfaces.color_scheme.listener_count(), 1);

    sync.set_appearance(Appearance::System).unwrap();
    assert_eq!(surfaces.color_scheme.listener_count(), 1);
}

#[test]
fn test_record_with_unsupported_locale_is_discarded() {
    let surfaces = MemorySurfaces::new(ColorScheme::Light);
    surfaces
        .storage
        .set(KEY, r#"{"locale":"fr","appearance":"dark"}"#);

    let english_only = LocaleSet::new(vec![Locale::English], Locale::English).unwrap();
    let sync = PreferenceSynchronizer::init(
        surfaces.surfaces(),
        english_only,
        PreferenceSettings::default(),
    )
    .unwrap();

    assert_eq!(sync.current().locale, Locale::English);
    assert_eq!(sync.current().appearance, Appearance::System);
    assert_surfaces_agree(&sync, &surfaces);
}

#[test]
fn test_reset_clears_persisted_state() {
    let surfaces = MemorySurfaces::new(ColorScheme::Dark);
    let mut sync = synchronizer(&surfaces);
    sync.set_locale("fr").unwrap();
    sync.set_appearance(Appearance::Light).unwrap();

    sync.reset();

    assert!(surfaces.storage.is_empty());
    assert_eq!(surfaces.cookies.get("locale"), None);
    for name in ["appearance", "locale"] {
        let header = surfaces.cookies.set_cookie_header(name).unwrap();
        assert!(header.starts_with(&format!("{name}=; Path=/; Max-Age=0;")));
    }
    assert_eq!(sync.current().locale, Locale::English);
    assert_eq!(surfaces.document.attribute(LANG_ATTRIBUTE).as_deref(), Some("en"));
    assert_eq!(surfaces.document.attribute("data-theme").as_deref(), Some("dark"));
    assert!(sync.follows_system());
}

#[test]
fn test_cookies_are_long_lived_and_lax() {
    let surfaces = MemorySurfaces::new(ColorScheme::Light);
    let mut sync = synchronizer(&surfaces);
    sync.set_appearance(Appearance::Dark).unwrap();

    let header = surfaces.cookies.set_cookie_header("appearance").unwrap();
    assert!(header.starts_with("appearance=dark; Path=/; Max-Age=31536000;"));
    assert!(header.ends_with("SameSite=Lax"));
}

fn operation() -> impl Strategy<Value = (bool, usize)> {
    (any::<bool>(), 0usize..4)
}

proptest! {
    #[test]
    fn prop_surfaces_agree_after_every_mutator(ops in proptest::collection::vec(operation(), 1..12)) {
        let surfaces = MemorySurfaces::new(ColorScheme::Dark);
        let mut sync = synchronizer(&surfaces);
        let codes = ["en", "fr", "de", "EN"];

        for (is_locale, index) in ops {
            if is_locale {
                let _ = sync.set_locale(codes[index]);
            } else {
                sync.set_appearance(Appearance::all()[index % 3]).unwrap();
            }
            assert_surfaces_agree(&sync, &surfaces);
        }
    }
}
