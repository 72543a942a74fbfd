//! Preference synchronizer
//!
//! Owns the in-memory preference record and mirrors every change to durable
//! storage, the cookie jar and the live document before a mutator returns.
//! While the appearance is `system` it also follows platform colour-scheme
//! changes through a [`Subscription`] held only for that duration.

use crate::appearance::{Appearance, ColorScheme};
use crate::error::{PreferenceError, PreferenceResult};
use crate::record::PreferenceRecord;
use crate::surfaces::{CookieOptions, DocumentState, PreferenceSurfaces, Subscription};
use atrium_config::PreferenceSettings;
use atrium_i18n::LocaleSet;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Document attribute carrying the active locale.
pub const LANG_ATTRIBUTE: &str = "lang";

/// Single owner of the user's locale and appearance preferences
pub struct PreferenceSynchronizer {
    record: Arc<Mutex<PreferenceRecord>>,
    surfaces: PreferenceSurfaces,
    settings: PreferenceSettings,
    cookie_options: CookieOptions,
    locales: LocaleSet,
    system_subscription: Option<Subscription>,
}

impl PreferenceSynchronizer {
    /// Load the persisted record and apply it to every surface
    ///
    /// A missing record is created with defaults. A record that cannot be
    /// parsed or names an unsupported locale is removed and replaced.
    pub fn init(
        surfaces: PreferenceSurfaces,
        locales: LocaleSet,
        settings: PreferenceSettings,
    ) -> PreferenceResult<Self> {
        let record = match surfaces.storage.get(&settings.storage_key) {
            None => {
                debug!("No stored preferences, using defaults");
                PreferenceRecord::defaults(&locales)
            }
            Some(raw) => PreferenceRecord::from_json(&raw, &locales).unwrap_or_else(|e| {
                warn!("Discarding stored preferences: {}", e);
                surfaces.storage.remove(&settings.storage_key);
                PreferenceRecord::defaults(&locales)
            }),
        };

        let mut synchronizer = Self {
            record: Arc::new(Mutex::new(record)),
            cookie_options: CookieOptions::from_settings(&settings),
            surfaces,
            settings,
            locales,
            system_subscription: None,
        };
        synchronizer.persist(&record)?;
        synchronizer.apply(&record);

        info!(
            locale = %record.locale,
            appearance = %record.appearance,
            "Preferences initialized"
        );
        Ok(synchronizer)
    }

    /// The current preference record
    pub fn current(&self) -> PreferenceRecord {
        *self.record.lock()
    }

    /// The scheme actually rendered right now
    pub fn effective_scheme(&self) -> ColorScheme {
        self.current()
            .appearance
            .resolve(self.surfaces.color_scheme.current())
    }

    /// The locales this synchronizer accepts
    pub const fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    /// Whether a platform colour-scheme subscription is held
    pub const fn follows_system(&self) -> bool {
        self.system_subscription.is_some()
    }

    /// Select an appearance and mirror it to every surface
    pub fn set_appearance(&mut self, appearance: Appearance) -> PreferenceResult<()> {
        let record = {
            let mut current = self.record.lock();
            current.appearance = appearance;
            *current
        };

        self.persist(&record)?;
        self.apply(&record);
        info!(appearance = %appearance, "Appearance changed");
        Ok(())
    }

    /// Select a locale by code and mirror it to every surface
    ///
    /// Codes outside the supported set are refused and leave all state as is.
    pub fn set_locale(&mut self, code: &str) -> PreferenceResult<()> {
        let Some(locale) = self.locales.match_code(code) else {
            warn!("Refusing unsupported locale: {}", code);
            return Err(PreferenceError::UnsupportedLocale(code.to_string()));
        };

        let record = {
            let mut current = self.record.lock();
            current.locale = locale;
            *current
        };

        self.persist(&record)?;
        self.apply(&record);
        info!(locale = %locale, "Locale changed");
        Ok(())
    }

    /// Forget stored preferences and return to defaults
    pub fn reset(&mut self) {
        self.surfaces.storage.remove(&self.settings.storage_key);
        for name in [&self.settings.appearance_cookie, &self.settings.locale_cookie] {
            self.surfaces.cookies.remove(name, &self.cookie_options);
        }

        let record = PreferenceRecord::defaults(&self.locales);
        *self.record.lock() = record;
        self.apply(&record);
        info!("Preferences reset to defaults");
    }

    fn persist(&self, record: &PreferenceRecord) -> PreferenceResult<()> {
        let json = record.to_json()?;
        self.surfaces.storage.set(&self.settings.storage_key, &json);
        self.surfaces.cookies.set(
            &self.settings.appearance_cookie,
            record.appearance.as_str(),
            &self.cookie_options,
        );
        self.surfaces.cookies.set(
            &self.settings.locale_cookie,
            record.locale.code(),
            &self.cookie_options,
        );
        Ok(())
    }

    /// Write the document attributes and (un)subscribe from platform changes
    fn apply(&mut self, record: &PreferenceRecord) {
        let scheme = record
            .appearance
            .resolve(self.surfaces.color_scheme.current());
        let document = &self.surfaces.document;
        document.set_attribute(&self.settings.scheme_attribute, scheme.as_str());
        document.set_attribute(LANG_ATTRIBUTE, record.locale.code());

        match (record.appearance.follows_system(), self.system_subscription.is_some()) {
            (true, false) => {
                let listener = SystemSchemeListener {
                    record: Arc::clone(&self.record),
                    document: Arc::clone(&self.surfaces.document),
                    attribute: self.settings.scheme_attribute.clone(),
                };
                self.system_subscription = Some(
                    self.surfaces
                        .color_scheme
                        .subscribe(Arc::new(move |scheme| listener.on_change(scheme))),
                );
                debug!("Following platform colour scheme");
            }
            (false, true) => {
                self.system_subscription = None;
                debug!("Stopped following platform colour scheme");
            }
            _ => {}
        }
    }
}

impl std::fmt::Debug for PreferenceSynchronizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceSynchronizer")
            .field("record", &self.current())
            .field("follows_system", &self.follows_system())
            .finish_non_exhaustive()
    }
}

/// Re-renders the document when the platform scheme changes
struct SystemSchemeListener {
    record: Arc<Mutex<PreferenceRecord>>,
    document: Arc<dyn DocumentState>,
    attribute: String,
}

impl SystemSchemeListener {
    fn on_change(&self, scheme: ColorScheme) {
        // A notification may race an appearance change; only `system` follows it.
        if self.record.lock().appearance.follows_system() {
            self.document.set_attribute(&self.attribute, scheme.as_str());
        }
    }
}
