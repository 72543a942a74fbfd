//! Thread-safe in-memory surfaces
//!
//! Used for server-side rendering of a request's preferences and by tests
//! to inspect exactly what a synchronizer wrote.

use crate::appearance::ColorScheme;
use crate::surfaces::{
    ColorSchemeSource, CookieJar, CookieOptions, DocumentState, DurableStorage,
    PreferenceSurfaces, SchemeListener, Subscription,
};
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Durable storage backed by a map
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl DurableStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

/// A cookie as last written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    /// Cookie value
    pub value: String,
    /// Attributes it was written with
    pub options: CookieOptions,
    /// When it was written
    pub written_at: DateTime<Utc>,
}

impl StoredCookie {
    /// Whether the cookie is still live at `now`
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.options.expires_at(self.written_at) > now
    }
}

/// Cookie jar backed by a map
///
/// Removed cookies leave their expiring `Set-Cookie` header behind until the
/// name is written again.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: RwLock<HashMap<String, StoredCookie>>,
    removals: RwLock<HashMap<String, String>>,
}

impl MemoryCookieJar {
    /// Create an empty jar
    pub fn new() -> Self {
        Self::default()
    }

    /// Full record of cookie `name`
    pub fn cookie(&self, name: &str) -> Option<StoredCookie> {
        self.cookies.read().get(name).cloned()
    }

    /// Last `Set-Cookie` header value sent for cookie `name`
    pub fn set_cookie_header(&self, name: &str) -> Option<String> {
        if let Some(header) = self.removals.read().get(name) {
            return Some(header.clone());
        }
        self.cookie(name)
            .map(|c| c.options.header_value_at(name, &c.value, c.written_at))
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.read().get(name).map(|c| c.value.clone())
    }

    fn set(&self, name: &str, value: &str, options: &CookieOptions) {
        self.removals.write().remove(name);
        self.cookies.write().insert(
            name.to_string(),
            StoredCookie {
                value: value.to_string(),
                options: options.clone(),
                written_at: Utc::now(),
            },
        );
    }

    fn remove(&self, name: &str, options: &CookieOptions) {
        self.cookies.write().remove(name);
        self.removals
            .write()
            .insert(name.to_string(), options.removal_header_value(name));
    }
}

/// Document attributes backed by a map
#[derive(Debug, Default)]
pub struct MemoryDocument {
    attributes: RwLock<HashMap<String, String>>,
}

impl MemoryDocument {
    /// Create a document with no attributes
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentState for MemoryDocument {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.read().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .write()
            .insert(name.to_string(), value.to_string());
    }
}

#[derive(Default)]
struct SchemeState {
    current: Mutex<ColorScheme>,
    listeners: Mutex<Vec<(u64, SchemeListener)>>,
    next_id: AtomicU64,
}

/// Colour-scheme source switched by hand
///
/// Stands in for the platform preference; `set` notifies every subscriber.
#[derive(Clone, Default)]
pub struct ManualColorScheme {
    state: Arc<SchemeState>,
}

impl ManualColorScheme {
    /// Source starting at `scheme`
    pub fn new(scheme: ColorScheme) -> Self {
        let source = Self::default();
        *source.state.current.lock() = scheme;
        source
    }

    /// Change the platform scheme and notify subscribers
    pub fn set(&self, scheme: ColorScheme) {
        *self.state.current.lock() = scheme;

        let listeners: Vec<SchemeListener> = self
            .state
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(scheme);
        }
    }

    /// Number of live subscriptions
    pub fn listener_count(&self) -> usize {
        self.state.listeners.lock().len()
    }
}

impl ColorSchemeSource for ManualColorScheme {
    fn current(&self) -> ColorScheme {
        *self.state.current.lock()
    }

    fn subscribe(&self, listener: SchemeListener) -> Subscription {
        let id = self.state.next_id.fetch_add(1, Ordering::Relaxed);
        self.state.listeners.lock().push((id, listener));

        let state: Weak<SchemeState> = Arc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = state.upgrade() {
                state.listeners.lock().retain(|(other, _)| *other != id);
            }
        })
    }
}

/// In-memory surfaces with typed handles kept for inspection
#[derive(Clone, Default)]
pub struct MemorySurfaces {
    /// Durable storage
    pub storage: Arc<MemoryStorage>,
    /// Cookie jar
    pub cookies: Arc<MemoryCookieJar>,
    /// Document attributes
    pub document: Arc<MemoryDocument>,
    /// Platform colour scheme
    pub color_scheme: ManualColorScheme,
}

impl MemorySurfaces {
    /// Fresh surfaces with the platform at `scheme`
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            color_scheme: ManualColorScheme::new(scheme),
            ..Self::default()
        }
    }

    /// Type-erased handles for a synchronizer
    pub fn surfaces(&self) -> PreferenceSurfaces {
        PreferenceSurfaces {
            storage: self.storage.clone(),
            cookies: self.cookies.clone(),
            document: self.document.clone(),
            color_scheme: Arc::new(self.color_scheme.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_storage_round_trip() {
        let storage = MemoryStorage::new();
        storage.set("k", "v");
        assert_eq!(storage.get("k").as_deref(), Some("v"));
        storage.remove("k");
        assert!(storage.is_empty());
    }

    #[test]
    fn test_cookie_header_reflects_options() {
        let jar = MemoryCookieJar::new();
        jar.set("locale", "fr", &CookieOptions::default());

        let header = jar.set_cookie_header("locale").unwrap();
        assert!(header.starts_with("locale=fr; Path=/; Max-Age=31536000;"));
        assert!(jar.cookie("locale").unwrap().is_live_at(Utc::now()));
    }

    #[test]
    fn test_removed_cookie_sends_expiry() {
        let jar = MemoryCookieJar::new();
        let options = CookieOptions::default();
        jar.set("locale", "fr", &options);
        jar.remove("locale", &options);

        assert_eq!(jar.get("locale"), None);
        assert_eq!(
            jar.set_cookie_header("locale").as_deref(),
            Some("locale=; Path=/; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT; SameSite=Lax")
        );

        jar.set("locale", "en", &options);
        assert!(jar.set_cookie_header("locale").unwrap().starts_with("locale=en;"));
    }

    #[test]
    fn test_manual_scheme_notifies_until_unsubscribed() {
        let source = ManualColorScheme::new(ColorScheme::Light);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let subscription = source.subscribe(Arc::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        source.set(ColorScheme::Dark);
        assert_eq!(source.current(), ColorScheme::Dark);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        drop(subscription);
        assert_eq!(source.listener_count(), 0);
        source.set(ColorScheme::Light);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
