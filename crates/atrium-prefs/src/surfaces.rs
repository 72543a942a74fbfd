//! Capability traits for the places preferences are mirrored to
//!
//! The synchronizer never talks to a browser or a file directly. It writes
//! through these traits, so the same logic drives a real client, server-side
//! rendering and tests.

use crate::appearance::ColorScheme;
use atrium_config::{PreferenceSettings, SameSite};
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::sync::Arc;

/// Durable key/value storage surviving reloads
pub trait DurableStorage: Send + Sync {
    /// Stored value for `key`
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`
    fn set(&self, key: &str, value: &str);
    /// Delete `key`
    fn remove(&self, key: &str);
}

/// Cookies readable by the server on the next request
pub trait CookieJar: Send + Sync {
    /// Value of cookie `name`
    fn get(&self, name: &str) -> Option<String>;
    /// Write cookie `name`
    fn set(&self, name: &str, value: &str, options: &CookieOptions);
    /// Expire cookie `name`, written earlier with `options`
    fn remove(&self, name: &str, options: &CookieOptions);
}

/// Attributes of the live rendered document
pub trait DocumentState: Send + Sync {
    /// Current value of attribute `name`
    fn attribute(&self, name: &str) -> Option<String>;
    /// Set attribute `name`
    fn set_attribute(&self, name: &str, value: &str);
}

/// Callback receiving platform colour-scheme changes
pub type SchemeListener = Arc<dyn Fn(ColorScheme) + Send + Sync>;

/// The platform colour-scheme preference
pub trait ColorSchemeSource: Send + Sync {
    /// Current platform scheme
    fn current(&self) -> ColorScheme;
    /// Register `listener` until the returned subscription is dropped
    fn subscribe(&self, listener: SchemeListener) -> Subscription;
}

/// Handle keeping a listener registered; dropping it unsubscribes
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Subscription running `cancel` when dropped
    pub fn new<F>(cancel: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Attributes written alongside a cookie value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    /// Lifetime from the moment of writing
    pub max_age: Duration,
    /// Cookie path
    pub path: String,
    /// `SameSite` policy
    pub same_site: SameSite,
}

impl CookieOptions {
    /// Options for preference cookies as configured
    pub fn from_settings(settings: &PreferenceSettings) -> Self {
        Self {
            max_age: Duration::days(i64::from(settings.cookie_max_age_days)),
            ..Self::default()
        }
        .with_same_site(settings.same_site)
    }

    /// Replace the `SameSite` policy
    #[must_use]
    pub const fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    /// Absolute expiry for a cookie written at `now`, saturating at the latest representable instant
    pub fn expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_add_signed(self.max_age)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// `Set-Cookie` header value for a cookie written at `now`
    pub fn header_value_at(&self, name: &str, value: &str, now: DateTime<Utc>) -> String {
        let mut header = format!(
            "{name}={value}; Path={}; Max-Age={}; Expires={}; SameSite={}",
            self.path,
            self.max_age.num_seconds(),
            self.expires_at(now).format("%a, %d %b %Y %H:%M:%S GMT"),
            self.same_site.as_str(),
        );
        if self.same_site == SameSite::None {
            header.push_str("; Secure");
        }
        header
    }

    /// `Set-Cookie` header value for a cookie written now
    pub fn header_value(&self, name: &str, value: &str) -> String {
        self.header_value_at(name, value, Utc::now())
    }

    /// `Set-Cookie` header value expiring cookie `name`
    pub fn removal_header_value(&self, name: &str) -> String {
        format!(
            "{name}=; Path={}; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT; SameSite={}",
            self.path,
            self.same_site.as_str()
        )
    }
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            max_age: Duration::days(365),
            path: "/".to_string(),
            same_site: SameSite::Lax,
        }
    }
}

/// The four surfaces a synchronizer writes through
#[derive(Clone)]
pub struct PreferenceSurfaces {
    /// Durable storage holding the serialized record
    pub storage: Arc<dyn DurableStorage>,
    /// Cookie jar mirrored for the server
    pub cookies: Arc<dyn CookieJar>,
    /// Live document attributes
    pub document: Arc<dyn DocumentState>,
    /// Platform colour-scheme source
    pub color_scheme: Arc<dyn ColorSchemeSource>,
}

impl fmt::Debug for PreferenceSurfaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceSurfaces").finish_non_exhaustive()
    }
}
