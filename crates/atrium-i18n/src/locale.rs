//! Locale management and utilities

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locales the front end is built with
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Locale {
    /// English
    #[default]
    #[serde(rename = "en")]
    English,
    /// French
    #[serde(rename = "fr")]
    French,
}

impl Locale {
    /// Get the routing code for this locale, as used in URL prefixes
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
        }
    }

    /// Get the full language tag for this locale
    pub const fn language_tag(self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::French => "fr-FR",
        }
    }

    /// Parse a locale from a routing code or full language tag
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" | "en-US" => Some(Self::English),
            "fr" | "fr-FR" => Some(Self::French),
            _ => None,
        }
    }

    /// Get all compiled locales
    pub const fn all() -> [Self; 2] {
        [Self::English, Self::French]
    }

    /// Get the display name for this locale, in its own language
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::French => "Français",
        }
    }

    /// Get the translation file name for this locale
    pub fn resource_file(self) -> String {
        format!("{}.json", self.code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> I18nResult<Self> {
        Self::from_code(s).ok_or_else(|| I18nError::UnknownLocale(s.to_string()))
    }
}

/// The configured subset of locales a deployment serves, plus its default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    supported: Vec<Locale>,
    default: Locale,
}

impl LocaleSet {
    /// Create a locale set; the default must be one of the supported locales
    pub fn new(supported: Vec<Locale>, default: Locale) -> I18nResult<Self> {
        if supported.is_empty() {
            return Err(I18nError::EmptyLocaleSet);
        }
        if !supported.contains(&default) {
            return Err(I18nError::DefaultNotSupported(default.code().to_string()));
        }

        let mut unique = Vec::with_capacity(supported.len());
        for locale in supported {
            if !unique.contains(&locale) {
                unique.push(locale);
            }
        }
        Ok(Self {
            supported: unique,
            default,
        })
    }

    /// Build a locale set from configuration codes
    pub fn from_codes<S: AsRef<str>>(codes: &[S], default: &str) -> I18nResult<Self> {
        let supported = codes
            .iter()
            .map(|code| code.as_ref().parse())
            .collect::<I18nResult<Vec<Locale>>>()?;
        Self::new(supported, default.parse()?)
    }

    /// The default locale, used whenever resolution fails
    pub const fn default_locale(&self) -> Locale {
        self.default
    }

    /// The supported locales in configuration order
    pub fn supported(&self) -> &[Locale] {
        &self.supported
    }

    /// Whether `locale` is served by this deployment
    pub fn contains(&self, locale: Locale) -> bool {
        self.supported.contains(&locale)
    }

    /// Match an exact routing code against the supported set
    ///
    /// Only the short routing code is accepted; full language tags and other
    /// casings are not locale segments.
    pub fn match_code(&self, code: &str) -> Option<Locale> {
        self.supported
            .iter()
            .copied()
            .find(|locale| locale.code() == code)
    }
}

impl Default for LocaleSet {
    fn default() -> Self {
        Self {
            supported: Locale::all().to_vec(),
            default: Locale::default(),
        }
    }
}
