//! Appearance preference and the concrete colour scheme it renders as

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selected appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// Always light
    Light,
    /// Always dark
    Dark,
    /// Follow the platform preference
    #[default]
    System,
}

impl Appearance {
    /// Lowercase name as stored in cookies and the preference record
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// All appearances in menu order
    pub const fn all() -> [Self; 3] {
        [Self::Light, Self::Dark, Self::System]
    }

    /// Concrete scheme to render, given the platform's current scheme
    pub const fn resolve(self, system: ColorScheme) -> ColorScheme {
        match self {
            Self::Light => ColorScheme::Light,
            Self::Dark => ColorScheme::Dark,
            Self::System => system,
        }
    }

    /// Whether this appearance tracks platform changes
    pub const fn follows_system(self) -> bool {
        matches!(self, Self::System)
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Appearance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(format!("unknown appearance: {other}")),
        }
    }
}

/// A concrete rendering scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light surfaces
    #[default]
    Light,
    /// Dark surfaces
    Dark,
}

impl ColorScheme {
    /// Lowercase name as written to the document
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
