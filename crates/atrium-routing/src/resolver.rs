//! Locale resolution for inbound request paths

use atrium_config::Config;
use atrium_i18n::{I18nResult, Locale, LocaleSet};

/// Outcome of resolving a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Serve the request unchanged
    PassThrough,
    /// Send the client to a locale-prefixed location
    Redirect {
        /// Path and query to redirect to
        location: String,
    },
}

impl RoutingDecision {
    /// Whether the request is served unchanged
    pub const fn is_pass_through(&self) -> bool {
        matches!(self, Self::PassThrough)
    }

    /// Redirect location, if any
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::PassThrough => None,
            Self::Redirect { location } => Some(location),
        }
    }
}

/// Decides per request whether a path already carries a locale
///
/// The resolver holds no mutable state and performs no I/O, so a single
/// instance can be cloned into every request handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleResolver {
    locales: LocaleSet,
    excluded_prefixes: Vec<String>,
}

impl LocaleResolver {
    /// Create a resolver for `locales` that skips paths under `excluded_prefixes`
    pub fn new<I, S>(locales: LocaleSet, excluded_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locales,
            excluded_prefixes: excluded_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a resolver from the locale and routing sections of `config`
    pub fn from_config(config: &Config) -> I18nResult<Self> {
        let locales =
            LocaleSet::from_codes(&config.i18n.supported_locales, &config.i18n.default_locale)?;
        Ok(Self::new(locales, config.routing.excluded_prefixes.iter().cloned()))
    }

    /// The locale set routed by this resolver
    pub const fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    /// Resolve a path (with optional query) against the default locale
    pub fn resolve(&self, path_and_query: &str) -> RoutingDecision {
        self.resolve_with_preference(path_and_query, None)
    }

    /// Resolve a path, redirecting to `preferred` when it is supported
    pub fn resolve_with_preference(
        &self,
        path_and_query: &str,
        preferred: Option<&str>,
    ) -> RoutingDecision {
        let (path, query) = split_query(path_and_query);

        if self.locale_of(path).is_some() || self.is_excluded(path) {
            return RoutingDecision::PassThrough;
        }

        let target = preferred
            .and_then(|code| self.locales.match_code(code))
            .unwrap_or_else(|| self.locales.default_locale());

        let location = match path {
            "" | "/" => format!("/{}{query}", target.code()),
            p if p.starts_with('/') => format!("/{}{p}{query}", target.code()),
            p => format!("/{}/{p}{query}", target.code()),
        };
        RoutingDecision::Redirect { location }
    }

    /// The locale named by the first segment of `path`, if supported
    ///
    /// The segment must be the whole path or be followed by `/`.
    pub fn locale_of(&self, path: &str) -> Option<Locale> {
        let (path, _) = split_query(path);
        let rest = path.strip_prefix('/')?;
        let segment = rest.split('/').next().unwrap_or(rest);
        self.locales.match_code(segment)
    }

    /// Whether `path` is an internal or static path that is never localized
    ///
    /// Prefixes match whole segments: `/api` covers `/api` and `/api/...`
    /// but not `/apiary`.
    pub fn is_excluded(&self, path: &str) -> bool {
        let (bare, _) = split_query(path);
        self.excluded_prefixes
            .iter()
            .any(|prefix| under_prefix(bare, prefix))
            || has_file_extension(path)
    }
}

/// Split at the first `?`, keeping the `?` with the query
fn split_query(path_and_query: &str) -> (&str, &str) {
    path_and_query
        .find('?')
        .map_or((path_and_query, ""), |idx| path_and_query.split_at(idx))
}

/// `path` is `prefix` itself or lies below it
fn under_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// A `.` followed by at least one character in the last path segment
fn has_file_extension(path: &str) -> bool {
    let last = path.rsplit('/').next().unwrap_or(path);
    last.rfind('.').is_some_and(|idx| idx + 1 < last.len())
}
