//! axum middleware running the locale resolver ahead of every handler

use crate::resolver::{LocaleResolver, RoutingDecision};
use atrium_config::Config;
use atrium_i18n::I18nResult;
use axum::{
    extract::{Request, State},
    http::{header::COOKIE, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::debug;

/// Shared state for [`locale_redirect`]
#[derive(Debug, Clone)]
pub struct LocaleRouting {
    resolver: Arc<LocaleResolver>,
    preference_cookie: Option<String>,
}

impl LocaleRouting {
    /// Route with `resolver`, ignoring any locale cookie
    pub fn new(resolver: LocaleResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
            preference_cookie: None,
        }
    }

    /// Prefer the locale named by `cookie` when redirecting
    #[must_use]
    pub fn with_preference_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.preference_cookie = Some(cookie.into());
        self
    }

    /// Build routing state from configuration
    pub fn from_config(config: &Config) -> I18nResult<Self> {
        let routing = Self::new(LocaleResolver::from_config(config)?);
        Ok(if config.routing.honor_locale_cookie {
            routing.with_preference_cookie(config.preferences.locale_cookie.clone())
        } else {
            routing
        })
    }

    /// The wrapped resolver
    pub fn resolver(&self) -> &LocaleResolver {
        &self.resolver
    }

    fn decide(&self, path_and_query: &str, headers: &HeaderMap) -> RoutingDecision {
        let preferred = self
            .preference_cookie
            .as_deref()
            .and_then(|name| cookie_value(headers, name));
        self.resolver
            .resolve_with_preference(path_and_query, preferred)
    }
}

/// Redirect requests without a locale prefix, forward everything else
///
/// Install with `axum::middleware::from_fn_with_state`.
pub async fn locale_redirect(
    State(routing): State<LocaleRouting>,
    request: Request,
    next: Next,
) -> Response {
    let path_and_query = request
        .uri()
        .path_and_query()
        .map_or("/", |pq| pq.as_str());

    match routing.decide(path_and_query, request.headers()) {
        RoutingDecision::PassThrough => next.run(request).await,
        RoutingDecision::Redirect { location } => {
            debug!(from = path_and_query, to = %location, "Redirecting to localized path");
            Redirect::temporary(&location).into_response()
        }
    }
}

/// Value of the first cookie called `name` across all `Cookie` headers
pub fn cookie_value<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"'))
}
