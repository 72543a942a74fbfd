//! HTTP surface: router, shared state and handlers
//!
//! `/api/*` paths are excluded from locale routing. Every other path runs
//! through the locale middleware first and, once locale-prefixed, answers
//! with a short description of the resolved locale.

use atrium_config::ConfigCache;
use atrium_i18n::{Locale, Replacements, Translator};
use atrium_routing::{locale_redirect, LocaleRouting};
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    middleware::from_fn_with_state,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Live configuration
    pub config: Arc<ConfigCache>,
    /// Translation engine over the startup table
    pub translator: Translator,
    /// Locale routing shared with the middleware
    pub routing: LocaleRouting,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &"<ConfigCache>")
            .field("translator", &"<Translator>")
            .field("routing", &self.routing)
            .finish()
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while serving
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Default locale code
    pub default_locale: &'static str,
    /// Supported locale codes
    pub locales: Vec<&'static str>,
}

/// A resolved translation
#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    /// Locale resolved against
    pub locale: Locale,
    /// Requested key
    pub key: String,
    /// Resolved text, or the key itself when missing
    pub value: String,
}

/// Description of a localized page
#[derive(Debug, Serialize)]
pub struct LocalePage {
    /// Locale code taken from the path
    pub locale: Locale,
    /// Full language tag
    pub language_tag: &'static str,
    /// Locale name in its own language
    pub display_name: &'static str,
    /// Requested path
    pub path: String,
    /// Other locales the page is available in
    pub alternates: Vec<Locale>,
    /// Cookie the client writes its locale preference to
    pub locale_cookie: String,
}

/// Error body for API failures
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human readable message
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Create the application router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/translations/:locale/*key", get(translation))
        .fallback(locale_page)
        .layer(from_fn_with_state(state.routing.clone(), locale_redirect))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Report liveness and the served locales
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let locales = state.routing.resolver().locales();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        default_locale: locales.default_locale().code(),
        locales: locales.supported().iter().map(|l| l.code()).collect(),
    })
}

/// Resolve one key; `count` selects a plural variant, other parameters are placeholders
async fn translation(
    State(state): State<AppState>,
    Path((locale, key)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(locale) = state.routing.resolver().locales().match_code(&locale) else {
        return error_response(StatusCode::NOT_FOUND, format!("Unsupported locale: {locale}"));
    };

    let count = match params.get("count").map(|raw| raw.parse::<i64>()) {
        None => None,
        Some(Ok(count)) => Some(count),
        Some(Err(_)) => {
            return error_response(StatusCode::BAD_REQUEST, "count must be an integer");
        }
    };

    let replacements: Replacements = params
        .into_iter()
        .filter(|(name, _)| name != "count")
        .collect();

    let value = match count {
        Some(count) => state
            .translator
            .resolve_choice(locale, &key, count, Some(&replacements)),
        None => state.translator.resolve(locale, &key, Some(&replacements)),
    };

    Json(TranslationResponse { locale, key, value }).into_response()
}

/// Describe the locale a localized path resolved to
async fn locale_page(State(state): State<AppState>, uri: Uri) -> Response {
    let resolver = state.routing.resolver();
    let Some(locale) = resolver.locale_of(uri.path()) else {
        return error_response(StatusCode::NOT_FOUND, format!("No route for {}", uri.path()));
    };

    let alternates = resolver
        .locales()
        .supported()
        .iter()
        .copied()
        .filter(|other| *other != locale)
        .collect();

    Json(LocalePage {
        locale,
        language_tag: locale.language_tag(),
        display_name: locale.display_name(),
        path: uri.path().to_string(),
        alternates,
        locale_cookie: state.config.get().preferences.locale_cookie.clone(),
    })
    .into_response()
}
