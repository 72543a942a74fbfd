//! Integration tests for atrium-routing

use atrium_config::{Config, DEFAULT_EXCLUDED_PREFIXES};
use atrium_i18n::LocaleSet;
use atrium_routing::{locale_redirect, LocaleResolver, LocaleRouting, RoutingDecision};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use proptest::prelude::*;
use tower::ServiceExt;

fn app() -> Router {
    let routing = LocaleRouting::from_config(&Config::default()).expect("default config routes");
    Router::new()
        .route("/en", get(|| async { "home" }))
        .route("/api/health", get(|| async { "ok" }))
        .layer(from_fn_with_state(routing, locale_redirect))
}

fn resolver() -> LocaleResolver {
    LocaleResolver::new(LocaleSet::default(), DEFAULT_EXCLUDED_PREFIXES.iter().copied())
}

#[tokio::test]
async fn test_middleware_redirects_root() {
    let response = app()
        .oneshot(Request::builder().uri("/?utm=a").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/en?utm=a");
}

#[tokio::test]
async fn test_middleware_honors_locale_cookie() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/blog")
                .header(header::COOKIE, "locale=fr")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/fr/blog");
}

#[tokio::test]
async fn test_middleware_forwards_localized_and_excluded_paths() {
    for uri in ["/en", "/api/health"] {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

proptest! {
    #[test]
    fn prop_redirect_target_is_stable(
        path in "(/[a-zA-Z0-9_-]{0,10}){0,4}",
        query in proptest::option::of("[a-z]{1,5}=[a-z0-9]{0,5}"),
    ) {
        let r = resolver();
        let input = match &query {
            Some(q) => format!("{path}?{q}"),
            None => path.clone(),
        };

        if let RoutingDecision::Redirect { location } = r.resolve(&input) {
            prop_assert_eq!(r.resolve(&location), RoutingDecision::PassThrough);
            prop_assert!(r.locale_of(&location).is_some());
            if let Some(q) = &query {
                let expected_suffix = format!("?{q}");
                prop_assert!(location.ends_with(&expected_suffix));
            }
        }
    }

    #[test]
    fn prop_excluded_prefixes_pass_through(
        prefix in proptest::sample::select(DEFAULT_EXCLUDED_PREFIXES.to_vec()),
        rest in "(/[a-z]{1,8}){0,3}",
    ) {
        let path = format!("{prefix}{rest}");
        prop_assert_eq!(resolver().resolve(&path), RoutingDecision::PassThrough);
    }

    #[test]
    fn prop_file_paths_pass_through(dir in "(/[a-z]{1,8}){0,3}", name in "[a-z]{1,8}", ext in "[a-z0-9]{1,4}") {
        let path = format!("{dir}/{name}.{ext}");
        prop_assert_eq!(resolver().resolve(&path), RoutingDecision::PassThrough);
    }
}
