//! Integration tests for atrium-nav

use atrium_common::test_utils::init_test_logging;
use atrium_config::NavigationSettings;
use atrium_nav::{CountingScroller, LoadingState, NavigationCoordinator};
use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;

const DELAY: Duration = Duration::from_millis(300);

fn delayed(scroller: &Arc<CountingScroller>) -> NavigationCoordinator {
    init_test_logging();
    NavigationCoordinator::new("/en", scroller.clone(), DELAY)
}

#[tokio::test(start_paused = true)]
async fn test_delayed_scroll_fires_once() {
    let scroller = Arc::new(CountingScroller::new());
    let mut nav = delayed(&scroller);

    nav.on_route_change("/en/blog");
    assert_eq!(scroller.count(), 0);

    tokio::time::sleep(DELAY + Duration::from_millis(10)).await;
    assert_eq!(scroller.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_superseding_route_change_cancels_pending_scroll() {
    let scroller = Arc::new(CountingScroller::new());
    let mut nav = delayed(&scroller);

    nav.on_route_change("/en/blog");
    tokio::time::sleep(DELAY / 2).await;
    nav.on_route_change("/en/contact");

    tokio::time::sleep(DELAY * 2).await;
    assert_eq!(scroller.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_scroll() {
    let scroller = Arc::new(CountingScroller::new());
    let mut nav = delayed(&scroller);

    nav.on_route_change("/en/blog");
    drop(nav);

    tokio::time::sleep(DELAY * 2).await;
    assert_eq!(scroller.count(), 0);
}

#[tokio::test]
async fn test_subscribers_observe_loading_flag() {
    let scroller = Arc::new(CountingScroller::new());
    let settings = NavigationSettings::default();
    let mut nav = NavigationCoordinator::from_settings("/en", scroller.clone(), &settings);
    let mut rx = nav.subscribe();

    assert!(nav.on_link_activated("/fr"));
    rx.changed().await.unwrap();
    assert!(*rx.borrow_and_update());

    nav.on_route_change("/fr");
    rx.changed().await.unwrap();
    assert!(!*rx.borrow_and_update());
    assert_eq!(scroller.count(), 1);
}

#[test]
fn test_unobserved_link_is_stopped_by_route_change() {
    let scroller = Arc::new(CountingScroller::new());
    let mut nav = NavigationCoordinator::new("/en", scroller, Duration::ZERO);

    nav.start_loading();
    nav.on_route_change("/en/blog?page=2");
    assert_eq!(nav.state(), LoadingState::Idle);
}

#[derive(Debug, Clone)]
enum Event {
    Start,
    Stop,
    Link(&'static str),
    Route(&'static str),
}

fn route() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(vec!["/en", "/en/blog", "/fr", "/en/blog?page=2", "/en#top"])
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::Start),
        Just(Event::Stop),
        route().prop_map(Event::Link),
        route().prop_map(Event::Route),
    ]
}

proptest! {
    #[test]
    fn prop_route_changes_always_end_idle_and_scroll_once(events in proptest::collection::vec(event(), 0..24)) {
        let scroller = Arc::new(CountingScroller::new());
        let mut nav = NavigationCoordinator::new("/en", scroller.clone(), Duration::ZERO);
        let mut changes = 0;

        for event in events {
            match event {
                Event::Start => nav.start_loading(),
                Event::Stop => nav.stop_loading(),
                Event::Link(href) => {
                    nav.on_link_activated(href);
                }
                Event::Route(route) => {
                    if nav.on_route_change(route) {
                        changes += 1;
                        prop_assert_eq!(nav.state(), LoadingState::Idle);
                    }
                }
            }
        }
        prop_assert_eq!(scroller.count(), changes);
    }
}
