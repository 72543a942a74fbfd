//! Navigation loading coordinator
//!
//! Shows a loading indicator between a link activation and the route change
//! it causes. Every route change forces the indicator off and resets the
//! scroll position exactly once, so a lost link event can never leave the
//! indicator stuck.

use crate::route::{is_internal_href, RouteId};
use crate::scroll::Scroller;
use atrium_config::{NavigationSettings, MAX_SCROLL_DELAY_MS};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Loading indicator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    /// No navigation in flight
    #[default]
    Idle,
    /// A navigation was started and no route change has arrived yet
    Loading,
}

impl From<bool> for LoadingState {
    fn from(in_flight: bool) -> Self {
        if in_flight {
            Self::Loading
        } else {
            Self::Idle
        }
    }
}

/// Owns the loading flag and the last observed route
pub struct NavigationCoordinator {
    in_flight: watch::Sender<bool>,
    current_route: RouteId,
    scroller: Arc<dyn Scroller>,
    scroll_delay: Duration,
    pending_scroll: Option<CancellationToken>,
}

impl NavigationCoordinator {
    /// Create an idle coordinator with `initial_route` as the baseline
    ///
    /// `scroll_delay` is capped at [`MAX_SCROLL_DELAY_MS`].
    pub fn new(
        initial_route: impl Into<RouteId>,
        scroller: Arc<dyn Scroller>,
        scroll_delay: Duration,
    ) -> Self {
        let (in_flight, _) = watch::channel(false);
        Self {
            in_flight,
            current_route: initial_route.into(),
            scroller,
            scroll_delay: scroll_delay.min(Duration::from_millis(MAX_SCROLL_DELAY_MS)),
            pending_scroll: None,
        }
    }

    /// Create a coordinator using the configured scroll delay
    pub fn from_settings(
        initial_route: impl Into<RouteId>,
        scroller: Arc<dyn Scroller>,
        settings: &NavigationSettings,
    ) -> Self {
        Self::new(
            initial_route,
            scroller,
            Duration::from_millis(settings.scroll_delay_ms),
        )
    }

    /// Current loading state
    pub fn state(&self) -> LoadingState {
        LoadingState::from(*self.in_flight.borrow())
    }

    /// Whether a navigation is in flight
    pub fn is_loading(&self) -> bool {
        *self.in_flight.borrow()
    }

    /// Last observed route
    pub const fn current_route(&self) -> &RouteId {
        &self.current_route
    }

    /// Read-only view of the loading flag
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.in_flight.subscribe()
    }

    /// Enter `Loading`; no-op when already loading
    pub fn start_loading(&self) {
        self.in_flight.send_if_modified(|in_flight| !std::mem::replace(in_flight, true));
    }

    /// Return to `Idle`; no-op when already idle
    pub fn stop_loading(&self) {
        self.in_flight.send_if_modified(|in_flight| std::mem::replace(in_flight, false));
    }

    /// Start loading for an activated link that leads to another internal route
    ///
    /// Returns whether loading was started.
    pub fn on_link_activated(&self, href: &str) -> bool {
        if !is_internal_href(href) || RouteId::parse(href) == self.current_route {
            return false;
        }
        self.start_loading();
        true
    }

    /// Record a route change, stop loading and scroll to the top once
    ///
    /// Returns false when `route` is the route already observed.
    pub fn on_route_change(&mut self, route: impl Into<RouteId>) -> bool {
        let route = route.into();
        if route == self.current_route {
            return false;
        }

        debug!(from = %self.current_route, to = %route, "Route changed");
        self.current_route = route;
        self.stop_loading();
        self.schedule_scroll();
        true
    }

    fn schedule_scroll(&mut self) {
        if let Some(pending) = self.pending_scroll.take() {
            pending.cancel();
        }

        if self.scroll_delay.is_zero() {
            self.scroller.scroll_to_top();
            return;
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!("No async runtime for delayed scroll, scrolling immediately");
            self.scroller.scroll_to_top();
            return;
        };

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let scroller = Arc::clone(&self.scroller);
        let delay = self.scroll_delay;
        runtime.spawn(async move {
            tokio::select! {
                () = cancelled.cancelled() => debug!("Pending scroll cancelled"),
                () = tokio::time::sleep(delay) => scroller.scroll_to_top(),
            }
        });
        self.pending_scroll = Some(token);
    }
}

impl Drop for NavigationCoordinator {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_scroll.take() {
            pending.cancel();
        }
    }
}

impl std::fmt::Debug for NavigationCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationCoordinator")
            .field("state", &self.state())
            .field("current_route", &self.current_route)
            .field("scroll_delay", &self.scroll_delay)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::CountingScroller;

    fn coordinator(scroller: &Arc<CountingScroller>) -> NavigationCoordinator {
        NavigationCoordinator::new("/en", scroller.clone(), Duration::ZERO)
    }

    #[test]
    fn test_start_and_stop() {
        let scroller = Arc::new(CountingScroller::new());
        let nav = coordinator(&scroller);
        assert_eq!(nav.state(), LoadingState::Idle);

        nav.start_loading();
        nav.start_loading();
        assert_eq!(nav.state(), LoadingState::Loading);

        nav.stop_loading();
        assert_eq!(nav.state(), LoadingState::Idle);
    }

    #[test]
    fn test_link_classification() {
        let scroller = Arc::new(CountingScroller::new());
        let nav = coordinator(&scroller);

        assert!(!nav.on_link_activated("https://example.com/en"));
        assert!(!nav.on_link_activated("//example.com"));
        assert!(!nav.on_link_activated("/en#contact"));
        assert!(!nav.is_loading());

        assert!(nav.on_link_activated("/en/blog"));
        assert!(nav.is_loading());
    }

    #[test]
    fn test_route_change_forces_idle_and_scrolls_once() {
        let scroller = Arc::new(CountingScroller::new());
        let mut nav = coordinator(&scroller);

        nav.start_loading();
        assert!(nav.on_route_change("/en/blog"));
        assert!(!nav.is_loading());
        assert_eq!(scroller.count(), 1);

        assert!(!nav.on_route_change("/en/blog#top"));
        assert_eq!(scroller.count(), 1);
        assert_eq!(nav.current_route().path(), "/en/blog");
    }

    #[test]
    fn test_redundant_start_does_not_notify() {
        let scroller = Arc::new(CountingScroller::new());
        let nav = coordinator(&scroller);
        let mut rx = nav.subscribe();

        nav.start_loading();
        tokio_test::block_on(rx.changed()).unwrap();
        assert!(*rx.borrow_and_update());

        nav.start_loading();
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_delay_is_capped() {
        let scroller = Arc::new(CountingScroller::new());
        let nav = NavigationCoordinator::new("/", scroller, Duration::from_secs(60));
        assert_eq!(nav.scroll_delay, Duration::from_millis(MAX_SCROLL_DELAY_MS));
    }

    #[test]
    fn test_delayed_scroll_without_runtime_scrolls_immediately() {
        let scroller = Arc::new(CountingScroller::new());
        let mut nav = NavigationCoordinator::new("/", scroller.clone(), Duration::from_millis(50));
        nav.on_route_change("/en");
        assert_eq!(scroller.count(), 1);
    }
}
