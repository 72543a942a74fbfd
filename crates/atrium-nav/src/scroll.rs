//! Scroll-to-top capability

use std::sync::atomic::{AtomicUsize, Ordering};

/// Resets the viewport to the top of the page
pub trait Scroller: Send + Sync {
    /// Scroll to the top
    fn scroll_to_top(&self);
}

/// Scroller that only counts how often it was asked to scroll
#[derive(Debug, Default)]
pub struct CountingScroller {
    count: AtomicUsize,
}

impl CountingScroller {
    /// Create a counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Scrolls performed so far
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Scroller for CountingScroller {
    fn scroll_to_top(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
