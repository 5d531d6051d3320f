//! Local nav bar chrome state (mobile menu, scroll styling).
//!
//! DESIGN
//! ======
//! Owned by `NavBar` alone and rebuilt on every mount. `scrolled` is always
//! derived from the latest recorded offset, never accumulated.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Vertical offset past which the nav bar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// UI state for the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    /// Flip the mobile menu open/closed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Record the viewport's current vertical offset.
    pub fn record_scroll(&mut self, offset: f64) {
        self.scrolled = is_scrolled(offset);
    }
}

/// Whether `offset` is past the solid-style threshold. Non-finite offsets
/// count as not scrolled.
pub fn is_scrolled(offset: f64) -> bool {
    offset.is_finite() && offset > SCROLL_THRESHOLD
}
