//! Window scroll subscription scoped to a component's lifetime.
//!
//! SYSTEM CONTEXT
//! ==============
//! `subscribe` attaches one `scroll` listener to `window` and registers its
//! removal with the owning reactive scope, so a component that unmounts
//! leaves no listener behind.

use leptos::prelude::*;

/// Current vertical scroll offset of the window, or `0.0` off-browser.
pub fn current_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Call `on_offset` with the window's vertical offset on every scroll event
/// until the current owner is cleaned up.
pub fn subscribe<F>(on_offset: F)
where
    F: Fn(f64) + 'static,
{
    let handle = window_event_listener(leptos::ev::scroll, move |_| on_offset(current_offset()));
    on_cleanup(move || handle.remove());
}
