//! Dark mode class toggle on the document root.
//!
//! Adds or removes the `dark` class on the `<html>` element so dark-variant
//! styles apply page-wide. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! The flag is session-only: nothing is read from or written
//! to storage, so every load starts light. SSR paths no-op to keep server
//! rendering deterministic.

use crate::state::theme::ThemeState;

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Class carried by `<html>` while dark mode is on.
pub const DARK_CLASS: &str = "dark";

/// Mirror `theme` onto the `<html>` element's class list.
pub fn apply(theme: ThemeState) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                log::debug!("theme applied: {}", if theme.dark { "dark" } else { "light" });
                match theme.root_class() {
                    Some(class) => {
                        let _ = class_list.add_1(class);
                    }
                    None => {
                        let _ = class_list.remove_1(DARK_CLASS);
                    }
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
