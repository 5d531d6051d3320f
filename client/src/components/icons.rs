//! Inline SVG glyphs used by the nav bar and experience lists.
//!
//! Paths are drawn on a 24×24 stroke grid so every glyph shares the same
//! `viewBox` and stroke settings.

use leptos::prelude::*;

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Sun,
    Moon,
    Menu,
    Close,
    ChevronDown,
}

impl Glyph {
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Sun => &[
                "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Self::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Self::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Self::Close => &["M18 6 6 18", "m6 6 12 12"],
            Self::ChevronDown => &["m6 9 6 6 6-6"],
        }
    }
}

/// Glyph for the theme button: the sun switches back to light, the moon to dark.
pub fn theme_glyph(is_dark: bool) -> Glyph {
    if is_dark { Glyph::Sun } else { Glyph::Moon }
}

/// Glyph for the mobile menu button.
pub fn menu_glyph(menu_open: bool) -> Glyph {
    if menu_open { Glyph::Close } else { Glyph::Menu }
}

#[component]
pub fn Icon(
    glyph: Glyph,
    #[prop(default = 20)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let size = size.to_string();
    view! {
        <svg
            class=format!("icon {class}")
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {glyph.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
