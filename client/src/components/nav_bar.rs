//! Fixed top navigation with anchor links, theme toggle, and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bar owns its own `NavState` and reads the theme only through the
//! `is_dark` signal handed down by `App`; flipping the theme goes back up
//! through `on_toggle_theme`. The scroll listener lives exactly as long as
//! the component.

use leptos::prelude::*;

use crate::components::icons::{Icon, menu_glyph, theme_glyph};
use crate::content::{NAV_LINKS, OWNER_INITIALS};
use crate::state::nav::NavState;

/// Top navigation bar.
#[component]
pub fn NavBar(#[prop(into)] is_dark: Signal<bool>, on_toggle_theme: Callback<()>) -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    crate::util::scroll::subscribe(move |offset| nav.update(|n| n.record_scroll(offset)));

    let nav_class = move || {
        if nav.get().scrolled {
            "nav nav--scrolled"
        } else {
            "nav"
        }
    };
    let menu_open = move || nav.get().menu_open;

    view! {
        <nav class=nav_class>
            <div class="nav__inner">
                <div class="nav__bar">
                    <a href="#home" class="nav__brand">{OWNER_INITIALS}</a>

                    <div class="nav__links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <a href=link.href() class="nav__link">{link.label}</a> })
                            .collect_view()}
                        <button
                            class="nav__theme-toggle"
                            on:click=move |_| on_toggle_theme.run(())
                            title="Toggle dark mode"
                            aria-label="Toggle dark mode"
                        >
                            {move || view! { <Icon glyph=theme_glyph(is_dark.get())/> }}
                        </button>
                    </div>

                    <button
                        class="nav__menu-toggle"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu_open().to_string()
                    >
                        {move || view! { <Icon glyph=menu_glyph(menu_open()) size=24/> }}
                    </button>
                </div>

                <Show when=menu_open>
                    <div class="nav__mobile">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href() class="nav__mobile-link">{link.label}</a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}
