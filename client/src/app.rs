//! Root application component with the theme flag and the single route.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::PAGE_TITLE;
use crate::pages::home::HomePage;
use crate::state::theme::ThemeState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the theme flag and mirrors it onto the `<html>` element whenever it
/// changes. Children get a read-only view of the flag and a toggle callback.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    Effect::new(move |_| crate::util::dark_mode::apply(theme.get()));

    let is_dark = Signal::derive(move || theme.get().dark);
    let on_toggle_theme = Callback::new(move |()| {
        theme.update(|t| {
            t.toggle();
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=PAGE_TITLE/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=move || view! { <HomePage is_dark=is_dark on_toggle_theme=on_toggle_theme/> }
                />
            </Routes>
        </Router>
    }
}
