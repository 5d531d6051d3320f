//! The portfolio page: nav bar over the five stacked sections.

use leptos::prelude::*;

use crate::components::{
    about::About, contact::Contact, experience::Experience, hero::Hero, nav_bar::NavBar,
    skills::Skills,
};

#[component]
pub fn HomePage(#[prop(into)] is_dark: Signal<bool>, on_toggle_theme: Callback<()>) -> impl IntoView {
    view! {
        <div class="page">
            <NavBar is_dark=is_dark on_toggle_theme=on_toggle_theme/>
            <main>
                <Hero/>
                <About/>
                <Experience/>
                <Skills/>
                <Contact/>
            </main>
        </div>
    }
}
