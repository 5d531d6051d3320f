//! "About Me" section: summary paragraph plus three fact cards.

use leptos::prelude::*;

use crate::content::{ABOUT_CARDS, ABOUT_SUMMARY, anchor};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=anchor::ABOUT class="section section--alt">
            <div class="section__inner">
                <h2 class="section__title">"About Me"</h2>
                <div class="card">
                    <p class="about__summary">{ABOUT_SUMMARY}</p>
                    <div class="about__facts">
                        {ABOUT_CARDS
                            .iter()
                            .map(|card| {
                                view! {
                                    <div class="fact">
                                        <h3 class="fact__heading">{card.heading}</h3>
                                        <p>{card.body}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
