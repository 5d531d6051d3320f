//! Experience section: one card per role with highlight bullets.

use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::{EXPERIENCE, ExperienceEntry, anchor};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=anchor::EXPERIENCE class="section">
            <div class="section__inner">
                <h2 class="section__title">"Experience"</h2>
                <div class="experience__list">
                    {EXPERIENCE.iter().map(|entry| view! { <ExperienceCard entry=*entry/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(entry: ExperienceEntry) -> impl IntoView {
    view! {
        <div class="card card--lift">
            <h3 class="experience__title">{entry.title}</h3>
            <ul class="experience__highlights">
                {entry
                    .highlights
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="experience__highlight">
                                <Icon glyph=Glyph::ChevronDown size=16 class="experience__bullet"/>
                                {*item}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
