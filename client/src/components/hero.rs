//! Full-height landing banner.

use leptos::prelude::*;

use crate::content::{OWNER_NAME, TAGLINE, anchor};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=anchor::HOME class="hero">
            <div class="hero__content">
                <h1 class="hero__title">{OWNER_NAME}</h1>
                <p class="hero__tagline">{TAGLINE}</p>
                <div class="hero__actions">
                    <a href=format!("#{}", anchor::CONTACT) class="hero__cta hero__cta--primary">
                        "Get in Touch"
                    </a>
                    <a href=format!("#{}", anchor::ABOUT) class="hero__cta hero__cta--outline">
                        "Learn More"
                    </a>
                </div>
            </div>
        </section>
    }
}
