//! Contact form section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs are controlled by a local `ContactForm` signal. Submitting shows
//! the acknowledgement dialog and clears the form; nothing leaves the page.

use leptos::prelude::*;

use crate::content::anchor;
use crate::state::contact::{ContactField, ContactForm};

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(message) = form.try_update(ContactForm::submit) {
            crate::util::dialog::acknowledge(message);
        }
    };

    view! {
        <section id=anchor::CONTACT class="section">
            <div class="section__inner">
                <h2 class="section__title">"Get in Touch"</h2>
                <div class="card">
                    <form class="contact-form" on:submit=on_submit>
                        {ContactField::ALL
                            .into_iter()
                            .map(|field| view! { <ContactInput form=form field=field/> })
                            .collect_view()}
                        <button class="contact-form__submit" type="submit">
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

/// One labelled, required, controlled field.
#[component]
fn ContactInput(form: RwSignal<ContactForm>, field: ContactField) -> impl IntoView {
    let value = move || form.with(|f| f.field(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        form.update(|f| f.update_field(field, next));
    };

    let control = match field.input_type() {
        Some(kind) => view! {
            <input
                class="contact-form__input"
                type=kind
                name=field.label().to_ascii_lowercase()
                required=true
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        None => view! {
            <textarea
                class="contact-form__input"
                name=field.label().to_ascii_lowercase()
                rows="4"
                required=true
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
    };

    view! {
        <label class="contact-form__field">
            <span class="contact-form__label">{field.label()}</span>
            {control}
        </label>
    }
}
