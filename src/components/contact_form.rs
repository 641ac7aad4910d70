//! Contact form that hands a prefilled message to the visitor's mail client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field state and the idle/submitting transitions live in
//! `state::contact`. This component binds inputs, enforces the required
//! fields through the inputs themselves, and schedules the delayed reset.
//! The reset writes through `try_update`, so a timer that outlives the
//! form is a no-op.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use crate::state::contact::{ContactField, ContactState, SubmitOutcome, schedule_reset};
use crate::util::env::Environment;
use crate::util::mail::MailLauncher;
use crate::util::timer::Scheduler;

/// Submit the form held in `contact` and schedule its reset. Returns `None`
/// when the form has already been disposed.
pub(crate) fn submit_contact(
    contact: RwSignal<ContactState>,
    mail: &dyn MailLauncher,
    scheduler: &dyn Scheduler,
) -> Option<SubmitOutcome> {
    let outcome = contact.try_update(|c| c.submit(mail))?;
    schedule_reset(scheduler, &outcome, move || contact.try_update(ContactState::finish_submission).is_some());
    Some(outcome)
}

pub(crate) fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Opening Email..." } else { "Send Message" }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let env = expect_context::<Environment>();
    let contact = RwSignal::new(ContactState::default());

    let bind = move |field: ContactField| {
        move |ev: leptos::ev::Event| contact.update(|c| c.set_field(field, event_target_value(&ev)))
    };
    let value = move |field: ContactField| move || contact.with(|c| c.form.get(field).to_owned());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_contact(contact, env.mail.as_ref(), env.scheduler.as_ref());
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="contact-form__row">
                <label class="contact-form__field">
                    <span>"Name"</span>
                    <input
                        name=ContactField::Name.name()
                        type="text"
                        placeholder="Your name"
                        required=true
                        prop:value=value(ContactField::Name)
                        on:input=bind(ContactField::Name)
                    />
                </label>
                <label class="contact-form__field">
                    <span>"Email"</span>
                    <input
                        name=ContactField::Email.name()
                        type="email"
                        placeholder="your@email.com"
                        required=true
                        prop:value=value(ContactField::Email)
                        on:input=bind(ContactField::Email)
                    />
                </label>
            </div>
            <label class="contact-form__field">
                <span>"Subject"</span>
                <input
                    name=ContactField::Subject.name()
                    type="text"
                    placeholder="Project discussion"
                    required=true
                    prop:value=value(ContactField::Subject)
                    on:input=bind(ContactField::Subject)
                />
            </label>
            <label class="contact-form__field">
                <span>"Message"</span>
                <textarea
                    name=ContactField::Message.name()
                    rows="6"
                    placeholder="Tell me about your project..."
                    required=true
                    prop:value=value(ContactField::Message)
                    on:input=bind(ContactField::Message)
                ></textarea>
            </label>
            <button
                class="btn btn--primary contact-form__submit"
                type="submit"
                disabled=move || contact.with(|c| c.submitting)
            >
                {move || submit_label(contact.with(|c| c.submitting))}
            </button>
        </form>
    }
}
