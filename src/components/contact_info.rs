//! Direct contact channels and availability list beside the form.

use leptos::prelude::*;

use crate::config::{CONTACT_EMAIL, GITHUB_HANDLE, GITHUB_URL, LINKEDIN_HANDLE, LINKEDIN_URL};
use crate::content::profile::AVAILABLE_FOR;

#[component]
pub fn ContactInfo() -> impl IntoView {
    let available = AVAILABLE_FOR
        .iter()
        .map(|label| view! { <li class="contact-info__available-item">{*label}</li> })
        .collect_view();

    view! {
        <div class="contact-info">
            <h3>"Get in touch"</h3>
            <a class="contact-info__channel" href=format!("mailto:{CONTACT_EMAIL}")>
                <span class="contact-info__channel-name">"Email"</span>
                <span class="contact-info__channel-value">{CONTACT_EMAIL}</span>
            </a>
            <a class="contact-info__channel" href=GITHUB_URL target="_blank" rel="noopener noreferrer">
                <span class="contact-info__channel-name">"GitHub"</span>
                <span class="contact-info__channel-value">{GITHUB_HANDLE}</span>
            </a>
            <a class="contact-info__channel" href=LINKEDIN_URL target="_blank" rel="noopener noreferrer">
                <span class="contact-info__channel-name">"LinkedIn"</span>
                <span class="contact-info__channel-value">{LINKEDIN_HANDLE}</span>
            </a>
            <hr class="contact-info__separator"/>
            <h4>"Available for"</h4>
            <ul class="contact-info__available">{available}</ul>
        </div>
    }
}
