//! Page footer: brand mark and copyright line.

use leptos::prelude::*;

use crate::config::{COPYRIGHT_LINE, OWNER_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__logo" aria-hidden="true">"</>"</span>
                <span class="footer__name">{OWNER_NAME}</span>
            </div>
            <p class="footer__copyright">{COPYRIGHT_LINE}</p>
        </footer>
    }
}
