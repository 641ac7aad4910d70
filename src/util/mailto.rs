//! `mailto:` URI construction for the contact form.
//!
//! The encoded output must match the browser's component encoding byte for
//! byte: ASCII alphanumerics and `- _ . ! ~ * ' ( )` pass through, every
//! other UTF-8 byte becomes `%XX` with upper-case hex.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::{CONTACT_EMAIL, FALLBACK_SUBJECT, OWNER_NAME};
use crate::state::contact::ContactForm;

const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one URI component.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Subject line, falling back when the field is empty.
#[must_use]
pub fn subject(form: &ContactForm) -> &str {
    if form.subject.is_empty() { FALLBACK_SUBJECT } else { &form.subject }
}

/// Plain-text message body.
#[must_use]
pub fn body(form: &ContactForm) -> String {
    format!(
        "Hi {OWNER_NAME},\n\nName: {name}\nEmail: {email}\n\nMessage:\n{message}\n\nBest regards,\n{name}",
        name = form.name,
        email = form.email,
        message = form.message,
    )
}

/// Full `mailto:` URI addressed to the fixed contact recipient.
#[must_use]
pub fn compose(form: &ContactForm) -> String {
    format!(
        "mailto:{CONTACT_EMAIL}?subject={}&body={}",
        encode_component(subject(form)),
        encode_component(&body(form)),
    )
}
