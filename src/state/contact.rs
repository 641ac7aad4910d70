//! Contact form fields and the idle/submitting controller.
//!
//! DESIGN
//! ======
//! Submission is simulated: the form builds a `mailto:` URI, hands it to the
//! mail launcher, and clears itself after a fixed delay regardless of what
//! the mail client does. A launch error keeps the visitor's input so they
//! can retry or copy it.
//!
//! Required-field checks belong to the input surface (`required` inputs);
//! the controller accepts whatever it is given.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

use crate::config::FORM_RESET_DELAY;
use crate::util::mail::{LaunchError, MailLauncher};
use crate::util::mailto;
use crate::util::timer::Scheduler;

/// The four contact fields. Always defined; empty means blank.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Field selector for input events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Input `name` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// True when every field is non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|v| !v.is_empty())
    }
}

/// What a submit action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// URI handed to the mail client; reset the form after `reset_after`.
    Dispatched { uri: String, reset_after: Duration },
    /// The launcher failed; the form is idle with its fields intact.
    Failed(LaunchError),
    /// A submission is already in flight.
    Busy,
}

/// Form fields plus the submitting flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub submitting: bool,
}

impl ContactState {
    /// Update one field in place. Allowed while submitting.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
    }

    /// Move to submitting and open the mail client.
    pub fn submit(&mut self, launcher: &dyn MailLauncher) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::Busy;
        }
        self.submitting = true;

        let uri = mailto::compose(&self.form);
        match launcher.open(&uri) {
            Ok(()) => SubmitOutcome::Dispatched { uri, reset_after: FORM_RESET_DELAY },
            Err(err) => {
                log::error!("error opening mail client: {err}");
                self.submitting = false;
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Clear every field and return to idle.
    pub fn finish_submission(&mut self) {
        self.form = ContactForm::default();
        self.submitting = false;
    }
}

/// Schedule the post-dispatch reset.
///
/// `reset` returns `false` when the form no longer exists (the page was
/// unmounted before the timer fired); that case is logged and ignored.
pub fn schedule_reset<F>(scheduler: &dyn Scheduler, outcome: &SubmitOutcome, reset: F)
where
    F: FnOnce() -> bool + Send + 'static,
{
    let SubmitOutcome::Dispatched { reset_after, .. } = outcome else {
        return;
    };
    scheduler.after(
        *reset_after,
        Box::new(move || {
            if !reset() {
                log::debug!("contact form gone before reset; skipping");
            }
        }),
    );
}
