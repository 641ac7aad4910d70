use std::sync::{Arc, Mutex, Weak};

use super::*;
use crate::util::mail::LaunchError;
use crate::util::testing::{FailingLauncher, ManualScheduler, RecordingLauncher};

fn filled() -> ContactState {
    let mut state = ContactState::default();
    state.set_field(ContactField::Name, "Jane".to_owned());
    state.set_field(ContactField::Email, "jane@x.com".to_owned());
    state.set_field(ContactField::Subject, "Hi".to_owned());
    state.set_field(ContactField::Message, "Hello".to_owned());
    state
}

// =============================================================
// Field updates
// =============================================================

#[test]
fn default_state_is_idle_with_empty_fields() {
    let state = ContactState::default();
    assert!(!state.submitting);
    assert_eq!(state.form, ContactForm::default());
    assert_eq!(state.form.name, "");
    assert!(!state.form.is_complete());
}

#[test]
fn set_field_updates_only_that_field() {
    let mut state = ContactState::default();
    state.set_field(ContactField::Email, "a@b.com".to_owned());
    assert_eq!(state.form.get(ContactField::Email), "a@b.com");
    assert_eq!(state.form.get(ContactField::Name), "");
    assert_eq!(state.form.get(ContactField::Subject), "");
    assert_eq!(state.form.get(ContactField::Message), "");
}

#[test]
fn field_updates_apply_in_delivery_order() {
    let mut state = ContactState::default();
    for value in ["J", "Ja", "Jan", "Jane"] {
        state.set_field(ContactField::Name, value.to_owned());
    }
    assert_eq!(state.form.name, "Jane");
}

#[test]
fn field_names_match_input_attributes() {
    let names: Vec<&str> = [ContactField::Name, ContactField::Email, ContactField::Subject, ContactField::Message]
        .iter()
        .map(|f| f.name())
        .collect();
    assert_eq!(names, vec!["name", "email", "subject", "message"]);
}

#[test]
fn is_complete_requires_every_field() {
    let mut state = filled();
    assert!(state.form.is_complete());
    state.set_field(ContactField::Message, String::new());
    assert!(!state.form.is_complete());
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_dispatches_mailto_and_enters_submitting() {
    let launcher = RecordingLauncher::default();
    let mut state = filled();
    let outcome = state.submit(&launcher);

    assert!(state.submitting);
    let opened = launcher.opened();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].starts_with("mailto:allainralphlegaspi@gmail.com?subject=Hi&body=Hi%20Allain%2C"));
    assert_eq!(
        outcome,
        SubmitOutcome::Dispatched { uri: opened[0].clone(), reset_after: Duration::from_millis(1000) }
    );
    // Fields are untouched until the reset fires.
    assert_eq!(state.form.name, "Jane");
}

#[test]
fn field_changes_while_submitting_keep_submitting() {
    let launcher = RecordingLauncher::default();
    let mut state = filled();
    state.submit(&launcher);
    state.set_field(ContactField::Message, "Hello again".to_owned());
    assert!(state.submitting);
    assert_eq!(state.form.message, "Hello again");
}

#[test]
fn submit_while_submitting_is_ignored() {
    let launcher = RecordingLauncher::default();
    let mut state = filled();
    state.submit(&launcher);
    assert_eq!(state.submit(&launcher), SubmitOutcome::Busy);
    assert_eq!(launcher.opened().len(), 1);
}

#[test]
fn launch_failure_returns_to_idle_and_keeps_fields() {
    let launcher = FailingLauncher(LaunchError::Rejected("no handler for mailto".to_owned()));
    let mut state = filled();
    let before = state.form.clone();

    let outcome = state.submit(&launcher);
    assert_eq!(outcome, SubmitOutcome::Failed(LaunchError::Rejected("no handler for mailto".to_owned())));
    assert!(!state.submitting);
    assert_eq!(state.form, before);
}

#[test]
fn retry_after_failure_can_dispatch() {
    let mut state = filled();
    state.submit(&FailingLauncher(LaunchError::NoWindow));
    let launcher = RecordingLauncher::default();
    assert!(matches!(state.submit(&launcher), SubmitOutcome::Dispatched { .. }));
}

#[test]
fn finish_submission_clears_fields_and_goes_idle() {
    let mut state = filled();
    state.submit(&RecordingLauncher::default());
    state.finish_submission();
    assert_eq!(state, ContactState::default());
}

// =============================================================
// Delayed reset
// =============================================================

#[test]
fn reset_fires_exactly_after_the_delay() {
    let launcher = RecordingLauncher::default();
    let scheduler = ManualScheduler::default();
    let shared = Arc::new(Mutex::new(filled()));

    let outcome = shared.lock().map(|mut s| s.submit(&launcher)).unwrap_or(SubmitOutcome::Busy);
    let target = shared.clone();
    schedule_reset(&scheduler, &outcome, move || {
        target.lock().map(|mut s| s.finish_submission()).is_ok()
    });
    assert_eq!(scheduler.pending(), 1);

    scheduler.advance(Duration::from_millis(999));
    {
        let state = shared.lock().unwrap();
        assert!(state.submitting);
        assert_eq!(state.form.subject, "Hi");
    }

    scheduler.advance(Duration::from_millis(1));
    let state = shared.lock().unwrap();
    assert!(!state.submitting);
    assert_eq!(state.form, ContactForm::default());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn failed_submission_schedules_nothing() {
    let scheduler = ManualScheduler::default();
    let mut state = filled();
    let outcome = state.submit(&FailingLauncher(LaunchError::Unavailable));
    schedule_reset(&scheduler, &outcome, || true);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn reset_reporting_missing_target_is_skipped() {
    let scheduler = ManualScheduler::default();
    let shared = Arc::new(Mutex::new(filled()));
    let outcome = shared
        .lock()
        .map(|mut s| s.submit(&RecordingLauncher::default()))
        .unwrap_or(SubmitOutcome::Busy);

    let weak: Weak<Mutex<ContactState>> = Arc::downgrade(&shared);
    schedule_reset(&scheduler, &outcome, move || {
        let Some(target) = weak.upgrade() else {
            return false;
        };
        target.lock().map(|mut s| s.finish_submission()).is_ok()
    });

    drop(shared);
    scheduler.advance(Duration::from_millis(1000));
    assert_eq!(scheduler.pending(), 0);
}
