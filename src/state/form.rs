//! Submission state machine for the contact form
//!
//! [`FormMachine`] owns the form data, the per-field errors and the
//! submission status, and is the only place either of them changes. The
//! gateway call is split into two phases so the UI can keep accepting
//! input while a send is in flight: [`FormMachine::begin_submit`] takes
//! the snapshot, [`FormMachine::finish_submit`] folds the outcome back
//! in. [`FormMachine::submit`] composes the two for callers that are
//! happy to await inline.

use super::contact::{ContactFormData, Field, FieldErrors, SubmitStatus};
use super::validate::validate;
use crate::gateway::{SendOutcome, SubmissionGateway};
use crate::notify::Notifier;
use anyhow::Result;
use std::time::{Duration, Instant};

/// How long a terminal status is shown before reverting to idle.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

/// Shown when a delivery failure carries no message of its own.
const FALLBACK_FAILURE_MESSAGE: &str = "Message could not be sent. Please try again later.";

/// Pending auto-reset back to [`SubmitStatus::Idle`].
///
/// There is exactly one slot for this in the machine; arming a new timer
/// replaces the old one, so an earlier deadline can never fire against a
/// newer terminal state.
#[derive(Debug, Clone, Copy)]
struct ResetTimer {
    armed_at: Instant,
}

impl ResetTimer {
    fn armed(now: Instant) -> Self {
        Self { armed_at: now }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.armed_at) >= RESET_DELAY
    }
}

/// State machine driving the contact form workflow.
pub struct FormMachine {
    data: ContactFormData,
    errors: FieldErrors,
    status: SubmitStatus,
    banner: String,
    reset_timer: Option<ResetTimer>,
    notifier: Box<dyn Notifier>,
}

impl FormMachine {
    pub fn new(notifier: Box<dyn Notifier>) -> Self {
        Self {
            data: ContactFormData::default(),
            errors: FieldErrors::default(),
            status: SubmitStatus::Idle,
            banner: String::new(),
            reset_timer: None,
            notifier,
        }
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Banner message for the current terminal status; empty otherwise.
    pub fn banner(&self) -> &str {
        &self.banner
    }

    #[allow(dead_code)]
    pub fn has_pending_reset(&self) -> bool {
        self.reset_timer.is_some()
    }

    /// Set a field's value.
    ///
    /// Always permitted, including while a send is in flight. Clears the
    /// field's error immediately, before any re-validation. An edit while
    /// a terminal status is showing cancels the pending reset and returns
    /// the form to idle.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value.into());
        self.errors.clear(field);
        self.interrupt_terminal();
    }

    /// Append a typed character to a field.
    pub fn input_char(&mut self, field: Field, c: char) {
        let mut value = self.data.get(field).to_string();
        value.push(c);
        self.update_field(field, value);
    }

    /// Remove the last character from a field.
    pub fn backspace(&mut self, field: Field) {
        let mut value = self.data.get(field).to_string();
        value.pop();
        self.update_field(field, value);
    }

    /// Select a collaboration type by id, replacing any previous choice.
    ///
    /// `budget` and `timeline` keep their values; they are merely hidden
    /// from view while no type is selected.
    pub fn select_collaboration(&mut self, id: &str) {
        self.update_field(Field::CollaborationType, id);
    }

    /// First phase of a submission.
    ///
    /// Returns the snapshot the pending send must operate on, or `None`
    /// when nothing was started: a send is already in flight (re-entrant
    /// submits are ignored, the gateway is invoked at most once), or
    /// validation failed (errors recorded, notifier told exactly once).
    pub fn begin_submit(&mut self) -> Option<ContactFormData> {
        if self.status == SubmitStatus::Loading {
            tracing::debug!("submit ignored: a submission is already in flight");
            return None;
        }
        self.interrupt_terminal();

        self.errors = validate(&self.data);
        if self.errors.has_errors() {
            tracing::debug!(error_count = self.errors.error_count(), "submit blocked by validation");
            self.notifier.notify_validation_blocked();
            return None;
        }

        self.status = SubmitStatus::Loading;
        self.banner.clear();
        self.reset_timer = None;
        Some(self.data.clone())
    }

    /// Second phase: fold the delivery outcome back into the machine.
    ///
    /// A result arriving when no send is in flight (the reset already
    /// happened, or teardown started) is ignored.
    pub fn finish_submit(&mut self, result: Result<SendOutcome>, now: Instant) {
        if self.status != SubmitStatus::Loading {
            tracing::debug!("stale submission result ignored");
            return;
        }

        match result {
            Ok(outcome) if outcome.success => {
                self.status = SubmitStatus::Success;
                self.banner = outcome.message;
                self.data = ContactFormData::default();
                self.errors = FieldErrors::default();
            }
            Ok(outcome) => {
                self.status = SubmitStatus::Error;
                self.banner = failure_banner(outcome.message);
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact submission failed");
                self.status = SubmitStatus::Error;
                self.banner = failure_banner(err.to_string());
            }
        }

        // Overwrites any earlier timer; see ResetTimer.
        self.reset_timer = Some(ResetTimer::armed(now));
    }

    /// Validate, deliver, and apply the outcome in one call.
    #[allow(dead_code)]
    pub async fn submit<G>(&mut self, gateway: &G, now: Instant)
    where
        G: SubmissionGateway + ?Sized,
    {
        let Some(snapshot) = self.begin_submit() else {
            return;
        };
        let result = gateway.send(&snapshot).await;
        self.finish_submit(result, now);
    }

    /// Advance time: fire the auto-reset once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        let expired = self
            .reset_timer
            .is_some_and(|timer| timer.is_expired(now));
        if expired && self.status.is_terminal() {
            self.status = SubmitStatus::Idle;
            self.banner.clear();
            self.reset_timer = None;
        }
    }

    /// Teardown hook: make sure no reset fires after the owning view is
    /// gone.
    pub fn cancel_pending_reset(&mut self) {
        self.reset_timer = None;
    }

    fn interrupt_terminal(&mut self) {
        if self.status.is_terminal() {
            self.reset_timer = None;
            self.status = SubmitStatus::Idle;
            self.banner.clear();
        }
    }
}

fn failure_banner(message: String) -> String {
    if message.trim().is_empty() {
        FALLBACK_FAILURE_MESSAGE.to_string()
    } else {
        message
    }
}
