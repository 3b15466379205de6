//! Contact form controller: field state, validation and relay submission.

use crate::Lifecycle;
use portfolio_sdk::{ContactSubmission, FormRelay};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

/// How long the success/error state stays before the form returns to idle.
pub const STATUS_RESET_DELAY: Duration = Duration::from_secs(4);

pub const MIN_NAME_CHARS: usize = 3;
pub const MIN_MESSAGE_CHARS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl FormStatus {
    /// Label of the submit button in this state.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Idle => "Submit Message",
            Self::Sending => "Sending...",
            Self::Success => "Message Sent!",
            Self::Error => "Failed to Send",
        }
    }

    /// The submit control is disabled while a submission is outstanding.
    #[must_use]
    pub fn is_submit_disabled(&self) -> bool {
        matches!(self, Self::Sending)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}

pub type FieldErrors = BTreeMap<FormField, String>;

/// Check the fields before anything is sent. Lengths are counted in
/// characters after trimming.
#[must_use]
pub fn validate_fields(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if fields.name.trim().chars().count() < MIN_NAME_CHARS {
        errors.insert(
            FormField::Name,
            "Name must be at least 3 characters.".to_string(),
        );
    }
    if fields.email.trim().is_empty() {
        errors.insert(FormField::Email, "Email is required.".to_string());
    }
    if fields.message.trim().chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(
            FormField::Message,
            "Message must be at least 15 characters.".to_string(),
        );
    }
    errors
}

/// How a call to [`ContactForm::submit`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    /// A submission is already outstanding.
    Busy,
    /// The relay accepted the message.
    Sent,
    /// The relay answered but refused the message.
    Rejected,
    /// The relay could not be reached or answered garbage.
    Failed,
    /// The form unmounted before the relay answered.
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormSnapshot {
    pub fields: ContactFields,
    pub errors: FieldErrors,
    pub status: FormStatus,
}

#[derive(Debug, Default)]
struct FormState {
    fields: ContactFields,
    errors: FieldErrors,
    status: FormStatus,
    /// Bumped on every submission so a stale reset timer cannot clobber a
    /// newer status.
    generation: u64,
}

pub struct ContactForm {
    relay: Arc<dyn FormRelay + Send + Sync>,
    state: Arc<Mutex<FormState>>,
    lifecycle: Lifecycle,
    reset_delay: Duration,
}

impl ContactForm {
    pub fn new(relay: Arc<dyn FormRelay + Send + Sync>) -> Self {
        Self::with_reset_delay(relay, STATUS_RESET_DELAY)
    }

    pub fn with_reset_delay(relay: Arc<dyn FormRelay + Send + Sync>, reset_delay: Duration) -> Self {
        Self {
            relay,
            state: Arc::new(Mutex::new(FormState::default())),
            lifecycle: Lifecycle::mount(),
            reset_delay,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn snapshot(&self) -> ContactFormSnapshot {
        let state = self.lock();
        ContactFormSnapshot {
            fields: state.fields.clone(),
            errors: state.errors.clone(),
            status: state.status,
        }
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.lock().status
    }

    #[must_use]
    pub fn fields(&self) -> ContactFields {
        self.lock().fields.clone()
    }

    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        self.lock().errors.clone()
    }

    /// Record a keystroke. Any error shown for `field` is cleared; the field
    /// is not re-validated until the next submit.
    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        let mut state = self.lock();
        *state.fields.get_mut(field) = value.into();
        state.errors.remove(&field);
    }

    /// Tear the form down, cancelling any pending status reset.
    pub fn unmount(&self) {
        self.lifecycle.unmount();
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let (submission, generation) = {
            let mut state = self.lock();
            if state.status == FormStatus::Sending {
                return SubmitOutcome::Busy;
            }

            let errors = validate_fields(&state.fields);
            if !errors.is_empty() {
                tracing::debug!(invalid = errors.len(), "contact form rejected locally");
                state.errors = errors;
                return SubmitOutcome::Invalid;
            }

            state.errors.clear();
            state.status = FormStatus::Sending;
            state.generation += 1;

            let fields = &state.fields;
            let submission = ContactSubmission {
                name: fields.name.clone(),
                email: fields.email.clone(),
                message: fields.message.clone(),
                subject: format!("Portfolio Contact: {}", fields.name),
            };
            (submission, state.generation)
        };

        let result = self.relay.submit(&submission).await;

        if !self.lifecycle.is_mounted() {
            return SubmitOutcome::Discarded;
        }

        let outcome = match result {
            Ok(response) if response.success => SubmitOutcome::Sent,
            Ok(response) => {
                tracing::warn!(
                    provider = self.relay.provider(),
                    message = response.message.as_deref().unwrap_or_default(),
                    "contact relay refused the submission"
                );
                SubmitOutcome::Rejected
            }
            Err(error) => {
                tracing::warn!(%error, provider = self.relay.provider(), "contact relay call failed");
                SubmitOutcome::Failed
            }
        };

        {
            let mut state = self.lock();
            if outcome == SubmitOutcome::Sent {
                state.status = FormStatus::Success;
                state.fields = ContactFields::default();
            } else {
                state.status = FormStatus::Error;
            }
        }
        self.schedule_reset(generation);

        outcome
    }

    fn schedule_reset(&self, generation: u64) {
        let state = self.state.clone();
        let delay = self.reset_delay;
        self.lifecycle.spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.generation == generation
                && matches!(state.status, FormStatus::Success | FormStatus::Error)
            {
                state.status = FormStatus::Idle;
            }
        });
    }
}
