//! Contact form state machine
//!
//! ```text
//! Editing --submit (all fields filled)--> Submitted --3000 ms--> Editing (cleared)
//! ```
//!
//! The reset timer is owned by [`ContactFlow`]. Tearing the flow down (or
//! dropping it) cancels the timer, and a timer that still fires after the flow
//! is gone finds nothing to mutate.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::timer::Scheduler;

/// Delay before the acknowledgment is replaced by a fresh form.
pub const RESET_DELAY_MS: u32 = 3000;

/// Upper bound on a single field accepted by the endpoint.
pub const MAX_FIELD_CHARS: usize = 5000;

/// The four required inputs of the contact form.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("company")]
    Company,
    #[display("project")]
    Project,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Company,
        ContactField::Project,
    ];

    /// Form control name, also used as its DOM id.
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Company => "company",
            ContactField::Project => "project",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "What is your name?",
            ContactField::Email => "What is your email?",
            ContactField::Company => "What is the name of your company?",
            ContactField::Project => "Tell us a bit more about your project",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Enter your name",
            ContactField::Email => "Enter your email",
            ContactField::Company => "Enter your company name",
            ContactField::Project => "Describe your project...",
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("The {0} field is required")]
    MissingField(ContactField),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("The {field} field must be at most {max} characters")]
    FieldTooLong { field: ContactField, max: usize },

    #[error("The form has already been submitted")]
    AlreadySubmitted,

    #[error("Could not deliver the message: {0}")]
    Delivery(String),
}

/// Which of the two views the contact section shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Values of the contact form plus its submission flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub company: String,
    pub project: String,
    pub submitted: bool,
}

impl ContactFormState {
    pub fn phase(&self) -> FormPhase {
        if self.submitted {
            FormPhase::Submitted
        } else {
            FormPhase::Editing
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Project => &self.project,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Project => &mut self.project,
        };
        *slot = value.into();
    }

    /// Required fields that are still empty, in form order.
    ///
    /// Matches the browser's `required` check: any non-empty value passes.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Back to a blank, editable form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Payload sent to `POST /api/contact`.
///
/// Absent keys deserialize as empty strings so they are reported by
/// [`validate`](Self::validate) like blank fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub project: String,
}

impl ContactSubmission {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Project => &self.project,
        }
    }

    /// Server-side checks; stricter than the browser's `required`.
    pub fn validate(&self) -> Result<(), ContactError> {
        for field in ContactField::ALL {
            let value = self.get(field);
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
            if value.chars().count() > MAX_FIELD_CHARS {
                return Err(ContactError::FieldTooLong {
                    field,
                    max: MAX_FIELD_CHARS,
                });
            }
        }
        validate_email(self.email.trim())
    }
}

impl From<&ContactFormState> for ContactSubmission {
    fn from(state: &ContactFormState) -> Self {
        Self {
            name: state.name.clone(),
            email: state.email.clone(),
            company: state.company.clone(),
            project: state.project.clone(),
        }
    }
}

/// Response body of a successful `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub success: bool,
    pub message: String,
}

fn validate_email(email: &str) -> Result<(), ContactError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ContactError::InvalidEmail);
    };
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return Err(ContactError::InvalidEmail);
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return Err(ContactError::InvalidEmail);
    };
    if host.is_empty() || tld.is_empty() {
        return Err(ContactError::InvalidEmail);
    }
    Ok(())
}

/// Contact form state with its reset timer.
pub struct ContactFlow<S: Scheduler> {
    state: Rc<RefCell<ContactFormState>>,
    observer: Rc<dyn Fn(&ContactFormState)>,
    scheduler: S,
    pending_reset: Option<S::Handle>,
}

impl<S: Scheduler> ContactFlow<S> {
    /// `observer` is called with a snapshot after every state change.
    pub fn new(scheduler: S, observer: impl Fn(&ContactFormState) + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(ContactFormState::default())),
            observer: Rc::new(observer),
            scheduler,
            pending_reset: None,
        }
    }

    pub fn state(&self) -> ContactFormState {
        self.state.borrow().clone()
    }

    pub fn phase(&self) -> FormPhase {
        self.state.borrow().phase()
    }

    /// Whether a reset is scheduled and has not fired yet.
    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset.is_some() && self.state.borrow().submitted
    }

    /// Assign one field. Ignored outside `Editing` (the form is not shown then).
    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        {
            let mut state = self.state.borrow_mut();
            if state.submitted {
                return;
            }
            state.set(field, value);
        }
        self.notify();
    }

    /// Accept the form if every required field is filled, show the
    /// acknowledgment and schedule the reset.
    pub fn submit(&mut self) -> Result<ContactSubmission, ContactError> {
        let submission = {
            let mut state = self.state.borrow_mut();
            if state.submitted {
                return Err(ContactError::AlreadySubmitted);
            }
            if let Some(field) = state.missing_fields().first() {
                return Err(ContactError::MissingField(*field));
            }
            state.submitted = true;
            ContactSubmission::from(&*state)
        };
        self.notify();

        let state = Rc::downgrade(&self.state);
        let observer = Rc::downgrade(&self.observer);
        self.pending_reset = Some(
            self.scheduler
                .schedule_once(RESET_DELAY_MS, Box::new(move || reset(&state, &observer))),
        );

        Ok(submission)
    }

    /// Cancel the pending reset; the flow stays readable but inert.
    pub fn teardown(&mut self) {
        self.pending_reset = None;
    }

    fn notify(&self) {
        let snapshot = self.state();
        (self.observer)(&snapshot);
    }
}

fn reset(state: &Weak<RefCell<ContactFormState>>, observer: &Weak<dyn Fn(&ContactFormState)>) {
    let (Some(state), Some(observer)) = (state.upgrade(), observer.upgrade()) else {
        return;
    };
    let snapshot = {
        let mut state = state.borrow_mut();
        state.reset();
        state.clone()
    };
    observer(&snapshot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timer::testing::ManualScheduler;

    fn filled(flow: &mut ContactFlow<ManualScheduler>) {
        flow.update(ContactField::Name, "Ada");
        flow.update(ContactField::Email, "ada@example.com");
        flow.update(ContactField::Company, "Analytical Engines");
        flow.update(ContactField::Project, "A new brand");
    }

    fn valid_submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: "Analytical Engines".to_string(),
            project: "A new brand".to_string(),
        }
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in ContactField::ALL {
            assert_eq!(ContactField::from_name(field.name()), Some(field));
            assert_eq!(field.to_string(), field.name());
        }
        assert_eq!(ContactField::from_name("phone"), None);
    }

    #[test]
    fn test_update_assigns_by_field() {
        let mut flow = ContactFlow::new(ManualScheduler::new(), |_| {});
        flow.update(ContactField::Company, "Acme");

        let state = flow.state();
        assert_eq!(state.company, "Acme");
        assert_eq!(state.name, "");
        assert_eq!(state.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_submit_with_any_empty_field_stays_editing() {
        for skipped in ContactField::ALL {
            let scheduler = ManualScheduler::new();
            let mut flow = ContactFlow::new(scheduler.clone(), |_| {});
            for field in ContactField::ALL {
                if field != skipped {
                    flow.update(field, "value");
                }
            }

            assert_eq!(flow.submit(), Err(ContactError::MissingField(skipped)));
            assert_eq!(flow.phase(), FormPhase::Editing);
            assert_eq!(scheduler.pending_count(), 0);
        }
    }

    #[test]
    fn test_submit_then_reset_after_exactly_3000ms() {
        let scheduler = ManualScheduler::new();
        let mut flow = ContactFlow::new(scheduler.clone(), |_| {});
        filled(&mut flow);

        let submission = flow.submit().expect("form is complete");
        assert_eq!(submission, valid_submission());
        assert_eq!(flow.phase(), FormPhase::Submitted);
        assert!(flow.has_pending_reset());

        scheduler.advance(2999);
        assert_eq!(flow.phase(), FormPhase::Submitted);

        scheduler.advance(1);
        assert_eq!(flow.state(), ContactFormState::default());
        assert!(!flow.has_pending_reset());
    }

    #[test]
    fn test_observer_sees_every_transition() {
        let scheduler = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let mut flow = ContactFlow::new(scheduler.clone(), move |s: &ContactFormState| {
            log.borrow_mut().push(s.phase())
        });
        filled(&mut flow);
        flow.submit().expect("form is complete");
        scheduler.advance(u64::from(RESET_DELAY_MS));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[4], FormPhase::Submitted);
        assert_eq!(seen[5], FormPhase::Editing);
    }

    #[test]
    fn test_updates_ignored_while_submitted() {
        let scheduler = ManualScheduler::new();
        let mut flow = ContactFlow::new(scheduler.clone(), |_| {});
        filled(&mut flow);
        flow.submit().expect("form is complete");

        flow.update(ContactField::Name, "Grace");
        assert_eq!(flow.state().name, "Ada");
        assert_eq!(flow.submit(), Err(ContactError::AlreadySubmitted));
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_teardown_before_timer_prevents_mutation() {
        let scheduler = ManualScheduler::new();
        let notifications = Rc::new(RefCell::new(0));
        let counter = notifications.clone();
        let mut flow = ContactFlow::new(scheduler.clone(), move |_: &ContactFormState| {
            *counter.borrow_mut() += 1
        });
        filled(&mut flow);
        flow.submit().expect("form is complete");
        let before = *notifications.borrow();

        flow.teardown();
        scheduler.advance(10_000);

        assert_eq!(flow.phase(), FormPhase::Submitted);
        assert_eq!(*notifications.borrow(), before);
    }

    #[test]
    fn test_dropping_flow_cancels_timer() {
        let scheduler = ManualScheduler::new();
        let mut flow = ContactFlow::new(scheduler.clone(), |_| {});
        filled(&mut flow);
        flow.submit().expect("form is complete");
        assert_eq!(scheduler.pending_count(), 1);

        drop(flow);

        assert_eq!(scheduler.pending_count(), 0);
        scheduler.advance(10_000);
    }

    #[test]
    fn test_second_round_after_reset() {
        let scheduler = ManualScheduler::new();
        let mut flow = ContactFlow::new(scheduler.clone(), |_| {});
        filled(&mut flow);
        flow.submit().expect("form is complete");
        scheduler.advance(3000);

        assert_eq!(
            flow.submit(),
            Err(ContactError::MissingField(ContactField::Name))
        );
        filled(&mut flow);
        assert!(flow.submit().is_ok());
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_validate_accepts_complete_submission() {
        assert_eq!(valid_submission().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_whitespace_only() {
        let submission = ContactSubmission {
            company: "   ".to_string(),
            ..valid_submission()
        };
        assert_eq!(
            submission.validate(),
            Err(ContactError::MissingField(ContactField::Company))
        );
    }

    #[test]
    fn test_validate_rejects_bad_emails() {
        for email in ["ada", "@example.com", "ada@", "ada@example", "ada@@x.io", "a da@x.io", "ada@.io"] {
            let submission = ContactSubmission {
                email: email.to_string(),
                ..valid_submission()
            };
            assert_eq!(
                submission.validate(),
                Err(ContactError::InvalidEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn test_validate_rejects_oversized_field() {
        let submission = ContactSubmission {
            project: "x".repeat(MAX_FIELD_CHARS + 1),
            ..valid_submission()
        };
        assert_eq!(
            submission.validate(),
            Err(ContactError::FieldTooLong {
                field: ContactField::Project,
                max: MAX_FIELD_CHARS
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(ContactField::Email).to_string(),
            "The email field is required"
        );
    }
}
