//! Contact form state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::{Notice, SiteEvent};
use crate::session::Session;

/// Options of the subject drop-down.
pub const SUBJECTS: [&str; 5] = [
    "General Inquiry",
    "Technical Support",
    "Partnership",
    "Feedback",
    "Other",
];

/// Raw form fields as posted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Check required fields and the subject option.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingContactFields(missing));
        }
        if !SUBJECTS.contains(&self.subject.as_str()) {
            return Err(ValidationError::UnknownSubject);
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// What happened to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted; the simulated delivery should be scheduled.
    Accepted,
    /// A previous submission is still in flight.
    AlreadySubmitting,
}

#[derive(Debug, Clone, Default)]
pub struct ContactState {
    form: ContactForm,
    submitting: bool,
}

impl ContactState {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Accept a submission and disable further submits until [`Self::complete`].
    pub fn submit(&mut self, form: ContactForm) -> Result<SubmitOutcome, ValidationError> {
        if self.submitting {
            return Ok(SubmitOutcome::AlreadySubmitting);
        }
        form.validate()?;
        self.form = form;
        self.submitting = true;
        Ok(SubmitOutcome::Accepted)
    }

    /// Finish the simulated delivery: clear every field and re-enable submit.
    pub fn complete(&mut self) -> Notice {
        self.form = ContactForm::default();
        self.submitting = false;
        Notice::success(
            "Message sent!",
            "We'll get back to you as soon as possible.",
        )
    }
}

/// Accept a contact submission for `session` and schedule its delivery.
///
/// Delivery always succeeds: after `delay` the fields are cleared, submit is
/// re-enabled and a "Message sent!" notice is published.
pub fn submit(
    session: &Session,
    form: ContactForm,
    delay: Duration,
) -> Result<SubmitOutcome, ValidationError> {
    let outcome = session.with_contact(|state| state.submit(form))?;
    if outcome == SubmitOutcome::AlreadySubmitting {
        tracing::debug!(session_id = %session.id(), "Contact submission already in flight");
        return Ok(outcome);
    }

    let target = session.clone();
    session.defer(delay, move || {
        let notice = target.with_contact(ContactState::complete);
        tracing::info!(name: "contact.sent", session_id = %target.id(), "Contact message delivered");
        target.emit(SiteEvent::ContactSent);
        target.emit(SiteEvent::Notice { notice });
    });
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;

    fn ann() -> ContactForm {
        ContactForm {
            name: "Ann".into(),
            email: "a@b.com".into(),
            phone: String::new(),
            subject: "General Inquiry".into(),
            message: "Hi".into(),
        }
    }

    #[test]
    fn test_phone_is_optional() {
        assert!(ann().validate().is_ok());
    }

    #[test]
    fn test_reports_missing_fields_in_form_order() {
        let form = ContactForm {
            email: "a@b.com".into(),
            message: "  ".into(),
            ..ContactForm::default()
        };
        assert_eq!(
            form.validate().unwrap_err(),
            ValidationError::MissingContactFields(vec!["name", "subject", "message"])
        );
    }

    #[test]
    fn test_subject_must_be_an_option() {
        let form = ContactForm {
            subject: "Billing".into(),
            ..ann()
        };
        assert_eq!(form.validate().unwrap_err(), ValidationError::UnknownSubject);
    }

    #[test]
    fn test_submit_then_complete_resets_fields() {
        let mut state = ContactState::default();
        assert_eq!(state.submit(ann()).unwrap(), SubmitOutcome::Accepted);
        assert!(state.is_submitting());
        assert_eq!(state.form().name, "Ann");

        assert_eq!(
            state.submit(ann()).unwrap(),
            SubmitOutcome::AlreadySubmitting
        );

        let notice = state.complete();
        assert_eq!(notice.title, "Message sent!");
        assert!(!state.is_submitting());
        assert!(state.form().is_empty());
    }

    #[test]
    fn test_invalid_submit_leaves_state_alone() {
        let mut state = ContactState::default();
        assert!(state.submit(ContactForm::default()).is_err());
        assert!(!state.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delivery_resets_form_and_notifies() {
        let store = SessionStore::new();
        let session = store.create();
        let mut events = session.subscribe();
        let delay = Duration::from_millis(1500);

        assert_eq!(
            submit(&session, ann(), delay).unwrap(),
            SubmitOutcome::Accepted
        );
        assert!(session.contact().is_submitting());

        assert_eq!(
            submit(&session, ann(), delay).unwrap(),
            SubmitOutcome::AlreadySubmitting
        );

        tokio::time::sleep(Duration::from_millis(1501)).await;
        let state = session.contact();
        assert!(!state.is_submitting());
        assert!(state.form().is_empty());

        assert_eq!(events.try_recv().unwrap(), SiteEvent::ContactSent);
        match events.try_recv().unwrap() {
            SiteEvent::Notice { notice } => {
                assert_eq!(notice.title, "Message sent!");
                assert_eq!(notice.description, "We'll get back to you as soon as possible.");
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(events.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_submission_schedules_nothing() {
        let store = SessionStore::new();
        let session = store.create();
        let mut events = session.subscribe();

        let form = ContactForm {
            name: "Ann".into(),
            ..ContactForm::default()
        };
        assert!(submit(&session, form, Duration::from_millis(10)).is_err());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(events.try_recv().is_err());
        assert!(!session.contact().is_submitting());
    }
}
