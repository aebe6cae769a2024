//! Contact form submission state machine
//!
//! ```text
//! Idle ──submit(valid)──▶ Submitting ──ok──▶ Submitted ──reset──▶ Idle
//!  │                           │
//!  └─submit(invalid)─▶ Invalid └──err──▶ Idle (values kept)
//! ```
//!
//! The flow never talks to the network on its own. [`begin_submit`] hands
//! back the payload snapshot, the caller performs exactly one endpoint
//! call, and [`complete`] records the outcome. [`submit`] does all three
//! for callers that can hold the flow across an await.
//!
//! [`begin_submit`]: ContactSubmissionFlow::begin_submit
//! [`complete`]: ContactSubmissionFlow::complete
//! [`submit`]: ContactSubmissionFlow::submit

use super::endpoint::{ContactEndpoint, SubmissionError};
use super::model::{ContactForm, ContactRequest, Field};
use super::validation::FieldErrors;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// Editing, nothing sent yet
    Idle,
    /// Last submit attempt failed validation; no request was made
    Invalid(FieldErrors),
    /// Request in flight; the submit control is disabled
    Submitting,
    /// Endpoint accepted the inquiry; the form is replaced by a confirmation
    Submitted,
}

impl SubmissionState {
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Invalid(_) => "invalid",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Submitted => "submitted",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("validation failed:\n{0}")]
    Validation(FieldErrors),

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("inquiry already submitted; reset to start a new one")]
    AlreadySubmitted,

    #[error("no submission in flight")]
    NotSubmitting,

    #[error("nothing to reset; the inquiry has not been submitted")]
    NotSubmitted,
}

/// Result of a completed endpoint call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    /// The endpoint failed or rejected the inquiry. The flow is back to
    /// `Idle` with every value intact; nothing is shown to the user.
    Failed(SubmissionError),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmissionFlow {
    form: ContactForm,
    state: SubmissionState,
}

impl Default for ContactSubmissionFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactSubmissionFlow {
    pub fn new() -> Self {
        Self::with_form(ContactForm::default())
    }

    /// Start from pre-filled values
    pub fn with_form(form: ContactForm) -> Self {
        Self {
            form,
            state: SubmissionState::Idle,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, SubmissionState::Submitted)
    }

    /// Message currently displayed under a field
    pub fn error_for(&self, field: Field) -> Option<&str> {
        match &self.state {
            SubmissionState::Invalid(errors) => errors.get(field),
            _ => None,
        }
    }

    /// Edit one field.
    ///
    /// After a failed submit the edited field is re-checked so its message
    /// disappears as soon as the value is acceptable.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FlowError> {
        if self.is_submitted() {
            return Err(FlowError::AlreadySubmitted);
        }

        self.form.set(field, value);

        if let SubmissionState::Invalid(errors) = &mut self.state {
            match self.form.validate_field(field) {
                Some(message) => {
                    errors.remove(field);
                    errors.insert(field, message);
                }
                None => {
                    errors.remove(field);
                }
            }
            if errors.is_empty() {
                self.state = SubmissionState::Idle;
            }
        }

        Ok(())
    }

    /// Validate and move to `Submitting`, returning the payload to send.
    ///
    /// On validation failure the flow moves to `Invalid` and no request
    /// must be made.
    pub fn begin_submit(&mut self) -> Result<ContactRequest, FlowError> {
        match self.state {
            SubmissionState::Submitting => return Err(FlowError::SubmissionInFlight),
            SubmissionState::Submitted => return Err(FlowError::AlreadySubmitted),
            SubmissionState::Idle | SubmissionState::Invalid(_) => {}
        }

        match self.form.validate() {
            Ok(request) => {
                info!(
                    "Submitting contact inquiry from {} ({})",
                    request.email(),
                    request.help_type()
                );
                self.state = SubmissionState::Submitting;
                Ok(request)
            }
            Err(errors) => {
                self.state = SubmissionState::Invalid(errors.clone());
                Err(FlowError::Validation(errors))
            }
        }
    }

    /// Record the endpoint's answer for the in-flight submission
    pub fn complete(
        &mut self,
        result: Result<(), SubmissionError>,
    ) -> Result<SubmitOutcome, FlowError> {
        if !self.is_submitting() {
            return Err(FlowError::NotSubmitting);
        }

        match result {
            Ok(()) => {
                info!("Contact inquiry accepted");
                self.state = SubmissionState::Submitted;
                Ok(SubmitOutcome::Submitted)
            }
            Err(e) => {
                error!("Failed to send contact inquiry: {}", e);
                self.state = SubmissionState::Idle;
                Ok(SubmitOutcome::Failed(e))
            }
        }
    }

    /// Validate, post once, and record the outcome
    pub async fn submit<E>(&mut self, endpoint: &E) -> Result<SubmitOutcome, FlowError>
    where
        E: ContactEndpoint + ?Sized,
    {
        let request = self.begin_submit()?;
        let result = endpoint.submit(&request).await;
        self.complete(result)
    }

    /// Clear every field after a successful submission
    pub fn reset(&mut self) -> Result<(), FlowError> {
        if !self.is_submitted() {
            return Err(FlowError::NotSubmitted);
        }

        self.form = ContactForm::default();
        self.state = SubmissionState::Idle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct RecordingEndpoint {
        calls: AtomicUsize,
        last: Mutex<Option<ContactRequest>>,
        reject_with: Option<SubmissionError>,
    }

    impl RecordingEndpoint {
        fn accepting() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
                reject_with: None,
            }
        }

        fn rejecting(error: SubmissionError) -> Self {
            Self {
                reject_with: Some(error),
                ..Self::accepting()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContactEndpoint for RecordingEndpoint {
        async fn submit(&self, request: &ContactRequest) -> Result<(), SubmissionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(request.clone());
            match &self.reject_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn filled_flow() -> ContactSubmissionFlow {
        let mut flow = ContactSubmissionFlow::new();
        let values = [
            (Field::FirstName, "Jo"),
            (Field::LastName, "Doe"),
            (Field::Email, "a@b.com"),
            (Field::Phone, "1234567890"),
            (Field::Company, "Ac"),
            (Field::JobTitle, "Eng"),
            (Field::BusinessSegment, "technology"),
            (Field::HelpType, "quote"),
            (Field::ReferralSource, "web"),
        ];
        for (field, value) in values {
            flow.set_field(field, value).unwrap();
        }
        flow
    }

    #[tokio::test]
    async fn test_valid_inquiry_posts_once_and_confirms() {
        let endpoint = RecordingEndpoint::accepting();
        let mut flow = filled_flow();

        let outcome = flow.submit(&endpoint).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Submitted);
        assert_eq!(endpoint.calls(), 1);
        assert!(flow.is_submitted());
        let sent = endpoint.last.lock().unwrap().clone().unwrap();
        assert_eq!(sent.referral_source(), "web");
    }

    #[tokio::test]
    async fn test_invalid_email_never_posts() {
        let endpoint = RecordingEndpoint::accepting();
        let mut flow = filled_flow();
        flow.set_field(Field::Email, "not-an-email").unwrap();

        let err = flow.submit(&endpoint).await.unwrap_err();

        match err {
            FlowError::Validation(errors) => {
                assert_eq!(errors.get(Field::Email), Some("Invalid email address"))
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(endpoint.calls(), 0);
        assert_eq!(flow.error_for(Field::Email), Some("Invalid email address"));
        assert_eq!(flow.state().name(), "invalid");
    }

    #[tokio::test]
    async fn test_each_missing_field_blocks_the_post() {
        for field in Field::ALL.into_iter().filter(Field::is_required) {
            let endpoint = RecordingEndpoint::accepting();
            let mut flow = filled_flow();
            flow.set_field(field, "").unwrap();

            assert!(flow.submit(&endpoint).await.is_err());
            assert_eq!(endpoint.calls(), 0, "field {}", field);
            assert!(flow.error_for(field).is_some());
        }
    }

    #[tokio::test]
    async fn test_failure_returns_to_idle_with_values_kept() {
        let endpoint = RecordingEndpoint::rejecting(SubmissionError::Rejected { status: 500 });
        let mut flow = filled_flow();
        let before = flow.form().clone();

        let outcome = flow.submit(&endpoint).await.unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(SubmissionError::Rejected { status: 500 })
        );
        assert_eq!(endpoint.calls(), 1);
        assert_eq!(flow.state(), &SubmissionState::Idle);
        assert_eq!(flow.form(), &before);
    }

    #[tokio::test]
    async fn test_can_resubmit_after_failure() {
        let failing = RecordingEndpoint::rejecting(SubmissionError::Transport("refused".into()));
        let accepting = RecordingEndpoint::accepting();
        let mut flow = filled_flow();

        assert!(!flow.submit(&failing).await.unwrap().is_submitted());
        assert!(flow.submit(&accepting).await.unwrap().is_submitted());
        assert_eq!(failing.calls() + accepting.calls(), 2);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut flow = filled_flow();
        flow.begin_submit().unwrap();

        assert!(flow.is_submitting());
        assert_eq!(flow.begin_submit().unwrap_err(), FlowError::SubmissionInFlight);
    }

    #[test]
    fn test_edit_while_in_flight_leaves_payload_alone() {
        let mut flow = filled_flow();
        let request = flow.begin_submit().unwrap();

        assert_eq!(flow.set_field(Field::Company, "Other"), Ok(()));
        assert!(flow.is_submitting());
        assert_eq!(request.company(), "Ac");

        let outcome = flow
            .complete(Err(SubmissionError::Transport("reset by peer".into())))
            .unwrap();
        assert!(!outcome.is_submitted());
        assert_eq!(flow.state(), &SubmissionState::Idle);
        assert_eq!(flow.form().company, "Other");
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut flow = filled_flow();
        flow.begin_submit().unwrap();
        flow.complete(Ok(())).unwrap();

        assert_eq!(flow.set_field(Field::FirstName, "x"), Err(FlowError::AlreadySubmitted));
        assert_eq!(flow.begin_submit().unwrap_err(), FlowError::AlreadySubmitted);

        flow.reset().unwrap();
        assert_eq!(flow.state(), &SubmissionState::Idle);
        assert!(flow.form().is_blank());
    }

    #[test]
    fn test_reset_only_from_submitted() {
        let mut flow = filled_flow();
        assert_eq!(flow.reset(), Err(FlowError::NotSubmitted));
        assert_eq!(flow.form().first_name, "Jo");
    }

    #[test]
    fn test_complete_without_submission() {
        let mut flow = ContactSubmissionFlow::new();
        assert_eq!(flow.complete(Ok(())), Err(FlowError::NotSubmitting));
        assert_eq!(flow.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_editing_clears_field_message() {
        let mut flow = filled_flow();
        flow.set_field(Field::Email, "bad").unwrap();
        flow.set_field(Field::Phone, "123").unwrap();
        assert!(flow.begin_submit().is_err());

        flow.set_field(Field::Email, "still-bad").unwrap();
        assert_eq!(flow.error_for(Field::Email), Some("Invalid email address"));

        flow.set_field(Field::Email, "jo@doe.com").unwrap();
        assert_eq!(flow.error_for(Field::Email), None);
        assert!(matches!(flow.state(), SubmissionState::Invalid(_)));

        flow.set_field(Field::Phone, "1234567890").unwrap();
        assert_eq!(flow.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_edit_does_not_surface_untouched_errors() {
        let mut flow = ContactSubmissionFlow::new();
        flow.set_field(Field::FirstName, "J").unwrap();
        assert_eq!(flow.state(), &SubmissionState::Idle);
        assert_eq!(flow.error_for(Field::FirstName), None);
    }
}
