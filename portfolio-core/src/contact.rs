//! Contact form state machine.
//!
//! ```text
//! Editing ──begin_submit──▶ Submitting ──finish(Ok)──▶ Editing (fields cleared)
//!    ▲                          │
//!    └──update/begin_submit── Failed ◀──finish(Err)──┘ (fields kept)
//! ```
//!
//! Delivery goes through [`ContactTransport`]. The site ships with
//! [`SimulatedTransport`], which always succeeds after a fixed delay; a real
//! transport plugs in without touching [`ContactForm`].

use crate::schedule::{Deferred, Scheduler};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// One of the four form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Element id and label text use the same lowercase name.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The message being composed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// First empty field, in form order.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|field| self.get(*field).is_empty())
    }
}

/// Where the form is in its lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    /// Waiting on the transport; `name` is the sender at submit time.
    Submitting { name: String },
    /// The transport gave up; input is kept for a retry.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("a message is already being sent")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("message was not delivered: {0}")]
    Rejected(String),
}

/// Result of [`ContactForm::finish`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent { confirmation: String },
    Failed { reason: String },
}

/// Text of the notification shown after a successful send.
pub fn confirmation_message(name: &str) -> String {
    format!("Thank you, {name}! Your message has been sent successfully.")
}

/// Form fields plus submission phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    phase: FormPhase,
    /// Field that blocked the last submit attempt, until the next edit.
    missing: Option<Field>,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// The empty field that refused the last submit, if not edited since.
    pub fn missing_field(&self) -> Option<Field> {
        self.missing
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }

    /// Label for the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
        self.missing = None;
        if matches!(self.phase, FormPhase::Failed { .. }) {
            self.phase = FormPhase::Editing;
        }
    }

    /// Enter `Submitting` and hand back the message to deliver.
    pub fn begin_submit(&mut self) -> Result<ContactFields, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        if let Some(field) = self.fields.first_missing() {
            self.missing = Some(field);
            return Err(FormError::MissingField(field));
        }
        self.missing = None;
        debug!(subject = %self.fields.subject, "submitting contact form");
        self.phase = FormPhase::Submitting {
            name: self.fields.name.clone(),
        };
        Ok(self.fields.clone())
    }

    /// Apply the transport's verdict. Returns `None` when no submission was
    /// in flight (a stale completion).
    pub fn finish(&mut self, outcome: Result<(), TransportError>) -> Option<SubmitOutcome> {
        if !self.is_submitting() {
            return None;
        }
        let FormPhase::Submitting { name } = std::mem::take(&mut self.phase) else {
            return None;
        };

        match outcome {
            Ok(()) => {
                info!("contact message sent");
                self.fields = ContactFields::default();
                self.phase = FormPhase::Editing;
                Some(SubmitOutcome::Sent {
                    confirmation: confirmation_message(&name),
                })
            }
            Err(err) => {
                warn!(error = %err, "contact message failed");
                let reason = err.to_string();
                self.phase = FormPhase::Failed {
                    reason: reason.clone(),
                };
                Some(SubmitOutcome::Failed { reason })
            }
        }
    }
}

/// Callback receiving the delivery result.
pub type Completion = Box<dyn FnOnce(Result<(), TransportError>)>;

/// Delivers a contact message.
pub trait ContactTransport {
    /// Cancels an in-flight delivery (on teardown).
    type Handle: Deferred + 'static;

    fn send(&self, message: ContactFields, done: Completion) -> Self::Handle;
}

/// Pretends to send: succeeds after `latency`, no network involved.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedTransport<S> {
    scheduler: S,
    latency: Duration,
}

impl<S: Scheduler> SimulatedTransport<S> {
    pub fn new(scheduler: S, latency: Duration) -> Self {
        Self { scheduler, latency }
    }
}

impl<S: Scheduler> ContactTransport for SimulatedTransport<S> {
    type Handle = S::Handle;

    fn send(&self, message: ContactFields, done: Completion) -> S::Handle {
        debug!(to = "simulated", from = %message.email, latency_ms = self.latency.as_millis() as u64, "sending");
        self.scheduler
            .schedule(self.latency, Box::new(move || done(Ok(()))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::testing::ManualScheduler;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.update(Field::Name, "Ada");
        form.update(Field::Email, "ada@example.com");
        form.update(Field::Subject, "Hi");
        form.update(Field::Message, "Hello");
        form
    }

    #[test]
    fn starts_editing_and_empty() {
        let form = ContactForm::default();
        assert_eq!(form.phase(), &FormPhase::Editing);
        assert_eq!(form.fields(), &ContactFields::default());
        assert_eq!(form.submit_label(), "Send Message");
    }

    #[test]
    fn every_field_is_required() {
        for missing in Field::ALL {
            let mut form = filled();
            form.update(missing, "");
            assert_eq!(form.begin_submit(), Err(FormError::MissingField(missing)));
            assert_eq!(form.phase(), &FormPhase::Editing);
        }
    }

    #[test]
    fn refused_submit_remembers_field_until_edited() {
        let mut form = ContactForm::default();
        form.update(Field::Name, "Ada");

        let err = form.begin_submit().unwrap_err();
        assert_eq!(err.to_string(), "Email is required");
        assert_eq!(form.missing_field(), Some(Field::Email));

        form.update(Field::Email, "ada@example.com");
        assert_eq!(form.missing_field(), None);
    }

    #[test]
    fn email_format_is_not_checked() {
        let mut form = filled();
        form.update(Field::Email, "not-an-email");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), "Sending...");
        assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));
    }

    #[test]
    fn simulated_submission_clears_form_and_confirms_once() {
        let scheduler = ManualScheduler::default();
        let transport = SimulatedTransport::new(scheduler.clone(), Duration::from_millis(1200));
        let form = Rc::new(RefCell::new(filled()));
        let confirmations = Rc::new(RefCell::new(Vec::new()));

        let message = form.borrow_mut().begin_submit().unwrap();
        assert_eq!(message.name, "Ada");
        assert!(form.borrow().is_submitting());

        let (form_done, sink) = (Rc::clone(&form), Rc::clone(&confirmations));
        let _handle = transport.send(
            message,
            Box::new(move |outcome| {
                if let Some(SubmitOutcome::Sent { confirmation }) =
                    form_done.borrow_mut().finish(outcome)
                {
                    sink.borrow_mut().push(confirmation);
                }
            }),
        );

        scheduler.advance(Duration::from_millis(1199));
        assert!(form.borrow().is_submitting());
        assert!(confirmations.borrow().is_empty());

        scheduler.advance(Duration::from_millis(1));
        assert!(!form.borrow().is_submitting());
        assert_eq!(form.borrow().fields(), &ContactFields::default());
        assert_eq!(confirmations.borrow().len(), 1);
        assert!(confirmations.borrow()[0].contains("Ada"));
    }

    #[test]
    fn cancelled_delivery_never_completes() {
        let scheduler = ManualScheduler::default();
        let transport = SimulatedTransport::new(scheduler.clone(), Duration::from_millis(1200));
        let completed = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&completed);

        let handle = transport.send(
            filled().fields().clone(),
            Box::new(move |_| *flag.borrow_mut() = true),
        );
        handle.cancel();
        scheduler.advance(Duration::from_secs(5));

        assert!(!*completed.borrow());
    }

    #[test]
    fn confirmation_uses_name_at_submit_time() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.update(Field::Name, "Grace");
        assert_eq!(
            form.finish(Ok(())),
            Some(SubmitOutcome::Sent {
                confirmation: "Thank you, Ada! Your message has been sent successfully.".into()
            })
        );
    }

    #[test]
    fn failure_keeps_input_for_retry() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let outcome = form.finish(Err(TransportError::Rejected("offline".into())));

        assert_eq!(
            outcome,
            Some(SubmitOutcome::Failed {
                reason: "message was not delivered: offline".into()
            })
        );
        assert_eq!(form.fields().name, "Ada");
        assert!(matches!(form.phase(), FormPhase::Failed { .. }));
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn editing_after_failure_returns_to_editing() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish(Err(TransportError::Rejected("offline".into())));
        form.update(Field::Subject, "Hi again");
        assert_eq!(form.phase(), &FormPhase::Editing);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut form = filled();
        assert_eq!(form.finish(Ok(())), None);
        assert_eq!(form.fields().name, "Ada");
    }

    #[test]
    fn missing_field_message_names_the_field() {
        assert_eq!(FormError::MissingField(Field::Email).to_string(), "Email is required");
    }
}
