//! Contact form state.
//!
//! A submission is split in two so the caller never holds the form across
//! an await: [`ContactForm::begin_submit`] decides whether anything should be
//! sent and moves the form into [`FormStatus::Submitting`], and
//! [`ContactForm::finish`] applies the relay result.

use serde::{Deserialize, Serialize};

use crate::content::PROFILE;
use crate::relay::RelayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Message => "Your Message",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed,
}

/// Payload forwarded to the mail relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.from_name,
            Field::Email => &self.from_email,
            Field::Message => &self.message,
        }
    }

    /// Fields that are empty once surrounding whitespace is ignored.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.value(*f).trim().is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Honeypot was filled in. Drop silently.
    Discarded,
    /// A request is already in flight.
    Busy,
    Incomplete(Vec<Field>),
    Ready(ContactMessage),
}

/// Bot and completeness checks shared by the form and the server function.
pub fn screen(honeypot: &str, message: ContactMessage) -> Submission {
    if !honeypot.is_empty() {
        log::debug!("Bot detected, discarding contact submission");
        return Submission::Discarded;
    }
    let missing = message.missing_fields();
    if !missing.is_empty() {
        return Submission::Incomplete(missing);
    }
    Submission::Ready(message)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    honeypot: String,
    status: FormStatus,
    focused: Option<Field>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn honeypot(&self) -> &str {
        &self.honeypot
    }

    pub fn set_honeypot(&mut self, value: impl Into<String>) {
        self.honeypot = value.into();
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self, field: Field) {
        if self.focused == Some(field) {
            self.focused = None;
        }
    }

    /// Floating labels sit above the input while it is focused or filled.
    pub fn label_raised(&self, field: Field) -> bool {
        self.focused == Some(field) || !self.value(field).is_empty()
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        self.to_message().missing_fields()
    }

    fn to_message(&self) -> ContactMessage {
        ContactMessage {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    pub fn begin_submit(&mut self) -> Submission {
        if self.honeypot.is_empty() && self.status == FormStatus::Submitting {
            return Submission::Busy;
        }
        let submission = screen(&self.honeypot, self.to_message());
        if matches!(submission, Submission::Ready(_)) {
            self.status = FormStatus::Submitting;
        }
        submission
    }

    pub fn finish(&mut self, result: Result<(), RelayError>) -> Notice {
        let in_flight = self.status == FormStatus::Submitting;
        match result {
            Ok(()) => {
                if in_flight {
                    self.name.clear();
                    self.email.clear();
                    self.message.clear();
                    self.honeypot.clear();
                    self.status = FormStatus::Sent;
                }
                Notice::success(
                    "Message sent successfully!",
                    "Thanks for reaching out. I'll get back to you soon!",
                )
            }
            Err(e) => {
                log::error!("Contact message failed: {e}");
                if in_flight {
                    self.status = FormStatus::Failed;
                }
                Notice::error(
                    "Failed to send message",
                    format!(
                        "Please try again or email me directly at {}",
                        PROFILE.email
                    ),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::MailRelay;
    use std::cell::{Cell, RefCell};

    struct FakeRelay {
        calls: Cell<usize>,
        sent: RefCell<Vec<ContactMessage>>,
        fail: bool,
    }

    impl FakeRelay {
        fn new(fail: bool) -> Self {
            Self {
                calls: Cell::new(0),
                sent: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    impl MailRelay for FakeRelay {
        async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(message.clone());
            if self.fail {
                Err(RelayError::Transport("connection reset".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "Hello there");
        form
    }

    /// Drives one submission the way the contact section does.
    async fn submit(form: &mut ContactForm, relay: &FakeRelay) -> Option<Notice> {
        let Submission::Ready(message) = form.begin_submit() else {
            return None;
        };
        assert!(form.is_submit_disabled());
        let result = relay.send(&message).await;
        assert!(form.is_submit_disabled());
        Some(form.finish(result))
    }

    #[tokio::test]
    async fn test_honeypot_skips_relay() {
        let relay = FakeRelay::new(false);
        let mut form = filled();
        form.set_honeypot("https://spam.example");

        assert_eq!(form.begin_submit(), Submission::Discarded);
        assert!(submit(&mut form, &relay).await.is_none());
        assert_eq!(relay.calls.get(), 0);
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.value(Field::Name), "Ada");
    }

    #[tokio::test]
    async fn test_success_sends_once_and_clears() {
        let relay = FakeRelay::new(false);
        let mut form = filled();

        let notice = submit(&mut form, &relay).await.expect("should submit");
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(
            relay.sent.borrow()[0],
            ContactMessage {
                from_name: "Ada".to_string(),
                from_email: "ada@example.com".to_string(),
                message: "Hello there".to_string(),
            }
        );
        assert_eq!(notice.tone, Tone::Success);
        assert_eq!(form.status(), FormStatus::Sent);
        assert!(!form.is_submit_disabled());
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[tokio::test]
    async fn test_failure_keeps_fields() {
        let relay = FakeRelay::new(true);
        let mut form = filled();

        let notice = submit(&mut form, &relay).await.expect("should submit");
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(notice.tone, Tone::Error);
        assert!(notice.description.contains(PROFILE.email));
        assert_eq!(form.status(), FormStatus::Failed);
        assert_eq!(form.value(Field::Name), "Ada");
        assert_eq!(form.value(Field::Email), "ada@example.com");
        assert_eq!(form.value(Field::Message), "Hello there");

        // a failed form can be retried by the user
        assert!(matches!(form.begin_submit(), Submission::Ready(_)));
    }

    #[test]
    fn test_single_request_in_flight() {
        let mut form = filled();
        assert!(matches!(form.begin_submit(), Submission::Ready(_)));
        assert_eq!(form.begin_submit(), Submission::Busy);
        form.finish(Ok(()));
        assert_eq!(form.status(), FormStatus::Sent);
    }

    #[test]
    fn test_incomplete_fields() {
        let mut form = ContactForm::new();
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "   ");
        assert_eq!(
            form.begin_submit(),
            Submission::Incomplete(vec![Field::Name, Field::Message])
        );
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_screen_checks_bots_before_fields() {
        let blank = ContactMessage {
            from_name: " ".to_string(),
            from_email: String::new(),
            message: "\n".to_string(),
        };
        assert_eq!(screen("filled", blank.clone()), Submission::Discarded);
        assert_eq!(
            screen("", blank),
            Submission::Incomplete(Field::ALL.to_vec())
        );

        let message = filled().to_message();
        assert_eq!(screen("", message.clone()), Submission::Ready(message));
    }

    #[test]
    fn test_honeypot_wins_over_busy() {
        let mut form = filled();
        assert!(matches!(form.begin_submit(), Submission::Ready(_)));
        form.set_honeypot("x");
        assert_eq!(form.begin_submit(), Submission::Discarded);
        assert_eq!(form.status(), FormStatus::Submitting);
    }

    #[test]
    fn test_finish_without_request_keeps_state() {
        let mut form = filled();
        let notice = form.finish(Ok(()));
        assert_eq!(notice.tone, Tone::Success);
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.value(Field::Name), "Ada");
    }

    #[test]
    fn test_focus_and_floating_label() {
        let mut form = ContactForm::new();
        assert!(!form.label_raised(Field::Name));

        form.focus(Field::Name);
        assert_eq!(form.focused(), Some(Field::Name));
        assert!(form.label_raised(Field::Name));

        // blurring another field leaves the marker alone
        form.blur(Field::Email);
        assert_eq!(form.focused(), Some(Field::Name));

        form.blur(Field::Name);
        assert_eq!(form.focused(), None);
        assert!(!form.label_raised(Field::Name));

        form.set(Field::Name, "Ada");
        assert!(form.label_raised(Field::Name));
    }
}
