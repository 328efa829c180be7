use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// contact form contract
//
// the site has no backend of its own, so submission goes through whatever
// ContactTransport the caller supplies.  a transport either reports success from
// the remote end or an error; nothing here pretends a message was sent
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: &str) -> Self {
        FieldError {
            field,
            message: message.to_owned(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Subject, &self.subject),
            (Field::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError::new(field, "is required"));
            }
        }

        let email = self.email.trim();
        if !email.is_empty() && !plausible_email(email) {
            errors.push(FieldError::new(Field::Email, "is not a valid address"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    // first error for a field, for inline display next to the input
    pub fn error_for(errors: &[FieldError], field: Field) -> Option<&str> {
        errors
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.message.as_str())
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

// one '@', something before it, and a dotted domain after it with no empty labels
fn plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("the form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("no contact endpoint is configured")]
    NotConfigured,

    #[error("the contact service rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("could not reach the contact service: {0}")]
    Transport(String),
}

impl ContactError {
    // what the form shows under the submit button
    pub fn user_message(&self) -> String {
        match self {
            ContactError::Invalid(_) => "Please fix the highlighted fields.".to_owned(),
            ContactError::NotConfigured => {
                "Online messages are not available right now. Please use the email address instead."
                    .to_owned()
            }
            ContactError::Rejected { .. } | ContactError::Transport(_) => {
                "Sorry, your message could not be sent. Please try again or email me directly."
                    .to_owned()
            }
        }
    }
}

// browser transports hold js handles, so futures are not Send
#[async_trait(?Send)]
pub trait ContactTransport {
    async fn submit(&self, form: &ContactForm) -> Result<(), ContactError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl ContactStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, ContactStatus::Sending)
    }
}

// validate, submit, and report the resulting status
//
// on success the form is cleared so a second click cannot resend the same message
pub async fn send<T>(transport: &T, form: &mut ContactForm) -> ContactStatus
where
    T: ContactTransport + ?Sized,
{
    if let Err(errors) = form.validate() {
        return ContactStatus::Failed(ContactError::Invalid(errors).user_message());
    }

    match transport.submit(form).await {
        Ok(()) => {
            tracing::info!("contact message sent");
            form.clear();
            ContactStatus::Sent
        }
        Err(err) => {
            tracing::warn!("contact submission failed: {err}");
            ContactStatus::Failed(err.user_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    struct Recording {
        result: Result<(), ContactError>,
        seen: RefCell<Vec<ContactForm>>,
    }

    impl Recording {
        fn new(result: Result<(), ContactError>) -> Self {
            Recording {
                result,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ContactTransport for Recording {
        async fn submit(&self, form: &ContactForm) -> Result<(), ContactError> {
            self.seen.borrow_mut().push(form.clone());
            self.result.clone()
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            subject: "Hello".to_owned(),
            message: "Nice site".to_owned(),
        }
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_blank_fields_are_reported() {
        let form = ContactForm {
            name: "   ".to_owned(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(ContactForm::error_for(&errors, Field::Name), Some("is required"));

        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_email_shape() {
        for bad in ["ada", "@example.com", "ada@example", "ada@.com", "a b@example.com", "a@b@c.com"] {
            let form = ContactForm {
                email: bad.to_owned(),
                ..filled()
            };
            assert!(form.validate().is_err(), "{bad}");
        }

        for good in ["ada@example.com", "a.b+c@mail.example.org"] {
            let form = ContactForm {
                email: good.to_owned(),
                ..filled()
            };
            assert!(form.validate().is_ok(), "{good}");
        }
    }

    #[test]
    fn test_send_clears_form_on_success() {
        let transport = Recording::new(Ok(()));
        let mut form = filled();

        let status = block_on(send(&transport, &mut form));

        assert_eq!(status, ContactStatus::Sent);
        assert_eq!(form, ContactForm::default());
        assert_eq!(transport.seen.borrow().len(), 1);
    }

    #[test]
    fn test_invalid_form_never_reaches_transport() {
        let transport = Recording::new(Ok(()));
        let mut form = ContactForm::default();

        let status = block_on(send(&transport, &mut form));

        assert!(matches!(status, ContactStatus::Failed(_)));
        assert!(transport.seen.borrow().is_empty());
    }

    #[test]
    fn test_unconfigured_transport_is_a_failure() {
        let transport = Recording::new(Err(ContactError::NotConfigured));
        let mut form = filled();

        let status = block_on(send(&transport, &mut form));

        assert_eq!(
            status,
            ContactStatus::Failed(ContactError::NotConfigured.user_message())
        );
        // the message is kept so the user can copy it elsewhere
        assert_eq!(form, filled());
    }
}
