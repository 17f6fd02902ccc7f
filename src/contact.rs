use std::fmt;

use log::info;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{field} is required")]
    Validation { field: Field },
    #[error("Your message could not be sent ({0}). Please try again.")]
    Submission(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Where an accepted message goes.
pub trait MessageSink {
    fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// Writes the message to the browser console. There is no backend yet.
pub struct ConsoleSink;

impl MessageSink for ConsoleSink {
    fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let payload = serde_json::to_string(message)
            .map_err(|e| ContactError::Submission(e.to_string()))?;
        gloo_console::log!("Form submitted:", payload);
        info!("contact message accepted from {}", message.email);
        Ok(())
    }
}

/// The editable contents of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Every field must hold something other than whitespace.
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        for (field, value) in [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::Validation { field });
            }
        }

        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Validates, hands the message to `sink` and clears the draft. On any
    /// error the draft is left as it was so the visitor can fix or retry.
    pub fn submit<S: MessageSink>(&mut self, sink: &S) -> Result<ContactMessage, ContactError> {
        let message = self.validate()?;
        sink.deliver(&message)?;
        *self = ContactDraft::default();
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recording(RefCell<Vec<ContactMessage>>);

    impl MessageSink for Recording {
        fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
            self.0.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    struct Unreachable;

    impl MessageSink for Unreachable {
        fn deliver(&self, _: &ContactMessage) -> Result<(), ContactError> {
            Err(ContactError::Submission("connection refused".into()))
        }
    }

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Priya Sharma".into(),
            email: "priya@example.com".into(),
            message: "When does the beginner batch start?".into(),
        }
    }

    #[test]
    fn empty_name_never_reaches_the_sink() {
        let sink = Recording::default();
        let mut draft = ContactDraft {
            name: String::new(),
            ..filled()
        };

        let err = draft.submit(&sink).unwrap_err();
        assert_eq!(err, ContactError::Validation { field: Field::Name });
        assert_eq!(err.to_string(), "Name is required");
        assert!(sink.0.borrow().is_empty());
        assert_eq!(draft.email, "priya@example.com");
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let draft = ContactDraft {
            message: "  \n\t".into(),
            ..filled()
        };
        assert_eq!(
            draft.validate(),
            Err(ContactError::Validation {
                field: Field::Message
            })
        );
    }

    #[test]
    fn fields_are_checked_in_form_order() {
        let draft = ContactDraft {
            name: "Rohan".into(),
            ..ContactDraft::default()
        };
        assert_eq!(
            draft.validate(),
            Err(ContactError::Validation { field: Field::Email })
        );
    }

    #[test]
    fn complete_form_is_delivered_and_cleared() {
        let sink = Recording::default();
        let mut draft = filled();
        draft.name = "  Priya Sharma ".into();

        let sent = draft.submit(&sink).unwrap();
        assert_eq!(sent.name, "Priya Sharma");
        assert_eq!(sink.0.borrow().as_slice(), &[sent]);
        assert_eq!(draft, ContactDraft::default());
    }

    #[test]
    fn failed_delivery_keeps_the_draft() {
        let mut draft = filled();
        let err = draft.submit(&Unreachable).unwrap_err();

        assert!(matches!(err, ContactError::Submission(_)));
        assert!(err.to_string().contains("try again"));
        assert_eq!(draft, filled());
    }

    #[test]
    fn message_serializes_with_plain_field_names() {
        let message = filled().validate().unwrap();
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["name"], "Priya Sharma");
        assert_eq!(json["email"], "priya@example.com");
        assert_eq!(json["message"], "When does the beginner batch start?");
    }
}
