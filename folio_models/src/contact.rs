use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::{
    email_address::EmailAddress,
    macros::{id, nutype_string},
};

id!(ContactSubmissionId);

/// A contact message that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
}

nutype_string!(ContactMessageAuthorName(validate(len_char_min = 2)));
nutype_string!(ContactMessageSubject(validate(len_char_min = 2)));
nutype_string!(ContactMessageContent(validate(len_char_min = 10)));

/// A stored contact message.
///
/// Only [`read`](Self::read) ever changes after creation, and only from
/// `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: ContactSubmissionId,
    pub message: ContactMessage,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl ContactSubmission {
    /// Orders newest first, breaking ties by the higher id.
    pub fn cmp_newest_first(&self, other: &Self) -> std::cmp::Ordering {
        other
            .created_at
            .cmp(&self.created_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The key of this field in a submitted payload.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    fn invalid_reason(self) -> &'static str {
        match self {
            Self::Name => "Name must be at least 2 characters",
            Self::Email => "Please enter a valid email address",
            Self::Subject => "Subject must be at least 2 characters",
            Self::Message => "Message must be at least 10 characters",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFieldError {
    pub field: ContactField,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid contact message: {}", display_field_errors(.errors))]
pub struct ContactValidationError {
    /// One entry per failing field, in field order.
    pub errors: Vec<ContactFieldError>,
}

fn display_field_errors(errors: &[ContactFieldError]) -> String {
    errors
        .iter()
        .map(|err| format!("{}: {}", err.field, err.reason))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ContactMessage {
    /// Validates an untyped payload, collecting a reason for every field that
    /// fails instead of stopping at the first one.
    ///
    /// Payloads that are not JSON objects are treated as objects without any
    /// fields. Unknown fields are ignored.
    pub fn validate(payload: &Value) -> Result<Self, ContactValidationError> {
        let mut errors = Vec::new();

        let name = validate_field(payload, ContactField::Name, &mut errors, |s| {
            ContactMessageAuthorName::try_new(s).ok()
        });
        let email = validate_field(payload, ContactField::Email, &mut errors, |s| {
            EmailAddress::try_new(s).ok()
        });
        let subject = validate_field(payload, ContactField::Subject, &mut errors, |s| {
            ContactMessageSubject::try_new(s).ok()
        });
        let content = validate_field(payload, ContactField::Message, &mut errors, |s| {
            ContactMessageContent::try_new(s).ok()
        });

        match (name, email, subject, content) {
            (Some(name), Some(email), Some(subject), Some(content)) => Ok(Self {
                author: ContactMessageAuthor { name, email },
                subject,
                content,
            }),
            _ => Err(ContactValidationError { errors }),
        }
    }
}

fn validate_field<T>(
    payload: &Value,
    field: ContactField,
    errors: &mut Vec<ContactFieldError>,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Option<T> {
    let reason = match payload.get(field.key()) {
        None | Some(Value::Null) => format!("{} is required", field.label()),
        Some(Value::String(value)) => match parse(value) {
            Some(parsed) => return Some(parsed),
            None => field.invalid_reason().into(),
        },
        Some(_) => format!("{} must be a string", field.label()),
    };

    errors.push(ContactFieldError { field, reason });
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn failing_fields(payload: Value) -> Vec<ContactField> {
        ContactMessage::validate(&payload)
            .unwrap_err()
            .errors
            .into_iter()
            .map(|err| err.field)
            .collect()
    }

    #[test]
    fn valid() {
        // Arrange
        let payload = json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Hello",
            "message": "This is a test message.",
        });

        // Act
        let message = ContactMessage::validate(&payload).unwrap();

        // Assert
        assert_eq!(*message.author.name, "Jane Doe");
        assert_eq!(message.author.email.as_str(), "jane@example.com");
        assert_eq!(*message.subject, "Hello");
        assert_eq!(*message.content, "This is a test message.");
    }

    #[test]
    fn aggregates_all_failures() {
        // Arrange
        let payload = json!({
            "name": "A",
            "email": "x@y",
            "subject": "Hi",
            "message": "short",
        });

        // Act
        let result = ContactMessage::validate(&payload);

        // Assert
        assert_eq!(
            result.unwrap_err().errors,
            [
                ContactFieldError {
                    field: ContactField::Name,
                    reason: "Name must be at least 2 characters".into(),
                },
                ContactFieldError {
                    field: ContactField::Email,
                    reason: "Please enter a valid email address".into(),
                },
                ContactFieldError {
                    field: ContactField::Message,
                    reason: "Message must be at least 10 characters".into(),
                },
            ]
        );
    }

    #[test]
    fn message_length_boundary() {
        let payload = |message: &str| {
            json!({
                "name": "Jane",
                "email": "jane@example.com",
                "subject": "Hi",
                "message": message,
            })
        };

        assert!(ContactMessage::validate(&payload("0123456789")).is_ok());
        assert_eq!(
            failing_fields(payload("012345678")),
            [ContactField::Message]
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let payload = json!({
            "name": "Jö",
            "email": "jo@example.com",
            "subject": "äü",
            "message": "ééééééééé",
        });

        assert_eq!(failing_fields(payload), [ContactField::Message]);
    }

    #[test]
    fn values_are_trimmed() {
        // Arrange
        let payload = json!({
            "name": "  Jane  ",
            "email": " jane@example.com ",
            "subject": "\tHello\n",
            "message": "  This is a test message.  ",
        });

        // Act
        let message = ContactMessage::validate(&payload).unwrap();

        // Assert
        assert_eq!(*message.author.name, "Jane");
        assert_eq!(message.author.email.as_str(), "jane@example.com");
        assert_eq!(*message.subject, "Hello");
        assert_eq!(*message.content, "This is a test message.");
    }

    #[test]
    fn whitespace_does_not_count_towards_length() {
        let payload = json!({
            "name": " J ",
            "email": "jane@example.com",
            "subject": "Hello",
            "message": "   short      ",
        });

        assert_eq!(
            failing_fields(payload),
            [ContactField::Name, ContactField::Message]
        );
    }

    #[test]
    fn missing_fields() {
        // Act
        let result = ContactMessage::validate(&json!({ "name": null }));

        // Assert
        assert_eq!(
            result
                .unwrap_err()
                .errors
                .into_iter()
                .map(|err| err.reason)
                .collect::<Vec<_>>(),
            [
                "Name is required",
                "Email is required",
                "Subject is required",
                "Message is required",
            ]
        );
    }

    #[test]
    fn wrong_types() {
        // Arrange
        let payload = json!({
            "name": 42,
            "email": ["jane@example.com"],
            "subject": "Hello",
            "message": { "text": "This is a test message." },
        });

        // Act
        let errors = ContactMessage::validate(&payload).unwrap_err().errors;

        // Assert
        assert_eq!(
            errors,
            [
                ContactFieldError {
                    field: ContactField::Name,
                    reason: "Name must be a string".into(),
                },
                ContactFieldError {
                    field: ContactField::Email,
                    reason: "Email must be a string".into(),
                },
                ContactFieldError {
                    field: ContactField::Message,
                    reason: "Message must be a string".into(),
                },
            ]
        );
    }

    #[test]
    fn non_object_payload() {
        for payload in [json!(null), json!("hello"), json!([1, 2, 3])] {
            assert_eq!(failing_fields(payload), ContactField::ALL);
        }
    }

    #[test]
    fn extra_fields_are_ignored() {
        let payload = json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Hello",
            "message": "This is a test message.",
            "isRead": true,
            "id": 7,
        });

        assert!(ContactMessage::validate(&payload).is_ok());
    }

    #[test]
    fn error_display_lists_fields() {
        let err = ContactMessage::validate(&json!({
            "name": "Jane",
            "email": "nope",
            "subject": "Hello",
            "message": "This is a test message.",
        }))
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid contact message: email: Please enter a valid email address"
        );
    }
}
