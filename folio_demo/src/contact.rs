use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use folio_models::contact::{
    ContactMessage, ContactMessageAuthor, ContactSubmission, ContactSubmissionId,
};
use serde_json::{json, Value};

pub static JANE: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    author: ContactMessageAuthor {
        name: "Jane Doe".try_into().unwrap(),
        email: "jane@example.com".try_into().unwrap(),
    },
    subject: "Hello".try_into().unwrap(),
    content: "This is a test message.".try_into().unwrap(),
});

pub static JOHN: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    author: ContactMessageAuthor {
        name: "John Smith".try_into().unwrap(),
        email: "john.smith@example.org".try_into().unwrap(),
    },
    subject: "Website redesign".try_into().unwrap(),
    content: "Could we talk about a redesign of our shop website?"
        .try_into()
        .unwrap(),
});

pub static JANE_SUBMISSION: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    id: ContactSubmissionId::new(1),
    message: JANE.clone(),
    created_at: Utc.with_ymd_and_hms(2024, 3, 14, 13, 37, 42).unwrap(),
    read: false,
});

pub static JOHN_SUBMISSION: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    id: ContactSubmissionId::new(2),
    message: JOHN.clone(),
    created_at: Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap(),
    read: true,
});

/// The JSON body a client would post for [`JANE`].
pub fn jane_payload() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "subject": "Hello",
        "message": "This is a test message.",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jane_payload_validates_to_jane() {
        assert_eq!(ContactMessage::validate(&jane_payload()).unwrap(), *JANE);
    }
}
