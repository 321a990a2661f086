use chrono::{DateTime, Utc};
use folio_models::{
    contact::{
        ContactField, ContactFieldError, ContactMessageAuthorName, ContactMessageContent,
        ContactMessageSubject, ContactSubmission, ContactSubmissionId,
    },
    email_address::EmailAddress,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmission {
    pub id: ContactSubmissionId,
    /// Full name of the sender
    pub name: ContactMessageAuthorName,
    /// Email address of the sender
    pub email: EmailAddress,
    pub subject: ContactMessageSubject,
    pub message: ContactMessageContent,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

impl From<ContactSubmission> for ApiContactSubmission {
    fn from(value: ContactSubmission) -> Self {
        Self {
            id: value.id,
            name: value.message.author.name,
            email: value.message.author.email,
            subject: value.message.subject,
            message: value.message.content,
            created_at: value.created_at,
            is_read: value.read,
        }
    }
}

/// The identity fields of a freshly stored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSubmissionReceipt {
    pub id: ContactSubmissionId,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

impl From<&ContactSubmission> for ApiSubmissionReceipt {
    fn from(value: &ContactSubmission) -> Self {
        Self {
            id: value.id,
            created_at: value.created_at,
            is_read: value.read,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiSubmitResponse {
    pub success: bool,
    pub message: &'static str,
    pub submission: ApiSubmissionReceipt,
}

#[derive(Debug, Serialize)]
pub struct ApiSubmitFailure {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ApiFieldError>>,
}

#[derive(Debug, Serialize)]
pub struct ApiFieldError {
    pub field: ContactField,
    pub message: String,
}

impl From<ContactFieldError> for ApiFieldError {
    fn from(value: ContactFieldError) -> Self {
        Self {
            field: value.field,
            message: value.reason,
        }
    }
}
