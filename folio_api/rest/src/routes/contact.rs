use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::ContactFeatureService;
use folio_models::contact::{ContactMessage, ContactSubmissionId};
use serde_json::Value;
use tracing::debug;

use super::{error, internal_server_error};
use crate::models::contact::{
    ApiContactSubmission, ApiFieldError, ApiSubmissionReceipt, ApiSubmitFailure,
    ApiSubmitResponse,
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .route("/api/contact/submissions", routing::get(list))
        .route("/api/contact/submissions/:submission_id", routing::get(get))
        .route(
            "/api/contact/submissions/:submission_id/read",
            routing::put(mark_read),
        )
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(err) => {
            debug!("rejected contact request body: {err}");
            return submit_failure(
                StatusCode::BAD_REQUEST,
                "Invalid request body",
                Some(Vec::new()),
            );
        }
    };

    let message = match ContactMessage::validate(&payload) {
        Ok(message) => message,
        Err(err) => {
            debug!("{err}");
            return submit_failure(
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(err.errors.into_iter().map(Into::into).collect()),
            );
        }
    };

    match service.submit_message(message).await {
        Ok(submission) => Json(ApiSubmitResponse {
            success: true,
            message: "Message received! We will get back to you soon.",
            submission: ApiSubmissionReceipt::from(&submission),
        })
        .into_response(),
        Err(err) => {
            tracing::error!("failed to process contact submission: {err}");
            submit_failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error processing your request",
                None,
            )
        }
    }
}

fn submit_failure(
    code: StatusCode,
    message: &'static str,
    errors: Option<Vec<ApiFieldError>>,
) -> Response {
    (
        code,
        Json(ApiSubmitFailure {
            success: false,
            message,
            errors,
        }),
    )
        .into_response()
}

async fn list(service: State<Arc<impl ContactFeatureService>>) -> Response {
    match service.list_submissions().await {
        Ok(submissions) => Json(
            submissions
                .into_iter()
                .map(ApiContactSubmission::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(err) => internal_server_error(err),
    }
}

async fn get(
    service: State<Arc<impl ContactFeatureService>>,
    submission_id: Result<Path<u64>, PathRejection>,
) -> Response {
    let Some(submission_id) = parse_submission_id(submission_id) else {
        return invalid_submission_id();
    };

    match service.get_submission(submission_id).await {
        Ok(Some(submission)) => Json(ApiContactSubmission::from(submission)).into_response(),
        Ok(None) => submission_not_found(),
        Err(err) => internal_server_error(err),
    }
}

async fn mark_read(
    service: State<Arc<impl ContactFeatureService>>,
    submission_id: Result<Path<u64>, PathRejection>,
) -> Response {
    let Some(submission_id) = parse_submission_id(submission_id) else {
        return invalid_submission_id();
    };

    match service.mark_submission_read(submission_id).await {
        Ok(Some(submission)) => Json(ApiContactSubmission::from(submission)).into_response(),
        Ok(None) => submission_not_found(),
        Err(err) => internal_server_error(err),
    }
}

fn parse_submission_id(
    submission_id: Result<Path<u64>, PathRejection>,
) -> Option<ContactSubmissionId> {
    submission_id
        .inspect_err(|err| debug!("invalid submission id: {err}"))
        .ok()
        .map(|Path(id)| id.into())
}

fn invalid_submission_id() -> Response {
    error(StatusCode::BAD_REQUEST, "Invalid submission id")
}

fn submission_not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Submission not found")
}
