//! Content negotiation for the contact form endpoint.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use tunelith_core::ContactSubmission;

const APPLICATION_JSON: &str = "application/json";
const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// How the caller wants the outcome of a submission reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Structured JSON body with an HTTP status
    Json,
    /// Redirect back to the home page
    Redirect,
}

impl ResponseFormat {
    /// JSON when the body is JSON or the caller accepts exactly `application/json`.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let accepts_json = headers
            .get(ACCEPT)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim() == APPLICATION_JSON);

        if has_json_content_type(headers) || accepts_json {
            Self::Json
        } else {
            Self::Redirect
        }
    }
}

fn has_content_type(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(expected))
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    has_content_type(headers, APPLICATION_JSON)
}

/// Collect the contact fields from a multipart body, ignoring other parts.
async fn read_multipart(mut multipart: Multipart) -> Result<ContactSubmission, MultipartError> {
    let mut submission = ContactSubmission::default();
    while let Some(field) = multipart.next_field().await? {
        let target = match field.name() {
            Some("name") => &mut submission.name,
            Some("email") => &mut submission.email,
            Some("message") => &mut submission.message,
            _ => continue,
        };
        *target = field.text().await?;
    }
    Ok(submission)
}

/// Contact submission decoded from a JSON, urlencoded or multipart body.
#[derive(Debug, Clone)]
pub struct SubmissionBody(pub ContactSubmission);

#[derive(Debug, thiserror::Error)]
pub enum SubmissionRejection {
    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Form(#[from] FormRejection),

    #[error(transparent)]
    Multipart(#[from] MultipartRejection),

    #[error(transparent)]
    MultipartField(#[from] MultipartError),
}

impl IntoResponse for SubmissionRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Json(rejection) => rejection.into_response(),
            Self::Form(rejection) => rejection.into_response(),
            Self::Multipart(rejection) => rejection.into_response(),
            Self::MultipartField(err) => err.into_response(),
        }
    }
}

impl<S> FromRequest<S> for SubmissionBody
where
    S: Send + Sync,
{
    type Rejection = SubmissionRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if has_json_content_type(req.headers()) {
            let Json(submission) = Json::<ContactSubmission>::from_request(req, state).await?;
            return Ok(Self(submission));
        }

        if has_content_type(req.headers(), MULTIPART_FORM_DATA) {
            let multipart = Multipart::from_request(req, state).await?;
            return Ok(Self(read_multipart(multipart).await?));
        }

        match Form::<ContactSubmission>::from_request(req, state).await {
            Ok(Form(submission)) => Ok(Self(submission)),
            // A body that is not a form carries no form fields.
            Err(FormRejection::InvalidFormContentType(_)) => {
                Ok(Self(ContactSubmission::default()))
            }
            Err(rejection) => Err(rejection.into()),
        }
    }
}
