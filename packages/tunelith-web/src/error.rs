//! HTTP error responses.

use crate::render;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tunelith_core::ValidationError;

/// Errors surfaced by request handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// User-correctable submission error, reported as `400 {"error": ...}`
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failure on a JSON endpoint, reported as `500 {"error": ...}`
    #[error("{0}")]
    Api(String),

    /// The message listing could not be loaded
    #[error("Erreur lors du chargement des messages: {0}")]
    MessagesUnavailable(#[source] tunelith_core::Error),

    /// No route matched
    #[error("page not found")]
    NotFound,

    /// Anything else; `detail` is only shown in development mode
    #[error("internal server error")]
    Internal { detail: Option<String> },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Api(_) | Self::MessagesUnavailable(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl AppError {
    /// Map a core error, keeping its text only in development mode.
    pub fn from_core(err: tunelith_core::Error, debug: bool) -> Self {
        match err {
            tunelith_core::Error::Validation(v) => Self::Validation(v),
            other => Self::Internal {
                detail: debug.then(|| other.to_string()),
            },
        }
    }
}

impl From<tunelith_core::Error> for AppError {
    fn from(err: tunelith_core::Error) -> Self {
        Self::from_core(err, false)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(e) => (status, Json(json!({ "error": e.to_string() }))).into_response(),
            Self::Api(message) => (status, Json(json!({ "error": message }))).into_response(),
            e @ Self::MessagesUnavailable(_) => (status, e.to_string()).into_response(),
            Self::NotFound => (status, Html(render::not_found_page())).into_response(),
            Self::Internal { detail } => {
                (status, Html(render::error_page(detail.as_deref()))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation(ValidationError::InvalidEmail).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Api("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal { detail: None }.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_core_validation_maps_to_bad_request() {
        let err = AppError::from(tunelith_core::Error::Validation(
            ValidationError::MissingFields,
        ));

        assert!(matches!(
            err,
            AppError::Validation(ValidationError::MissingFields)
        ));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_core_storage_error_detail_only_in_debug() {
        let io = || tunelith_core::Error::Io(std::io::Error::other("disk gone"));

        assert!(matches!(
            AppError::from_core(io(), false),
            AppError::Internal { detail: None }
        ));
        match AppError::from_core(io(), true) {
            AppError::Internal { detail: Some(detail) } => assert!(detail.contains("disk gone")),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn test_messages_unavailable_text() {
        let source = tunelith_core::Error::Io(std::io::Error::other("disk gone"));
        let err = AppError::MessagesUnavailable(source);

        assert_eq!(
            err.to_string(),
            "Erreur lors du chargement des messages: IO error: disk gone"
        );
    }
}
