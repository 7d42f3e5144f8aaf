//! Request handlers.

use crate::error::AppError;
use crate::negotiate::{ResponseFormat, SubmissionBody, SubmissionRejection};
use crate::{render, AppState};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use serde_json::json;
use tunelith_core::{contact, health, stats, viewer, HealthStatus, SiteStats};

const SUCCESS_MESSAGE: &str = "Message envoyé avec succès!";
const INTERNAL_ERROR_MESSAGE: &str = "Erreur interne du serveur";

/// Run blocking store I/O off the async workers.
async fn run_blocking<T, F>(state: &AppState, f: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        tracing::error!("Store task failed: {}", e);
        AppError::Internal {
            detail: state.debug.then(|| e.to_string()),
        }
    })
}

pub async fn home() -> Html<String> {
    Html(render::home_page())
}

pub async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<SubmissionBody, SubmissionRejection>,
) -> Response {
    let format = ResponseFormat::from_headers(&headers);

    let result = match body {
        Ok(SubmissionBody(submission)) => {
            let store = state.store.clone();
            run_blocking(&state, move || contact::submit(store.as_ref(), submission))
                .await
                .and_then(|submitted| {
                    submitted.map_err(|e| AppError::from_core(e, state.debug))
                })
        }
        Err(rejection) => {
            tracing::warn!("Unreadable contact submission: {}", rejection);
            Err(AppError::Internal { detail: None })
        }
    };

    match (format, result) {
        (ResponseFormat::Json, Ok(_)) => {
            Json(json!({ "success": true, "message": SUCCESS_MESSAGE })).into_response()
        }
        (ResponseFormat::Json, Err(e @ AppError::Validation(_))) => e.into_response(),
        (ResponseFormat::Json, Err(e)) => {
            tracing::error!("Failed to process message: {}", e);
            AppError::Api(INTERNAL_ERROR_MESSAGE.to_string()).into_response()
        }
        (ResponseFormat::Redirect, Ok(_)) => Redirect::to("/").into_response(),
        (ResponseFormat::Redirect, Err(e)) => {
            tracing::warn!("Contact submission failed, redirecting home: {}", e);
            Redirect::to("/").into_response()
        }
    }
}

pub async fn view_messages(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let store = state.store.clone();
    let messages = run_blocking(&state, move || viewer::recent_messages(store.as_ref()))
        .await?
        .map_err(|e| {
            tracing::error!("Failed to load messages: {}", e);
            AppError::MessagesUnavailable(e)
        })?;

    Ok(Html(render::messages_page(&messages)))
}

pub async fn api_stats(State(state): State<AppState>) -> Result<Json<SiteStats>, AppError> {
    let store = state.store.clone();
    let stats = run_blocking(&state, move || stats::site_stats(store.as_ref()))
        .await?
        .map_err(|e| {
            tracing::error!("Failed to compute stats: {}", e);
            AppError::Api(e.to_string())
        })?;

    Ok(Json(stats))
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(health::health())
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
