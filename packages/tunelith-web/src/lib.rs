//! Tunelith Web - HTTP server for the Tunelith marketing website.
//!
//! Serves the home page and contact form, an admin listing of received
//! messages, a stats API and a health check. All persistence goes through a
//! [`MessageStore`] shared by the handlers.

pub mod config;
pub mod error;
pub mod negotiate;
pub mod render;
pub mod routes;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tunelith_core::MessageStore;

pub use config::Config;
pub use error::AppError;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MessageStore>,
    /// Development mode: error pages include details
    pub debug: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn MessageStore>, debug: bool) -> Self {
        Self { store, debug }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/send_message", post(routes::send_message))
        .route("/messages", get(routes::view_messages))
        .route("/api/stats", get(routes::api_stats))
        .route("/health", get(routes::health_check))
        .fallback(routes::not_found)
        .with_state(state)
}
