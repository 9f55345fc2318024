// HTTP surface: routing, shared state, request handlers, page rendering.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub mod cookies;
pub mod handlers;
pub mod pages;

use crate::config::Config;
use crate::github::GitHubClient;

/// Shared application state handed to every handler.
pub struct AppState {
    pub config: Config,
    pub github: GitHubClient,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/u/{username}", get(handlers::stats_page))
        .route("/badge/{username}", get(handlers::badge))
        .route("/set-theme", post(handlers::set_theme))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
