// octodash: themeable web dashboard and embeddable SVG badges for GitHub
// user statistics.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

mod badge;
mod cache;
mod config;
mod error;
mod github;
mod stats;
mod themes;
mod web;

use config::Config;
use github::GitHubClient;
use web::AppState;

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    if config.github_token.is_none() {
        warn!("GITHUB_TOKEN not set; the anonymous GitHub rate limit is very low");
    }

    let github = GitHubClient::new(config.github_token.as_deref())
        .expect("failed to construct GitHub client");

    let address = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState { config, github });
    let app = web::router(state);

    let listener = TcpListener::bind(&address)
        .await
        .expect("failed to bind listener");
    info!("Listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    info!("Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
