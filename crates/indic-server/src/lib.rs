pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod pages;
pub mod play;
pub mod sessions;
pub mod state;

use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use config::ServerConfig;
use state::AppState;

/// Build the Axum router and application state from a config.
pub fn build_app(config: ServerConfig) -> (Router<()>, AppState) {
    let static_root = config.static_root.clone();
    let state = AppState::new(config);

    let api_routes = Router::new()
        .route("/languages", get(api::get_languages))
        .route("/genres", get(api::get_genres))
        .route("/themes", get(api::get_themes))
        .route("/games/prebuilt", get(api::get_prebuilt))
        .route("/games/featured", get(api::get_featured))
        .route("/heroes", get(api::get_heroes))
        .route("/docs", get(api::get_docs))
        .route("/translate", post(api::post_translate))
        .route("/games/generate", post(api::post_generate))
        .route("/games/preview", post(api::post_preview))
        .route("/games/download", post(api::post_download))
        .route("/convert", post(api::post_convert))
        .route("/names", post(api::post_names))
        .route("/sessions", post(api::create_session))
        .route(
            "/sessions/{id}",
            get(api::get_session).delete(api::delete_session),
        )
        .route("/sessions/{id}/input", post(api::post_session_input))
        .layer(CorsLayer::permissive());

    let app = Router::new()
        .route("/", get(pages::index))
        .route("/generate", post(pages::generate))
        .route("/play/{index}", get(pages::play))
        .route("/convert", post(pages::convert))
        .route("/names", post(pages::names))
        .route("/download", post(pages::download))
        .route("/sessions", post(play::start))
        .route("/sessions/{id}", get(play::show).post(play::act))
        .route("/sessions/{id}/end", post(play::end))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api/v1", api_routes)
        .fallback_service(ServeDir::new(&static_root))
        .layer(CompressionLayer::new())
        .with_state(state.clone());

    (app, state)
}

/// Background task that periodically stops sessions idle past the timeout.
pub fn spawn_session_reaper(state: AppState) {
    let check_every = Duration::from_secs(state.config.sessions.idle_check_interval_secs.max(1));
    let max_idle = Duration::from_secs(state.config.sessions.idle_timeout_secs);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(check_every);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let removed = state.sessions.write().await.cleanup_idle(max_idle);
            if !removed.is_empty() {
                tracing::debug!(count = removed.len(), "Session reaper pass");
            }
        }
    });
}
