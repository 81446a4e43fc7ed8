use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Structured health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub sessions: SessionInfo,
}

#[derive(Serialize)]
pub struct SessionInfo {
    pub active: usize,
    pub max: usize,
    pub games: usize,
}

/// Server status and session counts as JSON.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let active = state.sessions.read().await.count();
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        sessions: SessionInfo {
            active,
            max: state.config.sessions.max_sessions,
            games: state.registry.available_games(),
        },
    })
}

/// Readiness check: at least one mini-game must be registered.
pub async fn readiness_check(State(state): State<AppState>) -> &'static str {
    if state.registry.available_games() == 0 {
        return "not ready: no games registered";
    }
    "ready"
}
