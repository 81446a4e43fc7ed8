use std::sync::Arc;
use tokio::sync::RwLock;

use indic_namegen::NameGenClient;

use crate::config::ServerConfig;
use crate::sessions::{GameRegistry, SessionManager};

pub type SharedSessionManager = Arc<RwLock<SessionManager>>;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SharedSessionManager,
    pub registry: Arc<GameRegistry>,
    /// Absent when the HTTP client could not be built.
    pub namegen: Option<NameGenClient>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let namegen = match NameGenClient::new(config.namegen.clone()) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!(error = %e, "Name generator client unavailable");
                None
            },
        };
        Self {
            sessions: Arc::new(RwLock::new(SessionManager::new(config.sessions.max_sessions))),
            registry: Arc::new(GameRegistry::new()),
            namegen,
            config: Arc::new(config),
        }
    }
}
