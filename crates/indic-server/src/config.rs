use serde::Deserialize;

use indic_core::docs::DEMO_API_KEY;
use indic_namegen::NameGenConfig;

/// Top-level server configuration, loaded from `indic.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub static_root: String,
    pub generator: GeneratorConfig,
    pub namegen: NameGenConfig,
    pub sessions: SessionsConfig,
    pub docs: DocsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            static_root: "web".to_string(),
            generator: GeneratorConfig::default(),
            namegen: NameGenConfig::default(),
            sessions: SessionsConfig::default(),
            docs: DocsConfig::default(),
        }
    }
}

/// Simulated generation timing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// How long a "generation" takes before the game is returned.
    pub delay_ms: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { delay_ms: 3000 }
    }
}

/// Mini-game session lifecycle.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionsConfig {
    pub max_sessions: usize,
    pub idle_timeout_secs: u64,
    pub idle_check_interval_secs: u64,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            max_sessions: 256,
            idle_timeout_secs: 900,
            idle_check_interval_secs: 60,
        }
    }
}

/// API documentation section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Key substituted into the published code examples.
    pub api_key: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            api_key: DEMO_API_KEY.to_string(),
        }
    }
}

impl ServerConfig {
    /// Check invariants the server relies on.
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(format!(
                "listen_addr '{}' is not a valid socket address",
                self.listen_addr
            ));
        }
        if self.sessions.max_sessions == 0 {
            return Err("sessions.max_sessions must be > 0".to_string());
        }
        if self.sessions.idle_timeout_secs == 0 {
            return Err("sessions.idle_timeout_secs must be > 0".to_string());
        }
        if self.sessions.idle_check_interval_secs == 0 {
            return Err("sessions.idle_check_interval_secs must be > 0".to_string());
        }
        if self.namegen.timeout_secs == 0 {
            return Err("namegen.timeout_secs must be > 0".to_string());
        }

        if !self.namegen.api_key.is_empty() {
            tracing::warn!(
                "namegen.api_key is set in config file; use INDIC_NAMEGEN_API_KEY in production"
            );
        }
        if self.generator.delay_ms > 30_000 {
            tracing::warn!(
                delay_ms = self.generator.delay_ms,
                "Generation delay is unusually long"
            );
        }
        Ok(())
    }

    /// Load config from `indic.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string("indic.toml") {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from indic.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse indic.toml: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No indic.toml found, using defaults");
                ServerConfig::default()
            },
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply `INDIC_*` overrides read through `lookup`. Empty or unparsable
    /// values are ignored.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(addr) = get("INDIC_LISTEN_ADDR") {
            self.listen_addr = addr;
        }
        if let Some(root) = get("INDIC_STATIC_ROOT") {
            self.static_root = root;
        }
        if let Some(key) = get("INDIC_NAMEGEN_API_KEY") {
            self.namegen.api_key = key;
        }
        if let Some(url) = get("INDIC_NAMEGEN_BASE_URL") {
            self.namegen.base_url = url;
        }
        if let Some(key) = get("INDIC_DOCS_API_KEY") {
            self.docs.api_key = key;
        }
        if let Some(val) = get("INDIC_GENERATOR_DELAY_MS")
            && let Ok(ms) = val.parse::<u64>()
        {
            self.generator.delay_ms = ms;
        }
        if let Some(val) = get("INDIC_MAX_SESSIONS")
            && let Ok(n) = val.parse::<usize>()
        {
            self.sessions.max_sessions = n;
        }
        if let Some(val) = get("INDIC_SESSION_IDLE_TIMEOUT_SECS")
            && let Ok(n) = val.parse::<u64>()
        {
            self.sessions.idle_timeout_secs = n;
        }
    }
}
