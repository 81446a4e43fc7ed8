use std::net::SocketAddr;
use std::time::Duration;

use indic_server::build_app;
use indic_server::config::ServerConfig;

pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a test server with no generation delay.
    pub async fn new() -> Self {
        Self::from_config(test_config()).await
    }

    /// Start a test server whose name generator points at `base_url`.
    pub async fn with_namegen(base_url: &str, api_key: &str) -> Self {
        let mut config = test_config();
        config.namegen.base_url = base_url.to_string();
        config.namegen.api_key = api_key.to_string();
        config.namegen.timeout_secs = 5;
        Self::from_config(config).await
    }

    pub async fn from_config(config: ServerConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (app, _state) = build_app(config);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn api(&self, path: &str) -> String {
        format!("http://{}/api/v1{path}", self.addr)
    }
}

/// Default config with the generation delay disabled.
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.generator.delay_ms = 0;
    config
}

/// POST JSON and return the status and parsed body.
pub async fn post_json(url: &str, body: &serde_json::Value) -> (u16, serde_json::Value) {
    let resp = reqwest::Client::new()
        .post(url)
        .json(body)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let body = resp.json().await.unwrap_or(serde_json::Value::Null);
    (status, body)
}

/// GET and parse JSON.
pub async fn get_json(url: &str) -> (u16, serde_json::Value) {
    let resp = reqwest::get(url).await.unwrap();
    let status = resp.status().as_u16();
    let body = resp.json().await.unwrap_or(serde_json::Value::Null);
    (status, body)
}
