use std::collections::HashMap;

use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;

use indic_namegen::{FALLBACK_NAME, NameGenClient, NameGenConfig, NameGenError};

const PATH: &str = "/api/2946/game+name+generator+api/3089/username+generator";

/// Echoes the username back as a name when the key is "good".
async fn generator(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    match auth {
        "Bearer good" => {
            let username = params.get("username").cloned().unwrap_or_default();
            Ok(Json(serde_json::json!({ "name": format!("{username} Warriors") })))
        },
        "Bearer empty" => Ok(Json(serde_json::json!({ "unexpected": true }))),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

async fn start_stub() -> String {
    let app = Router::new().route(PATH, get(generator));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: String, api_key: &str) -> NameGenClient {
    NameGenClient::new(NameGenConfig {
        base_url,
        api_key: api_key.to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn generates_name_from_response() {
    let base = start_stub().await;
    let name = client(base, "good").generate("Arjun Dev", None).await.unwrap();
    assert_eq!(name, "Arjun Dev Warriors");
}

#[tokio::test]
async fn request_key_overrides_configured_key() {
    let base = start_stub().await;
    let name = client(base, "bad")
        .generate("mira", Some("good"))
        .await
        .unwrap();
    assert_eq!(name, "mira Warriors");
}

#[tokio::test]
async fn unknown_shape_uses_fallback() {
    let base = start_stub().await;
    let name = client(base, "empty").generate("mira", None).await.unwrap();
    assert_eq!(name, FALLBACK_NAME);
}

#[tokio::test]
async fn error_status_is_reported() {
    let base = start_stub().await;
    let err = client(base, "wrong").generate("mira", None).await.unwrap_err();
    assert!(matches!(err, NameGenError::Status(401)), "got {err}");
}

#[tokio::test]
async fn unreachable_host_is_request_error() {
    let err = client("http://127.0.0.1:1".to_string(), "good")
        .generate("mira", None)
        .await
        .unwrap_err();
    assert!(matches!(err, NameGenError::Request(_)), "got {err}");
}
