#[allow(dead_code)]
mod common;

use common::{TestServer, get_json, post_json};
use serde_json::json;

#[tokio::test]
async fn health_and_ready() {
    let server = TestServer::new().await;
    let (status, body) = get_json(&format!("{}/health", server.base_url())).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["sessions"]["active"], 0);
    assert_eq!(body["sessions"]["games"], 2);

    let ready = reqwest::get(format!("{}/ready", server.base_url()))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(ready, "ready");
}

#[tokio::test]
async fn catalog_endpoints() {
    let server = TestServer::new().await;

    let (_, languages) = get_json(&server.api("/languages")).await;
    assert_eq!(languages["default"]["code"], "english");
    assert_eq!(languages["languages"].as_array().unwrap().len(), 22);

    let (_, genres) = get_json(&server.api("/genres")).await;
    assert_eq!(genres.as_array().unwrap().len(), 12);
    let (_, themes) = get_json(&server.api("/themes")).await;
    assert_eq!(themes.as_array().unwrap().len(), 42);
    let (_, featured) = get_json(&server.api("/games/featured")).await;
    assert_eq!(featured.as_array().unwrap().len(), 6);
    let (_, heroes) = get_json(&server.api("/heroes")).await;
    assert_eq!(heroes.as_array().unwrap().len(), 6);

    let (status, prebuilt) = get_json(&server.api("/games/prebuilt")).await;
    assert_eq!(status, 200);
    let prebuilt = prebuilt.as_array().unwrap();
    assert_eq!(prebuilt.len(), 9);
    assert!(prebuilt.iter().all(|g| g["prebuilt"] == true));
    assert_eq!(
        prebuilt.iter().filter(|g| g["kind"] == "action").count(),
        3
    );
}

#[tokio::test]
async fn prebuilt_rejects_unknown_language() {
    let server = TestServer::new().await;
    let (status, body) = get_json(&server.api("/games/prebuilt?lang=klingon")).await;
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("klingon"));
}

#[tokio::test]
async fn docs_carry_demo_key() {
    let server = TestServer::new().await;
    let (status, docs) = get_json(&server.api("/docs")).await;
    assert_eq!(status, 200);
    assert_eq!(docs["api_key"], "indic_game_api_key_demo_12345");
    assert_eq!(docs["endpoints"].as_array().unwrap().len(), 4);
    let examples = docs["examples"].as_array().unwrap();
    assert_eq!(examples.len(), 3);
    assert!(
        examples
            .iter()
            .all(|e| e["code"].as_str().unwrap().contains("indic_game_api_key_demo_12345"))
    );
}

#[tokio::test]
async fn translate_maps_and_falls_back() {
    let server = TestServer::new().await;
    let (status, body) = post_json(
        &server.api("/translate"),
        &json!({"text": "Generate Game", "language": "hindi"}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["translated"], "गेम बनाएं");

    let (_, body) = post_json(
        &server.api("/translate"),
        &json!({"text": "Unmapped words", "language": "tamil"}),
    )
    .await;
    assert_eq!(body["translated"], "Unmapped words");

    let (status, _) = post_json(
        &server.api("/translate"),
        &json!({"text": "Play Now", "language": "elvish"}),
    )
    .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn generate_builds_descriptor() {
    let server = TestServer::new().await;
    let (status, game) = post_json(
        &server.api("/games/generate"),
        &json!({
            "title": "Holi Color Rush",
            "genre": "Action",
            "theme": "Festival - Holi",
            "description": "",
            "language": "bengali"
        }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(game["title"], "Holi Color Rush");
    assert_eq!(game["kind"], "action");
    assert_eq!(game["language"], "bengali");
    assert_eq!(game["download_url"], "#");
    assert_eq!(
        game["description"],
        "An immersive Action game exploring Festival - Holi"
    );
    assert!(game["code_snippet"].as_str().unwrap().contains("HoliColorRushGame"));
    assert!(game["generated_at"].is_string());
}

#[tokio::test]
async fn generate_reports_missing_fields() {
    let server = TestServer::new().await;
    let (status, body) = post_json(
        &server.api("/games/generate"),
        &json!({"title": "  ", "genre": "Puzzle"}),
    )
    .await;
    assert_eq!(status, 400);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Please fill in all required fields"));
}

#[tokio::test]
async fn download_is_an_attachment() {
    let server = TestServer::new().await;
    let (_, game) = post_json(
        &server.api("/games/generate"),
        &json!({"title": "Diya Quest", "genre": "Puzzle", "theme": "Festival - Diwali"}),
    )
    .await;

    let resp = reqwest::Client::new()
        .post(server.api("/games/download"))
        .json(&game)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let disposition = resp.headers()["content-disposition"].to_str().unwrap().to_string();
    assert_eq!(disposition, "attachment; filename=\"Diya_Quest.html\"");
    let html = resp.text().await.unwrap();
    assert!(html.contains("Welcome to Diya Quest!"));
    assert!(!html.contains("<script"));

    let preview = reqwest::Client::new()
        .post(server.api("/games/preview"))
        .json(&game)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(preview.contains("🎮 Diya Quest"));
}

#[tokio::test]
async fn convert_success_and_errors() {
    let server = TestServer::new().await;
    let (status, body) = post_json(
        &server.api("/convert"),
        &json!({"source": "hindi", "target": "tamil"}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["target_language"], "tamil");
    assert_eq!(body["conversion_features"].as_array().unwrap().len(), 5);
    assert!(body["converted_title"].as_str().unwrap().starts_with("Converted: "));

    let (status, body) = post_json(
        &server.api("/convert"),
        &json!({"source": "hindi", "target": "hindi"}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Source and target languages cannot be the same");

    let (status, _) = post_json(&server.api("/convert"), &json!({"source": "hindi"})).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn names_require_username() {
    let server = TestServer::new().await;
    let (status, body) = post_json(
        &server.api("/names"),
        &json!({"username": "", "api_key": "k"}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Please enter a username to generate a game name");
}

#[tokio::test]
async fn names_report_unreachable_upstream() {
    let server = TestServer::with_namegen("http://127.0.0.1:1", "k").await;
    let (status, body) = post_json(&server.api("/names"), &json!({"username": "arjun"})).await;
    assert_eq!(status, 502);
    assert!(body["error"].as_str().unwrap().starts_with("Failed to generate game name"));
}

#[tokio::test]
async fn unknown_api_route_is_404() {
    let server = TestServer::new().await;
    let resp = reqwest::get(server.api("/nope")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}
