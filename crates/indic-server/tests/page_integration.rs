#[allow(dead_code)]
mod common;

use common::TestServer;

async fn post_form(url: String, form: &[(&str, &str)]) -> (u16, String) {
    let resp = reqwest::Client::new()
        .post(url)
        .form(form)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    (status, resp.text().await.unwrap())
}

#[tokio::test]
async fn index_renders_every_section() {
    let server = TestServer::new().await;
    let resp = reqwest::get(format!("{}/", server.base_url())).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let html = resp.text().await.unwrap();
    for id in ["languages", "generator", "prebuilt", "converter", "names", "featured", "docs"] {
        assert!(html.contains(&format!("<section id=\"{id}\">")), "missing section {id}");
    }
    assert!(html.contains("Indic Game Engine"));
    assert!(html.contains("indic_game_api_key_demo_12345"));
}

#[tokio::test]
async fn index_honours_language() {
    let server = TestServer::new().await;
    let html = reqwest::get(format!("{}/?lang=hindi", server.base_url()))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("<html lang=\"hindi\">"));
    assert!(html.contains("तैयार खेल"));
}

#[tokio::test]
async fn generate_form_missing_fields_shows_toast() {
    let server = TestServer::new().await;
    let (status, html) = post_form(
        format!("{}/generate", server.base_url()),
        &[("title", "Holi Hunt"), ("genre", ""), ("theme", "")],
    )
    .await;
    assert_eq!(status, 422);
    assert!(html.contains("Missing Information"));
    assert!(html.contains("Please fill in all required fields"));
    assert!(html.contains("toast destructive"));
    assert!(!html.contains("class=\"card generated\""));
}

#[tokio::test]
async fn generate_form_success_shows_game() {
    let server = TestServer::new().await;
    let (status, html) = post_form(
        format!("{}/generate", server.base_url()),
        &[
            ("lang", "english"),
            ("title", "Holi Hunt"),
            ("genre", "Puzzle"),
            ("theme", "Festival - Holi"),
            ("description", ""),
        ],
    )
    .await;
    assert_eq!(status, 200);
    assert!(html.contains("Game Generated Successfully!"));
    assert!(html.contains("Your Puzzle game is ready to play and download"));
    assert!(html.contains("class=\"card generated\""));
    assert!(html.contains("HoliHuntGame"));
}

#[tokio::test]
async fn play_loads_prebuilt() {
    let server = TestServer::new().await;
    let resp = reqwest::get(format!("{}/play/0", server.base_url())).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Loaded!"));
    assert!(html.contains("action game ready to play"));
    assert!(html.contains("name=\"prebuilt\" value=\"0\""));

    let missing = reqwest::get(format!("{}/play/99", server.base_url())).await.unwrap();
    assert_eq!(missing.status().as_u16(), 404);
}

#[tokio::test]
async fn convert_form_toasts() {
    let server = TestServer::new().await;
    let (status, html) = post_form(
        format!("{}/convert", server.base_url()),
        &[("source", "telugu"), ("target", "marathi")],
    )
    .await;
    assert_eq!(status, 200);
    assert!(html.contains("Conversion Complete!"));
    assert!(html.contains("Game successfully converted to Marathi"));

    let (status, html) = post_form(
        format!("{}/convert", server.base_url()),
        &[("source", "hindi"), ("target", "hindi")],
    )
    .await;
    assert_eq!(status, 400);
    assert!(html.contains("Same Language"));
}

#[tokio::test]
async fn names_form_requires_api_key() {
    let server = TestServer::new().await;
    let (status, html) = post_form(
        format!("{}/names", server.base_url()),
        &[("username", "arjun"), ("api_key", "")],
    )
    .await;
    assert_eq!(status, 400);
    assert!(html.contains("API Key Required"));
}

#[tokio::test]
async fn download_form_returns_attachment() {
    let server = TestServer::new().await;
    let resp = reqwest::Client::new()
        .post(format!("{}/download", server.base_url()))
        .form(&[
            ("title", "Rangoli  Rush"),
            ("genre", "Puzzle"),
            ("theme", "Art - Rangoli"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let disposition = resp.headers()["content-disposition"].to_str().unwrap().to_string();
    assert_eq!(disposition, "attachment; filename=\"Rangoli_Rush.html\"");

    let prebuilt = reqwest::Client::new()
        .post(format!("{}/download", server.base_url()))
        .form(&[("prebuilt", "1")])
        .send()
        .await
        .unwrap();
    assert_eq!(prebuilt.status().as_u16(), 200);
}

#[tokio::test]
async fn play_button_drives_a_quiz_session() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{}/sessions", server.base_url()))
        .form(&[("lang", "english"), ("game", "quiz"), ("theme", "Mythology - Ramayana")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let session_url = resp.url().as_str().split('?').next().unwrap().to_string();
    assert!(session_url.contains("/sessions/"));
    let html = resp.text().await.unwrap();
    assert!(html.contains("value=\"start\""));

    let (status, html) = post_form(session_url.clone(), &[("lang", "english"), ("action", "start")]).await;
    assert_eq!(status, 200);
    assert!(html.contains("class=\"story\""));

    let (status, _) = post_form(session_url.clone(), &[("action", "jump")]).await;
    assert_eq!(status, 400);

    let (status, html) = post_form(format!("{session_url}/end"), &[("lang", "english")]).await;
    assert_eq!(status, 200);
    assert!(html.contains("<section id=\"generator\">"));

    let gone = reqwest::get(&session_url).await.unwrap();
    assert_eq!(gone.status().as_u16(), 404);
}

#[tokio::test]
async fn generated_card_starts_matching_game() {
    let server = TestServer::new().await;
    let (status, html) = post_form(
        format!("{}/generate", server.base_url()),
        &[
            ("lang", "english"),
            ("title", "Asura Siege"),
            ("genre", "Action"),
            ("theme", "Mythology - Ramayana"),
        ],
    )
    .await;
    assert_eq!(status, 200);
    assert!(html.contains("<li>✓ Analyzing cultural context</li>"));
    assert!(html.contains("name=\"game\" value=\"arcade\""));

    let (status, html) = post_form(
        format!("{}/sessions", server.base_url()),
        &[("lang", "english"), ("game", "arcade"), ("theme", "Mythology - Ramayana")],
    )
    .await;
    assert_eq!(status, 200);
    assert!(html.contains("value=\"fire\""));
    assert!(html.contains("http-equiv=\"refresh\""));

    let (status, _) = post_form(format!("{}/sessions", server.base_url()), &[("lang", "english")]).await;
    assert_eq!(status, 400);
}
