//! HTML pages that drive a mini-game session with plain form posts.

use std::fmt::Write as _;

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use serde_json::{Value, json};

use indic_core::export::escape_html;

use crate::api::{self, CreateSessionRequest, SessionInputRequest};
use crate::error::AppError;
use crate::pages::{PageQuery, SITE_STYLE, selection_for};
use crate::sessions::{SessionGame, SessionSnapshot};
use crate::state::AppState;

const QUIZ_ACTIONS: [(&str, &str); 4] = [
    ("start", "Start"),
    ("continue", "Continue"),
    ("submit", "Submit Answer"),
    ("reset", "Play Again"),
];

const ARCADE_ACTIONS: [(&str, &str); 3] =
    [("left", "◀ Left"), ("fire", "Fire"), ("right", "Right ▶")];

/// Map a page button to a session input.
fn session_input(game: SessionGame, action: &str) -> Option<SessionInputRequest> {
    let mut req = SessionInputRequest::default();
    match (game, action) {
        (_, "pause") => req.paused = Some(true),
        (_, "resume") => req.paused = Some(false),
        (SessionGame::Quiz, "start" | "continue" | "submit" | "reset") => {
            req.input = Some(json!(action));
        },
        (SessionGame::Quiz, other) => {
            let index: usize = other.strip_prefix("select-")?.parse().ok()?;
            req.input = Some(json!({ "select": index }));
        },
        (SessionGame::Arcade, "left" | "right") => req.input = Some(json!({ "move": action })),
        (SessionGame::Arcade, "fire") => req.input = Some(json!({ "fire": true })),
        (SessionGame::Arcade, _) => return None,
    }
    Some(req)
}

fn page(title: &str, lang: &str, refresh: bool, body: &str) -> String {
    let refresh = if refresh {
        "<meta http-equiv=\"refresh\" content=\"1\">\n"
    } else {
        ""
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n{refresh}\
         <title>{title}</title>\n<style>\n{SITE_STYLE}</style>\n</head>\n\
         <body>\n<section>\n{body}<p><a href=\"/?lang={lang}\">← Back to games</a></p>\n\
         </section>\n</body>\n</html>\n",
        title = escape_html(title),
        lang = escape_html(lang),
    )
}

fn error_page(err: AppError, lang: &str) -> Response {
    let body = format!(
        "<div class=\"toast destructive\"><strong>Game Unavailable</strong><p>{}</p></div>\n",
        escape_html(&err.to_string())
    );
    (err.status(), Html(page("Game Unavailable", lang, false, &body))).into_response()
}

fn button(id: &str, lang: &str, action: &str, label: &str) -> String {
    format!(
        "<form method=\"post\" action=\"/sessions/{id}\" style=\"display:inline\">\
         <input type=\"hidden\" name=\"lang\" value=\"{lang}\">\
         <button name=\"action\" value=\"{action}\">{label}</button></form>",
        lang = escape_html(lang),
        action = escape_html(action),
        label = escape_html(label),
    )
}

fn stat(state: &Value, key: &str) -> String {
    state.get(key).map(Value::to_string).unwrap_or_default()
}

/// Render one session snapshot with its controls.
fn render_session(id: &str, lang: &str, snapshot: &SessionSnapshot) -> String {
    let state = &snapshot.state;
    let paused = state["paused"].as_bool().unwrap_or(false);
    let mut body = format!(
        "<h1>{name}</h1>\n<p><span class=\"badge\">Score {score}</span>\
         <span class=\"badge\">Lives {lives}</span><span class=\"badge\">Level {level}</span></p>\n",
        name = escape_html(&snapshot.name),
        score = stat(state, "score"),
        lives = stat(state, "lives"),
        level = stat(state, "level"),
    );

    if let Some(outcome) = snapshot.outcome {
        let _ = writeln!(
            body,
            "<div class=\"card outcome\"><h2>{result:?}</h2><p>Final score {score}</p></div>",
            result = outcome.result,
            score = outcome.score,
        );
    }

    body.push_str("<div class=\"card controls\">\n");
    match snapshot.game {
        SessionGame::Quiz => {
            if let Some(story) = state["story_text"].as_str().filter(|s| !s.is_empty()) {
                let _ = writeln!(body, "<p class=\"story\">{}</p>", escape_html(story));
            }
            if let Some(question) = state["current_question"].as_object() {
                let prompt = question.get("prompt").and_then(Value::as_str).unwrap_or_default();
                let _ = writeln!(body, "<h3>{}</h3>", escape_html(prompt));
                let options = question.get("options").and_then(Value::as_array);
                for (index, option) in options.into_iter().flatten().enumerate() {
                    let label = option.as_str().unwrap_or_default();
                    body.push_str(&button(id, lang, &format!("select-{index}"), label));
                }
                body.push('\n');
            }
            if let Some(feedback) = state["feedback"].as_object() {
                let correct = feedback.get("correct").and_then(Value::as_bool) == Some(true);
                let explanation = feedback
                    .get("explanation")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                let _ = writeln!(
                    body,
                    "<p class=\"feedback\"><strong>{verdict}</strong> {explanation}</p>",
                    verdict = if correct { "Correct!" } else { "Incorrect" },
                    explanation = escape_html(explanation),
                );
            }
            body.push_str("<p>");
            for (action, label) in QUIZ_ACTIONS {
                body.push_str(&button(id, lang, action, label));
            }
        },
        SessionGame::Arcade => {
            let _ = writeln!(
                body,
                "<p>Enemies {enemies} · Combo {combo}</p>",
                enemies = state["enemies"].as_array().map_or(0, Vec::len),
                combo = stat(state, "combo"),
            );
            body.push_str("<p>");
            for (action, label) in ARCADE_ACTIONS {
                body.push_str(&button(id, lang, action, label));
            }
        },
    }
    let (toggle, toggle_label) = if paused { ("resume", "Resume") } else { ("pause", "Pause") };
    body.push_str(&button(id, lang, toggle, toggle_label));
    body.push_str("</p>\n</div>\n");

    body.push_str("<h3>Recent events</h3>\n<ul class=\"events\">");
    for event in snapshot.recent_events.iter().rev() {
        let text = serde_json::to_string(event).unwrap_or_default();
        let _ = write!(body, "<li><code>{}</code></li>", escape_html(&text));
    }
    body.push_str("</ul>\n");

    let _ = writeln!(
        body,
        "<form method=\"post\" action=\"/sessions/{id}/end\">\
         <input type=\"hidden\" name=\"lang\" value=\"{lang}\">\
         <button type=\"submit\">End Game</button></form>",
        lang = escape_html(lang),
    );

    let refresh = snapshot.game == SessionGame::Arcade && !snapshot.over && !paused;
    page(&snapshot.name, lang, refresh, &body)
}

/// Play button form on the game card.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StartFormBody {
    pub lang: String,
    pub game: Option<SessionGame>,
    pub prebuilt: Option<usize>,
    pub theme: String,
}

/// POST /sessions: start a session and redirect to its page.
pub async fn start(State(state): State<AppState>, Form(body): Form<StartFormBody>) -> Response {
    let lang = selection_for(Some(&body.lang)).code().to_string();
    let req = CreateSessionRequest {
        game: body.game,
        prebuilt: body.prebuilt,
        theme: Some(body.theme),
        language: Some(lang.clone()),
        seed: None,
    };
    let started = match api::session_setup(req) {
        Ok((game, setup)) => api::start_session(&state, game, setup).await,
        Err(e) => Err(e),
    };
    match started {
        Ok((id, _)) => Redirect::to(&format!("/sessions/{id}?lang={lang}")).into_response(),
        Err(e) => error_page(e, &lang),
    }
}

/// GET /sessions/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let lang = selection_for(query.lang.as_deref()).code().to_string();
    let handle = match api::session_handle(&state, &id).await {
        Ok(handle) => handle,
        Err(e) => return error_page(e, &lang),
    };
    match handle.snapshot().await {
        Some(snapshot) => Html(render_session(&id, &lang, &snapshot)).into_response(),
        None => error_page(AppError::NotFound("Session has ended".to_string()), &lang),
    }
}

/// A button press on the session page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ActionFormBody {
    pub lang: String,
    pub action: String,
}

/// POST /sessions/{id}: apply a button press and show the updated page.
pub async fn act(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(body): Form<ActionFormBody>,
) -> Response {
    let lang = selection_for(Some(&body.lang)).code().to_string();
    let handle = match api::session_handle(&state, &id).await {
        Ok(handle) => handle,
        Err(e) => return error_page(e, &lang),
    };
    let Some(req) = session_input(handle.game, &body.action) else {
        let err = AppError::BadRequest(format!("Unknown {} action '{}'", handle.game, body.action));
        return error_page(err, &lang);
    };
    if let Err(e) = api::apply_session_input(&state, &handle, req) {
        return error_page(e, &lang);
    }
    Redirect::to(&format!("/sessions/{id}?lang={lang}")).into_response()
}

/// POST /sessions/{id}/end
pub async fn end(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(body): Form<PageQuery>,
) -> Response {
    let lang = selection_for(body.lang.as_deref()).code().to_string();
    if let Ok(id) = api::parse_session_id(&id) {
        state.sessions.write().await.remove(&id);
    }
    Redirect::to(&format!("/?lang={lang}")).into_response()
}
