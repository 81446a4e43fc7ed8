use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use indic_core::catalog::{self, CARTOON_HEROES, FEATURED_GAMES, GENRES, PREBUILT_GAMES, THEMES};
use indic_core::convert::{self, ConvertedGame};
use indic_core::docs::ApiDocs;
use indic_core::export;
use indic_core::game_trait::GameSetup;
use indic_core::generator::{
    self, GenerationStage, GeneratorForm, GeneratorSession, PROGRESS_STEPS,
};
use indic_core::i18n::{self, ENGLISH, LANGUAGES};
use indic_core::model::{CartoonHero, FeaturedGame, GameDescriptor, GameKind, Language};
use indic_core::time::timestamp_now;

use crate::error::AppError;
use crate::sessions::{SessionCommand, SessionGame, SessionHandle, SessionSnapshot};
use crate::state::AppState;

const MAX_TITLE_LEN: usize = 128;
const MAX_DESCRIPTION_LEN: usize = 2048;
const MAX_TRANSLATE_LEN: usize = 1024;

/// Optional `?lang=` query shared by catalog endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

/// Resolve an optional language code, rejecting unknown ones.
pub(crate) fn language_or_default(code: Option<&str>) -> Result<String, AppError> {
    match code.map(str::trim).filter(|c| !c.is_empty()) {
        None => Ok(i18n::ENGLISH_CODE.to_string()),
        Some(code) if i18n::is_supported(code) => Ok(code.to_string()),
        Some(code) => Err(AppError::BadRequest(format!("Unsupported language '{code}'"))),
    }
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub default: Language,
    pub languages: &'static [Language],
}

/// GET /api/v1/languages
pub async fn get_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        default: ENGLISH,
        languages: &LANGUAGES,
    })
}

/// GET /api/v1/genres
pub async fn get_genres() -> Json<&'static [&'static str]> {
    let all: &'static [&'static str] = &GENRES;
    Json(all)
}

/// GET /api/v1/themes
pub async fn get_themes() -> Json<&'static [&'static str]> {
    let all: &'static [&'static str] = &THEMES;
    Json(all)
}

/// GET /api/v1/games/prebuilt, localized by `?lang=`.
pub async fn get_prebuilt(
    Query(query): Query<LangQuery>,
) -> Result<Json<Vec<GameDescriptor>>, AppError> {
    let language = language_or_default(query.lang.as_deref())?;
    let games = PREBUILT_GAMES
        .iter()
        .map(|entry| {
            let game = generator::load_prebuilt(entry, &language);
            i18n::translate_game(&game, &language)
        })
        .collect();
    Ok(Json(games))
}

/// GET /api/v1/games/featured
pub async fn get_featured() -> Json<&'static [FeaturedGame]> {
    let games: &'static [FeaturedGame] = &FEATURED_GAMES;
    Json(games)
}

/// GET /api/v1/heroes
pub async fn get_heroes() -> Json<&'static [CartoonHero]> {
    let heroes: &'static [CartoonHero] = &CARTOON_HEROES;
    Json(heroes)
}

/// GET /api/v1/docs
pub async fn get_docs(State(state): State<AppState>) -> Json<ApiDocs> {
    Json(ApiDocs::new(&state.config.docs.api_key))
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub text: String,
    pub language: String,
    pub translated: String,
}

/// POST /api/v1/translate
pub async fn post_translate(
    Json(req): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, AppError> {
    if req.text.len() > MAX_TRANSLATE_LEN {
        return Err(AppError::BadRequest(format!(
            "text exceeds {MAX_TRANSLATE_LEN} chars"
        )));
    }
    let language = language_or_default(Some(&req.language))?;
    let translated = i18n::translate_text(&req.text, &language);
    Ok(Json(TranslateResponse {
        text: req.text,
        language,
        translated,
    }))
}

/// Generator form plus the language to generate for.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(flatten)]
    pub form: GeneratorForm,
    #[serde(default)]
    pub language: Option<String>,
}

pub(crate) fn validate_form_lengths(form: &GeneratorForm) -> Result<(), AppError> {
    if form.title.len() > MAX_TITLE_LEN {
        return Err(AppError::BadRequest(format!("title exceeds {MAX_TITLE_LEN} chars")));
    }
    if form.genre.len() > MAX_TITLE_LEN || form.theme.len() > MAX_TITLE_LEN {
        return Err(AppError::BadRequest(format!(
            "genre and theme must not exceed {MAX_TITLE_LEN} chars"
        )));
    }
    if form.description.len() > MAX_DESCRIPTION_LEN {
        return Err(AppError::BadRequest(format!(
            "description exceeds {MAX_DESCRIPTION_LEN} chars"
        )));
    }
    Ok(())
}

/// Validate, wait out the simulated generation delay, then build the game.
pub(crate) async fn run_generation(
    state: &AppState,
    form: GeneratorForm,
    language: &str,
) -> Result<GameDescriptor, AppError> {
    validate_form_lengths(&form)?;
    let mut session = GeneratorSession::new();
    let pending = session.submit(form, language)?;
    let step_ms = state.config.generator.delay_ms / PROGRESS_STEPS.len() as u64;
    for percent in PROGRESS_STEPS {
        let stage = GenerationStage::for_progress(percent);
        tracing::debug!(percent, stage = stage.message(), "Generation progress");
        if step_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(step_ms)).await;
        }
    }
    let game = session.complete(pending, Some(timestamp_now())).clone();
    tracing::info!(title = %game.title, genre = %game.genre, language, "Game generated");
    Ok(game)
}

/// POST /api/v1/games/generate
pub async fn post_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GameDescriptor>, AppError> {
    let language = language_or_default(req.language.as_deref())?;
    let game = run_generation(&state, req.form, &language).await?;
    Ok(Json(game))
}

fn html_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], body).into_response()
}

/// POST /api/v1/games/preview
pub async fn post_preview(Json(game): Json<GameDescriptor>) -> Response {
    html_response(export::preview_html(&game))
}

/// The standalone game page as a file attachment.
pub(crate) fn attachment(game: &GameDescriptor) -> Response {
    let file_name = export::download_file_name(game).replace('"', "");
    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        export::download_html(game),
    )
        .into_response()
}

/// POST /api/v1/games/download
pub async fn post_download(Json(game): Json<GameDescriptor>) -> Response {
    attachment(&game)
}

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
}

/// POST /api/v1/convert
pub async fn post_convert(
    Json(req): Json<ConvertRequest>,
) -> Result<Json<ConvertedGame>, AppError> {
    let converted = convert::convert_game(&req.source, &req.target)?;
    tracing::debug!(source = %req.source, target = %req.target, "Game converted");
    Ok(Json(converted))
}

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NameResponse {
    pub name: String,
}

/// POST /api/v1/names: proxy to the external name generator.
pub async fn post_names(
    State(state): State<AppState>,
    Json(req): Json<NameRequest>,
) -> Result<Json<NameResponse>, AppError> {
    let client = state
        .namegen
        .as_ref()
        .ok_or_else(|| AppError::Unavailable("Name generator is not configured".to_string()))?;
    let name = client.generate(&req.username, req.api_key.as_deref()).await?;
    Ok(Json(NameResponse { name }))
}

/// Either a game to start directly or a prebuilt catalog entry to play.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateSessionRequest {
    pub game: Option<SessionGame>,
    pub prebuilt: Option<usize>,
    pub theme: Option<String>,
    pub language: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub id: Uuid,
    pub game: SessionGame,
    pub snapshot: Option<SessionSnapshot>,
}

/// Pick the session game and setup for a create request.
pub(crate) fn session_setup(req: CreateSessionRequest) -> Result<(SessionGame, GameSetup), AppError> {
    let language = language_or_default(req.language.as_deref())?;
    let mut setup = GameSetup {
        language,
        seed: req.seed,
        ..GameSetup::default()
    };
    let game = match (req.game, req.prebuilt) {
        (_, Some(index)) => {
            let entry = catalog::prebuilt_game(index)
                .ok_or_else(|| AppError::NotFound(format!("No prebuilt game at index {index}")))?;
            setup.theme = entry.theme.to_string();
            match GameKind::from_genre(entry.genre) {
                GameKind::Action => SessionGame::Arcade,
                GameKind::Traditional => SessionGame::Quiz,
            }
        },
        (Some(game), None) => game,
        (None, None) => {
            return Err(AppError::BadRequest(
                "Either 'game' or 'prebuilt' is required".to_string(),
            ));
        },
    };
    if let Some(theme) = req.theme.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()) {
        setup.theme = theme;
    }
    Ok((game, setup))
}

/// Start a session and return its id with a handle for the first snapshot.
pub(crate) async fn start_session(
    state: &AppState,
    game: SessionGame,
    setup: GameSetup,
) -> Result<(Uuid, SessionHandle), AppError> {
    let mut sessions = state.sessions.write().await;
    let id = sessions.create(&state.registry, game, setup)?;
    sessions
        .touch(&id)
        .map(|handle| (id, handle))
        .ok_or_else(|| AppError::Unavailable("Session ended immediately".to_string()))
}

/// POST /api/v1/sessions
pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<CreateSessionResponse>), AppError> {
    let (game, setup) = session_setup(req)?;
    let (id, handle) = start_session(&state, game, setup).await?;
    let snapshot = handle.snapshot().await;
    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse { id, game, snapshot }),
    ))
}

pub(crate) fn parse_session_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid session id '{raw}'")))
}

pub(crate) async fn session_handle(state: &AppState, raw_id: &str) -> Result<SessionHandle, AppError> {
    let id = parse_session_id(raw_id)?;
    state
        .sessions
        .write()
        .await
        .touch(&id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

async fn snapshot_of(handle: &SessionHandle) -> Result<Json<SessionSnapshot>, AppError> {
    handle
        .snapshot()
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Session has ended".to_string()))
}

/// GET /api/v1/sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let handle = session_handle(&state, &id).await?;
    snapshot_of(&handle).await
}

/// Body of a session input request. Both fields are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SessionInputRequest {
    /// Game input in the game's JSON form, e.g. `"start"` or `{"fire": true}`.
    pub input: Option<serde_json::Value>,
    pub paused: Option<bool>,
}

/// POST /api/v1/sessions/{id}/input: apply input, reply with a snapshot.
pub async fn post_session_input(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SessionInputRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let handle = session_handle(&state, &id).await?;
    apply_session_input(&state, &handle, req)?;
    snapshot_of(&handle).await
}

/// Queue a pause change and an input on a session's tick loop.
pub(crate) fn apply_session_input(
    state: &AppState,
    handle: &SessionHandle,
    req: SessionInputRequest,
) -> Result<(), AppError> {
    let mut commands = Vec::with_capacity(2);
    if let Some(paused) = req.paused {
        commands.push(SessionCommand::SetPaused(paused));
    }
    if let Some(input) = req.input {
        let data = state
            .registry
            .encode(handle.game, input)
            .ok_or_else(|| AppError::BadRequest(format!("Game '{}' is not available", handle.game)))?
            .map_err(|e| AppError::BadRequest(format!("Invalid {} input: {e}", handle.game)))?;
        commands.push(SessionCommand::Input(data));
    }
    for command in commands {
        handle
            .cmd_tx
            .send(command)
            .map_err(|_| AppError::NotFound("Session has ended".to_string()))?;
    }
    Ok(())
}

/// DELETE /api/v1/sessions/{id}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_session_id(&id)?;
    if state.sessions.write().await.remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_defaults_to_english() {
        assert_eq!(language_or_default(None).unwrap(), "english");
        assert_eq!(language_or_default(Some("  ")).unwrap(), "english");
        assert_eq!(language_or_default(Some("tamil")).unwrap(), "tamil");
        assert!(language_or_default(Some("klingon")).is_err());
    }

    #[test]
    fn prebuilt_session_picks_game_by_genre() {
        let action = PREBUILT_GAMES
            .iter()
            .position(|g| GameKind::from_genre(g.genre) == GameKind::Action)
            .unwrap();
        let (game, setup) = session_setup(CreateSessionRequest {
            prebuilt: Some(action),
            ..CreateSessionRequest::default()
        })
        .unwrap();
        assert_eq!(game, SessionGame::Arcade);
        assert_eq!(setup.theme, PREBUILT_GAMES[action].theme);

        let traditional = PREBUILT_GAMES
            .iter()
            .position(|g| GameKind::from_genre(g.genre) == GameKind::Traditional)
            .unwrap();
        let (game, _) = session_setup(CreateSessionRequest {
            prebuilt: Some(traditional),
            theme: Some("diwali".to_string()),
            ..CreateSessionRequest::default()
        })
        .unwrap();
        assert_eq!(game, SessionGame::Quiz);
    }

    #[test]
    fn session_setup_requires_a_game() {
        assert!(matches!(
            session_setup(CreateSessionRequest::default()),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            session_setup(CreateSessionRequest {
                prebuilt: Some(99),
                ..CreateSessionRequest::default()
            }),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn explicit_theme_overrides_default() {
        let (_, setup) = session_setup(CreateSessionRequest {
            game: Some(SessionGame::Quiz),
            theme: Some("Mahabharata".to_string()),
            seed: Some(5),
            ..CreateSessionRequest::default()
        })
        .unwrap();
        assert_eq!(setup.theme, "Mahabharata");
        assert_eq!(setup.seed, Some(5));
        assert_eq!(setup.language, "english");
    }

    #[test]
    fn overlong_title_rejected() {
        let title = "x".repeat(MAX_TITLE_LEN + 1);
        let form = GeneratorForm::new(title, "Puzzle", "Festival - Holi", "");
        assert!(validate_form_lengths(&form).is_err());
        let form = GeneratorForm::new("Holi Hunt", "Puzzle", "Festival - Holi", "");
        assert!(validate_form_lengths(&form).is_ok());
    }
}
