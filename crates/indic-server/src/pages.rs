//! Server-rendered site pages.
//!
//! Every page is one full HTML document built from the core catalogs. Form
//! posts re-render the page with the result and a toast describing it.

use std::fmt::Write as _;

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use indic_core::catalog::{
    CARTOON_HEROES, FEATURED_GAMES, FOOTER_LINKS, GENRES, HERO_HIGHLIGHTS, HERO_STATS,
    PREBUILT_GAMES, THEMES,
};
use indic_core::convert::{self, ConversionError, ConvertedGame};
use indic_core::docs::ApiDocs;
use indic_core::export::escape_html;
use indic_core::generator::{
    self, GenerationStage, GeneratorForm, GeneratorSession, PROGRESS_STEPS,
};
use indic_core::i18n::{self, LANGUAGES, LanguageSelection};
use indic_core::model::{GameDescriptor, GameKind};
use indic_core::notify::{Notification, ToastQueue};
use indic_namegen::NameGenError;

use crate::api;
use crate::error::{AppError, NAME_GENERATION_FAILED};
use crate::sessions::SessionGame;
use crate::state::AppState;

pub(crate) const SITE_STYLE: &str = "\
body { margin: 0; font-family: 'Segoe UI', sans-serif; color: #1f2937; background: #fff7ed; }
section { max-width: 1100px; margin: 0 auto; padding: 48px 16px; }
.hero { text-align: center; background: linear-gradient(135deg, #fed7aa, #fde68a); max-width: none; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 16px; }
.card { background: #fff; border-radius: 16px; padding: 20px; box-shadow: 0 2px 8px rgba(0,0,0,.08); }
.badge { display: inline-block; margin: 2px; padding: 4px 10px; border-radius: 12px; background: #ffedd5; }
.lang.active { font-weight: bold; text-decoration: underline; }
.toasts { position: fixed; top: 16px; right: 16px; width: 320px; }
.toast { margin-bottom: 8px; padding: 12px; border-radius: 8px; background: #fff; border: 1px solid #e5e7eb; }
.toast.destructive { background: #dc2626; color: #fff; }
pre { background: #111827; color: #f9fafb; padding: 12px; border-radius: 8px; overflow-x: auto; }
footer { background: #111827; color: #d1d5db; }
";

/// Optional `?lang=` on page routes. Unknown codes fall back to English.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub lang: Option<String>,
}

pub(crate) fn selection_for(code: Option<&str>) -> LanguageSelection {
    let mut selection = LanguageSelection::new();
    if let Some(code) = code.filter(|c| !c.is_empty()) {
        selection.select(code);
    }
    selection
}

/// Everything one render of the site needs.
pub struct PageView {
    selection: LanguageSelection,
    toasts: ToastQueue,
    form: GeneratorForm,
    game: Option<GameDescriptor>,
    /// Catalog index when `game` came from the prebuilt list.
    prebuilt: Option<usize>,
    converted: Option<ConvertedGame>,
    generated_name: Option<String>,
    docs: ApiDocs,
}

impl PageView {
    pub fn new(state: &AppState, lang: Option<&str>) -> Self {
        Self {
            selection: selection_for(lang),
            toasts: ToastQueue::new(),
            form: GeneratorForm::default(),
            game: None,
            prebuilt: None,
            converted: None,
            generated_name: None,
            docs: ApiDocs::new(&state.config.docs.api_key),
        }
    }

    fn lang(&self) -> &str {
        self.selection.code()
    }

    fn t(&self, text: &str) -> String {
        escape_html(&self.selection.t(text))
    }

    pub fn render(&self) -> String {
        let mut body = String::new();
        body.push_str(&self.toasts_section());
        body.push_str(&hero_section());
        body.push_str(&heroes_section());
        body.push_str(&self.language_section());
        body.push_str(&self.generator_section());
        body.push_str(&self.prebuilt_section());
        body.push_str(&self.converter_section());
        body.push_str(&self.namegen_section());
        body.push_str(&featured_section());
        body.push_str(&self.docs_section());
        body.push_str(&footer_section());
        format!(
            "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>Indic Game Engine</title>\n<style>\n{SITE_STYLE}</style>\n</head>\n\
             <body>\n{body}</body>\n</html>\n",
            lang = escape_html(self.lang()),
        )
    }

    fn toasts_section(&self) -> String {
        if self.toasts.is_empty() {
            return String::new();
        }
        let mut out = String::from("<div class=\"toasts\" role=\"status\">\n");
        for toast in self.toasts.visible() {
            let n = &toast.notification;
            let class = if n.is_destructive() { "toast destructive" } else { "toast" };
            let _ = writeln!(
                out,
                "<div class=\"{class}\" data-timeout=\"{secs}\"><strong>{title}</strong><p>{desc}</p></div>",
                secs = toast.remaining_secs,
                title = escape_html(&n.title),
                desc = escape_html(&n.description),
            );
        }
        out.push_str("</div>\n");
        out
    }

    fn language_section(&self) -> String {
        let mut out = String::from(
            "<section id=\"languages\">\n<h2>Choose Your Language</h2>\n\
             <p>Generate games in any of the 22 official Indian languages with authentic cultural context</p>\n\
             <nav class=\"grid\">\n",
        );
        let current = self.lang();
        let english = std::iter::once(&i18n::ENGLISH);
        for language in english.chain(LANGUAGES.iter()) {
            let class = if language.code == current { "lang active" } else { "lang" };
            let _ = writeln!(
                out,
                "<a class=\"{class}\" href=\"/?lang={code}\">{name} <small>{english}</small></a>",
                code = language.code,
                name = escape_html(language.name),
                english = escape_html(language.english),
            );
        }
        out.push_str("</nav>\n</section>\n");
        out
    }

    fn generator_section(&self) -> String {
        let lang = escape_html(self.lang());
        let mut out = format!(
            "<section id=\"generator\">\n<h2>{heading}</h2>\n<h3>{custom}</h3>\n\
             <form method=\"post\" action=\"/generate\" class=\"card\">\n\
             <input type=\"hidden\" name=\"lang\" value=\"{lang}\">\n\
             <label>Title <input name=\"title\" value=\"{title}\"></label>\n",
            heading = self.t("Generate Your Game"),
            custom = self.t("Custom Game Generator"),
            title = escape_html(&self.form.title),
        );
        out.push_str(&select_field("genre", "Genre", &GENRES, &self.form.genre));
        out.push_str(&select_field("theme", "Theme", &THEMES, &self.form.theme));
        let _ = write!(
            out,
            "<label>Description <textarea name=\"description\">{desc}</textarea></label>\n\
             <button type=\"submit\">{button}</button>\n</form>\n",
            desc = escape_html(&self.form.description),
            button = self.t("Generate Game"),
        );
        if let Some(game) = &self.game {
            out.push_str(&self.game_card(game));
        }
        out.push_str("</section>\n");
        out
    }

    fn game_card(&self, game: &GameDescriptor) -> String {
        let play_label = match game.kind {
            GameKind::Action => self.t("Battle Now"),
            GameKind::Traditional => self.t("Play Now"),
        };
        let session_game = match game.kind {
            GameKind::Action => SessionGame::Arcade,
            GameKind::Traditional => SessionGame::Quiz,
        };
        let lang = escape_html(self.lang());
        let mut out = format!(
            "<article class=\"card generated\">\n<h3>{title}</h3>\n\
             <p><span class=\"badge\">{genre}</span><span class=\"badge\">{theme}</span></p>\n\
             <p>{desc}</p>\n<h4>Mechanics</h4><p>{mechanics}</p>\n<h4>Features</h4><p>{features}</p>\n\
             <pre><code>{code}</code></pre>\n",
            title = escape_html(&game.title),
            genre = escape_html(&game.genre),
            theme = escape_html(&game.theme),
            desc = escape_html(&game.description),
            mechanics = badge_list(&game.mechanics),
            features = badge_list(&game.features),
            code = escape_html(&game.code_snippet),
        );
        if !game.prebuilt {
            out.push_str("<ol class=\"stages\">");
            for percent in PROGRESS_STEPS {
                let message = GenerationStage::for_progress(percent).message();
                let _ = write!(out, "<li>✓ {}</li>", self.t(message));
            }
            out.push_str("</ol>\n");
        }
        let _ = write!(
            out,
            "<form method=\"post\" action=\"/sessions\" class=\"play\">\n\
             <input type=\"hidden\" name=\"lang\" value=\"{lang}\">\n\
             <input type=\"hidden\" name=\"game\" value=\"{session_game}\">\n\
             <input type=\"hidden\" name=\"theme\" value=\"{theme}\">\n\
             <button type=\"submit\">{play_label}</button>\n</form>\n",
            theme = escape_html(&game.theme),
        );
        let _ = write!(
            out,
            "<form method=\"post\" action=\"/download\">\n\
             <input type=\"hidden\" name=\"lang\" value=\"{lang}\">\n"
        );
        match self.prebuilt {
            Some(index) => {
                let _ = writeln!(out, "<input type=\"hidden\" name=\"prebuilt\" value=\"{index}\">");
            },
            None => {
                for (name, value) in [
                    ("title", &self.form.title),
                    ("genre", &self.form.genre),
                    ("theme", &self.form.theme),
                    ("description", &self.form.description),
                ] {
                    let _ = writeln!(
                        out,
                        "<input type=\"hidden\" name=\"{name}\" value=\"{value}\">",
                        value = escape_html(value),
                    );
                }
            },
        }
        let _ = write!(
            out,
            "<button type=\"submit\">{download}</button>\n</form>\n</article>\n",
            download = self.t("Download"),
        );
        out
    }

    fn prebuilt_section(&self) -> String {
        let lang = self.lang();
        let mut out = format!(
            "<section id=\"prebuilt\">\n<h2>{}</h2>\n<div class=\"grid\">\n",
            self.t("Ready-to-Play Games")
        );
        for (index, entry) in PREBUILT_GAMES.iter().enumerate() {
            let label = match GameKind::from_genre(entry.genre) {
                GameKind::Action => self.t("Battle Now"),
                GameKind::Traditional => self.t("Play Now"),
            };
            let _ = writeln!(
                out,
                "<div class=\"card\"><h3>{title}</h3><p><span class=\"badge\">{genre}</span></p>\
                 <p>{desc}</p><a href=\"/play/{index}?lang={lang}\">{label}</a></div>",
                title = escape_html(&i18n::translate_title(entry.title, lang)),
                genre = escape_html(&i18n::translate_text(entry.genre, lang)),
                desc = escape_html(entry.description),
                lang = escape_html(lang),
            );
        }
        out.push_str("</div>\n</section>\n");
        out
    }

    fn converter_section(&self) -> String {
        let codes: Vec<&str> = convert::source_languages().collect();
        let targets: Vec<&str> = LANGUAGES.iter().map(|l| l.code).collect();
        let mut out = format!(
            "<section id=\"converter\">\n<h2>Language Converter</h2>\n\
             <form method=\"post\" action=\"/convert\" class=\"card\">\n\
             <input type=\"hidden\" name=\"lang\" value=\"{lang}\">\n",
            lang = escape_html(self.lang()),
        );
        out.push_str(&select_field("source", "From", &codes, ""));
        out.push_str(&select_field("target", "To", &targets, ""));
        out.push_str("<button type=\"submit\">Convert Game</button>\n</form>\n");
        if let Some(converted) = &self.converted {
            let _ = write!(
                out,
                "<article class=\"card converted\">\n<h3>{title}</h3>\n<p>{original}</p>\n\
                 <p>{desc}</p>\n<p>{features}</p>\n</article>\n",
                title = escape_html(&converted.converted_title),
                original = escape_html(&converted.original_title),
                desc = escape_html(&converted.converted_description),
                features = badge_list(&converted.conversion_features),
            );
        }
        out.push_str("</section>\n");
        out
    }

    fn namegen_section(&self) -> String {
        let mut out = format!(
            "<section id=\"names\">\n<h2>Game Name Generator</h2>\n\
             <form method=\"post\" action=\"/names\" class=\"card\">\n\
             <input type=\"hidden\" name=\"lang\" value=\"{lang}\">\n\
             <label>Username <input name=\"username\"></label>\n\
             <label>API Key <input name=\"api_key\" type=\"password\"></label>\n\
             <button type=\"submit\">Generate Name</button>\n</form>\n",
            lang = escape_html(self.lang()),
        );
        if let Some(name) = &self.generated_name {
            let _ = writeln!(out, "<p class=\"generated-name\">{}</p>", escape_html(name));
        }
        out.push_str("</section>\n");
        out
    }

    fn docs_section(&self) -> String {
        let docs = &self.docs;
        let mut out = format!(
            "<section id=\"docs\">\n<h2>API Documentation</h2>\n\
             <p>Base URL: <code>{base}</code></p>\n<p>API Key: <code>{key}</code></p>\n",
            base = docs.base_url,
            key = escape_html(&docs.api_key),
        );
        for endpoint in docs.endpoints {
            let _ = write!(
                out,
                "<div class=\"card\"><h3><span class=\"badge\">{method}</span> <code>{path}</code></h3>\
                 <p>{desc}</p><ul>",
                method = endpoint.method,
                path = endpoint.path,
                desc = escape_html(endpoint.description),
            );
            for param in endpoint.parameters {
                let required = if param.required { "required" } else { "optional" };
                let _ = write!(
                    out,
                    "<li><code>{name}</code> ({kind}, {required}): {desc}</li>",
                    name = param.name,
                    kind = param.kind,
                    desc = escape_html(param.description),
                );
            }
            out.push_str("</ul></div>\n");
        }
        for example in &docs.examples {
            let _ = writeln!(
                out,
                "<h4>{lang}</h4><pre><code>{code}</code></pre>",
                lang = example.language,
                code = escape_html(&example.code),
            );
        }
        out.push_str("<ul class=\"rate-limits\">");
        for limit in &docs.rate_limits {
            let _ = write!(out, "<li>{}: {}</li>", limit.tier, limit.limit);
        }
        out.push_str("</ul>\n<p>");
        out.push_str(&badge_list(docs.features));
        out.push_str("</p>\n</section>\n");
        out
    }
}

fn badge_list<S: AsRef<str>>(labels: &[S]) -> String {
    labels
        .iter()
        .map(|label| format!("<span class=\"badge\">{}</span>", escape_html(label.as_ref())))
        .collect()
}

fn select_field<S: AsRef<str>>(name: &str, label: &str, options: &[S], selected: &str) -> String {
    let mut out = format!("<label>{label} <select name=\"{name}\">\n<option value=\"\"></option>\n");
    for option in options {
        let option = escape_html(option.as_ref());
        let attr = if option == escape_html(selected) { " selected" } else { "" };
        let _ = writeln!(out, "<option value=\"{option}\"{attr}>{option}</option>");
    }
    out.push_str("</select></label>\n");
    out
}

fn hero_section() -> String {
    let mut out = String::from(
        "<section class=\"hero\">\n<h1>Indic Game Engine</h1>\n\
         <p>Create immersive games celebrating India's rich cultural heritage. \
         From mythological adventures to cultural quests - bring ancient wisdom to modern gaming!</p>\n\
         <div class=\"grid\">\n",
    );
    for highlight in &HERO_HIGHLIGHTS {
        let _ = writeln!(
            out,
            "<div class=\"card\"><h3>{}</h3><p>{}</p></div>",
            highlight.title, highlight.blurb
        );
    }
    out.push_str("</div>\n<div class=\"grid stats\">\n");
    for (value, label) in HERO_STATS {
        let _ = writeln!(out, "<div><strong>{value}</strong> {label}</div>");
    }
    out.push_str("</div>\n</section>\n");
    out
}

fn heroes_section() -> String {
    let mut out = String::from("<section id=\"heroes\">\n<h2>Cartoon Heroes</h2>\n<div class=\"grid\">\n");
    for hero in &CARTOON_HEROES {
        let _ = writeln!(
            out,
            "<div class=\"card hero-card\" data-color=\"{color}\"><h3>{emoji} {name}</h3>\
             <p>{desc}</p><p>{powers}</p></div>",
            color = hero.color,
            emoji = hero.emoji,
            name = escape_html(hero.name),
            desc = escape_html(hero.description),
            powers = badge_list(&hero.powers),
        );
    }
    out.push_str("</div>\n</section>\n");
    out
}

fn featured_section() -> String {
    let mut out = String::from(
        "<section id=\"featured\">\n<h2>Featured Games</h2>\n\
         <p>Discover our most popular cultural games with immersive storytelling</p>\n<div class=\"grid\">\n",
    );
    for game in &FEATURED_GAMES {
        let _ = writeln!(
            out,
            "<div class=\"card\" data-color=\"{color}\"><h3>{title}</h3>\
             <p><span class=\"badge\">{theme}</span><span class=\"badge\">{genre}</span></p>\
             <p>{desc}</p><p>⭐ {rating} · {players}</p></div>",
            color = game.color,
            title = escape_html(game.title),
            theme = escape_html(game.theme),
            genre = escape_html(game.genre),
            desc = escape_html(game.description),
            rating = game.rating,
            players = escape_html(game.players),
        );
    }
    out.push_str("</div>\n</section>\n");
    out
}

fn footer_section() -> String {
    let mut out = String::from(
        "<footer>\n<section>\n<h2>🎮 Indic Game Engine 🎮</h2>\n\
         <p>Preserving and celebrating India's rich cultural heritage through interactive gaming experiences</p>\n\
         <div class=\"grid\">\n",
    );
    for group in &FOOTER_LINKS {
        let _ = write!(out, "<div><h3>{}</h3><ul>", group.heading);
        for link in group.links {
            let _ = write!(out, "<li>{link}</li>");
        }
        out.push_str("</ul></div>\n");
    }
    out.push_str(
        "</div>\n<p>Made with ❤️ for preserving Indian culture through gaming</p>\n\
         <p>© 2024 Indic Game Engine. Celebrating India's timeless heritage through interactive experiences.</p>\n\
         </section>\n</footer>\n",
    );
    out
}

fn html(status: StatusCode, view: &PageView) -> Response {
    (status, Html(view.render())).into_response()
}

/// GET /
pub async fn index(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Response {
    html(StatusCode::OK, &PageView::new(&state, query.lang.as_deref()))
}

/// Generator form fields as posted by the page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateFormBody {
    pub lang: String,
    pub title: String,
    pub genre: String,
    pub theme: String,
    pub description: String,
}

impl GenerateFormBody {
    fn form(&self) -> GeneratorForm {
        GeneratorForm::new(&*self.title, &*self.genre, &*self.theme, &*self.description)
    }
}

/// POST /generate
pub async fn generate(State(state): State<AppState>, Form(body): Form<GenerateFormBody>) -> Response {
    let mut view = PageView::new(&state, Some(&body.lang));
    view.form = body.form();
    if view.form.validate().is_err() {
        view.toasts.push(Notification::destructive(
            "Missing Information",
            "Please fill in all required fields",
        ));
        return html(StatusCode::UNPROCESSABLE_ENTITY, &view);
    }
    let language = view.lang().to_string();
    match api::run_generation(&state, view.form.clone(), &language).await {
        Ok(game) => {
            view.toasts.push(Notification::notice(
                "Game Generated Successfully!",
                format!("Your {} game is ready to play and download", game.genre),
            ));
            view.game = Some(game);
            html(StatusCode::OK, &view)
        },
        Err(e) => {
            view.toasts.push(Notification::destructive("Generation Failed", e.to_string()));
            html(StatusCode::BAD_REQUEST, &view)
        },
    }
}

/// GET /play/{index}: load a prebuilt game into the generator panel.
pub async fn play(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Query(query): Query<PageQuery>,
) -> Response {
    let mut view = PageView::new(&state, query.lang.as_deref());
    let language = view.lang().to_string();
    let mut session = GeneratorSession::new();
    match session.load_prebuilt(index, &language) {
        Ok(game) => {
            let game = i18n::translate_game(game, &language);
            view.toasts.push(Notification::notice(
                format!("{} Loaded!", game.title),
                format!("{} game ready to play", game.genre),
            ));
            view.game = Some(game);
            view.prebuilt = Some(index);
            html(StatusCode::OK, &view)
        },
        Err(e) => {
            view.toasts.push(Notification::destructive("Game Not Found", e.to_string()));
            html(StatusCode::NOT_FOUND, &view)
        },
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConvertFormBody {
    pub lang: String,
    pub source: String,
    pub target: String,
}

fn conversion_toast_title(e: &ConversionError) -> &'static str {
    match e {
        ConversionError::MissingSelection => "Missing Selection",
        ConversionError::SameLanguage => "Same Language",
        ConversionError::UnknownLanguage(_) | ConversionError::NoSampleGame(_) => {
            "Conversion Failed"
        },
    }
}

/// POST /convert
pub async fn convert(State(state): State<AppState>, Form(body): Form<ConvertFormBody>) -> Response {
    let mut view = PageView::new(&state, Some(&body.lang));
    match convert::convert_game(&body.source, &body.target) {
        Ok(converted) => {
            view.toasts.push(Notification::notice(
                "Conversion Complete!",
                format!(
                    "Game successfully converted to {}",
                    i18n::resolve_language(&converted.target_language).english
                ),
            ));
            view.converted = Some(converted);
            html(StatusCode::OK, &view)
        },
        Err(e) => {
            view.toasts
                .push(Notification::destructive(conversion_toast_title(&e), e.to_string()));
            html(StatusCode::BAD_REQUEST, &view)
        },
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NameFormBody {
    pub lang: String,
    pub username: String,
    pub api_key: String,
}

/// POST /names
pub async fn names(State(state): State<AppState>, Form(body): Form<NameFormBody>) -> Response {
    let mut view = PageView::new(&state, Some(&body.lang));
    let Some(client) = state.namegen.as_ref() else {
        view.toasts.push(Notification::destructive(
            "Generation Failed",
            "Name generator is not configured",
        ));
        return html(StatusCode::SERVICE_UNAVAILABLE, &view);
    };
    match client.generate(&body.username, Some(&body.api_key)).await {
        Ok(name) => {
            view.toasts.push(Notification::notice(
                "Game Name Generated!",
                "Your unique game name has been created successfully",
            ));
            view.generated_name = Some(name);
            html(StatusCode::OK, &view)
        },
        Err(e) => {
            let (status, title, desc) = if e.is_input_error() {
                (StatusCode::BAD_REQUEST, name_toast_title(&e), e.to_string())
            } else {
                tracing::warn!(error = %e, "Name generation failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Generation Failed",
                    NAME_GENERATION_FAILED.to_string(),
                )
            };
            view.toasts.push(Notification::destructive(title, desc));
            html(status, &view)
        },
    }
}

fn name_toast_title(e: &NameGenError) -> &'static str {
    match e {
        NameGenError::MissingUsername => "Username Required",
        NameGenError::MissingApiKey => "API Key Required",
        _ => "Generation Failed",
    }
}

/// Download form: either a prebuilt index or the generator fields.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DownloadFormBody {
    pub lang: String,
    pub prebuilt: Option<usize>,
    pub title: String,
    pub genre: String,
    pub theme: String,
    pub description: String,
}

/// POST /download: rebuild the shown game and return it as an attachment.
pub async fn download(Form(body): Form<DownloadFormBody>) -> Result<Response, AppError> {
    let language = selection_for(Some(&body.lang)).code().to_string();
    let game = match body.prebuilt {
        Some(index) => {
            let mut session = GeneratorSession::new();
            i18n::translate_game(session.load_prebuilt(index, &language)?, &language)
        },
        None => {
            let form = GeneratorForm::new(body.title, body.genre, body.theme, body.description);
            form.validate()?;
            api::validate_form_lengths(&form)?;
            generator::generate(&form, &language, None)
        },
    };
    Ok(api::attachment(&game))
}
