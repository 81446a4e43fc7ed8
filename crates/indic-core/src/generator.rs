//! The mock game generator behind the "Create Custom Game" form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::model::{DOWNLOAD_PLACEHOLDER, GameDescriptor, GameKind, PrebuiltGame};

const ACTION_MECHANICS: [&str; 5] = [
    "Real-time Combat",
    "Health & Energy System",
    "Power-ups Collection",
    "Enemy Encounters",
    "Level Progression",
];

const ACTION_FEATURES: [&str; 5] = [
    "Combo System",
    "Special Abilities",
    "Boss Battles",
    "Weapon Upgrades",
    "Leaderboard",
];

const TRADITIONAL_MECHANICS: [&str; 5] = [
    "Turn-based gameplay",
    "Story-driven progression",
    "Cultural quiz elements",
    "Achievement system",
    "Multiplayer support",
];

const TRADITIONAL_FEATURES: [&str; 5] = [
    "Voice narration in selected language",
    "Authentic cultural graphics",
    "Educational content integration",
    "Leaderboard system",
    "Offline play support",
];

/// A required form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Title,
    Genre,
    Theme,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Title => "title",
            Self::Genre => "genre",
            Self::Theme => "theme",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    MissingFields(Vec<FormField>),
    /// A generation is already running for this session.
    Busy,
    UnknownPrebuilt(usize),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                let names: Vec<String> = fields.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "Please fill in all required fields (missing: {})",
                    names.join(", ")
                )
            },
            Self::Busy => write!(f, "A game is already being generated"),
            Self::UnknownPrebuilt(i) => write!(f, "No prebuilt game at index {i}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Inputs of the custom game form. Only `description` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorForm {
    pub title: String,
    pub genre: String,
    pub theme: String,
    pub description: String,
}

impl GeneratorForm {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        theme: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            theme: theme.into(),
            description: description.into(),
        }
    }

    /// Every required field that is blank after trimming.
    pub fn missing_fields(&self) -> Vec<FormField> {
        [
            (FormField::Title, &self.title),
            (FormField::Genre, &self.genre),
            (FormField::Theme, &self.theme),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(GeneratorError::MissingFields(missing))
        }
    }

}

fn identifier(title: &str) -> String {
    title.split_whitespace().collect()
}

fn label_key(label: &str) -> String {
    label.to_lowercase().split_whitespace().collect()
}

fn quoted_list(labels: &[&str]) -> String {
    labels
        .iter()
        .map(|l| format!("\"{}\"", label_key(l)))
        .collect::<Vec<_>>()
        .join(",\n    ")
}

fn generated_snippet(form: &GeneratorForm, kind: GameKind, language: &str) -> String {
    let (mechanics, features) = match kind {
        GameKind::Action => (&ACTION_MECHANICS, &ACTION_FEATURES),
        GameKind::Traditional => (&TRADITIONAL_MECHANICS, &TRADITIONAL_FEATURES),
    };
    format!(
        "// Generated {genre} Game\n\
         const {ident}Game = {{\n  \
           title: \"{title}\",\n  \
           genre: \"{genre}\",\n  \
           theme: \"{theme}\",\n  \
           language: \"{language}\",\n  \
           gameType: \"{kind}\",\n  \
           mechanics: [\n    {mechanics}\n  ],\n  \
           features: [\n    {features}\n  ],\n  \
           assets: {{\n    \
             graphics: \"cultural_authentic\",\n    \
             audio: \"indic_traditional\",\n    \
             fonts: \"devanagari_unicode\"\n  \
           }}\n\
         }};",
        genre = form.genre,
        ident = identifier(&form.title),
        title = form.title,
        theme = form.theme,
        kind = kind.as_str(),
        mechanics = quoted_list(mechanics),
        features = quoted_list(features),
    )
}

fn prebuilt_snippet(game: &PrebuiltGame, kind: GameKind) -> String {
    format!(
        "// Pre-built {genre} Game: {title}\n\
         const {ident}Game = {{\n  \
           title: \"{title}\",\n  \
           genre: \"{genre}\",\n  \
           theme: \"{theme}\",\n  \
           gameType: \"{kind}\",\n  \
           preBuilt: true,\n  \
           fullyFunctional: true,\n  \
           actionMechanics: {action}\n\
         }};",
        genre = game.genre,
        title = game.title,
        ident = identifier(game.title),
        theme = game.theme,
        kind = kind.as_str(),
        action = kind == GameKind::Action,
    )
}

/// Build a descriptor from a validated form.
pub fn generate(form: &GeneratorForm, language: &str, generated_at: Option<String>) -> GameDescriptor {
    let kind = GameKind::from_genre(&form.genre);
    let (mechanics, features) = match kind {
        GameKind::Action => (&ACTION_MECHANICS, &ACTION_FEATURES),
        GameKind::Traditional => (&TRADITIONAL_MECHANICS, &TRADITIONAL_FEATURES),
    };
    let description = if form.description.trim().is_empty() {
        format!(
            "An immersive {} game exploring {}",
            form.genre, form.theme
        )
    } else {
        form.description.clone()
    };
    GameDescriptor {
        title: form.title.clone(),
        genre: form.genre.clone(),
        theme: form.theme.clone(),
        description,
        mechanics: mechanics.iter().map(|m| m.to_string()).collect(),
        features: features.iter().map(|f| f.to_string()).collect(),
        code_snippet: generated_snippet(form, kind, language),
        download_url: DOWNLOAD_PLACEHOLDER.to_string(),
        language: language.to_string(),
        kind,
        prebuilt: false,
        generated_at,
    }
}

/// Copy a catalog entry into a playable descriptor.
pub fn load_prebuilt(game: &PrebuiltGame, language: &str) -> GameDescriptor {
    let kind = GameKind::from_genre(game.genre);
    GameDescriptor {
        title: game.title.to_string(),
        genre: game.genre.to_string(),
        theme: game.theme.to_string(),
        description: game.description.to_string(),
        mechanics: game.mechanics.iter().map(|m| m.to_string()).collect(),
        features: game.features.iter().map(|f| f.to_string()).collect(),
        code_snippet: prebuilt_snippet(game, kind),
        download_url: DOWNLOAD_PLACEHOLDER.to_string(),
        language: language.to_string(),
        kind,
        prebuilt: true,
        generated_at: None,
    }
}

/// Progress points at which the generator reports a new stage.
pub const PROGRESS_STEPS: [u8; 4] = [0, 30, 60, 90];

/// Status line shown while a generation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenerationStage {
    AnalyzingContext,
    GeneratingMechanics,
    Translating,
    Finalizing,
}

impl GenerationStage {
    pub fn for_progress(percent: u8) -> Self {
        match percent {
            0..30 => Self::AnalyzingContext,
            30..60 => Self::GeneratingMechanics,
            60..90 => Self::Translating,
            _ => Self::Finalizing,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::AnalyzingContext => "Analyzing cultural context",
            Self::GeneratingMechanics => "Generating game mechanics",
            Self::Translating => "Translating to selected language",
            Self::Finalizing => "Finalizing your game",
        }
    }
}

/// Token for an accepted submission, redeemed by [`GeneratorSession::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGeneration {
    form: GeneratorForm,
    language: String,
}

/// Generator panel state: the game on display and whether one is in flight.
#[derive(Debug, Clone, Default)]
pub struct GeneratorSession {
    generated: Option<GameDescriptor>,
    is_generating: bool,
}

impl GeneratorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generated(&self) -> Option<&GameDescriptor> {
        self.generated.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    /// Accept a form for generation. Invalid forms leave the session untouched.
    pub fn submit(
        &mut self,
        form: GeneratorForm,
        language: &str,
    ) -> Result<PendingGeneration, GeneratorError> {
        if self.is_generating {
            return Err(GeneratorError::Busy);
        }
        form.validate()?;
        self.is_generating = true;
        tracing::debug!(title = %form.title, genre = %form.genre, "Generation started");
        Ok(PendingGeneration {
            form,
            language: language.to_string(),
        })
    }

    pub fn complete(
        &mut self,
        pending: PendingGeneration,
        generated_at: Option<String>,
    ) -> &GameDescriptor {
        let game = generate(&pending.form, &pending.language, generated_at);
        self.is_generating = false;
        self.generated.insert(game)
    }

    pub fn load_prebuilt(
        &mut self,
        index: usize,
        language: &str,
    ) -> Result<&GameDescriptor, GeneratorError> {
        let entry = catalog::prebuilt_game(index).ok_or(GeneratorError::UnknownPrebuilt(index))?;
        Ok(&*self.generated.insert(load_prebuilt(entry, language)))
    }
}
