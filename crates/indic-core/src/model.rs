use serde::{Deserialize, Serialize};

/// Placeholder download link carried by every descriptor.
pub const DOWNLOAD_PLACEHOLDER: &str = "#";

/// Whether a game plays as a real-time action game or a traditional one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Action,
    #[default]
    Traditional,
}

impl GameKind {
    /// Action when the lowercased genre mentions "action".
    pub fn from_genre(genre: &str) -> Self {
        if genre.to_lowercase().contains("action") {
            Self::Action
        } else {
            Self::Traditional
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Traditional => "traditional",
        }
    }
}

/// Display record for a demo game, either generated or prebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDescriptor {
    pub title: String,
    pub genre: String,
    pub theme: String,
    pub description: String,
    pub mechanics: Vec<String>,
    pub features: Vec<String>,
    pub code_snippet: String,
    pub download_url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub kind: GameKind,
    #[serde(default)]
    pub prebuilt: bool,
    #[serde(default)]
    pub generated_at: Option<String>,
}

fn default_language() -> String {
    "english".to_string()
}

/// Static entry in the ready-to-play list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrebuiltGame {
    pub title: &'static str,
    pub genre: &'static str,
    pub theme: &'static str,
    pub description: &'static str,
    pub mechanics: [&'static str; 4],
    pub features: [&'static str; 4],
}

/// A card in the featured-games grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeaturedGame {
    pub id: u32,
    pub title: &'static str,
    pub theme: &'static str,
    pub description: &'static str,
    pub genre: &'static str,
    pub rating: f32,
    pub players: &'static str,
    pub color: &'static str,
}

/// A mascot shown in the cartoon heroes section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartoonHero {
    pub id: u32,
    pub name: &'static str,
    pub emoji: &'static str,
    pub icon: &'static str,
    pub powers: [&'static str; 3],
    pub color: &'static str,
    pub description: &'static str,
}

/// A quiz question. `correct_answer` indexes into `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub points: u32,
    pub category: String,
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer
    }
}

/// Language code with native and English display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub english: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_genre_matches_substring() {
        assert_eq!(GameKind::from_genre("Action"), GameKind::Action);
        assert_eq!(GameKind::from_genre("action-rpg"), GameKind::Action);
        assert_eq!(GameKind::from_genre("Action-Adventure"), GameKind::Action);
        assert_eq!(GameKind::from_genre("puzzle"), GameKind::Traditional);
        assert_eq!(GameKind::from_genre(""), GameKind::Traditional);
    }

    #[test]
    fn descriptor_defaults_when_fields_missing() {
        let json = r##"{
            "title": "T", "genre": "quiz", "theme": "art - warli",
            "description": "d", "mechanics": [], "features": [],
            "code_snippet": "", "download_url": "#"
        }"##;
        let game: GameDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(game.language, "english");
        assert_eq!(game.kind, GameKind::Traditional);
        assert!(!game.prebuilt);
        assert!(game.generated_at.is_none());
    }
}
