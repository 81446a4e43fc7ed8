//! Demo language conversion between sample games.

use std::fmt;

use serde::Serialize;

use crate::i18n;

/// A sample game written natively in one language.
#[derive(Debug, Clone, Copy)]
struct SampleGame {
    title: &'static str,
    language: &'static str,
    description: &'static str,
}

const SAMPLE_GAMES: [SampleGame; 3] = [
    SampleGame {
        title: "राम की यात्रा",
        language: "hindi",
        description: "एक महाकाव्यिक साहसिक खेल जहाँ आप राम के साथ उनकी 14 साल की वनवास यात्रा में शामिल होते हैं।",
    },
    SampleGame {
        title: "রামের যাত্রা",
        language: "bengali",
        description: "একটি মহাকাব্যিক অ্যাডভেঞ্চার গেম যেখানে আপনি রামের সাথে তার ১৪ বছরের বনবাস যাত্রায় যোগ দেন।",
    },
    SampleGame {
        title: "రామ యాత్ర",
        language: "telugu",
        description: "రాముడితో కలిసి అతని 14 సంవత్సరాల వనవాస ప్రయాణంలో మీరు పాల్గొనే ఒక మహాకావ్య సాహస గేమ్.",
    },
];

const CONVERSION_FEATURES: [&str; 5] = [
    "Native script rendering",
    "Cultural context adaptation",
    "Voice narration in target language",
    "Regional folklore integration",
    "Localized UI elements",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    MissingSelection,
    SameLanguage,
    UnknownLanguage(String),
    NoSampleGame(String),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSelection => write!(f, "Please select both source and target languages"),
            Self::SameLanguage => write!(f, "Source and target languages cannot be the same"),
            Self::UnknownLanguage(code) => write!(f, "Unknown language code: {code}"),
            Self::NoSampleGame(code) => write!(f, "No sample game available in {code}"),
        }
    }
}

impl std::error::Error for ConversionError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedGame {
    pub original_title: String,
    pub original_language: String,
    pub original_description: String,
    pub converted_title: String,
    pub target_language: String,
    pub target_language_name: String,
    pub converted_description: String,
    pub conversion_features: Vec<String>,
}

/// Languages that have a sample game to convert from.
pub fn source_languages() -> impl Iterator<Item = &'static str> {
    SAMPLE_GAMES.iter().map(|g| g.language)
}

pub fn convert_game(source: &str, target: &str) -> Result<ConvertedGame, ConversionError> {
    if source.trim().is_empty() || target.trim().is_empty() {
        return Err(ConversionError::MissingSelection);
    }
    if source == target {
        return Err(ConversionError::SameLanguage);
    }
    let target_lang = i18n::find_language(target)
        .ok_or_else(|| ConversionError::UnknownLanguage(target.to_string()))?;
    if i18n::find_language(source).is_none() {
        return Err(ConversionError::UnknownLanguage(source.to_string()));
    }
    let sample = SAMPLE_GAMES
        .iter()
        .find(|g| g.language == source)
        .ok_or_else(|| ConversionError::NoSampleGame(source.to_string()))?;

    Ok(ConvertedGame {
        original_title: sample.title.to_string(),
        original_language: source.to_string(),
        original_description: sample.description.to_string(),
        converted_title: format!("Converted: {}", sample.title),
        target_language: target.to_string(),
        target_language_name: target_lang.name.to_string(),
        converted_description: format!(
            "[{name}] This game has been converted to {name} with culturally appropriate \
             adaptations and native script rendering.",
            name = target_lang.english
        ),
        conversion_features: CONVERSION_FEATURES.iter().map(|f| f.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hindi_to_tamil() {
        let converted = convert_game("hindi", "tamil").unwrap();
        assert_eq!(converted.converted_title, "Converted: राम की यात्रा");
        assert_eq!(converted.target_language_name, "தமிழ்");
        assert!(converted.converted_description.starts_with("[Tamil] "));
        assert_eq!(converted.conversion_features.len(), 5);
    }

    #[test]
    fn rejects_bad_selections() {
        assert_eq!(convert_game("", "tamil"), Err(ConversionError::MissingSelection));
        assert_eq!(convert_game("hindi", "hindi"), Err(ConversionError::SameLanguage));
        assert_eq!(
            convert_game("hindi", "latin"),
            Err(ConversionError::UnknownLanguage("latin".to_string()))
        );
        assert_eq!(
            convert_game("odia", "hindi"),
            Err(ConversionError::NoSampleGame("odia".to_string()))
        );
    }

    #[test]
    fn every_sample_language_is_listed() {
        for code in source_languages() {
            assert!(i18n::find_language(code).is_some());
        }
    }
}
