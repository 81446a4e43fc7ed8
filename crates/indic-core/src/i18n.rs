//! Language catalog and string lookup.
//!
//! Lookups are table-driven and never fail: anything without a mapping comes
//! back unchanged.

use crate::model::{GameDescriptor, Language};

/// Code of the built-in source language. Not part of [`LANGUAGES`].
pub const ENGLISH_CODE: &str = "english";

/// The built-in English entry.
pub const ENGLISH: Language = Language {
    code: ENGLISH_CODE,
    name: "English",
    english: "English",
};

/// The 22 scheduled Indian languages offered by the picker.
pub const LANGUAGES: [Language; 22] = [
    Language { code: "hindi", name: "हिंदी", english: "Hindi" },
    Language { code: "bengali", name: "বাংলা", english: "Bengali" },
    Language { code: "telugu", name: "తెలుగు", english: "Telugu" },
    Language { code: "marathi", name: "मराठी", english: "Marathi" },
    Language { code: "tamil", name: "தமிழ்", english: "Tamil" },
    Language { code: "gujarati", name: "ગુજરાતી", english: "Gujarati" },
    Language { code: "urdu", name: "اردو", english: "Urdu" },
    Language { code: "kannada", name: "ಕನ್ನಡ", english: "Kannada" },
    Language { code: "odia", name: "ଓଡ଼ିଆ", english: "Odia" },
    Language { code: "malayalam", name: "മലയാളം", english: "Malayalam" },
    Language { code: "punjabi", name: "ਪੰਜਾਬੀ", english: "Punjabi" },
    Language { code: "assamese", name: "অসমীয়া", english: "Assamese" },
    Language { code: "maithili", name: "मैथिली", english: "Maithili" },
    Language { code: "sanskrit", name: "संस्कृत", english: "Sanskrit" },
    Language { code: "nepali", name: "नेपाली", english: "Nepali" },
    Language { code: "konkani", name: "कोंकणी", english: "Konkani" },
    Language { code: "manipuri", name: "মণিপুরী", english: "Manipuri" },
    Language { code: "sindhi", name: "سندھی", english: "Sindhi" },
    Language { code: "dogri", name: "डोगरी", english: "Dogri" },
    Language { code: "kashmiri", name: "کٲشُر", english: "Kashmiri" },
    Language { code: "santali", name: "ᱥᱟᱱᱛᱟᱲᱤ", english: "Santali" },
    Language { code: "bodo", name: "बड़ो", english: "Bodo" },
];

type Table = &'static [(&'static str, &'static [(&'static str, &'static str)])];

/// Exact-match UI strings.
const UI_STRINGS: Table = &[
    (
        "Generate Game",
        &[
            ("hindi", "गेम बनाएं"),
            ("bengali", "গেম তৈরি করুন"),
            ("tamil", "விளையாட்டு உருவாக்கு"),
            ("telugu", "గేమ్ సృష్టించండి"),
            ("marathi", "गेम तयार करा"),
            ("gujarati", "ગેમ બનાવો"),
            ("kannada", "ಆಟವನ್ನು ರಚಿಸಿ"),
            ("malayalam", "ഗെയിം സൃഷ്ടിക്കുക"),
            ("punjabi", "ਗੇਮ ਬਣਾਓ"),
            ("urdu", "گیم بنائیں"),
        ],
    ),
    (
        "Play Now",
        &[
            ("hindi", "अभी खेलें"),
            ("bengali", "এখনি খেলুন"),
            ("tamil", "இப்போது விளையாடு"),
            ("telugu", "ఇప్పుడే ఆడండి"),
            ("marathi", "आता खेळा"),
            ("gujarati", "હવે રમો"),
            ("kannada", "ಈಗ ಆಡಿ"),
            ("malayalam", "ഇപ്പോൾ കളിക്കുക"),
            ("punjabi", "ਹੁਣੇ ਖੇਡੋ"),
            ("urdu", "اب کھیلیں"),
        ],
    ),
    (
        "Battle Now",
        &[
            ("hindi", "अभी युद्ध करें"),
            ("bengali", "এখনি যুদ্ধ করুন"),
            ("tamil", "இப்போது போர்"),
            ("telugu", "ఇప్పుడే యుద్ధం"),
            ("marathi", "आता लढा"),
            ("gujarati", "હવે યુદ્ધ"),
            ("kannada", "ಈಗ ಯುದ್ಧ"),
            ("malayalam", "ഇപ്പോൾ യുദ്ധം"),
            ("punjabi", "ਹੁਣੇ ਲੜਾਈ"),
            ("urdu", "اب جنگ کریں"),
        ],
    ),
    ("Generate Your Game", &[("hindi", "अपना गेम बनाएं")]),
    ("Download", &[("hindi", "डाउनलोड करें")]),
    ("Ready-to-Play Games", &[("hindi", "तैयार खेल")]),
    ("Custom Game Generator", &[("hindi", "कस्टम गेम जेनरेटर")]),
];

/// Genre names, keyed lowercase.
const GENRES: Table = &[
    (
        "adventure",
        &[
            ("hindi", "साहसिक"),
            ("bengali", "অ্যাডভেঞ্চার"),
            ("tamil", "சாகசம்"),
            ("telugu", "సాహసం"),
            ("marathi", "साहसी"),
            ("gujarati", "સાહસિક"),
            ("kannada", "ಸಾಹಸ"),
            ("malayalam", "സാഹസികത"),
            ("punjabi", "ਸਾਹਸ"),
            ("urdu", "مہم جوئی"),
        ],
    ),
    (
        "puzzle",
        &[
            ("hindi", "पहेली"),
            ("bengali", "ধাঁধা"),
            ("tamil", "புதிர்"),
            ("telugu", "పజిల్"),
            ("marathi", "कोडे"),
            ("gujarati", "કોયડો"),
            ("kannada", "ಒಗಟು"),
            ("malayalam", "പസിൽ"),
            ("punjabi", "ਬੁਝਾਰਤ"),
            ("urdu", "پہیلی"),
        ],
    ),
    (
        "strategy",
        &[
            ("hindi", "रणनीति"),
            ("bengali", "কৌশল"),
            ("tamil", "உத்தி"),
            ("telugu", "వ్యూహం"),
            ("marathi", "धोरण"),
            ("gujarati", "વ્યૂહરચના"),
            ("kannada", "ತಂತ್ರ"),
            ("malayalam", "തന്ത്രം"),
            ("punjabi", "ਰਣਨੀਤੀ"),
            ("urdu", "حکمت عملی"),
        ],
    ),
    (
        "action",
        &[
            ("hindi", "एक्शन"),
            ("bengali", "অ্যাকশন"),
            ("tamil", "நடவடிக்கை"),
            ("telugu", "యాక్షన్"),
            ("marathi", "अॅक्शन"),
            ("gujarati", "એક્શન"),
            ("kannada", "ಆಕ್ಷನ್"),
            ("malayalam", "ആക്ഷൻ"),
            ("punjabi", "ਐਕਸ਼ਨ"),
            ("urdu", "ایکشن"),
        ],
    ),
    (
        "educational",
        &[
            ("hindi", "शैक्षिक"),
            ("bengali", "শিক্ষামূলক"),
            ("tamil", "கல்வி"),
            ("telugu", "విద్యా"),
            ("marathi", "शैक्षणिक"),
            ("gujarati", "શૈક્ષણિક"),
            ("kannada", "ಶೈಕ್ಷಣಿಕ"),
            ("malayalam", "വിദ്യാഭ്യാസ"),
            ("punjabi", "ਸਿੱਖਿਆ"),
            ("urdu", "تعلیمی"),
        ],
    ),
];

/// Titles of the prebuilt games that have localized names.
const TITLES: Table = &[
    (
        "Ramayana Quest",
        &[
            ("hindi", "रामायण क्वेस्ट"),
            ("bengali", "রামায়ণ অনুসন্ধান"),
            ("tamil", "ராமாயண தேடல்"),
            ("telugu", "రామాయణ అన్వేషణ"),
            ("marathi", "रामायण शोध"),
            ("gujarati", "રામાયણ શોધ"),
        ],
    ),
    (
        "Mahabharata Legends",
        &[
            ("hindi", "महाभारत की गाथाएं"),
            ("bengali", "মহাভারতের কিংবদন্তি"),
            ("tamil", "மகாபாரத கதைகள்"),
            ("telugu", "మహాభారత కథలు"),
            ("marathi", "महाभारत दंतकथा"),
            ("gujarati", "મહાભારત દંતકથાઓ"),
        ],
    ),
    (
        "Festival Celebrations",
        &[
            ("hindi", "त्योहार मनाना"),
            ("bengali", "উৎসব উদযাপন"),
            ("tamil", "திருவிழா கொண்டாட்டம்"),
            ("telugu", "పండుగ వేడుకలు"),
            ("marathi", "सण साजरा"),
            ("gujarati", "તહેવાર ઉજવણી"),
        ],
    ),
];

fn lookup(table: Table, key: &str, language: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .and_then(|(_, entries)| entries.iter().find(|(code, _)| *code == language))
        .map(|(_, text)| *text)
}

/// Find a language by code. English is not in the list.
pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Whether `code` names English or a listed language.
pub fn is_supported(code: &str) -> bool {
    code == ENGLISH_CODE || find_language(code).is_some()
}

/// Resolve a code for display, falling back to the first listed language.
pub fn resolve_language(code: &str) -> &'static Language {
    if code == ENGLISH_CODE {
        return &ENGLISH;
    }
    find_language(code).unwrap_or(&LANGUAGES[0])
}

/// Translate a UI string or genre name. Unmapped text is returned unchanged.
pub fn translate_text(text: &str, language: &str) -> String {
    if language == ENGLISH_CODE {
        return text.to_string();
    }
    if let Some(ui) = lookup(UI_STRINGS, text, language) {
        return ui.to_string();
    }
    if let Some(genre) = lookup(GENRES, &text.to_lowercase(), language) {
        return genre.to_string();
    }
    text.to_string()
}

/// Localized title for known prebuilt games; other titles pass through.
pub fn translate_title(title: &str, language: &str) -> String {
    lookup(TITLES, title, language).map_or_else(|| title.to_string(), str::to_string)
}

/// Localize the display fields of a descriptor.
///
/// Descriptions have no table and are kept as-is.
pub fn translate_game(game: &GameDescriptor, language: &str) -> GameDescriptor {
    if language == ENGLISH_CODE {
        return game.clone();
    }
    GameDescriptor {
        title: translate_title(&game.title, language),
        genre: translate_text(&game.genre, language),
        language: language.to_string(),
        ..game.clone()
    }
}

/// The user's current language choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSelection {
    code: String,
}

impl LanguageSelection {
    pub fn new() -> Self {
        Self {
            code: ENGLISH_CODE.to_string(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn current(&self) -> &'static Language {
        resolve_language(&self.code)
    }

    /// Switch languages. Returns false and keeps the old choice for unknown codes.
    pub fn select(&mut self, code: &str) -> bool {
        if !is_supported(code) {
            tracing::debug!(code, "Ignoring unsupported language code");
            return false;
        }
        self.code = code.to_string();
        true
    }

    /// Translate through the current selection.
    pub fn t(&self, text: &str) -> String {
        translate_text(text, &self.code)
    }
}

impl Default for LanguageSelection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn twenty_two_unique_codes() {
        let mut codes: Vec<_> = LANGUAGES.iter().map(|l| l.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 22);
        assert!(!codes.contains(&ENGLISH_CODE));
    }

    #[test]
    fn english_is_identity() {
        assert_eq!(translate_text("Play Now", "english"), "Play Now");
        assert_eq!(translate_text("adventure", "english"), "adventure");
    }

    #[test]
    fn ui_string_maps() {
        assert_eq!(translate_text("Play Now", "hindi"), "अभी खेलें");
        assert_eq!(translate_text("Generate Game", "urdu"), "گیم بنائیں");
    }

    #[test]
    fn genre_lookup_is_case_insensitive() {
        assert_eq!(translate_text("Puzzle", "tamil"), "புதிர்");
        assert_eq!(translate_text("ACTION", "hindi"), "एक्शन");
    }

    #[test]
    fn language_without_mapping_falls_back() {
        assert_eq!(translate_text("Play Now", "bodo"), "Play Now");
        assert_eq!(translate_text("Play Now", "klingon"), "Play Now");
    }

    #[test]
    fn resolve_falls_back_to_first_entry() {
        assert_eq!(resolve_language("english").english, "English");
        assert_eq!(resolve_language("tamil").english, "Tamil");
        assert_eq!(resolve_language("nope").code, "hindi");
    }

    #[test]
    fn translate_game_touches_title_and_genre() {
        let game = GameDescriptor {
            title: "Ramayana Quest".to_string(),
            genre: "adventure".to_string(),
            theme: "mythology - ramayana".to_string(),
            description: "Join Prince Rama".to_string(),
            mechanics: vec![],
            features: vec![],
            code_snippet: String::new(),
            download_url: "#".to_string(),
            language: "english".to_string(),
            kind: Default::default(),
            prebuilt: true,
            generated_at: None,
        };
        let hindi = translate_game(&game, "hindi");
        assert_eq!(hindi.title, "रामायण क्वेस्ट");
        assert_eq!(hindi.genre, "साहसिक");
        assert_eq!(hindi.description, game.description);
        assert_eq!(hindi.language, "hindi");
        assert_eq!(translate_game(&game, "english"), game);
    }

    #[test]
    fn selection_rejects_unknown_codes() {
        let mut sel = LanguageSelection::default();
        assert_eq!(sel.code(), "english");
        assert!(sel.select("kannada"));
        assert_eq!(sel.current().english, "Kannada");
        assert!(!sel.select("latin"));
        assert_eq!(sel.code(), "kannada");
        assert_eq!(sel.t("Play Now"), "ಈಗ ಆಡಿ");
    }

    proptest! {
        #[test]
        fn mapped_strings_translate_for_every_listed_language(idx in 0usize..22) {
            let code = LANGUAGES[idx].code;
            for (key, entries) in UI_STRINGS {
                let expected = entries
                    .iter()
                    .find(|(c, _)| *c == code)
                    .map_or(*key, |(_, text)| *text);
                prop_assert_eq!(translate_text(key, code), expected);
            }
        }

        #[test]
        fn unmapped_strings_are_identity(idx in 0usize..22, text in "[a-z ]{0,24}zz") {
            // The trailing "zz" keeps generated text clear of every table key.
            let code = LANGUAGES[idx].code;
            prop_assert_eq!(translate_text(&text, code), text.clone());
        }
    }
}
