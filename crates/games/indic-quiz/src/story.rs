/// Shown once a theme's story table runs out.
pub const STORY_FALLBACK: &str = "Your cultural journey continues...";

/// Shown after a wrong answer.
pub const CAREFUL_TEXT: &str = "Your journey continues, but be more careful...";

type Chapters = [&'static str; 5];

const RAMAYANA: Chapters = [
    "🏹 Welcome to Ayodhya! Prince Rama has been chosen to inherit the throne, but fate has other plans...",
    "🌲 The forest exile begins. Rama, Sita, and Lakshmana enter the Dandaka forest, where new adventures await.",
    "👹 The golden deer appears! Sita's desire for the magical creature leads to unexpected consequences.",
    "🔥 The trial by fire! Sita proves her purity, and the epic reaches its climactic conclusion.",
    "👑 Victory and return! Rama is crowned king, and Ayodhya celebrates the return of righteousness.",
];

const MAHABHARATA: Chapters = [
    "⚔️ The great war approaches! The Pandavas and Kauravas prepare for the battle of Kurukshetra.",
    "🏹 Arjuna's dilemma! Krishna delivers the sacred Bhagavad Gita on the battlefield.",
    "🎯 The war begins! Great warriors clash in the ultimate battle between good and evil.",
    "🏆 Dharma prevails! The Pandavas emerge victorious, but at great cost.",
    "👑 The age of truth! Yudhishthira rules with justice and wisdom.",
];

const DIWALI: Chapters = [
    "🪔 The lamps are lit! Diwali celebrations begin with the story of Lord Rama's return.",
    "🎆 Fireworks light up the sky as families come together to celebrate the victory of light.",
    "🍬 Sweet exchanges and gift-giving spread joy throughout the community.",
    "🏠 Homes are decorated with rangoli and diyas, welcoming prosperity.",
    "✨ The festival concludes with prayers for happiness and success in the coming year.",
];

/// Keyword matched against the lowercased theme, and its chapters.
static STORIES: [(&str, &Chapters); 3] = [
    ("ramayana", &RAMAYANA),
    ("mahabharata", &MAHABHARATA),
    ("diwali", &DIWALI),
];

fn chapters_for(theme: &str) -> &'static Chapters {
    let theme = theme.to_lowercase();
    STORIES
        .iter()
        .find(|(key, _)| theme.contains(*key))
        .map_or(&RAMAYANA, |(_, chapters)| *chapters)
}

/// Story text for a 1-based level. Unknown themes use the Ramayana table.
pub fn story_for(theme: &str, level: u32) -> &'static str {
    let Some(index) = (level as usize).checked_sub(1) else {
        return STORY_FALLBACK;
    };
    chapters_for(theme).get(index).copied().unwrap_or(STORY_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_theme_labels_match() {
        assert!(story_for("Mythology - Mahabharata", 1).contains("Kurukshetra"));
        assert!(story_for("Festival - Diwali", 3).contains("Sweet exchanges"));
        assert!(story_for("ramayana", 5).contains("crowned king"));
    }

    #[test]
    fn unknown_theme_falls_back_to_ramayana() {
        assert_eq!(story_for("Art - Warli", 1), RAMAYANA[0]);
    }

    #[test]
    fn levels_outside_table_continue() {
        assert_eq!(story_for("diwali", 6), STORY_FALLBACK);
        assert_eq!(story_for("diwali", 0), STORY_FALLBACK);
    }
}
