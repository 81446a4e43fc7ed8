//! Static content shown on the site.

use serde::Serialize;

use crate::model::{CartoonHero, FeaturedGame, PrebuiltGame};

pub const GENRES: [&str; 12] = [
    "Adventure",
    "Puzzle",
    "Strategy",
    "Educational",
    "RPG",
    "Action",
    "Action-Adventure",
    "Action-RPG",
    "Simulation",
    "Card Game",
    "Board Game",
    "Quiz",
];

pub const THEMES: [&str; 42] = [
    "Mythology - Ramayana",
    "Mythology - Mahabharata",
    "Mythology - Bhagavad Gita",
    "Mythology - Hanuman Chalisa",
    "Mythology - Krishna Leela",
    "Mythology - Shiva Purana",
    "Historical - Mughal Era",
    "Historical - Maratha Empire",
    "Historical - Chola Dynasty",
    "Historical - Gupta Empire",
    "Historical - Mauryan Empire",
    "Historical - Vijayanagara",
    "Festival - Diwali",
    "Festival - Holi",
    "Festival - Dussehra",
    "Festival - Karva Chauth",
    "Festival - Ganesh Chaturthi",
    "Festival - Navratri",
    "Culture - Classical Dance",
    "Culture - Folk Tales",
    "Culture - Ayurveda",
    "Culture - Yoga Traditions",
    "Culture - Sanskrit Literature",
    "Culture - Vedic Wisdom",
    "Geography - Indian States",
    "Geography - Sacred Rivers",
    "Geography - Mountain Ranges",
    "Literature - Sanskrit Poetry",
    "Literature - Tamil Classics",
    "Literature - Vedic Texts",
    "Architecture - Temples",
    "Architecture - Forts",
    "Architecture - Palaces",
    "Cuisine - Regional Foods",
    "Cuisine - Spices & Herbs",
    "Cuisine - Festival Foods",
    "Music - Classical Ragas",
    "Music - Folk Songs",
    "Music - Devotional Music",
    "Art - Madhubani",
    "Art - Warli",
    "Art - Tanjore Painting",
];

/// Ready-to-play games. The first three are action titles.
pub const PREBUILT_GAMES: [PrebuiltGame; 9] = [
    PrebuiltGame {
        title: "Hanuman's Battle",
        genre: "action",
        theme: "mythology - ramayana",
        description: "Fast-paced action game where you play as Hanuman fighting demons to save Sita.",
        mechanics: ["Real-time Combat", "Power-ups", "Enemy Waves", "Boss Battles"],
        features: ["Combo System", "Special Abilities", "Multiple Levels", "Achievement System"],
    },
    PrebuiltGame {
        title: "Arjuna's Arrow Rush",
        genre: "action",
        theme: "mythology - mahabharata",
        description: "Action-packed archery game where you must hit moving targets in the Kurukshetra battlefield.",
        mechanics: ["Precision Shooting", "Moving Targets", "Time Pressure", "Weapon Upgrades"],
        features: ["Slow Motion", "Multiplier System", "Boss Encounters", "Skill Progression"],
    },
    PrebuiltGame {
        title: "Temple Run Defender",
        genre: "action",
        theme: "architecture - temples",
        description: "Defend ancient temples from invaders using mystical powers and strategic combat.",
        mechanics: ["Tower Defense", "Resource Management", "Wave Defense", "Special Powers"],
        features: ["Multiple Towers", "Upgrade System", "Spell Casting", "Epic Boss Fights"],
    },
    PrebuiltGame {
        title: "Ramayana Quest",
        genre: "adventure",
        theme: "mythology - ramayana",
        description: "Join Prince Rama on his epic journey through exile, the search for Sita, and the battle against Ravana.",
        mechanics: ["Story Progression", "Character Development", "Battle System", "Quest Management"],
        features: ["Voice Narration", "Interactive Choices", "Cultural Learning", "Achievement System"],
    },
    PrebuiltGame {
        title: "Mahabharata Legends",
        genre: "strategy",
        theme: "mythology - mahabharata",
        description: "Experience the great war of Kurukshetra and make crucial decisions that shape the destiny of kingdoms.",
        mechanics: ["Strategic Combat", "Diplomatic Choices", "Resource Management", "Alliance Building"],
        features: ["Multiple Endings", "Historical Accuracy", "Character Relationships", "Moral Dilemmas"],
    },
    PrebuiltGame {
        title: "Festival Celebrations",
        genre: "simulation",
        theme: "festival - diwali",
        description: "Plan and organize traditional Indian festivals, learn customs, and spread joy in the community.",
        mechanics: ["Event Planning", "Resource Management", "Community Building", "Cultural Learning"],
        features: ["Regional Variations", "Recipe Collection", "Decoration Crafting", "Social Sharing"],
    },
    PrebuiltGame {
        title: "Classical Dance Academy",
        genre: "educational",
        theme: "culture - classical dance",
        description: "Learn and master traditional Indian dance forms through interactive gameplay and cultural education.",
        mechanics: ["Rhythm Matching", "Pose Recognition", "Story Interpretation", "Performance Scoring"],
        features: ["Multiple Dance Forms", "Cultural Context", "Progressive Learning", "Performance Mode"],
    },
    PrebuiltGame {
        title: "Spice Route Trader",
        genre: "strategy",
        theme: "cuisine - spices & herbs",
        description: "Navigate ancient trade routes, discover exotic spices, and build your trading empire across India.",
        mechanics: ["Trade Management", "Route Planning", "Market Analysis", "Cultural Exchange"],
        features: ["Historical Accuracy", "Recipe Discovery", "Economic Strategy", "Cultural Learning"],
    },
    PrebuiltGame {
        title: "Temple Architecture Builder",
        genre: "simulation",
        theme: "architecture - temples",
        description: "Design and construct magnificent Indian temples while learning about architectural principles and cultural significance.",
        mechanics: ["Building Design", "Resource Management", "Historical Accuracy", "Cultural Integration"],
        features: ["Authentic Styles", "Educational Content", "Visual Showcase", "Historical Context"],
    },
];

pub const FEATURED_GAMES: [FeaturedGame; 6] = [
    FeaturedGame {
        id: 1,
        title: "Ramayana Quest",
        theme: "Epic Adventure",
        description: "Join Hanuman on his legendary journey to rescue Sita",
        genre: "RPG",
        rating: 4.8,
        players: "1.2K",
        color: "blue-purple",
    },
    FeaturedGame {
        id: 2,
        title: "Hanuman's Flight",
        theme: "Action Adventure",
        description: "Soar through the skies with the mighty Hanuman",
        genre: "Action",
        rating: 4.9,
        players: "856",
        color: "orange-red",
    },
    FeaturedGame {
        id: 3,
        title: "Durga's Conquest",
        theme: "Warrior Battle",
        description: "Battle demons alongside the fierce goddess Durga",
        genre: "Combat",
        rating: 4.7,
        players: "2.1K",
        color: "red-pink",
    },
    FeaturedGame {
        id: 4,
        title: "Krishna's Wisdom",
        theme: "Philosophical Quest",
        description: "Learn ancient wisdom through interactive stories",
        genre: "Educational",
        rating: 4.6,
        players: "945",
        color: "indigo-blue",
    },
    FeaturedGame {
        id: 5,
        title: "Shiva's Dance",
        theme: "Cosmic Adventure",
        description: "Experience the cosmic dance with Shiva",
        genre: "Rhythm",
        rating: 4.8,
        players: "1.5K",
        color: "purple-indigo",
    },
    FeaturedGame {
        id: 6,
        title: "Ganesha's Temple",
        theme: "Architecture",
        description: "Build magnificent temples with Ganesha as your guide",
        genre: "Strategy",
        rating: 4.5,
        players: "678",
        color: "green-teal",
    },
];

pub const CARTOON_HEROES: [CartoonHero; 6] = [
    CartoonHero {
        id: 1,
        name: "Cartoon Hanuman",
        emoji: "🐒",
        icon: "🦸",
        powers: ["Super Strength", "Flying", "Shape Shifting"],
        color: "orange-red",
        description: "The mighty monkey warrior with incredible powers",
    },
    CartoonHero {
        id: 2,
        name: "Princess Durga",
        emoji: "👸",
        icon: "👑",
        powers: ["Divine Weapons", "Fearless Combat", "Protection"],
        color: "red-pink",
        description: "The fierce goddess warrior protecting the innocent",
    },
    CartoonHero {
        id: 3,
        name: "Wizard Shiva",
        emoji: "🧙",
        icon: "🔱",
        powers: ["Cosmic Dance", "Destruction", "Transformation"],
        color: "purple-blue",
        description: "The cosmic dancer controlling creation and destruction",
    },
    CartoonHero {
        id: 4,
        name: "Noble Arjuna",
        emoji: "🏹",
        icon: "🎯",
        powers: ["Perfect Aim", "Divine Weapons", "Strategic Mind"],
        color: "blue-cyan",
        description: "The greatest archer with unmatched precision",
    },
    CartoonHero {
        id: 5,
        name: "Wise Ganesha",
        emoji: "🐘",
        icon: "🧠",
        powers: ["Wisdom", "Obstacle Removal", "Good Fortune"],
        color: "green-teal",
        description: "The remover of obstacles and patron of arts",
    },
    CartoonHero {
        id: 6,
        name: "Musical Krishna",
        emoji: "🧙",
        icon: "🪈",
        powers: ["Divine Music", "Charm", "Wisdom"],
        color: "indigo-purple",
        description: "The divine musician spreading joy and wisdom",
    },
];

/// Headline cards under the hero banner.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const HERO_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Mythological Adventures",
        blurb: "Epic quests with legendary heroes",
    },
    Highlight {
        title: "Cultural Learning",
        blurb: "Interactive cultural education",
    },
    Highlight {
        title: "Action Gameplay",
        blurb: "Fast-paced combat experiences",
    },
];

/// (value, label) counters in the hero banner.
pub const HERO_STATS: [(&str, &str); 4] = [
    ("50+", "Game Templates"),
    ("100+", "Heroes"),
    ("24/7", "Instant Play"),
    ("Free", "Open Source"),
];

/// A titled column of footer links.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LinkGroup {
    pub heading: &'static str,
    pub links: [&'static str; 4],
}

pub const FOOTER_LINKS: [LinkGroup; 4] = [
    LinkGroup {
        heading: "Games",
        links: ["Action Games", "Quiz Games", "Adventure Games", "Educational Games"],
    },
    LinkGroup {
        heading: "Culture",
        links: ["Mythology", "Festivals", "Classical Arts", "Architecture"],
    },
    LinkGroup {
        heading: "Tools",
        links: ["Game Generator", "Character Creator", "Story Builder", "API Docs"],
    },
    LinkGroup {
        heading: "Connect",
        links: ["Community", "Support", "Blog", "Newsletter"],
    },
];

pub fn prebuilt_game(index: usize) -> Option<&'static PrebuiltGame> {
    PREBUILT_GAMES.get(index)
}

/// Whether `genre` matches a catalog genre, ignoring case.
pub fn is_known_genre(genre: &str) -> bool {
    GENRES.iter().any(|g| g.eq_ignore_ascii_case(genre))
}

/// Whether `theme` matches a catalog theme, ignoring case.
pub fn is_known_theme(theme: &str) -> bool {
    THEMES.iter().any(|t| t.eq_ignore_ascii_case(theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GameKind;

    #[test]
    fn first_three_prebuilt_are_action() {
        let kinds: Vec<_> = PREBUILT_GAMES
            .iter()
            .map(|g| GameKind::from_genre(g.genre))
            .collect();
        assert!(kinds[..3].iter().all(|k| *k == GameKind::Action));
        assert!(kinds[3..].iter().all(|k| *k == GameKind::Traditional));
    }

    #[test]
    fn prebuilt_themes_are_lowercased_catalog_themes() {
        for game in &PREBUILT_GAMES {
            assert!(is_known_theme(game.theme), "unknown theme {}", game.theme);
        }
    }

    #[test]
    fn prebuilt_index_bounds() {
        assert_eq!(prebuilt_game(0).unwrap().title, "Hanuman's Battle");
        assert!(prebuilt_game(PREBUILT_GAMES.len()).is_none());
    }

    #[test]
    fn genre_match_ignores_case() {
        assert!(is_known_genre("action-rpg"));
        assert!(is_known_genre("CARD GAME"));
        assert!(!is_known_genre("racing"));
    }
}
