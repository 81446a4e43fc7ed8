//! Standalone HTML pages built from a game descriptor.

use std::fmt::Write as _;

use crate::model::GameDescriptor;

const PAGE_STYLE: &str = "\
body { margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center; \
font-family: 'Segoe UI', sans-serif; color: #fff; \
background: linear-gradient(135deg, #ff6b35 0%, #f7931e 50%, #ffd23f 100%); }
.game-container { max-width: 800px; padding: 40px; text-align: center; border-radius: 20px; \
background: rgba(0, 0, 0, 0.2); }
.game-title { font-size: 2.5em; text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.3); }
.badge { display: inline-block; margin: 4px; padding: 6px 14px; border-radius: 20px; \
background: rgba(255, 255, 255, 0.2); }
.info-section { margin-top: 24px; }
.instructions { margin-top: 24px; opacity: 0.8; }
";

/// Escape text for interpolation into HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn badges(labels: &[String]) -> String {
    let mut out = String::new();
    for label in labels {
        let _ = write!(out, "<span class=\"badge\">{}</span>", escape_html(label));
    }
    out
}

fn page(title: &str, lang: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{PAGE_STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

/// Preview page listing the game's features and mechanics.
pub fn preview_html(game: &GameDescriptor) -> String {
    let title = escape_html(&game.title);
    let body = format!(
        "<div class=\"game-container\">\n\
         <h1 class=\"game-title\">🎮 {title}</h1>\n\
         <div class=\"info-section\"><h3>Game Features:</h3>{features}</div>\n\
         <div class=\"info-section\"><h3>Game Mechanics:</h3>{mechanics}</div>\n\
         <p class=\"instructions\">This is a preview of your generated {genre} game with {theme} theme.\
         <br>The full game would include interactive gameplay, sound effects, and complete mechanics!</p>\n\
         </div>\n",
        features = badges(&game.features),
        mechanics = badges(&game.mechanics),
        genre = escape_html(&game.genre),
        theme = escape_html(&game.theme),
    );
    page(&format!("{title} - Preview"), "en", &body)
}

/// Downloadable standalone game page.
pub fn download_html(game: &GameDescriptor) -> String {
    let title = escape_html(&game.title);
    let body = format!(
        "<div class=\"game-container\">\n\
         <h1 class=\"game-title\">{title}</h1>\n\
         <div class=\"game-area\">🏛️ 🎭 📿 🪔\n\
         <h2>Welcome to {title}!</h2>\n\
         <p>Genre: {genre} | Theme: {theme}</p>\n\
         <p>{description}</p>\n\
         <p class=\"instructions\">Generated with Indic Game Generator</p>\n\
         </div>\n\
         <div class=\"instructions\">Click anywhere to start your cultural gaming adventure!</div>\n\
         </div>\n",
        genre = escape_html(&game.genre),
        theme = escape_html(&game.theme),
        description = escape_html(&game.description),
    );
    page(&title, "en", &body)
}

/// Title with each whitespace run replaced by `_`, plus `.html`.
pub fn download_file_name(game: &GameDescriptor) -> String {
    let mut name = String::with_capacity(game.title.len() + 5);
    let mut in_space = false;
    for c in game.title.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }
    name.push_str(".html");
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{GeneratorForm, generate};

    fn game(title: &str) -> GameDescriptor {
        let form = GeneratorForm::new(title, "Puzzle", "Festival - Holi", "");
        generate(&form, "english", None)
    }

    #[test]
    fn file_name_collapses_whitespace_runs() {
        assert_eq!(download_file_name(&game("Holi  Colour\tRush")), "Holi_Colour_Rush.html");
        assert_eq!(download_file_name(&game("Solo")), "Solo.html");
    }

    #[test]
    fn pages_escape_interpolated_text() {
        let g = game("<script>alert('x')</script>");
        for html in [preview_html(&g), download_html(&g)] {
            assert!(!html.contains("<script>"));
            assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        }
    }

    #[test]
    fn preview_lists_features_and_mechanics() {
        let g = game("Colour Quest");
        let html = preview_html(&g);
        for label in g.features.iter().chain(&g.mechanics) {
            assert!(html.contains(&escape_html(label)), "missing {label}");
        }
        assert!(html.contains("Puzzle game with Festival - Holi theme"));
    }

    #[test]
    fn download_page_welcomes_player() {
        let html = download_html(&game("Colour Quest"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Welcome to Colour Quest!"));
        assert!(html.contains("Genre: Puzzle | Theme: Festival - Holi"));
    }
}
