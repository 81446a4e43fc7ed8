//! Data behind the API documentation section. The documented endpoints
//! are illustrative; nothing serves them.

use serde::Serialize;

pub const DEMO_API_KEY: &str = "indic_game_api_key_demo_12345";

pub const API_BASE_URL: &str = "https://api.indicgames.dev";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndpointParam {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub required: bool,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub parameters: &'static [EndpointParam],
}

const fn param(
    name: &'static str,
    required: bool,
    description: &'static str,
) -> EndpointParam {
    EndpointParam {
        name,
        kind: "string",
        required,
        description,
    }
}

pub const ENDPOINTS: [EndpointDoc; 4] = [
    EndpointDoc {
        method: "POST",
        path: "/api/generate-game",
        description: "Generate a new game with specified parameters",
        parameters: &[
            param("title", true, "Game title"),
            param("genre", true, "Game genre"),
            param("theme", true, "Cultural theme"),
            param("language", true, "Target language code"),
            param("description", false, "Additional description"),
        ],
    },
    EndpointDoc {
        method: "GET",
        path: "/api/languages",
        description: "Get list of supported Indian languages",
        parameters: &[],
    },
    EndpointDoc {
        method: "GET",
        path: "/api/themes",
        description: "Get available cultural themes",
        parameters: &[],
    },
    EndpointDoc {
        method: "GET",
        path: "/api/games/{id}",
        description: "Retrieve a specific generated game",
        parameters: &[param("id", true, "Game ID")],
    },
];

/// (tier, limit)
pub const RATE_LIMITS: [(&str, &str); 3] = [
    ("Free Tier", "100 requests/day"),
    ("Pro Tier", "10,000 requests/day"),
    ("Enterprise", "Unlimited"),
];

pub const API_FEATURES: [&str; 6] = [
    "Real-time game generation",
    "22 Indian languages support",
    "Cultural theme integration",
    "Multiple game genres",
    "Downloadable game assets",
    "Voice narration support",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeExample {
    pub language: &'static str,
    pub code: String,
}

/// SDK snippets for the generate endpoint with `api_key` substituted in.
pub fn code_examples(api_key: &str) -> Vec<CodeExample> {
    let javascript = format!(
        r#"// Generate a new game
const response = await fetch('{API_BASE_URL}/api/generate-game', {{
  method: 'POST',
  headers: {{
    'Authorization': 'Bearer {api_key}',
    'Content-Type': 'application/json'
  }},
  body: JSON.stringify({{
    title: "Krishna's Adventure",
    genre: "adventure",
    theme: "mythology-krishna",
    language: "hindi",
    description: "An epic journey of Lord Krishna"
  }})
}});

const game = await response.json();
console.log(game);"#
    );
    let python = format!(
        r#"import requests

# Generate a new game
url = "{API_BASE_URL}/api/generate-game"
headers = {{
    "Authorization": f"Bearer {api_key}",
    "Content-Type": "application/json"
}}
data = {{
    "title": "Krishna's Adventure",
    "genre": "adventure",
    "theme": "mythology-krishna",
    "language": "hindi",
    "description": "An epic journey of Lord Krishna"
}}

response = requests.post(url, headers=headers, json=data)
game = response.json()
print(game)"#
    );
    let curl = format!(
        r#"curl -X POST "{API_BASE_URL}/api/generate-game" \
  -H "Authorization: Bearer {api_key}" \
  -H "Content-Type: application/json" \
  -d '{{
    "title": "Krishna'\''s Adventure",
    "genre": "adventure",
    "theme": "mythology-krishna",
    "language": "hindi",
    "description": "An epic journey of Lord Krishna"
  }}'"#
    );
    vec![
        CodeExample {
            language: "javascript",
            code: javascript,
        },
        CodeExample {
            language: "python",
            code: python,
        },
        CodeExample {
            language: "curl",
            code: curl,
        },
    ]
}

/// Everything the docs section renders, as one serializable bundle.
#[derive(Debug, Clone, Serialize)]
pub struct ApiDocs {
    pub api_key: String,
    pub base_url: &'static str,
    pub endpoints: &'static [EndpointDoc],
    pub examples: Vec<CodeExample>,
    pub rate_limits: Vec<RateLimit>,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimit {
    pub tier: &'static str,
    pub limit: &'static str,
}

impl ApiDocs {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: API_BASE_URL,
            endpoints: &ENDPOINTS,
            examples: code_examples(api_key),
            rate_limits: RATE_LIMITS
                .iter()
                .map(|&(tier, limit)| RateLimit { tier, limit })
                .collect(),
            features: &API_FEATURES,
        }
    }
}

impl Default for ApiDocs {
    fn default() -> Self {
        Self::new(DEMO_API_KEY)
    }
}
