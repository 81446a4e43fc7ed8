use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Core trait implemented by every Indic mini-game.
///
/// The host owns the tick loop and input delivery; the game only handles
/// its own rules and state.
pub trait MiniGame: Send + Sync {
    /// Metadata for the game picker.
    fn metadata(&self) -> GameMetadata;

    /// Called once before the first tick, and again on reset.
    fn init(&mut self, setup: &GameSetup);

    /// Apply one msgpack-encoded input. Malformed inputs are ignored.
    fn apply_input(&mut self, input: &[u8]);

    /// Called each tick. Returns the events produced during this step.
    fn update(&mut self, dt: f32) -> Vec<GameEvent>;

    /// Serialize the full game state.
    fn serialize_state(&self) -> Vec<u8>;

    /// Replace the game state with a previously serialized one.
    fn apply_state(&mut self, state: &[u8]);

    /// JSON view of the state for API clients.
    fn snapshot(&self) -> serde_json::Value;

    /// Simulation tick rate in Hz.
    fn tick_rate(&self) -> f32 {
        10.0
    }

    fn pause(&mut self);

    fn resume(&mut self);

    /// Whether the game has reached a terminal state.
    fn is_over(&self) -> bool;

    /// Final result once the game is over.
    fn outcome(&self) -> Option<GameOutcome>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    pub name: String,
    pub description: String,
    pub estimated_duration: Duration,
}

/// Parameters a session is started with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSetup {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_language")]
    pub language: String,
    /// Seed for the game's RNG. `None` picks one from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_theme() -> String {
    "ramayana".to_string()
}

fn default_language() -> String {
    "english".to_string()
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            language: default_language(),
            seed: None,
        }
    }
}

/// Events emitted by a game during update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    ScoreUpdate { score: u32 },
    LifeLost { lives: u8 },
    AchievementUnlocked { name: String },
    LevelUp { level: u32 },
    PhaseChanged { phase: String },
    GameOver { outcome: GameOutcome },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Victory,
    Defeat,
}

/// Final tally for a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub result: GameResult,
    pub score: u32,
    pub level: u32,
}

/// Generates the 5 boilerplate `MiniGame` methods shared by every game:
/// `serialize_state`, `apply_state`, `pause`, `resume`, `is_over`.
///
/// Requires the implementing struct to have `state: $StateType` and
/// `paused: bool` fields, and `$StateType` to have a `game_over: bool` field.
#[macro_export]
macro_rules! mini_game_boilerplate {
    (state_type: $StateType:ty) => {
        fn serialize_state(&self) -> Vec<u8> {
            rmp_serde::to_vec(&self.state).unwrap_or_default()
        }

        fn apply_state(&mut self, state: &[u8]) {
            if let Ok(s) = rmp_serde::from_slice::<$StateType>(state) {
                self.state = s;
            }
        }

        fn pause(&mut self) {
            self.paused = true;
        }

        fn resume(&mut self) {
            self.paused = false;
        }

        fn is_over(&self) -> bool {
            self.state.game_over
        }
    };
}
