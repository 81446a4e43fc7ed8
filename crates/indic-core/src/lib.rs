pub mod catalog;
pub mod convert;
pub mod docs;
pub mod export;
pub mod game_trait;
pub mod generator;
pub mod i18n;
pub mod model;
pub mod notify;
pub mod time;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::game_trait::{GameEvent, GameSetup, MiniGame};

    /// Setup with a fixed seed so draws are reproducible.
    pub fn seeded_setup(theme: &str, seed: u64) -> GameSetup {
        GameSetup {
            theme: theme.to_string(),
            language: "english".to_string(),
            seed: Some(seed),
        }
    }

    /// Run N game ticks, returning all accumulated events.
    pub fn run_game_ticks(game: &mut dyn MiniGame, n: usize, dt: f32) -> Vec<GameEvent> {
        let mut all_events = Vec::new();
        for _ in 0..n {
            all_events.extend(game.update(dt));
        }
        all_events
    }

    /// Assert that the game's serialized state differs from `before`.
    pub fn assert_game_state_changed(game: &dyn MiniGame, before: &[u8]) {
        let after = game.serialize_state();
        assert_ne!(
            before,
            &after[..],
            "Game state should have changed after operation"
        );
    }

    // ================================================================
    // Game Trait Contract Tests
    // ================================================================
    // Every MiniGame implementation must pass these. Game crates call them
    // from their own #[cfg(test)] modules with a concrete game instance.

    /// After init(), serialize_state() must return non-empty bytes.
    pub fn contract_init_creates_state(game: &mut dyn MiniGame) {
        game.init(&seeded_setup("ramayana", 7));
        let state = game.serialize_state();
        assert!(
            !state.is_empty(),
            "serialize_state() must return non-empty bytes after init"
        );
        assert!(!game.is_over(), "a fresh game must not be over");
        assert!(game.outcome().is_none());
    }

    /// apply_input() with valid data followed by update() must change state.
    pub fn contract_apply_input_changes_state(game: &mut dyn MiniGame, valid_input: &[u8]) {
        let before = game.serialize_state();
        game.apply_input(valid_input);
        game.update(0.1);
        assert_game_state_changed(game, &before);
    }

    /// Garbage input must be ignored without panicking.
    pub fn contract_malformed_input_ignored(game: &mut dyn MiniGame) {
        let before = game.serialize_state();
        game.apply_input(&[0xc1, 0xff, 0x00]);
        assert_eq!(before, game.serialize_state(), "malformed input changed state");
    }

    /// serialize_state → apply_state must be stable after one roundtrip.
    pub fn contract_state_roundtrip_preserves(game: &mut dyn MiniGame) {
        let state_a = game.serialize_state();
        game.apply_state(&state_a);
        let state_b = game.serialize_state();
        game.apply_state(&state_b);
        let state_c = game.serialize_state();
        assert_eq!(
            state_b, state_c,
            "State must be stable after serialize→apply→serialize roundtrip"
        );
    }

    /// pause() must freeze the game, resume() must unfreeze it.
    /// The game must be in a state where a 1 s update changes something.
    pub fn contract_pause_stops_updates(game: &mut dyn MiniGame) {
        game.pause();
        let before = game.serialize_state();
        game.update(1.0);
        let during_pause = game.serialize_state();
        assert_eq!(before, during_pause, "State must not change while paused");

        game.resume();
        game.update(1.0);
        let after_resume = game.serialize_state();
        assert_ne!(during_pause, after_resume, "State must change after resume");
    }

    /// snapshot() must be a JSON object.
    pub fn contract_snapshot_is_object(game: &dyn MiniGame) -> serde_json::Value {
        let snapshot = game.snapshot();
        assert!(snapshot.is_object(), "snapshot must be a JSON object");
        snapshot
    }
}
