use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use uuid::Uuid;

use indic_core::game_trait::{GameEvent, GameOutcome, GameSetup, MiniGame};

/// Events kept per session for snapshots.
const RECENT_EVENT_LIMIT: usize = 32;

/// Mini-games a session can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionGame {
    Quiz,
    Arcade,
}

impl fmt::Display for SessionGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiz => write!(f, "quiz"),
            Self::Arcade => write!(f, "arcade"),
        }
    }
}

/// Factory function type for creating game instances on the server.
type GameFactory = fn() -> Box<dyn MiniGame>;

/// Turns a JSON input into the game's msgpack wire input.
type InputEncoder = fn(serde_json::Value) -> Result<Vec<u8>, String>;

fn encode_input<T: DeserializeOwned + Serialize>(
    value: serde_json::Value,
) -> Result<Vec<u8>, String> {
    let input: T = serde_json::from_value(value).map_err(|e| e.to_string())?;
    rmp_serde::to_vec(&input).map_err(|e| e.to_string())
}

struct RegisteredGame {
    factory: GameFactory,
    encoder: InputEncoder,
}

/// Registry mapping session games to factories and input encoders.
pub struct GameRegistry {
    games: HashMap<SessionGame, RegisteredGame>,
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            games: HashMap::new(),
        };
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        #[cfg(feature = "quiz")]
        self.games.insert(
            SessionGame::Quiz,
            RegisteredGame {
                factory: || Box::new(indic_quiz::QuizQuest::new()),
                encoder: encode_input::<indic_quiz::QuizInput>,
            },
        );
        #[cfg(feature = "arcade")]
        self.games.insert(
            SessionGame::Arcade,
            RegisteredGame {
                factory: || Box::new(indic_arcade::ArcadeBattle::new()),
                encoder: encode_input::<indic_arcade::ArcadeInput>,
            },
        );
    }

    pub fn create(&self, game: SessionGame) -> Option<Box<dyn MiniGame>> {
        self.games.get(&game).map(|g| (g.factory)())
    }

    /// Encode a JSON input for `game`. `None` when the game is not registered.
    pub fn encode(
        &self,
        game: SessionGame,
        input: serde_json::Value,
    ) -> Option<Result<Vec<u8>, String>> {
        self.games.get(&game).map(|g| (g.encoder)(input))
    }

    /// Return the number of registered game types.
    pub fn available_games(&self) -> usize {
        self.games.len()
    }
}

/// Commands sent from HTTP handlers to a session's tick loop.
#[derive(Debug)]
pub enum SessionCommand {
    Input(Vec<u8>),
    SetPaused(bool),
    Snapshot(oneshot::Sender<SessionSnapshot>),
    Stop,
}

/// Point-in-time view of a running session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub game: SessionGame,
    pub name: String,
    pub state: serde_json::Value,
    pub recent_events: Vec<GameEvent>,
    pub over: bool,
    pub outcome: Option<GameOutcome>,
}

/// Spawn a session tick loop as a tokio task.
/// Returns the command sender and the task handle.
pub fn spawn_session(
    registry: &GameRegistry,
    game_id: SessionGame,
    setup: GameSetup,
) -> Option<(mpsc::UnboundedSender<SessionCommand>, JoinHandle<()>)> {
    let game = registry.create(game_id)?;
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(async move {
        run_session_loop(game, game_id, setup, cmd_rx).await;
    });
    Some((cmd_tx, handle))
}

/// Drive one game at its tick rate until stopped or every sender is gone.
async fn run_session_loop(
    mut game: Box<dyn MiniGame>,
    game_id: SessionGame,
    setup: GameSetup,
    mut cmd_rx: mpsc::UnboundedReceiver<SessionCommand>,
) {
    game.init(&setup);
    let name = game.metadata().name;

    let tick_rate = game.tick_rate();
    let dt = 1.0 / tick_rate;
    let mut interval = tokio::time::interval(Duration::from_secs_f32(dt));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let mut recent: VecDeque<GameEvent> = VecDeque::with_capacity(RECENT_EVENT_LIMIT);
    let mut reported_over = false;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                for event in game.update(dt) {
                    if recent.len() == RECENT_EVENT_LIMIT {
                        recent.pop_front();
                    }
                    recent.push_back(event);
                }
                if game.is_over() && !reported_over {
                    reported_over = true;
                    if let Some(outcome) = game.outcome() {
                        tracing::info!(
                            game = %game_id,
                            result = ?outcome.result,
                            score = outcome.score,
                            level = outcome.level,
                            "Session game finished"
                        );
                    }
                } else if !game.is_over() {
                    reported_over = false;
                }
            }
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(SessionCommand::Input(data)) => game.apply_input(&data),
                    Some(SessionCommand::SetPaused(true)) => game.pause(),
                    Some(SessionCommand::SetPaused(false)) => game.resume(),
                    Some(SessionCommand::Snapshot(reply)) => {
                        let snapshot = SessionSnapshot {
                            game: game_id,
                            name: name.clone(),
                            state: game.snapshot(),
                            recent_events: recent.iter().cloned().collect(),
                            over: game.is_over(),
                            outcome: game.outcome(),
                        };
                        let _ = reply.send(snapshot);
                    },
                    Some(SessionCommand::Stop) | None => break,
                }
            }
        }
    }
    tracing::debug!(game = %game_id, "Session loop stopped");
}

#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The session cap is reached.
    Full(usize),
    Unregistered(SessionGame),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full(max) => write!(f, "Session limit of {max} reached, try again later"),
            Self::Unregistered(game) => write!(f, "Game '{game}' is not available"),
        }
    }
}

impl std::error::Error for SessionError {}

struct SessionEntry {
    game: SessionGame,
    cmd_tx: mpsc::UnboundedSender<SessionCommand>,
    task: JoinHandle<()>,
    last_activity: Instant,
}

/// Cheap handle to a live session for use outside the manager lock.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub game: SessionGame,
    pub cmd_tx: mpsc::UnboundedSender<SessionCommand>,
}

impl SessionHandle {
    /// Ask the tick loop for a snapshot. `None` if the loop has exited.
    pub async fn snapshot(&self) -> Option<SessionSnapshot> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx.send(SessionCommand::Snapshot(tx)).ok()?;
        rx.await.ok()
    }
}

/// Owns every running session.
pub struct SessionManager {
    sessions: HashMap<Uuid, SessionEntry>,
    max_sessions: usize,
}

impl SessionManager {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            max_sessions,
        }
    }

    /// Start a new session and return its id.
    pub fn create(
        &mut self,
        registry: &GameRegistry,
        game: SessionGame,
        setup: GameSetup,
    ) -> Result<Uuid, SessionError> {
        if self.sessions.len() >= self.max_sessions {
            return Err(SessionError::Full(self.max_sessions));
        }
        let theme = setup.theme.clone();
        let (cmd_tx, task) =
            spawn_session(registry, game, setup).ok_or(SessionError::Unregistered(game))?;
        let id = Uuid::new_v4();
        self.sessions.insert(
            id,
            SessionEntry {
                game,
                cmd_tx,
                task,
                last_activity: Instant::now(),
            },
        );
        tracing::info!(%id, %game, theme = %theme, "Session created");
        Ok(id)
    }

    /// Look up a session and mark it active.
    pub fn touch(&mut self, id: &Uuid) -> Option<SessionHandle> {
        let entry = self.sessions.get_mut(id)?;
        entry.last_activity = Instant::now();
        Some(SessionHandle {
            game: entry.game,
            cmd_tx: entry.cmd_tx.clone(),
        })
    }

    /// Stop and forget a session. Returns false for unknown ids.
    pub fn remove(&mut self, id: &Uuid) -> bool {
        match self.sessions.remove(id) {
            Some(entry) => {
                stop(entry);
                tracing::info!(%id, "Session removed");
                true
            },
            None => false,
        }
    }

    /// Remove sessions idle longer than `max_idle`. Returns the removed ids.
    pub fn cleanup_idle(&mut self, max_idle: Duration) -> Vec<Uuid> {
        let now = Instant::now();
        let stale: Vec<Uuid> = self
            .sessions
            .iter()
            .filter(|(_, entry)| {
                now.duration_since(entry.last_activity) > max_idle || entry.task.is_finished()
            })
            .map(|(id, _)| *id)
            .collect();
        for id in &stale {
            if let Some(entry) = self.sessions.remove(id) {
                stop(entry);
            }
        }
        if !stale.is_empty() {
            tracing::info!(removed = stale.len(), "Cleaned up idle sessions");
        }
        stale
    }

    pub fn count(&self) -> usize {
        self.sessions.len()
    }
}

fn stop(entry: SessionEntry) {
    if entry.cmd_tx.send(SessionCommand::Stop).is_err() {
        entry.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indic_core::test_helpers::seeded_setup;

    #[test]
    fn registry_has_default_games() {
        let registry = GameRegistry::new();
        assert_eq!(registry.available_games(), 2);
        assert!(registry.create(SessionGame::Quiz).is_some());
        assert!(registry.create(SessionGame::Arcade).is_some());
    }

    #[test]
    fn encoder_rejects_bad_input() {
        let registry = GameRegistry::new();
        let ok = registry.encode(SessionGame::Quiz, serde_json::json!("start"));
        assert!(matches!(ok, Some(Ok(_))));
        let bad = registry.encode(SessionGame::Quiz, serde_json::json!({"jump": true}));
        assert!(matches!(bad, Some(Err(_))));
        let arcade = registry.encode(
            SessionGame::Arcade,
            serde_json::json!({"move": "left", "fire": true}),
        );
        assert!(matches!(arcade, Some(Ok(_))));
    }

    #[test]
    fn session_game_serde_names() {
        assert_eq!(serde_json::to_value(SessionGame::Arcade).unwrap(), "arcade");
        let game: SessionGame = serde_json::from_str(r#""quiz""#).unwrap();
        assert_eq!(game, SessionGame::Quiz);
    }

    #[tokio::test]
    async fn session_applies_input_and_snapshots() {
        let registry = GameRegistry::new();
        let mut manager = SessionManager::new(4);
        let id = manager
            .create(&registry, SessionGame::Quiz, seeded_setup("ramayana", 3))
            .unwrap();
        let handle = manager.touch(&id).unwrap();

        let start = registry
            .encode(SessionGame::Quiz, serde_json::json!("start"))
            .unwrap()
            .unwrap();
        handle.cmd_tx.send(SessionCommand::Input(start)).unwrap();
        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.game, SessionGame::Quiz);
        assert_eq!(snapshot.state["phase"], "story");
        assert!(!snapshot.over);

        assert!(manager.remove(&id));
        assert_eq!(manager.count(), 0);
    }

    #[tokio::test]
    async fn pause_reaches_game() {
        let registry = GameRegistry::new();
        let mut manager = SessionManager::new(4);
        let id = manager
            .create(&registry, SessionGame::Arcade, seeded_setup("ramayana", 1))
            .unwrap();
        let handle = manager.touch(&id).unwrap();
        handle.cmd_tx.send(SessionCommand::SetPaused(true)).unwrap();
        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.state["paused"], true);
        manager.remove(&id);
    }

    #[tokio::test]
    async fn cap_is_enforced() {
        let registry = GameRegistry::new();
        let mut manager = SessionManager::new(1);
        let first = manager
            .create(&registry, SessionGame::Quiz, GameSetup::default())
            .unwrap();
        let err = manager
            .create(&registry, SessionGame::Quiz, GameSetup::default())
            .unwrap_err();
        assert_eq!(err, SessionError::Full(1));
        assert!(manager.remove(&first));
        assert!(!manager.remove(&first));
    }

    #[tokio::test]
    async fn idle_sessions_are_reaped() {
        let registry = GameRegistry::new();
        let mut manager = SessionManager::new(4);
        let id = manager
            .create(&registry, SessionGame::Quiz, GameSetup::default())
            .unwrap();
        assert!(manager.cleanup_idle(Duration::from_secs(60)).is_empty());

        tokio::time::sleep(Duration::from_millis(20)).await;
        let removed = manager.cleanup_idle(Duration::from_millis(1));
        assert_eq!(removed, vec![id]);
        assert!(manager.touch(&id).is_none());
    }

    #[tokio::test]
    async fn stopped_session_refuses_snapshot() {
        let registry = GameRegistry::new();
        let (cmd_tx, handle) =
            spawn_session(&registry, SessionGame::Arcade, GameSetup::default()).unwrap();
        cmd_tx.send(SessionCommand::Stop).unwrap();
        handle.await.unwrap();
        let session = SessionHandle {
            game: SessionGame::Arcade,
            cmd_tx,
        };
        assert!(session.snapshot().await.is_none());
    }
}
