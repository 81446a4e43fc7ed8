pub mod collision;
pub mod config;
pub mod scoring;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use indic_core::game_trait::{
    GameEvent, GameMetadata, GameOutcome, GameResult, GameSetup, MiniGame,
};
use indic_core::mini_game_boilerplate;

use collision::Rect;
use config::ArcadeConfig;

/// Horizontal move input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    #[default]
    None,
    Left,
    Right,
}

/// Input from the arcade player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeInput {
    #[serde(rename = "move")]
    pub move_dir: MoveDirection,
    pub fire: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

/// Serializable arcade state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcadeState {
    pub theme: String,
    pub player_x: f32,
    pub player_y: f32,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    pub combo: u32,
    pub defeated: u32,
    pub achievements: Vec<String>,
    pub spawn_timer: f32,
    pub fire_cooldown: f32,
    pub elapsed: f32,
    pub next_id: u32,
    pub game_over: bool,
}

/// The action arcade game: shoot falling demons before they reach you.
pub struct ArcadeBattle {
    state: ArcadeState,
    pending_input: ArcadeInput,
    paused: bool,
    rng: StdRng,
    game_config: ArcadeConfig,
}

impl ArcadeBattle {
    pub fn new() -> Self {
        Self::with_config(ArcadeConfig::load())
    }

    /// Build with explicit tunables. Invalid tunables fall back to defaults.
    pub fn with_config(config: ArcadeConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid arcade config, using defaults");
                ArcadeConfig::default()
            },
        };
        Self {
            state: Self::initial_state(&config, "ramayana"),
            pending_input: ArcadeInput::default(),
            paused: false,
            rng: StdRng::seed_from_u64(rand::random()),
            game_config: config,
        }
    }

    fn initial_state(config: &ArcadeConfig, theme: &str) -> ArcadeState {
        ArcadeState {
            theme: theme.to_string(),
            player_x: (config.field_width - config.player_width) / 2.0,
            player_y: config.field_height - config.player_height,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            lives: config.starting_lives,
            level: 1,
            combo: 0,
            defeated: 0,
            achievements: Vec::new(),
            spawn_timer: 0.0,
            fire_cooldown: 0.0,
            elapsed: 0.0,
            next_id: 1,
            game_over: false,
        }
    }

    pub fn state(&self) -> &ArcadeState {
        &self.state
    }

    pub fn config(&self) -> &ArcadeConfig {
        &self.game_config
    }

    fn player_rect(&self) -> Rect {
        Rect::new(
            self.state.player_x,
            self.state.player_y,
            self.game_config.player_width,
            self.game_config.player_height,
        )
    }

    fn enemy_rect(&self, enemy: &Enemy) -> Rect {
        let size = self.game_config.enemy_size;
        Rect::new(enemy.x, enemy.y, size, size)
    }

    fn projectile_rect(&self, p: &Projectile) -> Rect {
        Rect::new(
            p.x,
            p.y,
            self.game_config.projectile_width,
            self.game_config.projectile_height,
        )
    }

    fn take_id(&mut self) -> u32 {
        let id = self.state.next_id;
        self.state.next_id = self.state.next_id.wrapping_add(1);
        id
    }

    /// Place an enemy at the top of the field. Used by tests to set up hits.
    pub fn spawn_enemy_at(&mut self, x: f32, y: f32) {
        let id = self.take_id();
        let speed = self.game_config.enemy_speed(self.state.level);
        self.state.enemies.push(Enemy { id, x, y, speed });
    }

    fn apply_player_input(&mut self, dt: f32) {
        let input = std::mem::take(&mut self.pending_input);
        let cfg = &self.game_config;
        let dx = match input.move_dir {
            MoveDirection::None => 0.0,
            MoveDirection::Left => -cfg.player_speed * dt,
            MoveDirection::Right => cfg.player_speed * dt,
        };
        self.state.player_x =
            (self.state.player_x + dx).clamp(0.0, cfg.field_width - cfg.player_width);

        self.state.fire_cooldown = (self.state.fire_cooldown - dt).max(0.0);
        if input.fire && self.state.fire_cooldown <= 0.0 {
            let x = self.state.player_x + (cfg.player_width - cfg.projectile_width) / 2.0;
            let y = self.state.player_y - cfg.projectile_height;
            self.state.fire_cooldown = cfg.fire_cooldown;
            let id = self.take_id();
            self.state.projectiles.push(Projectile { id, x, y });
        }
    }

    fn move_entities(&mut self, dt: f32) {
        let projectile_step = self.game_config.projectile_speed * dt;
        let projectile_h = self.game_config.projectile_height;
        for p in &mut self.state.projectiles {
            p.y -= projectile_step;
        }
        self.state.projectiles.retain(|p| p.y + projectile_h > 0.0);
        for e in &mut self.state.enemies {
            e.y += e.speed * dt;
        }
    }

    /// Projectile × enemy: both removed, combo grows, points awarded.
    fn resolve_hits(&mut self, events: &mut Vec<GameEvent>) {
        let mut i = 0;
        while i < self.state.projectiles.len() {
            let shot = self.projectile_rect(&self.state.projectiles[i]);
            let targets: Vec<Rect> = self
                .state
                .enemies
                .iter()
                .map(|e| self.enemy_rect(e))
                .collect();
            match collision::first_hit(&shot, &targets) {
                Some(hit) => {
                    self.state.projectiles.swap_remove(i);
                    self.state.enemies.remove(hit);
                    self.state.combo += 1;
                    self.state.defeated += 1;
                    self.state.score += scoring::hit_points(self.state.combo);
                    events.push(GameEvent::ScoreUpdate {
                        score: self.state.score,
                    });
                    self.unlock_achievements(events);
                },
                None => i += 1,
            }
        }
    }

    /// Enemy × player costs a life; enemies past the bottom break the combo.
    fn resolve_enemy_contacts(&mut self, events: &mut Vec<GameEvent>) {
        let player = self.player_rect();
        let field_height = self.game_config.field_height;
        let mut lost = 0u8;
        let mut escaped = false;
        let enemies = std::mem::take(&mut self.state.enemies);
        for enemy in enemies {
            if self.enemy_rect(&enemy).overlaps(&player) {
                lost += 1;
            } else if enemy.y > field_height {
                escaped = true;
            } else {
                self.state.enemies.push(enemy);
            }
        }
        if escaped || lost > 0 {
            self.state.combo = 0;
        }
        for _ in 0..lost {
            if self.state.lives == 0 {
                break;
            }
            self.state.lives -= 1;
            events.push(GameEvent::LifeLost {
                lives: self.state.lives,
            });
        }
    }

    fn spawn_enemies(&mut self, dt: f32) {
        self.state.spawn_timer += dt;
        while self.state.spawn_timer >= self.game_config.spawn_interval {
            self.state.spawn_timer -= self.game_config.spawn_interval;
            if self.state.enemies.len() >= self.game_config.max_enemies {
                continue;
            }
            let max_x = (self.game_config.field_width - self.game_config.enemy_size).max(0.0);
            let x = self.rng.random_range(0.0..=max_x);
            self.spawn_enemy_at(x, -self.game_config.enemy_size);
        }
    }

    fn unlock_achievements(&mut self, events: &mut Vec<GameEvent>) {
        for name in scoring::earned_achievements(self.state.defeated, self.state.combo) {
            if !self.state.achievements.iter().any(|a| a == name) {
                self.state.achievements.push(name.to_string());
                events.push(GameEvent::AchievementUnlocked {
                    name: name.to_string(),
                });
            }
        }
    }

    fn update_level(&mut self, events: &mut Vec<GameEvent>) {
        let level = scoring::level_for_score(self.state.score, self.game_config.points_per_level);
        if level > self.state.level {
            self.state.level = level;
            let speed = self.game_config.enemy_speed(level);
            for e in &mut self.state.enemies {
                e.speed = speed;
            }
            events.push(GameEvent::LevelUp { level });
            tracing::debug!(level, "Arcade level up");
        }
    }
}

impl Default for ArcadeBattle {
    fn default() -> Self {
        Self::with_config(ArcadeConfig::default())
    }
}

impl MiniGame for ArcadeBattle {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Demon Battle Arena".to_string(),
            description: "Dodge and strike down the demon waves. Chain hits for combo points."
                .to_string(),
            estimated_duration: Duration::from_secs(120),
        }
    }

    fn init(&mut self, setup: &GameSetup) {
        self.state = Self::initial_state(&self.game_config, &setup.theme);
        self.pending_input = ArcadeInput::default();
        self.paused = false;
        self.rng = StdRng::seed_from_u64(setup.seed.unwrap_or_else(rand::random));
    }

    fn apply_input(&mut self, input: &[u8]) {
        match rmp_serde::from_slice::<ArcadeInput>(input) {
            Err(e) => {
                tracing::debug!(error = %e, "Dropped malformed arcade input");
            },
            Ok(ai) => {
                // Keep a move until the next tick; fire latches until consumed
                if ai.move_dir != MoveDirection::None {
                    self.pending_input.move_dir = ai.move_dir;
                }
                if ai.fire {
                    self.pending_input.fire = true;
                }
            },
        }
    }

    fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.paused || self.state.game_over {
            return events;
        }
        self.state.elapsed += dt;

        self.apply_player_input(dt);
        self.move_entities(dt);
        self.resolve_hits(&mut events);
        self.resolve_enemy_contacts(&mut events);
        self.spawn_enemies(dt);
        self.update_level(&mut events);

        if self.state.lives == 0 {
            self.state.game_over = true;
            if let Some(outcome) = self.outcome() {
                events.push(GameEvent::GameOver { outcome });
            }
            tracing::info!(
                score = self.state.score,
                defeated = self.state.defeated,
                "Arcade game over"
            );
        }
        events
    }

    mini_game_boilerplate!(state_type: ArcadeState);

    fn snapshot(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(&self.state).unwrap_or_default();
        if let Some(map) = value.as_object_mut() {
            map.insert("field_width".into(), self.game_config.field_width.into());
            map.insert("field_height".into(), self.game_config.field_height.into());
            map.insert("paused".into(), self.paused.into());
        }
        value
    }

    fn outcome(&self) -> Option<GameOutcome> {
        self.state.game_over.then(|| GameOutcome {
            result: GameResult::Defeat,
            score: self.state.score,
            level: self.state.level,
        })
    }
}
