use serde::{Deserialize, Serialize};

/// Data-driven configuration for the arcade game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    /// Playfield width.
    pub field_width: f32,
    /// Playfield height. y grows downward.
    pub field_height: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Horizontal player speed (units/s).
    pub player_speed: f32,
    /// Upward projectile speed (units/s).
    pub projectile_speed: f32,
    pub projectile_width: f32,
    pub projectile_height: f32,
    /// Minimum delay between shots (seconds).
    pub fire_cooldown: f32,
    pub enemy_size: f32,
    /// Downward enemy speed at level 1 (units/s).
    pub enemy_base_speed: f32,
    /// Extra enemy speed per level above 1.
    pub enemy_speed_per_level: f32,
    /// Seconds between enemy spawns.
    pub spawn_interval: f32,
    /// Cap on simultaneous enemies.
    pub max_enemies: usize,
    pub starting_lives: u8,
    /// Score needed per level.
    pub points_per_level: u32,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            field_width: 100.0,
            field_height: 100.0,
            player_width: 8.0,
            player_height: 6.0,
            player_speed: 60.0,
            projectile_speed: 90.0,
            projectile_width: 1.5,
            projectile_height: 3.0,
            fire_cooldown: 0.25,
            enemy_size: 8.0,
            enemy_base_speed: 15.0,
            enemy_speed_per_level: 5.0,
            spawn_interval: 1.5,
            max_enemies: 12,
            starting_lives: 3,
            points_per_level: 500,
        }
    }
}

impl ArcadeConfig {
    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("INDIC_ARCADE_CONFIG")
            && let Some(config) = Self::from_path(&path)
        {
            return config;
        }
        Self::from_path("config/arcade.toml").unwrap_or_default()
    }

    fn from_path(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        let config = match toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path, error = %e, "Ignoring invalid arcade config");
                return None;
            },
        };
        if let Err(e) = config.validate() {
            tracing::warn!(path, error = %e, "Ignoring invalid arcade config");
            return None;
        }
        Some(config)
    }

    /// Reject tunables that would stall or panic the update loop.
    pub fn validate(&self) -> Result<(), String> {
        if self.spawn_interval.is_nan() || self.spawn_interval <= 0.0 {
            return Err(format!("spawn_interval must be > 0, got {}", self.spawn_interval));
        }
        let room = self.field_width - self.player_width;
        if room.is_nan() || room < 0.0 {
            return Err(format!(
                "field_width ({}) must be >= player_width ({})",
                self.field_width, self.player_width
            ));
        }
        if self.field_width < self.enemy_size {
            return Err(format!(
                "field_width ({}) must be >= enemy_size ({})",
                self.field_width, self.enemy_size
            ));
        }
        if self.fire_cooldown.is_nan() || self.fire_cooldown < 0.0 {
            return Err(format!("fire_cooldown must be >= 0, got {}", self.fire_cooldown));
        }
        if self.starting_lives == 0 {
            return Err("starting_lives must be > 0".to_string());
        }
        Ok(())
    }

    /// Enemy fall speed for a level.
    pub fn enemy_speed(&self, level: u32) -> f32 {
        self.enemy_base_speed + self.enemy_speed_per_level * level.saturating_sub(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ArcadeConfig = toml::from_str("spawn_interval = 0.5\nstarting_lives = 5").unwrap();
        assert_eq!(config.spawn_interval, 0.5);
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.field_width, ArcadeConfig::default().field_width);
    }

    #[test]
    fn enemies_speed_up_per_level() {
        let config = ArcadeConfig::default();
        assert_eq!(config.enemy_speed(1), 15.0);
        assert_eq!(config.enemy_speed(3), 25.0);
        assert_eq!(config.enemy_speed(0), 15.0);
    }

    #[test]
    fn validate_rejects_bad_tunables() {
        assert!(ArcadeConfig::default().validate().is_ok());

        let cfg = ArcadeConfig {
            spawn_interval: 0.0,
            ..ArcadeConfig::default()
        };
        assert!(cfg.validate().unwrap_err().contains("spawn_interval"));

        let cfg = ArcadeConfig {
            spawn_interval: f32::NAN,
            ..ArcadeConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = ArcadeConfig {
            field_width: 4.0,
            ..ArcadeConfig::default()
        };
        assert!(cfg.validate().unwrap_err().contains("player_width"));

        let cfg = ArcadeConfig {
            fire_cooldown: -1.0,
            ..ArcadeConfig::default()
        };
        assert!(cfg.validate().unwrap_err().contains("fire_cooldown"));

        let cfg = ArcadeConfig {
            starting_lives: 0,
            ..ArcadeConfig::default()
        };
        assert!(cfg.validate().unwrap_err().contains("starting_lives"));
    }

    #[test]
    fn invalid_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("indic-arcade-{}.toml", std::process::id()));
        std::fs::write(&path, "spawn_interval = 0.0\n").unwrap();
        let loaded = ArcadeConfig::from_path(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn missing_file_is_none() {
        assert!(ArcadeConfig::from_path("does/not/exist.toml").is_none());
    }
}
