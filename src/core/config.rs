//! Gameplay tuning loaded from an external RON file.
//!
//! Allows tweaking speeds, timers and the enemy roster without recompilation.
//! Every field has a default, so a partial file only overrides what it names.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::ConfigError;

/// Default location of the tuning file.
pub const CONFIG_PATH: &str = "assets/data/game.ron";

/// Player movement, health and power-up tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub base_speed: f32,
    pub max_hp: f32,
    pub hit_damage: f32,
    /// Seconds a power pickup lasts
    pub power_duration: f32,
    pub power_speed_multiplier: f32,
    /// Food pull speed while powered up
    pub magnet_speed: f32,
    pub projectile_speed: f32,
    /// How far past the screen edge the player may go before wrapping
    pub wrap_margin: f32,
    /// How far past the opposite edge the player reappears
    pub wrap_reentry: f32,
    /// The player's lane; boss volleys travel along `hover_height - muzzle_drop`
    pub start_y: f32,
    pub radius: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            base_speed: 7.0,
            max_hp: 100.0,
            hit_damage: 20.0,
            power_duration: 20.0,
            power_speed_multiplier: 1.5,
            magnet_speed: 12.0,
            projectile_speed: 12.0,
            wrap_margin: 0.5,
            wrap_reentry: 0.4,
            start_y: -1.0,
            radius: 0.5,
        }
    }
}

/// Spawn timer and food roll tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub enemy_first: f32,
    pub enemy_interval: f32,
    pub enemy_speed: f32,
    pub food_first: f32,
    pub food_interval: f32,
    pub food_speed: f32,
    /// Height above the view where new entities appear
    pub spawn_height: f32,
    /// Roll thresholds out of 100, checked in order
    pub power_below: u32,
    pub banana_below: u32,
    pub pear_below: u32,
    pub pringle_below: u32,
    pub radius: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            enemy_first: 0.5,
            enemy_interval: 1.5,
            enemy_speed: 4.0,
            food_first: 1.0,
            food_interval: 1.2,
            food_speed: 2.5,
            spawn_height: 6.0,
            power_below: 10,
            banana_below: 25,
            pear_below: 45,
            pringle_below: 65,
            radius: 0.4,
        }
    }
}

/// Score milestones and enemy roster order.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProgressionTuning {
    pub milestone_step: u32,
    pub boss_threshold: u32,
    /// Variants spawnable from the start
    pub active_enemies: Vec<String>,
    /// Variants released one per milestone, in order
    pub locked_enemies: Vec<String>,
}

impl Default for ProgressionTuning {
    fn default() -> Self {
        Self {
            milestone_step: 30,
            boss_threshold: 180,
            active_enemies: vec!["grunt".to_string()],
            locked_enemies: ["ghost", "red", "green", "octopus", "death", "orange"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Boss encounter tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BossTuning {
    pub max_hp: f32,
    /// Hit points lost per player projectile
    pub hit_damage: f32,
    pub spawn_position: (f32, f32),
    pub descent_speed: f32,
    /// The boss stops descending at or below this height
    pub hover_height: f32,
    pub patrol_speed: f32,
    /// Distance kept from the screen edge while patrolling
    pub edge_margin: f32,
    pub first_fire: f32,
    pub fire_interval: f32,
    pub projectile_speed: f32,
    /// Projectiles appear this far below the boss
    pub muzzle_drop: f32,
    pub radius: f32,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            max_hp: 100.0,
            hit_damage: 20.0,
            spawn_position: (0.0, 4.0),
            descent_speed: 2.0,
            hover_height: 0.5,
            patrol_speed: 3.0,
            edge_margin: 1.5,
            first_fire: 2.0,
            fire_interval: 1.5,
            projectile_speed: 7.0,
            muzzle_drop: 1.5,
            radius: 1.4,
        }
    }
}

/// World bounds used for culling and the camera.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    /// Entities with |x| beyond this are culled
    pub cull_x: f32,
    /// Entities with |y| beyond this are culled
    pub cull_y: f32,
    /// Visible world height; the camera keeps this fixed
    pub view_height: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            cull_x: 25.0,
            cull_y: 15.0,
            view_height: 10.0,
        }
    }
}

/// Optional audio clip paths. Missing entries play nothing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AudioPaths {
    pub hit: Option<String>,
    pub eat: Option<String>,
    pub power: Option<String>,
    pub arrival: Option<String>,
    pub shoot: Option<String>,
    pub music: Option<String>,
    pub power_music: Option<String>,
}

/// All gameplay tuning, loaded from `assets/data/game.ron`.
#[derive(Resource, Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerTuning,
    pub spawning: SpawnTuning,
    pub progression: ProgressionTuning,
    pub boss: BossTuning,
    pub world: WorldTuning,
    pub audio: AudioPaths,
}

impl GameConfig {
    /// Load the tuning file, falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::load_from(Path::new(CONFIG_PATH)) {
            Ok(config) => {
                info!("Loaded game config from {}", CONFIG_PATH);
                config
            }
            Err(e @ ConfigError::Read { .. }) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Read and validate a tuning file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron(&contents, &path.display().to_string())
    }

    /// Parse and validate RON text. `origin` is only used in error messages.
    pub fn from_ron(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(contents).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or break the tick loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("spawning.enemy_interval", self.spawning.enemy_interval),
            ("spawning.food_interval", self.spawning.food_interval),
            ("boss.fire_interval", self.boss.fire_interval),
            ("player.power_duration", self.player.power_duration),
            ("player.base_speed", self.player.base_speed),
            ("world.view_height", self.world.view_height),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be positive, got {}", value),
                });
            }
        }

        if self.progression.milestone_step == 0 {
            return Err(ConfigError::Invalid {
                field: "progression.milestone_step",
                reason: "must be at least 1".to_string(),
            });
        }

        let s = &self.spawning;
        if !(s.power_below <= s.banana_below
            && s.banana_below <= s.pear_below
            && s.pear_below <= s.pringle_below
            && s.pringle_below <= 100)
        {
            return Err(ConfigError::Invalid {
                field: "spawning",
                reason: "food roll thresholds must be ascending and at most 100".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = GameConfig::from_ron(
            "(player: (base_speed: 9.0), progression: (boss_threshold: 90))",
            "inline",
        )
        .unwrap();
        assert_eq!(config.player.base_speed, 9.0);
        assert_eq!(config.player.max_hp, 100.0);
        assert_eq!(config.progression.boss_threshold, 90);
        assert_eq!(config.progression.milestone_step, 30);
        assert_eq!(config.progression.locked_enemies.len(), 6);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = GameConfig::from_ron("(spawning: (food_interval: 0.0))", "inline").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "spawning.food_interval",
                ..
            }
        ));
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        let err = GameConfig::from_ron("(player: (", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let shipped = include_str!("../../assets/data/game.ron");
        let config = GameConfig::from_ron(shipped, CONFIG_PATH).unwrap();
        assert_eq!(config.spawning.enemy_interval, 1.5);
        assert_eq!(config.boss.spawn_position, (0.0, 4.0));
        assert_eq!(config.progression.active_enemies, vec!["grunt".to_string()]);
        assert!(config.audio.music.is_none());
        assert_eq!(config.player.start_y, -1.0);
        assert_eq!(config.boss.radius, 1.4);
    }

    #[test]
    fn player_lane_is_the_fireball_line() {
        let config = GameConfig::default();
        let fireball_line = config.boss.hover_height - config.boss.muzzle_drop;
        assert_eq!(config.player.start_y, fireball_line);
        // Shots fired from the lane overlap a hovering boss
        let gap = config.boss.hover_height - config.player.start_y;
        assert!(gap < config.boss.radius);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = GameConfig::load_from(Path::new("does/not/exist.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
