//! Tunable gameplay knobs and their TOML loader.
//!
//! Every field is a plain number. Out-of-range values (negative speeds,
//! zero cooldowns) are accepted as-is and only produce odd gameplay; the
//! loader logs a warning for them but never rejects a file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or has wrongly typed keys.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Tunables could not be written back out.
    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// All gameplay tuning, loaded once per session.
/// Missing keys fall back to the defaults in `constants.rs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub player_speed: f64,
    pub player_max_health: f64,
    pub player_radius: f64,

    pub bullet_speed: f64,
    pub bullet_lifespan_ms: f64,
    pub bullet_cooldown_ms: f64,
    pub bullet_damage: f64,
    pub bullet_radius: f64,

    pub enemy_speed: f64,
    pub enemy_health: f64,
    pub enemy_score_value: u32,
    pub enemy_spawn_interval_ms: f64,
    pub enemy_collision_damage: f64,
    pub enemy_radius: f64,

    pub spawn_edge_offset: f64,
    pub difficulty_ramp_ms: f64,
    pub difficulty_floor: f64,

    pub damage_indicator_duration_ms: f64,
    pub damage_indicator_rise_speed: f64,
    pub explosion_duration_ms: f64,
    pub explosion_growth: f64,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            player_max_health: PLAYER_MAX_HEALTH,
            player_radius: PLAYER_RADIUS,
            bullet_speed: BULLET_SPEED,
            bullet_lifespan_ms: BULLET_LIFESPAN_MS,
            bullet_cooldown_ms: BULLET_COOLDOWN_MS,
            bullet_damage: BULLET_DAMAGE,
            bullet_radius: BULLET_RADIUS,
            enemy_speed: ENEMY_SPEED,
            enemy_health: ENEMY_HEALTH,
            enemy_score_value: ENEMY_SCORE_VALUE,
            enemy_spawn_interval_ms: ENEMY_SPAWN_INTERVAL_MS,
            enemy_collision_damage: ENEMY_COLLISION_DAMAGE,
            enemy_radius: ENEMY_RADIUS,
            spawn_edge_offset: SPAWN_EDGE_OFFSET,
            difficulty_ramp_ms: DIFFICULTY_RAMP_MS,
            difficulty_floor: DIFFICULTY_FLOOR,
            damage_indicator_duration_ms: DAMAGE_INDICATOR_DURATION_MS,
            damage_indicator_rise_speed: DAMAGE_INDICATOR_RISE_SPEED,
            explosion_duration_ms: EXPLOSION_DURATION_MS,
            explosion_growth: EXPLOSION_GROWTH,
        }
    }
}

impl Tunables {
    /// Load tunables from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let tunables = Self::from_toml_str(&contents)?;
        log::debug!("loaded tunables from {}", path.as_ref().display());
        Ok(tunables)
    }

    /// Parse tunables from TOML text. Unknown keys are ignored.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let tunables: Self = toml::from_str(contents)?;
        tunables.warn_suspicious();
        Ok(tunables)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Names of knobs that should be positive but are not.
    pub fn non_positive_fields(&self) -> Vec<&'static str> {
        let knobs = [
            ("player_speed", self.player_speed),
            ("player_max_health", self.player_max_health),
            ("player_radius", self.player_radius),
            ("bullet_speed", self.bullet_speed),
            ("bullet_lifespan_ms", self.bullet_lifespan_ms),
            ("bullet_cooldown_ms", self.bullet_cooldown_ms),
            ("bullet_damage", self.bullet_damage),
            ("bullet_radius", self.bullet_radius),
            ("enemy_speed", self.enemy_speed),
            ("enemy_health", self.enemy_health),
            ("enemy_spawn_interval_ms", self.enemy_spawn_interval_ms),
            ("enemy_collision_damage", self.enemy_collision_damage),
            ("enemy_radius", self.enemy_radius),
        ];
        knobs
            .iter()
            .filter(|(_, value)| *value <= 0.0)
            .map(|(name, _)| *name)
            .collect()
    }

    fn warn_suspicious(&self) {
        for name in self.non_positive_fields() {
            log::warn!("tunable `{name}` is not positive; gameplay may degenerate");
        }
    }
}
