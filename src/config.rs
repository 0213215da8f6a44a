//! Runtime layout and tuning configuration.
//!
//! [`GameConfig`] mirrors every constant in [`crate::constants`]. A TOML file
//! may override any subset of the fields; missing keys keep the compiled
//! default. The configuration is fixed once the game is initialised.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::error::GameError;
use crate::surface::Rgb;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Canvas & timing ──────────────────────────────────────────────────────
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub tick_rate_hz: u32,
    pub background_color: Rgb,

    // ── Player ───────────────────────────────────────────────────────────────
    pub player_width: f64,
    pub player_height: f64,
    pub player_color: Rgb,
    pub player_offset_x: f64,
    pub player_offset_y: f64,
    pub player_step: f64,
    pub player_projectile_speed: f64,

    // ── Enemy formation ──────────────────────────────────────────────────────
    pub enemies_per_line: usize,
    pub enemy_lines: usize,
    pub enemy_spacing: f64,
    pub enemy_width: f64,
    pub enemy_height: f64,
    pub enemy_color: Rgb,
    pub enemy_projectile_speed: f64,
    pub enemy_fire_rate: f64,
    pub enemy_fire_increment: f64,
    pub enemy_step_down: f64,

    // ── Asteroids ────────────────────────────────────────────────────────────
    pub asteroid_count: usize,
    pub asteroid_parts: usize,
    pub asteroid_spacing: f64,
    pub asteroid_part_size: f64,
    pub asteroid_offset_y: f64,
    pub asteroid_color: Rgb,

    // ── Projectiles ──────────────────────────────────────────────────────────
    pub projectile_width: f64,
    pub projectile_height: f64,
    pub projectile_color: Rgb,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            tick_rate_hz: TICK_RATE_HZ,
            background_color: BACKGROUND_COLOR,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_color: PLAYER_COLOR,
            player_offset_x: PLAYER_OFFSET_X,
            player_offset_y: PLAYER_OFFSET_Y,
            player_step: PLAYER_STEP,
            player_projectile_speed: PLAYER_PROJECTILE_SPEED,

            enemies_per_line: ENEMIES_PER_LINE,
            enemy_lines: ENEMY_LINES,
            enemy_spacing: ENEMY_SPACING,
            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            enemy_color: ENEMY_COLOR,
            enemy_projectile_speed: ENEMY_PROJECTILE_SPEED,
            enemy_fire_rate: ENEMY_FIRE_RATE,
            enemy_fire_increment: ENEMY_FIRE_INCREMENT,
            enemy_step_down: ENEMY_STEP_DOWN,

            asteroid_count: ASTEROID_COUNT,
            asteroid_parts: ASTEROID_PARTS,
            asteroid_spacing: ASTEROID_SPACING,
            asteroid_part_size: ASTEROID_PART_SIZE,
            asteroid_offset_y: ASTEROID_OFFSET_Y,
            asteroid_color: ASTEROID_COLOR,

            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            projectile_color: PROJECTILE_COLOR,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self, GameError> {
        let config: GameConfig = toml::from_str(contents).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the file at `path`.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents, path)
    }

    /// Like [`GameConfig::load`], but a missing or broken file falls back to
    /// the compiled defaults instead of aborting.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                tracing::info!("loaded config from {}", path.display());
                config
            }
            Err(GameError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no {} found; using compiled defaults", path.display());
                GameConfig::default()
            }
            Err(err) => {
                tracing::warn!("{}; using compiled defaults", err);
                GameConfig::default()
            }
        }
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), GameError> {
        let positive: [(&'static str, f64); 11] = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("asteroid_part_size", self.asteroid_part_size),
            ("projectile_width", self.projectile_width),
            ("projectile_height", self.projectile_height),
            ("enemy_fire_rate", self.enemy_fire_rate),
            ("enemy_fire_increment", self.enemy_fire_increment),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(GameError::InvalidConfig {
                    name,
                    reason: "must be a positive finite number",
                });
            }
        }
        if self.player_width > self.canvas_width {
            return Err(GameError::InvalidConfig {
                name: "player_width",
                reason: "must not exceed canvas_width",
            });
        }
        if self.tick_rate_hz == 0 {
            return Err(GameError::InvalidConfig {
                name: "tick_rate_hz",
                reason: "must be at least 1",
            });
        }
        if self.enemies_per_line == 0 || self.enemy_lines == 0 {
            return Err(GameError::InvalidConfig {
                name: "enemy_lines",
                reason: "formation must contain at least one enemy",
            });
        }
        if self.player_projectile_speed >= 0.0 {
            return Err(GameError::InvalidConfig {
                name: "player_projectile_speed",
                reason: "must be negative (upward)",
            });
        }
        if self.enemy_projectile_speed <= 0.0 {
            return Err(GameError::InvalidConfig {
                name: "enemy_projectile_speed",
                reason: "must be positive (downward)",
            });
        }
        Ok(())
    }

    /// Period between two simulation steps.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate_hz as f64)
    }
}
