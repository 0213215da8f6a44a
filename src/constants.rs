//! Compile-time defaults for every tunable in `GameConfig`.

use crate::surface::Rgb;

// ── Canvas & timing ──────────────────────────────────────────────────────────

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;
/// Ticks per second; the step period is `1000 / TICK_RATE_HZ` ms.
pub const TICK_RATE_HZ: u32 = 60;
pub const BACKGROUND_COLOR: Rgb = Rgb::new(0x00, 0x00, 0x00);

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f64 = 20.0;
pub const PLAYER_HEIGHT: f64 = 20.0;
pub const PLAYER_COLOR: Rgb = Rgb::new(0x00, 0x99, 0xcc);
/// Spawn x is `canvas_width / 2 - PLAYER_OFFSET_X`.
pub const PLAYER_OFFSET_X: f64 = 50.0;
/// Spawn y is `canvas_height - PLAYER_OFFSET_Y`.
pub const PLAYER_OFFSET_Y: f64 = 50.0;
/// Horizontal distance covered by one move action.
pub const PLAYER_STEP: f64 = 5.0;
pub const PLAYER_PROJECTILE_SPEED: f64 = -5.0;

// ── Enemy formation ──────────────────────────────────────────────────────────

pub const ENEMIES_PER_LINE: usize = 20;
pub const ENEMY_LINES: usize = 8;
pub const ENEMY_SPACING: f64 = 30.0;
pub const ENEMY_WIDTH: f64 = 20.0;
pub const ENEMY_HEIGHT: f64 = 20.0;
pub const ENEMY_COLOR: Rgb = Rgb::new(0xff, 0x00, 0x00);
pub const ENEMY_PROJECTILE_SPEED: f64 = 5.0;
/// Fire timer threshold; the timer grows by a uniform draw each tick.
pub const ENEMY_FIRE_RATE: f64 = 1000.0;
/// Upper bound (exclusive) of the per-tick fire timer increment.
pub const ENEMY_FIRE_INCREMENT: f64 = 10.0;
/// Vertical drop applied to the whole formation on every bounce.
pub const ENEMY_STEP_DOWN: f64 = 5.0;

// ── Asteroids ────────────────────────────────────────────────────────────────

pub const ASTEROID_COUNT: usize = 8;
/// Grid size n: each asteroid is n × n parts.
pub const ASTEROID_PARTS: usize = 8;
pub const ASTEROID_SPACING: f64 = 85.0;
pub const ASTEROID_PART_SIZE: f64 = 5.0;
/// Asteroid row sits this far above the bottom of the canvas.
pub const ASTEROID_OFFSET_Y: f64 = 180.0;
pub const ASTEROID_COLOR: Rgb = Rgb::new(0xff, 0xff, 0xff);

// ── Projectiles ──────────────────────────────────────────────────────────────

pub const PROJECTILE_WIDTH: f64 = 4.0;
pub const PROJECTILE_HEIGHT: f64 = 8.0;
pub const PROJECTILE_COLOR: Rgb = Rgb::new(0xff, 0x78, 0x00);
