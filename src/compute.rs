//! Game logic: building the initial layout, the per-tick step, and the
//! player actions.
//!
//! All randomness comes through an injected RNG and all drawing through an
//! injected [`Surface`], so a step can be driven from tests without a timer
//! or a terminal.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Emitter, Entity, FireCapability, ObstacleCluster, PlayerUnit};
use crate::surface::Surface;

/// Horizontal travel direction of the whole enemy formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Why a step ended the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartReason {
    AllEnemiesDestroyed,
    PlayerHit,
    FormationBreached,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Restart(RestartReason),
}

/// One input from the player, already decoded from raw keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Fire,
}

// ── State ────────────────────────────────────────────────────────────────────

/// Everything a running session owns. Rebuilt from scratch on restart.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    pub player: PlayerUnit,
    pub obstacles: Vec<ObstacleCluster>,
    pub enemies: Vec<Emitter>,
    pub direction: Direction,
    pub fire_timer: f64,
    pub config: GameConfig,
}

impl SimulationState {
    /// Build the initial layout described by `config`.
    pub fn new(config: &GameConfig) -> Self {
        let weapon = || {
            FireCapability::new(
                config.projectile_width,
                config.projectile_height,
                config.projectile_color,
                config.canvas_height,
            )
        };

        let player_body = Entity::new(
            config.canvas_width / 2.0 - config.player_offset_x,
            config.canvas_height - config.player_offset_y,
            config.player_width,
            config.player_height,
            config.player_color,
        );
        let player = PlayerUnit::new(Emitter::new(player_body, weapon()), config.canvas_width);

        let obstacles = (0..config.asteroid_count)
            .map(|k| {
                ObstacleCluster::new(
                    config.asteroid_spacing + k as f64 * config.asteroid_spacing,
                    config.canvas_height - config.asteroid_offset_y,
                    config.asteroid_part_size,
                    config.asteroid_part_size,
                    config.asteroid_color,
                    config.asteroid_parts,
                )
            })
            .collect();

        let mut enemies = Vec::with_capacity(config.enemy_lines * config.enemies_per_line);
        for line in 0..config.enemy_lines {
            for column in 0..config.enemies_per_line {
                let body = Entity::new(
                    config.enemy_spacing + column as f64 * config.enemy_spacing,
                    config.enemy_spacing + line as f64 * config.enemy_spacing,
                    config.enemy_width,
                    config.enemy_height,
                    config.enemy_color,
                );
                enemies.push(Emitter::new(body, weapon()));
            }
        }

        SimulationState {
            player,
            obstacles,
            enemies,
            direction: Direction::Right,
            fire_timer: 0.0,
            config: config.clone(),
        }
    }
}

// ── Input-driven transitions ─────────────────────────────────────────────────

pub fn apply_action(state: &mut SimulationState, action: Action) {
    let step = state.config.player_step;
    match action {
        Action::MoveLeft => state.player.translate(-step, 0.0),
        Action::MoveRight => state.player.translate(step, 0.0),
        Action::Fire => state.player.fire(state.config.player_projectile_speed),
    }
}

// ── Per-tick step ────────────────────────────────────────────────────────────

/// Advance the simulation by one tick, drawing the frame onto `surface`.
///
/// A returned [`StepOutcome::Restart`] means the session is over; the state
/// is left as it was at that point and the caller is expected to rebuild it.
pub fn step(state: &mut SimulationState, surface: &mut impl Surface, rng: &mut impl Rng) -> StepOutcome {
    let config = &state.config;

    // ── 1. Background ────────────────────────────────────────────────────────
    surface.set_fill(config.background_color);
    surface.fill_rect(0.0, 0.0, config.canvas_width, config.canvas_height);

    // ── 2. Player, asteroids, enemies ────────────────────────────────────────
    state.player.draw(surface);
    for obstacle in &state.obstacles {
        obstacle.draw(surface);
    }
    let dx = state.direction.sign();
    for enemy in &mut state.enemies {
        enemy.draw(surface);
        enemy.translate(dx, 0.0);
    }

    // ── 3. Wave cleared ──────────────────────────────────────────────────────
    if state.enemies.is_empty() {
        return StepOutcome::Restart(RestartReason::AllEnemiesDestroyed);
    }

    // ── 4. Formation bounce ──────────────────────────────────────────────────
    bounce_formation(state);

    // ── 5. Enemy fire ────────────────────────────────────────────────────────
    state.fire_timer += rng.gen_range(0.0..state.config.enemy_fire_increment);
    if state.fire_timer > state.config.enemy_fire_rate {
        state.fire_timer = 0.0;
        let shooter = rng.gen_range(0..state.enemies.len());
        state.enemies[shooter].fire(state.config.enemy_projectile_speed);
        tracing::debug!(shooter, "enemy fired");
    }

    // ── 6. Collisions ────────────────────────────────────────────────────────
    resolve_collisions(state)
}

/// Flip direction and drop the formation once its leading enemy has crossed
/// the canvas edge in the direction of travel.
fn bounce_formation(state: &mut SimulationState) {
    let canvas_width = state.config.canvas_width;
    let crossed = match state.direction {
        Direction::Right => state
            .enemies
            .iter()
            .max_by(|a, b| a.body.x.total_cmp(&b.body.x))
            .is_some_and(|lead| lead.body.right() > canvas_width),
        Direction::Left => state
            .enemies
            .iter()
            .min_by(|a, b| a.body.x.total_cmp(&b.body.x))
            .is_some_and(|lead| lead.body.x < 0.0),
    };
    if !crossed {
        return;
    }

    state.direction = state.direction.reversed();
    let drop = state.config.enemy_step_down;
    for enemy in &mut state.enemies {
        enemy.translate(0.0, drop);
    }
    tracing::debug!(direction = ?state.direction, "formation bounced");
}

/// Resolve every pairwise interaction in a fixed order. Earlier checks win
/// when a projectile could take part in more than one.
fn resolve_collisions(state: &mut SimulationState) -> StepOutcome {
    let SimulationState {
        player,
        obstacles,
        enemies,
        ..
    } = state;

    // a. Player projectiles chip asteroids.
    player
        .ship
        .projectiles_mut()
        .retain(|shot| !chip_obstacles(obstacles.as_mut_slice(), &shot.body));

    // b. Enemy projectiles chip asteroids.
    for enemy in enemies.iter_mut() {
        enemy
            .projectiles_mut()
            .retain(|shot| !chip_obstacles(obstacles.as_mut_slice(), &shot.body));
    }

    // c. Player projectiles destroy enemies.
    player.ship.projectiles_mut().retain(|shot| {
        match enemies.iter().position(|enemy| enemy.intersects(&shot.body)) {
            Some(index) => {
                enemies.remove(index);
                tracing::debug!(remaining = enemies.len(), "enemy destroyed");
                false
            }
            None => true,
        }
    });

    obstacles.retain(|obstacle| !obstacle.is_empty());

    // d. Enemy projectiles hit the player.
    let player_hit = enemies
        .iter()
        .flat_map(|enemy| enemy.projectiles())
        .any(|shot| player.intersects(&shot.body));
    if player_hit {
        return StepOutcome::Restart(RestartReason::PlayerHit);
    }

    // e. Formation reached the player's row.
    let player_y = player.body().y;
    if enemies.iter().any(|enemy| enemy.body.bottom() > player_y) {
        return StepOutcome::Restart(RestartReason::FormationBreached);
    }

    StepOutcome::Continue
}

/// Remove one part from the first asteroid `shot` hits. Returns whether the
/// shot was absorbed.
fn chip_obstacles(obstacles: &mut [ObstacleCluster], shot: &Entity) -> bool {
    obstacles
        .iter_mut()
        .any(|obstacle| obstacle.remove_first_colliding(shot))
}
