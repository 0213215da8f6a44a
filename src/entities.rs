//! Game entities: a plain positioned rectangle plus the capabilities that
//! turn it into a projectile, a firing ship, the player, or an asteroid.
//!
//! Behaviour is attached by composition. A ship is an [`Entity`] with a
//! [`MovementRule`] and a [`FireCapability`]; the player additionally owns a
//! [`BoundsClamp`]. Each owner sequences its parts explicitly.

use crate::surface::{Rgb, Surface};

// ── Entity ───────────────────────────────────────────────────────────────────

/// Axis-aligned coloured rectangle in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub x: f64,
    pub y: f64,
    width: f64,
    height: f64,
    pub color: Rgb,
}

impl Entity {
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: Rgb) -> Self {
        Entity {
            x,
            y,
            width,
            height,
            color,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.set_fill(self.color);
        surface.fill_rect(self.x, self.y, self.width, self.height);
    }

    /// Unchecked move; bounds are the caller's business.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Overlap test with strict inequalities: rectangles that only share an
    /// edge do not intersect.
    pub fn intersects(&self, other: &Entity) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

// ── Movement ─────────────────────────────────────────────────────────────────

/// How a body responds to a translate request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MovementRule {
    /// Applies the requested delta as is.
    Free,
    /// Ignores the requested delta and moves `speed` along y only.
    Vertical { speed: f64 },
}

impl MovementRule {
    pub fn apply(&self, body: &mut Entity, dx: f64, dy: f64) {
        match *self {
            MovementRule::Free => body.translate(dx, dy),
            MovementRule::Vertical { speed } => body.translate(0.0, speed),
        }
    }
}

// ── Projectile ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub body: Entity,
    movement: MovementRule,
}

impl Projectile {
    pub fn new(body: Entity, vertical_speed: f64) -> Self {
        Projectile {
            body,
            movement: MovementRule::Vertical {
                speed: vertical_speed,
            },
        }
    }

    pub fn vertical_speed(&self) -> f64 {
        match self.movement {
            MovementRule::Vertical { speed } => speed,
            MovementRule::Free => 0.0,
        }
    }

    /// The arguments are accepted for symmetry with other bodies but never
    /// used: a projectile only ever advances by its own vertical speed.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.movement.apply(&mut self.body, dx, dy);
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        self.body.draw(surface);
    }

    pub fn intersects(&self, other: &Entity) -> bool {
        self.body.intersects(other)
    }
}

// ── Firing ───────────────────────────────────────────────────────────────────

/// Spawns, advances and prunes the projectiles of one ship.
#[derive(Clone, Debug, PartialEq)]
pub struct FireCapability {
    pub projectile_width: f64,
    pub projectile_height: f64,
    pub projectile_color: Rgb,
    /// Projectiles with y outside `[0, bound_height]` are discarded.
    pub bound_height: f64,
    pub projectiles: Vec<Projectile>,
}

impl FireCapability {
    pub fn new(projectile_width: f64, projectile_height: f64, projectile_color: Rgb, bound_height: f64) -> Self {
        FireCapability {
            projectile_width,
            projectile_height,
            projectile_color,
            bound_height,
            projectiles: Vec::new(),
        }
    }

    /// Spawn a projectile centred on `from`, above it when moving up and
    /// below it when moving down.
    pub fn fire(&mut self, from: &Entity, vertical_speed: f64) {
        let x = from.x + from.width() / 2.0 - self.projectile_width / 2.0;
        let y = if vertical_speed < 0.0 {
            from.y - self.projectile_height
        } else {
            from.bottom()
        };
        let body = Entity::new(x, y, self.projectile_width, self.projectile_height, self.projectile_color);
        self.projectiles.push(Projectile::new(body, vertical_speed));
    }

    /// Draw every projectile, advance it once, and drop those that left
    /// the vertical bounds. `retain_mut` visits each element exactly once.
    pub fn draw_and_advance(&mut self, surface: &mut impl Surface) {
        let bound = self.bound_height;
        self.projectiles.retain_mut(|projectile| {
            projectile.draw(surface);
            projectile.translate(0.0, 0.0);
            let y = projectile.body.y;
            (0.0..=bound).contains(&y)
        });
    }
}

// ── Emitter ──────────────────────────────────────────────────────────────────

/// A ship that can fire.
#[derive(Clone, Debug, PartialEq)]
pub struct Emitter {
    pub body: Entity,
    movement: MovementRule,
    pub weapon: FireCapability,
}

impl Emitter {
    pub fn new(body: Entity, weapon: FireCapability) -> Self {
        Emitter {
            body,
            movement: MovementRule::Free,
            weapon,
        }
    }

    /// Draw the ship, then let its projectiles draw, advance and prune.
    pub fn draw(&mut self, surface: &mut impl Surface) {
        self.body.draw(surface);
        self.weapon.draw_and_advance(surface);
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.movement.apply(&mut self.body, dx, dy);
    }

    pub fn fire(&mut self, vertical_speed: f64) {
        self.weapon.fire(&self.body, vertical_speed);
    }

    pub fn intersects(&self, other: &Entity) -> bool {
        self.body.intersects(other)
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.weapon.projectiles
    }

    pub fn projectiles_mut(&mut self) -> &mut Vec<Projectile> {
        &mut self.weapon.projectiles
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Horizontal limits `[0, max_x]` for a body's extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsClamp {
    pub max_x: f64,
}

impl BoundsClamp {
    pub fn apply(&self, body: &mut Entity) {
        if body.x < 0.0 {
            body.x = 0.0;
        } else if body.right() > self.max_x {
            body.x = self.max_x - body.width();
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerUnit {
    pub ship: Emitter,
    clamp: BoundsClamp,
}

impl PlayerUnit {
    /// `canvas_width` is captured here and never changes afterwards.
    pub fn new(ship: Emitter, canvas_width: f64) -> Self {
        PlayerUnit {
            ship,
            clamp: BoundsClamp { max_x: canvas_width },
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.clamp.max_x
    }

    pub fn body(&self) -> &Entity {
        &self.ship.body
    }

    pub fn draw(&mut self, surface: &mut impl Surface) {
        self.ship.draw(surface);
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.ship.translate(dx, dy);
        self.clamp.apply(&mut self.ship.body);
    }

    pub fn fire(&mut self, vertical_speed: f64) {
        self.ship.fire(vertical_speed);
    }

    pub fn intersects(&self, other: &Entity) -> bool {
        self.ship.intersects(other)
    }
}

// ── Asteroid ─────────────────────────────────────────────────────────────────

/// A destructible block made of an n × n grid of parts.
///
/// The cluster never removes itself; an empty cluster is simply one whose
/// [`ObstacleCluster::is_empty`] returns true.
#[derive(Clone, Debug, PartialEq)]
pub struct ObstacleCluster {
    parts: Vec<Entity>,
}

impl ObstacleCluster {
    /// Parts are laid out column by column: part (i, j) sits at
    /// `(x + i * width, y + j * height)`.
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: Rgb, parts_per_side: usize) -> Self {
        let mut parts = Vec::with_capacity(parts_per_side * parts_per_side);
        for i in 0..parts_per_side {
            for j in 0..parts_per_side {
                parts.push(Entity::new(
                    x + i as f64 * width,
                    y + j as f64 * height,
                    width,
                    height,
                    color,
                ));
            }
        }
        ObstacleCluster { parts }
    }

    pub fn parts(&self) -> &[Entity] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        for part in &self.parts {
            part.draw(surface);
        }
    }

    pub fn intersects(&self, other: &Entity) -> bool {
        self.parts.iter().any(|part| part.intersects(other))
    }

    /// Remove the first part, in construction order, that intersects
    /// `other`. At most one part goes per call.
    pub fn remove_first_colliding(&mut self, other: &Entity) -> bool {
        match self.parts.iter().position(|part| part.intersects(other)) {
            Some(index) => {
                self.parts.remove(index);
                true
            }
            None => false,
        }
    }
}
