//! The player entity
//!
//! A falling square: gravity pulls it down, the horizontal bound walls it
//! in, and the collision resolver is the only thing that ever throws it
//! back up.

use glam::Vec2;

use crate::consts::*;
use crate::geometry::{Aabb, MovingPoint};
use crate::render::DrawSurface;

#[derive(Debug, Clone)]
pub struct Player {
    /// Construction-time state restored by `reset`
    spawn: MovingPoint,
    pub body: MovingPoint,
    pub size: Vec2,
    pub color: String,
    gravity: f32,
    world_width: f32,
}

impl Player {
    pub fn new(
        spawn: MovingPoint,
        size: Vec2,
        color: &str,
        gravity: f32,
        world_width: f32,
    ) -> Self {
        Self {
            spawn,
            body: spawn,
            size,
            color: color.to_string(),
            gravity,
            world_width,
        }
    }

    /// Advance one tick: accumulate gravity, integrate position, clamp to
    /// the horizontal bound (flipping the lateral velocity on a wall hit).
    ///
    /// Returns the frame's position delta - the "player moved"
    /// notification the run-state controller reacts to. Produced exactly
    /// once per tick, after integration.
    pub fn tick(&mut self, dt: f32) -> Vec2 {
        let before = self.body.pos;

        self.body.vel.y += self.gravity * dt;
        self.body.pos += self.body.vel * dt;
        self.clamp_to_bounds();

        self.body.pos - before
    }

    /// Lateral drift control. Held keys accelerate toward the speed cap;
    /// no input leaves the drift untouched.
    pub fn steer(&mut self, left: bool, right: bool, dt: f32) {
        if left && !right {
            self.body.vel.x -= PLAYER_STEER_ACCEL * dt;
        } else if right && !left {
            self.body.vel.x += PLAYER_STEER_ACCEL * dt;
        }
        self.body.vel.x = self
            .body
            .vel
            .x
            .clamp(-PLAYER_MAX_LATERAL_SPEED, PLAYER_MAX_LATERAL_SPEED);
    }

    /// Overshoot past a wall is expected at high velocity; it is corrected
    /// here, never treated as an error. At most one sign flip per tick.
    fn clamp_to_bounds(&mut self) {
        let max_x = self.world_width - self.size.x;
        if self.body.pos.x < 0.0 {
            self.body.pos.x = 0.0;
            self.body.vel.x = -self.body.vel.x;
        } else if self.body.pos.x > max_x {
            self.body.pos.x = max_x;
            self.body.vel.x = -self.body.vel.x;
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.body.pos, self.size)
    }

    pub fn bottom(&self) -> f32 {
        self.body.pos.y + self.size.y
    }

    /// Restore the construction-time state. Idempotent.
    pub fn reset(&mut self) {
        self.body = self.spawn;
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        surface.fill_rect(&self.color, self.body.pos, self.size);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(
            MovingPoint::new(PLAYER_SPAWN_POS, PLAYER_SPAWN_VEL),
            PLAYER_SIZE,
            PLAYER_COLOR,
            DEFAULT_GRAVITY,
            GAME_WIDTH,
        )
    }
}
