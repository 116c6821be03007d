//! The bounce platform
//!
//! Same integration pattern as the player but with the gravity sign
//! inverted, so it drifts upward between contacts. The collision resolver
//! knocks it back down through `bounce`, with a rebound-speed floor so a
//! soft landing still produces a playable hop.

use glam::Vec2;

use crate::consts::*;
use crate::geometry::{Aabb, MovingPoint};
use crate::render::DrawSurface;

#[derive(Debug, Clone)]
pub struct Platform {
    spawn: MovingPoint,
    pub body: MovingPoint,
    pub size: Vec2,
    pub color: String,
    gravity: f32,
    world_width: f32,
}

impl Platform {
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

    /// Advance one tick. Gravity here is negative, so the platform
    /// decelerates after a bounce and climbs back toward the player.
    pub fn tick(&mut self, dt: f32) {
        self.body.vel.y += self.gravity * dt;
        self.body.pos += self.body.vel * dt;

        let max_x = self.world_width - self.size.x;
        if self.body.pos.x < 0.0 {
            self.body.pos.x = 0.0;
            self.body.vel.x = -self.body.vel.x;
        } else if self.body.pos.x > max_x {
            self.body.pos.x = max_x;
            self.body.vel.x = -self.body.vel.x;
        }
    }

    /// Contact response: reflect the vertical velocity downward and
    /// enforce the rebound floor. Invoked by the collision resolver on a
    /// valid hit, never by the platform itself.
    pub fn bounce(&mut self) {
        self.body.vel.y = self.body.vel.y.abs().max(MIN_PLATFORM_REBOUND_SPEED);
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.body.pos, self.size)
    }

    pub fn top(&self) -> f32 {
        self.body.pos.y
    }

    /// Restore the construction-time state. Idempotent.
    pub fn reset(&mut self) {
        self.body = self.spawn;
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        surface.fill_rect(&self.color, self.body.pos, self.size);
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new(
            MovingPoint::new(PLATFORM_SPAWN_POS, PLATFORM_SPAWN_VEL),
            PLATFORM_SIZE,
            PLATFORM_COLOR,
            -DEFAULT_GRAVITY,
            GAME_WIDTH,
        )
    }
}
