//! Score derived from climb progress
//!
//! `total_points` is recomputed every tick as a ratchet over the player's
//! best altitude - a pure derived value, never an incremental
//! accumulator, so the derivation can change without drift. Monotonic
//! within a run for the same reason the viewport offset is.

use glam::Vec2;

use crate::render::{DrawSurface, TextAlign};

const SCORE_POS: Vec2 = Vec2::new(20.0, 370.0);
const SCORE_COLOR: &str = "rgba(255, 255, 255, 0.1)";
const SCORE_FONT: &str = "120px Oswald, sans-serif";

#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    /// Highest `-player.y` seen this run (world y grows downward, so
    /// negated y is altitude)
    best_altitude: f32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from the player's position. Called once per Playing tick.
    pub fn observe(&mut self, player_y: f32) {
        self.best_altitude = self.best_altitude.max(-player_y);
    }

    pub fn total_points(&self) -> u32 {
        self.best_altitude.max(0.0) as u32
    }

    pub fn reset(&mut self) {
        self.best_altitude = 0.0;
    }

    /// Faint backdrop number behind the action
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        surface.fill_text(
            &self.total_points().to_string(),
            SCORE_POS,
            SCORE_FONT,
            SCORE_COLOR,
            TextAlign::Left,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_and_resets_to_zero() {
        let mut board = Scoreboard::new();
        assert_eq!(board.total_points(), 0);
        board.observe(-500.0);
        assert_eq!(board.total_points(), 500);
        board.reset();
        assert_eq!(board.total_points(), 0);
        board.reset();
        assert_eq!(board.total_points(), 0);
    }

    #[test]
    fn never_decreases_within_a_run() {
        let mut board = Scoreboard::new();
        let mut last = 0;
        // Player climbs, falls back, climbs higher
        for y in [-100.0, -250.0, -180.0, -20.0, -400.0, -390.0] {
            board.observe(y);
            assert!(board.total_points() >= last);
            last = board.total_points();
        }
        assert_eq!(board.total_points(), 400);
    }

    #[test]
    fn below_spawn_clamps_at_zero() {
        let mut board = Scoreboard::new();
        board.observe(300.0); // below y=0, altitude negative
        assert_eq!(board.total_points(), 0);
    }
}
