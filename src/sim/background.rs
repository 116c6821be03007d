//! Parallax starfield background
//!
//! Owns its own ratchet offset, decoupled from the viewport's so it can
//! scroll slower than the world. Each star layer is a tile two screens
//! tall drawn twice with vertical wrap-around, so the visible range is
//! always covered without seams.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{GAME_HEIGHT, GAME_WIDTH};
use crate::render::{DrawSurface, TextAlign};

/// Fixed seed: the sky is the same on every machine. Visual only.
const STARFIELD_SEED: u64 = 0x4d4f4f4e;

const FAR_STAR_COUNT: usize = 90;
const NEAR_STAR_COUNT: usize = 50;

const BASE_COLOR: &str = "rgba(0, 8, 20, 0.8)";
const FAR_STAR_COLOR: &str = "#8899AA";
const NEAR_STAR_COLOR: &str = "#EEF2FF";

#[derive(Debug, Clone)]
pub struct Background {
    offset: f32,
    /// Climb hint shown at the start of a run, until the player has
    /// scrolled two screen heights
    show_arrow: bool,
    far_stars: Vec<Vec2>,
    near_stars: Vec<Vec2>,
}

impl Background {
    pub fn new() -> Self {
        let mut rng = Pcg32::seed_from_u64(STARFIELD_SEED);
        let tile_height = 2.0 * GAME_HEIGHT;
        let mut scatter = |count: usize| -> Vec<Vec2> {
            (0..count)
                .map(|_| {
                    Vec2::new(
                        rng.random_range(0.0..GAME_WIDTH),
                        rng.random_range(0.0..tile_height),
                    )
                })
                .collect()
        };

        Self {
            offset: 0.0,
            show_arrow: false,
            far_stars: scatter(FAR_STAR_COUNT),
            near_stars: scatter(NEAR_STAR_COUNT),
        }
    }

    /// Ratchet: the sky never scrolls back down
    pub fn slide_up_to(&mut self, y: f32) {
        if y > self.offset {
            self.offset = y;
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.show_arrow = true;
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        surface.fill_rect(
            BASE_COLOR,
            Vec2::ZERO,
            Vec2::new(GAME_WIDTH, GAME_HEIGHT),
        );

        // Far layer scrolls at half the near layer's rate
        self.render_tile(surface, &self.far_stars, self.offset / 2.0, FAR_STAR_COLOR, 1.0);
        self.render_tile(surface, &self.near_stars, self.offset, NEAR_STAR_COLOR, 2.0);

        if self.show_arrow && self.offset < 2.0 * GAME_HEIGHT {
            surface.push();
            surface.set_alpha(0.5);
            surface.fill_text(
                "^ BOUNCE UP ^",
                Vec2::new(GAME_WIDTH / 2.0, self.offset + 80.0),
                "30px Oswald, sans-serif",
                "#FFFFFF",
                TextAlign::Center,
            );
            surface.pop();
        }
    }

    /// Draw one star tile twice: at `layer_offset mod 2h` and one tile
    /// height above, covering the screen for any offset value.
    fn render_tile(
        &self,
        surface: &mut dyn DrawSurface,
        stars: &[Vec2],
        layer_offset: f32,
        color: &str,
        star_size: f32,
    ) {
        let wrap = 2.0 * GAME_HEIGHT;
        let lower = layer_offset % wrap;
        let upper = lower - wrap;

        for base in [lower, upper] {
            surface.push();
            surface.translate(Vec2::new(0.0, base));
            for star in stars {
                surface.fill_rect(color, *star, Vec2::splat(star_size));
            }
            surface.pop();
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_a_ratchet() {
        let mut bg = Background::new();
        bg.slide_up_to(100.0);
        assert_eq!(bg.offset(), 100.0);
        bg.slide_up_to(40.0);
        assert_eq!(bg.offset(), 100.0);
        bg.slide_up_to(250.0);
        assert_eq!(bg.offset(), 250.0);
    }

    #[test]
    fn reset_zeroes_offset_and_rearms_hint() {
        let mut bg = Background::new();
        bg.slide_up_to(500.0);
        bg.reset();
        assert_eq!(bg.offset(), 0.0);
        assert!(bg.show_arrow);
        bg.reset();
        assert_eq!(bg.offset(), 0.0);
    }

    #[test]
    fn star_tiles_fit_the_wrap_range() {
        let bg = Background::new();
        let wrap = 2.0 * GAME_HEIGHT;
        for star in bg.far_stars.iter().chain(bg.near_stars.iter()) {
            assert!(star.x >= 0.0 && star.x < GAME_WIDTH);
            assert!(star.y >= 0.0 && star.y < wrap);
        }
    }

    #[test]
    fn star_tiles_wrap_without_seams() {
        use crate::render::test_support::RecordingSurface;

        let wrap = 2.0 * GAME_HEIGHT;
        // (camera offset, near-layer base); the far layer sits at offset / 2
        for (offset, near_lower, far_lower) in [
            (0.0, 0.0, 0.0),
            (600.0, 600.0, 300.0),
            (2000.0, 400.0, 1000.0), // past one wrap: the modulo jumps back
        ] {
            let mut bg = Background::new();
            bg.slide_up_to(offset);

            let mut surface = RecordingSurface::default();
            bg.render(&mut surface);

            for lower in [near_lower, far_lower] {
                assert!(lower >= 0.0 && lower < wrap);
                // Two copies, one tile height apart, so their union spans
                // the whole visible range
                assert!(lower - wrap <= 0.0 && lower + wrap >= GAME_HEIGHT);
                assert!(surface.ops.contains(&format!("translate 0,{lower}")));
                assert!(surface.ops.contains(&format!("translate 0,{}", lower - wrap)));
            }
        }
    }

    #[test]
    fn starfield_is_deterministic() {
        let a = Background::new();
        let b = Background::new();
        assert_eq!(a.far_stars, b.far_stars);
        assert_eq!(a.near_stars, b.near_stars);
    }
}
