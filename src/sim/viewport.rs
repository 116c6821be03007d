//! The viewport: ratchet camera plus ordered render layers
//!
//! `offset` maps world space to screen space (`screen_y = world_y +
//! offset`) and is monotonically non-decreasing for the lifetime of a
//! run - the camera never scrolls back down. Rendering walks three
//! ordered layer lists: background slots draw untranslated (the
//! background applies its own parallax offset), hud slots draw in screen
//! space, world slots draw under the camera translate.

use glam::Vec2;

use crate::render::{DrawSurface, TextAlign};

use super::background::Background;
use super::platform::Platform;
use super::player::Player;
use super::scoreboard::Scoreboard;

/// What a layer position renders. Slots decouple layer ordering from
/// entity ownership: the viewport composes, the state owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerSlot {
    Background,
    Scoreboard,
    Fps,
    Player,
    Platform,
}

/// Borrowed view of everything the viewport can draw
pub struct Scene<'a> {
    pub background: &'a Background,
    pub scoreboard: &'a Scoreboard,
    pub player: &'a Player,
    pub platform: &'a Platform,
}

#[derive(Debug, Clone)]
pub struct Viewport {
    offset: f32,
    background_layers: Vec<LayerSlot>,
    hud_layers: Vec<LayerSlot>,
    world_layers: Vec<LayerSlot>,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            background_layers: vec![LayerSlot::Background, LayerSlot::Scoreboard],
            hud_layers: vec![LayerSlot::Fps],
            world_layers: vec![LayerSlot::Player, LayerSlot::Platform],
        }
    }

    /// Ratchet: only ever slides up
    pub fn slide_up_to(&mut self, y: f32) {
        if y > self.offset {
            self.offset = y;
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Reset only at run boundaries; mid-run the offset is monotonic
    pub fn reset(&mut self) {
        self.offset = 0.0;
    }

    pub fn render(&self, surface: &mut dyn DrawSurface, scene: &Scene, fps: Option<u32>) {
        for slot in &self.background_layers {
            self.draw_slot(*slot, surface, scene, fps);
        }
        for slot in &self.hud_layers {
            self.draw_slot(*slot, surface, scene, fps);
        }

        surface.push();
        surface.translate(Vec2::new(0.0, self.offset));
        for slot in &self.world_layers {
            self.draw_slot(*slot, surface, scene, fps);
        }
        surface.pop();
    }

    fn draw_slot(
        &self,
        slot: LayerSlot,
        surface: &mut dyn DrawSurface,
        scene: &Scene,
        fps: Option<u32>,
    ) {
        match slot {
            LayerSlot::Background => scene.background.render(surface),
            LayerSlot::Scoreboard => scene.scoreboard.render(surface),
            LayerSlot::Player => scene.player.render(surface),
            LayerSlot::Platform => scene.platform.render(surface),
            LayerSlot::Fps => {
                if let Some(fps) = fps {
                    surface.fill_text(
                        &format!("{fps} fps"),
                        Vec2::new(8.0, 20.0),
                        "14px monospace",
                        "#66FF99",
                        TextAlign::Left,
                    );
                }
            }
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::RecordingSurface;

    #[test]
    fn offset_ratchets_and_resets() {
        let mut viewport = Viewport::new();
        viewport.slide_up_to(120.0);
        viewport.slide_up_to(60.0);
        assert_eq!(viewport.offset(), 120.0);
        viewport.reset();
        assert_eq!(viewport.offset(), 0.0);
        viewport.reset();
        assert_eq!(viewport.offset(), 0.0);
    }

    #[test]
    fn world_layers_draw_under_camera_translate() {
        let mut viewport = Viewport::new();
        viewport.slide_up_to(200.0);

        let background = Background::new();
        let scoreboard = Scoreboard::new();
        let player = Player::default();
        let platform = Platform::default();
        let scene = Scene {
            background: &background,
            scoreboard: &scoreboard,
            player: &player,
            platform: &platform,
        };

        let mut surface = RecordingSurface::default();
        viewport.render(&mut surface, &scene, None);

        let translate_at = surface
            .ops
            .iter()
            .position(|op| op == "translate 0,200")
            .expect("camera translate missing");
        let player_at = surface
            .ops
            .iter()
            .position(|op| op == &format!("rect {}", crate::consts::PLAYER_COLOR))
            .expect("player draw missing");
        let platform_at = surface
            .ops
            .iter()
            .rposition(|op| op == &format!("rect {}", crate::consts::PLATFORM_COLOR))
            .expect("platform draw missing");

        // Entities render inside the translated scope, player before platform
        assert!(translate_at < player_at);
        assert!(player_at < platform_at);
        assert_eq!(surface.ops.last().map(String::as_str), Some("pop"));
    }

    #[test]
    fn fps_readout_is_optional() {
        let viewport = Viewport::new();
        let background = Background::new();
        let scoreboard = Scoreboard::new();
        let player = Player::default();
        let platform = Platform::default();
        let scene = Scene {
            background: &background,
            scoreboard: &scoreboard,
            player: &player,
            platform: &platform,
        };

        let mut with_fps = RecordingSurface::default();
        viewport.render(&mut with_fps, &scene, Some(60));
        assert!(with_fps.ops.iter().any(|op| op == "text 60 fps"));

        let mut without = RecordingSurface::default();
        viewport.render(&mut without, &scene, None);
        assert!(!without.ops.iter().any(|op| op.contains("fps")));
    }
}
