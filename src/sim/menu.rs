//! Frame presentation: phase dispatch, menu card, death overlay
//!
//! Transitions live in `tick`; this module only draws. The world renders
//! in every phase so the menu and death overlays sit on top of the last
//! simulated frame.

use glam::Vec2;

use crate::consts::*;
use crate::render::{DrawSurface, TextAlign};
use crate::services::WalletStatus;

use super::state::{GamePhase, GameState};
use super::viewport::Scene;

const CARD_COLOR: &str = "rgba(0, 0, 0, 0.8)";
const DEATH_TINT: &str = "rgba(255, 0, 0, 0.3)";
const DEATH_BANNER: &str = "YOU'RE BROKE BOI";
const TITLE_FONT: &str = "60px Oswald, sans-serif";
const HEADING_FONT: &str = "40px Oswald, sans-serif";
const PROMPT_FONT: &str = "30px Oswald, sans-serif";
const DETAIL_FONT: &str = "20px Oswald, sans-serif";

/// Draw one complete frame for the current phase.
pub fn render_frame(
    state: &GameState,
    wallet: WalletStatus,
    surface: &mut dyn DrawSurface,
    fps: Option<u32>,
) {
    surface.clear();

    let scene = Scene {
        background: &state.background,
        scoreboard: &state.scoreboard,
        player: &state.player,
        platform: &state.platform,
    };
    state.viewport.render(surface, &scene, fps);

    match state.phase {
        GamePhase::Playing => {}
        GamePhase::Menu => render_menu_card(state, wallet, surface),
        GamePhase::DeathScreen => render_death_overlay(surface),
    }
}

fn render_menu_card(state: &GameState, wallet: WalletStatus, surface: &mut dyn DrawSurface) {
    surface.fill_rect(CARD_COLOR, Vec2::ZERO, Vec2::new(GAME_WIDTH, GAME_HEIGHT));

    let center_x = GAME_WIDTH / 2.0;
    let center_y = GAME_HEIGHT / 2.0;

    if let Some(run) = &state.last_run {
        surface.fill_text(
            &format!("Score: {}", run.score),
            Vec2::new(center_x, center_y - 50.0),
            HEADING_FONT,
            &run.color,
            TextAlign::Center,
        );
    }

    surface.fill_text(
        if wallet.can_play {
            "Click to Play"
        } else {
            "Out of lives"
        },
        Vec2::new(center_x, center_y),
        PROMPT_FONT,
        "#FFFFFF",
        TextAlign::Center,
    );

    let credit_line = if wallet.unlimited_plays {
        "Premium Player - Unlimited Plays!".to_string()
    } else {
        match wallet.lives {
            Some(lives) => format!("Remaining Lives: {lives}"),
            None => "Connect your wallet to play".to_string(),
        }
    };
    surface.fill_text(
        &credit_line,
        Vec2::new(center_x, center_y + 40.0),
        DETAIL_FONT,
        "#FFFFFF",
        TextAlign::Center,
    );

    surface.fill_text(
        "Arrows or A/D to steer, Enter or Space to start",
        Vec2::new(center_x, center_y + 80.0),
        DETAIL_FONT,
        "#AAAAAA",
        TextAlign::Center,
    );
}

fn render_death_overlay(surface: &mut dyn DrawSurface) {
    surface.push();
    surface.fill_rect(DEATH_TINT, Vec2::ZERO, Vec2::new(GAME_WIDTH, GAME_HEIGHT));
    surface.fill_text(
        DEATH_BANNER,
        Vec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0),
        TITLE_FONT,
        "#FFFFFF",
        TextAlign::Center,
    );
    surface.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::RecordingSurface;
    use crate::sim::state::RunSummary;

    fn wallet_with_lives(lives: u32) -> WalletStatus {
        WalletStatus {
            can_play: lives > 0,
            unlimited_plays: false,
            lives: Some(lives),
        }
    }

    #[test]
    fn menu_shows_last_score_and_lives() {
        let mut state = GameState::new();
        state.last_run = Some(RunSummary {
            score: 420,
            color: PLAYER_COLOR.to_string(),
        });

        let mut surface = RecordingSurface::default();
        render_frame(&state, wallet_with_lives(2), &mut surface, None);

        assert!(surface.ops.iter().any(|op| op == "text Score: 420"));
        assert!(surface.ops.iter().any(|op| op == "text Click to Play"));
        assert!(surface.ops.iter().any(|op| op == "text Remaining Lives: 2"));
    }

    #[test]
    fn broke_menu_offers_no_play_prompt() {
        let state = GameState::new();
        let mut surface = RecordingSurface::default();
        render_frame(&state, wallet_with_lives(0), &mut surface, None);

        assert!(surface.ops.iter().any(|op| op == "text Out of lives"));
        assert!(!surface.ops.iter().any(|op| op == "text Click to Play"));
    }

    #[test]
    fn death_overlay_draws_the_banner() {
        let mut state = GameState::new();
        state.start_run();
        state.phase = GamePhase::DeathScreen;

        let mut surface = RecordingSurface::default();
        render_frame(&state, wallet_with_lives(1), &mut surface, None);

        assert!(surface.ops.iter().any(|op| op == &format!("text {DEATH_BANNER}")));
        assert!(surface.ops.iter().any(|op| op == &format!("rect {DEATH_TINT}")));
    }

    #[test]
    fn playing_frame_has_no_overlay() {
        let mut state = GameState::new();
        state.start_run();

        let mut surface = RecordingSurface::default();
        render_frame(&state, wallet_with_lives(1), &mut surface, Some(60));

        assert_eq!(surface.ops.first().map(String::as_str), Some("clear"));
        assert!(!surface.ops.iter().any(|op| op == &format!("rect {CARD_COLOR}")));
        assert!(!surface.ops.iter().any(|op| op == &format!("rect {DEATH_TINT}")));
    }
}
