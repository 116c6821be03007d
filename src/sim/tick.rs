//! Per-frame tick and the run-state controller
//!
//! One tick: scale the wall-clock delta, run the phase the state machine
//! is in, and return. Only the Playing arm advances physics; Menu and
//! DeathScreen just watch input and the overlay timer. The host re-arms
//! the frame request unconditionally, so overlays keep animating while
//! the simulation is frozen.

use glam::Vec2;

use crate::consts::*;
use crate::geometry::Aabb;
use crate::services::{ScoreSink, WalletGate, WalletStatus};

use super::collision;
use super::state::{GamePhase, GameState, RunSummary};

/// Input snapshot for a single tick. One-shot values (start, click) are
/// consumed by the host before the next frame.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Steer keys held this frame
    pub steer_left: bool,
    pub steer_right: bool,
    /// Start key edge (Enter/Space went down this frame)
    pub start: bool,
    /// Click consumed from the controller this frame, if any
    pub click: Option<Vec2>,
    /// Cached wallet flags, refreshed by the host at phase boundaries.
    /// Drives menu text only - the start gate re-queries the wallet.
    pub wallet: WalletStatus,
}

/// Injected collaborators. Calls are fire-and-forget; implementations
/// absorb their own failures so the frame loop never stalls.
pub struct Services<'a> {
    pub wallet: &'a mut dyn WalletGate,
    pub scores: &'a mut dyn ScoreSink,
}

/// The menu's play-button hit-box, centered on the canvas
pub fn play_button_hitbox() -> Aabb {
    Aabb::new(
        Vec2::new(
            (GAME_WIDTH - PLAY_BUTTON_SIZE.x) / 2.0,
            (GAME_HEIGHT - PLAY_BUTTON_SIZE.y) / 2.0,
        ),
        PLAY_BUTTON_SIZE,
    )
}

/// Advance the game by one frame of wall-clock time (`dt_ms` elapsed
/// since the previous frame).
pub fn tick(state: &mut GameState, input: &TickInput, services: &mut Services, dt_ms: f32) {
    let dt = dt_ms / TIMESCALE;

    match state.phase {
        GamePhase::Menu => menu_tick(state, input, services),
        GamePhase::Playing => playing_tick(state, input, dt),
        GamePhase::DeathScreen => death_screen_tick(state, services, dt_ms),
    }
}

/// Menu -> Playing, gated by the wallet. `can_play` is re-evaluated at
/// the transition itself, never trusted from the cached snapshot: credit
/// state can change between menu frames.
fn menu_tick(state: &mut GameState, input: &TickInput, services: &mut Services) {
    let clicked_play = input
        .click
        .map(|pos| play_button_hitbox().contains(pos))
        .unwrap_or(false);

    if !input.start && !clicked_play {
        return;
    }

    if !services.wallet.can_play() {
        // Precondition fault: no entity reset, no notification, menu stays
        log::info!("start refused: no plays available");
        return;
    }

    if !services.wallet.unlimited_plays() {
        services.wallet.notify_life_consumed();
    }

    state.start_run();
    log::info!("run started");
}

/// One physics step: steer, integrate, resolve collisions, follow with
/// the camera, recompute the score, check the death condition.
fn playing_tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let prev_player_bottom = state.player.bottom();

    state.player.steer(input.steer_left, input.steer_right, dt);
    state.player.tick(dt);
    state.platform.tick(dt);

    collision::process(&mut state.player, &mut state.platform, prev_player_bottom);

    // Post-move observers, in a fixed order: camera follow, parallax,
    // score, then the death check against the ratcheted offset.
    let player_y = state.player.body.pos.y;
    state.viewport.slide_up_to(-player_y + VIEWPORT_LEAD);
    state.background.slide_up_to(-player_y);
    state.scoreboard.observe(player_y);

    if player_y > -(state.viewport.offset() - GAME_HEIGHT) {
        state.phase = GamePhase::DeathScreen;
        state.death_timer_ms = 0.0;
        log::info!(
            "player fell off screen at {} points",
            state.scoreboard.total_points()
        );
    }
}

/// DeathScreen -> Menu after the fixed overlay duration. The final score
/// is reported exactly once, at the transition.
fn death_screen_tick(state: &mut GameState, services: &mut Services, dt_ms: f32) {
    state.death_timer_ms += dt_ms;
    if state.death_timer_ms < DEATH_SCREEN_MS {
        return;
    }

    let score = state.scoreboard.total_points();
    services.scores.notify_run_ended(score, &state.player.color);
    state.last_run = Some(RunSummary {
        score,
        color: state.player.color.clone(),
    });
    state.phase = GamePhase::Menu;
}
