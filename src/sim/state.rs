//! Game state and the run lifecycle
//!
//! Entities are constructed once per session and reset at the start of
//! every run; the run is the unit of lifecycle.

use super::background::Background;
use super::platform::Platform;
use super::player::Player;
use super::scoreboard::Scoreboard;
use super::viewport::Viewport;

/// Current phase of the run-state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Idle, showing the play card (with the last run's score, if any)
    Menu,
    /// Simulation ticking
    Playing,
    /// Timed overlay after falling off screen; physics frozen
    DeathScreen,
}

/// A finished run, as shown on the menu and reported to the score sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    pub color: String,
}

/// Everything the simulation owns
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    pub platform: Platform,
    pub background: Background,
    pub viewport: Viewport,
    pub scoreboard: Scoreboard,
    /// Wall-clock ms spent on the death overlay
    pub death_timer_ms: f32,
    pub last_run: Option<RunSummary>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Menu,
            player: Player::default(),
            platform: Platform::default(),
            background: Background::new(),
            viewport: Viewport::new(),
            scoreboard: Scoreboard::new(),
            death_timer_ms: 0.0,
            last_run: None,
        }
    }

    /// Begin a run: every entity and offset back to its spawn state,
    /// then hand control to the physics loop. Callers gate this on the
    /// wallet; the state itself never refuses.
    pub fn start_run(&mut self) {
        self.player.reset();
        self.platform.reset();
        self.viewport.reset();
        self.background.reset();
        self.scoreboard.reset();
        self.death_timer_ms = 0.0;
        self.phase = GamePhase::Playing;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
