//! Moonhop - a vertical bounce platformer
//!
//! The player falls under gravity and bounces off a rising platform while
//! the camera ratchets upward with the climb. Runs are gated by a lives
//! wallet and end when the player drops below the visible window.
//!
//! Core modules:
//! - `sim`: The simulation (entities, collisions, viewport, run-state FSM)
//! - `render`: 2D drawing surface abstraction (canvas on wasm)
//! - `input`: Keyboard/pointer state with one-shot click semantics
//! - `services`: Wallet gate and score sink collaborator contracts
//! - `wallet` / `score_history`: LocalStorage-backed reference collaborators

pub mod geometry;
pub mod input;
pub mod render;
pub mod score_history;
pub mod services;
pub mod sim;
pub mod wallet;

pub use geometry::{Aabb, MovingPoint};
pub use input::{Controller, Key};
pub use render::DrawSurface;
pub use services::{ScoreSink, WalletGate, WalletStatus};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Logical canvas size (world width doubles as the horizontal bound)
    pub const GAME_WIDTH: f32 = 480.0;
    pub const GAME_HEIGHT: f32 = 800.0;

    /// Downward acceleration per scaled time unit
    pub const DEFAULT_GRAVITY: f32 = 0.2;

    /// Milliseconds of wall-clock time per scaled simulation unit
    pub const TIMESCALE: f32 = 16.0;

    /// Rebound-speed floor for the platform so weak contacts stay playable
    pub const MIN_PLATFORM_REBOUND_SPEED: f32 = 10.0;

    /// How long the death overlay stays up before returning to the menu
    pub const DEATH_SCREEN_MS: f32 = 4000.0;

    /// Camera leads the player by this many world units
    pub const VIEWPORT_LEAD: f32 = 50.0;

    /// Player tuning
    pub const PLAYER_SPAWN_POS: Vec2 = Vec2::new(30.0, 110.0);
    pub const PLAYER_SPAWN_VEL: Vec2 = Vec2::new(2.0, -2.0);
    pub const PLAYER_SIZE: Vec2 = Vec2::new(30.0, 30.0);
    pub const PLAYER_COLOR: &str = "#FF0000";
    /// Steering acceleration and lateral speed cap
    pub const PLAYER_STEER_ACCEL: f32 = 0.3;
    pub const PLAYER_MAX_LATERAL_SPEED: f32 = 6.0;

    /// Platform tuning (gravity sign is inverted: net upward drift)
    pub const PLATFORM_SPAWN_POS: Vec2 = Vec2::new(30.0, 690.0);
    pub const PLATFORM_SPAWN_VEL: Vec2 = Vec2::new(2.0, 2.0);
    pub const PLATFORM_SIZE: Vec2 = Vec2::new(90.0, 20.0);
    pub const PLATFORM_COLOR: &str = "#FFFFFF";

    /// Menu play-button hit-box
    pub const PLAY_BUTTON_SIZE: Vec2 = Vec2::new(300.0, 150.0);
}
