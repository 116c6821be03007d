//! The simulation
//!
//! All gameplay logic lives here. This module must stay host-independent:
//! - No DOM, storage, or timer access
//! - Collaborators reach it only through the injected service traits
//! - Rendering goes through `DrawSurface`, never a concrete backend

pub mod background;
pub mod collision;
pub mod menu;
pub mod platform;
pub mod player;
pub mod scoreboard;
pub mod state;
pub mod tick;
pub mod viewport;

pub use background::Background;
pub use menu::render_frame;
pub use platform::Platform;
pub use player::Player;
pub use scoreboard::Scoreboard;
pub use state::{GamePhase, GameState, RunSummary};
pub use tick::{Services, TickInput, tick};
pub use viewport::{LayerSlot, Scene, Viewport};
