//! Collaborator contracts for the run-state controller
//!
//! The simulation never talks to wallet or persistence machinery
//! directly. The host injects these capabilities into `tick()`; calls
//! are synchronous fire-and-forget and implementations absorb their own
//! failures so nothing can stall the frame loop.

/// Gate deciding whether a run may start, plus the life-consumption sink
pub trait WalletGate {
    /// May the player start a run right now? Re-queried at every
    /// Menu -> Playing transition, never cached across frames.
    fn can_play(&mut self) -> bool;

    /// Unlimited-plays flag: when set, starting a run consumes no life
    fn unlimited_plays(&self) -> bool;

    /// A run started and a life was spent
    fn notify_life_consumed(&mut self);
}

/// Sink for finished runs
pub trait ScoreSink {
    /// A run ended with the given score; `color` tags the player variant
    fn notify_run_ended(&mut self, score: u32, color: &str);
}

/// Cached wallet flags the host refreshes at phase boundaries. Drives
/// menu text only; the actual start gate goes through `WalletGate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalletStatus {
    pub can_play: bool,
    pub unlimited_plays: bool,
    /// Lives remaining, when the wallet knows (menu display)
    pub lives: Option<u32>,
}

/// Always-allowed wallet and discarding sink, for native and dev runs
#[derive(Debug, Default)]
pub struct FreePlay;

impl WalletGate for FreePlay {
    fn can_play(&mut self) -> bool {
        true
    }

    fn unlimited_plays(&self) -> bool {
        true
    }

    fn notify_life_consumed(&mut self) {}
}

impl ScoreSink for FreePlay {
    fn notify_run_ended(&mut self, score: u32, color: &str) {
        log::info!("run ended: {score} points ({color})");
    }
}
