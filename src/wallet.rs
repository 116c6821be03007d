//! Lives wallet backed by LocalStorage
//!
//! Reference implementation of `WalletGate`. A real deployment swaps in
//! an adapter over its own wallet service; the simulation only sees the
//! trait.

use serde::{Deserialize, Serialize};

use crate::services::{WalletGate, WalletStatus};

/// Lives granted to a fresh wallet
pub const STARTING_LIVES: u32 = 3;

/// Player credit state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivesWallet {
    pub lives: u32,
    pub unlimited: bool,
}

impl Default for LivesWallet {
    fn default() -> Self {
        Self {
            lives: STARTING_LIVES,
            unlimited: false,
        }
    }
}

impl LivesWallet {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "moonhop_wallet";

    /// Snapshot for the menu display
    pub fn status(&self) -> WalletStatus {
        WalletStatus {
            can_play: self.unlimited || self.lives > 0,
            unlimited_plays: self.unlimited,
            lives: Some(self.lives),
        }
    }

    /// Load wallet state from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(wallet) = serde_json::from_str(&json) {
                    log::info!("Loaded wallet from LocalStorage");
                    return wallet;
                }
            }
        }

        log::info!("Fresh wallet with {} lives", STARTING_LIVES);
        Self::default()
    }

    /// Save wallet state to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Wallet saved ({} lives)", self.lives);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

impl WalletGate for LivesWallet {
    fn can_play(&mut self) -> bool {
        self.unlimited || self.lives > 0
    }

    fn unlimited_plays(&self) -> bool {
        self.unlimited
    }

    fn notify_life_consumed(&mut self) {
        if self.unlimited {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        self.save();
    }
}
