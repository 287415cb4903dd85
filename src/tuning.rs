//! Data-driven game balance
//!
//! Loaded from `mole-mash.json` in the working directory when present;
//! missing fields fall back to the defaults in [`crate::consts`].

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::consts::*;

/// Tunable game parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Round length in whole seconds
    pub round_secs: u32,
    /// Countdown tick cadence
    pub countdown_interval_ms: u64,
    /// Target relocation cadence
    pub relocate_interval_ms: u64,
    /// Target side length in terminal cells
    pub target_size: i32,
    /// Pinned RNG seed; `None` draws one from the clock at startup
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            round_secs: ROUND_DURATION_SECS,
            countdown_interval_ms: COUNTDOWN_INTERVAL_MS,
            relocate_interval_ms: RELOCATE_INTERVAL_MS,
            target_size: DEFAULT_TARGET_SIZE,
            seed: None,
        }
    }
}

impl Tuning {
    /// Tuning file looked up in the working directory
    const FILE: &'static str = "mole-mash.json";

    /// Load tuning from disk, defaults when absent or malformed
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE))
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Self>(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning.normalize()
                }
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// Floor the fields a hand-edited file could zero out (a 0 ms interval
    /// would spin the app loop)
    fn normalize(mut self) -> Self {
        self.round_secs = self.round_secs.max(1);
        self.countdown_interval_ms = self.countdown_interval_ms.max(1);
        self.relocate_interval_ms = self.relocate_interval_ms.max(1);
        self.target_size = self.target_size.max(1);
        self
    }

    pub fn countdown_interval(&self) -> Duration {
        Duration::from_millis(self.countdown_interval_ms)
    }

    pub fn relocate_interval(&self) -> Duration {
        Duration::from_millis(self.relocate_interval_ms)
    }
}
