//! Mole Mash - A terminal whack-a-mole arcade game
//!
//! Core modules:
//! - `engine`: Game-state machine (score, countdown, target placement)
//! - `render`: Terminal frame drawing
//! - `tuning`: Data-driven game balance

pub mod engine;
pub mod render;
pub mod tuning;

pub use engine::{GamePhase, GameState, PlayArea};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Round length in whole seconds
    pub const ROUND_DURATION_SECS: u32 = 60;

    /// Countdown tick cadence (milliseconds)
    pub const COUNTDOWN_INTERVAL_MS: u64 = 1_000;
    /// Target relocation cadence (milliseconds)
    pub const RELOCATE_INTERVAL_MS: u64 = 800;

    /// Fraction of the play-area height reserved for the HUD readout;
    /// the target is never placed above it
    pub const DEAD_ZONE_FRACTION: f32 = 0.2;
    /// Default target side length, in terminal cells
    pub const DEFAULT_TARGET_SIZE: i32 = 5;
    /// Remaining seconds at which the HUD time readout turns red
    pub const LOW_TIME_SECS: u32 = 10;

    /// App loop frame budget (~30 fps)
    pub const FRAME_INTERVAL_MS: u64 = 33;
    /// Per-frame elapsed-time clamp; a stalled terminal pauses the
    /// round rather than fast-forwarding it
    pub const MAX_FRAME_STALL_MS: u64 = 250;
}
