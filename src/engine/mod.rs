//! Game-state machine
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - No timers: countdown and relocation ticks arrive as plain method calls
//! - No rendering or platform dependencies

pub mod placement;
pub mod state;

pub use placement::{PlayArea, SpawnWindow};
pub use state::{GamePhase, GameState};
