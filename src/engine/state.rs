//! Game state and lifecycle operations
//!
//! One `GameState` per play session, owned by whoever constructed it. The
//! presentation layer drives it with plain method calls (ticks, taps, area
//! reports) and renders from the read-only accessors.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::placement::PlayArea;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Round running; taps score and the target keeps moving
    Playing,
    /// Countdown exhausted; score and target are frozen until restart
    Over,
}

/// Complete game state (deterministic for a given seed and call sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    seed: u64,
    /// Placement RNG, advanced by every draw
    rng: Pcg32,
    /// Round length in whole seconds
    round_secs: u32,
    score: u64,
    remaining_secs: u32,
    phase: GamePhase,
    /// Top-left anchor of the target; `IVec2::ZERO` until the first
    /// placement seats it
    target_pos: IVec2,
    /// Latest reported geometry; `None` until the presentation layer calls
    /// [`GameState::report_area`]
    area: Option<PlayArea>,
}

impl GameState {
    /// Create a fresh session with the given seed and round length
    pub fn new(seed: u64, round_secs: u32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            round_secs,
            score: 0,
            remaining_secs: round_secs,
            phase: GamePhase::Playing,
            target_pos: IVec2::ZERO,
            area: None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn round_secs(&self) -> u32 {
        self.round_secs
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    pub fn target_pos(&self) -> IVec2 {
        self.target_pos
    }

    pub fn play_area(&self) -> Option<PlayArea> {
        self.area
    }

    /// Store the play-area geometry. The first report also seats the target;
    /// later reports (resize) leave it in place until the next placement,
    /// which respects the new bounds.
    pub fn report_area(&mut self, width: i32, height: i32, target_size: i32) {
        let first = self.area.is_none();
        self.area = Some(PlayArea::new(width, height, target_size));
        if first {
            self.relocate_target();
        }
    }

    /// Move the target to a fresh uniform draw from the spawn window.
    ///
    /// No-op once Over; the placement step also no-ops while no area has
    /// been reported yet.
    pub fn relocate_target(&mut self) {
        if self.is_over() {
            return;
        }
        if let Some(area) = self.area {
            self.target_pos = area.spawn_window().sample(&mut self.rng);
        }
    }

    /// Score a successful tap and immediately move the target. No-op once
    /// Over.
    pub fn handle_tap(&mut self) {
        if self.is_over() {
            return;
        }
        self.score += 1;
        self.relocate_target();
    }

    /// One whole-second countdown tick. Decrements while time remains; the
    /// tick after the countdown empties flips the phase to Over, so the
    /// displayed zero lingers for one full tick before the round ends.
    pub fn advance_clock(&mut self) {
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
        } else {
            self.phase = GamePhase::Over;
        }
    }

    /// Reset to a fresh round: score cleared, countdown refilled, phase
    /// Playing, one placement with the last known area. Callable any time;
    /// mid-round it forfeits the round in progress.
    pub fn restart(&mut self) {
        self.score = 0;
        self.remaining_secs = self.round_secs;
        self.phase = GamePhase::Playing;
        self.relocate_target();
    }
}
