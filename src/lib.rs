//! Tapwing - a tap-to-fly arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collision, scoring)
//! - `game`: Host-facing game loop and phase machine
//! - `settings`: Data-driven game tuning
//! - `highscore`: Best-score persistence contract
//!
//! The crate contains no rendering, audio, or input handling. A host drives
//! it with a periodic timer and play/tap/reset inputs, reads state back
//! through plain accessors, and reacts to drained [`sim::GameEvent`]s.

pub mod game;
pub mod highscore;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscore::{HighScoreStore, JsonFileStore, MemoryStore};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Horizontal lane the bird flies in. The bird never moves along x;
    /// the world scrolls past it instead.
    pub const LANE_X: f32 = 100.0;
    /// Vertical spawn position of the bird.
    pub const SPAWN_Y: f32 = 300.0;
    /// Nominal host tick period (100 Hz). The sim integrates with the
    /// measured elapsed time, so a jittery or slower timer stays correct.
    pub const NOMINAL_TICK_SECONDS: f64 = 0.01;
}
