//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only
//! - No wall-clock reads; elapsed time is injected per tick
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{bird_frame, check};
pub use rect::Rect;
pub use state::{Bird, GameEvent, GamePhase, GameState, PipePair, Scoreboard, Viewport};
pub use tick::advance;
