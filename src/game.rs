//! Host-facing game loop
//!
//! [`Game`] owns the simulation state and the phase machine. The host feeds
//! it play/tap/reset inputs and periodic wall-clock timestamps, reads state
//! back through accessors, and drains [`GameEvent`]s after each call.
//! Everything else (drawing, audio playback, the timer itself) stays on the
//! host side.
//!
//! Inputs in the wrong phase are silently ignored; this is a UI-driven
//! loop, not a protocol.

use glam::Vec2;

use crate::highscore::HighScoreStore;
use crate::settings::Settings;
use crate::sim::rect::Rect;
use crate::sim::state::{GameEvent, GamePhase, GameState, Viewport};
use crate::sim::tick;

/// The game loop and state machine
pub struct Game {
    state: GameState,
    store: Box<dyn HighScoreStore>,
    events: Vec<GameEvent>,
    /// Timestamp of the last processed active tick, in seconds
    last_tick: f64,
}

impl Game {
    /// Build a fresh game in `Ready`. Reads the best score from the store
    /// once; later writes go through immediately on every new best.
    pub fn new(settings: Settings, seed: u64, mut store: Box<dyn HighScoreStore>) -> Self {
        let best = store.load();
        Self {
            state: GameState::new(settings, seed, best),
            store,
            events: Vec::new(),
            last_tick: 0.0,
        }
    }

    /// Play pressed. Valid in `Ready` only; `now` becomes the tick baseline.
    pub fn on_play_input(&mut self, now: f64) {
        if self.state.phase != GamePhase::Ready {
            return;
        }
        self.state.phase = GamePhase::Active;
        self.last_tick = now;
        self.events.push(GameEvent::Started);
        log::info!("run started, best {}", self.state.scoreboard.best);
    }

    /// Screen tapped. Only affects an active run.
    pub fn on_tap_input(&mut self) {
        if self.state.phase != GamePhase::Active {
            return;
        }
        let jump = self.state.settings.jump_velocity;
        self.state.bird.apply_impulse(jump);
    }

    /// Periodic tick with a monotonic timestamp in seconds. No-op outside
    /// `Active`.
    ///
    /// The integration step uses the measured gap since the previous tick,
    /// not the host timer's nominal period, so jitter and missed ticks
    /// stay correct.
    pub fn on_tick(&mut self, now: f64, view: Viewport) {
        if self.state.phase != GamePhase::Active {
            return;
        }
        let dt = (now - self.last_tick) as f32;
        let prev_best = self.state.scoreboard.best;
        tick::advance(&mut self.state, dt, view, &mut self.events);
        if self.state.scoreboard.best > prev_best {
            self.store.save(self.state.scoreboard.best);
        }
        self.last_tick = now;
    }

    /// Restart after a crash. Valid in `Stopped` only.
    pub fn on_reset_input(&mut self) {
        if self.state.phase != GamePhase::Stopped {
            return;
        }
        self.state.reset();
        self.events.push(GameEvent::ReadyAgain);
        log::info!("reset, best {}", self.state.scoreboard.best);
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn bird_position(&self) -> Vec2 {
        self.state.bird.pos
    }

    pub fn bird_velocity(&self) -> Vec2 {
        self.state.bird.vel
    }

    pub fn score(&self) -> u32 {
        self.state.scoreboard.score
    }

    pub fn best(&self) -> u32 {
        self.state.scoreboard.best
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// Current (top, bottom) pipe rectangles for the given viewport
    pub fn pipe_rects(&self, view: Viewport) -> (Rect, Rect) {
        (
            self.state.pipes.top_rect(view.width, &self.state.settings),
            self.state.pipes.bottom_rect(view.width, &self.state.settings),
        )
    }
}
