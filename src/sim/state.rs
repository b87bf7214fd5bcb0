//! Game state and core simulation types
//!
//! One struct per moving part, each with small mutating methods; the
//! [`GameState`] aggregate owns all of them. Everything here is plain data
//! plus arithmetic so a run replays identically from the same seed and the
//! same tick inputs.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::{LANE_X, SPAWN_Y};
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the play button
    Ready,
    /// Active gameplay
    Active,
    /// Run ended on a collision
    Stopped,
}

/// Screen geometry for one tick, supplied by the host every call since the
/// window may resize between ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Notifications for the host, drained after each input or tick.
///
/// `Started` and `Crashed` double as the audio contract: start the music
/// loop on the former, stop it on the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Entered `Active`
    Started,
    /// A pipe pass was counted
    Scored { score: u32 },
    /// Best score rose; already written through to the store
    NewBest { best: u32 },
    /// Entered `Stopped`
    Crashed { score: u32 },
    /// Reset finished, back in `Ready`
    ReadyAgain,
}

/// The player's bird. Its x never changes; the world scrolls instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(LANE_X, SPAWN_Y),
            vel: Vec2::ZERO,
        }
    }

    /// Accelerate downward. Velocity is unbounded; the ground clamp is the
    /// only brake.
    pub fn apply_gravity(&mut self, gravity: f32, dt: f32) {
        self.vel.y += gravity * dt;
    }

    /// Tap: vertical velocity is set outright, not accumulated
    pub fn apply_impulse(&mut self, jump_velocity: f32) {
        self.vel.y = jump_velocity;
    }

    /// Move by the current velocity
    pub fn integrate(&mut self, dt: f32) {
        self.pos.y += self.vel.y * dt;
    }

    /// Keep the bird between the ceiling and the ground.
    ///
    /// The ceiling clamp leaves velocity untouched, so a bird pinned at the
    /// top keeps accelerating back down on the next tick. Only landing on
    /// the ground zeroes the fall.
    pub fn clamp_to_bounds(&mut self, viewport_height: f32, ground_height: f32, bird_size: f32) {
        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
        }
        let floor = viewport_height - ground_height - bird_size / 2.0;
        if self.pos.y > floor {
            self.pos.y = floor;
            self.vel.y = 0.0;
        }
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// The scrolling pipe pair. A single pair exists at a time; once fully off
/// screen it snaps back to the spawn edge with a freshly sampled gap.
#[derive(Debug, Clone)]
pub struct PipePair {
    /// Distance scrolled left of the spawn edge, always <= 0
    pub offset: f32,
    /// Sampled height of the top pipe
    pub top_height: f32,
    rng: Pcg32,
}

impl PipePair {
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let top_height = rng.random_range(settings.gap_range());
        Self {
            offset: 0.0,
            top_height,
            rng,
        }
    }

    /// Scroll left
    pub fn advance(&mut self, dt: f32, speed: f32) {
        self.offset -= speed * dt;
    }

    /// Recycle once the trailing edge has left the screen: offset back to
    /// the spawn edge, gap height resampled. Returns true when it happened.
    pub fn recycle_if_needed(&mut self, viewport_width: f32, settings: &Settings) -> bool {
        if self.offset <= -(viewport_width + settings.pipe_width) {
            self.offset = 0.0;
            self.top_height = self.rng.random_range(settings.gap_range());
            log::debug!("pipes recycled, new top height {}", self.top_height);
            true
        } else {
            false
        }
    }

    /// Game reset: back to the spawn edge with a fresh gap. The RNG stream
    /// continues rather than reseeding, so consecutive games differ.
    pub fn reset(&mut self, settings: &Settings) {
        self.offset = 0.0;
        self.top_height = self.rng.random_range(settings.gap_range());
    }

    /// Screen x of the pipes' left edge
    pub fn leading_edge(&self, viewport_width: f32) -> f32 {
        viewport_width + self.offset
    }

    /// Screen x of the pipes' right edge
    pub fn trailing_edge(&self, viewport_width: f32, pipe_width: f32) -> f32 {
        viewport_width + self.offset + pipe_width
    }

    /// Top pipe rectangle, hanging from the screen top
    pub fn top_rect(&self, viewport_width: f32, settings: &Settings) -> Rect {
        Rect::new(
            self.leading_edge(viewport_width),
            0.0,
            settings.pipe_width,
            self.top_height,
        )
    }

    /// Bottom pipe rectangle, below the gap.
    ///
    /// Its height reuses the sampled top height rather than filling the
    /// remaining viewport, so the collidable part ends `top_height` below
    /// the gap.
    pub fn bottom_rect(&self, viewport_width: f32, settings: &Settings) -> Rect {
        Rect::new(
            self.leading_edge(viewport_width),
            self.top_height + settings.pipe_gap,
            settings.pipe_width,
            self.top_height,
        )
    }
}

/// Running score, session best, and the per-cycle pass flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    pub best: u32,
    passed: bool,
}

impl Scoreboard {
    pub fn new(best: u32) -> Self {
        Self {
            score: 0,
            best,
            passed: false,
        }
    }

    /// Score a pass the first time the pipes' trailing edge clears the
    /// bird; re-arm once the next cycle's leading edge is ahead of it
    /// again. The two branches are mutually exclusive per tick.
    ///
    /// Returns true when a point was scored.
    pub fn note_pass(&mut self, leading_x: f32, trailing_x: f32, bird_x: f32) -> bool {
        if trailing_x < bird_x && !self.passed {
            self.score += 1;
            if self.score > self.best {
                self.best = self.score;
            }
            self.passed = true;
            true
        } else if leading_x > bird_x {
            self.passed = false;
            false
        } else {
            false
        }
    }

    /// New game: score and pass flag reset, best survives
    pub fn reset(&mut self) {
        self.score = 0;
        self.passed = false;
    }
}

/// Complete simulation state, owned exclusively by the [`crate::Game`] loop
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub phase: GamePhase,
    pub bird: Bird,
    pub pipes: PipePair,
    pub scoreboard: Scoreboard,
    /// Completed active ticks
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(settings: Settings, seed: u64, best: u32) -> Self {
        let pipes = PipePair::new(seed, &settings);
        Self {
            settings,
            phase: GamePhase::Ready,
            bird: Bird::new(),
            pipes,
            scoreboard: Scoreboard::new(best),
            time_ticks: 0,
        }
    }

    /// Back to construction-time values. The best score and the pipe RNG
    /// stream carry over.
    pub fn reset(&mut self) {
        let settings = self.settings;
        self.bird = Bird::new();
        self.pipes.reset(&settings);
        self.scoreboard.reset();
        self.phase = GamePhase::Ready;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_impulse_then_gravity() {
        let mut bird = Bird::new();
        bird.apply_impulse(-400.0);
        bird.apply_gravity(1000.0, 0.1);
        assert!((bird.vel.y - (-300.0)).abs() < 1e-3);
    }

    #[test]
    fn test_ground_clamp_zeroes_velocity() {
        let mut bird = Bird::new();
        bird.pos.y = 1000.0;
        bird.vel.y = 250.0;
        bird.clamp_to_bounds(600.0, 100.0, 80.0);
        assert_eq!(bird.pos.y, 600.0 - 100.0 - 40.0);
        assert_eq!(bird.vel.y, 0.0);
    }

    #[test]
    fn test_ceiling_clamp_keeps_velocity() {
        let mut bird = Bird::new();
        bird.pos.y = -25.0;
        bird.vel.y = -180.0;
        bird.clamp_to_bounds(600.0, 100.0, 80.0);
        assert_eq!(bird.pos.y, 0.0);
        // Pinned at the ceiling the bird must keep its upward velocity so
        // gravity wins again on later ticks.
        assert_eq!(bird.vel.y, -180.0);
    }

    #[test]
    fn test_recycle_resets_offset_and_resamples() {
        let settings = Settings::default();
        let mut pipes = PipePair::new(7, &settings);
        let view_width = 400.0;

        let mut recycles = 0;
        let mut ticks = 0;
        while recycles == 0 {
            pipes.advance(0.01, settings.scroll_speed);
            if pipes.recycle_if_needed(view_width, &settings) {
                recycles += 1;
            }
            ticks += 1;
            assert!(ticks < 10_000, "pipes never recycled");
        }

        assert_eq!(pipes.offset, 0.0);
        assert!(settings.gap_range().contains(&pipes.top_height));
        // The next check must not fire again until a full cycle has passed.
        assert!(!pipes.recycle_if_needed(view_width, &settings));
    }

    #[test]
    fn test_bottom_rect_reuses_top_height() {
        let settings = Settings::default();
        let pipes = PipePair::new(1, &settings);
        let bottom = pipes.bottom_rect(400.0, &settings);
        assert_eq!(bottom.y, pipes.top_height + settings.pipe_gap);
        // The bottom pipe is as tall as the top one, not "whatever remains
        // of the screen". Anything below it is open air.
        assert_eq!(bottom.h, pipes.top_height);
    }

    #[test]
    fn test_scoring_is_idempotent_per_cycle() {
        let mut board = Scoreboard::new(0);
        // Pipes fully behind the bird
        assert!(board.note_pass(-120.0, -20.0, 100.0));
        assert_eq!(board.score, 1);
        for _ in 0..10 {
            assert!(!board.note_pass(-120.0, -20.0, 100.0));
        }
        assert_eq!(board.score, 1);
    }

    #[test]
    fn test_pass_flag_rearms_when_pipes_ahead_again() {
        let mut board = Scoreboard::new(0);
        assert!(board.note_pass(-120.0, -20.0, 100.0));
        // Recycled pipes spawn ahead of the bird
        assert!(!board.note_pass(400.0, 500.0, 100.0));
        // Next full pass scores again
        assert!(board.note_pass(-120.0, -20.0, 100.0));
        assert_eq!(board.score, 2);
    }

    #[test]
    fn test_best_tracks_score() {
        let mut board = Scoreboard::new(5);
        for _ in 0..7 {
            board.note_pass(-120.0, -20.0, 100.0);
            board.note_pass(400.0, 500.0, 100.0);
        }
        assert_eq!(board.score, 7);
        assert_eq!(board.best, 7);
        board.reset();
        assert_eq!(board.score, 0);
        assert_eq!(board.best, 7);
    }

    proptest! {
        #[test]
        fn prop_gravity_is_monotonic_while_airborne(
            gravity in 1.0f32..2000.0,
            dt in 0.001f32..0.1,
            steps in 1usize..200,
        ) {
            let mut bird = Bird::new();
            let mut last = bird.vel.y;
            for _ in 0..steps {
                bird.apply_gravity(gravity, dt);
                prop_assert!(bird.vel.y > last);
                last = bird.vel.y;
            }
        }

        #[test]
        fn prop_recycle_sample_stays_in_range(
            seed in 0u64..1000,
            speed in 50.0f32..1000.0,
            dt in 0.001f32..0.05,
        ) {
            let settings = Settings::default();
            let mut pipes = PipePair::new(seed, &settings);
            prop_assert!(settings.gap_range().contains(&pipes.top_height));

            let mut ticks = 0;
            loop {
                pipes.advance(dt, speed);
                if pipes.recycle_if_needed(400.0, &settings) {
                    break;
                }
                ticks += 1;
                prop_assert!(ticks < 2_000_000, "pipes never recycled");
            }
            prop_assert_eq!(pipes.offset, 0.0);
            prop_assert!(settings.gap_range().contains(&pipes.top_height));
        }
    }
}
