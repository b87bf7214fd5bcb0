//! Per-tick simulation step
//!
//! One tick runs in a fixed order: gravity, integration, bounds clamp, pipe
//! scroll, pipe recycle, collision, scoring. The order matters: collision
//! is tested against the pipes' post-scroll position, and a crash tick
//! never scores.

use super::collision;
use super::state::{GameEvent, GamePhase, GameState, Viewport};

/// Advance the simulation by `dt` seconds of elapsed time.
///
/// Callers gate on phase; this function assumes the run is `Active` and
/// flips it to `Stopped` itself on a collision.
pub fn advance(state: &mut GameState, dt: f32, view: Viewport, events: &mut Vec<GameEvent>) {
    let settings = state.settings;

    state.bird.apply_gravity(settings.gravity, dt);
    state.bird.integrate(dt);
    state
        .bird
        .clamp_to_bounds(view.height, settings.ground_height, settings.bird_size);

    state.pipes.advance(dt, settings.scroll_speed);
    state.pipes.recycle_if_needed(view.width, &settings);

    let top = state.pipes.top_rect(view.width, &settings);
    let bottom = state.pipes.bottom_rect(view.width, &settings);
    if collision::check(state.bird.pos, settings.bird_radius, &top, &bottom) {
        state.phase = GamePhase::Stopped;
        events.push(GameEvent::Crashed {
            score: state.scoreboard.score,
        });
        log::info!("crashed at score {}", state.scoreboard.score);
    } else {
        let leading = state.pipes.leading_edge(view.width);
        let trailing = state.pipes.trailing_edge(view.width, settings.pipe_width);
        let prev_best = state.scoreboard.best;
        if state
            .scoreboard
            .note_pass(leading, trailing, state.bird.pos.x)
        {
            events.push(GameEvent::Scored {
                score: state.scoreboard.score,
            });
            if state.scoreboard.best > prev_best {
                events.push(GameEvent::NewBest {
                    best: state.scoreboard.best,
                });
            }
        }
    }

    state.time_ticks += 1;
}
