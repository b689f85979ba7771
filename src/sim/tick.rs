//! Fixed timestep simulation tick
//!
//! One call advances the game by one frame. Velocity is a per-tick step, so
//! the tick does not scale anything by elapsed time.

use serde::{Deserialize, Serialize};

use super::paddle::Side;
use super::serve::AngleSource;
use super::state::GameState;

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit(Side),
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball left the field; `scorer` gets the point
    Goal { scorer: Side },
}

/// Advance the game state by one tick. Does nothing while paused.
pub fn tick(state: &mut GameState, angles: &mut impl AngleSource) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_paused() {
        return events;
    }

    state.ball.advance();

    // Player 2 goes last, so if both paddles overlap its reflection stands
    let speedup = state.tuning.bounce_speedup;
    for side in [Side::Left, Side::Right] {
        let paddle = match side {
            Side::Left => &state.player1,
            Side::Right => &state.player2,
        };
        if paddle.bounce_ball(&mut state.ball, speedup) {
            events.push(GameEvent::PaddleHit(side));
        }
    }

    let field = state.playfield;
    if state.ball.pos.y < 0.0 || state.ball.top() > field.height {
        state.ball.vel.y = -state.ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    if state.ball.pos.x < 0.0 {
        score_and_serve(state, angles, Side::Right);
        events.push(GameEvent::Goal { scorer: Side::Right });
    }

    if state.ball.pos.x > field.width {
        score_and_serve(state, angles, Side::Left);
        events.push(GameEvent::Goal { scorer: Side::Left });
    }

    events
}

/// Credit `scorer` and serve toward the side that just scored
fn score_and_serve(state: &mut GameState, angles: &mut impl AngleSource, scorer: Side) {
    let paddle = state.paddle_mut(scorer);
    paddle.score = paddle.score.saturating_add(1);
    let (p1, p2) = state.scores();
    log::info!("Goal for {}: {} - {}", scorer.as_str(), p1, p2);

    let base = state.tuning.serve_toward(scorer);
    state.serve_ball(base, angles.next_angle());
}
