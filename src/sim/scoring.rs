//! Goal detection
//!
//! The left and right screen edges are goals. Once the ball is entirely past
//! one, the opposite side wins the point and the ball respawns.

use super::state::{GameEvent, GameState, Side};

/// Side that wins the point if the ball is fully outside the arena
pub fn check_goal(ball_x: f32, radius: f32, arena_width: f32) -> Option<Side> {
    if ball_x + radius < 0.0 {
        Some(Side::Right)
    } else if ball_x - radius > arena_width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Award a point and respawn the ball when it leaves through a goal
///
/// No-op (state untouched) while the ball is still in play.
pub fn score_update(state: &mut GameState) -> Option<Side> {
    let scorer = check_goal(state.ball.pos.x, state.ball.radius(), state.arena.width)?;

    state.score.record(scorer);
    state.events.push(GameEvent::Scored(scorer));
    log::info!("{:?} player scored ({})", scorer, state.score);

    state.reset_ball();
    Some(scorer)
}
