//! Simulation tick
//!
//! Advances the game by one step: paddles, ball integration, wall bounce,
//! paddle bounces, then goal check.

use super::collision::{paddle_collision, wall_collision};
use super::scoring::score_update;
use super::state::{GameEvent, GameState, Side};
use super::timestep::sanitize_dt;

/// Input commands for a single tick
///
/// Paddles stay where they are unless a target is given.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Target center for the left paddle
    pub left_target_y: Option<f32>,
    /// Target center for the right paddle
    pub right_target_y: Option<f32>,
}

impl TickInput {
    fn target(&self, side: Side) -> Option<f32> {
        match side {
            Side::Left => self.left_target_y,
            Side::Right => self.right_target_y,
        }
    }
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = sanitize_dt(dt);
    state.events.clear();
    state.time_ticks += 1;

    let arena = state.arena;
    let paddle_speed = state.paddle_speed;
    for side in [Side::Left, Side::Right] {
        if let Some(target) = input.target(side) {
            state.paddle_mut(side).move_toward(target, dt, paddle_speed, &arena);
        }
    }

    state.ball.integrate(dt);

    if wall_collision(&mut state.ball, arena.height) {
        log::debug!("Wall bounce at {:?}", state.ball.pos);
        state.events.push(GameEvent::WallBounce);
    }

    for side in [Side::Left, Side::Right] {
        let rect = state.paddle(side).rect(&arena);
        if paddle_collision(&mut state.ball, &rect, side, state.paddle_nudge).hit {
            log::debug!("{:?} paddle hit at {:?}", side, state.ball.pos);
            state.events.push(GameEvent::PaddleHit(side));
        }
    }

    score_update(state);

    log::trace!(
        "tick {} dt={:.4} ball={:?} vel={:?}",
        state.time_ticks,
        dt,
        state.ball.pos,
        state.ball.vel
    );
}
