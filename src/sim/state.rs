//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`], which is passed
//! by `&mut` into each step function.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::PaddleRect;
use super::spawn::spawn_velocity;
use crate::scoreboard::Score;
use crate::settings::{Settings, SpawnSettings};

/// Which half of the arena a paddle (or player) owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Normal of the paddle face that looks toward the arena center
    pub fn face_normal(self) -> Vec2 {
        match self {
            Side::Left => Vec2::X,
            Side::Right => Vec2::NEG_X,
        }
    }

    /// Whether a ball with horizontal velocity `vx` is heading toward this side
    #[inline]
    pub fn is_approached_by(self, vx: f32) -> bool {
        match self {
            Side::Left => vx < 0.0,
            Side::Right => vx > 0.0,
        }
    }
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball was returned by a paddle
    PaddleHit(Side),
    /// A side won the point
    Scored(Side),
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Radius is fixed for the lifetime of the ball
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn speed_squared(&self) -> f32 {
        self.vel.length_squared()
    }

    /// Explicit Euler step: `pos += vel * dt`
    ///
    /// No substepping: a large `dt` can carry the ball straight through a
    /// paddle.
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Fixed arena geometry shared by both paddles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub paddle_x_offset: f32,
    pub paddle_half_width: f32,
    pub paddle_half_height: f32,
}

impl Arena {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            paddle_x_offset: settings.paddle_x_offset,
            paddle_half_width: settings.paddle_width / 2.0,
            paddle_half_height: settings.paddle_height / 2.0,
        }
    }

    /// Spawn point of the ball
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Horizontal center of the paddle on `side`
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_x_offset + self.paddle_half_width,
            Side::Right => self.width - self.paddle_x_offset - self.paddle_half_width,
        }
    }

    #[inline]
    pub fn paddle_half_extents(&self) -> Vec2 {
        Vec2::new(self.paddle_half_width, self.paddle_half_height)
    }

    /// Keep a paddle center inside the arena
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let lo = self.paddle_half_height;
        let hi = self.height - self.paddle_half_height;
        if lo > hi { self.height / 2.0 } else { y.clamp(lo, hi) }
    }
}

/// A paddle; only its vertical center can change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Vertical center (pixels)
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Collision rectangle for this paddle
    pub fn rect(&self, arena: &Arena) -> PaddleRect {
        PaddleRect::new(
            Vec2::new(arena.paddle_x(self.side), self.y),
            arena.paddle_half_extents(),
        )
    }

    /// Move toward a target center, limited to `max_speed` pixels/s
    pub fn move_toward(&mut self, target_y: f32, dt: f32, max_speed: f32, arena: &Arena) {
        let target = arena.clamp_paddle_y(target_y);
        let max_delta = max_speed * dt;
        let delta = (target - self.y).clamp(-max_delta, max_delta);
        self.y = arena.clamp_paddle_y(self.y + delta);
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub arena: Arena,
    /// Spawn velocity distribution
    pub spawn: SpawnSettings,
    /// Push the ball out of a paddle after a hit
    pub paddle_nudge: bool,
    /// Paddle speed when a target is requested
    pub paddle_speed: f32,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the ball at the center and a random velocity
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let arena = Arena::from_settings(settings);
        let mut rng = Pcg32::seed_from_u64(seed);
        let vel = spawn_velocity(&mut rng, &settings.spawn);
        let mid_y = arena.height / 2.0;

        log::debug!("New game (seed {}), ball velocity {:?}", seed, vel);

        Self {
            seed,
            arena,
            spawn: settings.spawn,
            paddle_nudge: settings.paddle_nudge,
            paddle_speed: settings.paddle_speed,
            ball: Ball::new(arena.center(), vel, settings.ball_radius),
            left: Paddle::new(Side::Left, mid_y),
            right: Paddle::new(Side::Right, mid_y),
            score: Score::new(),
            time_ticks: 0,
            events: Vec::new(),
            rng,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Put the ball back at the arena center with a fresh random velocity
    pub fn reset_ball(&mut self) {
        self.ball.pos = self.arena.center();
        self.ball.vel = spawn_velocity(&mut self.rng, &self.spawn);
        log::debug!("Ball reset, velocity {:?}", self.ball.vel);
    }
}
