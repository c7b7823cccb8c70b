//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Explicit state passed by `&mut`, no globals
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod replay;
pub mod scoring;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timestep;

pub use collision::{CollisionResult, ball_paddle_overlap, paddle_collision, wall_collision};
pub use rect::PaddleRect;
pub use replay::Replay;
pub use scoring::{check_goal, score_update};
pub use spawn::spawn_velocity;
pub use state::{Arena, Ball, GameEvent, GameState, Paddle, Side};
pub use tick::{TickInput, tick};
pub use timestep::{FrameStepper, clamp_frame_dt, sanitize_dt};
