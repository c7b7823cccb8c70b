//! Ping Pong - a two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, scoring)
//! - `renderer`: Draw-call boundary and GPU instance batching
//! - `platform`: Clock, input and seed sources
//! - `settings`: Data-driven arena and spawn tuning
//! - `scoreboard`: Left/right score tallies
//! - `app`: Frame loop tying the collaborators together

pub mod app;
pub mod platform;
pub mod renderer;
pub mod scoreboard;
pub mod settings;
pub mod sim;

pub use scoreboard::Score;
pub use settings::{Settings, SpawnSettings, Timestep};

/// Game configuration constants
pub mod consts {
    /// Tick rate used when fixed stepping is enabled
    pub const FIXED_TICK_HZ: f32 = 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame dt accepted before clamping (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions (pixels)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Paddle geometry, shared by both paddles
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_HALF_WIDTH: f32 = PADDLE_WIDTH / 2.0;
    pub const PADDLE_HALF_HEIGHT: f32 = PADDLE_HEIGHT / 2.0;
    /// Gap between a paddle's outer face and its screen edge
    pub const PADDLE_X_OFFSET: f32 = 30.0;
    /// Paddle vertical speed when a target is requested (pixels/s)
    pub const PADDLE_SPEED: f32 = 480.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 25.0;
    /// Horizontal spawn speed range (pixels/s)
    pub const SPAWN_SPEED_X_MIN: f32 = 300.0;
    pub const SPAWN_SPEED_X_MAX: f32 = 600.0;
    /// Vertical spawn velocity is drawn from [-SPAWN_SPEED_Y, SPAWN_SPEED_Y]
    pub const SPAWN_SPEED_Y: f32 = 300.0;

    /// Mid line quad width and texture tile height
    pub const MIDLINE_WIDTH: f32 = 10.0;
    pub const MIDLINE_TILE: f32 = 32.0;
}
