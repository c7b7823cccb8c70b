//! Game settings and tuning
//!
//! Loaded from an optional JSON file; every field falls back to the
//! constants in [`crate::consts`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How frame time is turned into simulation steps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Timestep {
    /// One tick per frame using the measured dt
    #[default]
    Variable,
    /// Accumulate frame time and tick at a fixed rate
    Fixed { hz: f32 },
}

impl Timestep {
    /// Fixed stepping at the default tick rate
    pub const FIXED_DEFAULT: Timestep = Timestep::Fixed { hz: FIXED_TICK_HZ };

    /// Step length for fixed stepping (None for variable)
    pub fn fixed_dt(&self) -> Option<f32> {
        match self {
            Timestep::Variable => None,
            Timestep::Fixed { hz } => Some(1.0 / hz),
        }
    }
}

/// Ball spawn velocity distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    /// Minimum horizontal speed (pixels/s)
    pub speed_x_min: f32,
    /// Maximum horizontal speed (pixels/s)
    pub speed_x_max: f32,
    /// Vertical speed is drawn from [-speed_y, speed_y]
    pub speed_y: f32,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            speed_x_min: SPAWN_SPEED_X_MIN,
            speed_x_max: SPAWN_SPEED_X_MAX,
            speed_y: SPAWN_SPEED_Y,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub width: f32,
    pub height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each paddle and its screen edge
    pub paddle_x_offset: f32,
    /// Max paddle speed when a target position is requested
    pub paddle_speed: f32,
    /// Push the ball out of a paddle after a hit
    pub paddle_nudge: bool,

    // === Ball ===
    pub ball_radius: f32,
    pub spawn: SpawnSettings,

    // === Timing ===
    pub timestep: Timestep,
    /// Frame dt above this is clamped (None keeps raw wall-clock dt)
    pub max_frame_dt: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_x_offset: PADDLE_X_OFFSET,
            paddle_speed: PADDLE_SPEED,
            paddle_nudge: true,

            ball_radius: BALL_RADIUS,
            spawn: SpawnSettings::default(),

            timestep: Timestep::Variable,
            max_frame_dt: Some(MAX_FRAME_DT),
        }
    }
}

impl Settings {
    /// Parse settings from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json).context("invalid settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize settings")
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("failed to load settings from {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Reject tunings the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            bail!("arena must have a positive size, got {}x{}", self.width, self.height);
        }
        if !(self.ball_radius > 0.0) {
            bail!("ball radius must be positive, got {}", self.ball_radius);
        }
        if !(self.paddle_width > 0.0 && self.paddle_height > 0.0) {
            bail!(
                "paddle must have a positive size, got {}x{}",
                self.paddle_width,
                self.paddle_height
            );
        }
        if self.paddle_x_offset < 0.0 || self.paddle_speed < 0.0 {
            bail!("paddle offset and speed must not be negative");
        }
        if 2.0 * (self.paddle_x_offset + self.paddle_width) >= self.width {
            bail!("paddles overlap in a {} wide arena", self.width);
        }
        let diameter = 2.0 * self.ball_radius;
        if diameter >= self.height {
            bail!(
                "ball of radius {} does not fit a {} high arena",
                self.ball_radius,
                self.height
            );
        }
        let gap = self.width - 2.0 * (self.paddle_x_offset + self.paddle_width);
        if diameter >= gap {
            bail!(
                "ball of radius {} does not fit the {} wide gap between paddles",
                self.ball_radius,
                gap
            );
        }

        let spawn = &self.spawn;
        // A zero horizontal speed would leave the ball bouncing in place forever
        if !(spawn.speed_x_min > 0.0 && spawn.speed_x_min <= spawn.speed_x_max) {
            bail!(
                "horizontal spawn range [{}, {}] is empty or not positive",
                spawn.speed_x_min,
                spawn.speed_x_max
            );
        }
        if !(spawn.speed_y >= 0.0) {
            bail!("vertical spawn speed must not be negative, got {}", spawn.speed_y);
        }

        if let Some(max_dt) = self.max_frame_dt {
            if !(max_dt > 0.0) {
                bail!("max_frame_dt must be positive, got {}", max_dt);
            }
        }
        if let Timestep::Fixed { hz } = self.timestep {
            if !(hz > 0.0 && hz.is_finite()) {
                bail!("fixed timestep rate must be positive, got {}", hz);
            }
        }
        Ok(())
    }
}
