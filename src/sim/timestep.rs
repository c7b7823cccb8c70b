//! Frame time to simulation steps
//!
//! Frame dt comes from the wall clock and can be anything: zero, negative
//! after a clock hiccup, or huge after a stall. This module cleans it up and
//! either ticks once per frame or feeds a fixed-rate accumulator.

use super::state::GameState;
use super::tick::{TickInput, tick};
use crate::consts::MAX_SUBSTEPS;
use crate::settings::{Settings, Timestep};

/// Replace negative or non-finite dt with zero
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring invalid frame dt {}", dt);
        0.0
    }
}

/// Sanitize dt and cap it at `max_dt` if one is set
pub fn clamp_frame_dt(dt: f32, max_dt: Option<f32>) -> f32 {
    let dt = sanitize_dt(dt);
    match max_dt {
        Some(max) if dt > max => {
            log::debug!("Frame dt {:.3}s clamped to {:.3}s", dt, max);
            max
        }
        _ => dt,
    }
}

/// Turns frame times into ticks according to the configured [`Timestep`]
#[derive(Debug, Clone)]
pub struct FrameStepper {
    timestep: Timestep,
    max_frame_dt: Option<f32>,
    accumulator: f32,
}

impl FrameStepper {
    pub fn new(settings: &Settings) -> Self {
        Self {
            timestep: settings.timestep,
            max_frame_dt: settings.max_frame_dt,
            accumulator: 0.0,
        }
    }

    /// Time carried over to the next frame (fixed stepping only)
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Advance the simulation by one frame; returns the number of ticks run
    ///
    /// Afterwards `state.events` holds the events of every tick run this
    /// frame, in order.
    pub fn advance(&mut self, state: &mut GameState, input: &TickInput, frame_dt: f32) -> u32 {
        let dt = clamp_frame_dt(frame_dt, self.max_frame_dt);

        let Some(step) = self.timestep.fixed_dt() else {
            tick(state, input, dt);
            return 1;
        };

        self.accumulator += dt;
        let mut substeps = 0;
        let mut frame_events = Vec::new();
        while self.accumulator >= step && substeps < MAX_SUBSTEPS {
            tick(state, input, step);
            frame_events.append(&mut state.events);
            self.accumulator -= step;
            substeps += 1;
        }
        state.events = frame_events;
        if substeps == MAX_SUBSTEPS && self.accumulator >= step {
            // Drop the backlog the cap could not absorb
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator %= step;
        }
        substeps
    }
}
