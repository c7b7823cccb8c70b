//! Replay recording for determinism checks
//!
//! A replay stores the seed, settings and frame times of a run together with
//! the ball position after every frame. Running the same inputs again must
//! reproduce every position bit for bit.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use super::state::GameState;
use super::tick::TickInput;
use super::timestep::FrameStepper;
use crate::scoreboard::Score;
use crate::settings::Settings;

/// A recorded run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub seed: u64,
    pub settings: Settings,
    /// Frame times fed to the stepper
    pub frame_dts: Vec<f32>,
    /// Ball center after each frame
    pub positions: Vec<[f32; 2]>,
    /// Score at the end of the run
    pub final_score: Score,
}

impl Replay {
    /// Run a fresh game over `frame_dts` and record it
    pub fn record(settings: &Settings, seed: u64, frame_dts: &[f32]) -> Self {
        let (positions, final_score) = simulate(settings, seed, frame_dts);
        log::info!(
            "Recorded replay: seed {}, {} frames, final score {}",
            seed,
            frame_dts.len(),
            final_score
        );
        Self {
            seed,
            settings: settings.clone(),
            frame_dts: frame_dts.to_vec(),
            positions,
            final_score,
        }
    }

    /// First frame whose re-simulated position differs from the recording
    pub fn first_divergence(&self) -> Option<usize> {
        let (positions, _) = simulate(&self.settings, self.seed, &self.frame_dts);
        if positions.len() != self.positions.len() {
            return Some(positions.len().min(self.positions.len()));
        }
        positions
            .iter()
            .zip(&self.positions)
            .position(|(a, b)| a[0].to_bits() != b[0].to_bits() || a[1].to_bits() != b[1].to_bits())
    }

    /// Re-run the recording and fail on the first mismatch
    pub fn verify(&self) -> Result<()> {
        if let Some(frame) = self.first_divergence() {
            bail!(
                "replay diverged at frame {} of {} (seed {})",
                frame,
                self.positions.len(),
                self.seed
            );
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a replay, rejecting settings the simulation cannot run with
    pub fn from_json(json: &str) -> Result<Self> {
        let replay: Replay = serde_json::from_str(json).context("invalid replay JSON")?;
        replay
            .settings
            .validate()
            .context("replay carries invalid settings")?;
        Ok(replay)
    }
}

fn simulate(settings: &Settings, seed: u64, frame_dts: &[f32]) -> (Vec<[f32; 2]>, Score) {
    let mut state = GameState::new(settings, seed);
    let mut stepper = FrameStepper::new(settings);
    let input = TickInput::default();

    let positions = frame_dts
        .iter()
        .map(|&dt| {
            stepper.advance(&mut state, &input, dt);
            state.ball.pos.to_array()
        })
        .collect();
    (positions, state.score)
}
