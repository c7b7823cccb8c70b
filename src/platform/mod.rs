//! Platform abstraction layer
//!
//! The simulation never reads the clock, the keyboard or the OS RNG itself.
//! These collaborators feed it instead:
//! - Time (frame dt from a monotonic clock)
//! - Input (window close, optional paddle targets)
//! - Run seed

pub mod input;
pub mod time;

pub use input::{FrameInput, HeadlessInput, InputSource};
pub use time::{Clock, FrameTimer, ManualClock, SystemClock};

use std::time::{SystemTime, UNIX_EPOCH};

/// Seed for a non-deterministic run, taken from the wall clock
pub fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
