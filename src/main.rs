//! Ping Pong entry point
//!
//! Runs the game headless: the frame loop, physics and draw-call recording
//! all run, with a fixed frame budget standing in for the window.
//!
//! Environment:
//! - `PING_PONG_SETTINGS`: path to a settings JSON file
//! - `PING_PONG_SEED`: fixed seed for a reproducible run
//! - `PING_PONG_FRAMES`: number of frames before exiting (default 600)
//! - `RUST_LOG`: log level

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use ping_pong::app::App;
use ping_pong::platform::{HeadlessInput, SystemClock, seed_from_time};
use ping_pong::renderer::InstanceBatch;
use ping_pong::settings::Settings;

/// Stand-in for vsync (~60 Hz)
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);
const DEFAULT_FRAMES: u64 = 600;

fn env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .with_context(|| format!("invalid {}: {:?}", name, value)),
        Err(_) => Ok(None),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Ping Pong (headless) starting...");

    let settings = match std::env::var("PING_PONG_SETTINGS") {
        Ok(path) => Settings::load(&path)?,
        Err(_) => Settings::default(),
    };
    let seed = env_parse::<u64>("PING_PONG_SEED")?.unwrap_or_else(seed_from_time);
    let frames = env_parse::<u64>("PING_PONG_FRAMES")?.unwrap_or(DEFAULT_FRAMES);

    let mut app = App::new(
        &settings,
        seed,
        SystemClock::new(),
        HeadlessInput::new(frames),
        InstanceBatch::new(),
    );

    while app.frame() {
        thread::sleep(FRAME_INTERVAL);
    }

    let score = app.state().score;
    log::info!("Finished after {} frames, score {}", app.frames(), score);
    match score.leader() {
        Some(side) => log::info!("{:?} player leads with {} points", side, score.get(side)),
        None => log::info!("Game tied"),
    }
    println!("Final score (left - right): {}", score);
    Ok(())
}
