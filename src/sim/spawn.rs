//! Ball spawn velocity
//!
//! Used at startup and after every point. Each call draws a fresh vector from
//! the RNG; nothing about earlier spawns is remembered.

use glam::Vec2;
use rand::Rng;

use crate::settings::SpawnSettings;

/// Draw a spawn velocity: random horizontal direction, horizontal speed in
/// `[speed_x_min, speed_x_max]`, vertical speed in `[-speed_y, speed_y]`.
pub fn spawn_velocity<R: Rng + ?Sized>(rng: &mut R, spawn: &SpawnSettings) -> Vec2 {
    let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let speed_x = rng.random_range(spawn.speed_x_min..=spawn.speed_x_max);
    let vy = rng.random_range(-spawn.speed_y..=spawn.speed_y);
    Vec2::new(direction * speed_x, vy)
}
