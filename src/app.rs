//! Frame loop
//!
//! One frame: poll input, measure dt, step the simulation, draw, present.
//! Everything runs on the calling thread.

use crate::platform::{Clock, FrameTimer, InputSource};
use crate::renderer::{Renderer, draw_frame};
use crate::settings::Settings;
use crate::sim::{FrameStepper, GameEvent, GameState};

/// The running game and its collaborators
pub struct App<C: Clock, I: InputSource, R: Renderer> {
    state: GameState,
    stepper: FrameStepper,
    timer: FrameTimer<C>,
    input: I,
    renderer: R,
    frames: u64,
}

impl<C: Clock, I: InputSource, R: Renderer> App<C, I, R> {
    pub fn new(settings: &Settings, seed: u64, clock: C, input: I, renderer: R) -> Self {
        log::info!(
            "Starting game: {}x{} arena, seed {}, {:?} timestep",
            settings.width,
            settings.height,
            seed,
            settings.timestep
        );
        Self {
            state: GameState::new(settings, seed),
            stepper: FrameStepper::new(settings),
            timer: FrameTimer::new(clock),
            input,
            renderer,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn clock_mut(&mut self) -> &mut C {
        self.timer.clock_mut()
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame; returns false once the window asked to close
    pub fn frame(&mut self) -> bool {
        let input = self.input.poll();
        if input.close_requested {
            log::info!("Close requested after {} frames", self.frames);
            return false;
        }

        let dt = self.timer.tick();
        let ticks = self.stepper.advance(&mut self.state, &input.tick, dt);
        if ticks > 0 {
            self.report_events();
        }

        draw_frame(&self.state, &mut self.renderer);
        self.renderer.present();
        self.frames += 1;
        true
    }

    /// Run frames until close is requested; returns the frame count
    pub fn run(&mut self) -> u64 {
        while self.frame() {}
        self.frames
    }

    fn report_events(&self) {
        for event in &self.state.events {
            if let GameEvent::Scored(side) = event {
                log::debug!("Frame {}: point to {:?}", self.frames, side);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{HeadlessInput, ManualClock};
    use crate::renderer::InstanceBatch;

    #[test]
    fn test_runs_until_close() {
        let mut app = App::new(
            &Settings::default(),
            5,
            ManualClock::default(),
            HeadlessInput::new(3),
            InstanceBatch::new(),
        );
        assert_eq!(app.run(), 3);
        assert_eq!(app.renderer().frames_presented(), 3);
        // Manual clock never moved: first and later frames all have dt = 0
        assert_eq!(app.state().ball.pos, app.state().arena.center());
        assert_eq!(app.state().time_ticks, 3);
    }

    #[test]
    fn test_ball_moves_with_clock() {
        let mut app = App::new(
            &Settings::default(),
            5,
            ManualClock::default(),
            HeadlessInput::new(10),
            InstanceBatch::new(),
        );
        let start = app.state().ball.pos;
        let vel = app.state().ball.vel;

        assert!(app.frame());
        app.clock_mut().advance(0.05);
        assert!(app.frame());

        let moved = app.state().ball.pos - start;
        assert!((moved - vel * 0.05).length() < 1e-3);
        assert_eq!(app.renderer().last_frame()[2].center, app.state().ball.pos.to_array());
    }
}
