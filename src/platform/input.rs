//! Input sources for the frame loop

use crate::sim::TickInput;

/// Input gathered once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Window close / quit request
    pub close_requested: bool,
    /// Commands forwarded to the simulation
    pub tick: TickInput,
}

/// Something that can be polled for input each frame
pub trait InputSource {
    fn poll(&mut self) -> FrameInput;
}

/// Input for running without a window: requests close after a frame budget
#[derive(Debug, Clone)]
pub struct HeadlessInput {
    frames_left: u64,
}

impl HeadlessInput {
    pub fn new(frames: u64) -> Self {
        Self {
            frames_left: frames,
        }
    }
}

impl InputSource for HeadlessInput {
    fn poll(&mut self) -> FrameInput {
        let close_requested = self.frames_left == 0;
        self.frames_left = self.frames_left.saturating_sub(1);
        FrameInput {
            close_requested,
            tick: TickInput::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_closes_after_budget() {
        let mut input = HeadlessInput::new(2);
        assert!(!input.poll().close_requested);
        assert!(!input.poll().close_requested);
        assert!(input.poll().close_requested);
        assert!(input.poll().close_requested);
    }

    #[test]
    fn test_headless_never_moves_paddles() {
        let mut input = HeadlessInput::new(1);
        assert_eq!(input.poll().tick, TickInput::default());
    }
}
