//! Rendering boundary
//!
//! The game only describes what to draw each frame; a GPU backend implements
//! [`Renderer`] and owns shaders, buffers and textures.

pub mod instance;

pub use instance::{InstanceBatch, ShapeInstance, ShapeKind, colors};

use glam::Vec2;

use crate::consts::{MIDLINE_TILE, MIDLINE_WIDTH};
use crate::sim::{GameState, Side};

/// RGBA color
pub type Color = [f32; 4];

/// Draw calls the game issues each frame
pub trait Renderer {
    /// Solid rectangle centered at `center`
    fn draw_rect(&mut self, center: Vec2, size: Vec2, color: Color);
    /// Solid circle
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Textured center line, tiled `repeat_y` times vertically
    fn draw_midline(&mut self, center: Vec2, size: Vec2, repeat_y: f32);
    /// Finish the frame (buffer swap)
    fn present(&mut self);
}

/// Issue the draw calls for one frame
///
/// Order: right paddle, left paddle, ball, then the mid line on top.
pub fn draw_frame<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    let arena = &state.arena;
    for (side, color) in [(Side::Right, colors::RIGHT_PADDLE), (Side::Left, colors::LEFT_PADDLE)] {
        let rect = state.paddle(side).rect(arena);
        renderer.draw_rect(rect.center, rect.size(), color);
    }

    renderer.draw_circle(state.ball.pos, state.ball.radius(), colors::BALL);

    renderer.draw_midline(
        arena.center(),
        Vec2::new(MIDLINE_WIDTH, arena.height),
        arena.height / MIDLINE_TILE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[derive(Default)]
    struct CallLog(Vec<String>);

    impl Renderer for CallLog {
        fn draw_rect(&mut self, center: Vec2, size: Vec2, color: Color) {
            self.0.push(format!("rect {} {} {} {:?}", center.x, center.y, size.y, color));
        }
        fn draw_circle(&mut self, center: Vec2, radius: f32, _color: Color) {
            self.0.push(format!("circle {} {} {}", center.x, center.y, radius));
        }
        fn draw_midline(&mut self, _center: Vec2, size: Vec2, repeat_y: f32) {
            self.0.push(format!("midline {} {}", size.x, repeat_y));
        }
        fn present(&mut self) {
            self.0.push("present".to_string());
        }
    }

    #[test]
    fn test_draw_order() {
        let state = GameState::new(&Settings::default(), 1);
        let mut log = CallLog::default();
        draw_frame(&state, &mut log);

        assert_eq!(
            log.0,
            vec![
                "rect 760 300 120 [1.0, 0.0, 0.0, 1.0]".to_string(),
                "rect 40 300 120 [0.0, 0.0, 1.0, 1.0]".to_string(),
                "circle 400 300 25".to_string(),
                "midline 10 18.75".to_string(),
            ]
        );
    }
}
