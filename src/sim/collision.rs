//! Collision detection and response
//!
//! Top and bottom walls reflect the ball; the left and right edges are goals
//! and are handled by scoring. Paddles are axis-aligned rectangles tested
//! against the ball circle with a closest-point check.

use glam::Vec2;

use super::rect::PaddleRect;
use super::state::{Ball, Side};

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Closest point on the paddle to the ball center
    pub point: Vec2,
    /// Surface normal at the contact, pointing toward the ball center
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Reflect the ball off the top and bottom walls
///
/// If the ball touches or crosses a wall, its vertical velocity is inverted
/// and its center is put back at `radius` from that wall. Returns whether a
/// bounce happened. When the ball is taller than the arena the bottom wall
/// wins; nothing panics.
pub fn wall_collision(ball: &mut Ball, arena_height: f32) -> bool {
    let r = ball.radius();
    if ball.pos.y - r <= 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = r;
        true
    } else if ball.pos.y + r >= arena_height {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = arena_height - r;
        true
    } else {
        false
    }
}

/// Check overlap between a ball and a paddle rectangle
///
/// Overlap means the squared distance from the ball center to the closest
/// point of the rectangle is below `radius²`. If the center is inside the
/// rectangle the normal is the paddle's front face for `side`.
pub fn ball_paddle_overlap(
    ball_pos: Vec2,
    ball_radius: f32,
    paddle: &PaddleRect,
    side: Side,
) -> CollisionResult {
    let closest = paddle.closest_point(ball_pos);
    let offset = ball_pos - closest;
    let dist_sq = offset.length_squared();

    if dist_sq >= ball_radius * ball_radius {
        return CollisionResult::miss();
    }

    if dist_sq > 0.0 {
        let dist = dist_sq.sqrt();
        return CollisionResult {
            hit: true,
            point: closest,
            normal: offset / dist,
            penetration: ball_radius - dist,
        };
    }

    // Center inside the paddle: push out through the front face
    let (face_x, depth) = match side {
        Side::Left => (paddle.max().x, paddle.max().x - ball_pos.x),
        Side::Right => (paddle.min().x, ball_pos.x - paddle.min().x),
    };
    CollisionResult {
        hit: true,
        point: Vec2::new(face_x, ball_pos.y),
        normal: side.face_normal(),
        penetration: depth + ball_radius,
    }
}

/// Bounce the ball off a paddle
///
/// The bounce only happens while the ball is heading toward the paddle's
/// side, so a ball still overlapping after a bounce is not flipped again.
/// With `nudge` the ball is also moved out of the paddle along the contact
/// normal. Returns a miss when nothing was resolved.
pub fn paddle_collision(
    ball: &mut Ball,
    paddle: &PaddleRect,
    side: Side,
    nudge: bool,
) -> CollisionResult {
    let result = ball_paddle_overlap(ball.pos, ball.radius(), paddle, side);
    if !result.hit {
        return result;
    }

    if !side.is_approached_by(ball.vel.x) {
        log::trace!("{:?} paddle overlap ignored, ball moving away", side);
        return CollisionResult::miss();
    }

    ball.vel.x = -ball.vel.x;
    if nudge {
        ball.pos += result.normal * result.penetration;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{HEIGHT, PADDLE_HALF_HEIGHT, PADDLE_HALF_WIDTH};
    use proptest::prelude::*;

    fn left_paddle() -> PaddleRect {
        PaddleRect::new(
            Vec2::new(40.0, 300.0),
            Vec2::new(PADDLE_HALF_WIDTH, PADDLE_HALF_HEIGHT),
        )
    }

    fn right_paddle() -> PaddleRect {
        PaddleRect::new(
            Vec2::new(760.0, 300.0),
            Vec2::new(PADDLE_HALF_WIDTH, PADDLE_HALF_HEIGHT),
        )
    }

    #[test]
    fn test_bottom_wall_bounce_with_zero_dt() {
        // Ball overlapping y = 0, moving down
        let mut ball = Ball::new(Vec2::new(400.0, 24.0), Vec2::new(0.0, -50.0), 25.0);
        ball.integrate(0.0);
        assert!(wall_collision(&mut ball, HEIGHT));
        assert_eq!(ball.vel.y, 50.0);
        assert_eq!(ball.pos.y, 25.0);
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut ball = Ball::new(Vec2::new(400.0, 590.0), Vec2::new(100.0, 80.0), 25.0);
        assert!(wall_collision(&mut ball, HEIGHT));
        assert_eq!(ball.vel.y, -80.0);
        assert_eq!(ball.pos.y, 575.0);
        assert_eq!(ball.vel.x, 100.0);
    }

    #[test]
    fn test_no_wall_bounce_in_open_space() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(500.0, 20.0), 25.0);
        assert!(!wall_collision(&mut ball, HEIGHT));
        assert_eq!(ball.vel, Vec2::new(500.0, 20.0));
    }

    #[test]
    fn test_oversized_ball_does_not_panic() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(0.0, 10.0), 400.0);
        assert!(wall_collision(&mut ball, HEIGHT));
        assert!(ball.pos.y.is_finite());
    }

    #[test]
    fn test_left_paddle_reflects_approaching_ball() {
        // Front face at x = 50, ball center 20px in front of it
        let mut ball = Ball::new(Vec2::new(70.0, 300.0), Vec2::new(-400.0, 30.0), 25.0);
        let result = paddle_collision(&mut ball, &left_paddle(), Side::Left, false);
        assert!(result.hit);
        assert_eq!(ball.vel.x, 400.0);
        assert_eq!(ball.vel.y, 30.0);
        assert_eq!(result.normal, Vec2::X);
        assert!((result.penetration - 5.0).abs() < 1e-4);
        // No nudge requested
        assert_eq!(ball.pos, Vec2::new(70.0, 300.0));
    }

    #[test]
    fn test_nudge_moves_ball_clear_of_paddle() {
        let mut ball = Ball::new(Vec2::new(70.0, 300.0), Vec2::new(-400.0, 0.0), 25.0);
        paddle_collision(&mut ball, &left_paddle(), Side::Left, true);
        assert!((ball.pos.x - 75.0).abs() < 1e-4);
        let after = ball_paddle_overlap(ball.pos, ball.radius(), &left_paddle(), Side::Left);
        assert!(!after.hit);
    }

    #[test]
    fn test_receding_ball_is_not_flipped_again() {
        let mut ball = Ball::new(Vec2::new(70.0, 300.0), Vec2::new(-400.0, 0.0), 25.0);
        assert!(paddle_collision(&mut ball, &left_paddle(), Side::Left, false).hit);
        assert_eq!(ball.vel.x, 400.0);

        // Same frame, still overlapping
        assert!(!paddle_collision(&mut ball, &left_paddle(), Side::Left, false).hit);
        assert_eq!(ball.vel.x, 400.0);

        // Following frame, still overlapping
        ball.integrate(0.001);
        assert!(!paddle_collision(&mut ball, &left_paddle(), Side::Left, false).hit);
        assert_eq!(ball.vel.x, 400.0);
    }

    #[test]
    fn test_right_paddle_reflects_approaching_ball() {
        let mut ball = Ball::new(Vec2::new(730.0, 250.0), Vec2::new(350.0, -10.0), 25.0);
        assert!(paddle_collision(&mut ball, &right_paddle(), Side::Right, true).hit);
        assert_eq!(ball.vel.x, -350.0);
        assert!(ball.pos.x <= 725.0 + 1e-4);
    }

    #[test]
    fn test_corner_miss_and_hit() {
        // Near the top-right corner (50, 360) of the left paddle
        let paddle = left_paddle();
        let miss = ball_paddle_overlap(Vec2::new(70.0, 380.0), 25.0, &paddle, Side::Left);
        assert!(!miss.hit, "distance ~28.3 > 25");

        let hit = ball_paddle_overlap(Vec2::new(65.0, 375.0), 25.0, &paddle, Side::Left);
        assert!(hit.hit, "distance ~21.2 < 25");
        assert!(hit.normal.x > 0.0 && hit.normal.y > 0.0);
    }

    #[test]
    fn test_touching_is_not_overlap() {
        let result = ball_paddle_overlap(Vec2::new(75.0, 300.0), 25.0, &left_paddle(), Side::Left);
        assert!(!result.hit);
    }

    #[test]
    fn test_center_inside_paddle_pushes_through_front_face() {
        let mut ball = Ball::new(Vec2::new(755.0, 300.0), Vec2::new(200.0, 0.0), 25.0);
        let result = paddle_collision(&mut ball, &right_paddle(), Side::Right, true);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::NEG_X);
        assert_eq!(ball.pos.x, 725.0);
        assert_eq!(ball.vel.x, -200.0);
    }

    proptest! {
        #[test]
        fn prop_wall_contact_flips_vy_and_restores_bounds(
            x in 0.0f32..800.0,
            y in -50.0f32..650.0,
            vx in -600.0f32..600.0,
            vy in -300.0f32..300.0,
        ) {
            let r = 25.0;
            let mut ball = Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), r);
            let touching = y - r <= 0.0 || y + r >= HEIGHT;
            let bounced = wall_collision(&mut ball, HEIGHT);

            prop_assert_eq!(bounced, touching);
            if touching {
                prop_assert_eq!(ball.vel.y, -vy);
            } else {
                prop_assert_eq!(ball.vel.y, vy);
            }
            prop_assert!(ball.pos.y >= r && ball.pos.y <= HEIGHT - r);
            prop_assert_eq!(ball.vel.x, vx);
        }

        #[test]
        fn prop_paddle_never_flips_receding_ball(
            x in 20.0f32..80.0,
            y in 220.0f32..380.0,
            vx in 1.0f32..600.0,
            vy in -300.0f32..300.0,
        ) {
            // Moving right, away from the left paddle
            let mut ball = Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), 25.0);
            let result = paddle_collision(&mut ball, &left_paddle(), Side::Left, true);
            prop_assert!(!result.hit);
            prop_assert_eq!(ball.vel.x, vx);
            prop_assert_eq!(ball.pos, Vec2::new(x, y));
        }

        #[test]
        fn prop_paddle_hit_preserves_speed(
            x in 52.0f32..74.0,
            y in 250.0f32..350.0,
            vx in -600.0f32..-1.0,
            vy in -300.0f32..300.0,
        ) {
            let mut ball = Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), 25.0);
            let before = ball.speed_squared();
            prop_assert!(paddle_collision(&mut ball, &left_paddle(), Side::Left, true).hit);
            prop_assert_eq!(ball.vel.x, -vx);
            prop_assert_eq!(ball.speed_squared(), before);
        }
    }
}
