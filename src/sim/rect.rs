//! Axis-aligned rectangle geometry for paddles
//!
//! A paddle is described by its center and half extents, matching the
//! center convention the renderer uses when it translates the paddle quad.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in arena pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleRect {
    /// Center point
    pub center: Vec2,
    /// Half width (x) and half height (y), both positive
    pub half_extents: Vec2,
}

impl PaddleRect {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
        }
    }

    /// Bottom-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    /// Top-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    /// Full width and height
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    /// Closest point of the rectangle to `point` (the point itself when inside)
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min(), self.max())
    }
}
