//! Instance data for a GPU backend
//!
//! [`InstanceBatch`] records a frame's draw calls as plain-old-data
//! instances that can be uploaded to a vertex buffer as-is.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::{Color, Renderer};

/// Primitive an instance describes (stored in `ShapeInstance::params[0]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ShapeKind {
    Rect = 0,
    Circle = 1,
    Midline = 2,
}

impl ShapeKind {
    pub fn from_param(value: f32) -> Option<Self> {
        match value as u32 {
            0 => Some(ShapeKind::Rect),
            1 => Some(ShapeKind::Circle),
            2 => Some(ShapeKind::Midline),
            _ => None,
        }
    }
}

/// One shape, laid out for a per-instance vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeInstance {
    /// Center in arena pixels
    pub center: [f32; 2],
    /// Full width/height (circles: diameter in both)
    pub size: [f32; 2],
    pub color: [f32; 4],
    /// [kind, texture repeat_y, 0, 0]
    pub params: [f32; 4],
}

impl ShapeInstance {
    pub fn new(kind: ShapeKind, center: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            center: center.to_array(),
            size: size.to_array(),
            color,
            params: [kind as u32 as f32, 0.0, 0.0, 0.0],
        }
    }

    pub fn kind(&self) -> Option<ShapeKind> {
        ShapeKind::from_param(self.params[0])
    }
}

/// Colors for game elements
pub mod colors {
    pub const RIGHT_PADDLE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const LEFT_PADDLE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Mid line color comes from its texture
    pub const MIDLINE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// Collects draw calls into instance lists
#[derive(Debug, Default)]
pub struct InstanceBatch {
    pending: Vec<ShapeInstance>,
    presented: Vec<ShapeInstance>,
    frames_presented: u64,
}

impl InstanceBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instances of the last presented frame
    pub fn last_frame(&self) -> &[ShapeInstance] {
        &self.presented
    }

    /// Last presented frame as raw bytes for a buffer upload
    pub fn last_frame_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.presented)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Renderer for InstanceBatch {
    fn draw_rect(&mut self, center: Vec2, size: Vec2, color: Color) {
        self.pending
            .push(ShapeInstance::new(ShapeKind::Rect, center, size, color));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.pending.push(ShapeInstance::new(
            ShapeKind::Circle,
            center,
            Vec2::splat(radius * 2.0),
            color,
        ));
    }

    fn draw_midline(&mut self, center: Vec2, size: Vec2, repeat_y: f32) {
        let mut instance = ShapeInstance::new(ShapeKind::Midline, center, size, colors::MIDLINE);
        instance.params[1] = repeat_y;
        self.pending.push(instance);
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.pending, &mut self.presented);
        self.pending.clear();
        self.frames_presented += 1;
        log::trace!(
            "Frame {} presented ({} instances)",
            self.frames_presented,
            self.presented.len()
        );
    }
}
