//! Shape module - a single circle in the scene.

use crate::rng::Sampler;
use crate::types::{
    ColorRgb, Point, ShapeId, MAX_SHAPE_SIZE, MIN_SHAPE_SIZE, MOTION_BOUNDS, SPAWN_BOUNDS,
};

/// A filled circle.
///
/// `size` and `color` are fixed at creation; only `position` moves, and only
/// through [`Shape::nudge`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    id: ShapeId,
    position: Point,
    size: f64,
    color: ColorRgb,
}

impl Shape {
    /// Build a shape verbatim. The position is not clamped.
    pub fn new(id: ShapeId, position: Point, size: f64, color: ColorRgb) -> Self {
        Self {
            id,
            position,
            size,
            color,
        }
    }

    /// Sample a shape inside the spawn bounds.
    ///
    /// Draw order is x, y, size, then the r/g/b channels.
    pub fn random<S: Sampler>(id: ShapeId, sampler: &mut S) -> Self {
        let x = sampler.uniform(SPAWN_BOUNDS.min_x, SPAWN_BOUNDS.max_x);
        let y = sampler.uniform(SPAWN_BOUNDS.min_y, SPAWN_BOUNDS.max_y);
        let size = sampler.uniform(MIN_SHAPE_SIZE, MAX_SHAPE_SIZE);
        let r = sampler.uniform(0.0, 1.0) as f32;
        let g = sampler.uniform(0.0, 1.0) as f32;
        let b = sampler.uniform(0.0, 1.0) as f32;

        Self::new(id, Point::new(x, y), size, ColorRgb::new(r, g, b))
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Diameter in scene points.
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn color(&self) -> ColorRgb {
        self.color
    }

    /// Displace by `(dx, dy)`, then clamp into the motion bounds.
    pub fn nudge(&mut self, dx: f64, dy: f64) {
        let moved = Point::new(self.position.x + dx, self.position.y + dy);
        self.position = MOTION_BOUNDS.clamp(moved);
    }
}
