use crate::shape::Shape;
use crate::types::{ColorRgb, Point, ShapeId, SHAPE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeSnapshot {
    pub id: ShapeId,
    pub position: Point,
    pub size: f64,
    pub color: ColorRgb,
}

impl From<Shape> for ShapeSnapshot {
    fn from(value: Shape) -> Self {
        Self {
            id: value.id(),
            position: value.position(),
            size: value.size(),
            color: value.color(),
        }
    }
}

/// Everything the view needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSnapshot {
    pub shapes: [ShapeSnapshot; SHAPE_COUNT],
    pub score: u64,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.shapes = [ShapeSnapshot::default(); SHAPE_COUNT];
        self.score = 0;
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        let mut s = Self {
            shapes: [ShapeSnapshot::default(); SHAPE_COUNT],
            score: 0,
        };
        s.clear();
        s
    }
}
