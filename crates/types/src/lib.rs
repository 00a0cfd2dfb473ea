//! Core types module - shared data structures and constants
//!
//! Pure data shared by the simulation (`core`) and the terminal view (`term`).
//! Nothing here depends on I/O or on any other workspace crate.
//!
//! # Scene Geometry
//!
//! Coordinates are floating-point scene points with the origin at the top-left
//! and `y` growing downwards.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CANVAS_WIDTH` | 300 | Maximum `x` at spawn and while moving |
//! | `CANVAS_HEIGHT` | 500 | Maximum `y` while moving (clamp bound) |
//! | `SPAWN_HEIGHT` | 600 | Maximum `y` at spawn |
//! | `MIN_SHAPE_SIZE` | 30 | Smallest circle diameter |
//! | `MAX_SHAPE_SIZE` | 100 | Largest circle diameter |
//! | `MAX_STEP` | 20 | Per-tick delta range is `[-MAX_STEP, MAX_STEP]` |
//!
//! A shape may spawn with `y` in `(500, 600]`; it snaps to 500 on its first
//! tick because motion is clamped to [`MOTION_BOUNDS`].
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 10 | Fixed timer interval |
//! | `SHAPE_COUNT` | 20 | Shapes per session |
//!
//! # Examples
//!
//! ```
//! use tui_shapes_types::{Point, MOTION_BOUNDS, SPAWN_BOUNDS};
//!
//! let p = MOTION_BOUNDS.clamp(Point::new(-4.0, 512.5));
//! assert_eq!(p, Point::new(0.0, 500.0));
//!
//! assert!(SPAWN_BOUNDS.contains(Point::new(300.0, 600.0)));
//! assert!(!MOTION_BOUNDS.contains(Point::new(300.0, 600.0)));
//! ```

/// Number of shapes in a session.
pub const SHAPE_COUNT: usize = 20;

/// Maximum `x` coordinate, shared by spawn and motion bounds.
pub const CANVAS_WIDTH: f64 = 300.0;

/// Maximum `y` coordinate while shapes move.
pub const CANVAS_HEIGHT: f64 = 500.0;

/// Maximum `y` coordinate at spawn.
pub const SPAWN_HEIGHT: f64 = 600.0;

/// Smallest circle diameter.
pub const MIN_SHAPE_SIZE: f64 = 30.0;

/// Largest circle diameter.
pub const MAX_SHAPE_SIZE: f64 = 100.0;

/// Largest absolute per-axis displacement applied in one tick.
pub const MAX_STEP: f64 = 20.0;

/// Fixed timer interval in milliseconds.
pub const TICK_MS: u32 = 10;

/// Region where shapes may appear when a session is created.
pub const SPAWN_BOUNDS: Bounds = Bounds::new(0.0, CANVAS_WIDTH, 0.0, SPAWN_HEIGHT);

/// Region shapes are clamped to after every move.
pub const MOTION_BOUNDS: Bounds = Bounds::new(0.0, CANVAS_WIDTH, 0.0, CANVAS_HEIGHT);

/// A position in scene points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fill color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorRgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Quantize to 8 bits per channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_shapes_types::ColorRgb;
    ///
    /// assert_eq!(ColorRgb::new(0.0, 0.5, 1.0).to_rgb8(), [0, 128, 255]);
    /// assert_eq!(ColorRgb::new(-1.0, 2.0, 0.0).to_rgb8(), [0, 255, 0]);
    /// ```
    pub fn to_rgb8(self) -> [u8; 3] {
        [channel_u8(self.r), channel_u8(self.g), channel_u8(self.b)]
    }
}

fn channel_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Opaque shape identity, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ShapeId(pub u32);

/// Axis-aligned inclusive rectangle in scene points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Clamp each axis as `max(min, min(max, v))`.
    pub fn clamp(&self, p: Point) -> Point {
        Point {
            x: self.min_x.max(self.max_x.min(p.x)),
            y: self.min_y.max(self.max_y.min(p.y)),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}
