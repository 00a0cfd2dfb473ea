//! ShapesView: maps a `core::SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{SessionSnapshot, ShapeSnapshot};
use crate::fb::{decimal_len, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::SPAWN_BOUNDS;

const SCORE_LABEL: &str = "Score: ";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Draws the circles and the score over a white half-block canvas.
pub struct ShapesView {
    /// Scene extent (in points) that must fit inside the viewport.
    scene_width: f64,
    scene_height: f64,
    background: Rgb,
    score_style: CellStyle,
}

impl Default for ShapesView {
    fn default() -> Self {
        Self::new(SPAWN_BOUNDS.max_x, SPAWN_BOUNDS.max_y)
    }
}

impl ShapesView {
    pub fn new(scene_width: f64, scene_height: f64) -> Self {
        Self {
            scene_width,
            scene_height,
            background: Rgb::WHITE,
            score_style: CellStyle {
                fg: Rgb::BLACK,
                bg: Rgb::WHITE,
                bold: true,
            },
        }
    }

    /// Scene points covered by one half-block pixel, or `None` when nothing can be drawn.
    ///
    /// One factor is used for both axes so circles stay round; the scene is
    /// fitted to whichever axis is tighter.
    pub fn points_per_pixel(&self, viewport: Viewport) -> Option<f64> {
        if viewport.width == 0 || viewport.height == 0 {
            return None;
        }
        let px_w = viewport.width as f64;
        let px_h = viewport.height as f64 * 2.0;
        let scale = (self.scene_width / px_w).max(self.scene_height / px_h);
        (scale.is_finite() && scale > 0.0).then_some(scale)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path once `fb` has the viewport's size.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::pixels(self.background));

        let Some(scale) = self.points_per_pixel(viewport) else {
            return;
        };

        // Sequence order: later shapes end up on top.
        for shape in snap.shapes.iter() {
            self.draw_circle(fb, shape, scale);
        }

        self.draw_score(fb, snap.score);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_circle(&self, fb: &mut FrameBuffer, shape: &ShapeSnapshot, scale: f64) {
        let cx = shape.position.x / scale;
        let cy = shape.position.y / scale;
        let r = shape.size / 2.0 / scale;
        if r.is_nan() || r <= 0.0 {
            return;
        }

        let x0 = (cx - r).floor().max(0.0);
        let x1 = (cx + r).ceil().min(fb.width() as f64);
        let y0 = (cy - r).floor().max(0.0);
        let y1 = (cy + r).ceil().min(fb.pixel_height() as f64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let color = Rgb::from(shape.color);
        let r2 = r * r;

        // A pixel is covered when its center lies inside the circle.
        for py in y0 as u32..y1 as u32 {
            let dy = py as f64 + 0.5 - cy;
            for x in x0 as u16..x1 as u16 {
                let dx = x as f64 + 0.5 - cx;
                if dx * dx + dy * dy <= r2 {
                    fb.paint_pixel(x, py, color);
                }
            }
        }
    }

    fn draw_score(&self, fb: &mut FrameBuffer, score: u64) {
        let h = fb.height();
        if h == 0 {
            return;
        }
        // One row of padding below the text when there is room for it.
        let y = if h >= 3 { h - 2 } else { h - 1 };

        let label_w = SCORE_LABEL.chars().count() as u16;
        let text_w = label_w + decimal_len(score);
        let x = fb.width().saturating_sub(text_w) / 2;

        fb.put_str(x, y, SCORE_LABEL, self.score_style);
        fb.put_u64(x.saturating_add(label_w), y, score, self.score_style);
    }
}
