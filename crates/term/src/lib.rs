//! Terminal "scene renderer" module.
//!
//! A small rendering layer for the shapes demo. It avoids widget toolkits and
//! renders into a framebuffer that is flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable; the view only reads snapshots
//! - Round circles via half-block pixels (two square-ish pixels per cell)
//! - Cheap frames at a 10ms tick through diffed flushes

pub mod fb;
pub mod redraw;
pub mod renderer;
pub mod shapes_view;

pub use tui_shapes_core as core;
pub use tui_shapes_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use redraw::RedrawGate;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use shapes_view::{ShapesView, Viewport};
