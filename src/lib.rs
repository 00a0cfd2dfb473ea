//! TUI Shapes (workspace facade crate).
//!
//! Exposes `tui_shapes::{core,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use tui_shapes_core as core;
pub use tui_shapes_input as input;
pub use tui_shapes_term as term;
pub use tui_shapes_types as types;
