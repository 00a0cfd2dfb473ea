//! Core simulation module - pure, deterministic, and testable
//!
//! This crate owns the session state and the only two operations that change
//! it. It has **no dependencies** on the terminal or on any I/O:
//!
//! - **Deterministic**: the same seed (or scripted [`Sampler`]) replays the same session
//! - **Testable**: `tick` can be called directly, without a timer
//! - **Bounded**: per-tick work is proportional to `SHAPE_COUNT` and allocation-free
//!
//! # Module Structure
//!
//! - [`session`]: shape sequence, score, tick, and change notifications
//! - [`shape`]: a single circle and its clamped random walk step
//! - [`rng`]: the injectable sampler and the default LCG
//! - [`snapshot`]: plain copies of session state for the view
//! - [`ticker`]: fixed-interval scheduling without catch-up
//! - [`config`]: run parameters for the binary
//!
//! # Example
//!
//! ```
//! use tui_shapes_core::Session;
//! use tui_shapes_types::{MOTION_BOUNDS, SHAPE_COUNT};
//!
//! let mut session = Session::new(12345);
//! let changes = session.subscribe();
//! assert_eq!(changes.try_recv().unwrap().score, 0);
//!
//! session.tick();
//!
//! assert_eq!(session.score(), 1);
//! assert_eq!(session.shapes().len(), SHAPE_COUNT);
//! assert!(session.shapes().iter().all(|s| MOTION_BOUNDS.contains(s.position())));
//! assert_eq!(changes.try_recv().unwrap().score, 1);
//! ```

pub mod config;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snapshot;
pub mod ticker;

pub use tui_shapes_types as types;

pub use config::DemoConfig;
pub use rng::{Sampler, SimpleRng};
pub use session::{Session, StateChanged};
pub use shape::Shape;
pub use snapshot::{SessionSnapshot, ShapeSnapshot};
pub use ticker::Ticker;
