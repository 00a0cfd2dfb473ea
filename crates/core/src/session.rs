//! Session module - owns the shapes and the score
//!
//! A [`Session`] is created once, fully populated, and then advanced by
//! [`Session::tick`]. Every state change is published to the subscriber
//! channels handed out by [`Session::subscribe`]; the view redraws from a
//! snapshot when it sees one.

use std::sync::mpsc::{self, Receiver, Sender};

use arrayvec::ArrayVec;
use log::debug;

use crate::rng::{Sampler, SimpleRng};
use crate::shape::Shape;
use crate::snapshot::{SessionSnapshot, ShapeSnapshot};
use crate::types::{ShapeId, MAX_STEP, SHAPE_COUNT};

/// Notification published after the session state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChanged {
    pub score: u64,
}

/// The shape sequence, the score, and the sampler that drives both.
#[derive(Debug)]
pub struct Session<R = SimpleRng> {
    shapes: ArrayVec<Shape, SHAPE_COUNT>,
    score: u64,
    rng: R,
    subscribers: Vec<Sender<StateChanged>>,
}

impl Session<SimpleRng> {
    /// Initialize a session from an LCG seed.
    pub fn new(seed: u32) -> Self {
        Self::initialize(SimpleRng::new(seed))
    }
}

impl<R: Sampler> Session<R> {
    /// Spawn `SHAPE_COUNT` random shapes with ids in generation order; score starts at 0.
    pub fn initialize(mut rng: R) -> Self {
        let mut shapes = ArrayVec::new();
        for i in 0..SHAPE_COUNT {
            shapes.push(Shape::random(ShapeId(i as u32), &mut rng));
        }
        debug!("session initialized with {} shapes", shapes.len());

        Self {
            shapes,
            score: 0,
            rng,
            subscribers: Vec::new(),
        }
    }

    /// Build a session around explicit shapes (score starts at 0).
    pub fn from_shapes(shapes: [Shape; SHAPE_COUNT], rng: R) -> Self {
        Self {
            shapes: ArrayVec::from(shapes),
            score: 0,
            rng,
            subscribers: Vec::new(),
        }
    }

    /// Advance one step.
    ///
    /// Each shape draws `dx` then `dy` from `[-MAX_STEP, MAX_STEP]` and is
    /// clamped to the motion bounds. Then the score goes up by one and
    /// subscribers are notified.
    pub fn tick(&mut self) {
        for shape in self.shapes.iter_mut() {
            let dx = self.rng.uniform(-MAX_STEP, MAX_STEP);
            let dy = self.rng.uniform(-MAX_STEP, MAX_STEP);
            shape.nudge(dx, dy);
        }
        self.score += 1;
        self.publish();
    }

    /// Register a subscriber.
    ///
    /// The current state is queued immediately, so a fresh subscriber can draw
    /// its first frame before any tick happens.
    pub fn subscribe(&mut self) -> Receiver<StateChanged> {
        let (tx, rx) = mpsc::channel();
        // `rx` is alive here, so this send cannot fail.
        let _ = tx.send(self.state_changed());
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn sampler(&self) -> &R {
        &self.rng
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        for (dst, src) in out.shapes.iter_mut().zip(self.shapes.iter()) {
            *dst = ShapeSnapshot::from(*src);
        }
        out.score = self.score;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn state_changed(&self) -> StateChanged {
        StateChanged { score: self.score }
    }

    fn publish(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }

        let change = self.state_changed();
        let before = self.subscribers.len();
        // A failed send means the receiver is gone.
        self.subscribers.retain(|tx| tx.send(change).is_ok());

        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            debug!("pruned {} closed subscriber(s)", dropped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorRgb, Point, MOTION_BOUNDS, SPAWN_BOUNDS};

    /// Always returns the upper end of the requested range.
    struct High;

    impl Sampler for High {
        fn uniform(&mut self, _lo: f64, hi: f64) -> f64 {
            hi
        }
    }

    fn grid_shapes() -> [Shape; SHAPE_COUNT] {
        std::array::from_fn(|i| {
            Shape::new(
                ShapeId(i as u32),
                Point::new(10.0 * i as f64, 20.0 * i as f64),
                50.0,
                ColorRgb::new(0.5, 0.5, 0.5),
            )
        })
    }

    #[test]
    fn initialize_populates_every_shape() {
        let session = Session::new(12345);
        assert_eq!(session.score(), 0);
        assert_eq!(session.shapes().len(), SHAPE_COUNT);
        for (i, s) in session.shapes().iter().enumerate() {
            assert_eq!(s.id(), ShapeId(i as u32));
            assert!(SPAWN_BOUNDS.contains(s.position()));
        }
    }

    #[test]
    fn same_seed_same_session() {
        let a = Session::new(77);
        let b = Session::new(77);
        assert_eq!(a.shapes(), b.shapes());
    }

    #[test]
    fn tick_moves_every_shape_by_sampled_delta() {
        let mut session = Session::from_shapes(grid_shapes(), High);
        session.tick();

        for (i, s) in session.shapes().iter().enumerate() {
            let expected = MOTION_BOUNDS.clamp(Point::new(
                10.0 * i as f64 + MAX_STEP,
                20.0 * i as f64 + MAX_STEP,
            ));
            assert_eq!(s.position(), expected);
        }
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn subscribe_queues_current_state() {
        let mut session = Session::from_shapes(grid_shapes(), High);
        session.tick();
        session.tick();

        let rx = session.subscribe();
        assert_eq!(rx.try_recv(), Ok(StateChanged { score: 2 }));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn each_tick_publishes_once() {
        let mut session = Session::new(3);
        let rx = session.subscribe();
        let _ = rx.try_recv();

        session.tick();
        session.tick();
        session.tick();

        let scores: Vec<u64> = rx.try_iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![1, 2, 3]);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut session = Session::new(3);
        let keep = session.subscribe();
        let gone = session.subscribe();
        assert_eq!(session.subscriber_count(), 2);

        drop(gone);
        session.tick();

        assert_eq!(session.subscriber_count(), 1);
        assert_eq!(keep.try_iter().last(), Some(StateChanged { score: 1 }));
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut session = Session::new(9);
        session.tick();
        let snap = session.snapshot();

        assert_eq!(snap.score, 1);
        for (snap_shape, shape) in snap.shapes.iter().zip(session.shapes()) {
            assert_eq!(snap_shape.id, shape.id());
            assert_eq!(snap_shape.position, shape.position());
            assert_eq!(snap_shape.size, shape.size());
            assert_eq!(snap_shape.color, shape.color());
        }
    }
}
