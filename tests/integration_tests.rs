//! Integration tests for the tick -> notify -> snapshot -> render pipeline

use tui_shapes::core::{Session, SessionSnapshot, StateChanged, Ticker};
use tui_shapes::term::{encode_diff_into, encode_full_into, FrameBuffer, ShapesView, Viewport};
use tui_shapes::types::{MOTION_BOUNDS, SHAPE_COUNT};

use std::time::{Duration, Instant};

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
}

#[test]
fn test_initial_frame_reads_score_zero() {
    let mut session = Session::new(12345);
    let changes = session.subscribe();

    // The subscriber sees the initial state before any tick.
    assert_eq!(changes.try_recv(), Ok(StateChanged { score: 0 }));

    let fb = ShapesView::default().render(&session.snapshot(), Viewport::new(80, 24));
    assert!(row_text(&fb, 22).contains("Score: 0"));
}

#[test]
fn test_each_tick_redraws_with_new_score() {
    let mut session = Session::new(99);
    let changes = session.subscribe();
    let view = ShapesView::default();
    let vp = Viewport::new(80, 24);
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(vp.width, vp.height);
    let mut redraws = 0;

    for _ in 0..5 {
        session.tick();
        let pending: Vec<StateChanged> = changes.try_iter().collect();
        if !pending.is_empty() {
            redraws += 1;
            session.snapshot_into(&mut snap);
            view.render_into(&snap, vp, &mut fb);
        }
    }

    // One initial notification is folded into the first redraw.
    assert_eq!(redraws, 5);
    assert_eq!(snap.score, 5);
    assert!(row_text(&fb, 22).contains("Score: 5"));
}

#[test]
fn test_session_lifecycle_over_simulated_time() {
    let mut session = Session::new(2024);
    let t0 = Instant::now();
    let mut ticker = Ticker::new(Duration::from_millis(10), t0);

    // Poll every 3ms for one simulated second.
    let mut now = t0;
    for _ in 0..333 {
        now += Duration::from_millis(3);
        if ticker.poll(now) {
            session.tick();
        }
    }

    // Without catch-up, 3ms polls tick every 12ms.
    assert_eq!(session.score(), 83);
    assert_eq!(session.shapes().len(), SHAPE_COUNT);
    assert!(session
        .shapes()
        .iter()
        .all(|s| MOTION_BOUNDS.contains(s.position())));
}

#[test]
fn test_consecutive_frames_diff_smaller_than_full_redraw() {
    let mut session = Session::new(5);
    let view = ShapesView::default();
    let vp = Viewport::new(100, 40);

    let before = view.render(&session.snapshot(), vp);
    session.tick();
    let after = view.render(&session.snapshot(), vp);

    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();

    assert!(!diff.is_empty());
    assert!(diff.len() < full.len());
}

#[test]
fn test_resize_event_sizes_next_frame() {
    use crossterm::event::Event;
    use tui_shapes::input::{map_event, Control};
    use tui_shapes::term::RedrawGate;

    let session = Session::new(5);
    let view = ShapesView::default();
    let mut gate = RedrawGate::new();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&session.snapshot(), Viewport::new(80, 24), &mut fb);

    let Some(Control::Resize { width, height }) = map_event(&Event::Resize(100, 30)) else {
        panic!("resize event should map to Control::Resize");
    };
    gate.force();

    assert!(gate.should_redraw(0));
    view.render_into(&session.snapshot(), Viewport::new(width, height), &mut fb);
    assert_eq!((fb.width(), fb.height()), (100, 30));
    assert!(row_text(&fb, 28).contains("Score: 0"));
}
