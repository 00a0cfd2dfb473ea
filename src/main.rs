//! Terminal shapes runner.
//!
//! Spawns the session, then drives it from a fixed 10ms ticker. Every state
//! change published by the session triggers one redraw through the
//! framebuffer renderer.

use std::sync::mpsc::Receiver;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event;
use log::{error, info};

use tui_shapes::core::{DemoConfig, Session, SessionSnapshot, StateChanged, Ticker};
use tui_shapes::input::{map_event, Control};
use tui_shapes::term::{FrameBuffer, RedrawGate, ShapesView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = DemoConfig::default().with_seed(clock_seed());
    info!(
        "starting: seed={} tick={:?}",
        config.seed, config.tick_interval
    );

    let mut session = Session::new(config.seed);
    let changes = session.subscribe();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &changes, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    match &result {
        Ok(()) => info!("stopped after {} ticks", session.score()),
        Err(e) => error!("stopped after {} ticks: {:#}", session.score(), e),
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut Session,
    changes: &Receiver<StateChanged>,
    config: &DemoConfig,
) -> Result<()> {
    let view = ShapesView::default();
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut ticker = Ticker::new(config.tick_interval, Instant::now());
    let mut gate = RedrawGate::new();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);

    loop {
        // Render once per batch of published changes.
        if gate.should_redraw(changes.try_iter().count()) {
            session.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Wait for input until the next tick is due.
        if event::poll(ticker.timeout(Instant::now()))? {
            match map_event(&event::read()?) {
                Some(Control::Quit) => return Ok(()),
                Some(Control::Resize { width, height }) => {
                    viewport = Viewport::new(width, height);
                    term.invalidate();
                    gate.force();
                }
                None => {}
            }
        }

        if ticker.poll(Instant::now()) {
            session.tick();
        }
    }
}

/// Seed from the wall clock so every run looks different.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
