//! Mapping from terminal events to lifecycle controls.
//!
//! The demo is passive: keys never touch the session. The only reactions are
//! leaving the program and redrawing after a resize.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the main loop should do in response to a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Quit,
    Resize { width: u16, height: u16 },
}

/// Map a terminal event to a control, ignoring everything else.
pub fn map_event(event: &Event) -> Option<Control> {
    match *event {
        Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
            Some(Control::Quit)
        }
        Event::Resize(width, height) => Some(Control::Resize { width, height }),
        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
