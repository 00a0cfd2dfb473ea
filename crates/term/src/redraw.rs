/// Decides when the main loop draws a frame.
///
/// A frame is drawn once per batch of pending state changes, or once after
/// [`RedrawGate::force`] (used when the terminal is resized).
#[derive(Debug, Clone, Default)]
pub struct RedrawGate {
    forced: bool,
}

impl RedrawGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request one redraw even without pending changes.
    pub fn force(&mut self) {
        self.forced = true;
    }

    /// Decide whether to draw now. Consumes a pending force.
    pub fn should_redraw(&mut self, pending_changes: usize) -> bool {
        let forced = std::mem::take(&mut self.forced);
        forced || pending_changes > 0
    }
}
