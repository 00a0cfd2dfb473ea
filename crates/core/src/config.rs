use std::time::Duration;

use crate::types::TICK_MS;

/// Run parameters for the demo binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// Seed for the session's [`SimpleRng`](crate::rng::SimpleRng).
    pub seed: u32,
    /// Timer interval between ticks.
    pub tick_interval: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_interval: Duration::from_millis(TICK_MS as u64),
        }
    }
}

impl DemoConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}
