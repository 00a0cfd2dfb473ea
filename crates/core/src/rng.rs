//! RNG module - injectable uniform sampling
//!
//! Everything random in a session (spawn positions, sizes, colors and the
//! per-tick deltas) is drawn through the [`Sampler`] trait, so tests can swap
//! in a scripted source and pin exact values.
//!
//! [`SimpleRng`] is the default source: a small LCG that is deterministic per
//! seed and allocation-free.

/// Source of continuous uniform samples.
pub trait Sampler {
    /// Sample uniformly from the inclusive range `[lo, hi]`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).uniform(lo, hi)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

/// Largest value produced from the top 24 bits of a draw.
const UNIT_MAX: u32 = (1 << 24) - 1;

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would stay zero without the increment; keep seeds distinct from it.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a value in `[0, 1]`, both ends reachable.
    ///
    /// The low bits of an LCG have short periods, so only the top 24 are used.
    pub fn next_unit(&mut self) -> f64 {
        (self.next_u32() >> 8) as f64 / UNIT_MAX as f64
    }

    /// Current internal state (reseeding with it replays the sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Sampler for SimpleRng {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (lo + (hi - lo) * self.next_unit()).clamp(lo, hi)
    }
}
