//! Random number source used by the response simulator.
//!
//! Every probabilistic choice the simulator makes goes through
//! [`RandomSource`], so tests can script the exact sequence of draws and
//! assert on the resulting text.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A stream of uniform draws in `[0, 1)`.
pub trait RandomSource: Send {
    /// Returns the next draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Draws once and reports whether the draw is strictly above `threshold`.
    fn exceeds(&mut self, threshold: f64) -> bool {
        self.next_unit() > threshold
    }

    /// Draws once and maps it onto `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let index = (self.next_unit() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }
}

/// Production source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible stream for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of draws, then keeps returning a filler value.
///
/// ```
/// use petpal_core::random::{RandomSource, ScriptedRandom};
///
/// let mut rng = ScriptedRandom::new([0.9, 0.1]);
/// assert!(rng.exceeds(0.5));
/// assert_eq!(rng.pick_index(4), 0);
/// assert_eq!(rng.next_unit(), 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
    filler: f64,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            filler: 0.0,
        }
    }

    /// Value returned once the scripted draws run out.
    pub fn then_repeat(mut self, filler: f64) -> Self {
        self.filler = filler;
        self
    }

    /// Number of scripted draws not consumed yet.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let draw = self.draws.pop_front().unwrap_or(self.filler);
        // keep the [0, 1) contract even for sloppy scripts
        draw.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_streams_repeat() {
        let mut a = StdRandom::seeded(7);
        let mut b = StdRandom::seeded(7);
        for _ in 0..16 {
            let draw = a.next_unit();
            assert!((0.0..1.0).contains(&draw));
            assert_eq!(draw, b.next_unit());
        }
    }

    #[test]
    fn test_pick_index_stays_in_bounds() {
        let mut rng = ScriptedRandom::new([0.0, 0.5, 0.999_999, 1.5]);
        assert_eq!(rng.pick_index(4), 0);
        assert_eq!(rng.pick_index(4), 2);
        assert_eq!(rng.pick_index(4), 3);
        assert_eq!(rng.pick_index(4), 3);
    }

    #[test]
    fn test_exceeds_is_strict() {
        let mut rng = ScriptedRandom::new([0.5, 0.51]);
        assert!(!rng.exceeds(0.5));
        assert!(rng.exceeds(0.5));
    }

    #[test]
    fn test_filler_after_script() {
        let mut rng = ScriptedRandom::new([0.3]).then_repeat(0.8);
        assert_eq!(rng.remaining(), 1);
        assert_eq!(rng.next_unit(), 0.3);
        assert_eq!(rng.next_unit(), 0.8);
        assert_eq!(rng.remaining(), 0);
    }
}
