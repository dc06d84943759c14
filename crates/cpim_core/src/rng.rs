//! Random number source for the simulation kernel.
//!
//! The kernel only needs a handful of primitives: uniform reals on `[0,1)`
//! and `(0,1)`, bounded integers and a fair coin. Anything implementing
//! [`RandomSource`] can drive a sweep, which lets tests script exact draws.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait RandomSource {
    /// Uniform draw on `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform draw on the open interval `(0, 1)`.
    fn unit_open(&mut self) -> f64;

    /// Uniform integer on `[0, n)`. `n` must be positive.
    fn below(&mut self, n: usize) -> usize;

    /// Bernoulli trial with success probability `p`.
    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    /// Fair coin.
    #[inline]
    fn coin(&mut self) -> bool {
        self.below(2) == 0
    }
}

/// Seedable ChaCha8 generator used in production runs.
#[derive(Clone, Debug)]
pub struct SimRng {
    seed: u64,
    inner: ChaCha8Rng,
}

impl SimRng {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeds from the wall clock (whole seconds since the epoch).
    #[must_use]
    pub fn from_clock() -> Self {
        let seed = chrono::Utc::now().timestamp().unsigned_abs();
        Self::seeded(seed)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    #[inline]
    fn unit_open(&mut self) -> f64 {
        loop {
            let u = self.inner.gen::<f64>();
            if u > 0.0 {
                return u;
            }
        }
    }

    #[inline]
    fn below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "below() needs a positive bound");
        self.inner.gen_range(0..n)
    }

    #[inline]
    fn coin(&mut self) -> bool {
        self.inner.next_u32() & 1 == 1
    }
}
