//! Thread-safe random number generation.
//!
//! Wraps a single PRNG in a lock so one generator can be shared across
//! threads. The guarantee is mutual exclusion only: callers observe a
//! consistent generator state, but no ordering between threads.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::Arc;

/// A clonable, lock-guarded random number generator.
///
/// Clones share the same underlying generator state; every call takes
/// the lock around a single generator operation and releases it before
/// returning.
#[derive(Clone)]
pub struct SharedRng {
    inner: Arc<Mutex<StdRng>>,
}

impl SharedRng {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StdRng::from_entropy())),
        }
    }

    /// Create a deterministically seeded generator, for reproducible
    /// sequences in tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub fn next_u32(&self) -> u32 {
        self.inner.lock().next_u32()
    }

    pub fn next_u64(&self) -> u64 {
        self.inner.lock().next_u64()
    }

    /// Uniform value in `[0.0, 1.0)`.
    pub fn next_f64(&self) -> f64 {
        self.inner.lock().gen::<f64>()
    }

    /// Uniform value in `[low, high)`. Panics if the range is empty,
    /// matching `rand`'s own contract.
    pub fn range(&self, low: u64, high: u64) -> u64 {
        self.inner.lock().gen_range(low..high)
    }

    /// Fill `buffer` with random bytes.
    pub fn fill(&self, buffer: &mut [u8]) {
        self.inner.lock().fill_bytes(buffer)
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::new()
    }
}
