use std::sync::atomic::{AtomicI64, Ordering};

use crate::{AudioClock, Timestamp, BLOCK_SIZE};

/// A host-side clock that advances one block at a time
///
/// The clock counts whole samples in an atomic cell and derives the time on
/// read, so every block boundary is exact and the clock can be shared
/// behind an `Arc` and advanced through a shared reference. The host calls
/// [`BlockClock::advance_block`] once after every tick.
pub struct BlockClock {
    sample_rate: usize,
    samples: AtomicI64,
}

impl BlockClock {
    /// Create a clock at time zero
    pub fn new(sample_rate: usize) -> Self {
        Self {
            sample_rate,
            samples: AtomicI64::new(0),
        }
    }

    /// Advance the clock by exactly `BLOCK_SIZE` samples
    pub fn advance_block(&self) {
        self.samples.fetch_add(BLOCK_SIZE as i64, Ordering::AcqRel);
    }
}

impl AudioClock for BlockClock {
    fn current_time(&self) -> Timestamp {
        Timestamp::from_samples(self.samples.load(Ordering::Acquire) as f64, self.sample_rate)
    }

    fn sample_rate(&self) -> usize {
        self.sample_rate
    }
}
