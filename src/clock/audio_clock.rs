use crate::Timestamp;

/// The audio clock a parameter renders against
///
/// The clock is a read-only dependency of a parameter: rendering reads the
/// current time and sample rate on every tick but never advances the clock.
/// The host owns the clock and advances it by exactly one block between
/// ticks.
pub trait AudioClock {
    /// Get the current time of the clock
    ///
    /// Time is monotonically non-decreasing and advances in whole blocks
    fn current_time(&self) -> Timestamp;

    /// Get the sample rate of the clock
    ///
    /// The sample rate is fixed for the lifetime of the clock
    fn sample_rate(&self) -> usize;
}
