use std::ops::{Add, Sub};

type FixedPoint = fixed::types::I32F32;

/// A fixed-point representation of a time in seconds
///
/// Using fixed-point arithmetic keeps block-by-block time increments exact,
/// so repeatedly adding a block duration never drifts the way accumulating
/// floating-point seconds would.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Timestamp {
    seconds: FixedPoint,
}

impl Eq for Timestamp {}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.seconds.cmp(&other.seconds)
    }
}

impl Add for Timestamp {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            seconds: self.seconds + rhs.seconds,
        }
    }
}

impl Sub for Timestamp {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            seconds: self.seconds - rhs.seconds,
        }
    }
}

impl Timestamp {
    /// Zero seconds
    pub fn zero() -> Self {
        Self {
            seconds: FixedPoint::ZERO,
        }
    }

    /// Create a timestamp from a number of seconds
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            seconds: FixedPoint::from_num(seconds),
        }
    }

    /// Create a timestamp from a number of samples at a sample rate
    pub fn from_samples(samples: f64, sample_rate: usize) -> Self {
        Self {
            seconds: FixedPoint::from_num(samples / sample_rate as f64),
        }
    }

    /// Get the number of seconds
    pub fn as_seconds(&self) -> f64 {
        self.seconds.to_num()
    }

    /// Get the number of samples at a sample rate
    pub fn as_samples(&self, sample_rate: usize) -> f64 {
        self.seconds.to_num::<f64>() * sample_rate as f64
    }

    /// Increment by a number of samples
    pub fn incremented_by_samples(&self, sample_count: usize, sample_rate: usize) -> Self {
        *self + Self::from_samples(sample_count as f64, sample_rate)
    }

    /// Increment by a number of seconds
    pub fn incremented_by_seconds(&self, seconds: f64) -> Self {
        Self {
            seconds: self.seconds + FixedPoint::from_num(seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn increment_by_samples() {
        let sample_rate = 44_100;
        let before = Timestamp::zero();
        let after = before.incremented_by_samples(sample_rate, sample_rate);
        assert_relative_eq!(after.as_seconds() - before.as_seconds(), 1.0);
    }

    #[test]
    fn sample_conversions_round_trip() {
        let sample_rate = 48_000;
        let time = Timestamp::from_samples(22_050.0, sample_rate);
        assert_relative_eq!(time.as_samples(sample_rate), 22_050.0, epsilon = 1e-6);
    }

    #[test]
    fn ordering_follows_seconds() {
        let earlier = Timestamp::from_seconds(0.25);
        let later = Timestamp::from_seconds(0.5);
        assert!(earlier < later);
        assert_eq!(later - earlier, Timestamp::from_seconds(0.25));
    }
}
