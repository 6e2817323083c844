/// A lazy arithmetic progression
///
/// The first call to `next_value` returns `seed + increment`; every call
/// after that adds `increment` again. The per-sample rendering path uses
/// this to advance a linear ramp with a single addition per sample.
pub(crate) struct ArithmeticSequence {
    current: f64,
    increment: f64,
}

impl ArithmeticSequence {
    pub fn new(seed: f64, increment: f64) -> Self {
        Self {
            current: seed,
            increment,
        }
    }

    pub fn next_value(&mut self) -> f64 {
        self.current += self.increment;
        self.current
    }
}

/// A lazy geometric progression
///
/// The first call to `next_value` returns `seed * ratio`; every call after
/// that multiplies by `ratio` again. Exponential curves advance with one
/// multiplication per sample instead of a `powf` or `exp`.
pub(crate) struct GeometricSequence {
    current: f64,
    ratio: f64,
}

impl GeometricSequence {
    pub fn new(seed: f64, ratio: f64) -> Self {
        Self {
            current: seed,
            ratio,
        }
    }

    pub fn next_value(&mut self) -> f64 {
        self.current *= self.ratio;
        self.current
    }
}
