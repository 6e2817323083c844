use thiserror::Error;

/// Errors reported by parameter construction and scheduling
///
/// These are contract violations by the caller, surfaced synchronously at
/// the call site. A failed call never mutates the timeline. Rendering with
/// [`crate::AudioParameter::tick`] cannot fail.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ParameterError {
    /// A parameter was constructed with a default value that is not a
    /// finite number
    #[error("default value must be a finite number (got {0})")]
    InvalidDefaultValue(f64),

    /// An exponential ramp was scheduled toward a non-positive target
    #[error("exponential ramp target must be strictly positive (got {0})")]
    InvalidRampTarget(f64),

    /// An exponential ramp was scheduled while the value it would ramp from
    /// is non-positive
    #[error("exponential ramp requires a strictly positive starting value (got {0})")]
    InvalidRampStart(f64),

    /// A value curve was scheduled without any points
    #[error("value curve must contain at least one point")]
    EmptyCurve,
}
