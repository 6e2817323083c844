#![warn(missing_docs)]

//! paramdio provides sample-accurate automation for a single audio
//! parameter, inspired by the Web Audio API's `AudioParam`
//!
//! A parameter holds a scalar value that can either stay constant or follow
//! a scheduled timeline of automation curves:
//!
//! - an instantaneous step (`set_value_at_time`)
//! - a linear ramp (`linear_ramp_to_value_at_time`)
//! - an exponential ramp (`exponential_ramp_to_value_at_time`)
//! - an exponential approach toward a target (`set_target_at_time`)
//! - playback of an arbitrary sampled curve (`set_value_curve_at_time`)
//!
//! The host owns a clock and calls [`AudioParameter::tick`] once per block
//! period. Each tick renders exactly [`BLOCK_SIZE`] samples starting at the
//! clock's current time, either once per block (k-rate) or once per sample
//! (a-rate), and leaves the parameter's value at the last rendered sample.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use paramdio::{AudioParameter, AutomationRate, BlockClock, Timestamp};
//!
//! let sample_rate = 48_000;
//! let clock = Arc::new(BlockClock::new(sample_rate));
//!
//! let mut gain = AudioParameter::new(clock.clone(), 1.0, AutomationRate::PerSample)
//!     .expect("default value is finite");
//!
//! gain.linear_ramp_to_value_at_time(0.0, Timestamp::from_seconds(1.0));
//!
//! for _ in 0..10 {
//!     let block = gain.tick();
//!     // apply `block` to the audio signal
//!     let _ = block;
//!     clock.advance_block();
//! }
//! ```

mod clock;
mod error;
mod parameter;
mod utility;

pub use clock::AudioClock;
pub use clock::BlockClock;

pub use error::ParameterError;

pub use parameter::AudioParameter;
pub use parameter::AutomationRate;
pub use parameter::ParameterValue;

pub use utility::Timestamp;

/// The number of samples rendered by each call to [`AudioParameter::tick`]
pub const BLOCK_SIZE: usize = 128;
