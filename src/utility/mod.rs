mod sequence;
mod timestamp;

pub(crate) use sequence::ArithmeticSequence;
pub(crate) use sequence::GeometricSequence;
pub use timestamp::Timestamp;
