mod audio_clock;
mod block_clock;

pub use audio_clock::AudioClock;
pub use block_clock::BlockClock;
