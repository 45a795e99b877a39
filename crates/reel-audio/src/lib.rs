//! Speech audio decoding and playback for ReelStudio.
//!
//! This crate turns the backend's encoded speech payload into a reusable
//! [`reel_models::AudioBuffer`] and drives its playback through a small
//! source -> gain -> output graph. Sources are single-use: every play builds
//! a fresh source over the shared decoded buffer, while mute is a live gain
//! adjustment that never restarts the source.

pub mod decode;
pub mod device;
pub mod engine;
pub mod error;
pub mod output;
pub mod testing;
pub mod wav;

pub use decode::{decode_payload, SPEECH_CHANNELS, SPEECH_SAMPLE_RATE};
pub use device::DeviceOutput;
pub use engine::{AudioEngine, PlaybackHandle};
pub use error::{AudioError, AudioResult};
pub use output::{AudioOutput, AudioSource};
pub use wav::encode_wav;
