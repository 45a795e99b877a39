//! Shared data models for ReelStudio.
//!
//! This crate provides the types shared across the pipeline and player:
//! - The assembled `Movie` record and its owned media handles
//! - Generation status and phase state machine
//! - Playback state
//! - Aspect ratio and voice preset enumerations

pub mod aspect;
pub mod audio_buffer;
pub mod movie;
pub mod playback;
pub mod status;
pub mod video_handle;
pub mod voice;

// Re-export common types
pub use aspect::AspectRatio;
pub use audio_buffer::AudioBuffer;
pub use movie::{Movie, MovieId};
pub use playback::PlaybackState;
pub use status::{GenerationPhase, GenerationStatus};
pub use video_handle::VideoHandle;
pub use voice::VoicePreset;
