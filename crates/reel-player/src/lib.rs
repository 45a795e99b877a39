//! Media synchronization controller for ReelStudio.
//!
//! Keeps a video playback surface and the audio engine in lockstep. The
//! controller owns the single authoritative "is this movie playing" value;
//! user toggles and native surface events all funnel through one transition
//! function so video-reported and audio-engine-reported play state can never
//! drift apart.

pub mod controller;
pub mod event;
pub mod surface;
pub mod testing;

pub use controller::SyncController;
pub use event::PlayerEvent;
pub use surface::VideoSurface;
