//! Output-context abstraction between the engine and the audio device.
//!
//! The real implementation ([`crate::DeviceOutput`]) sits on top of rodio;
//! the scripted one in [`crate::testing`] lets the player and session test
//! their playback semantics without a sound card.

use reel_models::AudioBuffer;

use crate::error::AudioResult;

/// A session-wide audio output context.
pub trait AudioOutput {
    /// Idempotent lazy initialization and suspended-device recovery.
    ///
    /// Called before every playback start so a platform-suspended output is
    /// brought back without the caller tracking device state.
    fn resume(&self) -> AudioResult<()>;

    /// Build a fresh source over the buffer and start it immediately from
    /// offset 0 at the given gain.
    fn start(&self, buffer: &AudioBuffer, gain: f32) -> AudioResult<Box<dyn AudioSource>>;
}

/// A live, single-use playback source.
///
/// Sources cannot be restarted once stopped; replaying a buffer means asking
/// the output for a new source.
pub trait AudioSource {
    /// Adjust the live gain without interrupting playback.
    fn set_gain(&mut self, gain: f32);

    /// Stop the source. Stopping an already-stopped source is a silent no-op.
    fn stop(&mut self);

    /// Whether the source has been stopped or has finished playing.
    fn is_stopped(&self) -> bool;
}
