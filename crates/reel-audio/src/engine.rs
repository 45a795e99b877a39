//! Playback engine fronting the output context.

use reel_models::AudioBuffer;
use tracing::debug;

use crate::device::DeviceOutput;
use crate::error::AudioResult;
use crate::output::{AudioOutput, AudioSource};

const GAIN_MUTED: f32 = 0.0;
const GAIN_UNMUTED: f32 = 1.0;

/// Drives playback of decoded speech buffers.
pub struct AudioEngine {
    output: Box<dyn AudioOutput>,
}

impl AudioEngine {
    /// Create an engine over an output context.
    pub fn new(output: Box<dyn AudioOutput>) -> Self {
        Self { output }
    }

    /// Create an engine over the default audio device.
    pub fn with_default_device() -> Self {
        Self::new(Box::new(DeviceOutput::new()))
    }

    /// Start playback of the buffer from offset 0.
    ///
    /// Builds a brand-new source every time; the decoded buffer itself is
    /// shared and never mutated. Callers replacing a previous handle must
    /// stop it first, otherwise the old source keeps sounding untracked.
    pub fn play(&self, buffer: &AudioBuffer, muted: bool) -> AudioResult<PlaybackHandle> {
        self.output.resume()?;
        let gain = if muted { GAIN_MUTED } else { GAIN_UNMUTED };
        let source = self.output.start(buffer, gain)?;
        debug!(
            frames = buffer.frame_count(),
            sample_rate = buffer.sample_rate(),
            muted,
            "started audio source"
        );
        Ok(PlaybackHandle { source, muted })
    }
}

/// Handle over one live playback source.
pub struct PlaybackHandle {
    source: Box<dyn AudioSource>,
    muted: bool,
}

impl PlaybackHandle {
    /// Stop the source if still running.
    ///
    /// Stopping an already-stopped or finished handle is a silent no-op.
    pub fn stop(&mut self) {
        self.source.stop();
    }

    /// Adjust the live gain without restarting the source.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.source
            .set_gain(if muted { GAIN_MUTED } else { GAIN_UNMUTED });
    }

    /// Current mute flag of this handle.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether the source has been stopped or has finished.
    pub fn is_stopped(&self) -> bool {
        self.source.is_stopped()
    }
}

impl Drop for PlaybackHandle {
    fn drop(&mut self) {
        self.source.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{AudioEvent, ScriptedOutput};

    fn short_buffer() -> AudioBuffer {
        AudioBuffer::new(vec![0.1; 240], 24_000, 1)
    }

    #[test]
    fn test_play_resumes_then_starts() {
        let (output, log) = ScriptedOutput::new();
        let engine = AudioEngine::new(Box::new(output));

        let _handle = engine.play(&short_buffer(), false).unwrap();

        let events = log.borrow();
        assert_eq!(
            &events[..],
            &[AudioEvent::Resumed, AudioEvent::Started { gain: 1.0 }]
        );
    }

    #[test]
    fn test_play_muted_starts_at_zero_gain() {
        let (output, log) = ScriptedOutput::new();
        let engine = AudioEngine::new(Box::new(output));

        let handle = engine.play(&short_buffer(), true).unwrap();

        assert!(handle.is_muted());
        assert!(log
            .borrow()
            .contains(&AudioEvent::Started { gain: 0.0 }));
    }

    #[test]
    fn test_double_stop_is_noop() {
        let (output, log) = ScriptedOutput::new();
        let engine = AudioEngine::new(Box::new(output));

        let mut handle = engine.play(&short_buffer(), false).unwrap();
        handle.stop();
        handle.stop();

        let stops = log
            .borrow()
            .iter()
            .filter(|e| **e == AudioEvent::Stopped)
            .count();
        assert_eq!(stops, 1);
        assert!(handle.is_stopped());
    }

    #[test]
    fn test_set_muted_adjusts_gain_without_restart() {
        let (output, log) = ScriptedOutput::new();
        let engine = AudioEngine::new(Box::new(output));

        let mut handle = engine.play(&short_buffer(), false).unwrap();
        assert!(!handle.is_muted());
        handle.set_muted(true);
        assert!(handle.is_muted());
        handle.set_muted(false);
        assert!(!handle.is_muted());

        let events = log.borrow();
        let starts = events
            .iter()
            .filter(|e| matches!(e, AudioEvent::Started { .. }))
            .count();
        assert_eq!(starts, 1);
        assert!(events.contains(&AudioEvent::GainChanged(0.0)));
        assert!(events.contains(&AudioEvent::GainChanged(1.0)));
    }

    #[test]
    fn test_drop_stops_the_source() {
        let (output, log) = ScriptedOutput::new();
        let engine = AudioEngine::new(Box::new(output));

        let handle = engine.play(&short_buffer(), false).unwrap();
        drop(handle);

        assert!(log.borrow().contains(&AudioEvent::Stopped));
    }
}
