//! Scripted output context for tests.
//!
//! Used by this crate's own tests and by the player/session crates, which
//! need to assert playback semantics without a sound card.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use reel_models::AudioBuffer;

use crate::error::{AudioError, AudioResult};
use crate::output::{AudioOutput, AudioSource};

/// Events recorded by the scripted output, in call order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioEvent {
    Resumed,
    Started { gain: f32 },
    Stopped,
    GainChanged(f32),
}

/// Shared in-order event log.
pub type AudioLog = Rc<RefCell<Vec<AudioEvent>>>;

/// An [`AudioOutput`] that records calls instead of touching a device.
pub struct ScriptedOutput {
    log: AudioLog,
    fail_next_start: Cell<bool>,
}

impl ScriptedOutput {
    /// Create a scripted output and the log it writes into.
    pub fn new() -> (Self, AudioLog) {
        let log: AudioLog = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                log: Rc::clone(&log),
                fail_next_start: Cell::new(false),
            },
            log,
        )
    }

    /// Make the next `start` call fail with an output error.
    pub fn fail_next_start(&self) {
        self.fail_next_start.set(true);
    }
}

impl AudioOutput for ScriptedOutput {
    fn resume(&self) -> AudioResult<()> {
        self.log.borrow_mut().push(AudioEvent::Resumed);
        Ok(())
    }

    fn start(&self, _buffer: &AudioBuffer, gain: f32) -> AudioResult<Box<dyn AudioSource>> {
        if self.fail_next_start.take() {
            return Err(AudioError::output("scripted start failure"));
        }
        self.log.borrow_mut().push(AudioEvent::Started { gain });
        Ok(Box::new(ScriptedSource {
            log: Rc::clone(&self.log),
            stopped: false,
        }))
    }
}

struct ScriptedSource {
    log: AudioLog,
    stopped: bool,
}

impl AudioSource for ScriptedSource {
    fn set_gain(&mut self, gain: f32) {
        if !self.stopped {
            self.log.borrow_mut().push(AudioEvent::GainChanged(gain));
        }
    }

    fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.log.borrow_mut().push(AudioEvent::Stopped);
        }
    }

    fn is_stopped(&self) -> bool {
        self.stopped
    }
}
