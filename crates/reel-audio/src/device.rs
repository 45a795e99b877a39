//! rodio-backed audio output.

use std::cell::RefCell;

use reel_models::AudioBuffer;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::debug;

use crate::error::{AudioError, AudioResult};
use crate::output::{AudioOutput, AudioSource};

struct OpenedStream {
    // The stream must stay alive for the handle to keep producing sound.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

/// Default-device output context.
///
/// The underlying stream is opened lazily on first use and kept for the rest
/// of the session: one live output device session, reused across plays. The
/// service object is inert until something actually plays.
pub struct DeviceOutput {
    opened: RefCell<Option<OpenedStream>>,
}

impl DeviceOutput {
    pub fn new() -> Self {
        Self {
            opened: RefCell::new(None),
        }
    }

    fn ensure_open(&self) -> AudioResult<()> {
        let mut opened = self.opened.borrow_mut();
        if opened.is_none() {
            let (stream, handle) = OutputStream::try_default()
                .map_err(|e| AudioError::output(format!("failed to open audio device: {}", e)))?;
            debug!("opened default audio output stream");
            *opened = Some(OpenedStream {
                _stream: stream,
                handle,
            });
        }
        Ok(())
    }
}

impl Default for DeviceOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioOutput for DeviceOutput {
    fn resume(&self) -> AudioResult<()> {
        self.ensure_open()
    }

    fn start(&self, buffer: &AudioBuffer, gain: f32) -> AudioResult<Box<dyn AudioSource>> {
        self.ensure_open()?;
        let opened = self.opened.borrow();
        let Some(opened) = opened.as_ref() else {
            return Err(AudioError::output("audio device unavailable"));
        };

        let sink = Sink::try_new(&opened.handle)
            .map_err(|e| AudioError::output(format!("failed to create audio sink: {}", e)))?;
        sink.set_volume(gain);
        sink.append(SamplesBuffer::new(
            buffer.channels(),
            buffer.sample_rate(),
            buffer.samples().to_vec(),
        ));
        sink.play();

        Ok(Box::new(RodioSource { sink: Some(sink) }))
    }
}

/// A single live rodio sink.
struct RodioSource {
    sink: Option<Sink>,
}

impl AudioSource for RodioSource {
    fn set_gain(&mut self, gain: f32) {
        if let Some(sink) = &self.sink {
            sink.set_volume(gain);
        }
    }

    fn stop(&mut self) {
        // rodio sinks tolerate stop after completion, but taking the sink
        // here makes double-stop trivially a no-op.
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn is_stopped(&self) -> bool {
        self.sink.as_ref().map(|s| s.empty()).unwrap_or(true)
    }
}
