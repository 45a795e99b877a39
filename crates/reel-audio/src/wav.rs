//! WAV re-encoding for the export surface.

use std::io::Cursor;

use reel_models::AudioBuffer;

use crate::error::{AudioError, AudioResult};

/// Re-encode a decoded buffer into a standard 16-bit PCM WAV file.
pub fn encode_wav(buffer: &AudioBuffer) -> AudioResult<Vec<u8>> {
    let spec = hound::WavSpec {
        channels: buffer.channels(),
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec)
        .map_err(|e| AudioError::encode(e.to_string()))?;

    for &sample in buffer.samples() {
        let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer
            .write_sample(value)
            .map_err(|e| AudioError::encode(e.to_string()))?;
    }
    writer
        .finalize()
        .map_err(|e| AudioError::encode(e.to_string()))?;

    Ok(cursor.into_inner())
}
