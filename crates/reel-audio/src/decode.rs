//! Decoding of backend-delivered speech payloads.
//!
//! The speech backend delivers raw 16-bit little-endian PCM at a fixed
//! 24 kHz mono operating rate. WAV-wrapped payloads are also accepted so
//! pre-rendered fixtures and alternate backends keep working.

use std::io::Cursor;

use reel_models::AudioBuffer;

use crate::error::{AudioError, AudioResult};

/// Operating sample rate of the speech backend.
pub const SPEECH_SAMPLE_RATE: u32 = 24_000;

/// Operating channel count of the speech backend.
pub const SPEECH_CHANNELS: u16 = 1;

/// Decode an encoded speech payload into a playable buffer.
///
/// Payloads starting with a RIFF tag are parsed as WAV; everything else is
/// treated as raw PCM at the fixed operating rate. Malformed or absent
/// payloads fail with [`AudioError::Decode`].
pub fn decode_payload(payload: &[u8]) -> AudioResult<AudioBuffer> {
    if payload.is_empty() {
        return Err(AudioError::decode("empty audio payload"));
    }
    if payload.len() >= 4 && &payload[..4] == b"RIFF" {
        return decode_wav(payload);
    }
    decode_pcm16(payload)
}

fn decode_pcm16(payload: &[u8]) -> AudioResult<AudioBuffer> {
    if payload.len() % 2 != 0 {
        return Err(AudioError::decode(format!(
            "raw PCM payload has odd byte length: {}",
            payload.len()
        )));
    }

    let samples: Vec<f32> = payload
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]) as f32 / 32_768.0)
        .collect();

    Ok(AudioBuffer::new(samples, SPEECH_SAMPLE_RATE, SPEECH_CHANNELS))
}

fn decode_wav(payload: &[u8]) -> AudioResult<AudioBuffer> {
    let reader = hound::WavReader::new(Cursor::new(payload))
        .map_err(|e| AudioError::decode(format!("invalid WAV payload: {}", e)))?;
    let spec = reader.spec();

    let samples: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Float, 32) => reader
            .into_samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(|e| AudioError::decode(format!("corrupt WAV samples: {}", e)))?,
        (hound::SampleFormat::Int, 16) => reader
            .into_samples::<i16>()
            .map(|s| s.map(|v| v as f32 / 32_768.0))
            .collect::<Result<_, _>>()
            .map_err(|e| AudioError::decode(format!("corrupt WAV samples: {}", e)))?,
        (hound::SampleFormat::Int, bits @ (24 | 32)) => {
            let scale = (1i64 << (bits - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<_, _>>()
                .map_err(|e| AudioError::decode(format!("corrupt WAV samples: {}", e)))?
        }
        (format, bits) => {
            return Err(AudioError::decode(format!(
                "unsupported WAV format: {:?} at {} bits",
                format, bits
            )))
        }
    };

    Ok(AudioBuffer::new(samples, spec.sample_rate, spec.channels))
}
