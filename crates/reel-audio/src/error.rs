//! Audio error types.

use thiserror::Error;

pub type AudioResult<T> = Result<T, AudioError>;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Audio decode failed: {0}")]
    Decode(String),

    #[error("WAV encode failed: {0}")]
    Encode(String),

    #[error("Audio output failed: {0}")]
    Output(String),
}

impl AudioError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}
