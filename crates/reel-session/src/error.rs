//! Session error types.

use thiserror::Error;

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No movie to export")]
    NoMovie,

    #[error("Credential error: {0}")]
    Credential(#[from] reel_genai::GenAiError),
}
