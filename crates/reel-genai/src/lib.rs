//! Generative backend client for ReelStudio.
//!
//! Talks to a Gemini-style REST surface: text generation for scripts,
//! long-running video generation polled to completion, and speech synthesis
//! returning inline base64 PCM. The pipeline orchestrator consumes this crate
//! through the [`GenerationBackend`] trait so tests can script the backend.

pub mod backend;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
mod prompts;

pub use backend::GenerationBackend;
pub use client::StudioClient;
pub use config::StudioConfig;
pub use credentials::{CredentialGate, EnvKeyGate};
pub use error::{GenAiError, GenAiResult};
