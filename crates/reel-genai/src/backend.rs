//! Abstract backend collaborator contract.

use async_trait::async_trait;
use reel_models::{AspectRatio, VoicePreset};

use crate::error::GenAiResult;

/// The generative backend the pipeline orchestrator talks to.
///
/// Concrete transport and auth live behind this trait; the orchestrator only
/// sees the three generation operations and their failure modes.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Turn an idea into a short voiceover script.
    async fn generate_script(&self, idea: &str) -> GenAiResult<String>;

    /// Generate a video clip for the idea and download its bytes.
    ///
    /// May internally poll an asynchronous job to completion before a
    /// downloadable asset exists.
    async fn generate_video(&self, idea: &str, aspect_ratio: AspectRatio)
        -> GenAiResult<Vec<u8>>;

    /// Synthesize speech for the script, returning the raw encoded payload.
    async fn generate_speech(&self, script: &str, voice: VoicePreset) -> GenAiResult<Vec<u8>>;
}
