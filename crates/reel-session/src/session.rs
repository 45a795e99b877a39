//! The studio session: one pipeline run and one bound movie at a time.

use std::path::Path;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use reel_audio::{decode_payload, AudioEngine};
use reel_genai::{CredentialGate, GenAiError, GenAiResult, GenerationBackend};
use reel_models::{AspectRatio, GenerationStatus, Movie, VideoHandle, VoicePreset};
use reel_player::{SyncController, VideoSurface};

use crate::error::{SessionError, SessionResult};
use crate::export::{export_assets, ExportedAssets};

/// Error shown when a failure looks like a credential/entitlement rejection.
const CREDENTIAL_ERROR_MESSAGE: &str =
    "Your API credential could not be used. Re-select a credential and try again.";

/// Owns the generation pipeline, the credential gate and the bound movie.
pub struct StudioSession<B, S>
where
    B: GenerationBackend + 'static,
    S: VideoSurface,
{
    backend: Arc<B>,
    gate: Box<dyn CredentialGate>,
    controller: SyncController<S>,
    status: GenerationStatus,
    credential_ready: bool,
}

impl<B, S> StudioSession<B, S>
where
    B: GenerationBackend + 'static,
    S: VideoSurface,
{
    pub fn new(
        backend: B,
        gate: Box<dyn CredentialGate>,
        surface: S,
        engine: AudioEngine,
    ) -> Self {
        Self {
            backend: Arc::new(backend),
            gate,
            controller: SyncController::new(surface, engine),
            status: GenerationStatus::idle(),
            credential_ready: false,
        }
    }

    /// Current pipeline status, the only externally observable progress
    /// signal.
    pub fn status(&self) -> &GenerationStatus {
        &self.status
    }

    /// The movie assembled by the last successful run, if any.
    pub fn movie(&self) -> Option<&Movie> {
        self.controller.movie()
    }

    /// Playback controller for the bound movie.
    pub fn controller(&self) -> &SyncController<S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SyncController<S> {
        &mut self.controller
    }

    /// Whether a usable credential has been confirmed.
    pub fn credential_ready(&self) -> bool {
        self.credential_ready
    }

    /// Confirm a credential through the gate, prompting if needed.
    pub fn confirm_credential(&mut self) -> SessionResult<()> {
        self.gate.prompt().map_err(SessionError::Credential)?;
        self.credential_ready = self.gate.ready();
        Ok(())
    }

    /// Run the full pipeline: script, then video and speech concurrently,
    /// then assemble and bind the movie.
    ///
    /// Empty ideas, an in-flight pipeline and a missing credential are all
    /// silent no-ops; every other outcome lands in [`Self::status`].
    pub async fn generate(&mut self, idea: &str, aspect_ratio: AspectRatio, voice: VoicePreset) {
        let idea = idea.trim();
        if idea.is_empty() {
            debug!("ignoring empty idea");
            return;
        }
        if self.status.is_busy() {
            warn!(phase = %self.status.phase, "generation already in flight");
            return;
        }
        if !self.credential_ready {
            warn!("generation blocked: no credential confirmed");
            return;
        }

        // Release the previous movie up front so its video bytes are not
        // held across the new attempt.
        self.controller.bind(None);

        info!(%aspect_ratio, %voice, "pipeline started");
        self.status = GenerationStatus::scripting("Writing the script...");

        let script = match self.backend.generate_script(idea).await {
            Ok(script) => script,
            Err(e) => return self.fail(e),
        };

        self.status = GenerationStatus::filming("Filming and recording narration...");

        // Both requests run as detached tasks: a failure on one surfaces
        // immediately while the sibling is left to run to completion on its
        // own, and the movie is only assembled once both have succeeded.
        let video_task = {
            let backend = Arc::clone(&self.backend);
            let idea = idea.to_string();
            tokio::spawn(async move { backend.generate_video(&idea, aspect_ratio).await })
        };
        let speech_task = {
            let backend = Arc::clone(&self.backend);
            let script = script.clone();
            tokio::spawn(async move { backend.generate_speech(&script, voice).await })
        };

        let (video_bytes, speech_payload) =
            match tokio::try_join!(flatten(video_task), flatten(speech_task)) {
                Ok(outputs) => outputs,
                Err(e) => return self.fail(e),
            };

        let audio = match decode_payload(&speech_payload) {
            Ok(buffer) => buffer,
            Err(e) => return self.fail(GenAiError::generation(e.to_string())),
        };

        let movie = Movie::new(
            script,
            VideoHandle::new(video_bytes, "video/mp4"),
            Some(audio),
            aspect_ratio,
        );
        info!(movie = %movie.id, "pipeline complete");
        self.controller.bind(Some(movie));
        self.status = GenerationStatus::complete();
    }

    /// Export the bound movie's assets into `dir`, best-effort per artifact.
    pub fn export_assets(&self, dir: &Path) -> SessionResult<ExportedAssets> {
        let movie = self.controller.movie().ok_or(SessionError::NoMovie)?;
        Ok(export_assets(movie, dir))
    }

    fn fail(&mut self, error: GenAiError) {
        if error.is_authorization() {
            warn!("authorization failure: {}", error);
            self.credential_ready = false;
            self.status = GenerationStatus::error(CREDENTIAL_ERROR_MESSAGE);
        } else {
            warn!("pipeline failed: {}", error);
            self.status = GenerationStatus::error(error.to_string());
        }
    }
}

async fn flatten<T>(handle: JoinHandle<GenAiResult<T>>) -> GenAiResult<T> {
    match handle.await {
        Ok(result) => result,
        Err(e) => Err(GenAiError::generation(format!(
            "generation task aborted: {}",
            e
        ))),
    }
}
