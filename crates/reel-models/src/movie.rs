//! The assembled Movie record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::aspect::AspectRatio;
use crate::audio_buffer::AudioBuffer;
use crate::video_handle::VideoHandle;

/// Unique movie identifier, created at assembly time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieId(Uuid);

impl MovieId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One generation pipeline result: script, video and synthesized speech.
///
/// A Movie is only assembled after both filming-phase requests have resolved;
/// there is never a partially-populated instance. It is owned exclusively by
/// the current session and is not `Clone`: the video handle must be revoked
/// exactly once when the Movie is replaced or discarded.
#[derive(Debug)]
pub struct Movie {
    /// Unique movie identifier
    pub id: MovieId,
    /// When the movie was assembled
    pub created_at: DateTime<Utc>,
    /// Generated voiceover script
    pub script: String,
    /// Downloaded video stream, owned and revocable
    pub video: VideoHandle,
    /// Decoded speech audio, absent when the movie has no audio track
    pub audio: Option<AudioBuffer>,
    /// Aspect ratio fixed at generation request time
    pub aspect_ratio: AspectRatio,
}

impl Movie {
    /// Assemble a movie from resolved pipeline outputs.
    pub fn new(
        script: impl Into<String>,
        video: VideoHandle,
        audio: Option<AudioBuffer>,
        aspect_ratio: AspectRatio,
    ) -> Self {
        Self {
            id: MovieId::new(),
            created_at: Utc::now(),
            script: script.into(),
            video,
            audio,
            aspect_ratio,
        }
    }

    /// Release the owned video stream.
    ///
    /// Returns `true` if this call performed the release.
    pub fn release(&mut self) -> bool {
        self.video.revoke()
    }

    /// Filename stem shared by the exported assets.
    pub fn export_stem(&self) -> String {
        format!("movie-{}-{}", self.aspect_ratio.as_filename_part(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movie() -> Movie {
        Movie::new(
            "A cat cruises down the boardwalk, tail high.",
            VideoHandle::new(vec![0u8; 64], "video/mp4"),
            Some(AudioBuffer::new(vec![0.0; 2400], 24_000, 1)),
            AspectRatio::Landscape,
        )
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(sample_movie().id, sample_movie().id);
    }

    #[test]
    fn test_release_revokes_video() {
        let mut movie = sample_movie();
        assert!(movie.release());
        assert!(movie.video.is_revoked());
        assert!(!movie.release());
    }

    #[test]
    fn test_export_stem_uses_aspect_and_id() {
        let movie = sample_movie();
        assert_eq!(movie.export_stem(), format!("movie-landscape-{}", movie.id));
    }
}
