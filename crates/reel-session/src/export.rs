//! Best-effort export of the assembled movie's assets.

use std::path::{Path, PathBuf};

use reel_audio::encode_wav;
use reel_models::Movie;
use tracing::{info, warn};

/// Paths of the artifacts that were actually written.
#[derive(Debug, Default)]
pub struct ExportedAssets {
    /// Saved video stream, if the handle still held bytes and the write
    /// succeeded
    pub video: Option<PathBuf>,
    /// Saved WAV re-encoding of the decoded audio, if present and written
    pub audio: Option<PathBuf>,
}

/// Write the movie's video and audio next to each other under `dir`.
///
/// The two writes are independent and best-effort: a failure on one artifact
/// is logged and does not block the other.
pub fn export_assets(movie: &Movie, dir: &Path) -> ExportedAssets {
    let stem = movie.export_stem();
    let mut exported = ExportedAssets::default();

    match movie.video.as_bytes() {
        Some(bytes) => {
            let path = dir.join(format!("{}.mp4", stem));
            match std::fs::write(&path, bytes) {
                Ok(()) => {
                    info!(path = %path.display(), "video exported");
                    exported.video = Some(path);
                }
                Err(e) => warn!("video export failed: {}", e),
            }
        }
        None => warn!("video export skipped: handle already revoked"),
    }

    if let Some(buffer) = &movie.audio {
        let path = dir.join(format!("{}.wav", stem));
        match encode_wav(buffer).map(|wav| std::fs::write(&path, wav)) {
            Ok(Ok(())) => {
                info!(path = %path.display(), "audio exported");
                exported.audio = Some(path);
            }
            Ok(Err(e)) => warn!("audio export failed: {}", e),
            Err(e) => warn!("audio export failed: {}", e),
        }
    }

    exported
}
