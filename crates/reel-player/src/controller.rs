//! The synchronization state machine.

use reel_audio::{AudioEngine, PlaybackHandle};
use reel_models::{Movie, PlaybackState};
use tracing::{debug, warn};

use crate::event::PlayerEvent;
use crate::surface::VideoSurface;

/// Keeps the bound Movie's video surface and audio playback in lockstep.
///
/// Audio and video are started at the same instant from offset 0 and then
/// left to run; drift between tracks of different duration is accepted by
/// design, with no mid-playback resynchronization.
pub struct SyncController<S: VideoSurface> {
    surface: S,
    engine: AudioEngine,
    movie: Option<Movie>,
    state: PlaybackState,
    audio: Option<PlaybackHandle>,
}

impl<S: VideoSurface> SyncController<S> {
    pub fn new(surface: S, engine: AudioEngine) -> Self {
        Self {
            surface,
            engine,
            movie: None,
            state: PlaybackState::default(),
            audio: None,
        }
    }

    /// Bind a new Movie (or none), tearing the previous one down.
    ///
    /// Stops any live audio, releases the old movie's video handle and resets
    /// playback state; the surface is un-muted to match. The replaced movie
    /// is returned already released, so callers can observe the teardown.
    pub fn bind(&mut self, movie: Option<Movie>) -> Option<Movie> {
        self.stop_audio();
        let previous = self.movie.take().map(|mut old| {
            old.release();
            debug!(movie = %old.id, "previous movie released");
            old
        });
        self.state = PlaybackState::default();
        self.surface.set_muted(false);
        self.movie = movie;
        previous
    }

    /// The currently bound Movie.
    pub fn movie(&self) -> Option<&Movie> {
        self.movie.as_ref()
    }

    /// Current playback flags.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether an audio handle is currently live.
    pub fn has_live_audio(&self) -> bool {
        self.audio.is_some()
    }

    /// The surface being driven (primarily for tests and embedding glue).
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Feed one trigger through the transition function.
    ///
    /// All four origins (user toggle, video ended/paused/played) converge
    /// here; native events that already agree with tracked state are no-ops,
    /// which breaks the feedback loop when the surface echoes the
    /// controller's own play/pause calls.
    pub fn handle_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::TogglePlayback => {
                if self.state.is_playing {
                    self.surface.pause();
                    self.stop_audio();
                    self.state.is_playing = false;
                } else if self.movie.is_some() {
                    self.surface.seek_to_start();
                    self.surface.play();
                    self.start_audio();
                    self.state.is_playing = true;
                } else {
                    debug!("playback toggle ignored: no movie bound");
                }
            }
            PlayerEvent::VideoEnded => {
                // Terminal for this playback: no auto-loop.
                self.stop_audio();
                self.state.is_playing = false;
            }
            PlayerEvent::VideoPaused => {
                if self.state.is_playing {
                    self.stop_audio();
                    self.state.is_playing = false;
                }
            }
            PlayerEvent::VideoPlayed => {
                if !self.state.is_playing && self.movie.is_some() {
                    self.start_audio();
                    self.state.is_playing = true;
                }
            }
            PlayerEvent::ToggleMute => {
                self.state.is_muted = !self.state.is_muted;
                if let Some(handle) = &mut self.audio {
                    handle.set_muted(self.state.is_muted);
                }
                self.surface.set_muted(self.state.is_muted);
            }
        }
    }

    /// Start a fresh audio source for the bound movie, stopping any previous
    /// handle first so the old source cannot keep sounding untracked.
    fn start_audio(&mut self) {
        self.stop_audio();
        let muted = self.state.is_muted;
        let Some(buffer) = self.movie.as_ref().and_then(|m| m.audio.as_ref()) else {
            // Movies without an audio track play video-only.
            return;
        };
        match self.engine.play(buffer, muted) {
            Ok(handle) => self.audio = Some(handle),
            Err(e) => {
                // Playback of a bound movie must not abort; degrade to
                // video-only.
                warn!("audio playback unavailable: {}", e);
            }
        }
    }

    fn stop_audio(&mut self) {
        if let Some(mut handle) = self.audio.take() {
            handle.stop();
        }
    }
}

impl<S: VideoSurface> Drop for SyncController<S> {
    fn drop(&mut self) {
        self.stop_audio();
        if let Some(mut movie) = self.movie.take() {
            movie.release();
        }
    }
}
