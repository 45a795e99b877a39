//! Playback state shared by the synchronization controller.

use serde::{Deserialize, Serialize};

/// Transient playback flags, decoupled from the Movie's data.
///
/// Resets to its default whenever the bound Movie changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlaybackState {
    /// Whether the movie is currently playing
    pub is_playing: bool,
    /// Whether audio output is muted
    pub is_muted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stopped_and_unmuted() {
        let state = PlaybackState::default();
        assert!(!state.is_playing);
        assert!(!state.is_muted);
    }
}
