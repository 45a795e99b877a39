//! Playback triggers.

/// The triggers that feed the synchronization state machine.
///
/// `Toggle*` come from the custom controls; the `Video*` events are native
/// surface transitions, which may include echoes of the controller's own
/// calls and are therefore guarded against re-entrancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// User pressed the play/pause control
    TogglePlayback,
    /// User pressed the mute control
    ToggleMute,
    /// The video surface reached the end of the clip
    VideoEnded,
    /// The video surface paused (e.g. via native controls)
    VideoPaused,
    /// The video surface started playing (e.g. via native controls)
    VideoPlayed,
}
