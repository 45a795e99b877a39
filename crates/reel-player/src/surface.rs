//! Abstract video playback surface.

/// The video element the embedding UI renders the movie into.
///
/// The surface reports its native transitions back to the controller as
/// [`crate::PlayerEvent`]s; the controller drives it through these calls.
pub trait VideoSurface {
    /// Seek the video back to offset 0.
    fn seek_to_start(&mut self);

    /// Start or resume video playback.
    fn play(&mut self);

    /// Pause video playback.
    fn pause(&mut self);

    /// Mirror the mute flag onto the video element, in case the clip ever
    /// carries its own audio track.
    fn set_muted(&mut self, muted: bool);
}
