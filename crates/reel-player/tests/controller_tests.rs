//! Synchronization controller state machine tests.

use reel_audio::testing::{AudioEvent, AudioLog, ScriptedOutput};
use reel_audio::AudioEngine;
use reel_models::{AspectRatio, AudioBuffer, Movie, VideoHandle};
use reel_player::testing::{FakeSurface, SurfaceEvent, SurfaceLog};
use reel_player::{PlayerEvent, SyncController};

fn movie_with_audio() -> Movie {
    Movie::new(
        "A cat cruises down the boardwalk, tail high.",
        VideoHandle::new(vec![0u8; 32], "video/mp4"),
        Some(AudioBuffer::new(vec![0.1; 2_400], 24_000, 1)),
        AspectRatio::Landscape,
    )
}

fn movie_without_audio() -> Movie {
    Movie::new(
        "Silent film.",
        VideoHandle::new(vec![0u8; 32], "video/mp4"),
        None,
        AspectRatio::Portrait,
    )
}

fn bound_controller(movie: Movie) -> (SyncController<FakeSurface>, SurfaceLog, AudioLog) {
    let (output, audio_log) = ScriptedOutput::new();
    let (surface, surface_log) = FakeSurface::new();
    let mut controller = SyncController::new(surface, AudioEngine::new(Box::new(output)));
    controller.bind(Some(movie));
    (controller, surface_log, audio_log)
}

fn count_starts(log: &AudioLog) -> usize {
    log.borrow()
        .iter()
        .filter(|e| matches!(e, AudioEvent::Started { .. }))
        .count()
}

fn count_stops(log: &AudioLog) -> usize {
    log.borrow()
        .iter()
        .filter(|e| **e == AudioEvent::Stopped)
        .count()
}

#[test]
fn toggle_starts_video_from_start_and_audio_together() {
    let (mut controller, surface_log, audio_log) = bound_controller(movie_with_audio());

    controller.handle_event(PlayerEvent::TogglePlayback);

    assert!(controller.state().is_playing);
    assert!(controller.has_live_audio());
    // bind un-mutes the surface, then playback seeks and plays.
    assert_eq!(
        &surface_log.borrow()[..],
        &[
            SurfaceEvent::SetMuted(false),
            SurfaceEvent::SeekToStart,
            SurfaceEvent::Play,
        ]
    );
    assert!(audio_log
        .borrow()
        .contains(&AudioEvent::Started { gain: 1.0 }));
}

#[test]
fn toggle_twice_leaves_both_tracks_stopped() {
    let (mut controller, surface_log, audio_log) = bound_controller(movie_with_audio());

    controller.handle_event(PlayerEvent::TogglePlayback);
    controller.handle_event(PlayerEvent::TogglePlayback);

    assert!(!controller.state().is_playing);
    assert!(!controller.has_live_audio());
    assert!(surface_log.borrow().contains(&SurfaceEvent::Pause));
    assert_eq!(count_stops(&audio_log), 1);
}

#[test]
fn toggle_without_movie_is_noop() {
    let (output, audio_log) = ScriptedOutput::new();
    let (surface, surface_log) = FakeSurface::new();
    let mut controller = SyncController::new(surface, AudioEngine::new(Box::new(output)));

    controller.handle_event(PlayerEvent::TogglePlayback);

    assert!(!controller.state().is_playing);
    assert!(surface_log.borrow().is_empty());
    assert!(audio_log.borrow().is_empty());
}

#[test]
fn video_ended_stops_audio_without_user_pause() {
    let (mut controller, _surface_log, audio_log) = bound_controller(movie_with_audio());

    controller.handle_event(PlayerEvent::TogglePlayback);
    controller.handle_event(PlayerEvent::VideoEnded);

    assert!(!controller.state().is_playing);
    assert!(!controller.has_live_audio());
    assert_eq!(count_stops(&audio_log), 1);
}

#[test]
fn native_pause_acts_once_then_becomes_noop() {
    let (mut controller, _surface_log, audio_log) = bound_controller(movie_with_audio());

    controller.handle_event(PlayerEvent::TogglePlayback);
    controller.handle_event(PlayerEvent::VideoPaused);
    // A duplicate pause event (or an echo of our own pause) changes nothing.
    controller.handle_event(PlayerEvent::VideoPaused);

    assert!(!controller.state().is_playing);
    assert_eq!(count_stops(&audio_log), 1);
}

#[test]
fn native_play_echo_does_not_restart_audio() {
    let (mut controller, _surface_log, audio_log) = bound_controller(movie_with_audio());

    controller.handle_event(PlayerEvent::TogglePlayback);
    // The surface echoes the play we initiated.
    controller.handle_event(PlayerEvent::VideoPlayed);

    assert_eq!(count_starts(&audio_log), 1);
}

#[test]
fn native_play_from_stopped_starts_audio() {
    let (mut controller, _surface_log, audio_log) = bound_controller(movie_with_audio());

    controller.handle_event(PlayerEvent::VideoPlayed);

    assert!(controller.state().is_playing);
    assert_eq!(count_starts(&audio_log), 1);
}

#[test]
fn mute_adjusts_live_gain_without_restarting_source() {
    let (mut controller, surface_log, audio_log) = bound_controller(movie_with_audio());

    controller.handle_event(PlayerEvent::TogglePlayback);
    controller.handle_event(PlayerEvent::ToggleMute);

    assert!(controller.state().is_muted);
    assert_eq!(count_starts(&audio_log), 1);
    assert!(audio_log.borrow().contains(&AudioEvent::GainChanged(0.0)));
    assert!(surface_log.borrow().contains(&SurfaceEvent::SetMuted(true)));

    controller.handle_event(PlayerEvent::ToggleMute);
    assert!(!controller.state().is_muted);
    assert!(audio_log.borrow().contains(&AudioEvent::GainChanged(1.0)));
    assert_eq!(count_starts(&audio_log), 1);
}

#[test]
fn mute_before_playback_starts_audio_at_zero_gain() {
    let (mut controller, _surface_log, audio_log) = bound_controller(movie_with_audio());

    controller.handle_event(PlayerEvent::ToggleMute);
    controller.handle_event(PlayerEvent::TogglePlayback);

    assert!(audio_log
        .borrow()
        .contains(&AudioEvent::Started { gain: 0.0 }));
}

#[test]
fn movie_without_audio_plays_video_only() {
    let (mut controller, surface_log, audio_log) = bound_controller(movie_without_audio());

    controller.handle_event(PlayerEvent::TogglePlayback);

    assert!(controller.state().is_playing);
    assert!(!controller.has_live_audio());
    assert_eq!(count_starts(&audio_log), 0);
    assert!(surface_log.borrow().contains(&SurfaceEvent::Play));
}

#[test]
fn audio_start_failure_degrades_to_video_only() {
    let (output, audio_log) = ScriptedOutput::new();
    output.fail_next_start();
    let (surface, _surface_log) = FakeSurface::new();
    let mut controller = SyncController::new(surface, AudioEngine::new(Box::new(output)));
    controller.bind(Some(movie_with_audio()));

    controller.handle_event(PlayerEvent::TogglePlayback);

    assert!(controller.state().is_playing);
    assert!(!controller.has_live_audio());
    assert_eq!(count_starts(&audio_log), 0);
}

#[test]
fn rebinding_stops_audio_and_resets_state() {
    let (mut controller, _surface_log, audio_log) = bound_controller(movie_with_audio());

    controller.handle_event(PlayerEvent::TogglePlayback);
    controller.handle_event(PlayerEvent::ToggleMute);
    controller.bind(Some(movie_without_audio()));

    assert!(!controller.state().is_playing);
    assert!(!controller.state().is_muted);
    assert!(!controller.has_live_audio());
    assert_eq!(count_stops(&audio_log), 1);
    assert_eq!(controller.movie().unwrap().script, "Silent film.");
}

#[test]
fn rebinding_returns_the_previous_movie_released_once() {
    let (mut controller, _surface_log, _audio_log) = bound_controller(movie_with_audio());

    let mut previous = controller.bind(Some(movie_without_audio())).unwrap();

    assert!(previous.video.is_revoked());
    // The handle was already released during the rebind.
    assert!(!previous.release());
    assert!(controller.bind(None).is_some());
    assert!(controller.bind(None).is_none());
}

#[test]
fn drop_stops_live_audio() {
    let (mut controller, _surface_log, audio_log) = bound_controller(movie_with_audio());

    controller.handle_event(PlayerEvent::TogglePlayback);
    drop(controller);

    assert_eq!(count_stops(&audio_log), 1);
}
