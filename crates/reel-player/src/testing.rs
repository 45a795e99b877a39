//! Recording surface for tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::surface::VideoSurface;

/// Calls recorded by the fake surface, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    SeekToStart,
    Play,
    Pause,
    SetMuted(bool),
}

/// Shared in-order call log.
pub type SurfaceLog = Rc<RefCell<Vec<SurfaceEvent>>>;

/// A [`VideoSurface`] that records calls instead of rendering video.
pub struct FakeSurface {
    log: SurfaceLog,
}

impl FakeSurface {
    /// Create a fake surface and the log it writes into.
    pub fn new() -> (Self, SurfaceLog) {
        let log: SurfaceLog = Rc::new(RefCell::new(Vec::new()));
        (Self { log: Rc::clone(&log) }, log)
    }
}

impl VideoSurface for FakeSurface {
    fn seek_to_start(&mut self) {
        self.log.borrow_mut().push(SurfaceEvent::SeekToStart);
    }

    fn play(&mut self) {
        self.log.borrow_mut().push(SurfaceEvent::Play);
    }

    fn pause(&mut self) {
        self.log.borrow_mut().push(SurfaceEvent::Pause);
    }

    fn set_muted(&mut self, muted: bool) {
        self.log.borrow_mut().push(SurfaceEvent::SetMuted(muted));
    }
}
