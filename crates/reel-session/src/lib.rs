//! Generation pipeline orchestrator and session shell for ReelStudio.
//!
//! A [`StudioSession`] owns one generation pipeline at a time: it sequences
//! script generation, fans out to concurrent video and speech generation,
//! assembles the resulting [`reel_models::Movie`] and hands it to the
//! synchronization controller. It also carries the credential-ready gate and
//! the best-effort asset export surface.

pub mod error;
pub mod export;
pub mod logging;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use export::ExportedAssets;
pub use logging::init_tracing;
pub use session::StudioSession;
