//! Generation pipeline status for progress tracking.
//!
//! A single live `GenerationStatus` drives the UI affordances: regeneration
//! is disabled while the pipeline is busy, and the status message is the only
//! externally observable progress signal.

use serde::{Deserialize, Serialize};

/// Pipeline processing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    /// No pipeline run has started (or the last one was cleared)
    #[default]
    Idle,
    /// Script generation in flight
    Scripting,
    /// Video and speech generation in flight
    Filming,
    /// Movie assembled successfully
    Complete,
    /// Pipeline run failed
    Error,
}

impl GenerationPhase {
    /// Get string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationPhase::Idle => "idle",
            GenerationPhase::Scripting => "scripting",
            GenerationPhase::Filming => "filming",
            GenerationPhase::Complete => "complete",
            GenerationPhase::Error => "error",
        }
    }

    /// Check if a pipeline run is currently in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, GenerationPhase::Scripting | GenerationPhase::Filming)
    }

    /// Check if this is a terminal phase (no more updates expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationPhase::Complete | GenerationPhase::Error)
    }
}

impl std::fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tagged pipeline state with an optional human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenerationStatus {
    /// Current phase
    pub phase: GenerationPhase,
    /// Progress message or error string
    pub message: Option<String>,
}

impl GenerationStatus {
    /// Status before any pipeline run.
    pub fn idle() -> Self {
        Self {
            phase: GenerationPhase::Idle,
            message: None,
        }
    }

    /// Status while the script is being written.
    pub fn scripting(message: impl Into<String>) -> Self {
        Self {
            phase: GenerationPhase::Scripting,
            message: Some(message.into()),
        }
    }

    /// Status while video and speech are being generated.
    pub fn filming(message: impl Into<String>) -> Self {
        Self {
            phase: GenerationPhase::Filming,
            message: Some(message.into()),
        }
    }

    /// Status after a Movie has been assembled.
    pub fn complete() -> Self {
        Self {
            phase: GenerationPhase::Complete,
            message: None,
        }
    }

    /// Status after a pipeline failure.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            phase: GenerationPhase::Error,
            message: Some(message.into()),
        }
    }

    /// Check if a pipeline run is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_phases() {
        assert!(!GenerationStatus::idle().is_busy());
        assert!(GenerationStatus::scripting("Writing script...").is_busy());
        assert!(GenerationStatus::filming("Filming...").is_busy());
        assert!(!GenerationStatus::complete().is_busy());
        assert!(!GenerationStatus::error("boom").is_busy());
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GenerationPhase::Complete.is_terminal());
        assert!(GenerationPhase::Error.is_terminal());
        assert!(!GenerationPhase::Filming.is_terminal());
    }

    #[test]
    fn test_error_carries_message() {
        let status = GenerationStatus::error("video generation failed");
        assert_eq!(status.phase, GenerationPhase::Error);
        assert_eq!(status.message.as_deref(), Some("video generation failed"));
    }
}
