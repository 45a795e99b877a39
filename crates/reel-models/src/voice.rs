//! Voice presets for speech synthesis.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prebuilt narrator voices offered by the speech backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VoicePreset {
    /// Bright, upbeat narrator
    #[default]
    Zephyr,
    /// Playful and energetic
    Puck,
    /// Deep and deliberate
    Charon,
    /// Warm and even
    Kore,
    /// Gravelly and dramatic
    Fenrir,
}

impl VoicePreset {
    /// All available voice presets.
    pub const ALL: &'static [VoicePreset] = &[
        VoicePreset::Zephyr,
        VoicePreset::Puck,
        VoicePreset::Charon,
        VoicePreset::Kore,
        VoicePreset::Fenrir,
    ];

    /// The voice name the speech API expects.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            VoicePreset::Zephyr => "Zephyr",
            VoicePreset::Puck => "Puck",
            VoicePreset::Charon => "Charon",
            VoicePreset::Kore => "Kore",
            VoicePreset::Fenrir => "Fenrir",
        }
    }
}

impl fmt::Display for VoicePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_api_str())
    }
}

impl FromStr for VoicePreset {
    type Err = VoicePresetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zephyr" => Ok(VoicePreset::Zephyr),
            "puck" => Ok(VoicePreset::Puck),
            "charon" => Ok(VoicePreset::Charon),
            "kore" => Ok(VoicePreset::Kore),
            "fenrir" => Ok(VoicePreset::Fenrir),
            _ => Err(VoicePresetParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown voice preset: {0}")]
pub struct VoicePresetParseError(String);
