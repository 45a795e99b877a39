//! Aspect ratio definitions for generated video.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Aspect ratio of a generated clip, fixed at generation request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AspectRatio {
    /// Widescreen 16:9
    #[default]
    Landscape,
    /// Vertical 9:16
    Portrait,
}

impl AspectRatio {
    /// All available aspect ratios.
    pub const ALL: &'static [AspectRatio] = &[AspectRatio::Landscape, AspectRatio::Portrait];

    /// The ratio string the generation API expects.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
        }
    }

    /// Returns the ratio name as used in filenames.
    pub fn as_filename_part(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "landscape",
            AspectRatio::Portrait => "portrait",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_api_str())
    }
}

impl FromStr for AspectRatio {
    type Err = AspectRatioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "landscape" | "16:9" => Ok(AspectRatio::Landscape),
            "portrait" | "9:16" => Ok(AspectRatio::Portrait),
            _ => Err(AspectRatioParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown aspect ratio: {0}")]
pub struct AspectRatioParseError(String);
