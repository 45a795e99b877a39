//! Backend client configuration.

use std::time::Duration;

/// Configuration for the generative backend client.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// API base URL
    pub base_url: String,
    /// Model used for script generation
    pub script_model: String,
    /// Model used for video generation
    pub video_model: String,
    /// Model used for speech synthesis
    pub tts_model: String,
    /// Interval between video operation polls
    pub poll_interval: Duration,
    /// Give up polling a video operation after this long
    pub poll_timeout: Duration,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            script_model: "gemini-2.5-flash".to_string(),
            video_model: "veo-2.0-generate-001".to_string(),
            tts_model: "gemini-2.5-flash-preview-tts".to_string(),
            poll_interval: Duration::from_secs(10),
            poll_timeout: Duration::from_secs(6 * 60),
        }
    }
}

impl StudioConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("REEL_BASE_URL").unwrap_or(defaults.base_url),
            script_model: std::env::var("REEL_SCRIPT_MODEL").unwrap_or(defaults.script_model),
            video_model: std::env::var("REEL_VIDEO_MODEL").unwrap_or(defaults.video_model),
            tts_model: std::env::var("REEL_TTS_MODEL").unwrap_or(defaults.tts_model),
            poll_interval: Duration::from_secs(
                std::env::var("REEL_POLL_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.poll_interval.as_secs()),
            ),
            poll_timeout: Duration::from_secs(
                std::env::var("REEL_POLL_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.poll_timeout.as_secs()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StudioConfig::default();
        assert!(config.base_url.starts_with("https://"));
        assert!(config.poll_interval < config.poll_timeout);
    }
}
