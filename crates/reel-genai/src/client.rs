//! HTTP client for the Gemini-style generation API.

use std::time::Instant;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use reel_models::{AspectRatio, VoicePreset};

use crate::backend::GenerationBackend;
use crate::config::StudioConfig;
use crate::error::{GenAiError, GenAiResult};
use crate::prompts::build_script_prompt;

/// Client for script, video and speech generation.
pub struct StudioClient {
    api_key: String,
    config: StudioConfig,
    client: Client,
}

/// generateContent request.
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseModalities", skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
    #[serde(rename = "speechConfig", skip_serializing_if = "Option::is_none")]
    speech_config: Option<SpeechConfig>,
}

#[derive(Debug, Serialize)]
struct SpeechConfig {
    #[serde(rename = "voiceConfig")]
    voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
struct VoiceConfig {
    #[serde(rename = "prebuiltVoiceConfig")]
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
struct PrebuiltVoiceConfig {
    #[serde(rename = "voiceName")]
    voice_name: String,
}

/// generateContent response.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: String,
}

/// predictLongRunning request.
#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<VideoInstance>,
    parameters: VideoParameters,
}

#[derive(Debug, Serialize)]
struct VideoInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
struct VideoParameters {
    #[serde(rename = "aspectRatio")]
    aspect_ratio: String,
    #[serde(rename = "numberOfVideos")]
    number_of_videos: u32,
}

/// Long-running operation envelope.
#[derive(Debug, Deserialize)]
struct Operation {
    name: String,
    #[serde(default)]
    done: bool,
    error: Option<OperationError>,
    response: Option<OperationResponse>,
}

#[derive(Debug, Deserialize)]
struct OperationError {
    #[serde(default)]
    code: i32,
    message: String,
}

#[derive(Debug, Deserialize)]
struct OperationResponse {
    #[serde(rename = "generateVideoResponse")]
    generate_video_response: Option<GenerateVideoResponse>,
}

#[derive(Debug, Deserialize)]
struct GenerateVideoResponse {
    #[serde(rename = "generatedSamples", default)]
    generated_samples: Vec<GeneratedSample>,
}

#[derive(Debug, Deserialize)]
struct GeneratedSample {
    video: Option<VideoRef>,
}

#[derive(Debug, Deserialize)]
struct VideoRef {
    uri: Option<String>,
}

impl StudioClient {
    /// Create a client with the default configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, StudioConfig::default())
    }

    /// Create a client with an explicit configuration.
    pub fn with_config(api_key: impl Into<String>, config: StudioConfig) -> Self {
        Self {
            api_key: api_key.into(),
            config,
            client: Client::new(),
        }
    }

    /// Create a client from `GEMINI_API_KEY` and env configuration.
    pub fn from_env() -> GenAiResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GenAiError::credential("GEMINI_API_KEY not set"))?;
        Ok(Self::with_config(api_key, StudioConfig::from_env()))
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GenAiResult<GenerateContentResponse> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, model, self.api_key
        );

        let response = self.client.post(&url).json(request).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn poll_operation(&self, name: &str) -> GenAiResult<Operation> {
        let started = Instant::now();
        loop {
            tokio::time::sleep(self.config.poll_interval).await;
            if started.elapsed() > self.config.poll_timeout {
                return Err(GenAiError::generation(format!(
                    "video generation timed out after {:?}",
                    self.config.poll_timeout
                )));
            }

            let url = format!("{}/{}?key={}", self.config.base_url, name, self.api_key);
            let response = self.client.get(&url).send().await?;
            let response = check_status(response).await?;
            let operation: Operation = response.json().await?;

            if operation.done {
                return Ok(operation);
            }
            debug!(operation = %operation.name, "video operation still running");
        }
    }

    async fn download_video(&self, uri: &str) -> GenAiResult<Vec<u8>> {
        // The asset endpoint requires the same key as the API calls.
        let mut url = Url::parse(uri)
            .map_err(|e| GenAiError::invalid_response(format!("bad video uri: {}", e)))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(GenAiError::missing_payload("video download was empty"));
        }
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl GenerationBackend for StudioClient {
    async fn generate_script(&self, idea: &str) -> GenAiResult<String> {
        info!(model = %self.config.script_model, "generating script");

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_script_prompt(idea),
                }],
            }],
            generation_config: None,
        };

        let response = self
            .generate_content(&self.config.script_model, &request)
            .await?;

        let text = response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .and_then(|p| p.text.as_deref())
            .ok_or_else(|| GenAiError::missing_payload("no text in script response"))?;

        let script = strip_markdown_fences(text).to_string();
        if script.is_empty() {
            return Err(GenAiError::missing_payload("script response was empty"));
        }
        info!(chars = script.len(), "script generated");
        Ok(script)
    }

    async fn generate_video(
        &self,
        idea: &str,
        aspect_ratio: AspectRatio,
    ) -> GenAiResult<Vec<u8>> {
        info!(model = %self.config.video_model, %aspect_ratio, "generating video");

        let url = format!(
            "{}/models/{}:predictLongRunning?key={}",
            self.config.base_url, self.config.video_model, self.api_key
        );
        let request = PredictRequest {
            instances: vec![VideoInstance {
                prompt: idea.to_string(),
            }],
            parameters: VideoParameters {
                aspect_ratio: aspect_ratio.as_api_str().to_string(),
                number_of_videos: 1,
            },
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let response = check_status(response).await?;
        let operation: Operation = response.json().await?;

        let operation = if operation.done {
            operation
        } else {
            self.poll_operation(&operation.name).await?
        };

        if let Some(error) = operation.error {
            warn!(code = error.code, "video operation failed");
            return Err(GenAiError::classify_message(error.message));
        }

        let uri = operation
            .response
            .and_then(|r| r.generate_video_response)
            .and_then(|r| r.generated_samples.into_iter().next())
            .and_then(|s| s.video)
            .and_then(|v| v.uri)
            .ok_or_else(|| {
                GenAiError::missing_payload("video generation finished but returned no asset")
            })?;

        let bytes = self.download_video(&uri).await?;
        info!(bytes = bytes.len(), "video downloaded");
        Ok(bytes)
    }

    async fn generate_speech(&self, script: &str, voice: VoicePreset) -> GenAiResult<Vec<u8>> {
        info!(model = %self.config.tts_model, %voice, "synthesizing speech");

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: script.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: voice.as_api_str().to_string(),
                        },
                    },
                }),
            }),
        };

        let response = self
            .generate_content(&self.config.tts_model, &request)
            .await?;

        let data = response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .and_then(|p| p.inline_data.as_ref())
            .map(|d| d.data.as_str())
            .ok_or_else(|| GenAiError::missing_payload("no audio payload in speech response"))?;

        let payload = BASE64
            .decode(data)
            .map_err(|e| GenAiError::invalid_response(format!("bad audio base64: {}", e)))?;
        info!(bytes = payload.len(), "speech synthesized");
        Ok(payload)
    }
}

async fn check_status(response: reqwest::Response) -> GenAiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GenAiError::from_api(status.as_u16(), &body))
}

/// Strip the markdown code fences models occasionally wrap text in.
fn strip_markdown_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix("```json").unwrap_or(text);
    let text = text.strip_prefix("```").unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}
