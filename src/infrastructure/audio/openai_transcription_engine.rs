use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{
    ProviderSegment, ProviderTranscript, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{AudioPayload, TranscriptionMode, TranscriptionTier};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiTranscriptionEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiTranscriptionEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    fn build_form(
        &self,
        audio: &AudioPayload,
        tier: &TranscriptionTier,
    ) -> Result<multipart::Form, TranscriptionError> {
        let file_part = multipart::Part::bytes(audio.bytes().to_vec())
            .file_name(audio.filename().to_string())
            .mime_str(audio.content_type())
            .map_err(|e| TranscriptionError::UnsupportedFormat(format!("mime: {}", e)))?;

        let mut form = multipart::Form::new()
            .text("model", tier.model.clone())
            .part("file", file_part);

        form = match tier.mode {
            TranscriptionMode::Diarized => form
                .text("response_format", "diarized_json")
                .text("chunking_strategy", "auto"),
            TranscriptionMode::Plain => form.text("response_format", "json"),
        };

        if let Some(language) = &tier.language {
            form = form.text("language", language.clone());
        }

        Ok(form)
    }
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    segments: Option<Vec<DiarizedSegment>>,
}

#[derive(Deserialize)]
struct DiarizedSegment {
    #[serde(default)]
    speaker: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    start: Option<f64>,
    #[serde(default)]
    end: Option<f64>,
}

impl From<DiarizedSegment> for ProviderSegment {
    fn from(segment: DiarizedSegment) -> Self {
        Self {
            speaker: segment.speaker,
            text: segment.text,
            start: segment.start,
            end: segment.end,
        }
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiTranscriptionEngine {
    async fn transcribe(
        &self,
        audio: &AudioPayload,
        tier: &TranscriptionTier,
    ) -> Result<ProviderTranscript, TranscriptionError> {
        let url = format!("{}/audio/transcriptions", self.base_url);
        let form = self.build_form(audio, tier)?;

        tracing::debug!(
            model = %tier.model,
            mode = %tier.mode,
            filename = %audio.filename(),
            bytes = audio.len(),
            "Sending audio to OpenAI transcription API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranscriptionError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("parse response: {}", e)))?;

        let text = result.text.unwrap_or_default();
        let segments = match tier.mode {
            TranscriptionMode::Diarized => result
                .segments
                .unwrap_or_default()
                .into_iter()
                .map(ProviderSegment::from)
                .collect(),
            TranscriptionMode::Plain => Vec::new(),
        };

        tracing::info!(
            model = %tier.model,
            chars = text.chars().count(),
            segments = segments.len(),
            "OpenAI transcription completed"
        );

        Ok(ProviderTranscript { text, segments })
    }
}
