use async_trait::async_trait;

use crate::domain::{AudioPayload, TranscriptionTier};

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio: &AudioPayload,
        tier: &TranscriptionTier,
    ) -> Result<ProviderTranscript, TranscriptionError>;
}

/// What the provider sent back, before labeling defaults are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderTranscript {
    pub text: String,
    pub segments: Vec<ProviderSegment>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderSegment {
    pub speaker: Option<String>,
    pub text: Option<String>,
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl ProviderTranscript {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            segments: Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
}
