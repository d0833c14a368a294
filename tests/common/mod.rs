#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use koegaki::application::ports::{
    LlmClient, LlmClientError, ProviderSegment, ProviderTranscript, TranscriptionEngine,
    TranscriptionError,
};
use koegaki::application::services::{TextRefiner, TranscriptionService};
use koegaki::domain::{AudioPayload, TranscriptionTier};

#[derive(Clone)]
pub enum TierOutcome {
    Succeed(ProviderTranscript),
    Fail(&'static str),
}

/// Engine whose answer per tier name is fixed up front. Unscripted tiers fail.
#[derive(Default)]
pub struct ScriptedEngine {
    outcomes: HashMap<String, TierOutcome>,
    calls: Mutex<Vec<(String, usize)>>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, tier: &str, outcome: TierOutcome) -> Self {
        self.outcomes.insert(tier.to_string(), outcome);
        self
    }

    /// Tier names attempted, with the number of audio bytes each one saw.
    pub fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn attempted_tiers(&self) -> Vec<String> {
        self.calls().into_iter().map(|(name, _)| name).collect()
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for ScriptedEngine {
    async fn transcribe(
        &self,
        audio: &AudioPayload,
        tier: &TranscriptionTier,
    ) -> Result<ProviderTranscript, TranscriptionError> {
        self.calls
            .lock()
            .unwrap()
            .push((tier.name.clone(), audio.bytes().len()));

        match self.outcomes.get(&tier.name) {
            Some(TierOutcome::Succeed(transcript)) => Ok(transcript.clone()),
            Some(TierOutcome::Fail(message)) => {
                Err(TranscriptionError::ApiRequestFailed(message.to_string()))
            }
            None => Err(TranscriptionError::ApiRequestFailed(format!(
                "{} unavailable",
                tier.name
            ))),
        }
    }
}

pub struct FakeLlm {
    reply: Option<String>,
    prompts: Mutex<Vec<(String, String)>>,
}

impl FakeLlm {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl LlmClient for FakeLlm {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, LlmClientError> {
        self.prompts
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        self.reply
            .clone()
            .ok_or_else(|| LlmClientError::ApiRequestFailed("HTTP 500: boom".to_string()))
    }
}

pub fn segment(speaker: Option<&str>, text: &str, start: f64, end: f64) -> ProviderSegment {
    ProviderSegment {
        speaker: speaker.map(str::to_string),
        text: Some(text.to_string()),
        start: Some(start),
        end: Some(end),
    }
}

pub fn diarized(text: &str, segments: Vec<ProviderSegment>) -> TierOutcome {
    TierOutcome::Succeed(ProviderTranscript {
        text: text.to_string(),
        segments,
    })
}

pub fn plain(text: &str) -> TierOutcome {
    TierOutcome::Succeed(ProviderTranscript::plain(text))
}

pub fn service(
    engine: Arc<ScriptedEngine>,
    llm: Arc<FakeLlm>,
) -> TranscriptionService<ScriptedEngine, FakeLlm> {
    TranscriptionService::new(
        engine,
        TextRefiner::new(llm, "Japanese"),
        TranscriptionTier::default_plan(),
    )
}

pub fn audio(bytes: &[u8]) -> AudioPayload {
    AudioPayload::new(bytes.to_vec(), Some("audio.webm"), Some("audio/webm"))
}

pub const BOUNDARY: &str = "koegaki-test-boundary";

pub struct FormPart<'a> {
    pub name: &'a str,
    pub filename: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: &'a [u8],
}

impl<'a> FormPart<'a> {
    pub fn file(name: &'a str, filename: &'a str, data: &'a [u8]) -> Self {
        Self {
            name,
            filename: Some(filename),
            content_type: Some("audio/webm"),
            data,
        }
    }

    pub fn text(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            filename: None,
            content_type: None,
            data: value.as_bytes(),
        }
    }
}

pub fn multipart_body(parts: &[FormPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.name);
        if let Some(filename) = part.filename {
            disposition.push_str(&format!("; filename=\"{}\"", filename));
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}
