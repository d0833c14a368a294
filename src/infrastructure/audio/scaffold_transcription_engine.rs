use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{
    ProviderSegment, ProviderTranscript, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{AudioPayload, TranscriptionMode, TranscriptionTier};

const SCAFFOLD_TURNS: [(&str, &str); 2] = [
    ("A", "This is a scaffold transcript from the first speaker."),
    ("B", "And this is the second speaker answering."),
];

/// Canned two-speaker transcript for running the UI without provider
/// credentials.
pub struct ScaffoldTranscriptionEngine {
    delay: Duration,
}

impl ScaffoldTranscriptionEngine {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TranscriptionEngine for ScaffoldTranscriptionEngine {
    async fn transcribe(
        &self,
        audio: &AudioPayload,
        tier: &TranscriptionTier,
    ) -> Result<ProviderTranscript, TranscriptionError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        tracing::debug!(tier = %tier.name, bytes = audio.len(), "Scaffold transcription");

        let text = SCAFFOLD_TURNS
            .iter()
            .map(|(_, line)| *line)
            .collect::<Vec<_>>()
            .join(" ");

        if tier.mode == TranscriptionMode::Plain {
            return Ok(ProviderTranscript::plain(text));
        }

        let segments = SCAFFOLD_TURNS
            .iter()
            .enumerate()
            .map(|(i, (speaker, line))| ProviderSegment {
                speaker: Some((*speaker).to_string()),
                text: Some((*line).to_string()),
                start: Some(i as f64 * 2.5),
                end: Some((i + 1) as f64 * 2.5),
            })
            .collect();

        Ok(ProviderTranscript { text, segments })
    }
}
