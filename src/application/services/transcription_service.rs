use std::sync::Arc;

use crate::application::ports::{
    LlmClient, ProviderSegment, ProviderTranscript, TranscriptionEngine, TranscriptionError,
};
use crate::application::services::TextRefiner;
use crate::domain::{
    AudioPayload, Segment, TranscriptionMode, TranscriptionResult, TranscriptionTier,
    rotating_speaker_label,
};

pub struct TranscriptionService<E, L>
where
    E: TranscriptionEngine,
    L: LlmClient,
{
    engine: Arc<E>,
    refiner: TextRefiner<L>,
    tiers: Vec<TranscriptionTier>,
}

impl<E, L> TranscriptionService<E, L>
where
    E: TranscriptionEngine,
    L: LlmClient,
{
    pub fn new(engine: Arc<E>, refiner: TextRefiner<L>, tiers: Vec<TranscriptionTier>) -> Self {
        Self {
            engine,
            refiner,
            tiers,
        }
    }

    pub fn tiers(&self) -> &[TranscriptionTier] {
        &self.tiers
    }

    /// Tries each tier in order, at most once, and returns the first success.
    pub async fn transcribe(
        &self,
        audio: &AudioPayload,
    ) -> Result<TranscriptionResult, TranscriptionServiceError> {
        if audio.is_empty() {
            tracing::debug!("Empty audio payload, skipping transcription");
            return Ok(TranscriptionResult::empty());
        }

        let mut last_failure = None;

        for (attempt, tier) in self.tiers.iter().enumerate() {
            tracing::debug!(
                tier = %tier.name,
                model = %tier.model,
                mode = %tier.mode,
                attempt = attempt + 1,
                bytes = audio.len(),
                "Attempting transcription tier"
            );

            match self.engine.transcribe(audio, tier).await {
                Ok(transcript) => {
                    tracing::info!(
                        tier = %tier.name,
                        model = %tier.model,
                        segments = transcript.segments.len(),
                        "Transcription tier succeeded"
                    );
                    return Ok(self.finish(tier, transcript).await);
                }
                Err(e) => {
                    tracing::warn!(
                        tier = %tier.name,
                        model = %tier.model,
                        error = %e,
                        "Transcription tier failed"
                    );
                    last_failure = Some((tier.name.clone(), e));
                }
            }
        }

        match last_failure {
            Some((tier, source)) => Err(TranscriptionServiceError::AllTiersExhausted { tier, source }),
            None => Err(TranscriptionServiceError::NoTiersConfigured),
        }
    }

    async fn finish(
        &self,
        tier: &TranscriptionTier,
        transcript: ProviderTranscript,
    ) -> TranscriptionResult {
        let text = self.refiner.refine(&transcript.text).await;

        let segments = match tier.mode {
            TranscriptionMode::Diarized => label_segments(transcript.segments),
            TranscriptionMode::Plain => vec![Segment::whole_text(text.clone())],
        };

        TranscriptionResult::new(text, segments)
    }
}

fn label_segments(raw: Vec<ProviderSegment>) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(raw.len());
    for segment in raw {
        let speaker = segment
            .speaker
            .unwrap_or_else(|| rotating_speaker_label(segments.len()));
        segments.push(Segment::new(
            speaker,
            segment.text.unwrap_or_default(),
            segment.start.unwrap_or(0.0),
            segment.end.unwrap_or(0.0),
        ));
    }
    segments
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("{source}")]
    AllTiersExhausted {
        tier: String,
        source: TranscriptionError,
    },
    #[error("no transcription tiers configured")]
    NoTiersConfigured,
}
