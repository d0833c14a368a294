use serde::Serialize;

/// Label used when a tier cannot tell speakers apart.
pub const GENERIC_SPEAKER_LABEL: &str = "Speaker";

const ROTATING_SPEAKER_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub speaker: String,
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl Segment {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            start,
            end,
        }
    }

    /// A single segment covering the whole transcript, used by tiers
    /// without speaker separation.
    pub fn whole_text(text: impl Into<String>) -> Self {
        Self::new(GENERIC_SPEAKER_LABEL, text, 0.0, 0.0)
    }
}

/// Label for a diarized segment the provider returned without a speaker,
/// given how many segments were collected before it.
pub fn rotating_speaker_label(collected: usize) -> String {
    format!("Speaker {}", collected % ROTATING_SPEAKER_COUNT + 1)
}
