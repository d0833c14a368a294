use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionMode {
    /// Speaker separated transcription with per-segment timing.
    Diarized,
    /// Whole-clip text only.
    Plain,
}

impl TranscriptionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionMode::Diarized => "diarized",
            TranscriptionMode::Plain => "plain",
        }
    }
}

impl FromStr for TranscriptionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "diarized" => Ok(TranscriptionMode::Diarized),
            "plain" => Ok(TranscriptionMode::Plain),
            other => Err(format!("Invalid transcription mode: {}", other)),
        }
    }
}

impl fmt::Display for TranscriptionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One ranked attempt in the fallback sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranscriptionTier {
    pub name: String,
    pub model: String,
    pub mode: TranscriptionMode,
    #[serde(default)]
    pub language: Option<String>,
}

impl TranscriptionTier {
    pub fn diarized(name: &str, model: &str) -> Self {
        Self {
            name: name.to_string(),
            model: model.to_string(),
            mode: TranscriptionMode::Diarized,
            language: None,
        }
    }

    pub fn plain(name: &str, model: &str, language: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            model: model.to_string(),
            mode: TranscriptionMode::Plain,
            language: language.map(str::to_string),
        }
    }

    /// Diarized transcription first, then the mini transcription model with
    /// language detection, then whisper pinned to Japanese.
    pub fn default_plan() -> Vec<Self> {
        vec![
            Self::diarized("diarize", "gpt-4o-transcribe-diarize"),
            Self::plain("mini", "gpt-4o-mini-transcribe", None),
            Self::plain("whisper", "whisper-1", Some("ja")),
        ]
    }
}
