use serde::Serialize;

use super::segment::Segment;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TranscriptionResult {
    pub text: String,
    pub segments: Vec<Segment>,
}

impl TranscriptionResult {
    pub fn new(text: String, segments: Vec<Segment>) -> Self {
        Self { text, segments }
    }

    /// Result for a recording that contained no audio at all.
    pub fn empty() -> Self {
        Self::default()
    }
}
