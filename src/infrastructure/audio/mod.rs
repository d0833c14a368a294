mod openai_transcription_engine;
mod scaffold_transcription_engine;

pub use openai_transcription_engine::{DEFAULT_OPENAI_BASE_URL, OpenAiTranscriptionEngine};
pub use scaffold_transcription_engine::ScaffoldTranscriptionEngine;
