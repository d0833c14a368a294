mod audio_payload;
mod segment;
mod transcription_result;
mod transcription_tier;

pub use audio_payload::{AudioPayload, DEFAULT_AUDIO_CONTENT_TYPE, DEFAULT_AUDIO_FILENAME};
pub use segment::{GENERIC_SPEAKER_LABEL, Segment, rotating_speaker_label};
pub use transcription_result::TranscriptionResult;
pub use transcription_tier::{TranscriptionMode, TranscriptionTier};
