mod text_refiner;
mod transcription_service;

pub use text_refiner::{
    DEFAULT_REFINEMENT_LANGUAGE, DEFAULT_SYSTEM_PROMPT, DEFAULT_USER_PROMPT, TextRefiner,
};
pub use transcription_service::{TranscriptionService, TranscriptionServiceError};
