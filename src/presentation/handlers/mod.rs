mod health;
mod index;
mod transcribe;

pub use health::{HealthResponse, health_handler};
pub use index::{app_js_handler, index_handler};
pub use transcribe::{AUDIO_FIELD, ErrorResponse, TranscribeResponse, UploadError, transcribe_handler};
