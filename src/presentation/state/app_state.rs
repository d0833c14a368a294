use std::sync::Arc;

use crate::application::ports::{LlmClient, TranscriptionEngine};
use crate::application::services::TranscriptionService;
use crate::presentation::config::ScaffoldConfig;

pub struct AppState<E, L>
where
    E: TranscriptionEngine,
    L: LlmClient,
{
    pub transcription_service: Arc<TranscriptionService<E, L>>,
    pub scaffold_config: ScaffoldConfig,
    pub max_upload_bytes: usize,
}

impl<E, L> AppState<E, L>
where
    E: TranscriptionEngine,
    L: LlmClient,
{
    pub fn new(
        transcription_service: TranscriptionService<E, L>,
        scaffold_config: ScaffoldConfig,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            transcription_service: Arc::new(transcription_service),
            scaffold_config,
            max_upload_bytes,
        }
    }
}

impl<E, L> Clone for AppState<E, L>
where
    E: TranscriptionEngine,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            scaffold_config: self.scaffold_config.clone(),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
