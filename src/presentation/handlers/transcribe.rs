use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{LlmClient, TranscriptionEngine};
use crate::domain::{AudioPayload, Segment};
use crate::infrastructure::observability::sanitize_transcript;
use crate::presentation::state::AppState;

pub const AUDIO_FIELD: &str = "audio";

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub success: bool,
    pub text: String,
    pub segments: Vec<Segment>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No audio file was sent")]
    MissingFile,
    #[error("No file was selected")]
    NoFileSelected,
    #[error("Failed to read upload: {message}")]
    Malformed { status: StatusCode, message: String },
}

impl UploadError {
    fn status(&self) -> StatusCode {
        match self {
            UploadError::MissingFile | UploadError::NoFileSelected => StatusCode::BAD_REQUEST,
            UploadError::Malformed { status, .. } => *status,
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.to_string())
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error,
        }),
    )
        .into_response()
}

/// Pulls the first `audio` file part out of the form. Parts named `audio`
/// without a filename are plain form values and do not count as a file.
async fn read_audio_field(multipart: &mut Multipart) -> Result<AudioPayload, UploadError> {
    loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| UploadError::Malformed {
                status: e.status(),
                message: e.body_text(),
            })?;

        let Some(field) = field else {
            return Err(UploadError::MissingFile);
        };

        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        if filename.is_empty() {
            return Err(UploadError::NoFileSelected);
        }

        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(|e| UploadError::Malformed {
            status: e.status(),
            message: e.body_text(),
        })?;

        return Ok(AudioPayload::new(
            data,
            Some(&filename),
            content_type.as_deref(),
        ));
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<E, L>(
    State(state): State<AppState<E, L>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    E: TranscriptionEngine + 'static,
    L: LlmClient + 'static,
{
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Transcribe request is not a multipart form");
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let audio = match read_audio_field(&mut multipart).await {
        Ok(audio) => audio,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected transcribe upload");
            return e.into_response();
        }
    };

    tracing::debug!(
        filename = %audio.filename(),
        content_type = %audio.content_type(),
        bytes = audio.len(),
        "Audio received"
    );

    match state.transcription_service.transcribe(&audio).await {
        Ok(result) => {
            tracing::info!(
                segments = result.segments.len(),
                text = %sanitize_transcript(&result.text),
                "Transcription completed"
            );
            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    success: true,
                    text: result.text,
                    segments: result.segments,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "All transcription tiers failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
