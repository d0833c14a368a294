use bytes::Bytes;

pub const DEFAULT_AUDIO_FILENAME: &str = "audio.webm";
pub const DEFAULT_AUDIO_CONTENT_TYPE: &str = "audio/webm";

/// One uploaded recording. The bytes are reference counted, so every
/// provider attempt gets the full clip regardless of earlier attempts.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioPayload {
    data: Bytes,
    filename: String,
    content_type: String,
}

impl AudioPayload {
    pub fn new(
        data: impl Into<Bytes>,
        filename: Option<&str>,
        content_type: Option<&str>,
    ) -> Self {
        let filename = filename
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_AUDIO_FILENAME)
            .to_string();
        let content_type = content_type
            .filter(|c| !c.is_empty() && *c != "application/octet-stream")
            .unwrap_or(DEFAULT_AUDIO_CONTENT_TYPE)
            .to_string();

        Self {
            data: data.into(),
            filename,
            content_type,
        }
    }

    pub fn bytes(&self) -> Bytes {
        self.data.clone()
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
