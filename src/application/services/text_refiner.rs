use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};

pub const DEFAULT_REFINEMENT_LANGUAGE: &str = "Japanese";

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are an assistant that rewrites {language} text into natural, easy-to-read {language}.";

pub const DEFAULT_USER_PROMPT: &str = "Rewrite the following speech recognition output as natural, readable {language}.

Requirements:
- Remove filler words and verbal tics (for example \"えっと\", \"あの\", \"で、\").
- Add appropriate punctuation.
- Replace phonetic katakana with the intended kanji (for example ナンバー -> 難波).
- Correct the spelling of proper nouns such as place names and personal names.
- Keep the meaning unchanged and make the text read naturally.
- Preserve the speaker's original intent.

Speech recognition output:
{text}

Output only the rewritten text.";

/// Cosmetic clean-up of transcribed text through a chat model.
///
/// Refinement never fails a request: any error from the model leaves the
/// input untouched.
pub struct TextRefiner<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    enabled: bool,
    language: String,
    system_prompt_template: String,
    user_prompt_template: String,
}

impl<L> TextRefiner<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>, language: impl Into<String>) -> Self {
        Self {
            llm_client,
            enabled: true,
            language: language.into(),
            system_prompt_template: DEFAULT_SYSTEM_PROMPT.to_string(),
            user_prompt_template: DEFAULT_USER_PROMPT.to_string(),
        }
    }

    pub fn with_prompts(
        mut self,
        system_prompt_template: impl Into<String>,
        user_prompt_template: impl Into<String>,
    ) -> Self {
        self.system_prompt_template = system_prompt_template.into();
        self.user_prompt_template = user_prompt_template.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the refined text, or `text` unchanged when refinement is
    /// disabled, `text` is empty, or the model errors. A blank completion
    /// also counts as an error, so the transcript is never replaced by `""`.
    pub async fn refine(&self, text: &str) -> String {
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }

        match self.try_refine(text).await {
            Ok(refined) => {
                tracing::debug!(
                    raw_chars = text.chars().count(),
                    refined_chars = refined.chars().count(),
                    "Transcript refined"
                );
                refined
            }
            Err(e) => {
                tracing::warn!(error = %e, "Text refinement failed, keeping raw transcript");
                text.to_string()
            }
        }
    }

    async fn try_refine(&self, text: &str) -> Result<String, LlmClientError> {
        let (system_prompt, user_prompt) = self.build_prompts(text);

        let refined = self
            .llm_client
            .complete(&system_prompt, &user_prompt)
            .await?;

        let refined = refined.trim();
        if refined.is_empty() {
            return Err(LlmClientError::InvalidResponse(
                "empty completion".to_string(),
            ));
        }

        Ok(refined.to_string())
    }

    fn build_prompts(&self, text: &str) -> (String, String) {
        let system_prompt = self
            .system_prompt_template
            .replace("{language}", &self.language);
        // {text} goes last so transcript content is never treated as a placeholder.
        let user_prompt = self
            .user_prompt_template
            .replace("{language}", &self.language)
            .replace("{text}", text);
        (system_prompt, user_prompt)
    }
}
