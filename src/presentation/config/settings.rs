use std::fmt;
use std::time::Duration;

use config::{Config, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::DEFAULT_REFINEMENT_LANGUAGE;
use crate::domain::TranscriptionTier;
use crate::infrastructure::audio::DEFAULT_OPENAI_BASE_URL;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const PORT_VAR: &str = "SERVER_PORT";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub openai: OpenAiSettings,
    pub transcription: TranscriptionSettings,
    pub refinement: RefinementSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_upload_mb: 25,
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl OpenAiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            timeout_secs: 120,
        }
    }
}

impl fmt::Debug for OpenAiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiSettings")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "[REDACTED]" })
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub tiers: Vec<TranscriptionTier>,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            tiers: TranscriptionTier::default_plan(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RefinementSettings {
    pub enabled: bool,
    pub model: String,
    pub language: String,
    pub temperature: Option<f32>,
    pub system_prompt: Option<String>,
    pub user_prompt: Option<String>,
}

impl Default for RefinementSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            model: "gpt-4o-mini".to_string(),
            language: DEFAULT_REFINEMENT_LANGUAGE.to_string(),
            temperature: None,
            system_prompt: None,
            user_prompt: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive; empty keeps the built-in default.
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

impl Settings {
    /// Layers `appsettings.<env>.toml` (optional) and `APP__`-prefixed
    /// environment variables over the built-in defaults.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;
        settings.apply_process_overrides()?;
        settings.validate()?;
        Ok(settings)
    }

    fn apply_process_overrides(&mut self) -> Result<(), SettingsError> {
        if self.openai.api_key.is_empty() {
            if let Ok(key) = std::env::var(API_KEY_VAR) {
                self.openai.api_key = key.trim().to_string();
            }
        }

        if let Ok(port) = std::env::var(PORT_VAR) {
            self.server.port = port
                .parse()
                .map_err(|_| SettingsError::Invalid(format!("{} is not a port: {}", PORT_VAR, port)))?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.transcription.tiers.is_empty() {
            return Err(SettingsError::Invalid(
                "transcription.tiers must list at least one tier".to_string(),
            ));
        }

        if let Some(tier) = self
            .transcription
            .tiers
            .iter()
            .find(|t| t.name.trim().is_empty() || t.model.trim().is_empty())
        {
            return Err(SettingsError::Invalid(format!(
                "transcription tier {:?} needs both a name and a model",
                tier
            )));
        }

        if self.server.max_upload_mb == 0 {
            return Err(SettingsError::Invalid(
                "server.max_upload_mb must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
