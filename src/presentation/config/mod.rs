mod environment;
mod scaffold_config;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    API_KEY_VAR, LoggingSettings, OpenAiSettings, PORT_VAR, RefinementSettings, ServerSettings,
    Settings, SettingsError, TranscriptionSettings,
};
