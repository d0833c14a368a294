use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use koegaki::application::ports::LlmClient;
use koegaki::application::services::{TextRefiner, TranscriptionService};
use koegaki::infrastructure::audio::{OpenAiTranscriptionEngine, ScaffoldTranscriptionEngine};
use koegaki::infrastructure::llm::OpenAiClient;
use koegaki::infrastructure::observability::{TracingConfig, init_tracing};
use koegaki::presentation::config::RefinementSettings;
use koegaki::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

fn build_refiner<L: LlmClient>(
    llm_client: Arc<L>,
    settings: &RefinementSettings,
    enabled: bool,
) -> TextRefiner<L> {
    let refiner = TextRefiner::new(llm_client, settings.language.clone()).enabled(enabled);
    match (&settings.system_prompt, &settings.user_prompt) {
        (Some(system), Some(user)) => refiner.with_prompts(system.clone(), user.clone()),
        _ => refiner,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(
        environment.as_str(),
        &settings.logging,
    ));

    let scaffold_config = ScaffoldConfig::default();
    let max_upload_bytes = settings.server.max_upload_bytes();
    let tiers = settings.transcription.tiers.clone();

    if settings.openai.api_key.is_empty() && !scaffold_config.enabled {
        tracing::warn!("OPENAI_API_KEY is not set, provider calls will fail");
    }

    let llm_client = Arc::new(
        OpenAiClient::new(
            settings.openai.api_key.clone(),
            Some(settings.openai.base_url.clone()),
            settings.refinement.model.clone(),
            settings.openai.timeout(),
        )
        .context("Failed to build chat client")?
        .with_temperature(settings.refinement.temperature),
    );
    let refiner = build_refiner(
        llm_client,
        &settings.refinement,
        settings.refinement.enabled && !scaffold_config.enabled,
    );

    let tier_models: Vec<&str> = tiers.iter().map(|t| t.model.as_str()).collect();
    tracing::info!(
        environment = %environment,
        scaffold = scaffold_config.enabled,
        tiers = ?tier_models,
        refinement = refiner.is_enabled(),
        "Transcription pipeline configured"
    );

    let router = if scaffold_config.enabled {
        let engine = Arc::new(ScaffoldTranscriptionEngine::new(
            scaffold_config.response_delay(),
        ));
        let service = TranscriptionService::new(engine, refiner, tiers);
        create_router(AppState::new(service, scaffold_config, max_upload_bytes))
    } else {
        let engine = Arc::new(
            OpenAiTranscriptionEngine::new(
                settings.openai.api_key.clone(),
                Some(settings.openai.base_url.clone()),
                settings.openai.timeout(),
            )
            .context("Failed to build transcription client")?,
        );
        let service = TranscriptionService::new(engine, refiner, tiers);
        create_router(AppState::new(service, scaffold_config, max_upload_bytes))
    };

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
