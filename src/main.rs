use std::error::Error;

use ai_llm_service::{config_from_env, telemetry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file, if present.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(telemetry::env_filter("info"))
        .with(telemetry::layer())
        .try_init()?;

    let llm_cfg = config_from_env()?;
    tracing::info!(provider = %llm_cfg.provider, model = %llm_cfg.model, "starting");

    api::start(llm_cfg).await?;

    Ok(())
}
