use tracing::info;
use tracing_subscriber::EnvFilter;

use emotionsense::classifier;
use emotionsense::config::Config;
use emotionsense::sentiment::SentimentAnalyzer;
use emotionsense::server::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("EmotionSense starting...");

    let config = Config::from_env();
    info!("Model path: {:?}", config.model_path);
    info!("Frontend dir: {:?}", config.frontend_dir);

    // Load the classifier eagerly so requests share one read-only handle
    let classifier = classifier::load(&config.model_path);

    let state = AppState::new(SentimentAnalyzer::new(), classifier);
    server::serve(config, state).await
}
