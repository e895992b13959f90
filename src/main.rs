use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;
use lifemap_api::config::Config;
use lifemap_api::controller::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    info!("Starting LifeMap API in {} mode", config.environment);

    let app_state = AppState::from_config(&config)?;
    controller::serve(app_state, &config).await
}
