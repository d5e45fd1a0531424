mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, data::Store, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let store = Store::new();

    tracing::info!("Starting bot with prefix {}", config.command_prefix);

    let client = bot::start::init_bot(config, store).await?;

    if let Err(e) = bot::start::start_bot(client).await {
        tracing::error!("Discord bot error: {}", e);
        return Err(e);
    }

    Ok(())
}
