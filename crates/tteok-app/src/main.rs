use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tteok_app::cli::Cli;
use tteok_app::config::Config;
use tteok_app::pipeline;
use tteok_core::render::HandlebarsRenderer;
use tteok_krdict::KrdictClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::resolve(Cli::parse())?;
    let service = KrdictClient::new(config.api_key.clone());
    let renderer = HandlebarsRenderer::new();

    pipeline::run(&service, &renderer, &config).await?;

    Ok(())
}
