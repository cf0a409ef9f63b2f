mod app;
mod middlewares;
mod routes;
mod services;
mod types;
mod utils;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::types::app_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    info!("Starting app with {:?}", config);

    let app = app::gen_app(app::gen_state(&config)?);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
