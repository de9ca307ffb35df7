use anyhow::Result;
use tracing_subscriber::EnvFilter;

use stock_ingest::config::Config;
use stock_ingest::server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stock_ingest=info")),
        )
        .init();

    let config = Config::from_env()?;
    server::run_server(config).await
}
