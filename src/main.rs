use dotenv::dotenv;

use io_service::{Config, IoServer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Startup failures (bad PORT, port taken) propagate out and exit non-zero.
    let config = Config::from_env()?;
    let server = IoServer::bind(&config).await?;
    server.serve().await?;

    Ok(())
}
