use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// This main function is the entry point when running `cargo run -p web-server`.
// It boots against PostgreSQL with the settings from config.toml; the
// `calculadora` binary offers the richer CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = configuration::load_config()?;

    let pool = database::connect().await?;
    database::run_migrations(&pool).await?;
    let store = Arc::new(database::PgHistoryStore::new(pool));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    web_server::run_server(addr, &config, store).await
}
