use clap::{Parser, Subcommand};
use core_types::{Operation, RawNumber};
use database::{HistoryStore, MemoryHistoryStore, PgHistoryStore};
use engine::CalcEngine;
use rand::Rng;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// The main entry point for the calculadora application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if present.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => handle_serve(args).await,
        Commands::Seed(args) => handle_seed(args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// An HTTP arithmetic service with a persistent operation history.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve(ServeArgs),
    /// Fill the history collection with random operations.
    Seed(SeedArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Serve against an in-memory history store instead of PostgreSQL.
    #[arg(long)]
    memory: bool,
}

#[derive(Parser)]
struct SeedArgs {
    /// How many operations to generate.
    #[arg(long, default_value_t = 20)]
    count: usize,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = configuration::load_config()?;

    let store: Arc<dyn HistoryStore> = if args.memory {
        tracing::warn!("Using the in-memory history store; records are lost on shutdown.");
        Arc::new(MemoryHistoryStore::new())
    } else {
        let pool = database::connect().await?;
        database::run_migrations(&pool).await?;
        Arc::new(PgHistoryStore::new(pool))
    };

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    web_server::run_server(addr, &config, store).await
}

/// Generates `count` random operations and runs them through the engine so
/// the history fills with realistic records. Existing records are kept; the
/// history has no deletion path.
async fn handle_seed(args: SeedArgs) -> anyhow::Result<()> {
    let pool = database::connect().await?;
    database::run_migrations(&pool).await?;
    let engine = CalcEngine::new(Arc::new(PgHistoryStore::new(pool)));

    let mut rng = rand::thread_rng();
    let mut inserted = 0;
    for _ in 0..args.count {
        let len = rng.gen_range(1..=10);
        let numeros: Vec<RawNumber> = (0..len)
            .map(|_| RawNumber::from(f64::from(rng.gen_range(1..=100))))
            .collect();
        let operacion = Operation::ALL[rng.gen_range(0..Operation::ALL.len())];

        match engine.execute(operacion, &numeros).await {
            Ok(outcome) => {
                inserted += 1;
                tracing::debug!(%operacion, resultado = outcome.resultado, "seeded record");
            }
            // Operands are positive, so only storage can fail here.
            Err(err) => tracing::warn!(error = %err, "seed operation failed"),
        }
    }

    tracing::info!("Seeded {} history records.", inserted);
    Ok(())
}
