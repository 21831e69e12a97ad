use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use record_api::config::{SessionMode, StoreKind};
use record_api::database::{
    seed_fixtures, DatabaseManager, MemoryRecordStore, PgRecordStore, RecordStore,
};
use record_api::{app, is_production, AppState};

#[derive(Parser)]
#[command(name = "record-api")]
#[command(about = "Record management API server")]
#[command(version)]
struct Cli {
    #[arg(long, help = "Port to listen on (overrides RECORD_API_PORT / PORT)")]
    port: Option<u16>,

    #[arg(long, value_enum, help = "Record store backend")]
    store: Option<StoreKind>,

    #[arg(long, help = "Seed fixture records into an empty store")]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, SESSION_MODE, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = record_api::config::config().clone();
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(store) = cli.store {
        config.server.store = store;
    }
    if cli.seed {
        config.server.seed_fixtures = true;
    }

    tracing::info!("Starting Record API in {:?} mode", config.environment);
    if is_production!() && config.session.mode == SessionMode::Plain {
        tracing::warn!("Plain session cookies are forgeable; set SESSION_MODE=signed");
    }

    let store: Arc<dyn RecordStore> = match config.server.store {
        StoreKind::Memory => Arc::new(MemoryRecordStore::new()),
        StoreKind::Postgres => {
            let pool = DatabaseManager::connect(&config.database)
                .await
                .context("failed to connect to database")?;
            DatabaseManager::ensure_schema(&pool)
                .await
                .context("failed to prepare records schema")?;
            Arc::new(PgRecordStore::new(pool))
        }
    };

    if config.server.seed_fixtures {
        seed_fixtures(store.as_ref())
            .await
            .context("failed to seed fixture records")?;
    }

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Record API listening on http://{}", bind_addr);

    let state = Arc::new(AppState::new(config, store));
    axum::serve(listener, app(state)).await.context("server error")?;

    Ok(())
}
