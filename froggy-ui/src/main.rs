//! froggy-ui - Frog explorer web server
//!
//! Serves species data, call recordings, and the mock identifier on
//! port 5740. Zero-config startup: the database is created on first run.

use anyhow::Result;
use clap::Parser;
use froggy_common::{config, db};
use froggy_ui::{build_router, AppState};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "froggy-ui", about = "Frog explorer web server")]
struct Args {
    /// Root folder (overrides FROGGY_ROOT and the config file)
    #[arg(long)]
    root: Option<String>,

    /// Listen address
    #[arg(long, default_value = "127.0.0.1:5740")]
    listen: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Froggy UI (froggy-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let root_folder = config::resolve_root_folder(args.root.as_deref());
    config::ensure_directories(&root_folder)?;
    info!("Root folder: {}", root_folder.display());

    let db_path = config::database_path(&root_folder);
    let pool = db::init_database(&db_path).await?;

    let species_count = db::count_species(&pool).await?;
    if species_count == 0 {
        info!("Species table is empty - run `froggy-import species --csv <file>` to load the dataset");
    } else {
        info!("✓ {} species, {} calls", species_count, db::count_calls(&pool).await?);
    }

    let state = AppState::new(pool, config::audio_dir(&root_folder));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    info!("froggy-ui listening on http://{}", args.listen);
    info!("Health check: http://{}/health", args.listen);

    axum::serve(listener, app).await?;

    Ok(())
}
