//! froggy-import - one-off data population for the Froggy database
//!
//! Subcommands:
//! - `species --csv <file>`: load the species dataset (skips if populated)
//! - `calls`: seed the curated call list, resolving names to species ids
//! - `download`: fetch sample recordings for offline playback
//! - `verify`: HEAD-check remote recording URLs stored in the database

use anyhow::Result;
use clap::{Parser, Subcommand};
use froggy_common::{config, db};
use froggy_import::{csv_import, download, populate, verify};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "froggy-import", about = "Froggy data population utility")]
struct Args {
    /// Root folder (overrides FROGGY_ROOT and the config file)
    #[arg(long)]
    root: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import the species dataset from CSV
    Species {
        /// Path to frog_species.csv
        #[arg(long)]
        csv: PathBuf,
    },
    /// Seed the curated call list
    Calls,
    /// Download sample recordings into the audio directory
    Download,
    /// Check that stored remote audio URLs are still reachable
    Verify,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting Froggy Import (froggy-import) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let root_folder = config::resolve_root_folder(args.root.as_deref());
    config::ensure_directories(&root_folder)?;
    info!("Root folder: {}", root_folder.display());

    let pool = db::init_database(&config::database_path(&root_folder)).await?;

    match args.command {
        Command::Species { csv } => {
            let inserted = csv_import::import_species(&pool, &csv).await?;
            info!("✓ Species import finished ({} inserted)", inserted);
        }
        Command::Calls => {
            let stats = populate::populate_curated_calls(&pool).await?;
            info!("✓ Call seeding finished ({} added)", stats.added);
        }
        Command::Download => {
            let audio_dir = config::audio_dir(&root_folder);
            let stats = download::download_samples(&pool, &audio_dir).await?;
            info!(
                "✓ Download finished ({} new files, {} registered)",
                stats.downloaded, stats.registered
            );
        }
        Command::Verify => {
            let client = download::http_client()?;
            let report = verify::verify_remote_urls(&pool, &client).await?;
            for url in &report.unreachable {
                info!("Unreachable: {}", url);
            }
            info!(
                "✓ Verify finished ({}/{} reachable)",
                report.ok, report.checked
            );
        }
    }

    Ok(())
}
