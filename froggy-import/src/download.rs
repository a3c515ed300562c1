//! Sample recording download
//!
//! Best-effort, retry-free fetching of the bundled sample recordings into
//! the local audio directory. Files are stored as served by the source (no
//! transcoding) and registered as local calls keyed by filename.

use anyhow::{Context, Result};
use froggy_common::db;
use froggy_common::matcher::{match_species, CallCandidate};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

use crate::seed::SAMPLE_DOWNLOADS;

const USER_AGENT: &str = concat!("froggy-import/", env!("CARGO_PKG_VERSION"));
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(15);

/// Pause between downloads; these are public archives, be polite
const DOWNLOAD_PAUSE: Duration = Duration::from_millis(500);

/// Outcome counts for a download run
#[derive(Debug, Default, Clone, Copy)]
pub struct DownloadStats {
    pub downloaded: usize,
    pub already_present: usize,
    pub failed: usize,
    pub registered: usize,
}

/// Shared HTTP client for the download and verify subcommands
pub fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}

/// Fetch one file if it is not already on disk.
///
/// Returns `Ok(true)` when a new file was written, `Ok(false)` when it
/// already existed.
pub async fn download_file(client: &reqwest::Client, url: &str, dest: &Path) -> Result<bool> {
    if dest.exists() {
        info!("File already exists: {}", dest.display());
        return Ok(false);
    }

    info!("Downloading {} -> {}", url, dest.display());

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("HTTP {} for {}", response.status(), url);
    }

    let bytes = response.bytes().await?;
    std::fs::write(dest, &bytes)
        .with_context(|| format!("Cannot write {}", dest.display()))?;

    Ok(true)
}

/// Download the bundled sample recordings and register them as local calls
pub async fn download_samples(pool: &SqlitePool, audio_dir: &Path) -> Result<DownloadStats> {
    std::fs::create_dir_all(audio_dir)?;

    let client = http_client()?;
    let reference = db::species_reference(pool).await?;
    let mut stats = DownloadStats::default();

    for sample in SAMPLE_DOWNLOADS {
        let dest = audio_dir.join(sample.filename);

        match download_file(&client, sample.url, &dest).await {
            Ok(true) => stats.downloaded += 1,
            Ok(false) => stats.already_present += 1,
            Err(e) => {
                warn!("Failed to download {}: {:#}", sample.url, e);
                stats.failed += 1;
                continue;
            }
        }

        // Local calls are keyed by filename; the UI serves them at /audio/<filename>
        if db::call_exists(pool, sample.filename).await? {
            continue;
        }

        let candidate = CallCandidate {
            name: sample.species_name.to_string(),
            scientific_name: Some(sample.scientific_name.to_string()),
        };

        match match_species(&candidate, &reference) {
            Some(resolved) if !resolved.tier.is_low_confidence() => {
                db::insert_call(
                    pool,
                    resolved.species_id,
                    sample.filename,
                    Some(sample.description),
                    true,
                )
                .await?;
                info!("Registered local call for {}", sample.species_name);
                stats.registered += 1;
            }
            Some(resolved) => {
                // Keep the file, but an uncertain species link is worse
                // than none for downloaded audio
                warn!(
                    "Not registering {}: only a {:?} match (species {})",
                    sample.species_name, resolved.tier, resolved.species_id
                );
            }
            None => {
                warn!(
                    "Not registering {}: species table is empty",
                    sample.species_name
                );
            }
        }

        tokio::time::sleep(DOWNLOAD_PAUSE).await;
    }

    info!(
        "Downloaded {}/{} sample calls ({} already present, {} failed), registered {}",
        stats.downloaded,
        SAMPLE_DOWNLOADS.len(),
        stats.already_present,
        stats.failed,
        stats.registered
    );

    Ok(stats)
}
