//! Remote audio URL verification
//!
//! HEAD-checks the remote recording URLs stored in the database and reports
//! the unreachable ones. Purely advisory: nothing is deleted.

use anyhow::Result;
use froggy_common::db;
use sqlx::SqlitePool;
use tracing::{info, warn};

/// Verification outcome for one run
#[derive(Debug, Default)]
pub struct VerifyReport {
    pub checked: usize,
    pub ok: usize,
    pub unreachable: Vec<String>,
}

/// Whether a successful HEAD response looks like audio
fn looks_like_audio(content_type: Option<&str>, url: &str) -> bool {
    if content_type.is_some_and(|ct| ct.contains("audio")) {
        return true;
    }
    url.ends_with(".mp3") || url.ends_with(".wav") || url.ends_with(".ogg")
}

/// HEAD-check every remote call URL in the database
pub async fn verify_remote_urls(pool: &SqlitePool, client: &reqwest::Client) -> Result<VerifyReport> {
    let urls = db::remote_call_urls(pool).await?;
    let mut report = VerifyReport::default();

    for url in urls {
        report.checked += 1;

        let reachable = match client.head(&url).send().await {
            Ok(response) if response.status().is_success() => {
                let content_type = response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                looks_like_audio(content_type.as_deref(), &url)
            }
            Ok(response) => {
                warn!("HTTP {} for {}", response.status(), url);
                false
            }
            Err(e) => {
                warn!("Could not reach {}: {}", url, e);
                false
            }
        };

        if reachable {
            report.ok += 1;
        } else {
            report.unreachable.push(url);
        }
    }

    info!(
        "Verified {} remote call URLs: {} ok, {} unreachable",
        report.checked,
        report.ok,
        report.unreachable.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_content_type_wins() {
        assert!(looks_like_audio(Some("audio/mpeg"), "https://example.org/call"));
    }

    #[test]
    fn test_extension_fallback() {
        assert!(looks_like_audio(Some("application/octet-stream"), "https://example.org/call.ogg"));
        assert!(looks_like_audio(None, "https://example.org/call.mp3"));
        assert!(!looks_like_audio(Some("text/html"), "https://example.org/call"));
    }
}
