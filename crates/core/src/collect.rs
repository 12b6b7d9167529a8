//! Batch collection: drives the extractor over the full manifest.
//!
//! Entries are processed strictly in order with a fixed delay between
//! consecutive fetches. A failing entry is logged and skipped; nothing
//! aborts the batch and nothing is retried.

use std::time::Duration;

use tracing::{info, warn};

use crate::extract::extract_article;
use crate::fetch::{FetchConfig, Session};
use crate::manifest::ManifestEntry;
use crate::{ArticleBatch, Result};

/// Configuration for a collection run.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Pause between consecutive fetches (not applied after the last).
    /// Throttles the fetch cadence to avoid tripping anti-scraping defenses.
    pub delay: Duration,
    /// HTTP settings shared by every fetch in the batch.
    pub fetch: FetchConfig,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self { delay: Duration::from_secs(2), fetch: FetchConfig::default() }
    }
}

/// Result of a collection run.
#[derive(Debug, Clone)]
pub struct ScrapeOutcome {
    /// Successfully extracted articles, in completion order.
    pub batch: ArticleBatch,
    /// Number of manifest entries processed.
    pub attempted: usize,
    /// Number of entries that produced an article.
    pub succeeded: usize,
}

/// Fetches and extracts every manifest entry, in order.
///
/// The only fallible step is building the HTTP session; per-entry failures
/// are logged with the affected title and URL and the batch continues.
pub async fn collect_articles(entries: &[ManifestEntry], config: &CollectorConfig) -> Result<ScrapeOutcome> {
    let session = Session::new(&config.fetch)?;
    let total = entries.len();
    let mut batch = ArticleBatch::new();

    for (index, entry) in entries.iter().enumerate() {
        info!("[{}/{}] fetching {}", index + 1, total, entry.title);

        match extract_article(&session, entry).await {
            Ok(article) => {
                info!("extracted {} ({} paragraphs)", article.title, article.content.len());
                batch.push(article);
            }
            Err(err) => warn!("skipping {} ({}): {}", entry.title, entry.url, err),
        }

        if index + 1 < total {
            tokio::time::sleep(config.delay).await;
        }
    }

    let succeeded = batch.len();
    info!("collected {succeeded}/{total} articles");

    Ok(ScrapeOutcome { batch, attempted: total, succeeded })
}
