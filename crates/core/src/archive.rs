//! Archive persistence: JSON save/load for the article batch.
//!
//! The archive is a UTF-8 JSON array of `{title, url, content: [string]}`
//! objects, pretty-printed and with Unicode left unescaped, so later export
//! stages can run without re-fetching anything.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::{ArticleBatch, Result};

/// Serializes the batch to `path` as indented UTF-8 JSON.
///
/// Array order is the batch order; non-ASCII content is written verbatim.
pub fn save_archive(batch: &ArticleBatch, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(batch)?;
    fs::write(path, json)?;
    info!("saved {} articles to {}", batch.len(), path.display());
    Ok(())
}

/// Deserializes an archive written by [`save_archive`].
///
/// `load_archive(save_archive(batch)) == batch` holds exactly, for field
/// values and ordering alike.
pub fn load_archive(path: &Path) -> Result<ArticleBatch> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
