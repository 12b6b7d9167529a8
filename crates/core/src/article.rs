//! Article data model shared by the scraper, the archive, and the composers.

use serde::{Deserialize, Serialize};

/// A single extracted article.
///
/// `content` holds the qualifying paragraphs in original document order.
/// Articles are never mutated after creation; the batch owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Title as listed in the manifest (not derived from the page).
    pub title: String,
    /// Source URL the article was fetched from.
    pub url: String,
    /// Paragraph texts, trimmed, in document order.
    pub content: Vec<String>,
}

impl Article {
    pub fn new(title: impl Into<String>, url: impl Into<String>, content: Vec<String>) -> Self {
        Self { title: title.into(), url: url.into(), content }
    }
}

/// An ordered collection of articles.
///
/// Insertion order is extraction completion order. The same URL fetched
/// twice yields two entries; nothing deduplicates.
pub type ArticleBatch = Vec<Article>;
