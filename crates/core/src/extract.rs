//! Content extraction from loosely-structured article pages.
//!
//! A fixed, ordered chain of container matchers is tried against the parsed
//! page; the first match is treated as the main content area and its
//! paragraph elements are collected, trimmed, and length-filtered.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::fetch::Session;
use crate::manifest::ManifestEntry;
use crate::{AnthologyError, Article, Result};

/// Minimum trimmed paragraph length; shorter text is treated as
/// navigation/caption noise.
const MIN_PARAGRAPH_CHARS: usize = 10;

/// A single content-container predicate.
///
/// The fallback chain is an ordered list of these, evaluated until one
/// matches an element in the document.
#[derive(Debug, Clone, Copy)]
enum Matcher {
    /// Element carrying every listed class.
    AllClasses { tag: &'static str, classes: &'static [&'static str] },
    /// Element carrying at least one listed class.
    AnyClass { tag: &'static str, classes: &'static [&'static str] },
    /// Bare tag name.
    Tag(&'static str),
}

impl Matcher {
    fn css(&self) -> String {
        match self {
            Matcher::AllClasses { tag, classes } => format!("{tag}.{}", classes.join(".")),
            Matcher::AnyClass { tag, classes } => {
                classes.iter().map(|class| format!("{tag}.{class}")).collect::<Vec<_>>().join(", ")
            }
            Matcher::Tag(tag) => (*tag).to_string(),
        }
    }

    /// First element in document order matching this predicate.
    fn find<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>> {
        let selector = Selector::parse(&self.css()).ok()?;
        doc.select(&selector).next()
    }
}

/// Container fallback chain, in priority order. First match wins.
const FALLBACK_CHAIN: &[Matcher] = &[
    Matcher::AllClasses { tag: "div", classes: &["post-title", "post-main"] },
    Matcher::AnyClass { tag: "div", classes: &["post-title", "post-main"] },
    Matcher::Tag("article"),
    Matcher::AnyClass { tag: "div", classes: &["content"] },
    Matcher::AnyClass { tag: "div", classes: &["post"] },
];

/// Extracts an article from an already-fetched page body.
///
/// The title is supplied by the manifest, not derived from the page.
/// Fails with [`AnthologyError::ContentAreaNotFound`] when no matcher in
/// the chain finds a container, and with
/// [`AnthologyError::NoValidParagraphs`] when a container matched but no
/// paragraph survived the length filter.
pub fn extract_from_html(html: &str, title: &str, url: &str) -> Result<Article> {
    let doc = Html::parse_document(html);

    let container = FALLBACK_CHAIN
        .iter()
        .find_map(|matcher| matcher.find(&doc))
        .ok_or_else(|| AnthologyError::ContentAreaNotFound { title: title.to_string() })?;

    let paragraph_selector = Selector::parse("p").map_err(|e| AnthologyError::HtmlParse(e.to_string()))?;

    let paragraphs: Vec<String> = container
        .select(&paragraph_selector)
        .filter_map(|element| {
            let text = element.text().collect::<String>();
            let text = text.trim();
            if text.chars().count() > MIN_PARAGRAPH_CHARS { Some(text.to_string()) } else { None }
        })
        .collect();

    if paragraphs.is_empty() {
        return Err(AnthologyError::NoValidParagraphs { title: title.to_string() });
    }

    debug!("extracted {} paragraphs for {}", paragraphs.len(), title);

    Ok(Article::new(title, url, paragraphs))
}

/// Fetches a manifest entry and extracts its article.
///
/// The fetch uses the shared session; any failure signal (fetch, missing
/// container, empty content) propagates for the collector to log and skip.
pub async fn extract_article(session: &Session, entry: &ManifestEntry) -> Result<Article> {
    let body = session.fetch_page(&entry.url).await?;
    extract_from_html(&body, &entry.title, &entry.url)
}
