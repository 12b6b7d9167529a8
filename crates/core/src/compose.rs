//! Document composition: walks the batch and emits layout blocks.
//!
//! Both PDF variants share one walk, parameterized by [`ComposeOptions`].
//! The block list is the composer's testable intermediate form; the render
//! module translates it into layout-engine calls.

use regex::Regex;

use crate::article::Article;

/// Per-variant composition switches.
///
/// The standard variant flows all articles continuously with a
/// source-attribution line; the paginated variant drops attribution,
/// breaks the page after each article, normalizes curly quotes, and
/// re-applies the paragraph length filter after sanitization.
#[derive(Debug, Clone)]
pub struct ComposeOptions {
    /// Emit a source-attribution line under each title.
    pub attribution: bool,
    /// Force a page break after every article except the last.
    pub page_breaks: bool,
    /// Map curly quotation marks to straight ASCII.
    pub normalize_quotes: bool,
    /// Drop paragraphs whose sanitized length is 10 chars or fewer.
    ///
    /// Re-measured after sanitization, so a paragraph the extractor
    /// accepted can still be dropped here if whitespace collapsing
    /// shortened it. Deliberate; both passes are kept as-is.
    pub refilter_paragraphs: bool,
}

impl ComposeOptions {
    /// Continuous document with attribution lines.
    pub fn standard() -> Self {
        Self { attribution: true, page_breaks: false, normalize_quotes: false, refilter_paragraphs: false }
    }

    /// One article per page, no attribution, stricter sanitization.
    pub fn paginated() -> Self {
        Self { attribution: false, page_breaks: true, normalize_quotes: true, refilter_paragraphs: true }
    }
}

/// A flow-content block for the layout engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Centered article title.
    Title(String),
    /// Small-print source line (standard variant only).
    Attribution(String),
    /// Sanitized body paragraph.
    Body(String),
    /// Forced page break (paginated variant only).
    PageBreak,
}

/// Sanitizes one body paragraph for the layout markup.
///
/// Collapses whitespace runs to single spaces, trims, and escapes the three
/// XML metacharacters (`&` first). Quote normalization is applied on top
/// when the options ask for it. Titles and attribution lines are emitted
/// raw; only body paragraphs go through here.
pub fn sanitize_paragraph(text: &str, options: &ComposeOptions) -> String {
    let whitespace = Regex::new(r"\s+").unwrap();
    let collapsed = whitespace.replace_all(text, " ");

    let mut cleaned = collapsed.trim().replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;");

    if options.normalize_quotes {
        cleaned = cleaned.replace(['\u{201C}', '\u{201D}'], "\"").replace(['\u{2018}', '\u{2019}'], "'");
    }

    cleaned
}

/// Walks the batch and emits blocks in document order.
///
/// An empty batch yields an empty block list; the caller reports that and
/// skips rendering.
pub fn compose_blocks(batch: &[Article], options: &ComposeOptions) -> Vec<Block> {
    let mut blocks = Vec::new();
    let last = batch.len().saturating_sub(1);

    for (index, article) in batch.iter().enumerate() {
        blocks.push(Block::Title(article.title.clone()));

        if options.attribution {
            blocks.push(Block::Attribution(format!("Source: {}", article.url)));
        }

        for paragraph in &article.content {
            let cleaned = sanitize_paragraph(paragraph, options);
            if cleaned.is_empty() {
                continue;
            }
            if options.refilter_paragraphs && cleaned.chars().count() <= 10 {
                continue;
            }
            blocks.push(Block::Body(cleaned));
        }

        if options.page_breaks && index < last {
            blocks.push(Block::PageBreak);
        }
    }

    blocks
}
