//! Error types for Anthology operations.
//!
//! This module defines the main error type [`AnthologyError`] which represents
//! all possible errors that can occur while scraping, archiving, and
//! rendering an essay collection.

use thiserror::Error;

/// Main error type for scraping and document-building operations.
///
/// Fetch and extraction variants are recovered at the entry boundary by the
/// collector (the failing entry is skipped); document-build failures abort a
/// single PDF build without touching the in-memory batch.
#[derive(Error, Debug)]
pub enum AnthologyError {
    /// A page could not be fetched.
    ///
    /// Covers connection errors, timeouts, invalid URLs, and any response
    /// with a status other than 200.
    #[error("fetch failed for {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    /// No content container matched any selector in the fallback chain.
    #[error("no content area found: {title}")]
    ContentAreaNotFound { title: String },

    /// A container matched, but no paragraph survived the length filter.
    #[error("no valid paragraphs: {title}")]
    NoValidParagraphs { title: String },

    /// The layout engine rejected the accumulated content.
    ///
    /// The build is all-or-nothing: a failing document produces no partial
    /// output file.
    #[error("document build failed: {0}")]
    DocumentBuildFailed(String),

    /// A CSS selector could not be compiled.
    #[error("failed to parse HTML: {0}")]
    HtmlParse(String),

    /// HTTP client construction errors from reqwest.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The archive file does not contain a valid article array.
    #[error("invalid archive JSON: {0}")]
    ArchiveFormat(#[from] serde_json::Error),

    /// File I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for AnthologyError.
pub type Result<T> = std::result::Result<T, AnthologyError>;
