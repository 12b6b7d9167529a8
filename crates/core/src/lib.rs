pub mod archive;
pub mod article;
pub mod collect;
pub mod compose;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod format;
pub mod manifest;
pub mod render;

pub use archive::{load_archive, save_archive};
pub use article::{Article, ArticleBatch};
pub use collect::{CollectorConfig, ScrapeOutcome, collect_articles};
pub use compose::{Block, ComposeOptions, compose_blocks, sanitize_paragraph};
pub use error::{AnthologyError, Result};
pub use extract::{extract_article, extract_from_html};
pub use fetch::{FetchConfig, Session};
pub use format::{TextFormat, format_article, format_batch};
pub use manifest::{ManifestEntry, parse_manifest};
pub use render::{
    DEFAULT_PAGINATED_FILENAME, DEFAULT_STANDARD_FILENAME, FontConfig, PageStyle, export_paginated, export_standard,
    render_pdf,
};
