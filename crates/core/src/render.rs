//! PDF rendering: translates composed blocks into a genpdf document.
//!
//! Each variant pairs [`ComposeOptions`] with a [`PageStyle`]; the build is
//! all-or-nothing, matching the layout engine's own atomicity. A failing
//! build leaves no partial file and never touches the in-memory batch.

use std::path::{Path, PathBuf};

use genpdf::elements::{Break, PageBreak, Paragraph};
use genpdf::style::Style;
use genpdf::{Alignment, Element as _, Margins, fonts};
use tracing::{info, warn};

use crate::article::Article;
use crate::compose::{Block, ComposeOptions, compose_blocks};
use crate::{AnthologyError, Result};

/// Default output filename for the standard (continuous) variant.
pub const DEFAULT_STANDARD_FILENAME: &str = "经典英语美文集.pdf";

/// Default output filename for the paginated variant.
pub const DEFAULT_PAGINATED_FILENAME: &str = "经典英语美文集_高级版.pdf";

/// Font families for the document.
///
/// genpdf loads `{name}-Regular.ttf`, `{name}-Bold.ttf`, `{name}-Italic.ttf`
/// and `{name}-BoldItalic.ttf` from `dir`.
#[derive(Debug, Clone)]
pub struct FontConfig {
    /// Directory holding the TTF files.
    pub dir: PathBuf,
    /// Family used for article titles.
    pub title_family: String,
    /// Family used for body text and attribution lines.
    pub body_family: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("fonts"), title_family: "SimHei".to_string(), body_family: "SimSun".to_string() }
    }
}

/// Page geometry and type sizes for one variant.
#[derive(Debug, Clone)]
pub struct PageStyle {
    /// Title font size in points.
    pub title_size: u8,
    /// Body font size in points.
    pub body_size: u8,
    /// Attribution font size in points.
    pub attribution_size: u8,
    /// Page margins in millimeters (top, right, bottom, left).
    pub margins: Margins,
    /// Line spacing factor for body text.
    pub line_spacing: f64,
}

impl PageStyle {
    /// Continuous-flow document: one-inch side margins, small footer margin.
    pub fn standard() -> Self {
        Self {
            title_size: 16,
            body_size: 11,
            attribution_size: 8,
            margins: Margins::trbl(25.0, 25.0, 6.0, 25.0),
            line_spacing: 1.45,
        }
    }

    /// One article per page: uniform margins, slightly larger type.
    pub fn paginated() -> Self {
        Self {
            title_size: 18,
            body_size: 12,
            attribution_size: 8,
            margins: Margins::trbl(18.0, 18.0, 18.0, 18.0),
            line_spacing: 1.5,
        }
    }
}

fn load_family(dir: &Path, name: &str) -> Result<fonts::FontFamily<fonts::FontData>> {
    fonts::from_files(dir, name, None).map_err(|e| {
        AnthologyError::DocumentBuildFailed(format!("failed to load font family {name} from {}: {e}", dir.display()))
    })
}

/// Renders the batch to a PDF file.
///
/// An empty batch is reported and skipped without creating a file; the
/// function returns `Ok(false)` for that no-op and `Ok(true)` once a
/// document has been written. Layout-engine errors surface as
/// [`AnthologyError::DocumentBuildFailed`].
pub fn render_pdf(
    batch: &[Article], options: &ComposeOptions, style: &PageStyle, fonts: &FontConfig, output: &Path,
) -> Result<bool> {
    if batch.is_empty() {
        warn!("no articles to render; skipping {}", output.display());
        return Ok(false);
    }

    let blocks = compose_blocks(batch, options);

    let body_family = load_family(&fonts.dir, &fonts.body_family)?;
    let mut doc = genpdf::Document::new(body_family);
    doc.set_paper_size(genpdf::PaperSize::A4);
    doc.set_font_size(style.body_size);
    doc.set_line_spacing(style.line_spacing);

    let title_family = doc.add_font_family(load_family(&fonts.dir, &fonts.title_family)?);

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(style.margins);
    doc.set_page_decorator(decorator);

    for block in blocks {
        match block {
            Block::Title(text) => {
                doc.push(
                    Paragraph::new(text)
                        .aligned(Alignment::Center)
                        .styled(
                            Style::new().with_font_family(title_family.clone()).bold().with_font_size(style.title_size),
                        ),
                );
                doc.push(Break::new(1.0));
            }
            Block::Attribution(text) => {
                doc.push(
                    Paragraph::new(text)
                        .aligned(Alignment::Center)
                        .styled(Style::new().italic().with_font_size(style.attribution_size)),
                );
                doc.push(Break::new(1.0));
            }
            Block::Body(text) => {
                doc.push(Paragraph::new(text).padded(Margins::trbl(0.0, 0.0, 2.5, 0.0)));
            }
            Block::PageBreak => doc.push(PageBreak::new()),
        }
    }

    doc.render_to_file(output)
        .map_err(|e| AnthologyError::DocumentBuildFailed(e.to_string()))?;

    info!("wrote {} articles to {}", batch.len(), output.display());
    Ok(true)
}

/// Renders the continuous variant with its default style.
pub fn export_standard(batch: &[Article], fonts: &FontConfig, output: &Path) -> Result<bool> {
    render_pdf(batch, &ComposeOptions::standard(), &PageStyle::standard(), fonts, output)
}

/// Renders the one-article-per-page variant with its default style.
pub fn export_paginated(batch: &[Article], fonts: &FontConfig, output: &Path) -> Result<bool> {
    render_pdf(batch, &ComposeOptions::paginated(), &PageStyle::paginated(), fonts, output)
}
