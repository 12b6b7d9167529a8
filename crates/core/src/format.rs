//! Plain-text export formats for archived articles.
//!
//! Lightweight hand-templated renderings for reading an archive outside the
//! PDF pipeline. No sanitization is applied; these formats carry the
//! paragraph text verbatim.

use crate::article::Article;

/// Target format for [`format_article`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// Markdown with a bold source line and a horizontal rule.
    Markdown,
    /// A self-contained `<article>` fragment.
    Html,
    /// Plain text with an `=` underline and a `-` rule between articles.
    Text,
}

/// Formats a single article.
pub fn format_article(article: &Article, format: TextFormat) -> String {
    match format {
        TextFormat::Markdown => {
            let mut out = format!("# {}\n\n", article.title);
            out.push_str(&format!("**Source:** {}\n\n", article.url));
            out.push_str("---\n\n");
            for paragraph in &article.content {
                out.push_str(paragraph);
                out.push_str("\n\n");
            }
            out
        }
        TextFormat::Html => {
            let mut out = String::from("<article>\n  <header>\n");
            out.push_str(&format!("    <h1>{}</h1>\n", article.title));
            out.push_str(&format!(
                "    <p><strong>Source:</strong> <a href='{url}'>{url}</a></p>\n",
                url = article.url
            ));
            out.push_str("  </header>\n  <main>\n");
            for paragraph in &article.content {
                out.push_str(&format!("    <p>{paragraph}</p>\n"));
            }
            out.push_str("  </main>\n</article>\n\n");
            out
        }
        TextFormat::Text => {
            let mut out = format!("{}\n{}\n\n", article.title, "=".repeat(article.title.chars().count()));
            out.push_str(&format!("Source: {}\n\n", article.url));
            for paragraph in &article.content {
                out.push_str(paragraph);
                out.push_str("\n\n");
            }
            out.push_str(&"-".repeat(50));
            out.push_str("\n\n");
            out
        }
    }
}

/// Formats the whole batch, in order.
pub fn format_batch(batch: &[Article], format: TextFormat) -> String {
    batch.iter().map(|article| format_article(article, format)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article::new(
            "Sunrise",
            "https://example.com/a",
            vec!["First paragraph.".to_string(), "Second paragraph.".to_string()],
        )
    }

    #[test]
    fn test_markdown_layout() {
        let md = format_article(&article(), TextFormat::Markdown);
        assert!(md.starts_with("# Sunrise\n\n"));
        assert!(md.contains("**Source:** https://example.com/a"));
        assert!(md.contains("---\n\nFirst paragraph.\n\nSecond paragraph.\n\n"));
    }

    #[test]
    fn test_html_layout() {
        let html = format_article(&article(), TextFormat::Html);
        assert!(html.contains("<h1>Sunrise</h1>"));
        assert!(html.contains("<a href='https://example.com/a'>https://example.com/a</a>"));
        assert!(html.contains("<p>First paragraph.</p>"));
        assert!(html.contains("</article>"));
    }

    #[test]
    fn test_text_underline_matches_title_length() {
        let txt = format_article(&article(), TextFormat::Text);
        assert!(txt.starts_with("Sunrise\n=======\n"));
        assert!(txt.contains(&"-".repeat(50)));
    }

    #[test]
    fn test_batch_concatenates_in_order() {
        let batch = vec![
            Article::new("A", "https://example.com/a", vec![]),
            Article::new("B", "https://example.com/b", vec![]),
        ];
        let out = format_batch(&batch, TextFormat::Markdown);
        let a = out.find("# A").unwrap();
        let b = out.find("# B").unwrap();
        assert!(a < b);
    }
}
