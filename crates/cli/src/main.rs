mod echo;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};

use anthology_core::{
    CollectorConfig, DEFAULT_PAGINATED_FILENAME, DEFAULT_STANDARD_FILENAME, FetchConfig, FontConfig, TextFormat,
    collect_articles, export_paginated, export_standard, format_batch, load_archive, parse_manifest, save_archive,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which PDF variant(s) to export
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// Continuous flow with source-attribution lines
    Standard,
    /// One article per page, no attribution
    Paginated,
    /// Export both variants to their default filenames
    Both,
}

/// Plain-text output format for the `format` subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Markdown,
    Html,
    Text,
}

impl From<FormatArg> for TextFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Markdown => TextFormat::Markdown,
            FormatArg::Html => TextFormat::Html,
            FormatArg::Text => TextFormat::Text,
        }
    }
}

/// Archive web essay collections and export them as PDF booklets
#[derive(Parser, Debug)]
#[command(name = "anthology")]
#[command(author = "Anthology Contributors")]
#[command(version = VERSION)]
#[command(about = "Scrape an essay collection into a JSON archive and export PDF booklets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch every article listed in a manifest and save the archive
    Scrape {
        /// Manifest file, one `[Title] https://url` entry per line
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Archive file to write
        #[arg(short, long, default_value = "articles.json", value_name = "FILE")]
        archive: PathBuf,

        /// Pause between consecutive fetches, in seconds
        #[arg(long, default_value = "2", value_name = "SECS")]
        delay: u64,

        /// HTTP timeout in seconds
        #[arg(long, default_value = "10", value_name = "SECS")]
        timeout: u64,

        /// Custom User-Agent for HTTP requests
        #[arg(long, value_name = "UA")]
        user_agent: Option<String>,
    },

    /// Export PDF booklet(s) from an existing archive, without re-fetching
    Export {
        /// Archive file to read
        #[arg(default_value = "articles.json", value_name = "FILE")]
        archive: PathBuf,

        /// Which variant(s) to export
        #[arg(long, value_enum, default_value = "both")]
        variant: Variant,

        /// Output file (single variant only; defaults to the variant's fixed filename)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Directory holding the TTF font files
        #[arg(long, default_value = "fonts", value_name = "DIR")]
        font_dir: PathBuf,

        /// Font family for article titles
        #[arg(long, default_value = "SimHei", value_name = "NAME")]
        title_font: String,

        /// Font family for body text
        #[arg(long, default_value = "SimSun", value_name = "NAME")]
        body_font: String,
    },

    /// Render an archive as Markdown, HTML, or plain text
    Format {
        /// Archive file to read
        #[arg(default_value = "articles.json", value_name = "FILE")]
        archive: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: FormatArg,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run_scrape(
    manifest: PathBuf, archive: PathBuf, delay: u64, timeout: u64, user_agent: Option<String>,
) -> anyhow::Result<()> {
    let text =
        fs::read_to_string(&manifest).with_context(|| format!("failed to read manifest {}", manifest.display()))?;
    let entries = parse_manifest(&text);
    echo::print_info(&format!("manifest lists {} articles", entries.len()));

    let config = CollectorConfig {
        delay: Duration::from_secs(delay),
        fetch: FetchConfig {
            timeout,
            user_agent: user_agent.unwrap_or_else(|| FetchConfig::default().user_agent),
        },
    };

    let outcome = collect_articles(&entries, &config).await?;

    if outcome.batch.is_empty() {
        echo::print_warning("no articles scraped; archive not written");
        return Ok(());
    }

    save_archive(&outcome.batch, &archive)
        .with_context(|| format!("failed to write archive {}", archive.display()))?;
    echo::print_success(&format!(
        "scraped {}/{} articles into {}",
        outcome.succeeded,
        outcome.attempted,
        archive.display()
    ));
    Ok(())
}

fn run_export(
    archive: PathBuf, variant: Variant, output: Option<PathBuf>, fonts: FontConfig,
) -> anyhow::Result<()> {
    if variant == Variant::Both && output.is_some() {
        bail!("--output requires a single variant (--variant standard or --variant paginated)");
    }

    let batch =
        load_archive(&archive).with_context(|| format!("failed to read archive {}", archive.display()))?;
    echo::print_info(&format!("loaded {} articles from {}", batch.len(), archive.display()));

    let jobs: Vec<(Variant, PathBuf)> = match variant {
        Variant::Standard => {
            vec![(Variant::Standard, output.unwrap_or_else(|| PathBuf::from(DEFAULT_STANDARD_FILENAME)))]
        }
        Variant::Paginated => {
            vec![(Variant::Paginated, output.unwrap_or_else(|| PathBuf::from(DEFAULT_PAGINATED_FILENAME)))]
        }
        Variant::Both => vec![
            (Variant::Standard, PathBuf::from(DEFAULT_STANDARD_FILENAME)),
            (Variant::Paginated, PathBuf::from(DEFAULT_PAGINATED_FILENAME)),
        ],
    };

    // A failed build is reported but must not abort the other variant.
    for (job, path) in jobs {
        let result = match job {
            Variant::Standard => export_standard(&batch, &fonts, &path),
            Variant::Paginated => export_paginated(&batch, &fonts, &path),
            Variant::Both => unreachable!(),
        };
        match result {
            Ok(true) => echo::print_success(&format!("wrote {}", path.display())),
            Ok(false) => echo::print_info("archive is empty; nothing to render"),
            Err(err) => {
                echo::print_error(&format!("{}: {err}", path.display()));
                echo::print_info(&format!(
                    "check that {} contains {}-Regular.ttf (and Bold/Italic/BoldItalic) for both families",
                    fonts.dir.display(),
                    fonts.body_family
                ));
            }
        }
    }
    Ok(())
}

fn run_format(archive: PathBuf, format: FormatArg, output: Option<PathBuf>) -> anyhow::Result<()> {
    let batch =
        load_archive(&archive).with_context(|| format!("failed to read archive {}", archive.display()))?;
    let rendered = format_batch(&batch, format.into());

    match output {
        Some(path) => {
            fs::write(&path, rendered).with_context(|| format!("failed to write to {}", path.display()))?;
            echo::print_success(&format!("output written to {}", path.display()));
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        echo::print_banner();
    }

    match cli.command {
        Command::Scrape { manifest, archive, delay, timeout, user_agent } => {
            run_scrape(manifest, archive, delay, timeout, user_agent).await
        }
        Command::Export { archive, variant, output, font_dir, title_font, body_font } => {
            let fonts = FontConfig { dir: font_dir, title_family: title_font, body_family: body_font };
            run_export(archive, variant, output, fonts)
        }
        Command::Format { archive, format, output } => run_format(archive, format, output),
    }
}
