//! Converts a mirrored n-gate.com archive into a fortune(6) file.
//!
//! Reads every `hackernews/**/0/index.html` below `--root` (or the pages
//! given on the command line, `-` for stdin) and writes fortune entries
//! or JSON to stdout. Progress and skipped stories are logged to stderr.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use ngate_fortune::render::render_page;
use ngate_fortune::{archive, parse_page_bytes_with_options, Options, RenderOptions, DEFAULT_WIDTH};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ngate-fortune", version, about)]
struct Cli {
    /// Root of the n-gate.com mirror
    #[arg(long, env = "NGATE_ROOT", default_value = "n-gate.com")]
    root: PathBuf,

    /// Individual pages to convert instead of the whole mirror ("-" reads stdin)
    pages: Vec<PathBuf>,

    /// Wrap width of narrative text
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Class token that marks a story paragraph
    #[arg(long, default_value = ngate_fortune::DEFAULT_MARKER_CLASS)]
    marker_class: String,

    /// Emit one JSON document per page instead of fortune entries
    #[arg(long)]
    json: bool,

    /// Fail a page on bytes invalid in its charset instead of replacing them
    #[arg(long)]
    strict_encoding: bool,

    /// Ignore the built-in addendum overrides
    #[arg(long)]
    no_special_cases: bool,
}

#[derive(Serialize)]
struct JsonPage<'a> {
    page: String,
    #[serde(flatten)]
    result: &'a ngate_fortune::PageResult,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = Options {
        marker_class: cli.marker_class.clone(),
        apply_special_cases: !cli.no_special_cases,
        lossy_decoding: !cli.strict_encoding,
    };
    let render_options = RenderOptions { width: cli.width };

    let pages = if cli.pages.is_empty() {
        archive::discover_pages(&cli.root)
            .with_context(|| format!("cannot list archive under {}", cli.root.display()))?
    } else {
        cli.pages.clone()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0usize;

    for page in &pages {
        info!("processing {}", page.display());

        let parsed = read_input(page).and_then(|bytes| {
            parse_page_bytes_with_options(&bytes, &options).map_err(anyhow::Error::from)
        });
        let result = match parsed {
            Ok(result) => result,
            Err(err) => {
                warn!(page = %page.display(), %err, "skipping page");
                failed += 1;
                continue;
            }
        };

        if cli.json {
            let doc = JsonPage {
                page: page.display().to_string(),
                result: &result,
            };
            serde_json::to_writer(&mut out, &doc)?;
            writeln!(out)?;
        } else {
            out.write_all(render_page(&result.headlines, &render_options).as_bytes())?;
        }
    }

    out.flush()?;
    info!(pages = pages.len(), failed, "done");
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("failed to read from stdin")?;
        return Ok(buffer);
    }
    Ok(archive::read_page(path)?)
}
