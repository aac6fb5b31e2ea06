//! # ngate-fortune
//!
//! Turns archived n-gate.com "webshit weekly" pages into structured
//! headline records, and those records into fortune(6) entries.
//!
//! ## Quick Start
//!
//! ```rust
//! use ngate_fortune::parse_page;
//!
//! let html = r#"<p><span class="storylink"><a href="http://a">X</a></span><br>
//! <span class="small">2020-01-01</span><br>
//! <span class="small"><a href="http://c">comments</a></span><br>
//! See <a href="http://x">this</a>.</p>"#;
//!
//! let page = parse_page(html)?;
//! let headline = &page.headlines[0];
//! assert_eq!(headline.text, "See this.");
//! assert_eq!(headline.annotate().text, "See this[0].");
//! # Ok::<(), ngate_fortune::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Segmenting**: keeps only paragraphs marked as stories
//! - **Record extraction**: title, links and date from each story's metadata spans
//! - **Detagging**: plain narrative text plus the char offsets of its hyperlinks
//! - **Annotation**: `[i]` cues after each linked phrase, with a reference list
//!
//! Per-story layout quirks of the archive are handled by a static table in
//! [`special_cases`]. A story that still does not fit is skipped and
//! reported in [`PageResult::warnings`]; it never fails the page.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Story extraction pipeline (segmenting, metadata, detagging).
pub mod extractor;

/// Reference cue insertion.
pub mod annotate;

/// Static overrides for known archive quirks.
pub mod special_cases;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Fortune file layout.
pub mod render;

/// Archive mirror traversal.
pub mod archive;

// Public API - re-exports
pub use annotate::{annotate, Annotation};
pub use error::{Error, Result};
pub use options::{Options, RenderOptions, DEFAULT_MARKER_CLASS, DEFAULT_WIDTH};
pub use result::{ContextSpan, HeadlineRecord, PageResult};

/// Extracts the headlines of one archived page using default options.
///
/// # Example
///
/// ```rust
/// use ngate_fortune::parse_page;
///
/// let page = parse_page("<html><body><p>No stories today.</p></body></html>")?;
/// assert!(page.headlines.is_empty());
/// # Ok::<(), ngate_fortune::Error>(())
/// ```
pub fn parse_page(html: &str) -> Result<PageResult> {
    parse_page_with_options(html, &Options::default())
}

/// Extracts the headlines of one archived page with custom options.
///
/// # Example
///
/// ```rust
/// use ngate_fortune::{parse_page_with_options, Options};
///
/// let html = r#"<p><span class="story">Headline</span> text</p>"#;
/// let options = Options {
///     marker_class: "story".to_string(),
///     ..Options::default()
/// };
/// let page = parse_page_with_options(html, &options)?;
/// assert_eq!(page.headlines[0].title, "Headline");
/// # Ok::<(), ngate_fortune::Error>(())
/// ```
pub fn parse_page_with_options(html: &str, options: &Options) -> Result<PageResult> {
    extract::extract_page(html, options)
}

/// Extracts the headlines of one archived page from raw bytes.
///
/// The charset is taken from a byte order mark or a `<meta>` declaration,
/// defaulting to UTF-8.
///
/// # Example
///
/// ```rust
/// use ngate_fortune::parse_page_bytes;
///
/// let html = b"<meta charset=\"windows-1252\"><p><span class=\"storylink\">Caf\xE9</span> x</p>";
/// let page = parse_page_bytes(html)?;
/// assert_eq!(page.headlines[0].title, "Café");
/// # Ok::<(), ngate_fortune::Error>(())
/// ```
pub fn parse_page_bytes(html: &[u8]) -> Result<PageResult> {
    parse_page_bytes_with_options(html, &Options::default())
}

/// Extracts the headlines of one archived page from raw bytes with custom
/// options.
///
/// # Errors
///
/// With `lossy_decoding` disabled, bytes that are invalid in the detected
/// charset fail the whole page with [`Error::Encoding`].
pub fn parse_page_bytes_with_options(html: &[u8], options: &Options) -> Result<PageResult> {
    let html_str = encoding::decode_page(html, options.lossy_decoding)?;
    parse_page_with_options(&html_str, options)
}
