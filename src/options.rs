//! Configuration options for page extraction and rendering.
//!
//! Both structs have public fields and sensible defaults, so callers only
//! spell out what they change.

/// Marker token carried by the first span of every genuine story block.
pub const DEFAULT_MARKER_CLASS: &str = "storylink";

/// Column the fortune layout wraps at.
pub const DEFAULT_WIDTH: usize = 75;

/// Configuration options for page extraction.
///
/// # Example
///
/// ```rust
/// use ngate_fortune::Options;
///
/// let options = Options {
///     apply_special_cases: false,
///     ..Options::default()
/// };
/// assert_eq!(options.marker_class, "storylink");
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Class token that identifies a story block.
    ///
    /// Default: `"storylink"`
    pub marker_class: String,

    /// Consult the special-case table for addendums.
    ///
    /// When disabled, records never carry addendums.
    ///
    /// Default: `true`
    pub apply_special_cases: bool,

    /// Replace undecodable bytes with U+FFFD instead of failing the page.
    ///
    /// Only affects the byte-oriented entry points.
    ///
    /// Default: `true`
    pub lossy_decoding: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            apply_special_cases: true,
            lossy_decoding: true,
        }
    }
}

/// Layout options for the fortune renderer.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Maximum line width of wrapped paragraphs.
    ///
    /// Default: `75`
    pub width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}
