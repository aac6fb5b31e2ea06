//! Error types for ngate-fortune.
//!
//! Only whole-document failures escape the page parser. Per-block problems
//! are reported as [`Error::StructuralMismatch`] values, which the page
//! parser turns into warnings before moving on to the next block.

use std::path::PathBuf;

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page bytes are not valid in their declared encoding.
    #[error("Encoding detection failed: {0}")]
    Encoding(String),

    /// A story block lacks the metadata layout the extractor expects.
    #[error("block {block}: {reason}")]
    StructuralMismatch {
        /// Zero-based index of the block among the storylink blocks of the page.
        block: usize,
        /// What was missing.
        reason: String,
    },

    /// Reading the archive failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn mismatch(block: usize, reason: impl Into<String>) -> Self {
        Self::StructuralMismatch {
            block,
            reason: reason.into(),
        }
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
