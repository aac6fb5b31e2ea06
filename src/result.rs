//! Result types for extraction output.
//!
//! A page yields a [`PageResult`]: its headlines in document order plus
//! the warnings produced by blocks that had to be skipped.

use serde::{Deserialize, Serialize};

/// Location of a hyperlink's anchor text inside [`HeadlineRecord::text`].
///
/// `start` and `length` count chars, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSpan {
    /// Offset of the anchor text, one before its first char.
    pub start: usize,

    /// Length of the anchor text.
    pub length: usize,

    /// Target of the hyperlink.
    pub link: String,
}

impl ContextSpan {
    /// Char position right after the anchor text, where the cue goes.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// One story entry of an archived page.
///
/// Stub records (a headline without discussion metadata) have empty
/// `title_link`, `date` and `comments_link`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineRecord {
    /// Headline as shown on the page.
    pub title: String,

    /// URL the headline points to.
    pub title_link: String,

    /// Date line, verbatim.
    pub date: String,

    /// URL of the discussion thread.
    pub comments_link: String,

    /// Narrative text with all markup removed.
    pub text: String,

    /// Hyperlinks found in the narrative, ordered by `start`.
    pub context: Vec<ContextSpan>,

    /// Footnotes printed after the narrative.
    pub addendums: Vec<String>,
}

impl HeadlineRecord {
    /// Whether this record came from a block without discussion metadata.
    #[must_use]
    pub fn is_stub(&self) -> bool {
        self.comments_link.is_empty()
    }
}

/// Result of parsing one archived page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageResult {
    /// Headlines in document order.
    pub headlines: Vec<HeadlineRecord>,

    /// Non-fatal issues encountered during extraction, one per skipped block.
    pub warnings: Vec<String>,
}
