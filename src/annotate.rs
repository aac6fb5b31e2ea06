//! Reference cue insertion.
//!
//! Turns a record's context spans into numbered cues (`[0]`, `[1]`, ...)
//! placed right after each link's anchor text, plus the list of URLs the
//! cues refer to.

use crate::dom::char_len;
use crate::result::{ContextSpan, HeadlineRecord};

/// Annotated text and the URLs its cues refer to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// Text with a cue after every linked phrase.
    pub text: String,
    /// `references[i]` is the URL of cue `[i]`.
    pub references: Vec<String>,
}

/// Insert a `[i]` cue after the anchor text of every span.
///
/// Spans must be in ascending `start` order, as produced by the detagger:
/// each insertion shifts every later position by the cue length, which is
/// accounted for in a running adjustment. Insertion points past the end of
/// the text are clamped to the end.
///
/// # Example
///
/// ```rust
/// use ngate_fortune::{annotate, ContextSpan};
///
/// let spans = [ContextSpan { start: 4, length: 4, link: "http://x".into() }];
/// let annotated = annotate("See this.", &spans);
/// assert_eq!(annotated.text, "See this[0].");
/// assert_eq!(annotated.references, ["http://x"]);
/// ```
#[must_use]
pub fn annotate(text: &str, context: &[ContextSpan]) -> Annotation {
    debug_assert!(
        context.windows(2).all(|w| w[0].start <= w[1].start),
        "context spans out of order"
    );

    let mut out = text.to_string();
    let mut len = char_len(text);
    let mut adjust = 0;

    for (i, span) in context.iter().enumerate() {
        let cue = format!("[{i}]");
        let at = (span.end() + adjust).min(len);
        out.insert_str(byte_offset(&out, at), &cue);

        let added = char_len(&cue);
        adjust += added;
        len += added;
    }

    Annotation {
        text: out,
        references: context.iter().map(|span| span.link.clone()).collect(),
    }
}

fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices().nth(char_index).map_or(s.len(), |(b, _)| b)
}

impl HeadlineRecord {
    /// Narrative text with reference cues inserted.
    #[must_use]
    pub fn annotate(&self) -> Annotation {
        annotate(&self.text, &self.context)
    }
}
