//! Detagging state.
//!
//! `DetagState` is the running state threaded through the narrative walk:
//! the plain text produced so far, a cursor holding its length in chars,
//! the context spans recorded along the way and the current addendums.

use crate::dom::char_len;
use crate::result::ContextSpan;

/// Output of a finished walk: trimmed text, addendums and context spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detagged {
    pub text: String,
    pub addendums: Vec<String>,
    pub context: Vec<ContextSpan>,
}

/// Running state of the narrative walk.
#[derive(Debug, Default)]
pub struct DetagState {
    /// Length of `buffer` in chars.
    cursor: usize,
    buffer: String,
    context: Vec<ContextSpan>,
    addendums: Vec<String>,
}

impl DetagState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append plain text and advance the cursor
    pub fn push_text(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.cursor += char_len(text);
    }

    /// Append anchor text and record a context span for it
    ///
    /// The span starts one char before the cursor: narrative text follows a
    /// `<br>` and opens with a separator that trimming removes, so offsets
    /// taken here line up with the trimmed text.
    pub fn push_link(&mut self, text: &str, link: &str) {
        self.context.push(ContextSpan {
            start: self.cursor.saturating_sub(1),
            length: char_len(text),
            link: link.to_string(),
        });
        self.push_text(text);
    }

    /// Replace the addendum list
    pub fn set_addendums(&mut self, addendums: &[&str]) {
        self.addendums = addendums.iter().map(|a| (*a).to_string()).collect();
    }

    /// Finish the walk
    #[must_use]
    pub fn finish(self) -> Detagged {
        Detagged {
            text: self.buffer.trim().to_string(),
            addendums: self.addendums,
            context: self.context,
        }
    }
}
