//! Story block selection.
//!
//! Every story on an archive page is a `<p>` whose first span carries the
//! storylink class. Other paragraphs (intro blurbs, footers, the odd
//! decorative paragraph) are dropped here.

use dom_query::{Document, Selection};

use crate::dom;

/// Collect the story blocks of a page, in document order.
///
/// A paragraph qualifies when the first `<span>` inside it has `marker`
/// among its class tokens. An empty result is a valid outcome.
#[must_use]
pub fn story_blocks<'a>(doc: &'a Document, marker: &str) -> Vec<Selection<'a>> {
    dom::each(&doc.select("p"))
        .into_iter()
        .filter(|p| is_story_block(p, marker))
        .collect()
}

fn is_story_block(p: &Selection, marker: &str) -> bool {
    let first_span = p.select_single("span");
    first_span.exists() && dom::has_class_token(&first_span, marker)
}
