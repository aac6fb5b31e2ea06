//! Story metadata extraction.
//!
//! A story block opens with a run of metadata spans (title, date, comments
//! link) separated from the narrative by `<br>` tags:
//!
//! ```html
//! <p><span class="storylink"><a href="TITLE LINK">TITLE</a></span><br>
//! <span class="small">DATE</span><br>
//! <span class="small"><a href="COMMENTS LINK">comments</a></span><br>
//! NARRATIVE</p>
//! ```
//!
//! The archive is hand-authored, so a few historical layouts are handled
//! explicitly here.

use dom_query::{NodeRef, Selection};
use tracing::debug;

use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::INJECTED_ANALYTICS;
use crate::result::HeadlineRecord;
use crate::special_cases::lacks_comments_anchor;

/// Metadata of one story block.
pub enum BlockRecord<'a> {
    /// A lone storylink span followed by text, with no links or date
    /// (n-gate.com/hackernews/2016/10/21/0/index.html). The record is
    /// complete.
    Stub(HeadlineRecord),

    /// Regular story: the record still needs its narrative detagged.
    Story {
        record: HeadlineRecord,
        narrative: Vec<NodeRef<'a>>,
    },
}

/// Extract metadata from a story block and locate its narrative.
///
/// `index` is the block's position among the page's story blocks and is
/// only used in error reports.
///
/// # Errors
///
/// Returns [`Error::StructuralMismatch`] when a non-stub block lacks a
/// title anchor, a date span or a comments anchor.
pub fn extract_record<'a>(block: &Selection<'a>, index: usize) -> Result<BlockRecord<'a>> {
    let mut spans = dom::each(&block.select("span"));
    let children = dom::child_nodes(block);

    if spans.len() == 1 {
        let title = spans[0].text().trim().to_string();
        let text = children
            .last()
            .map(|node| node.text().trim().to_string())
            .unwrap_or_default();
        return Ok(BlockRecord::Stub(HeadlineRecord {
            title,
            text,
            ..HeadlineRecord::default()
        }));
    }

    // Page view counters leaked into a metadata span on
    // n-gate.com/hackernews/2018/10/31/0/index.html.
    if spans.len() > 3 && INJECTED_ANALYTICS.is_match(&spans[1].text()) {
        debug!(block = index, "dropping injected analytics span");
        spans.remove(1);
    }

    let title_anchor = spans
        .first()
        .map(|span| span.select_single("a"))
        .filter(Selection::exists)
        .ok_or_else(|| Error::mismatch(index, "title span has no anchor"))?;
    let title = title_anchor.text().trim().to_string();
    let title_link = dom::get_attribute(&title_anchor, "href")
        .ok_or_else(|| Error::mismatch(index, "title anchor has no href"))?;

    let date = spans
        .get(1)
        .map(|span| span.text().to_string())
        .ok_or_else(|| Error::mismatch(index, "missing date span"))?;

    let comments_link = if lacks_comments_anchor(&title_link) {
        title_link.clone()
    } else {
        spans
            .get(2)
            .map(|span| span.select_single("a"))
            .filter(Selection::exists)
            .and_then(|anchor| dom::get_attribute(&anchor, "href"))
            .ok_or_else(|| Error::mismatch(index, "missing comments anchor"))?
    };

    Ok(BlockRecord::Story {
        record: HeadlineRecord {
            title,
            title_link,
            date,
            comments_link,
            ..HeadlineRecord::default()
        },
        narrative: narrative_nodes(&children).to_vec(),
    })
}

/// Narrative nodes: everything after the last `<br>` child. Without any
/// `<br>` only the final child node is narrative.
fn narrative_nodes<'n, 'a>(children: &'n [NodeRef<'a>]) -> &'n [NodeRef<'a>] {
    let start = children
        .iter()
        .rposition(|node| dom::is_tag(node, "br"))
        .map_or(children.len().saturating_sub(1), |i| i + 1);
    &children[start..]
}
