//! Narrative detagging.
//!
//! Walks the narrative nodes of a story block, keeping their text and
//! dropping the markup. Hyperlink positions are captured during the walk:
//! once tags are gone, an offset into the plain text is the only thing
//! left that says where a link was.

use dom_query::NodeRef;
use tracing::trace;

use super::state::{DetagState, Detagged};
use crate::dom;
use crate::special_cases::{addendum_override, Trigger};

/// Strip markup from `nodes`, recording context spans and addendums.
///
/// `title` keys the special-case lookups; with `apply_special_cases` off
/// no addendums are ever produced.
#[must_use]
pub fn detag(nodes: &[NodeRef], title: &str, apply_special_cases: bool) -> Detagged {
    let mut state = DetagState::new();

    for node in nodes {
        if node.is_text() {
            state.push_text(&node.text());
            continue;
        }
        if !node.is_element() {
            continue;
        }

        if dom::is_tag(node, "a") {
            if let Some(href) = node.attr("href") {
                state.push_link(&node.text(), &href);
                continue;
            }
            // An anchor without a target (2018/12/21, "The Yoda of Silicon
            // Valley") degrades to plain text.
            trace!(title, "anchor without href");
        }

        if apply_special_cases {
            if dom::is_tag(node, "sup") {
                apply_override(&mut state, title, Trigger::FootnoteMarker);
            }
            apply_override(&mut state, title, Trigger::AnyMarkup);
        }

        state.push_text(&node.text());
    }

    state.finish()
}

fn apply_override(state: &mut DetagState, title: &str, trigger: Trigger) {
    if let Some(found) = addendum_override(title, trigger) {
        state.set_addendums(found.addendums);
    }
}
