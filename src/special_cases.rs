//! Hand-maintained overrides for archive pages the generic rules get wrong.
//!
//! Footnotes on n-gate pages are placed inconsistently (sometimes inside
//! the story, sometimes at the bottom of the page), so there is no way to
//! find their text programmatically. Entries name the page that needs
//! them where it is known.

/// What has to appear in the narrative for an override to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A `<sup>` footnote marker.
    FootnoteMarker,
    /// Any element that is not a linked anchor.
    AnyMarkup,
}

/// One addendum override.
#[derive(Debug, Clone, Copy)]
pub struct AddendumOverride {
    /// Exact headline title the override is keyed on.
    pub title: &'static str,
    pub trigger: Trigger,
    /// Replacement addendum list.
    pub addendums: &'static [&'static str],
    /// Archive page that needs the override, when known.
    pub page: Option<&'static str>,
}

pub static ADDENDUM_OVERRIDES: &[AddendumOverride] = &[
    AddendumOverride {
        title: "Police complaints drop over 90% after deploying body cameras",
        trigger: Trigger::FootnoteMarker,
        addendums: &["* - I'm kidding. A Hackernews would never set foot in the East Bay."],
        page: Some("n-gate.com/hackernews/2016/10/07/0/index.html"),
    },
    AddendumOverride {
        title: "Who Are My Investors?",
        trigger: Trigger::FootnoteMarker,
        addendums: &["* - never."],
        page: None,
    },
    // Fires on any markup in the narrative, not only <sup>.
    AddendumOverride {
        title: "Golang SSH Security",
        trigger: Trigger::AnyMarkup,
        addendums: &["* - Imagine that.  Vendor-related problems with Go.  For a change, this one couldn't have been trivially solved with plain old package management."],
        page: None,
    },
];

/// Title links of stories published without a comments anchor. Their
/// comments link falls back to the title link, which already points at
/// the discussion.
pub static MISSING_COMMENTS_ANCHOR: &[&str] = &[
    // n-gate.com/hackernews/2020/07/31/0/index.html, "Ask HN: Is all of FAANG like this?"
    "https://news.ycombinator.com/item?id=23917131",
];

/// Look up the override for `title` fired by `trigger`.
#[must_use]
pub fn addendum_override(title: &str, trigger: Trigger) -> Option<&'static AddendumOverride> {
    ADDENDUM_OVERRIDES
        .iter()
        .find(|o| o.trigger == trigger && o.title == title)
}

/// Whether the story at `title_link` lacks a comments anchor.
#[must_use]
pub fn lacks_comments_anchor(title_link: &str) -> bool {
    MISSING_COMMENTS_ANCHOR.contains(&title_link)
}
