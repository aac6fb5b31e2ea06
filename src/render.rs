//! Fortune file layout.
//!
//! Each headline becomes one fortune entry:
//!
//! ```text
//! Title
//! Date
//!
//! Wrapped narrative with cues[0].
//!
//! * - wrapped addendums
//!
//! [0]: http://link
//!
//! Link: <title link>
//! Comments: <comments link>
//! %
//! ```
//!
//! Stub records only get their title and narrative.

use std::borrow::Cow;

use crate::options::RenderOptions;
use crate::patterns::{NON_SPACE_WHITESPACE, SENTENCE_ENDING};
use crate::result::HeadlineRecord;

/// Separator line between fortune(6) entries.
pub const FORTUNE_SEPARATOR: &str = "%";

/// Render one headline as a fortune entry, without the trailing separator.
#[must_use]
pub fn render_headline(record: &HeadlineRecord, options: &RenderOptions) -> String {
    let annotated = record.annotate();
    let body = fill(&annotated.text, options.width);

    if record.is_stub() {
        return format!("{}\n\n{body}\n", record.title);
    }

    let mut out = format!("{}\n{}\n\n{body}\n\n", record.title, record.date);

    for addendum in &record.addendums {
        out.push_str(&fill(addendum, options.width));
        out.push('\n');
    }
    if !record.addendums.is_empty() {
        out.push('\n');
    }

    for (i, link) in annotated.references.iter().enumerate() {
        out.push_str(&format!("[{i}]: {link}\n"));
    }
    if !annotated.references.is_empty() {
        out.push('\n');
    }

    out.push_str(&format!(
        "Link: {}\nComments: {}\n",
        record.title_link, record.comments_link
    ));
    out
}

/// Render a page worth of headlines, each followed by a `%` line.
#[must_use]
pub fn render_page(records: &[HeadlineRecord], options: &RenderOptions) -> String {
    records
        .iter()
        .map(|record| format!("{}{FORTUNE_SEPARATOR}\n", render_headline(record, options)))
        .collect()
}

/// Wrap a paragraph: every whitespace char becomes a space, sentences end
/// with two spaces, lines are filled greedily up to `width` columns and
/// long words are broken.
///
/// Tabs become a single space instead of being expanded to 8-column stops,
/// and width is measured in display columns rather than code points, so
/// narratives with tabs or wide characters wrap differently from the
/// published fortune file.
#[must_use]
pub fn fill(text: &str, width: usize) -> String {
    let flat = NON_SPACE_WHITESPACE.replace_all(text, " ");
    let spaced = double_space_sentences(&flat);
    let options = textwrap::Options::new(width)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);
    textwrap::fill(&spaced, options)
}

fn double_space_sentences(text: &str) -> Cow<'_, str> {
    let mut out = String::new();
    let mut last = 0;

    for m in SENTENCE_ENDING.find_iter(text) {
        if text[m.end()..].starts_with(' ') {
            continue;
        }
        out.push_str(&text[last..m.end()]);
        out.push(' ');
        last = m.end();
    }

    if last == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ContextSpan;

    fn full_record() -> HeadlineRecord {
        HeadlineRecord {
            title: "X".to_string(),
            title_link: "http://a".to_string(),
            date: "2020-01-01".to_string(),
            comments_link: "http://c".to_string(),
            text: "See this.".to_string(),
            context: vec![ContextSpan {
                start: 4,
                length: 4,
                link: "http://x".to_string(),
            }],
            addendums: vec![],
        }
    }

    #[test]
    fn full_record_layout() {
        let out = render_headline(&full_record(), &RenderOptions::default());
        assert_eq!(
            out,
            "X\n2020-01-01\n\nSee this[0].\n\n[0]: http://x\n\nLink: http://a\nComments: http://c\n"
        );
    }

    #[test]
    fn addendums_get_their_own_block() {
        let record = HeadlineRecord {
            context: vec![],
            text: "Nothing.".to_string(),
            addendums: vec!["* - never.".to_string()],
            ..full_record()
        };
        let out = render_headline(&record, &RenderOptions::default());
        assert_eq!(
            out,
            "X\n2020-01-01\n\nNothing.\n\n* - never.\n\nLink: http://a\nComments: http://c\n"
        );
    }

    #[test]
    fn stub_layout() {
        let record = HeadlineRecord {
            title: "Lonely".to_string(),
            text: "Some words.".to_string(),
            ..HeadlineRecord::default()
        };
        let out = render_headline(&record, &RenderOptions::default());
        assert_eq!(out, "Lonely\n\nSome words.\n");
    }

    #[test]
    fn page_entries_are_separated() {
        let records = vec![full_record(), full_record()];
        let out = render_page(&records, &RenderOptions::default());
        assert_eq!(out.matches("\n%\n").count(), 2);
        assert!(out.ends_with("Comments: http://c\n%\n"));
    }

    #[test]
    fn fill_respects_width() {
        let text = "word ".repeat(40);
        for line in fill(&text, 20).lines() {
            assert!(line.chars().count() <= 20, "{line:?}");
        }
    }

    #[test]
    fn fill_flattens_newlines() {
        assert_eq!(fill("one\ntwo\tthree", 75), "one two three");
    }

    #[test]
    fn tabs_become_one_space() {
        assert_eq!(fill("a\tb", 75), "a b");
    }

    #[test]
    fn sentences_get_two_spaces() {
        assert_eq!(fill("It broke. Nobody cared.", 75), "It broke.  Nobody cared.");
        assert_eq!(fill("Already.  Spaced.", 75), "Already.  Spaced.");
        assert_eq!(fill("The U.S. agency", 75), "The U.S. agency");
    }

    #[test]
    fn long_words_are_broken() {
        let url = "x".repeat(100);
        let out = fill(&url, 75);
        assert_eq!(out.lines().count(), 2);
    }
}
