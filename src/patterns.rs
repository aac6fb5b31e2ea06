//! Compiled regex patterns used by the extraction and rendering passes.
//!
//! All patterns are compiled once at first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Analytics counter text that a broken template injected into a metadata
/// span, e.g. "4 requests for this page".
/// See n-gate.com/hackernews/2018/10/31/0/index.html.
pub static INJECTED_ANALYTICS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"requests? for").expect("INJECTED_ANALYTICS regex"));

/// A lowercase letter, sentence punctuation and an optional closing quote,
/// followed by a space. Used to give sentences two trailing spaces.
pub static SENTENCE_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[a-z][.!?]["']? "#).expect("SENTENCE_ENDING regex"));

/// Whitespace characters other than the plain space.
pub static NON_SPACE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\n\x0B\x0C\r]").expect("NON_SPACE_WHITESPACE regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics_matches_singular_and_plural() {
        assert!(INJECTED_ANALYTICS.is_match("1 request for this page"));
        assert!(INJECTED_ANALYTICS.is_match("12 requests for this page"));
        assert!(!INJECTED_ANALYTICS.is_match("2018-10-31"));
    }

    #[test]
    fn sentence_ending_requires_lowercase_before_period() {
        assert!(SENTENCE_ENDING.is_match("it works. Then"));
        assert!(!SENTENCE_ENDING.is_match("version 2. Next"));
        assert!(!SENTENCE_ENDING.is_match("U.S. consumer"));
    }
}
