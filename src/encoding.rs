//! Charset detection and decoding of archived pages.
//!
//! The archive mixes pages saved as UTF-8 with a few older ones declaring
//! a legacy charset. Pages are decoded to UTF-8 before parsing so that
//! char offsets in context spans refer to the text a reader sees.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

use crate::error::{Error, Result};

/// How many leading bytes are searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Matches both `<meta charset=...>` and the `charset=` parameter of a
/// `<meta http-equiv="Content-Type" content="...">` declaration.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+?charset\s*=\s*["']?([A-Za-z0-9._:-]+)"#).expect("valid regex")
});

/// Detect the character encoding of a page.
///
/// A byte order mark wins, then the first `<meta>` charset declaration
/// within the first kilobyte; UTF-8 otherwise.
#[must_use]
pub fn detect_encoding(page: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(page) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&page[..page.len().min(SNIFF_LEN)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn declared_charset(head: &str) -> Option<&str> {
    META_CHARSET_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Decode page bytes to UTF-8.
///
/// With `lossy` set, malformed sequences become U+FFFD. Otherwise they
/// fail the whole page with [`Error::Encoding`].
///
/// # Examples
///
/// ```
/// use ngate_fortune::encoding::decode_page;
///
/// let page = b"<meta charset=\"windows-1252\"><p>caf\xE9</p>";
/// assert!(decode_page(page, true)?.contains("café"));
/// # Ok::<(), ngate_fortune::Error>(())
/// ```
pub fn decode_page(page: &[u8], lossy: bool) -> Result<String> {
    let encoding = detect_encoding(page);
    let (decoded, used, had_errors) = encoding.decode(page);

    if had_errors && !lossy {
        return Err(Error::Encoding(format!(
            "page contains bytes that are not valid {}",
            used.name()
        )));
    }

    Ok(decoded.into_owned())
}
