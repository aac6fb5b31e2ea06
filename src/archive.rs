//! Discovery of pages in a mirrored n-gate.com archive.
//!
//! A mirror keeps one page per weekly issue at
//! `<root>/hackernews/YYYY/MM/DD/0/index.html`; walking directories in
//! name order puts the issues in publication order.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Directory below the mirror root that holds the weekly issues.
pub const ISSUES_DIR: &str = "hackernews";

const PAGE_DIR: &str = "0";
const PAGE_FILE: &str = "index.html";

/// Find every `hackernews/**/0/index.html` below `root`, sorted.
///
/// Symlinks are not followed, so a link looping back into the mirror
/// cannot repeat issues.
pub fn discover_pages(root: &Path) -> Result<Vec<PathBuf>> {
    let issues = root.join(ISSUES_DIR);
    let walker = WalkDir::new(&issues)
        .follow_links(false)
        .sort_by_file_name();

    let mut pages = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| {
            let path = err.path().map_or_else(|| issues.clone(), Path::to_path_buf);
            io_error(&path, err.into())
        })?;
        if entry.file_type().is_file() && is_issue_page(entry.path()) {
            pages.push(entry.into_path());
        }
    }

    debug!(count = pages.len(), root = %root.display(), "discovered archive pages");
    Ok(pages)
}

fn is_issue_page(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == PAGE_FILE)
        && path
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|dir| dir == PAGE_DIR)
}

/// Read a page's raw bytes.
pub fn read_page(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<p></p>").unwrap();
    }

    #[test]
    fn finds_issue_pages_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "hackernews/2017/01/31/0/index.html");
        touch(tmp.path(), "hackernews/2016/10/07/0/index.html");
        touch(tmp.path(), "hackernews/2016/10/21/0/index.html");
        touch(tmp.path(), "hackernews/2016/10/21/1/index.html");
        touch(tmp.path(), "hackernews/2016/10/21/0/style.css");
        touch(tmp.path(), "blog/2016/0/index.html");

        let pages = discover_pages(tmp.path()).unwrap();
        let rel: Vec<String> = pages
            .iter()
            .map(|p| p.strip_prefix(tmp.path()).unwrap().display().to_string())
            .collect();
        assert_eq!(
            rel,
            [
                "hackernews/2016/10/07/0/index.html",
                "hackernews/2016/10/21/0/index.html",
                "hackernews/2017/01/31/0/index.html",
            ]
        );
    }

    #[test]
    fn missing_archive_is_an_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = discover_pages(&tmp.path().join("n-gate.com")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loops_are_not_followed() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "hackernews/2016/10/07/0/index.html");
        std::os::unix::fs::symlink(
            tmp.path().join("hackernews"),
            tmp.path().join("hackernews/2016/loop"),
        )
        .unwrap();

        let pages = discover_pages(tmp.path()).unwrap();
        assert_eq!(pages, [tmp.path().join("hackernews/2016/10/07/0/index.html")]);
    }

    #[test]
    fn read_page_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.html");
        let err = read_page(&missing).unwrap_err();
        assert!(err.to_string().contains("nope.html"));
    }
}
