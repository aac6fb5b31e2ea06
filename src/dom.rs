//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate covering the handful of tree
//! operations the story parser needs: child node lists that keep text
//! nodes, tag tests and class token lookups.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Check whether a node is an element with the given tag
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Check whether the class attribute contains `token` as a whole word
#[must_use]
pub fn has_class_token(sel: &Selection, token: &str) -> bool {
    sel.attr("class")
        .is_some_and(|class| class.split_ascii_whitespace().any(|c| c == token))
}

/// Get an attribute value of the first node in a selection
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all child nodes of the first node in a selection, text nodes included
#[must_use]
pub fn child_nodes<'a>(sel: &Selection<'a>) -> Vec<NodeRef<'a>> {
    sel.nodes()
        .first()
        .map(NodeRef::children)
        .unwrap_or_default()
}

/// Split a selection into one selection per matched node, in document order
#[must_use]
pub fn each<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes()
        .iter()
        .map(|node| Selection::from(node.clone()))
        .collect()
}

/// Number of chars (not bytes) in a string
#[inline]
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_nodes_keep_text() {
        let doc = parse(r#"<p><span>a</span> tail <br> more</p>"#);
        let p = doc.select("p");

        let kids = child_nodes(&p);
        assert_eq!(kids.len(), 4);
        assert!(kids[0].is_element());
        assert!(kids[1].is_text());
        assert!(is_tag(&kids[2], "br"));
        assert_eq!(kids[3].text().to_string(), " more");
    }

    #[test]
    fn test_child_nodes_of_empty_selection() {
        let doc = parse("<p>x</p>");
        assert!(child_nodes(&doc.select("table")).is_empty());
    }

    #[test]
    fn test_is_tag_ignores_case_and_text() {
        let doc = parse(r#"<p>sup<SUP>*</SUP></p>"#);
        let kids = child_nodes(&doc.select("p"));

        assert!(is_tag(&kids[1], "sup"));
        assert!(!is_tag(&kids[0], "sup"));
    }

    #[test]
    fn test_has_class_token() {
        let doc = parse(r#"<span class="big storylink">a</span><span class="storylinks">b</span>"#);
        let spans = each(&doc.select("span"));

        assert!(has_class_token(&spans[0], "storylink"));
        assert!(!has_class_token(&spans[1], "storylink"));
        assert!(!has_class_token(&doc.select("em"), "storylink"));
    }

    #[test]
    fn test_each_preserves_order() {
        let doc = parse(r#"<div><span>1</span><span>2</span><span>3</span></div>"#);
        let texts: Vec<String> = each(&doc.select("span"))
            .iter()
            .map(|s| s.text().to_string())
            .collect();
        assert_eq!(texts, ["1", "2", "3"]);
    }

    #[test]
    fn test_get_attribute() {
        let doc = parse(r#"<a href="http://example.com">x</a><a>y</a>"#);
        let links = each(&doc.select("a"));

        assert_eq!(get_attribute(&links[0], "href"), Some("http://example.com".to_string()));
        assert_eq!(get_attribute(&links[1], "href"), None);
    }

    #[test]
    fn test_char_len_counts_chars() {
        assert_eq!(char_len("Amazon\u{2019}s"), 8);
        assert_eq!("Amazon\u{2019}s".len(), 10);
    }
}
