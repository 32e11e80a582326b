// ABOUTME: Detaches every element selected by a Target from the parsed document tree.
// ABOUTME: Removal mutates the tree in place so later targets only see what is left.

use ego_tree::NodeId;
use scraper::{Html, Node};

use crate::params::MatchMode;
use crate::selector::Target;

/// Detaches all elements matching `target` and returns how many were detached.
///
/// The query runs against the current tree, so anything detached by an
/// earlier call is no longer visited. Matches are collected before any
/// detaching, which keeps nested matches safe.
pub fn remove_matches(doc: &mut Html, target: &Target, mode: MatchMode) -> usize {
    let matched: Vec<NodeId> = doc
        .tree
        .root()
        .descendants()
        .filter(|node| match node.value() {
            Node::Element(el) => target.matches(el, mode),
            _ => false,
        })
        .map(|node| node.id())
        .collect();

    let mut removed = 0;
    for id in matched {
        let Some(mut node) = doc.tree.get_mut(id) else {
            continue;
        };
        // Parentless nodes are already out of the tree.
        if node.parent().is_none() {
            continue;
        }
        node.detach();
        removed += 1;
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{parse_document, serialize_body};

    fn apply(html: &str, tokens: &[&str], mode: MatchMode) -> (String, Vec<usize>) {
        let mut doc = parse_document(html);
        let counts = tokens
            .iter()
            .map(|t| remove_matches(&mut doc, &Target::parse(t), mode))
            .collect();
        (serialize_body(&doc), counts)
    }

    #[test]
    fn test_removes_all_matching_tags() {
        let (out, counts) = apply("<p>a</p><div><p>b</p>c</div>", &["p"], MatchMode::Prefix);
        assert_eq!(out, "<div>c</div>");
        assert_eq!(counts, vec![2]);
    }

    #[test]
    fn test_later_target_sees_pruned_tree() {
        let (out, counts) = apply(
            r#"<div><span class="foo">x</span></div><span class="foo">y</span>"#,
            &["div", ".foo"],
            MatchMode::Prefix,
        );
        assert_eq!(out, "");
        // The nested .foo went away with its div.
        assert_eq!(counts, vec![1, 1]);
    }

    #[test]
    fn test_nested_matches_in_one_pass() {
        let (out, counts) = apply(
            "<div>a<div>b</div></div><p>keep</p>",
            &["div"],
            MatchMode::Prefix,
        );
        assert_eq!(out, "<p>keep</p>");
        assert_eq!(counts, vec![2]);
    }

    #[test]
    fn test_no_match_counts_zero() {
        let (out, counts) = apply("<p>a</p>", &["table", "#x", ".y"], MatchMode::Exact);
        assert_eq!(out, "<p>a</p>");
        assert_eq!(counts, vec![0, 0, 0]);
    }

    #[test]
    fn test_removing_body_leaves_nothing_to_serialize() {
        let (out, _) = apply("<p>a</p>", &["body"], MatchMode::Prefix);
        assert_eq!(out, "");
    }

    #[test]
    fn test_wildcard_removes_document_element() {
        let (out, counts) = apply("<p>a</p>", &["*"], MatchMode::Prefix);
        assert_eq!(out, "");
        // html, head, body and p are all matched before detaching.
        assert_eq!(counts, vec![4]);
    }
}
