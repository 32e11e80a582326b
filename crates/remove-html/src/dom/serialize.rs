// ABOUTME: Serializes the direct children of <body> back into an HTML string.
// ABOUTME: Elements render as full markup, top-level text is emitted raw, other node kinds are dropped.

use ego_tree::NodeRef;
use scraper::{Html, Node};

const HTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Serializes the body's direct children in document order.
///
/// Top-level text nodes are written as their raw text content. Comments and
/// other non-element nodes directly under `<body>` are skipped; deeper ones
/// are part of their parent element's markup. Returns an empty string when
/// the document has no body left.
pub fn serialize_body(doc: &Html) -> String {
    let Some(body) = find_body(doc) else {
        return String::new();
    };

    let mut output = String::new();
    for child in body.children() {
        match child.value() {
            Node::Element(_) => serialize_node(child, &mut output),
            Node::Text(text) => output.push_str(&**text),
            _ => {}
        }
    }
    output
}

/// The first `body` (or `frameset`) child of the `<html>` document element.
fn find_body(doc: &Html) -> Option<NodeRef<'_, Node>> {
    let document_element = doc
        .tree
        .root()
        .children()
        .find(|node| node.value().is_element())?;
    if !is_html_element(document_element, "html") {
        return None;
    }
    document_element
        .children()
        .find(|node| is_html_element(*node, "body") || is_html_element(*node, "frameset"))
}

fn is_html_element(node: NodeRef<'_, Node>, name: &str) -> bool {
    match node.value() {
        Node::Element(el) => &*el.name.ns == HTML_NS && el.name() == name,
        _ => false,
    }
}

// Nested text is always escaped, script and style included.
fn serialize_node(node: NodeRef<'_, Node>, output: &mut String) {
    match node.value() {
        Node::Text(text) => output.push_str(&escape_text(text)),
        Node::Element(el) => {
            let tag_name = el.name();

            output.push('<');
            output.push_str(tag_name);
            for (name, value) in el.attrs() {
                output.push(' ');
                output.push_str(name);
                output.push_str("=\"");
                output.push_str(&escape_attr(value));
                output.push('"');
            }

            if !node.has_children() {
                if &*el.name.ns != HTML_NS {
                    output.push_str("/>");
                    return;
                }
                if is_void_element(tag_name) {
                    output.push_str(" />");
                    return;
                }
            }

            output.push('>');
            for child in node.children() {
                serialize_node(child, output);
            }
            output.push_str("</");
            output.push_str(tag_name);
            output.push('>');
        }
        Node::Comment(comment) => {
            output.push_str("<!--");
            output.push_str(&**comment);
            output.push_str("-->");
        }
        _ => {}
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Check if tag is void element
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag.to_lowercase().as_str(),
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
