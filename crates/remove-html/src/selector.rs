// ABOUTME: Classifies selector tokens as class, id, or tag targets and matches them against elements.
// ABOUTME: Class matching honours MatchMode (substring vs whole word); id and tag matching are fixed.

use scraper::node::Element;

use crate::params::MatchMode;

const HTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// What a single selector token removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `.name`: elements by class.
    Class(String),
    /// `#name`: elements by id.
    Id(String),
    /// Anything else: elements by tag name. `*` matches every element.
    Tag(String),
}

impl Target {
    /// Classifies a trimmed selector token by its first character.
    ///
    /// No token is invalid; unknown tag names simply match nothing.
    pub fn parse(token: &str) -> Self {
        if let Some(class) = token.strip_prefix('.') {
            Target::Class(class.to_string())
        } else if let Some(id) = token.strip_prefix('#') {
            Target::Id(id.to_string())
        } else {
            Target::Tag(token.to_string())
        }
    }

    /// Returns true if `element` is selected by this target.
    pub fn matches(&self, element: &Element, mode: MatchMode) -> bool {
        match self {
            Target::Class(class) => class_matches(element.attr("class"), class, mode),
            Target::Id(id) => element.attr("id") == Some(id.as_str()),
            Target::Tag(tag) => tag_matches(element, tag),
        }
    }
}

/// Compares a class attribute value the way `[class*=…]` and `[class~=…]` do.
fn class_matches(attr: Option<&str>, class: &str, mode: MatchMode) -> bool {
    // Empty values never match either attribute operator.
    if class.is_empty() {
        return false;
    }
    let Some(value) = attr else {
        return false;
    };
    match mode {
        MatchMode::Prefix => value.contains(class),
        MatchMode::Exact => value.split_ascii_whitespace().any(|c| c == class),
    }
}

/// Tag-name lookup: case-insensitive for HTML elements, exact for SVG/MathML.
fn tag_matches(element: &Element, tag: &str) -> bool {
    if tag == "*" {
        return true;
    }
    if &*element.name.ns == HTML_NS {
        element.name().eq_ignore_ascii_case(tag)
    } else {
        element.name() == tag
    }
}
