// ABOUTME: Parses an input string into a scraper::Html document with scripting disabled.
// ABOUTME: With scripting off, <noscript> content becomes real elements that targets can reach.

use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{Html, HtmlTreeSink};

/// Parses `html` as a full document, the way a DOM parser without a script
/// engine would.
pub fn parse_document(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    driver::parse_document(HtmlTreeSink::new(Html::new_document()), opts).one(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn test_noscript_children_are_elements() {
        let doc = parse_document("<div></div><noscript><p>x</p></noscript>");
        let sel = Selector::parse("noscript > p").unwrap();
        assert_eq!(doc.select(&sel).count(), 1);
    }

    #[test]
    fn test_builds_html_head_body() {
        let doc = parse_document("text");
        let sel = Selector::parse("html > head + body").unwrap();
        assert_eq!(doc.select(&sel).count(), 1);
    }
}
