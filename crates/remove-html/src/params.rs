// ABOUTME: Parser for the remove_html parameter string (selector list plus optional :exact flag).
// ABOUTME: Strips one layer of parens and quotes, detects the match mode, and splits on unquoted commas.

//! Parameter-string parsing.
//!
//! The accepted grammar is small:
//!
//! ```text
//! params       := [ '(' inner ')' ] | inner
//! inner        := [ quote body quote ] | body
//! body         := selectorList [ ':exact' ]
//! selectorList := token (',' token)*
//! ```
//!
//! Outer parentheses and quotes are peeled exactly once. Commas inside a
//! quoted span never split, so `"a, b", p` yields two tokens. A stray quote
//! glues the commas before it, so `p, it's, div` yields `p, it's` and `div`.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::selector::Target;

// Outer parens; the inner run may not cross a line terminator.
static OUTER_PARENS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(([^\n\r\u{2028}\u{2029}]*)\)$").unwrap());

static EXACT_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i):exact$").unwrap());

/// How class selectors are compared against the `class` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Substring match anywhere in the attribute value.
    ///
    /// Called "prefix" for compatibility with existing callers; it is not a
    /// true prefix match.
    #[default]
    Prefix,
    /// Whole-word match against the whitespace-separated class list.
    Exact,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchMode::Prefix => "prefix",
            MatchMode::Exact => "exact",
        };
        write!(f, "{}", s)
    }
}

/// The parsed form of a parameter string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemovalParams {
    pub mode: MatchMode,
    /// Selector tokens in the order they were given, trimmed and non-empty.
    pub selectors: Vec<String>,
}

impl RemovalParams {
    /// Returns true if no selector survived parsing.
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Classifies each selector token as a class, id, or tag target.
    pub fn targets(&self) -> Vec<Target> {
        self.selectors.iter().map(|s| Target::parse(s)).collect()
    }
}

/// Parses a raw parameter string into a match mode and selector tokens.
pub fn parse_params(params: &str) -> RemovalParams {
    let params = params.trim();

    let params = match OUTER_PARENS_RE.captures(params) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
        None => params,
    };

    let params = unescape_quotes(strip_outer_quotes(params));

    let (mode, selectors_str) = if EXACT_SUFFIX_RE.is_match(&params) {
        (
            MatchMode::Exact,
            EXACT_SUFFIX_RE.replace(&params, "").trim().to_string(),
        )
    } else {
        (MatchMode::Prefix, params)
    };

    let selectors = split_unquoted_commas(&selectors_str)
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    RemovalParams { mode, selectors }
}

/// Removes one pair of matching surrounding quotes, if present.
fn strip_outer_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return s;
    }
    let first = bytes[0];
    let last = bytes[bytes.len() - 1];
    if (first == b'\'' || first == b'"') && first == last {
        let inner = &s[1..s.len() - 1];
        if !inner.contains(is_line_terminator) {
            return inner;
        }
    }
    s
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Turns `\'` into `'` and `\"` into `"`. Other backslashes are left alone.
fn unescape_quotes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '\'' || next == '"' {
                    result.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }

    result
}

/// Splits on commas that are not inside a quoted span.
///
/// A span opens at `'` or `"` and closes at the next occurrence of the same
/// character. A quote with no closing partner is a stray: it opens nothing,
/// but a comma followed by an odd number of strays does not split.
fn split_unquoted_commas(s: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut commas = Vec::new();
    let mut strays = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        let (pos, c) = chars[i];
        match c {
            '\'' | '"' => match chars[i + 1..].iter().position(|&(_, n)| n == c) {
                Some(offset) => i += offset + 1,
                None => strays.push(pos),
            },
            ',' => commas.push(pos),
            _ => {}
        }
        i += 1;
    }

    let mut parts = Vec::new();
    let mut start = 0;
    for comma in commas {
        let strays_after = strays.iter().filter(|&&q| q > comma).count();
        if strays_after % 2 == 0 {
            parts.push(&s[start..comma]);
            start = comma + 1;
        }
    }
    parts.push(&s[start..]);

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors(params: &str) -> Vec<String> {
        parse_params(params).selectors
    }

    #[test]
    fn test_empty_params() {
        let parsed = parse_params("");
        assert!(parsed.is_empty());
        assert_eq!(parsed.mode, MatchMode::Prefix);
        assert!(parse_params("   ").is_empty());
        assert!(parse_params(" , ,, ").is_empty());
    }

    #[test]
    fn test_simple_list() {
        assert_eq!(selectors("p, .ad,#banner"), vec!["p", ".ad", "#banner"]);
    }

    #[test]
    fn test_strips_parens_once() {
        assert_eq!(selectors("(.foo)"), vec![".foo"]);
        assert_eq!(selectors("((.foo))"), vec!["(.foo)"]);
    }

    #[test]
    fn test_strips_quotes_once() {
        assert_eq!(selectors("'.foo'"), vec![".foo"]);
        assert_eq!(selectors("\".foo, p\""), vec![".foo", "p"]);
        assert_eq!(selectors("''.foo''"), vec!["'.foo'"]);
        // Mismatched quotes are not a pair.
        assert_eq!(selectors("'.foo\""), vec!["'.foo\""]);
    }

    #[test]
    fn test_parens_then_quotes() {
        assert_eq!(selectors("('.foo')"), vec![".foo"]);
        assert_eq!(parse_params("('.foo')"), parse_params(".foo"));
    }

    #[test]
    fn test_unescapes_quotes() {
        assert_eq!(selectors(r#"'\"a, b\", p'"#), vec![r#""a, b""#, "p"]);
        assert_eq!(selectors(r"'it\'s'"), vec!["it's"]);
        // Other escapes are untouched.
        assert_eq!(selectors(r"a\nb"), vec![r"a\nb"]);
    }

    #[test]
    fn test_exact_suffix() {
        let parsed = parse_params(".foo:exact");
        assert_eq!(parsed.mode, MatchMode::Exact);
        assert_eq!(parsed.selectors, vec![".foo"]);

        let parsed = parse_params("'.foo, .bar :EXACT'");
        assert_eq!(parsed.mode, MatchMode::Exact);
        assert_eq!(parsed.selectors, vec![".foo", ".bar"]);

        let parsed = parse_params(".foo:exactly");
        assert_eq!(parsed.mode, MatchMode::Prefix);
        assert_eq!(parsed.selectors, vec![".foo:exactly"]);
    }

    #[test]
    fn test_exact_alone_has_no_selectors() {
        let parsed = parse_params(":exact");
        assert_eq!(parsed.mode, MatchMode::Exact);
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_quoted_comma_does_not_split() {
        assert_eq!(selectors(r#""a, b", p"#), vec![r#""a, b""#, "p"]);
        assert_eq!(selectors("'x,y',z"), vec!["'x,y'", "z"]);
        assert_eq!(selectors(r#"'a,"b',c"#), vec![r#"'a,"b'"#, "c"]);
    }

    #[test]
    fn test_stray_quote_joins_preceding_commas() {
        assert_eq!(selectors("p, it's, div"), vec!["p, it's", "div"]);
        assert_eq!(selectors(r#"a, "b, c"#), vec![r#"a, "b"#, "c"]);
        // Two strays cancel out.
        assert_eq!(selectors(r#"a, 'b, c", d"#), vec!["a", r#"'b, c""#, "d"]);
        // Balanced spans still protect their commas around a stray.
        assert_eq!(
            selectors(r#"'x,y', it's, z"#),
            vec![r#"'x,y', it's"#, "z"]
        );
    }

    #[test]
    fn test_line_terminators_block_unwrapping() {
        assert_eq!(selectors("(p\r)"), vec!["(p\r)"]);
        assert_eq!(selectors("'p\u{2028}i'"), vec!["'p\u{2028}i'"]);
    }

    #[test]
    fn test_targets() {
        let parsed = parse_params(".a, #b, c");
        assert_eq!(
            parsed.targets(),
            vec![
                Target::Class("a".to_string()),
                Target::Id("b".to_string()),
                Target::Tag("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_match_mode_display() {
        assert_eq!(MatchMode::Prefix.to_string(), "prefix");
        assert_eq!(MatchMode::Exact.to_string(), "exact");
    }
}
