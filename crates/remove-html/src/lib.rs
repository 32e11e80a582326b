// ABOUTME: Main library entry point for remove-html, a selector-based HTML element remover.
// ABOUTME: Re-exports the public API: remove_html, Remover, RemoverBuilder, parse_params, Target, trace sinks.

//! remove-html - strip elements from an HTML document by tag, class, or id.
//!
//! The parameter string is a comma-separated selector list, optionally
//! wrapped in one pair of parentheses and/or quotes, with an optional
//! case-insensitive `:exact` suffix:
//!
//! - `.name` removes elements whose `class` attribute contains `name`
//!   (substring match), or, with `:exact`, lists `name` as a whole class.
//! - `#name` removes elements whose `id` is exactly `name`.
//! - anything else removes elements with that tag name.
//!
//! # Example
//!
//! ```
//! use remove_html::remove_html;
//!
//! let out = remove_html(r#"<div id="x">a</div><div id="y">b</div>"#, "#x");
//! assert_eq!(out, r#"<div id="y">b</div>"#);
//!
//! // No selectors: the input comes back untouched.
//! assert_eq!(remove_html("<p>unclosed", ""), "<p>unclosed");
//! ```

pub mod dom;
pub mod options;
pub mod params;
pub mod remover;
pub mod selector;
pub mod trace;

pub use crate::options::{Options, RemoverBuilder};
pub use crate::params::{parse_params, MatchMode, RemovalParams};
pub use crate::remover::Remover;
pub use crate::selector::Target;
pub use crate::trace::{NoopSink, TraceEvent, TraceSink, TracingSink};

/// Removes the elements selected by `params` from `html` using default options.
///
/// Trace events go to [`TracingSink`]. Use [`Remover::builder`] to route them
/// elsewhere.
pub fn remove_html(html: &str, params: &str) -> String {
    Remover::default().remove(html, params)
}
