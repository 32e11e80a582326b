// ABOUTME: DOM operations on a parsed scraper::Html document.
// ABOUTME: Target-based element removal and body serialization.

//! DOM utilities for the remover.
//!
//! The document is parsed with html5ever into a `scraper::Html` and mutated
//! through its `ego_tree` arena. Nothing here outlives a single call.

mod parse;
mod remove;
mod serialize;

pub use parse::parse_document;
pub use remove::remove_matches;
pub use serialize::serialize_body;
