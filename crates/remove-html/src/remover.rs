// ABOUTME: The Remover: parses parameters, prunes matching elements, and serializes the body.
// ABOUTME: A call with no selectors returns the input untouched without parsing it.

use crate::dom::{parse_document, remove_matches, serialize_body};
use crate::options::{Options, RemoverBuilder};
use crate::params::{parse_params, RemovalParams};
use crate::trace::TraceEvent;

/// Removes elements from HTML by tag, class, or id.
///
/// A `Remover` holds no per-call state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Remover {
    opts: Options,
}

impl Remover {
    /// Create a Remover with the given options.
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    /// Create a builder for configuring a Remover.
    pub fn builder() -> RemoverBuilder {
        RemoverBuilder::new()
    }

    /// Removes the elements selected by `params` from `html`.
    ///
    /// See [`crate::params`] for the parameter syntax. When `params` names no
    /// selector, the exact input string is returned. Otherwise the result is
    /// the serialized content of the document body.
    pub fn remove(&self, html: &str, params: &str) -> String {
        let sink = self.opts.sink.as_ref();
        sink.record(&TraceEvent::Input { html, params });

        let parsed = parse_params(params);
        sink.record(&TraceEvent::Parsed {
            selectors: &parsed.selectors,
            mode: parsed.mode,
        });

        let output = if parsed.is_empty() {
            html.to_string()
        } else {
            self.apply(html, &parsed)
        };

        sink.record(&TraceEvent::Output { html: &output });
        output
    }

    /// Applies already-parsed parameters to `html`, always reserializing.
    pub fn apply(&self, html: &str, params: &RemovalParams) -> String {
        let mut doc = parse_document(html);
        for target in params.targets() {
            remove_matches(&mut doc, &target, params.mode);
        }
        serialize_body(&doc)
    }
}
