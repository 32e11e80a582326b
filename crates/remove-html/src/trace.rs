// ABOUTME: Injectable trace hook for the remover: TraceEvent records and the TraceSink trait.
// ABOUTME: Ships a no-op sink and a sink that forwards events to the `tracing` crate.

//! Observability side channel.
//!
//! The remover reports its inputs, the parsed selector list, and its output
//! through a [`TraceSink`]. Sinks never influence the result.

use std::fmt;

use crate::params::MatchMode;

/// Category tag attached to every event.
pub const CATEGORY: &str = "RemoveHTML";

/// A structured trace record emitted during one removal call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent<'a> {
    /// Emitted on entry with the raw arguments.
    Input { html: &'a str, params: &'a str },
    /// Emitted after the parameter string has been parsed.
    Parsed {
        selectors: &'a [String],
        mode: MatchMode,
    },
    /// Emitted on exit with the returned HTML.
    Output { html: &'a str },
}

impl TraceEvent<'_> {
    pub fn category(&self) -> &'static str {
        CATEGORY
    }

    /// Short human-readable label for the event.
    pub fn message(&self) -> &'static str {
        match self {
            TraceEvent::Input { .. } => "Input:",
            TraceEvent::Parsed { .. } => "Elements to remove:",
            TraceEvent::Output { .. } => "Output:",
        }
    }
}

/// Receives trace events from the remover.
pub trait TraceSink: Send + Sync {
    fn record(&self, event: &TraceEvent<'_>);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn record(&self, _event: &TraceEvent<'_>) {}
}

/// Forwards events to `tracing` at DEBUG level under the `remove_html` target.
///
/// Without an installed subscriber this costs next to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&self, event: &TraceEvent<'_>) {
        let category = event.category();
        let message = event.message();
        match event {
            TraceEvent::Input { html, params } => {
                tracing::debug!(target: "remove_html", category, html, params, "{}", message);
            }
            TraceEvent::Parsed { selectors, mode } => {
                tracing::debug!(
                    target: "remove_html",
                    category,
                    selectors = ?selectors,
                    mode = %mode,
                    "{}",
                    message
                );
            }
            TraceEvent::Output { html } => {
                tracing::debug!(target: "remove_html", category, html, "{}", message);
            }
        }
    }
}

/// Wraps a sink so it can sit inside types that derive `Debug`.
pub(crate) struct SinkDebug<'a>(pub &'a dyn TraceSink);

impl fmt::Debug for SinkDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TraceSink")
    }
}
