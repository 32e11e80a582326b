// ABOUTME: Configuration options for the remover and the RemoverBuilder used to construct it.
// ABOUTME: The only tunable today is the trace sink; TracingSink is the default.

use std::fmt;
use std::sync::Arc;

use crate::remover::Remover;
use crate::trace::{NoopSink, SinkDebug, TraceSink, TracingSink};

/// Configuration options for a [`Remover`].
#[derive(Clone)]
pub struct Options {
    pub sink: Arc<dyn TraceSink>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sink: Arc::new(TracingSink),
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("sink", &SinkDebug(self.sink.as_ref()))
            .finish()
    }
}

/// Builder for constructing Remover instances with custom configuration.
#[derive(Debug, Clone)]
pub struct RemoverBuilder {
    opts: Options,
}

impl RemoverBuilder {
    /// Create a new RemoverBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Send trace events to `sink`.
    pub fn sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.opts.sink = Arc::new(sink);
        self
    }

    /// Share an existing sink.
    pub fn shared_sink(mut self, sink: Arc<dyn TraceSink>) -> Self {
        self.opts.sink = sink;
        self
    }

    /// Drop all trace events.
    pub fn silent(self) -> Self {
        self.sink(NoopSink)
    }

    /// Build the Remover with the configured options.
    pub fn build(self) -> Remover {
        Remover::new(self.opts)
    }
}

impl Default for RemoverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
