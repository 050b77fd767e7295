//! Warning reporting for skipped entities.

use nurbs_core::{Config, Tolerance};

/// Destination for user-facing warnings.
pub trait WarningSink {
    fn warn(&mut self, message: &str);
}

/// Forwards warnings to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn warn(&mut self, message: &str) {
        log::warn!("{}", message);
    }
}

/// Collects warnings in memory.
impl WarningSink for Vec<String> {
    fn warn(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

/// Per-pass settings taken from a [`Config`]: the warning sink, gated by
/// [`Config::warnings`], and the tolerance constructed entities are
/// validated against.
///
/// Disabling warnings only silences the sink; control flow is unchanged.
#[derive(Debug)]
pub struct Diagnostics<S = LogSink> {
    enabled: bool,
    tolerance: Tolerance,
    sink: S,
}

impl<S: WarningSink> Diagnostics<S> {
    pub fn new(config: &Config, sink: S) -> Self {
        Self {
            enabled: config.warnings,
            tolerance: config.tolerance,
            sink,
        }
    }

    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn warn(&mut self, message: &str) {
        if self.enabled {
            self.sink.warn(message);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
