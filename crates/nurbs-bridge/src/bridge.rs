//! Session-scoped entry point for export and import passes.

use std::path::Path;

use nurbs_core::{Config, KernelSession, Result};
use serde_json::Value;

use crate::diagnostics::{Diagnostics, LogSink, WarningSink};
use crate::document;
use crate::model::Model;
use crate::shape::{export_shape, import_shape, ImportSummary, ShapeKind};

/// Bundles the kernel session, configuration and warning sink.
///
/// Borrowing the session ties every pass to a live kernel.
pub struct Bridge<'s, S: WarningSink = LogSink> {
    _session: &'s KernelSession,
    config: Config,
    diagnostics: Diagnostics<S>,
}

impl<'s> Bridge<'s, LogSink> {
    pub fn new(session: &'s KernelSession, config: Config) -> Self {
        Self::with_sink(session, config, LogSink)
    }
}

impl<'s, S: WarningSink> Bridge<'s, S> {
    pub fn with_sink(session: &'s KernelSession, config: Config, sink: S) -> Self {
        let diagnostics = Diagnostics::new(&config, sink);
        Self {
            _session: session,
            config,
            diagnostics,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn diagnostics(&self) -> &Diagnostics<S> {
        &self.diagnostics
    }

    pub fn export(&mut self, model: &mut Model, kind: ShapeKind) -> Value {
        export_shape(model, kind)
    }

    pub fn import(&mut self, model: &mut Model, doc: &Value) -> Result<ImportSummary> {
        import_shape(model, &mut self.diagnostics, doc)
    }

    /// Export to a JSON file, indented when [`Config::pretty`] is set.
    pub fn export_to_path(
        &mut self,
        model: &mut Model,
        kind: ShapeKind,
        path: impl AsRef<Path>,
    ) -> Result<usize> {
        let doc = self.export(model, kind);
        let count = doc[document::SHAPE][document::COUNT]
            .as_u64()
            .unwrap_or_default() as usize;
        document::write_document_to_path(path, &doc, self.config.pretty)?;
        Ok(count)
    }

    pub fn import_from_path(
        &mut self,
        model: &mut Model,
        path: impl AsRef<Path>,
    ) -> Result<ImportSummary> {
        let doc = document::read_document_from_path(path)?;
        self.import(model, &doc)
    }
}
