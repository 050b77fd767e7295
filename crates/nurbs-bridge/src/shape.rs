//! The shape envelope: `{"shape": {"type", "count", "data"}}`.
//!
//! Export gathers every entity of one kind from a model; import rebuilds
//! each entry and keeps going when one of them fails.

use std::fmt;
use std::str::FromStr;

use nurbs_core::{ComponentId, NurbsError, Result};
use serde_json::{Map, Value};

use crate::brep::extract_brep;
use crate::curve::{construct_curve, extract_curve};
use crate::diagnostics::{Diagnostics, WarningSink};
use crate::document;
use crate::model::{Geometry, Model};
use crate::surface::{construct_surface, extract_surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Curve,
    Surface,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Curve => "curve",
            Self::Surface => "surface",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = NurbsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "curve" => Ok(Self::Curve),
            "surface" => Ok(Self::Surface),
            other => Err(NurbsError::malformed(
                "shape.type",
                format!("unknown shape type `{other}`"),
            )),
        }
    }
}

/// Outcome of an import pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub constructed: Vec<ComponentId>,
    pub skipped: usize,
}

/// Export every entity of `kind` in `model`.
///
/// Surface export covers surface components and the faces of every B-Rep,
/// which are canonicalized in place.
pub fn export_shape(model: &mut Model, kind: ShapeKind) -> Value {
    let mut data = Vec::new();
    for component in model.components_mut() {
        match (kind, &mut component.geometry) {
            (ShapeKind::Curve, Geometry::Curve(curve)) => data.extend(extract_curve(curve)),
            (ShapeKind::Surface, Geometry::Surface(surface)) => {
                data.extend(extract_surface(surface))
            }
            (ShapeKind::Surface, Geometry::Brep(brep)) => data.extend(extract_brep(brep)),
            _ => {}
        }
    }
    log::debug!("exported {} {} entities", data.len(), kind);
    envelope(kind, data)
}

fn envelope(kind: ShapeKind, data: Vec<Value>) -> Value {
    let mut shape = Map::new();
    shape.insert(document::TYPE.into(), Value::from(kind.as_str()));
    shape.insert(document::COUNT.into(), Value::from(data.len()));
    shape.insert(document::DATA.into(), Value::Array(data));

    let mut doc = Map::new();
    doc.insert(document::SHAPE.into(), Value::Object(shape));
    Value::Object(doc)
}

/// Import every entry of a shape envelope into `model`.
///
/// A missing or unknown `shape.type`, or a missing `shape.data`, fails the
/// whole document. Entries that fail individually are reported through
/// `diagnostics` and counted as skipped.
pub fn import_shape<S: WarningSink>(
    model: &mut Model,
    diagnostics: &mut Diagnostics<S>,
    doc: &Value,
) -> Result<ImportSummary> {
    let shape = document::get(doc, document::SHAPE)?;
    let kind: ShapeKind = document::get(shape, document::TYPE)?
        .as_str()
        .ok_or_else(|| NurbsError::malformed("shape.type", "expected a string"))?
        .parse()?;
    let entries = shape
        .get(document::DATA)
        .and_then(Value::as_array)
        .ok_or_else(|| NurbsError::malformed("shape.data", "expected an array"))?;

    if let Some(count) = shape.get(document::COUNT).and_then(Value::as_u64) {
        if count != entries.len() as u64 {
            log::debug!(
                "shape.count is {} but shape.data holds {} entries",
                count,
                entries.len()
            );
        }
    }

    let mut summary = ImportSummary::default();
    for (index, entry) in entries.iter().enumerate() {
        let built = match kind {
            ShapeKind::Curve => construct_curve(model, diagnostics, entry),
            ShapeKind::Surface => construct_surface(model, diagnostics, entry),
        };
        match built {
            Ok(Some(id)) => summary.constructed.push(id),
            Ok(None) => summary.skipped += 1,
            Err(e) => {
                diagnostics.warn(&format!("Skipping {} {}: {}", kind, index, e));
                summary.skipped += 1;
            }
        }
    }
    log::debug!(
        "imported {} {} entities, skipped {}",
        summary.constructed.len(),
        kind,
        summary.skipped
    );
    Ok(summary)
}
