//! Surface extraction and construction.
//!
//! The control net is flattened with the v index varying fastest, so cell
//! `(u, v)` lands at `v + u * size_v` in `control_points.points`.

use nurbs_brep::Brep;
use nurbs_core::{ComponentId, NurbsError, Result};
use nurbs_geometry::{NurbsSurface, SurfaceGeometry, ToNurbs};
use serde_json::{Map, Value};

use crate::control_points::{self, coordinate_count};
use crate::diagnostics::{Diagnostics, WarningSink};
use crate::document;
use crate::knots::{decode_knots, encode_knots};
use crate::model::Model;

/// Surface document for `surface`, or `None` when it has no NURBS form.
pub fn extract_surface(surface: &SurfaceGeometry) -> Option<Value> {
    match surface.to_nurbs() {
        Some(nurbs) => Some(surface_document(&nurbs)),
        None => {
            log::debug!(
                "skipping {} surface without a NURBS form",
                surface.kind_name()
            );
            None
        }
    }
}

pub fn surface_document(surface: &NurbsSurface) -> Value {
    let rational = surface.is_rational();
    let num_coords = coordinate_count(surface.cv_size(), rational);
    let (size_u, size_v) = (surface.size_u(), surface.size_v());

    let empty: &[f64] = &[];
    let mut slots = vec![empty; size_u * size_v];
    for u in 0..size_u {
        for v in 0..size_v {
            slots[surface.cv_index(u, v)] = surface.cv(u, v);
        }
    }

    let mut control = Map::new();
    control.insert(
        document::POINTS.into(),
        control_points::encode_points(slots.iter().copied(), num_coords, rational),
    );
    if rational {
        control.insert(
            document::WEIGHTS.into(),
            control_points::encode_weights(slots.iter().copied(), num_coords),
        );
    }

    let mut data = Map::new();
    data.insert(document::RATIONAL.into(), Value::Bool(rational));
    data.insert(document::DEGREE_U.into(), Value::from(surface.degree_u()));
    data.insert(document::DEGREE_V.into(), Value::from(surface.degree_v()));
    data.insert(document::KNOTVECTOR_U.into(), encode_knots(surface.knots_u()));
    data.insert(document::KNOTVECTOR_V.into(), encode_knots(surface.knots_v()));
    data.insert(document::SIZE_U.into(), Value::from(size_u));
    data.insert(document::SIZE_V.into(), Value::from(size_v));
    data.insert(document::CONTROL_POINTS.into(), Value::Object(control));
    Value::Object(data)
}

/// Build a NURBS surface from `data` and register it with `model` as the
/// single face of a new B-Rep.
///
/// Returns `Ok(None)` after a warning when the control points are neither
/// 2D nor 3D.
pub fn construct_surface<S: WarningSink>(
    model: &mut Model,
    diagnostics: &mut Diagnostics<S>,
    data: &Value,
) -> Result<Option<ComponentId>> {
    let points = document::points(data)?;
    let dimension = match control_points::probe_dimension(points) {
        Ok(d) => d,
        Err(NurbsError::UnsupportedDimension(d)) => {
            diagnostics.warn(&format!(
                "Surface control points have {} coordinates; \
                 only 2D and 3D surfaces are supported. Skipping...",
                d
            ));
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let order_u = document::get_usize(data, document::DEGREE_U)?
        .checked_add(1)
        .ok_or_else(|| NurbsError::malformed(document::DEGREE_U, "degree is out of range"))?;
    let order_v = document::get_usize(data, document::DEGREE_V)?
        .checked_add(1)
        .ok_or_else(|| NurbsError::malformed(document::DEGREE_V, "degree is out of range"))?;
    let size_u = document::get_usize(data, document::SIZE_U)?;
    let size_v = document::get_usize(data, document::SIZE_V)?;
    let expected = size_u.checked_mul(size_v).ok_or_else(|| {
        NurbsError::malformed(document::SIZE_V, "size_u * size_v is out of range")
    })?;
    if points.len() != expected {
        return Err(NurbsError::malformed(
            "control_points.points",
            format!(
                "expected size_u * size_v = {} points, got {}",
                expected,
                points.len()
            ),
        ));
    }
    let rational = document::is_rational(data)?;
    let weights = document::weights(data, rational, points.len())?;

    let mut surface = NurbsSurface::new(dimension, rational, order_u, order_v, size_u, size_v)?;
    decode_knots(data, document::KNOTVECTOR_U, surface.knots_u_mut())?;
    decode_knots(data, document::KNOTVECTOR_V, surface.knots_v_mut())?;
    for u in 0..size_u {
        for v in 0..size_v {
            let index = surface.cv_index(u, v);
            let cv = control_points::decode_point(points, weights, index, dimension)?;
            surface.set_cv(u, v, cv);
        }
    }
    surface.validate_with(diagnostics.tolerance())?;

    log::debug!(
        "constructed degree ({}, {}) surface with a {}x{} net",
        surface.degree_u(),
        surface.degree_v(),
        size_u,
        size_v
    );
    let brep = Brep::from_surface(SurfaceGeometry::Nurbs(surface));
    Ok(Some(model.add_geometry_component(brep)))
}
