//! Curve extraction and construction.

use nurbs_core::{ComponentId, NurbsError, Result};
use nurbs_geometry::{CurveGeometry, NurbsCurve, ToNurbs};
use serde_json::{Map, Value};

use crate::control_points::{self, coordinate_count};
use crate::diagnostics::{Diagnostics, WarningSink};
use crate::document;
use crate::knots::{decode_knots, encode_knots};
use crate::model::Model;

/// Curve document for `curve`, or `None` when it has no NURBS form.
pub fn extract_curve(curve: &CurveGeometry) -> Option<Value> {
    match curve.to_nurbs() {
        Some(nurbs) => Some(curve_document(&nurbs)),
        None => {
            log::debug!("skipping {} curve without a NURBS form", curve.kind_name());
            None
        }
    }
}

pub fn curve_document(curve: &NurbsCurve) -> Value {
    let rational = curve.is_rational();
    let num_coords = coordinate_count(curve.cv_size(), rational);

    let mut control = Map::new();
    control.insert(
        document::POINTS.into(),
        control_points::encode_points(curve.cvs(), num_coords, rational),
    );
    if rational {
        control.insert(
            document::WEIGHTS.into(),
            control_points::encode_weights(curve.cvs(), num_coords),
        );
    }

    let mut data = Map::new();
    data.insert(document::RATIONAL.into(), Value::Bool(rational));
    data.insert(document::DEGREE.into(), Value::from(curve.degree()));
    data.insert(document::KNOTVECTOR.into(), encode_knots(curve.knots()));
    data.insert(document::CONTROL_POINTS.into(), Value::Object(control));
    Value::Object(data)
}

/// Build a NURBS curve from `data` and register it with `model`.
///
/// Returns `Ok(None)` after a warning when the control points are neither
/// 2D nor 3D. Structural problems in the document are errors.
pub fn construct_curve<S: WarningSink>(
    model: &mut Model,
    diagnostics: &mut Diagnostics<S>,
    data: &Value,
) -> Result<Option<ComponentId>> {
    let points = document::points(data)?;
    let dimension = match control_points::probe_dimension(points) {
        Ok(d) => d,
        Err(NurbsError::UnsupportedDimension(d)) => {
            diagnostics.warn(&format!(
                "Curve control points have {} coordinates; \
                 only 2D and 3D curves are supported. Skipping...",
                d
            ));
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let degree = document::get_usize(data, document::DEGREE)?;
    let order = degree
        .checked_add(1)
        .ok_or_else(|| NurbsError::malformed(document::DEGREE, "degree is out of range"))?;
    let rational = document::is_rational(data)?;
    let weights = document::weights(data, rational, points.len())?;

    let mut curve = NurbsCurve::new(dimension, rational, order, points.len())?;
    decode_knots(data, document::KNOTVECTOR, curve.knots_mut())?;
    for i in 0..points.len() {
        let cv = control_points::decode_point(points, weights, i, dimension)?;
        curve.set_cv(i, cv);
    }
    curve.validate_with(diagnostics.tolerance())?;

    log::debug!(
        "constructed degree {} curve with {} control points",
        curve.degree(),
        curve.cv_count()
    );
    Ok(Some(model.add_geometry_component(CurveGeometry::Nurbs(curve))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nurbs_core::Config;
    use nurbs_geometry::curve::{Circle, Line};
    use nurbs_math::DVec3;
    use serde_json::json;

    #[test]
    fn test_extract_line() {
        let line = CurveGeometry::Line(Line::new(DVec3::ZERO, DVec3::new(1.0, 2.0, 3.0)));
        let data = extract_curve(&line).unwrap();
        assert_eq!(data["rational"], json!(false));
        assert_eq!(data["degree"], json!(1));
        assert_eq!(data["knotvector"], json!([0.0, 0.0, 1.0, 1.0]));
        assert_eq!(
            data["control_points"]["points"],
            json!([[0.0, 0.0, 0.0], [1.0, 2.0, 3.0]])
        );
        assert!(data["control_points"].get("weights").is_none());
    }

    #[test]
    fn test_extract_degenerate_circle_is_skipped() {
        let circle = CurveGeometry::Circle(Circle::new(DVec3::ZERO, DVec3::Z, 0.0));
        assert!(extract_curve(&circle).is_none());
    }

    #[test]
    fn test_construct_two_dimensional_curve() {
        let data = json!({
            "degree": 1,
            "knotvector": [0, 0, 1, 1],
            "control_points": {"points": [[0, 0], [2, 1]]}
        });
        let mut model = Model::new();
        let mut diagnostics = Diagnostics::new(&Config::default(), Vec::<String>::new());
        let id = construct_curve(&mut model, &mut diagnostics, &data)
            .unwrap()
            .unwrap();
        let curve = model.get(id).unwrap().as_curve().unwrap();
        let CurveGeometry::Nurbs(curve) = curve else {
            panic!("expected a NURBS curve");
        };
        assert_eq!(curve.dimension(), 2);
        assert_eq!(curve.cv(1), &[2.0, 1.0]);
    }

    #[test]
    fn test_construct_rejects_missing_degree() {
        let data = json!({
            "knotvector": [0, 0, 1, 1],
            "control_points": {"points": [[0, 0, 0], [1, 0, 0]]}
        });
        let mut model = Model::new();
        let mut diagnostics = Diagnostics::new(&Config::default(), Vec::<String>::new());
        let err = construct_curve(&mut model, &mut diagnostics, &data).unwrap_err();
        assert!(matches!(err, NurbsError::MalformedDocument { .. }));
        assert!(model.is_empty());
    }

    #[test]
    fn test_construct_rejects_decreasing_knots() {
        let data = json!({
            "degree": 1,
            "knotvector": [1, 0, 1, 1],
            "control_points": {"points": [[0, 0, 0], [1, 0, 0]]}
        });
        let mut model = Model::new();
        let mut diagnostics = Diagnostics::new(&Config::default(), Vec::<String>::new());
        assert!(construct_curve(&mut model, &mut diagnostics, &data).is_err());
        assert!(model.is_empty());
    }
}
