//! Control vertex and weight encoding.
//!
//! Kernel vertices of rational entities are homogeneous, `(x·w, y·w, z·w, w)`.
//! Documents carry Euclidean coordinates and the weights separately, so
//! encoding divides by the weight and decoding multiplies it back in.

use nurbs_core::{NurbsError, Result};
use nurbs_math::{dehomogenize_slice, homogenize, DVec3, HomogeneousPoint};
use serde_json::Value;

use crate::document;

/// Coordinates per vertex, excluding the weight slot of rational entities.
pub fn coordinate_count(cv_size: usize, rational: bool) -> usize {
    if rational {
        cv_size - 1
    } else {
        cv_size
    }
}

/// Euclidean coordinates of one raw vertex.
pub fn encode_point(cv: &[f64], num_coords: usize, rational: bool) -> Value {
    let coords = if rational {
        dehomogenize_slice(cv, num_coords)
    } else {
        cv[..num_coords].to_vec()
    };
    Value::from(coords)
}

pub fn encode_points<'a>(
    cvs: impl IntoIterator<Item = &'a [f64]>,
    num_coords: usize,
    rational: bool,
) -> Value {
    Value::Array(
        cvs.into_iter()
            .map(|cv| encode_point(cv, num_coords, rational))
            .collect(),
    )
}

/// The weight slot (index `num_coords`) of each raw vertex.
pub fn encode_weights<'a>(cvs: impl IntoIterator<Item = &'a [f64]>, num_coords: usize) -> Value {
    Value::from(cvs.into_iter().map(|cv| cv[num_coords]).collect::<Vec<f64>>())
}

/// Spatial dimension of a document, taken from its first control point.
///
/// Anything other than 2 or 3 components is [`NurbsError::UnsupportedDimension`].
pub fn probe_dimension(points: &[Value]) -> Result<usize> {
    let first = points
        .first()
        .ok_or_else(|| NurbsError::malformed("control_points.points", "no control points"))?;
    let dimension = first
        .as_array()
        .ok_or_else(|| NurbsError::malformed("control_points.points[0]", "expected an array"))?
        .len();
    if !(2..=3).contains(&dimension) {
        return Err(NurbsError::UnsupportedDimension(dimension));
    }
    Ok(dimension)
}

/// Homogeneous vertex for document entry `index`.
///
/// 2D points are embedded with `z = 0`; the weight defaults to 1 when
/// `weights` is `None`.
pub fn decode_point(
    points: &[Value],
    weights: Option<&[Value]>,
    index: usize,
    dimension: usize,
) -> Result<HomogeneousPoint> {
    let field = format!("control_points.points[{index}]");
    let tuple = points
        .get(index)
        .and_then(Value::as_array)
        .ok_or_else(|| NurbsError::malformed(&field, "expected an array"))?;
    if tuple.len() != dimension {
        return Err(NurbsError::malformed(
            &field,
            format!("expected {} coordinates, got {}", dimension, tuple.len()),
        ));
    }

    let mut xyz = [0.0; 3];
    for (c, value) in tuple.iter().enumerate() {
        xyz[c] = document::as_f64(value, &format!("{field}[{c}]"))?;
    }

    let w = match weights {
        Some(weights) => {
            let field = format!("control_points.weights[{index}]");
            let value = weights
                .get(index)
                .ok_or_else(|| NurbsError::malformed(&field, "missing weight"))?;
            document::as_f64(value, &field)?
        }
        None => 1.0,
    };

    Ok(homogenize(DVec3::from_array(xyz), w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nurbs_math::DVec4;
    use serde_json::json;

    #[test]
    fn test_coordinate_count() {
        assert_eq!(coordinate_count(3, false), 3);
        assert_eq!(coordinate_count(4, true), 3);
        assert_eq!(coordinate_count(3, true), 2);
    }

    #[test]
    fn test_encode_rational_point_is_euclidean() {
        let cv = [0.5, 1.0, 1.5, 0.5];
        assert_eq!(encode_point(&cv, 3, true), json!([1.0, 2.0, 3.0]));
        assert_eq!(encode_weights([&cv[..]], 3), json!([0.5]));
    }

    #[test]
    fn test_encode_non_rational_point_is_verbatim() {
        let cvs: [&[f64]; 2] = [&[1.0, 2.0], &[3.0, 4.0]];
        assert_eq!(encode_points(cvs, 2, false), json!([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn test_probe_dimension() {
        assert_eq!(probe_dimension(&[json!([0, 0])]).unwrap(), 2);
        assert_eq!(probe_dimension(&[json!([0, 0, 0])]).unwrap(), 3);
        assert!(matches!(
            probe_dimension(&[json!([0])]),
            Err(NurbsError::UnsupportedDimension(1))
        ));
        assert!(matches!(
            probe_dimension(&[json!([0, 0, 0, 1])]),
            Err(NurbsError::UnsupportedDimension(4))
        ));
        assert!(matches!(
            probe_dimension(&[]),
            Err(NurbsError::MalformedDocument { .. })
        ));
    }

    #[test]
    fn test_decode_applies_weight() {
        let points = [json!([1.0, 2.0, 3.0])];
        let weights = [json!(0.5)];
        let cv = decode_point(&points, Some(&weights), 0, 3).unwrap();
        assert_eq!(cv, DVec4::new(0.5, 1.0, 1.5, 0.5));
    }

    #[test]
    fn test_decode_two_dimensional_embeds_zero_z() {
        let points = [json!([4.0, 2.0])];
        let weights = [json!(2.0)];
        let cv = decode_point(&points, Some(&weights), 0, 2).unwrap();
        assert_eq!(cv, DVec4::new(8.0, 4.0, 0.0, 2.0));
        let plain = decode_point(&points, None, 0, 2).unwrap();
        assert_eq!(plain, DVec4::new(4.0, 2.0, 0.0, 1.0));
    }

    #[test]
    fn test_decode_rejects_ragged_tuple() {
        let points = [json!([0.0, 0.0, 0.0]), json!([1.0, 1.0])];
        assert!(decode_point(&points, None, 1, 3).is_err());
    }
}
