//! Knot vector encoding.
//!
//! The document holds the full clamped vector: the leading boundary echo,
//! every interior knot, then the trailing echo. Decoding fills the
//! destination positionally, so its length must already be
//! `degree + cv_count + 1`.

use nurbs_core::{NurbsError, Result};
use nurbs_geometry::KnotVector;
use serde_json::Value;

use crate::document;

/// Encode `knots` as `knot_count + 2` numbers.
pub fn encode_knots(knots: &KnotVector) -> Value {
    let count = knots.knot_count();
    let mut values = Vec::with_capacity(count + 2);
    values.push(knots.superfluous_knot(false));
    values.extend((0..count).map(|i| knots.knot(i)));
    values.push(knots.superfluous_knot(true));
    Value::from(values)
}

/// Fill `knots` from the array at `data[field]`.
///
/// The array length must equal the destination length.
pub fn decode_knots(data: &Value, field: &str, knots: &mut KnotVector) -> Result<()> {
    let values = document::get_array(data, field)?;
    if values.len() != knots.len() {
        return Err(NurbsError::malformed(
            field,
            format!(
                "expected {} knots (degree + control points + 1), got {}",
                knots.len(),
                values.len()
            ),
        ));
    }
    for (i, value) in values.iter().enumerate() {
        let knot = document::as_f64(value, &format!("{field}[{i}]"))?;
        knots.set(i, knot);
    }
    Ok(())
}
