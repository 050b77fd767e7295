//! Field names and typed access for interchange documents.
//!
//! Documents are plain [`serde_json::Value`] trees. Accessors here turn a
//! missing or mistyped field into [`NurbsError::MalformedDocument`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use nurbs_core::{NurbsError, Result};
use serde_json::Value;

pub const RATIONAL: &str = "rational";
pub const DEGREE: &str = "degree";
pub const DEGREE_U: &str = "degree_u";
pub const DEGREE_V: &str = "degree_v";
pub const KNOTVECTOR: &str = "knotvector";
pub const KNOTVECTOR_U: &str = "knotvector_u";
pub const KNOTVECTOR_V: &str = "knotvector_v";
pub const SIZE_U: &str = "size_u";
pub const SIZE_V: &str = "size_v";
pub const CONTROL_POINTS: &str = "control_points";
pub const POINTS: &str = "points";
pub const WEIGHTS: &str = "weights";

pub const SHAPE: &str = "shape";
pub const TYPE: &str = "type";
pub const COUNT: &str = "count";
pub const DATA: &str = "data";

pub fn get<'a>(data: &'a Value, key: &str) -> Result<&'a Value> {
    data.get(key)
        .ok_or_else(|| NurbsError::malformed(key, "missing field"))
}

pub fn get_array<'a>(data: &'a Value, key: &str) -> Result<&'a [Value]> {
    get(data, key)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| NurbsError::malformed(key, "expected an array"))
}

pub fn get_usize(data: &Value, key: &str) -> Result<usize> {
    let value = get(data, key)?;
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            NurbsError::malformed(key, format!("expected a non-negative integer, got {value}"))
        })
}

pub fn as_f64(value: &Value, field: &str) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| NurbsError::malformed(field, format!("expected a number, got {value}")))
}

/// Read the `rational` flag. Missing, `null`, `false` and `0` all mean
/// non-rational.
pub fn is_rational(data: &Value) -> Result<bool> {
    match data.get(RATIONAL) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::Number(n)) => Ok(n.as_f64().is_some_and(|x| x != 0.0)),
        Some(other) => Err(NurbsError::malformed(
            RATIONAL,
            format!("expected a boolean, got {other}"),
        )),
    }
}

/// The `control_points.points` array.
pub fn points(data: &Value) -> Result<&[Value]> {
    let control_points = get(data, CONTROL_POINTS)?;
    control_points
        .get(POINTS)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| NurbsError::malformed("control_points.points", "expected an array"))
}

/// The `control_points.weights` array when `rational`, checked against `count`.
pub fn weights(data: &Value, rational: bool, count: usize) -> Result<Option<&[Value]>> {
    if !rational {
        return Ok(None);
    }
    let weights = get(data, CONTROL_POINTS)?
        .get(WEIGHTS)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            NurbsError::malformed(
                "control_points.weights",
                "rational entity without a weights array",
            )
        })?;
    if weights.len() != count {
        return Err(NurbsError::malformed(
            "control_points.weights",
            format!("expected {} weights, got {}", count, weights.len()),
        ));
    }
    Ok(Some(weights.as_slice()))
}

pub fn read_document(reader: impl Read) -> Result<Value> {
    serde_json::from_reader(reader).map_err(|e| NurbsError::Parse(format!("document: {e}")))
}

pub fn write_document(mut writer: impl Write, value: &Value, pretty: bool) -> Result<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut writer, value)
    } else {
        serde_json::to_writer(&mut writer, value)
    };
    written.map_err(|e| NurbsError::Parse(format!("document: {e}")))?;
    writer.flush()?;
    Ok(())
}

pub fn read_document_from_path(path: impl AsRef<Path>) -> Result<Value> {
    let file = File::open(path)?;
    read_document(BufReader::new(file))
}

pub fn write_document_to_path(path: impl AsRef<Path>, value: &Value, pretty: bool) -> Result<()> {
    let file = File::create(path)?;
    write_document(BufWriter::new(file), value, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rational_flag_is_falsy_by_default() {
        assert!(!is_rational(&json!({})).unwrap());
        assert!(!is_rational(&json!({"rational": null})).unwrap());
        assert!(!is_rational(&json!({"rational": 0})).unwrap());
        assert!(is_rational(&json!({"rational": 1})).unwrap());
        assert!(is_rational(&json!({"rational": true})).unwrap());
        assert!(is_rational(&json!({"rational": "yes"})).is_err());
    }

    #[test]
    fn test_get_usize_rejects_negative() {
        let data = json!({"degree": -1, "size_u": 3});
        assert!(get_usize(&data, "degree").is_err());
        assert_eq!(get_usize(&data, "size_u").unwrap(), 3);
        let err = get_usize(&data, "size_v").unwrap_err();
        assert!(
            matches!(err, NurbsError::MalformedDocument { ref field, .. } if field == "size_v")
        );
    }

    #[test]
    fn test_weights_required_when_rational() {
        let data = json!({"control_points": {"points": [[0, 0], [1, 1]]}});
        assert_eq!(weights(&data, false, 2).unwrap(), None);
        assert!(weights(&data, true, 2).is_err());

        let data = json!({"control_points": {"points": [[0, 0], [1, 1]], "weights": [1.0]}});
        assert!(weights(&data, true, 2).is_err());
    }

    #[test]
    fn test_read_write_roundtrip_in_memory() {
        let value = json!({"shape": {"type": "curve", "count": 0, "data": []}});
        let mut buf = Vec::new();
        write_document(&mut buf, &value, true).unwrap();
        let back = read_document(buf.as_slice()).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_read_invalid_json_is_parse_error() {
        let err = read_document("{not json".as_bytes()).unwrap_err();
        assert!(matches!(err, NurbsError::Parse(_)));
    }
}
