use approx::assert_abs_diff_eq;
use nurbs_brep::Brep;
use nurbs_bridge::{export_shape, import_shape, Bridge, Diagnostics, GeometryKind, Model, ShapeKind};
use nurbs_core::{Config, KernelSession, NurbsError};
use nurbs_geometry::curve::{Circle, Line, Polyline};
use nurbs_geometry::surface::{CylindricalSurface, PlanarSurface};
use nurbs_geometry::{CurveGeometry, SurfaceGeometry};
use nurbs_math::DVec3;
use serde_json::{json, Value};

fn sample_model() -> Model {
    let mut model = Model::new();
    model.add_geometry_component(CurveGeometry::Line(Line::new(DVec3::ZERO, DVec3::X)));
    model.add_geometry_component(CurveGeometry::Circle(Circle::new(DVec3::ZERO, DVec3::Z, 1.0)));
    // Single point: no NURBS form
    model.add_geometry_component(CurveGeometry::Polyline(Polyline::new(vec![DVec3::ONE])));
    model.add_geometry_component(SurfaceGeometry::Planar(PlanarSurface::xy_unit()));

    let mut brep = Brep::new();
    let cylinder = brep.add_surface(SurfaceGeometry::Cylindrical(CylindricalSurface::new(
        DVec3::ZERO,
        DVec3::Z,
        1.0,
        (0.0, 2.0),
    )));
    brep.new_face(cylinder).unwrap();
    brep.new_empty_face();
    model.add_geometry_component(brep);
    model
}

/// Structural equality with a tolerance on numbers.
fn assert_json_close(a: &Value, b: &Value) {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            assert_abs_diff_eq!(x.as_f64().unwrap(), y.as_f64().unwrap(), epsilon = 1e-12)
        }
        (Value::Array(xs), Value::Array(ys)) => {
            assert_eq!(xs.len(), ys.len());
            xs.iter().zip(ys).for_each(|(x, y)| assert_json_close(x, y));
        }
        (Value::Object(xs), Value::Object(ys)) => {
            assert_eq!(xs.len(), ys.len());
            for (key, x) in xs {
                assert_json_close(x, &ys[key]);
            }
        }
        _ => assert_eq!(a, b),
    }
}

fn line_entry(x: f64) -> Value {
    json!({
        "rational": false,
        "degree": 1,
        "knotvector": [0, 0, 1, 1],
        "control_points": {"points": [[0, 0, 0], [x, 0, 0]]}
    })
}

#[test]
fn test_export_curves_skips_unrepresentable() {
    let mut model = sample_model();
    let doc = export_shape(&mut model, ShapeKind::Curve);
    assert_eq!(doc["shape"]["type"], json!("curve"));
    assert_eq!(doc["shape"]["count"], json!(2));
    assert_eq!(doc["shape"]["data"].as_array().unwrap().len(), 2);
}

#[test]
fn test_export_surfaces_includes_brep_faces() {
    let mut model = sample_model();
    let doc = export_shape(&mut model, ShapeKind::Surface);
    assert_eq!(doc["shape"]["type"], json!("surface"));
    assert_eq!(doc["shape"]["count"], json!(2));
    assert_eq!(doc["shape"]["data"][0]["size_u"], json!(2));
    assert_eq!(doc["shape"]["data"][1]["size_u"], json!(9));
}

#[test]
fn test_import_continues_past_bad_entries() {
    let doc = json!({
        "shape": {
            "type": "curve",
            "count": 4,
            "data": [
                line_entry(1.0),
                {"degree": 1, "control_points": {"points": [[0, 0, 0], [1, 0, 0]]}},
                {
                    "degree": 1,
                    "knotvector": [0, 0, 1, 1],
                    "control_points": {"points": [[0, 0, 0, 0], [1, 0, 0, 0]]}
                },
                line_entry(2.0)
            ]
        }
    });
    let mut model = Model::new();
    let mut diagnostics = Diagnostics::new(&Config::default(), Vec::<String>::new());
    let summary = import_shape(&mut model, &mut diagnostics, &doc).unwrap();
    assert_eq!(summary.constructed.len(), 2);
    assert_eq!(summary.skipped, 2);
    assert_eq!(model.len(), 2);

    let warnings = diagnostics.into_sink();
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().any(|w| w.contains("knotvector")));
}

#[test]
fn test_export_import_roundtrip() {
    let mut source = sample_model();
    let curves = export_shape(&mut source, ShapeKind::Curve);
    let surfaces = export_shape(&mut source, ShapeKind::Surface);

    let mut target = Model::new();
    let mut diagnostics = Diagnostics::new(&Config::default(), Vec::<String>::new());
    let summary = import_shape(&mut target, &mut diagnostics, &curves).unwrap();
    assert_eq!((summary.constructed.len(), summary.skipped), (2, 0));
    let summary = import_shape(&mut target, &mut diagnostics, &surfaces).unwrap();
    assert_eq!((summary.constructed.len(), summary.skipped), (2, 0));
    assert!(diagnostics.sink().is_empty());

    assert_eq!(target.of_kind(GeometryKind::Curve).count(), 2);
    assert_eq!(target.of_kind(GeometryKind::Brep).count(), 2);

    // Re-exporting the imported model reproduces the documents.
    assert_json_close(&export_shape(&mut target, ShapeKind::Curve), &curves);
    assert_json_close(&export_shape(&mut target, ShapeKind::Surface), &surfaces);
}

#[test]
fn test_bridge_file_roundtrip() {
    let session = KernelSession::begin();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curves.json");

    let config = Config {
        pretty: true,
        ..Config::default()
    };
    let mut bridge = Bridge::with_sink(&session, config, Vec::<String>::new());
    let mut model = sample_model();
    let written = bridge
        .export_to_path(&mut model, ShapeKind::Curve, &path)
        .unwrap();
    assert_eq!(written, 2);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains('\n'));

    let mut imported = Model::new();
    let summary = bridge.import_from_path(&mut imported, &path).unwrap();
    assert_eq!(summary.constructed.len(), 2);
    assert!(bridge.diagnostics().sink().is_empty());
    assert!(bridge.config().pretty);
}

#[test]
fn test_bridge_missing_file_is_io_error() {
    let session = KernelSession::begin();
    let dir = tempfile::tempdir().unwrap();
    let mut bridge = Bridge::new(&session, Config::default());
    let err = bridge
        .import_from_path(&mut Model::new(), dir.path().join("missing.json"))
        .unwrap_err();
    assert!(matches!(err, NurbsError::Io(_)));
}
