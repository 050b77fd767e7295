//! Curve kinds and their NURBS canonical form.

mod circle;
mod line;
mod nurbs;
mod polyline;

use serde::{Deserialize, Serialize};

pub use circle::{Circle, CIRCLE_KNOTS};
pub use line::Line;
pub use nurbs::NurbsCurve;
pub use polyline::Polyline;

pub(crate) use circle::{circle_net, local_frame};

use crate::nurbs::ToNurbs;

/// Closed set of curve kinds held by the kernel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CurveGeometry {
    Line(Line),
    Polyline(Polyline),
    Circle(Circle),
    Nurbs(NurbsCurve),
}

impl CurveGeometry {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Polyline(_) => "polyline",
            Self::Circle(_) => "circle",
            Self::Nurbs(_) => "nurbs",
        }
    }
}

impl ToNurbs for CurveGeometry {
    type Output = NurbsCurve;

    fn to_nurbs(&self) -> Option<NurbsCurve> {
        match self {
            Self::Line(c) => c.to_nurbs(),
            Self::Polyline(c) => c.to_nurbs(),
            Self::Circle(c) => c.to_nurbs(),
            Self::Nurbs(c) => Some(c.clone()),
        }
    }
}

impl From<NurbsCurve> for CurveGeometry {
    fn from(curve: NurbsCurve) -> Self {
        Self::Nurbs(curve)
    }
}

impl From<Line> for CurveGeometry {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Circle> for CurveGeometry {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Polyline> for CurveGeometry {
    fn from(polyline: Polyline) -> Self {
        Self::Polyline(polyline)
    }
}
