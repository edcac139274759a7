use serde::{Serialize, Deserialize};

use crate::geo_3d::{Point, GeoVector, GeoResult};
use crate::query::inputs::{PlaneInput, required, required_plane};
use crate::query::operations::{GeoOperation, Outcome};

/// Intersection of the segment `start -> end` with `plane`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntersectLine {
    #[serde(default)]
    plane: Option<PlaneInput>,
    #[serde(default)]
    start: Option<Point>,
    #[serde(default)]
    end: Option<Point>,
}
impl Default for IntersectLine {
    fn default() -> Self {
        IntersectLine{
            plane: Some(PlaneInput::default()),
            start: Some(Point::new(0.0, 0.0, -1.0)),
            end: Some(Point::new(0.0, 0.0, 1.0)),
        }
    }
}
impl GeoOperation for IntersectLine {
    fn description(&self) -> &'static str {
        "intersection point of a line segment with a plane"
    }

    fn evaluate(&self) -> GeoResult<Outcome> {
        let plane = required_plane(&self.plane, "plane")?;
        let start = required(&self.start, "start")?;
        let end = required(&self.end, "end")?;
        Ok(match plane.intersect_line(&start, &end)? {
            Some(point) => Outcome::Point(point),
            None => Outcome::NoIntersection,
        })
    }
}

/// Intersection line of `plane` and `other`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntersectPlane {
    #[serde(default)]
    plane: Option<PlaneInput>,
    #[serde(default)]
    other: Option<PlaneInput>,
}
impl Default for IntersectPlane {
    fn default() -> Self {
        IntersectPlane{
            plane: Some(PlaneInput::default()),
            other: Some(PlaneInput::point_normal(Point::zero(), GeoVector::yhat())),
        }
    }
}
impl GeoOperation for IntersectPlane {
    fn description(&self) -> &'static str {
        "intersection line of two planes"
    }

    fn evaluate(&self) -> GeoResult<Outcome> {
        let plane = required_plane(&self.plane, "plane")?;
        let other = required_plane(&self.other, "other")?;
        Ok(match plane.intersect_plane(&other) {
            Some(line) => Outcome::Line(line),
            None => Outcome::NoIntersection,
        })
    }
}
