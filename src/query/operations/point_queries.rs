use serde::{Serialize, Deserialize};

use crate::geo_3d::{Point, GeoResult, EPSILON};
use crate::query::inputs::{PlaneInput, required, required_plane};
use crate::query::operations::{GeoOperation, Outcome};

/// Signed distance from `point` to `plane`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistanceToPoint {
    #[serde(default)]
    plane: Option<PlaneInput>,
    #[serde(default)]
    point: Option<Point>,
}
impl Default for DistanceToPoint {
    fn default() -> Self {
        DistanceToPoint{
            plane: Some(PlaneInput::default()),
            point: Some(Point::new(0.0, 0.0, 5.0)),
        }
    }
}
impl GeoOperation for DistanceToPoint {
    fn description(&self) -> &'static str {
        "signed distance from a point to a plane"
    }

    fn evaluate(&self) -> GeoResult<Outcome> {
        let plane = required_plane(&self.plane, "plane")?;
        let point = required(&self.point, "point")?;
        Ok(Outcome::Distance(plane.distance_to_point(&point)))
    }
}

/// Whether `point` lies on `plane`, within `epsilon` (default `EPSILON`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainsPoint {
    #[serde(default)]
    plane: Option<PlaneInput>,
    #[serde(default)]
    point: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    epsilon: Option<f64>,
}
impl Default for ContainsPoint {
    fn default() -> Self {
        ContainsPoint{
            plane: Some(PlaneInput::default()),
            point: Some(Point::new(1.0, 1.0, 0.0)),
            epsilon: None,
        }
    }
}
impl GeoOperation for ContainsPoint {
    fn description(&self) -> &'static str {
        "whether a point lies on a plane"
    }

    fn evaluate(&self) -> GeoResult<Outcome> {
        let plane = required_plane(&self.plane, "plane")?;
        let point = required(&self.point, "point")?;
        let epsilon = self.epsilon.unwrap_or(EPSILON);
        Ok(Outcome::Flag(plane.contains_point_within(&point, epsilon)))
    }
}

/// Orthogonal projection of `point` onto `plane`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectPoint {
    #[serde(default)]
    plane: Option<PlaneInput>,
    #[serde(default)]
    point: Option<Point>,
}
impl Default for ProjectPoint {
    fn default() -> Self {
        ProjectPoint{
            plane: Some(PlaneInput::default()),
            point: Some(Point::new(2.0, 3.0, 4.0)),
        }
    }
}
impl GeoOperation for ProjectPoint {
    fn description(&self) -> &'static str {
        "orthogonal projection of a point onto a plane"
    }

    fn evaluate(&self) -> GeoResult<Outcome> {
        let plane = required_plane(&self.plane, "plane")?;
        let point = required(&self.point, "point")?;
        Ok(Outcome::Point(plane.project_point(&point)))
    }
}

/// Mirror image of `point` across `plane`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReflectPoint {
    #[serde(default)]
    plane: Option<PlaneInput>,
    #[serde(default)]
    point: Option<Point>,
}
impl Default for ReflectPoint {
    fn default() -> Self {
        ReflectPoint{
            plane: Some(PlaneInput::default()),
            point: Some(Point::new(2.0, 3.0, 4.0)),
        }
    }
}
impl GeoOperation for ReflectPoint {
    fn description(&self) -> &'static str {
        "mirror image of a point across a plane"
    }

    fn evaluate(&self) -> GeoResult<Outcome> {
        let plane = required_plane(&self.plane, "plane")?;
        let point = required(&self.point, "point")?;
        Ok(Outcome::Point(plane.reflect_point(&point)))
    }
}
