use serde::{Serialize, Deserialize};

use crate::geo_3d::{Point, GeoVector, GeoResult, EPSILON};
use crate::query::inputs::{PlaneInput, required_plane};
use crate::query::operations::{GeoOperation, Outcome};

fn offset_plane() -> Option<PlaneInput> {
    Some(PlaneInput::point_normal(Point::new(0.0, 0.0, 5.0), GeoVector::zhat()))
}

/// Whether `plane` and `other` are parallel, within `epsilon` (default `EPSILON`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IsParallel {
    #[serde(default)]
    plane: Option<PlaneInput>,
    #[serde(default)]
    other: Option<PlaneInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    epsilon: Option<f64>,
}
impl Default for IsParallel {
    fn default() -> Self {
        IsParallel{
            plane: Some(PlaneInput::default()),
            other: offset_plane(),
            epsilon: None,
        }
    }
}
impl GeoOperation for IsParallel {
    fn description(&self) -> &'static str {
        "whether two planes are parallel"
    }

    fn evaluate(&self) -> GeoResult<Outcome> {
        let plane = required_plane(&self.plane, "plane")?;
        let other = required_plane(&self.other, "other")?;
        let epsilon = self.epsilon.unwrap_or(EPSILON);
        Ok(Outcome::Flag(plane.is_parallel_to_within(&other, epsilon)))
    }
}

/// Whether `plane` and `other` describe the same geometric plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanesEqual {
    #[serde(default)]
    plane: Option<PlaneInput>,
    #[serde(default)]
    other: Option<PlaneInput>,
}
impl Default for PlanesEqual {
    fn default() -> Self {
        PlanesEqual{
            plane: Some(PlaneInput::default()),
            other: Some(PlaneInput::coefficients([0.0, 0.0, -2.0, 0.0])),
        }
    }
}
impl GeoOperation for PlanesEqual {
    fn description(&self) -> &'static str {
        "whether two plane descriptions are the same plane"
    }

    fn evaluate(&self) -> GeoResult<Outcome> {
        let plane = required_plane(&self.plane, "plane")?;
        let other = required_plane(&self.other, "other")?;
        Ok(Outcome::Flag(plane == other))
    }
}

/// Whether `plane` and `other` coincide.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IsCoincident {
    #[serde(default)]
    plane: Option<PlaneInput>,
    #[serde(default)]
    other: Option<PlaneInput>,
}
impl Default for IsCoincident {
    fn default() -> Self {
        IsCoincident{
            plane: Some(PlaneInput::default()),
            other: offset_plane(),
        }
    }
}
impl GeoOperation for IsCoincident {
    fn description(&self) -> &'static str {
        "whether two planes are parallel and share a point"
    }

    fn evaluate(&self) -> GeoResult<Outcome> {
        let plane = required_plane(&self.plane, "plane")?;
        let other = required_plane(&self.other, "other")?;
        Ok(Outcome::Flag(plane.is_coincident_with(&other)))
    }
}

/// Normalized `[a, b, c, d]` of `plane`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaneCoefficients {
    #[serde(default)]
    plane: Option<PlaneInput>,
}
impl Default for PlaneCoefficients {
    fn default() -> Self {
        PlaneCoefficients{
            plane: Some(PlaneInput::coefficients([0.0, 3.0, 4.0, -10.0])),
        }
    }
}
impl GeoOperation for PlaneCoefficients {
    fn description(&self) -> &'static str {
        "normalized coefficients of the plane equation"
    }

    fn evaluate(&self) -> GeoResult<Outcome> {
        let (a, b, c, d) = required_plane(&self.plane, "plane")?.coefficients();
        Ok(Outcome::Coefficients([a, b, c, d]))
    }
}
