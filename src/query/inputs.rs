use serde::{Serialize, Deserialize};

use crate::geo_3d::{Point, GeoVector, Plane, GeoError, GeoResult};

/// A plane as written in a query document, told apart by its keys:
/// `{points: [p1, p2, p3]}`, `{coefficients: [a, b, c, d]}` or `{point, normal}`.
/// Unknown or mixed keys match no form and fail the document.
/// A point-normal plane with keys left out still parses, and the missing keys
/// surface as `InvalidArgument` when the plane is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaneInput {
    ThreePoints(ThreePoints),
    Coefficients(Coefficients),
    PointNormal(PointNormal),
}

/// Three non-collinear points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThreePoints {
    pub points: [Point; 3],
}

/// Coefficients `[a, b, c, d]` of `a*x + b*y + c*z + d = 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Coefficients {
    pub coefficients: [f64; 4],
}

/// A point on the plane and a (not necessarily unit) normal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointNormal {
    #[serde(default)]
    pub point: Option<Point>,
    #[serde(default)]
    pub normal: Option<GeoVector>,
}

impl PlaneInput {
    /// Build the plane, validating the input.
    pub fn build(&self) -> GeoResult<Plane> {
        match self {
            PlaneInput::ThreePoints(ThreePoints{points: [p1, p2, p3]}) => Plane::from_points(*p1, *p2, *p3),
            PlaneInput::Coefficients(Coefficients{coefficients: [a, b, c, d]}) => Plane::from_coefficients(*a, *b, *c, *d),
            PlaneInput::PointNormal(PointNormal{point, normal}) => {
                Plane::new(required(point, "point")?, required(normal, "normal")?)
            },
        }
    }

    /// Plane through `point` with `normal`.
    pub fn point_normal(point: Point, normal: GeoVector) -> Self {
        PlaneInput::PointNormal(PointNormal{point: Some(point), normal: Some(normal)})
    }

    /// Plane `a*x + b*y + c*z + d = 0`.
    pub fn coefficients(coefficients: [f64; 4]) -> Self {
        PlaneInput::Coefficients(Coefficients{coefficients})
    }

    /// Plane through three points.
    pub fn three_points(points: [Point; 3]) -> Self {
        PlaneInput::ThreePoints(ThreePoints{points})
    }
}
impl Default for PlaneInput {
    fn default() -> Self {
        PlaneInput::point_normal(Point::zero(), GeoVector::zhat())
    }
}

/// Unwrap an input that the document may have left out.
pub fn required<T: Copy>(value: &Option<T>, name: &str) -> GeoResult<T> {
    match value {
        Some(value) => Ok(*value),
        None => Err(GeoError::InvalidArgument(format!("missing required input `{}`", name))),
    }
}

/// Build an optional plane input.
pub fn required_plane(value: &Option<PlaneInput>, name: &str) -> GeoResult<Plane> {
    match value {
        Some(input) => input.build(),
        None => Err(GeoError::InvalidArgument(format!("missing required input `{}`", name))),
    }
}
