use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::fmt;
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::geo_3d::{Point, GeoVector, GeoError, GeoResult, EPSILON, quantize};

/// A plane in 3D space.
/// Stored as a point on the plane and a unit normal, plus the derived offset `d`
/// of the plane equation `normal . X + d = 0`.
///
/// The fields are private so the offset can never go stale:
/// every constructor and setter funnels through `offset_of`.
/// The offset is always finite; a point too far out along the normal is rejected.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    point: Point,
    normal: GeoVector,
    d: f64,
}

/// An infinite line, returned by plane-plane intersection.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Line {
    /// A point on the line.
    pub point: Point,
    /// Unit direction of the line.
    pub direction: GeoVector,
}

impl Plane {
    /// Create a new plane from a point on it and a normal vector.
    /// The normal is normalized; fails if it is shorter than `EPSILON`.
    pub fn new(point: Point, normal: GeoVector) -> GeoResult<Self> {
        if !point.is_finite() {
            return Err(GeoError::InvalidArgument(format!("plane point {} is not finite", point)));
        }
        let normal = Self::checked_normal(normal)?;
        let d = Self::offset_of(&point, &normal)?;
        Ok(Plane{point, normal, d})
    }

    /// Create a new plane through three points.
    /// The normal follows the right-hand rule on `p1 -> p2 -> p3`.
    /// Fails if the points are collinear (or coincide).
    pub fn from_points(p1: Point, p2: Point, p3: Point) -> GeoResult<Self> {
        let normal = (p2 - p1).cross(&(p3 - p1));
        if !normal.is_finite() {
            return Err(GeoError::InvalidArgument("plane points must be finite".to_string()));
        }
        if normal.norm() < EPSILON {
            debug!("rejecting collinear points {}, {}, {}", p1, p2, p3);
            return Err(GeoError::Degenerate("points are collinear and do not define a plane".to_string()));
        }
        Self::new(p1, normal)
    }

    /// Create a new plane from the coefficients of `a*x + b*y + c*z + d = 0`.
    /// The coefficients need not be normalized.
    pub fn from_coefficients(a: f64, b: f64, c: f64, d: f64) -> GeoResult<Self> {
        let magnitude = (a * a + b * b + c * c).sqrt();
        if magnitude < EPSILON {
            return Err(GeoError::Degenerate("normal components (a, b, c) cannot all be zero".to_string()));
        }

        // Solve for the first coordinate whose coefficient is safely away from zero
        let point = if a.abs() >= EPSILON {
            Point::new(-d / a, 0.0, 0.0)
        } else if b.abs() >= EPSILON {
            Point::new(0.0, -d / b, 0.0)
        } else {
            Point::new(0.0, 0.0, -d / c)
        };

        Self::new(point, GeoVector::new(a, b, c))
    }

    /// Get the reference point of the plane.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Get the normal vector of the plane. Guaranteed to be normalized.
    pub fn normal(&self) -> GeoVector {
        self.normal
    }

    /// Get the offset `d` of the plane equation.
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Get the normalized coefficients `(a, b, c, d)` of the plane equation.
    pub fn coefficients(&self) -> (f64, f64, f64, f64) {
        (self.normal.x, self.normal.y, self.normal.z, self.d)
    }

    /// Move the reference point. The plane's orientation is kept.
    /// On failure the plane is left unchanged.
    pub fn set_point(&mut self, point: Point) -> GeoResult<()> {
        if !point.is_finite() {
            return Err(GeoError::InvalidArgument(format!("plane point {} is not finite", point)));
        }
        self.d = Self::offset_of(&point, &self.normal)?;
        self.point = point;
        Ok(())
    }

    /// Replace the normal. On failure the plane is left unchanged.
    pub fn set_normal(&mut self, normal: GeoVector) -> GeoResult<()> {
        let normal = Self::checked_normal(normal)?;
        self.d = Self::offset_of(&self.point, &normal)?;
        self.normal = normal;
        Ok(())
    }

    /// Copy of this plane moved to pass through `point`.
    pub fn with_point(&self, point: Point) -> GeoResult<Self> {
        Self::new(point, self.normal)
    }

    /// Copy of this plane through the same point with a new normal.
    pub fn with_normal(&self, normal: GeoVector) -> GeoResult<Self> {
        Self::new(self.point, normal)
    }

    /// Get the signed distance from a point to the plane.
    /// Positive on the side the normal points to.
    pub fn distance_to_point(&self, point: &Point) -> f64 {
        self.normal.dot(&(*point).into()) + self.d
    }

    /// Check if a point lies on the plane, within `EPSILON`.
    pub fn contains_point(&self, point: &Point) -> bool {
        self.contains_point_within(point, EPSILON)
    }

    /// Check if a point lies on the plane, within `epsilon`.
    pub fn contains_point_within(&self, point: &Point, epsilon: f64) -> bool {
        self.distance_to_point(point).abs() < epsilon
    }

    /// Get the projection of a point onto the plane.
    pub fn project_point(&self, point: &Point) -> Point {
        *point - self.normal * self.distance_to_point(point)
    }

    /// Get the mirror image of a point across the plane.
    pub fn reflect_point(&self, point: &Point) -> Point {
        point.reflect_across(self)
    }

    /// Intersect the segment from `start` to `end` with the plane.
    /// Returns `Ok(None)` if the segment is parallel to the plane or does not reach it.
    /// Fails if the segment has zero length.
    pub fn intersect_line(&self, start: &Point, end: &Point) -> GeoResult<Option<Point>> {
        if !start.is_finite() || !end.is_finite() {
            return Err(GeoError::InvalidArgument("line end points must be finite".to_string()));
        }
        let segment = GeoVector::from_points(start, end);
        let length = segment.norm();
        if !length.is_finite() {
            return Err(GeoError::InvalidArgument(format!("line from {} to {} is too long", start, end)));
        }
        if length < EPSILON {
            return Err(GeoError::Degenerate("line has zero length".to_string()));
        }
        let direction = segment.divide(length)?;

        let denominator = self.normal.dot(&direction);
        if denominator.abs() < EPSILON {
            return Ok(None);
        }

        // Parameter along the unit direction where the line meets the plane
        let t = -self.distance_to_point(start) / denominator;
        if t < 0.0 || t > length {
            return Ok(None);
        }

        Ok(Some(*start + direction * t))
    }

    /// Check if two planes are parallel, within `EPSILON`.
    pub fn is_parallel_to(&self, other: &Plane) -> bool {
        self.is_parallel_to_within(other, EPSILON)
    }

    /// Check if two planes are parallel: the cross product of the normals vanishes within `epsilon`.
    pub fn is_parallel_to_within(&self, other: &Plane, epsilon: f64) -> bool {
        self.normal.cross(&other.normal).norm() < epsilon
    }

    /// Check if two planes are the same geometric plane.
    pub fn is_coincident_with(&self, other: &Plane) -> bool {
        self.is_parallel_to(other) && self.contains_point(&other.point)
    }

    /// Intersect two planes.
    /// Returns `None` for parallel planes, coincident ones included.
    pub fn intersect_plane(&self, other: &Plane) -> Option<Line> {
        if self.is_parallel_to(other) {
            return None;
        }

        let direction = self.normal.cross(&other.normal).normalize();

        // Pin one coordinate of the line point to zero and solve the two plane
        // equations for the other two. The determinant of the system with axis k
        // pinned is the k-th component of n1 x n2, so try the axes the line runs
        // furthest along first. Ties keep x, y, z order.
        let components = [direction.x.abs(), direction.y.abs(), direction.z.abs()];
        let mut axes = [0, 1, 2];
        axes.sort_by(|&a, &b| components[b].partial_cmp(&components[a]).unwrap_or(Ordering::Equal));

        for axis in axes {
            if let Some(point) = self.solve_with_zeroed_axis(other, axis) {
                return Some(Line{point, direction});
            }
            debug!("plane intersection: system with axis {} zeroed is singular", axis);
        }

        debug!("plane intersection: no solvable system for non-parallel planes {} and {}", self, other);
        None
    }

    /// Solve `n1 . p + d1 = 0`, `n2 . p + d2 = 0` with coordinate `axis` of `p` set to zero.
    fn solve_with_zeroed_axis(&self, other: &Plane, axis: usize) -> Option<Point> {
        let (n1, n2) = (self.normal, other.normal);
        let (d1, d2) = (self.d, other.d);

        // Coefficients of the two remaining unknowns (u, v), in axis order
        let (u1, v1, u2, v2) = match axis {
            0 => (n1.y, n1.z, n2.y, n2.z),
            1 => (n1.x, n1.z, n2.x, n2.z),
            _ => (n1.x, n1.y, n2.x, n2.y),
        };

        let det = u1 * v2 - u2 * v1;
        if det.abs() < EPSILON {
            return None;
        }
        let u = (v1 * d2 - v2 * d1) / det;
        let v = (u2 * d1 - u1 * d2) / det;

        Some(match axis {
            0 => Point::new(0.0, u, v),
            1 => Point::new(u, 0.0, v),
            _ => Point::new(u, v, 0.0),
        })
    }

    fn checked_normal(normal: GeoVector) -> GeoResult<GeoVector> {
        if !normal.is_finite() {
            return Err(GeoError::InvalidArgument(format!("normal vector {} is not finite", normal)));
        }
        if normal.norm() < EPSILON {
            return Err(GeoError::Degenerate("normal vector cannot be zero length".to_string()));
        }
        // Components near f64::MAX overflow the norm; bring them down first
        let largest = normal.x.abs().max(normal.y.abs()).max(normal.z.abs());
        if largest > 1.0 {
            return Ok(normal.divide(largest)?.normalize());
        }
        Ok(normal.normalize())
    }

    fn offset_of(point: &Point, normal: &GeoVector) -> GeoResult<f64> {
        let d = -normal.dot(&(*point).into());
        if !d.is_finite() {
            return Err(GeoError::InvalidArgument(format!("plane point {} is too far from the origin", point)));
        }
        Ok(d)
    }
}
impl Default for Plane {
    /// The XY plane: through the origin, normal along +Z.
    fn default() -> Self {
        Plane{
            point: Point::zero(),
            normal: GeoVector::zhat(),
            d: 0.0,
        }
    }
}
impl PartialEq for Plane {
    /// Same geometric plane, regardless of which point or normal sign represents it.
    fn eq(&self, other: &Self) -> bool {
        self.is_coincident_with(other)
    }
}
/// Hashes the normal and `d`. A plane and its flipped-normal twin compare equal
/// but hash differently, so don't mix orientations in a hashed collection.
impl Hash for Plane {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normal.hash(state);
        quantize(self.d).hash(state);
    }
}
impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane: {}x + {}y + {}z + {} = 0", self.normal.x, self.normal.y, self.normal.z, self.d)
    }
}
