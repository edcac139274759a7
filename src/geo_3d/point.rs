use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul,
};
use std::hash::{Hash, Hasher};
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_3d::{GeoVector, Plane, GeoError, GeoResult, near_zero, approx_eq, quantize};

/// A point in 3D space.
/// Contains the coordinates of the point.
/// Has basic math support for adding and subtracting vectors.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point{x, y, z}
    }

    /// Create a new zero point.
    pub fn zero() -> Self {
        Point{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Get the distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;

        (dx*dx + dy*dy + dz*dz).sqrt()
    }

    /// Divide every coordinate by a scalar.
    /// Fails with `GeoError::DivideByZero` if the scalar is within `EPSILON` of zero.
    pub fn divide(&self, scalar: f64) -> GeoResult<Self> {
        if near_zero(scalar) {
            return Err(GeoError::DivideByZero);
        }
        Ok(Point{
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        })
    }

    /// Reflect this point across a plane.
    pub fn reflect_across(&self, plane: &Plane) -> Point {
        let dist = plane.distance_to_point(self);
        *self - plane.normal() * (2.0 * dist)
    }

    /// Check that no coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y) && approx_eq(self.z, other.z)
    }
}
impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        quantize(self.x).hash(state);
        quantize(self.y).hash(state);
        quantize(self.z).hash(state);
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}
impl Add<GeoVector> for Point {
    type Output = Self;

    fn add(self, rhs: GeoVector) -> Self {
        Point{
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign<GeoVector> for Point {
    fn add_assign(&mut self, rhs: GeoVector) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}
impl Add<Point> for Point {
    type Output = Self;

    fn add(self, rhs: Point) -> Self {
        Point{
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl Sub<GeoVector> for Point {
    type Output = Self;

    fn sub(self, rhs: GeoVector) -> Self {
        Point{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign<GeoVector> for Point {
    fn sub_assign(&mut self, rhs: GeoVector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}
impl Sub<Point> for Point {
    type Output = GeoVector;

    fn sub(self, rhs: Self) -> GeoVector {
        GeoVector{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl Sub<&Point> for &Point {
    type Output = GeoVector;

    fn sub(self, rhs: &Point) -> GeoVector {
        GeoVector{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point{
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}
impl From<GeoVector> for Point {
    fn from(vector: GeoVector) -> Self {
        Point{
            x: vector.x,
            y: vector.y,
            z: vector.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(p: &Point) -> u64 {
        let mut hasher = DefaultHasher::new();
        p.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn arithmetic() {
        let p = Point::new(1.0, 2.0, 3.0);
        assert_eq!(p + Point::new(1.0, 1.0, 1.0), Point::new(2.0, 3.0, 4.0));
        assert_eq!(p + GeoVector::xhat(), Point::new(2.0, 2.0, 3.0));
        assert_eq!(p - GeoVector::zhat(), Point::new(1.0, 2.0, 2.0));
        assert_eq!(p - Point::zero(), GeoVector::new(1.0, 2.0, 3.0));
        assert_eq!(p * 2.0, Point::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * p, p * 2.0);

        let mut q = p;
        q += GeoVector::new(1.0, 1.0, 1.0);
        q -= GeoVector::xhat();
        assert_eq!(q, Point::new(1.0, 3.0, 4.0));
        // p was copied into q
        assert_eq!(p, Point::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn divide_checks_for_zero() {
        let p = Point::new(2.0, 4.0, 6.0);
        assert_eq!(p.divide(2.0), Ok(Point::new(1.0, 2.0, 3.0)));
        assert_eq!(p.divide(5e-11), Err(GeoError::DivideByZero));
    }

    #[test]
    fn equal_points_hash_alike() {
        let a = Point::new(1.0, -0.0, 3.0);
        let b = Point::new(1.0 + 1e-13, 0.0, 3.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn reflect_across_xy_plane() {
        let p = Point::new(1.0, 2.0, 3.0);
        let reflected = p.reflect_across(&Plane::default());
        assert_eq!(reflected, Point::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn vector_conversion() {
        let p = Point::new(1.0, 2.0, 3.0);
        let v: GeoVector = p.into();
        assert_eq!(Point::from(v), p);
        assert!(p.is_finite());
        assert!(!Point::new(f64::NAN, 0.0, 0.0).is_finite());
    }
}
