use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Neg,
};
use std::hash::{Hash, Hasher};
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_3d::{Angle, Point, GeoError, GeoResult, near_zero, approx_eq, quantize};

/// A vector in 3D space.
/// Used for directions and displacements, e.g. plane normals.
/// Same shape as `Point`, but only vectors carry the metric operations.
#[derive(Debug, Clone, Copy, Default)]
#[derive(Serialize, Deserialize)]
pub struct GeoVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl GeoVector {
    /// Create a new vector.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        GeoVector{x, y, z}
    }

    /// Create a new zero vector.
    pub fn zero() -> Self {
        GeoVector{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Construct an xhat vector.
    pub fn xhat() -> Self {
        GeoVector{x: 1.0, y: 0.0, z: 0.0}
    }

    /// Construct a yhat vector.
    pub fn yhat() -> Self {
        GeoVector{x: 0.0, y: 1.0, z: 0.0}
    }

    /// Construct a zhat vector.
    pub fn zhat() -> Self {
        GeoVector{x: 0.0, y: 0.0, z: 1.0}
    }

    /// Displacement from `from` to `to`.
    pub fn from_points(from: &Point, to: &Point) -> Self {
        GeoVector{
            x: to.x - from.x,
            y: to.y - from.y,
            z: to.z - from.z,
        }
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &GeoVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the cross product of two vectors.
    pub fn cross(&self, other: &GeoVector) -> GeoVector {
        GeoVector{
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    /// Get the magnitude of the vector.
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Normalize and return a new vector.
    /// A vector shorter than `EPSILON` has no direction and normalizes to the zero vector.
    pub fn normalize(&self) -> Self {
        let mag = self.norm();
        if near_zero(mag) {
            return GeoVector::zero();
        }
        GeoVector{
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    /// Divide every component by a scalar.
    /// Fails with `GeoError::DivideByZero` if the scalar is within `EPSILON` of zero.
    pub fn divide(&self, scalar: f64) -> GeoResult<Self> {
        if near_zero(scalar) {
            return Err(GeoError::DivideByZero);
        }
        Ok(GeoVector{
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        })
    }

    /// Get the angle between two vectors, in radians.
    /// Returns 0 if either vector is (near) zero.
    pub fn angle_to(&self, other: &GeoVector) -> Angle {
        let mag_self = self.norm();
        let mag_other = other.norm();
        if near_zero(mag_self) || near_zero(mag_other) {
            return 0.0;
        }
        // Catch float errors when vectors are exactly aligned
        let cos = (self.dot(other) / (mag_self * mag_other)).clamp(-1.0, 1.0);
        cos.acos()
    }

    /// Get the vector projection of `self` onto `other`.
    pub fn proj_onto(&self, other: &GeoVector) -> GeoVector {
        let mag_sq = other.norm_sq();
        if near_zero(mag_sq) {
            return GeoVector::zero();
        }
        *other * (self.dot(other) / mag_sq)
    }

    /// Get the vector rejection of `self` onto `other`.
    pub fn rej_onto(&self, other: &GeoVector) -> GeoVector {
        *self - self.proj_onto(other)
    }

    /// Check that no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
impl PartialEq for GeoVector {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y) && approx_eq(self.z, other.z)
    }
}
impl Hash for GeoVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        quantize(self.x).hash(state);
        quantize(self.y).hash(state);
        quantize(self.z).hash(state);
    }
}
impl Add for GeoVector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        GeoVector{
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}
impl AddAssign for GeoVector {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}
impl Sub for GeoVector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        GeoVector{
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
impl SubAssign for GeoVector {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}
impl Mul<GeoVector> for f64 {
    type Output = GeoVector;

    fn mul(self, other: GeoVector) -> GeoVector {
        GeoVector{
            x: self * other.x,
            y: self * other.y,
            z: self * other.z,
        }
    }
}
impl Mul<f64> for GeoVector {
    type Output = GeoVector;

    fn mul(self, other: f64) -> GeoVector {
        GeoVector{
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
impl MulAssign<f64> for GeoVector {
    fn mul_assign(&mut self, other: f64) {
        self.x *= other;
        self.y *= other;
        self.z *= other;
    }
}
impl Neg for GeoVector {
    type Output = GeoVector;

    fn neg(self) -> GeoVector {
        GeoVector{
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
impl From<Point> for GeoVector {
    fn from(point: Point) -> Self {
        GeoVector{
            x: point.x,
            y: point.y,
            z: point.z,
        }
    }
}
impl fmt::Display for GeoVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_3d::{strategies, EPSILON};
    use proptest::prelude::*;
    use std::f64::consts::PI;

    #[test]
    fn cross_of_axes() {
        assert_eq!(GeoVector::xhat().cross(&GeoVector::yhat()), GeoVector::zhat());
        assert_eq!(GeoVector::yhat().cross(&GeoVector::xhat()), -GeoVector::zhat());
        assert_eq!(GeoVector::xhat().dot(&GeoVector::yhat()), 0.0);
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(GeoVector::zero().normalize(), GeoVector::zero());
        assert_eq!(GeoVector::new(1e-11, 0.0, 0.0).normalize(), GeoVector::zero());
    }

    #[test]
    fn normalize_scales_to_unit() {
        let v = GeoVector::new(3.0, 0.0, 4.0).normalize();
        assert_eq!(v, GeoVector::new(0.6, 0.0, 0.8));
    }

    #[test]
    fn divide_by_near_zero_fails() {
        let v = GeoVector::new(1.0, 2.0, 3.0);
        assert_eq!(v.divide(0.0), Err(GeoError::DivideByZero));
        assert_eq!(v.divide(-1e-11), Err(GeoError::DivideByZero));
        assert_eq!(v.divide(2.0), Ok(GeoVector::new(0.5, 1.0, 1.5)));
    }

    #[test]
    fn angles() {
        assert!((GeoVector::xhat().angle_to(&GeoVector::yhat()) - PI / 2.0).abs() < EPSILON);
        assert!((GeoVector::xhat().angle_to(&-GeoVector::xhat()) - PI).abs() < EPSILON);
        assert_eq!(GeoVector::xhat().angle_to(&GeoVector::zero()), 0.0);
        assert_eq!(GeoVector::zero().angle_to(&GeoVector::xhat()), 0.0);
    }

    #[test]
    fn angle_of_aligned_vectors_is_not_nan() {
        // dot/(|a||b|) can overshoot 1 by an ulp here
        let v = GeoVector::new(0.1, 0.2, 0.3);
        let angle = v.angle_to(&(v * 3.0));
        assert!(!angle.is_nan());
        assert!(angle.abs() < 1e-6);
    }

    #[test]
    fn equality_is_tolerant() {
        let a = GeoVector::new(1.0, 2.0, 3.0);
        assert_eq!(a, GeoVector::new(1.0 + 1e-12, 2.0, 3.0 - 1e-12));
        assert_ne!(a, GeoVector::new(1.0 + 1e-8, 2.0, 3.0));
    }

    #[test]
    fn projection_and_rejection() {
        let v = GeoVector::new(2.0, 3.0, 0.0);
        assert_eq!(v.proj_onto(&(GeoVector::xhat() * 5.0)), GeoVector::new(2.0, 0.0, 0.0));
        assert_eq!(v.rej_onto(&GeoVector::xhat()), GeoVector::new(0.0, 3.0, 0.0));
        assert_eq!(v.proj_onto(&GeoVector::zero()), GeoVector::zero());
    }

    #[test]
    fn from_points_is_end_minus_start() {
        let v = GeoVector::from_points(&Point::new(1.0, 1.0, 1.0), &Point::new(2.0, 3.0, 4.0));
        assert_eq!(v, GeoVector::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn display_precision() {
        let v = GeoVector::new(1.0, 0.5, -2.0);
        assert_eq!(format!("{}", v), "(1.000, 0.500, -2.000)");
        assert_eq!(format!("{:.1}", v), "(1.0, 0.5, -2.0)");
    }

    proptest! {
        #[test]
        fn normalized_vectors_have_unit_length(v in strategies::nonzero_vector()) {
            prop_assert!((v.normalize().norm() - 1.0).abs() < EPSILON);
        }

        #[test]
        fn cross_is_orthogonal_to_inputs(a in strategies::vector(), b in strategies::vector()) {
            let c = a.cross(&b);
            // Relative tolerance: the dot products scale with |a|^2 |b|
            let scale = 1.0 + a.norm_sq() * b.norm() + b.norm_sq() * a.norm();
            prop_assert!(a.dot(&c).abs() < EPSILON * scale);
            prop_assert!(b.dot(&c).abs() < EPSILON * scale);
        }

        #[test]
        fn angle_is_symmetric_and_bounded(a in strategies::vector(), b in strategies::vector()) {
            let angle = a.angle_to(&b);
            prop_assert!((0.0..=PI).contains(&angle));
            prop_assert!((angle - b.angle_to(&a)).abs() < EPSILON);
        }
    }
}
