/*!
 * 3D analytic geometry.
 *
 * Immutable value types for positions (`Point`), displacements (`GeoVector`),
 * planes (`Plane`) and the lines planes intersect along (`Line`).
 * All "near zero" and "equal" comparisons use the absolute tolerance `EPSILON`
 * unless a caller passes its own.
 */

mod point;
mod vector;
mod plane;
mod proc_errors;

pub use point::Point;
pub use vector::GeoVector;
pub use plane::{Plane, Line};
pub use proc_errors::{
    GeoError,
    GeoResult,
};

/// Angle type (alias for f64), always in radians.
pub type Angle = f64;

/// Default absolute tolerance for near-zero and equality tests.
pub const EPSILON: f64 = 1e-10;

/// Check if a scalar is within `EPSILON` of zero.
#[inline]
pub fn near_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Check if two scalars are within `EPSILON` of each other.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Snap a coordinate onto the `EPSILON` grid for hashing.
/// Values equal within tolerance usually, but not always, land in the same cell.
/// Both zeros map to the same cell.
///
/// The grid only spans |value| up to about 9.2e8. Past that the spacing of f64
/// itself is wider than `EPSILON`, so equal values are bit-identical and the
/// bits are hashed instead.
#[inline]
pub(crate) fn quantize(value: f64) -> i64 {
    let cells = (value / EPSILON).round();
    if cells.abs() < i64::MAX as f64 {
        cells as i64
    } else {
        value.to_bits() as i64
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_helpers() {
        assert!(near_zero(5e-11));
        assert!(!near_zero(1e-9));
        assert!(approx_eq(1.0, 1.0 + 1e-12));
        assert!(!approx_eq(1.0, 1.0 + 1e-8));
    }

    #[test]
    fn quantize_merges_signed_zeros() {
        assert_eq!(quantize(0.0), quantize(-0.0));
        assert_eq!(quantize(1e-12), quantize(0.0));
        assert_ne!(quantize(1e-9), quantize(0.0));
    }

    #[test]
    fn quantize_keeps_large_values_apart() {
        assert_ne!(quantize(1e9), quantize(2e9));
        assert_ne!(quantize(1e300), quantize(-1e300));
        assert_ne!(quantize(1e300), quantize(f64::MAX));
        assert_eq!(quantize(4e12), quantize(4e12));
    }
}
