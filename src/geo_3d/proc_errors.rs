/// Geometry error type.
/// Only genuinely invalid input lands here.
/// A missed intersection is an ordinary outcome and is returned as `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// A required input is absent or not a finite number.
    InvalidArgument(String),
    /// The input does not determine a unique result (zero-length normal, collinear points, ...).
    Degenerate(String),
    /// Scalar division by a value within tolerance of zero.
    DivideByZero,
}
impl std::fmt::Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::InvalidArgument(error) => write!(f, "Invalid argument: {}", error),
            GeoError::Degenerate(error) => write!(f, "Degenerate geometry: {}", error),
            GeoError::DivideByZero => write!(f, "Cannot divide by near-zero value"),
        }
    }
}
impl std::error::Error for GeoError {}

/// Result type for the `geo_3d` module.
pub type GeoResult<T> = std::result::Result<T, GeoError>;
