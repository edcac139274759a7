use crate::{
    geo_3d,
    io,
    query,
};

/// Error-type enum for the `cadgeo` crate.
/// Wraps the geometry, IO and query errors.
#[derive(Debug)]
pub enum CadGeoError {
    GeoError(geo_3d::GeoError),
    IoError(io::IoError),
    QueryError(query::QueryError),
    StringOnly(String),
}
impl std::fmt::Display for CadGeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CadGeoError::GeoError(error) => write!(f, "! GEOMETRY ERROR:\n- {}", error),
            CadGeoError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            CadGeoError::QueryError(error) => write!(f, "! QUERY ERROR:\n{}", error),
            CadGeoError::StringOnly(error) => write!(f, "! CADGEO ERROR:\n- {}", error),
        }
    }
}
impl From<String> for CadGeoError {
    fn from(error: String) -> Self {
        CadGeoError::StringOnly(error)
    }
}
impl From<geo_3d::GeoError> for CadGeoError {
    fn from(error: geo_3d::GeoError) -> Self {
        CadGeoError::GeoError(error)
    }
}
impl From<io::IoError> for CadGeoError {
    fn from(error: io::IoError) -> Self {
        CadGeoError::IoError(error)
    }
}
impl From<query::QueryError> for CadGeoError {
    fn from(error: query::QueryError) -> Self {
        CadGeoError::QueryError(error)
    }
}

/// Result type for the `cadgeo` crate.
pub type CadGeoResult<T> = std::result::Result<T, CadGeoError>;

/// Create a `CadGeoResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::CadGeoError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> CadGeoResult<T> {
    Err(CadGeoError::StringOnly(error_str.to_string()))
}
