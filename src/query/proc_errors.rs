/// Query process error type.
#[derive(Debug)]
pub enum QueryError {
    /// IO error while reading a query document or writing a report.
    IoError(crate::io::IoError),
    /// No operation is registered under this name.
    UnknownOperation(String),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::IoError(error) => write!(f, "IO Error:\n{}", error),
            QueryError::UnknownOperation(error) => write!(f, "Unknown operation: {}", error),
            QueryError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<crate::io::IoError> for QueryError {
    fn from(error: crate::io::IoError) -> Self {
        QueryError::IoError(error)
    }
}
impl From<String> for QueryError {
    fn from(error: String) -> Self {
        QueryError::StringOnly(error)
    }
}

/// Result type for the `query` module.
pub type ProcResult<T> = std::result::Result<T, QueryError>;

/// Create a `QueryError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(QueryError::StringOnly(error_str.to_string()))
}
