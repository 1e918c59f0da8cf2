use thiserror::Error;

pub type HexCartoResult<T> = Result<T, HexCartoError>;

/// Error type for hexcarto operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexCartoError {
    /// A region was handed to the collection builder without hexagon coordinates.
    #[error("missing geometry: region '{0}' has no hexagon coordinates")]
    MissingGeometry(String),
    /// A latitude, longitude, distance or bearing was NaN or infinite.
    #[error("non-finite {field}: {value}")]
    NonFiniteInput { field: &'static str, value: f64 },
    /// A hexagon dimension value is invalid (e.g., negative).
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),
    /// CSV parsing or reading error.
    #[error("CSV error: {0}")]
    Csv(String),
    /// File or stream I/O error.
    #[error("IO error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for HexCartoError {
    fn from(err: serde_json::Error) -> Self {
        HexCartoError::Json(err.to_string())
    }
}

impl From<std::io::Error> for HexCartoError {
    fn from(err: std::io::Error) -> Self {
        HexCartoError::Io(err.to_string())
    }
}
