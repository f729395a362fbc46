//! Error types for Rekha

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Rekha error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two points do not define a line, or line parameters are not finite
    #[error("Degenerate line: {0}")]
    DegenerateLine(String),

    /// Matrix is not a proper rotation (orthonormal, determinant +1)
    #[error("Invalid rotation: {0}")]
    InvalidRotation(String),

    /// Record file length is not a whole number of records
    #[error("Malformed record file: {len} bytes is not a multiple of {record_bytes}")]
    MalformedRecordFile {
        /// Length of the input in bytes
        len: usize,
        /// Size of one record in bytes
        record_bytes: usize,
    },

    /// Point cloud coordinate vectors differ in length
    #[error("Mismatched point cloud: {xs} x values but {ys} y values")]
    MismatchedCloud {
        /// Length of `xs`
        xs: usize,
        /// Length of `ys`
        ys: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Config(e.to_string())
    }
}
