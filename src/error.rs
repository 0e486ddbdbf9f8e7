use thiserror::Error;

/// Top-level error type for the ridepath engine.
#[derive(Debug, Error)]
pub enum RidepathError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the control-point and orientation arrays of a path.
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("{what} index {index} is out of range (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("tangent is degenerate at progress {progress}")]
    DegenerateTangent { progress: f64 },

    #[error("invalid path structure: {0}")]
    InvalidStructure(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`RidepathError`].
pub type Result<T> = std::result::Result<T, RidepathError>;
