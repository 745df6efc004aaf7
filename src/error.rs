use thiserror::Error;

/// Top-level error type for board outline construction.
#[derive(Debug, Error)]
pub enum BoardlineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("singular fillet: interior angle {angle_deg} degrees")]
    SingularFillet { angle_deg: f64 },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors reported by the board document collaborator.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("component not found: {0}")]
    ComponentNotFound(String),
}

/// Errors related to contour operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no contour in progress")]
    NotTracing,
}

/// Convenience type alias for results using [`BoardlineError`].
pub type Result<T> = std::result::Result<T, BoardlineError>;
