use thiserror::Error;

/// Top-level error type for the parametric algebra.
#[derive(Debug, Error)]
pub enum ParametricError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Law(#[from] LawError),
}

/// Errors raised while constructing concrete curves.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to operation inputs.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// A consistency law that a parametric representation failed to uphold.
#[derive(Debug, Error)]
pub enum LawError {
    #[error("{law} law violated: {detail}")]
    Violated { law: &'static str, detail: String },
}

/// Convenience type alias for results using [`ParametricError`].
pub type Result<T> = std::result::Result<T, ParametricError>;
