pub mod angle;
pub mod arithmetic;
pub mod decomposition;
pub mod products;
pub mod vector;

use thiserror::Error;

/// The two broad classes of failure a vector operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied input that can never form a valid vector or operand pair.
    InvalidArgument,
    /// The operation is mathematically undefined for these operands.
    Domain,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("The coordinates must be nonempty")]
    EmptyCoordinates,
    #[error("The coordinates must be an iterable of numbers: {0}")]
    NotIterable(String),
    #[error("Dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("Cannot normalize the zero vector")]
    ZeroVectorNormalization,
    #[error("No unique parallel component vector to this basis vector")]
    NoUniqueParallelComponent,
    #[error("No unique orthogonal component vector to this basis vector")]
    NoUniqueOrthogonalComponent,
    #[error("Cross product is only defined in 2 or 3 dimensions (got {0})")]
    CrossProductDimension(usize),
}

impl VectorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorError::EmptyCoordinates
            | VectorError::NotIterable(_)
            | VectorError::DimensionMismatch { .. } => ErrorKind::InvalidArgument,
            VectorError::ZeroVectorNormalization
            | VectorError::NoUniqueParallelComponent
            | VectorError::NoUniqueOrthogonalComponent
            | VectorError::CrossProductDimension(_) => ErrorKind::Domain,
        }
    }
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use angle::{AngleUnit, DEFAULT_TOLERANCE};
pub use vector::Vector;
