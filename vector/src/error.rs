use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorError {
    /// Construction with no components.
    #[error("Vector must have at least one component")]
    Empty,
    /// Fail due to operations on vectors of unexpected differing dimensions.
    #[error("Dimension mismatch: {0} and {1}")]
    DimensionMismatch(usize, usize),
    /// Operation defined only for a specific dimension.
    #[error("Operation requires dimension {0}, got {1}")]
    WrongDimension(usize, usize),
    /// Cross products exist only in two or three dimensions.
    #[error("No cross product in dimension {0}")]
    UnsupportedDimension(usize),
    #[error("Division by zero")]
    DivisionByZero,
}
