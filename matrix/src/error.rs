use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    /// Construction with no rows or no columns.
    #[error("Matrix must have at least one row and one column")]
    Empty,
    /// Construction from rows of differing lengths.
    #[error("Row {0} has {1} elements, expected {2}")]
    RaggedRows(usize, usize, usize),
    /// Fail due to operations on matrices of unexpected differing orders.
    #[error("Incompatible orders: {0}x{1} and {2}x{3}")]
    IncompatibleOrders(usize, usize, usize, usize),
    /// Operation defined only for square matrices.
    #[error("Matrix is not square: {0}x{1}")]
    NotSquare(usize, usize),
    /// Inverse requested on a matrix with zero determinant.
    #[error("Matrix is singular")]
    Singular,
    /// Row or column index outside the matrix.
    #[error("Index {0} out of range for length {1}")]
    IndexOutOfRange(usize, usize),
}
