//! Error types for tensor and vector operations
//!
//! Every contract violation in the engine surfaces as a [`TensorError`]. The
//! variants map one-to-one onto the failure kinds callers match on: rank,
//! index range, shape, inner dimension, singularity, division by zero, buffer
//! size and configuration errors.

use thiserror::Error;

/// Error type for tensor operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TensorError {
    /// Wrong number of dimensions for an index tuple or a rank-2-only operation
    #[error("{operation}: rank mismatch - expected rank {expected}, got {actual}")]
    Rank {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An index exceeded the bound of its dimension
    #[error("index {index} is out of range for dimension {dim} with size {bound}")]
    IndexOutOfRange {
        dim: usize,
        index: usize,
        bound: usize,
    },

    /// Operand shapes differ where identical shapes are required
    #[error("{operation}: shape mismatch {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        operation: &'static str,
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },

    /// Inner dimensions of a matrix product differ
    #[error("matmul: inner dimensions differ, {lhs:?} x {rhs:?}")]
    DimensionMismatch { lhs: Vec<usize>, rhs: Vec<usize> },

    /// A pivot was judged zero during Gauss-Jordan elimination
    #[error("singular matrix: pivot {pivot:e} in column {column} cannot be eliminated")]
    SingularMatrix { column: usize, pivot: f64 },

    /// Scalar division by zero
    #[error("{operation}: division by zero scalar")]
    DivisionByZero { operation: &'static str },

    /// Flat buffer length disagrees with the shape's element count
    #[error("shape {shape:?} requires {expected} elements, but got {actual}")]
    SizeMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    /// Rejected configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for tensor operations
pub type TensorResult<T> = Result<T, TensorError>;

impl TensorError {
    /// Create a shape mismatch error
    pub fn shape_mismatch(operation: &'static str, lhs: &[usize], rhs: &[usize]) -> Self {
        TensorError::ShapeMismatch {
            operation,
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        }
    }

    /// Create a rank mismatch error
    pub fn rank(operation: &'static str, expected: usize, actual: usize) -> Self {
        TensorError::Rank {
            operation,
            expected,
            actual,
        }
    }

    /// Record the error on the diagnostics sink and hand it back.
    ///
    /// Used at every failure site so a log record always precedes the `Err`.
    pub(crate) fn logged(self) -> Self {
        log::error!("{}", self);
        self
    }
}

/// Unwrap `result` for operator sugar, panicking with the error's message.
pub(crate) fn or_panic<R>(result: TensorResult<R>) -> R {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}
