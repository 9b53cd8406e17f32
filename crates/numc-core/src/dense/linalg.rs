//! Matrix operations on rank-2 tensors
//!
//! - Matrix product with inner-dimension check
//! - Gauss-Jordan inversion with partial pivoting
//! - Matrix "division" `A / B = A * B⁻¹`
//! - Transpose
//!
//! All of these are defined for rank-2 tensors only and fail with
//! [`TensorError::Rank`] otherwise.

use super::types::Tensor;
use crate::config::InverseConfig;
use crate::error::{TensorError, TensorResult};
use num_traits::Float;

impl<T> Tensor<T>
where
    T: Float,
{
    fn ensure_matrix(&self, operation: &'static str) -> TensorResult<()> {
        if self.rank() != 2 {
            return Err(TensorError::rank(operation, 2, self.rank()).logged());
        }
        Ok(())
    }

    /// Matrix multiplication for 2D tensors.
    ///
    /// Computes the matrix product C = AB where A and B are 2D tensors.
    ///
    /// # Complexity
    ///
    /// O(m·k·n) with the standard triple loop
    ///
    /// # Errors
    ///
    /// - [`TensorError::Rank`] if either tensor is not 2D
    /// - [`TensorError::DimensionMismatch`] if A's columns != B's rows
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let a = Tensor::<f64>::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// let b = Tensor::<f64>::from_vec(vec![5.0, 6.0, 7.0, 8.0], &[2, 2]).unwrap();
    ///
    /// let c = a.matmul(&b).unwrap();
    /// // [[1*5 + 2*7, 1*6 + 2*8],
    /// //  [3*5 + 4*7, 3*6 + 4*8]]
    /// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    /// ```
    pub fn matmul(&self, other: &Self) -> TensorResult<Self> {
        self.ensure_matrix("matmul")?;
        other.ensure_matrix("matmul")?;

        let (m, k) = (self.shape[0], self.shape[1]);
        let (k2, n) = (other.shape[0], other.shape[1]);
        if k != k2 {
            return Err(TensorError::DimensionMismatch {
                lhs: self.shape.to_vec(),
                rhs: other.shape.to_vec(),
            }
            .logged());
        }

        let mut data = Vec::with_capacity(m * n);
        for i in 0..m {
            let row = &self.data[i * k..(i + 1) * k];
            for j in 0..n {
                let mut sum = T::zero();
                for (p, &a) in row.iter().enumerate() {
                    sum = sum + a * other.data[p * n + j];
                }
                data.push(sum);
            }
        }
        Ok(Self::from_parts(&[m, n], data))
    }

    /// Invert a square matrix with Gauss-Jordan elimination.
    ///
    /// Uses [`InverseConfig::default`], under which only a pivot that is
    /// exactly zero marks the matrix singular. Near-singular input therefore
    /// produces a large, inaccurate inverse rather than an error; see
    /// [`inverse_with`](Self::inverse_with) to reject it.
    ///
    /// # Errors
    ///
    /// - [`TensorError::Rank`] if the tensor is not 2D
    /// - [`TensorError::ShapeMismatch`] if the matrix is not square; `rhs` holds
    ///   the required `[rows, rows]` shape
    /// - [`TensorError::SingularMatrix`] if elimination meets a zero pivot
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let a = Tensor::from_vec(vec![4.0, 7.0, 2.0, 6.0], &[2, 2]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// let expected = Tensor::from_vec(vec![0.6, -0.7, -0.2, 0.4], &[2, 2]).unwrap();
    /// assert!(inv.approx_eq(&expected, 1e-9));
    /// ```
    pub fn inverse(&self) -> TensorResult<Self> {
        self.inverse_with(&InverseConfig::default())
    }

    /// Invert a square matrix, treating `|pivot| <= config.pivot_tolerance` as zero.
    ///
    /// # Errors
    ///
    /// As [`inverse`](Self::inverse), plus [`TensorError::InvalidConfig`] for a
    /// negative or NaN tolerance.
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::{InverseConfig, Tensor, TensorError};
    ///
    /// let nearly = Tensor::from_vec(vec![1.0, 1.0, 1.0, 1.0 + 1e-14], &[2, 2]).unwrap();
    /// assert!(nearly.inverse().is_ok());
    ///
    /// let strict = InverseConfig::default().with_pivot_tolerance(1e-10);
    /// assert!(matches!(
    ///     nearly.inverse_with(&strict),
    ///     Err(TensorError::SingularMatrix { .. })
    /// ));
    /// ```
    pub fn inverse_with(&self, config: &InverseConfig) -> TensorResult<Self> {
        config.validate().map_err(TensorError::logged)?;
        self.ensure_matrix("inverse")?;
        if !self.is_square() {
            // report against the square shape the row count calls for
            let rows = self.shape[0];
            return Err(TensorError::shape_mismatch(
                "inverse requires a square matrix",
                &self.shape,
                &[rows, rows],
            )
            .logged());
        }

        let n = self.shape[0];
        let tolerance = T::from(config.pivot_tolerance).unwrap_or_else(T::zero);
        let mut work = self.data.clone();
        let mut result = Self::eye(n);
        let inv = &mut result.data;

        for i in 0..n {
            // partial pivoting: largest magnitude in column i among rows i..n
            let mut pivot_row = i;
            for r in (i + 1)..n {
                if work[r * n + i].abs() > work[pivot_row * n + i].abs() {
                    pivot_row = r;
                }
            }

            let pivot = work[pivot_row * n + i];
            if pivot.abs() <= tolerance {
                return Err(TensorError::SingularMatrix {
                    column: i,
                    pivot: pivot.to_f64().unwrap_or(f64::NAN),
                }
                .logged());
            }

            if pivot_row != i {
                for c in 0..n {
                    work.swap(i * n + c, pivot_row * n + c);
                    inv.swap(i * n + c, pivot_row * n + c);
                }
            }

            for c in 0..n {
                work[i * n + c] = work[i * n + c] / pivot;
                inv[i * n + c] = inv[i * n + c] / pivot;
            }

            for r in 0..n {
                if r == i {
                    continue;
                }
                let factor = work[r * n + i];
                if factor == T::zero() {
                    continue;
                }
                for c in 0..n {
                    work[r * n + c] = work[r * n + c] - factor * work[i * n + c];
                    inv[r * n + c] = inv[r * n + c] - factor * inv[i * n + c];
                }
            }
        }

        Ok(result)
    }

    /// Matrix "division": `self * other⁻¹`
    ///
    /// # Errors
    ///
    /// Any error of [`inverse`](Self::inverse) on `other`, then of
    /// [`matmul`](Self::matmul).
    pub fn matdiv(&self, other: &Self) -> TensorResult<Self> {
        self.matmul(&other.inverse()?)
    }

    /// Transpose a 2D tensor
    ///
    /// # Errors
    ///
    /// [`TensorError::Rank`] if the tensor is not 2D.
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let t = Tensor::<f64>::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// let tt = t.transpose().unwrap();
    /// assert_eq!(tt.shape(), &[3, 2]);
    /// assert_eq!(tt.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    /// ```
    pub fn transpose(&self) -> TensorResult<Self> {
        self.ensure_matrix("transpose")?;
        let (m, n) = (self.shape[0], self.shape[1]);
        Ok(Self::from_fn(&[n, m], |idx| self.data[idx[1] * n + idx[0]]))
    }
}
