//! Element-wise arithmetic on tensors
//!
//! Binary operations require identical shapes; there is no broadcasting. The
//! value-returning forms allocate a fresh tensor and leave both operands
//! untouched, while the `*_inplace` forms overwrite the receiver and hand it
//! back for chaining. A failed in-place call leaves the receiver unchanged.

use super::types::Tensor;
use crate::error::{TensorError, TensorResult};
use num_traits::Float;

impl<T> Tensor<T>
where
    T: Float,
{
    fn ensure_same_shape(&self, other: &Self, operation: &'static str) -> TensorResult<()> {
        if self.shape != other.shape {
            return Err(TensorError::shape_mismatch(operation, &self.shape, &other.shape).logged());
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Self, operation: &'static str, f: F) -> TensorResult<Self>
    where
        F: Fn(T, T) -> T,
    {
        self.ensure_same_shape(other, operation)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self::from_parts(&self.shape, data))
    }

    /// Element-wise sum of two equally shaped tensors
    ///
    /// # Errors
    ///
    /// [`TensorError::ShapeMismatch`] if the shapes differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let a = Tensor::from_vec(vec![4.0, 7.0, 2.0, 6.0], &[2, 2]).unwrap();
    /// let b = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().as_slice(), &[5.0, 9.0, 5.0, 10.0]);
    /// ```
    pub fn add(&self, other: &Self) -> TensorResult<Self> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Element-wise difference of two equally shaped tensors
    ///
    /// # Errors
    ///
    /// [`TensorError::ShapeMismatch`] if the shapes differ.
    pub fn sub(&self, other: &Self) -> TensorResult<Self> {
        self.zip_with(other, "sub", |a, b| a - b)
    }

    /// Element-wise multiplication (Hadamard product) with another tensor.
    ///
    /// Computes C[i,j,...] = A[i,j,...] * B[i,j,...] for all indices.
    ///
    /// # Errors
    ///
    /// [`TensorError::ShapeMismatch`] if the shapes differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let a = Tensor::from_vec(vec![4.0, 7.0, 2.0, 6.0], &[2, 2]).unwrap();
    /// let b = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(a.hadamard(&b).unwrap().as_slice(), &[4.0, 14.0, 6.0, 24.0]);
    /// ```
    pub fn hadamard(&self, other: &Self) -> TensorResult<Self> {
        self.zip_with(other, "hadamard", |a, b| a * b)
    }

    /// Multiply every element by `scalar`
    pub fn scale(&self, scalar: T) -> Self {
        self.map(|v| v * scalar)
    }

    /// Divide every element by `scalar`
    ///
    /// # Errors
    ///
    /// [`TensorError::DivisionByZero`] if `scalar` is zero.
    pub fn div_scalar(&self, scalar: T) -> TensorResult<Self> {
        Self::ensure_nonzero(scalar, "div_scalar")?;
        Ok(self.map(|v| v / scalar))
    }

    /// In-place element-wise sum, returning the receiver
    ///
    /// # Examples
    ///
    /// ```
    /// use numc_core::Tensor;
    ///
    /// let mut a = Tensor::<f64>::ones(&[3]);
    /// let b = Tensor::<f64>::ones(&[3]);
    /// a.add_inplace(&b).unwrap().add_inplace(&b).unwrap();
    /// assert_eq!(a.as_slice(), &[3.0, 3.0, 3.0]);
    /// ```
    pub fn add_inplace(&mut self, other: &Self) -> TensorResult<&mut Self> {
        self.ensure_same_shape(other, "add_inplace")?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = *a + b;
        }
        Ok(self)
    }

    /// In-place element-wise difference, returning the receiver
    pub fn sub_inplace(&mut self, other: &Self) -> TensorResult<&mut Self> {
        self.ensure_same_shape(other, "sub_inplace")?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = *a - b;
        }
        Ok(self)
    }

    /// In-place scalar multiplication, returning the receiver
    pub fn scale_inplace(&mut self, scalar: T) -> &mut Self {
        self.map_inplace(|v| v * scalar);
        self
    }

    /// In-place scalar division, returning the receiver
    ///
    /// # Errors
    ///
    /// [`TensorError::DivisionByZero`] if `scalar` is zero; the receiver is untouched.
    pub fn div_scalar_inplace(&mut self, scalar: T) -> TensorResult<&mut Self> {
        Self::ensure_nonzero(scalar, "div_scalar_inplace")?;
        self.map_inplace(|v| v / scalar);
        Ok(self)
    }

    /// Apply `f` to every element, producing a new tensor of the same shape
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        Self::from_parts(&self.shape, self.data.iter().map(|&v| f(v)).collect())
    }

    /// Apply `f` to every element in place
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: Fn(T) -> T,
    {
        for v in self.data.iter_mut() {
            *v = f(*v);
        }
    }

    /// Set every element to `value`
    pub fn fill(&mut self, value: T) {
        self.data.iter_mut().for_each(|v| *v = value);
    }

    fn ensure_nonzero(scalar: T, operation: &'static str) -> TensorResult<()> {
        if scalar == T::zero() {
            return Err(TensorError::DivisionByZero { operation }.logged());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> Tensor<f64> {
        Tensor::from_vec(vec![4.0, 7.0, 2.0, 6.0], &[2, 2]).unwrap()
    }

    fn b() -> Tensor<f64> {
        Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap()
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(a().add(&b()).unwrap().as_slice(), &[5.0, 9.0, 5.0, 10.0]);
        assert_eq!(a().sub(&b()).unwrap().as_slice(), &[3.0, 5.0, -1.0, 2.0]);
    }

    #[test]
    fn test_operands_untouched() {
        let (lhs, rhs) = (a(), b());
        let _ = lhs.add(&rhs).unwrap();
        let _ = lhs.hadamard(&rhs).unwrap();
        assert_eq!(lhs, a());
        assert_eq!(rhs, b());
    }

    #[test]
    fn test_hadamard() {
        assert_eq!(a().hadamard(&b()).unwrap().as_slice(), &[4.0, 14.0, 6.0, 24.0]);
    }

    #[test]
    fn test_shape_mismatch() {
        let c = Tensor::<f64>::zeros(&[2, 3]);
        for result in [a().add(&c), a().sub(&c), a().hadamard(&c)] {
            assert!(matches!(result, Err(TensorError::ShapeMismatch { .. })));
        }
    }

    #[test]
    fn test_same_len_different_shape_mismatch() {
        let row = Tensor::<f64>::zeros(&[1, 4]);
        assert!(a().add(&row).is_err());
    }

    #[test]
    fn test_scale_and_div() {
        assert_eq!(a().scale(2.0).as_slice(), &[8.0, 14.0, 4.0, 12.0]);
        assert_eq!(a().div_scalar(2.0).unwrap().as_slice(), &[2.0, 3.5, 1.0, 3.0]);
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(
            a().div_scalar(0.0).unwrap_err(),
            TensorError::DivisionByZero {
                operation: "div_scalar"
            }
        );
        let mut t = a();
        assert!(t.div_scalar_inplace(-0.0).is_err());
        assert_eq!(t, a());
    }

    #[test]
    fn test_inplace_forms() {
        let mut t = a();
        t.add_inplace(&b()).unwrap();
        assert_eq!(t.as_slice(), &[5.0, 9.0, 5.0, 10.0]);
        t.sub_inplace(&b()).unwrap();
        assert_eq!(t, a());
        t.scale_inplace(0.5);
        assert_eq!(t.as_slice(), &[2.0, 3.5, 1.0, 3.0]);
        t.div_scalar_inplace(0.5).unwrap();
        assert_eq!(t, a());
    }

    #[test]
    fn test_failed_inplace_leaves_receiver() {
        let mut t = a();
        assert!(t.add_inplace(&Tensor::zeros(&[4])).is_err());
        assert_eq!(t, a());
    }

    #[test]
    fn test_map_and_fill() {
        let mut t = a().map(|v| v - 1.0);
        assert_eq!(t.as_slice(), &[3.0, 6.0, 1.0, 5.0]);
        t.fill(0.25);
        assert!(t.iter().all(|&v| v == 0.25));
    }
}
