//! # Tensor - Trait Implementations
//!
//! Operator sugar over the named operations, plus text rendering.
//!
//! | Expression | Named operation |
//! |---|---|
//! | `a + b`, `a += b` | [`Tensor::add`], [`Tensor::add_inplace`] |
//! | `a - b`, `a -= b` | [`Tensor::sub`], [`Tensor::sub_inplace`] |
//! | `a * b` | [`Tensor::matmul`] |
//! | `a / b` | [`Tensor::matdiv`] |
//! | `a * s`, `s * a`, `a *= s` | [`Tensor::scale`], [`Tensor::scale_inplace`] |
//! | `a / s`, `a /= s` | [`Tensor::div_scalar`], [`Tensor::div_scalar_inplace`] |
//! | `s / a` | `s * a.inverse()` |
//!
//! The operators panic with the error's message where the named operation
//! would return `Err`.

use super::types::Tensor;
use crate::error::or_panic;
use num_traits::Float;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<'b, T: Float> Add<&'b Tensor<T>> for &Tensor<T> {
    type Output = Tensor<T>;
    fn add(self, rhs: &'b Tensor<T>) -> Self::Output {
        or_panic(Tensor::add(self, rhs))
    }
}

impl<'b, T: Float> Add<&'b Tensor<T>> for Tensor<T> {
    type Output = Tensor<T>;
    fn add(mut self, rhs: &'b Tensor<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Float> Add for Tensor<T> {
    type Output = Tensor<T>;
    fn add(self, rhs: Tensor<T>) -> Self::Output {
        self + &rhs
    }
}

impl<'b, T: Float> Sub<&'b Tensor<T>> for &Tensor<T> {
    type Output = Tensor<T>;
    fn sub(self, rhs: &'b Tensor<T>) -> Self::Output {
        or_panic(Tensor::sub(self, rhs))
    }
}

impl<'b, T: Float> Sub<&'b Tensor<T>> for Tensor<T> {
    type Output = Tensor<T>;
    fn sub(mut self, rhs: &'b Tensor<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Float> Sub for Tensor<T> {
    type Output = Tensor<T>;
    fn sub(self, rhs: Tensor<T>) -> Self::Output {
        self - &rhs
    }
}

impl<'b, T: Float> AddAssign<&'b Tensor<T>> for Tensor<T> {
    fn add_assign(&mut self, rhs: &'b Tensor<T>) {
        or_panic(self.add_inplace(rhs));
    }
}

impl<'b, T: Float> SubAssign<&'b Tensor<T>> for Tensor<T> {
    fn sub_assign(&mut self, rhs: &'b Tensor<T>) {
        or_panic(self.sub_inplace(rhs));
    }
}

impl<'b, T: Float> Mul<&'b Tensor<T>> for &Tensor<T> {
    type Output = Tensor<T>;
    fn mul(self, rhs: &'b Tensor<T>) -> Self::Output {
        or_panic(self.matmul(rhs))
    }
}

impl<T: Float> Mul for Tensor<T> {
    type Output = Tensor<T>;
    fn mul(self, rhs: Tensor<T>) -> Self::Output {
        &self * &rhs
    }
}

impl<'b, T: Float> Div<&'b Tensor<T>> for &Tensor<T> {
    type Output = Tensor<T>;
    fn div(self, rhs: &'b Tensor<T>) -> Self::Output {
        or_panic(self.matdiv(rhs))
    }
}

impl<T: Float> Div for Tensor<T> {
    type Output = Tensor<T>;
    fn div(self, rhs: Tensor<T>) -> Self::Output {
        &self / &rhs
    }
}

impl<T: Float> Mul<T> for &Tensor<T> {
    type Output = Tensor<T>;
    fn mul(self, scalar: T) -> Self::Output {
        self.scale(scalar)
    }
}

impl<T: Float> Mul<T> for Tensor<T> {
    type Output = Tensor<T>;
    fn mul(mut self, scalar: T) -> Self::Output {
        self *= scalar;
        self
    }
}

impl<T: Float> Div<T> for &Tensor<T> {
    type Output = Tensor<T>;
    fn div(self, scalar: T) -> Self::Output {
        or_panic(self.div_scalar(scalar))
    }
}

impl<T: Float> Div<T> for Tensor<T> {
    type Output = Tensor<T>;
    fn div(mut self, scalar: T) -> Self::Output {
        self /= scalar;
        self
    }
}

impl<T: Float> MulAssign<T> for Tensor<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.scale_inplace(scalar);
    }
}

impl<T: Float> DivAssign<T> for Tensor<T> {
    fn div_assign(&mut self, scalar: T) {
        or_panic(self.div_scalar_inplace(scalar));
    }
}

impl<T: Float> Neg for &Tensor<T> {
    type Output = Tensor<T>;
    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl<T: Float> Neg for Tensor<T> {
    type Output = Tensor<T>;
    fn neg(mut self) -> Self::Output {
        self.map_inplace(|v| -v);
        self
    }
}

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Mul<Tensor<$t>> for $t {
            type Output = Tensor<$t>;
            fn mul(self, tensor: Tensor<$t>) -> Self::Output {
                tensor * self
            }
        }

        impl<'b> Mul<&'b Tensor<$t>> for $t {
            type Output = Tensor<$t>;
            fn mul(self, tensor: &'b Tensor<$t>) -> Self::Output {
                tensor.scale(self)
            }
        }

        impl<'b> Div<&'b Tensor<$t>> for $t {
            type Output = Tensor<$t>;
            fn div(self, tensor: &'b Tensor<$t>) -> Self::Output {
                let mut inv = or_panic(tensor.inverse());
                inv *= self;
                inv
            }
        }

        impl Div<Tensor<$t>> for $t {
            type Output = Tensor<$t>;
            fn div(self, tensor: Tensor<$t>) -> Self::Output {
                self / &tensor
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);

impl<T: Float + fmt::Display> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            1 => {
                write!(f, "(")?;
                for (i, v) in self.data.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, ")")
            }
            2 => {
                let (rows, cols) = (self.shape[0], self.shape[1]);
                writeln!(f, "[")?;
                for r in 0..rows {
                    write!(f, "  [")?;
                    for c in 0..cols {
                        if c > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", self.data[r * cols + c])?;
                    }
                    if r + 1 < rows {
                        writeln!(f, "],")?;
                    } else {
                        writeln!(f, "]")?;
                    }
                }
                write!(f, "]")
            }
            rank => write!(f, "[Tensor {}D: total elements = {}]", rank, self.len()),
        }
    }
}

impl<T: Float + fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("strides", &self.strides())
            .field("data", &self.data)
            .finish()
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
    fn test_add_sub_operators() {
        assert_eq!((&a() + &b()).as_slice(), &[5.0, 9.0, 5.0, 10.0]);
        assert_eq!((a() - b()).as_slice(), &[3.0, 5.0, -1.0, 2.0]);
        assert_eq!(a() + &b() - &b(), a());
    }

    #[test]
    fn test_compound_operators() {
        let mut t = a();
        t += &b();
        t -= &b();
        t *= 3.0;
        t /= 3.0;
        assert!(t.approx_eq(&a(), 1e-12));
    }

    #[test]
    fn test_scalar_operators() {
        assert_eq!((2.0 * a()).as_slice(), &[8.0, 14.0, 4.0, 12.0]);
        assert_eq!((&a() * 2.0).as_slice(), &[8.0, 14.0, 4.0, 12.0]);
        assert_eq!((a() / 2.0).as_slice(), &[2.0, 3.5, 1.0, 3.0]);
        assert_eq!((-&a()).as_slice(), &[-4.0, -7.0, -2.0, -6.0]);
    }

    #[test]
    fn test_star_is_matmul() {
        assert_eq!((&a() * &b()).as_slice(), &[25.0, 36.0, 20.0, 28.0]);
    }

    #[test]
    fn test_division_operators() {
        let inv = 1.0 / &a();
        assert!(inv.approx_eq(&a().inverse().unwrap(), 1e-12));
        assert!((&a() * &inv).approx_eq(&Tensor::eye(2), 1e-9));
        assert!((&b() / &a()).approx_eq(&b().matdiv(&a()).unwrap(), 1e-12));
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn test_add_operator_panics_on_mismatch() {
        let _ = &a() + &Tensor::zeros(&[3]);
    }

    #[test]
    #[should_panic(expected = "singular")]
    fn test_scalar_div_singular_panics() {
        let _ = 1.0 / Tensor::<f64>::zeros(&[2, 2]);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_assign_zero_panics() {
        let mut t = a();
        t /= 0.0;
    }

    #[test]
    fn test_display_vector() {
        let v = Tensor::from_vec(vec![1.0, 2.5, 3.0], &[3]).unwrap();
        assert_eq!(v.to_string(), "(1, 2.5, 3)");
    }

    #[test]
    fn test_display_matrix() {
        assert_eq!(a().to_string(), "[\n  [4, 7],\n  [2, 6]\n]");
    }

    #[test]
    fn test_display_higher_rank() {
        let t = Tensor::<f64>::zeros(&[2, 3, 4]);
        assert_eq!(t.to_string(), "[Tensor 3D: total elements = 24]");
        let s = Tensor::<f64>::zeros(&[]);
        assert_eq!(s.to_string(), "[Tensor 0D: total elements = 1]");
    }

    #[test]
    fn test_debug() {
        let dbg = format!("{:?}", b());
        assert!(dbg.contains("shape: [2, 2]"));
        assert!(dbg.contains("strides: [2, 1]"));
    }
}
