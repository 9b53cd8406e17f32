//! Composable real functions
//!
//! [`Func`] wraps a shared closure `T -> T`. Arithmetic on functions builds
//! new closures point-wise, so expressions such as `x ^ x` or `2.0 * sin(&x)`
//! read like the formulas they evaluate.
//!
//! ```
//! use numc_func::{sin, Func};
//!
//! let x = Func::<f64>::x();
//! let f = &x ^ &x;
//! let g = sin(&x);
//!
//! assert_eq!(f.eval(2.0), 4.0);
//! assert!(((&f + &g).eval(1.0) - 1.841_470_984_807_896_5).abs() < 1e-12);
//! ```

use num_traits::Float;
use numc_core::Tensor;
use std::fmt;
use std::ops::{Add, BitXor, Div, Mul, Neg, Sub};
use std::sync::Arc;

/// Element type a [`Func`] can be built over.
pub trait Scalar: Float + Send + Sync + 'static {}

impl<T> Scalar for T where T: Float + Send + Sync + 'static {}

/// Convert an `f64` literal into the function's element type.
pub(crate) fn cast<T: Scalar>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// A real function of one variable.
///
/// Cloning is cheap: clones share the underlying closure.
pub struct Func<T> {
    f: Arc<dyn Fn(T) -> T + Send + Sync>,
}

impl<T> Clone for Func<T> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T> fmt::Debug for Func<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Func").finish_non_exhaustive()
    }
}

impl<T: Scalar> Func<T> {
    /// Wrap a closure
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// The identity function `f(x) = x`
    pub fn x() -> Self {
        Self::new(|v| v)
    }

    /// The constant function `f(x) = c`
    pub fn constant(c: T) -> Self {
        Self::new(move |_| c)
    }

    /// Evaluate at `x`
    pub fn eval(&self, x: T) -> T {
        (self.f)(x)
    }

    /// `g(self(x))`
    pub fn map<G>(&self, g: G) -> Self
    where
        G: Fn(T) -> T + Send + Sync + 'static,
    {
        let f = Arc::clone(&self.f);
        Self::new(move |v| g(f(v)))
    }

    /// `self(inner(x))`
    pub fn compose(&self, inner: &Func<T>) -> Self {
        let (outer, inner) = (Arc::clone(&self.f), Arc::clone(&inner.f));
        Self::new(move |v| outer(inner(v)))
    }

    /// Point-wise combination `op(self(x), other(x))`
    pub fn zip_with<Op>(&self, other: &Func<T>, op: Op) -> Self
    where
        Op: Fn(T, T) -> T + Send + Sync + 'static,
    {
        let (lhs, rhs) = (Arc::clone(&self.f), Arc::clone(&other.f));
        Self::new(move |v| op(lhs(v), rhs(v)))
    }

    /// `self(x) ^ exponent(x)`
    pub fn pow(&self, exponent: &Func<T>) -> Self {
        self.zip_with(exponent, T::powf)
    }

    /// `self(x) ^ exponent`
    pub fn powf(&self, exponent: T) -> Self {
        self.map(move |v| v.powf(exponent))
    }

    /// Evaluate at every element of `tensor`
    ///
    /// ```
    /// use numc_core::Tensor;
    /// use numc_func::Func;
    ///
    /// let square = Func::<f64>::x().powf(2.0);
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
    /// assert_eq!(square.apply(&t).as_slice(), &[1.0, 4.0, 9.0]);
    /// ```
    pub fn apply(&self, tensor: &Tensor<T>) -> Tensor<T> {
        tensor.map(|v| self.eval(v))
    }
}

impl<T: Scalar> From<T> for Func<T> {
    fn from(c: T) -> Self {
        Self::constant(c)
    }
}

macro_rules! impl_func_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<'b, T: Scalar> $trait<&'b Func<T>> for &Func<T> {
            type Output = Func<T>;
            fn $method(self, rhs: &'b Func<T>) -> Func<T> {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }

        impl<'b, T: Scalar> $trait<&'b Func<T>> for Func<T> {
            type Output = Func<T>;
            fn $method(self, rhs: &'b Func<T>) -> Func<T> {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }

        impl<T: Scalar> $trait<Func<T>> for &Func<T> {
            type Output = Func<T>;
            fn $method(self, rhs: Func<T>) -> Func<T> {
                self.zip_with(&rhs, |a, b| a $op b)
            }
        }

        impl<T: Scalar> $trait for Func<T> {
            type Output = Func<T>;
            fn $method(self, rhs: Func<T>) -> Func<T> {
                self.zip_with(&rhs, |a, b| a $op b)
            }
        }

        impl<T: Scalar> $trait<T> for &Func<T> {
            type Output = Func<T>;
            fn $method(self, rhs: T) -> Func<T> {
                self.map(move |a| a $op rhs)
            }
        }

        impl<T: Scalar> $trait<T> for Func<T> {
            type Output = Func<T>;
            fn $method(self, rhs: T) -> Func<T> {
                self.map(move |a| a $op rhs)
            }
        }
    };
}

impl_func_op!(Add, add, +);
impl_func_op!(Sub, sub, -);
impl_func_op!(Mul, mul, *);
impl_func_op!(Div, div, /);

/// `f ^ g` is `f(x)` raised to `g(x)`
impl<'b, T: Scalar> BitXor<&'b Func<T>> for &Func<T> {
    type Output = Func<T>;
    fn bitxor(self, rhs: &'b Func<T>) -> Func<T> {
        self.pow(rhs)
    }
}

impl<T: Scalar> BitXor for Func<T> {
    type Output = Func<T>;
    fn bitxor(self, rhs: Func<T>) -> Func<T> {
        self.pow(&rhs)
    }
}

impl<T: Scalar> BitXor<T> for &Func<T> {
    type Output = Func<T>;
    fn bitxor(self, rhs: T) -> Func<T> {
        self.powf(rhs)
    }
}

impl<T: Scalar> BitXor<T> for Func<T> {
    type Output = Func<T>;
    fn bitxor(self, rhs: T) -> Func<T> {
        self.powf(rhs)
    }
}

impl<T: Scalar> Neg for &Func<T> {
    type Output = Func<T>;
    fn neg(self) -> Func<T> {
        self.map(|v| -v)
    }
}

impl<T: Scalar> Neg for Func<T> {
    type Output = Func<T>;
    fn neg(self) -> Func<T> {
        -&self
    }
}

// Scalar on the left: `2.0 * f`, `1.0 / f`, `E ^ f`
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl<'b> Add<&'b Func<$t>> for $t {
            type Output = Func<$t>;
            fn add(self, rhs: &'b Func<$t>) -> Func<$t> {
                rhs.map(move |v| self + v)
            }
        }

        impl<'b> Sub<&'b Func<$t>> for $t {
            type Output = Func<$t>;
            fn sub(self, rhs: &'b Func<$t>) -> Func<$t> {
                rhs.map(move |v| self - v)
            }
        }

        impl<'b> Mul<&'b Func<$t>> for $t {
            type Output = Func<$t>;
            fn mul(self, rhs: &'b Func<$t>) -> Func<$t> {
                rhs.map(move |v| self * v)
            }
        }

        impl<'b> Div<&'b Func<$t>> for $t {
            type Output = Func<$t>;
            fn div(self, rhs: &'b Func<$t>) -> Func<$t> {
                rhs.map(move |v| self / v)
            }
        }

        impl<'b> BitXor<&'b Func<$t>> for $t {
            type Output = Func<$t>;
            fn bitxor(self, rhs: &'b Func<$t>) -> Func<$t> {
                rhs.map(move |v| self.powf(v))
            }
        }

        impl Add<Func<$t>> for $t {
            type Output = Func<$t>;
            fn add(self, rhs: Func<$t>) -> Func<$t> {
                self + &rhs
            }
        }

        impl Sub<Func<$t>> for $t {
            type Output = Func<$t>;
            fn sub(self, rhs: Func<$t>) -> Func<$t> {
                self - &rhs
            }
        }

        impl Mul<Func<$t>> for $t {
            type Output = Func<$t>;
            fn mul(self, rhs: Func<$t>) -> Func<$t> {
                self * &rhs
            }
        }

        impl Div<Func<$t>> for $t {
            type Output = Func<$t>;
            fn div(self, rhs: Func<$t>) -> Func<$t> {
                self / &rhs
            }
        }

        impl BitXor<Func<$t>> for $t {
            type Output = Func<$t>;
            fn bitxor(self, rhs: Func<$t>) -> Func<$t> {
                self ^ &rhs
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Func<f64> {
        Func::x()
    }

    #[test]
    fn test_identity_and_constant() {
        assert_eq!(x().eval(3.5), 3.5);
        assert_eq!(Func::constant(7.0).eval(-1.0), 7.0);
        assert_eq!(Func::from(2.0).eval(100.0), 2.0);
    }

    #[test]
    fn test_self_power() {
        let x = x();
        let f = &x ^ &x;
        assert_eq!(f.eval(1.0), 1.0);
        assert_eq!(f.eval(2.0), 4.0);
        assert_eq!(f.eval(3.0), 27.0);
    }

    #[test]
    fn test_func_arithmetic() {
        let x = x();
        let sq = &x * &x;
        assert_eq!((&sq + &x).eval(3.0), 12.0);
        assert_eq!((&sq - &x).eval(3.0), 6.0);
        assert_eq!((&sq / &x).eval(3.0), 3.0);
        assert_eq!((sq.clone() + x.clone()).eval(2.0), 6.0);
        assert_eq!((-&sq).eval(2.0), -4.0);
    }

    #[test]
    fn test_scalar_both_sides() {
        let x = x();
        assert_eq!((&x + 1.0).eval(2.0), 3.0);
        assert_eq!((1.0 + &x).eval(2.0), 3.0);
        assert_eq!((&x - 1.0).eval(2.0), 1.0);
        assert_eq!((1.0 - &x).eval(2.0), -1.0);
        assert_eq!((3.0 * &x).eval(2.0), 6.0);
        assert_eq!((&x / 4.0).eval(2.0), 0.5);
        assert_eq!((1.0 / &x).eval(4.0), 0.25);
        assert_eq!((&x ^ 3.0).eval(2.0), 8.0);
        assert_eq!((2.0 ^ &x).eval(3.0), 8.0);
    }

    #[test]
    fn test_compose() {
        let x = x();
        let double = 2.0 * &x;
        let plus_one = &x + 1.0;
        assert_eq!(double.compose(&plus_one).eval(3.0), 8.0);
        assert_eq!(plus_one.compose(&double).eval(3.0), 7.0);
    }

    #[test]
    fn test_f32_funcs() {
        let x = Func::<f32>::x();
        let f = 2.0f32 * &x + 1.0;
        assert_eq!(f.eval(1.5), 4.0);
    }

    #[test]
    fn test_apply_to_tensor() {
        let t = Tensor::from_vec(vec![0.0, 1.0, 2.0, 3.0], &[2, 2]).unwrap();
        let f = &x() * 10.0;
        let out = f.apply(&t);
        assert_eq!(out.shape(), &[2, 2]);
        assert_eq!(out.as_slice(), &[0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_shared_across_threads() {
        let f = &x() ^ 2.0;
        let g = f.clone();
        let handle = std::thread::spawn(move || g.eval(5.0));
        assert_eq!(handle.join().unwrap(), 25.0);
        assert_eq!(f.eval(5.0), 25.0);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", x()), "Func { .. }");
    }
}
