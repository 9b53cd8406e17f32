//! Elementary functions lifted to [`Func`]
//!
//! Each function takes the inner function by reference and returns the
//! composition, e.g. `sin(&f)` evaluates to `f(x).sin()`. Domain errors follow
//! IEEE semantics (`ln(&x)` at a negative point is NaN).

use crate::func::{cast, Func, Scalar};

macro_rules! lift {
    ($($(#[$doc:meta])* $name:ident => $method:ident;)*) => {$(
        $(#[$doc])*
        pub fn $name<T: Scalar>(f: &Func<T>) -> Func<T> {
            f.map(T::$method)
        }
    )*};
}

lift! {
    /// `e^f(x)`
    exp => exp;
    /// Natural logarithm
    ln => ln;
    log2 => log2;
    log10 => log10;
    sin => sin;
    cos => cos;
    tan => tan;
    asin => asin;
    acos => acos;
    atan => atan;
    sinh => sinh;
    cosh => cosh;
    tanh => tanh;
    asinh => asinh;
    acosh => acosh;
    atanh => atanh;
    sqrt => sqrt;
    cbrt => cbrt;
    abs => abs;
    floor => floor;
    ceil => ceil;
}

/// Logarithm in an arbitrary `base`
pub fn log<T: Scalar>(base: T, f: &Func<T>) -> Func<T> {
    let denom = base.ln();
    f.map(move |v| v.ln() / denom)
}

/// Cotangent, `1 / tan`
pub fn cot<T: Scalar>(f: &Func<T>) -> Func<T> {
    f.map(|v| v.tan().recip())
}

/// Inverse cotangent with range `(0, π)`
pub fn acot<T: Scalar>(f: &Func<T>) -> Func<T> {
    f.map(|v| T::one().atan2(v))
}

/// Hyperbolic cotangent
pub fn coth<T: Scalar>(f: &Func<T>) -> Func<T> {
    f.map(|v| v.tanh().recip())
}

/// Inverse hyperbolic cotangent, defined for `|x| > 1`
pub fn acoth<T: Scalar>(f: &Func<T>) -> Func<T> {
    f.map(|v| v.recip().atanh())
}

/// `f(x)^(1/degree)`
pub fn root<T: Scalar>(degree: T, f: &Func<T>) -> Func<T> {
    let exponent = degree.recip();
    f.map(move |v| v.powf(exponent))
}

/// `-1`, `0` or `1` by the sign of `f(x)`; zero (of either sign) maps to zero
pub fn sign<T: Scalar>(f: &Func<T>) -> Func<T> {
    f.map(|v| {
        if v > T::zero() {
            T::one()
        } else if v < T::zero() {
            -T::one()
        } else {
            T::zero()
        }
    })
}

/// Round half away from zero to `places` decimal places
///
/// Negative `places` rounds to tens, hundreds and so on.
pub fn round<T: Scalar>(f: &Func<T>, places: i32) -> Func<T> {
    let factor = cast::<T>(10.0).powi(places);
    f.map(move |v| (v * factor).round() / factor)
}
