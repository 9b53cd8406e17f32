//! Classical orthogonal polynomials
//!
//! All families are evaluated by their three-term recurrence, which is stable
//! in the forward direction on each family's orthogonality interval. The
//! `*_at` functions evaluate a single point; the lifted forms compose with a
//! [`Func`].

use crate::func::{cast, Func, Scalar};

/// Run `p_{k+1} = step(k, p_k, p_{k-1})` from `p_0`, `p_1` up to `p_n`.
fn recur<T, S>(n: u32, p0: T, p1: T, step: S) -> T
where
    T: Scalar,
    S: Fn(T, T, T) -> T,
{
    if n == 0 {
        return p0;
    }
    let (mut prev, mut cur) = (p0, p1);
    for k in 1..n {
        let next = step(cast(f64::from(k)), cur, prev);
        prev = cur;
        cur = next;
    }
    cur
}

/// Legendre polynomial `P_n(x)`
pub fn legendre_at<T: Scalar>(n: u32, x: T) -> T {
    let (one, two) = (T::one(), cast::<T>(2.0));
    recur(n, one, x, |k, pk, pkm1| {
        ((two * k + one) * x * pk - k * pkm1) / (k + one)
    })
}

/// Physicists' Hermite polynomial `H_n(x)`
pub fn hermite_at<T: Scalar>(n: u32, x: T) -> T {
    let two = cast::<T>(2.0);
    recur(n, T::one(), two * x, |k, hk, hkm1| two * x * hk - two * k * hkm1)
}

/// Laguerre polynomial `L_n(x)`
pub fn laguerre_at<T: Scalar>(n: u32, x: T) -> T {
    let (one, two) = (T::one(), cast::<T>(2.0));
    recur(n, one, one - x, |k, lk, lkm1| {
        ((two * k + one - x) * lk - k * lkm1) / (k + one)
    })
}

/// Chebyshev polynomial of the first kind `T_n(x)`
pub fn chebyshev_at<T: Scalar>(n: u32, x: T) -> T {
    let two = cast::<T>(2.0);
    recur(n, T::one(), x, |_, tk, tkm1| two * x * tk - tkm1)
}

/// Chebyshev polynomial of the second kind `U_n(x)`
pub fn chebyshev_u_at<T: Scalar>(n: u32, x: T) -> T {
    let two = cast::<T>(2.0);
    recur(n, T::one(), two * x, |_, uk, ukm1| two * x * uk - ukm1)
}

/// Gegenbauer (ultraspherical) polynomial `C_n^(alpha)(x)`
pub fn gegenbauer_at<T: Scalar>(n: u32, alpha: T, x: T) -> T {
    let (one, two) = (T::one(), cast::<T>(2.0));
    recur(n, one, two * alpha * x, |k, ck, ckm1| {
        (two * (k + alpha) * x * ck - (k + two * alpha - one) * ckm1) / (k + one)
    })
}

/// Jacobi polynomial `P_n^(alpha, beta)(x)`
pub fn jacobi_at<T: Scalar>(n: u32, alpha: T, beta: T, x: T) -> T {
    let (one, two) = (T::one(), cast::<T>(2.0));
    let ab = alpha + beta;
    let p1 = (alpha - beta + (ab + two) * x) / two;
    recur(n, one, p1, |k, pk, pkm1| {
        // coefficients for the step k -> k + 1
        let m = k + one;
        let s = two * m + ab;
        let c1 = two * m * (m + ab) * (s - two);
        let c2 = (s - one) * (s * (s - two) * x + alpha * alpha - beta * beta);
        let c3 = two * (m + alpha - one) * (m + beta - one) * s;
        (c2 * pk - c3 * pkm1) / c1
    })
}

/// `P_n(f(x))`
pub fn legendre<T: Scalar>(n: u32, f: &Func<T>) -> Func<T> {
    f.map(move |v| legendre_at(n, v))
}

/// `H_n(f(x))`
pub fn hermite<T: Scalar>(n: u32, f: &Func<T>) -> Func<T> {
    f.map(move |v| hermite_at(n, v))
}

/// `L_n(f(x))`
pub fn laguerre<T: Scalar>(n: u32, f: &Func<T>) -> Func<T> {
    f.map(move |v| laguerre_at(n, v))
}

/// `T_n(f(x))`
pub fn chebyshev<T: Scalar>(n: u32, f: &Func<T>) -> Func<T> {
    f.map(move |v| chebyshev_at(n, v))
}

/// `U_n(f(x))`
pub fn chebyshev_u<T: Scalar>(n: u32, f: &Func<T>) -> Func<T> {
    f.map(move |v| chebyshev_u_at(n, v))
}

/// `C_n^(alpha)(f(x))`
pub fn gegenbauer<T: Scalar>(n: u32, alpha: T, f: &Func<T>) -> Func<T> {
    f.map(move |v| gegenbauer_at(n, alpha, v))
}

/// `P_n^(alpha, beta)(f(x))`
pub fn jacobi<T: Scalar>(n: u32, alpha: T, beta: T, f: &Func<T>) -> Func<T> {
    f.map(move |v| jacobi_at(n, alpha, beta, v))
}
