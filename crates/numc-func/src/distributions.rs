//! Probability density and cumulative distribution functions
//!
//! Every constructor takes the variable as a [`Func`] followed by the
//! distribution parameters, e.g. `norm_pdf(&x, 0.0, 1.0)` for the standard
//! normal density. Parameters outside the distribution's domain (a
//! non-positive scale, an empty support) are reported with `log::warn!` when
//! the function is built; evaluation still follows the formula, so such
//! functions typically yield NaN or infinities.

use crate::func::{cast, Func, Scalar};
use crate::special::{beta_at, erf_at, lgamma_at};
use log::warn;
use std::f64::consts::{PI, SQRT_2};

fn check_positive<T: Scalar>(dist: &str, param: &str, value: T) {
    if value.is_nan() || value <= T::zero() {
        warn!(
            "{}: parameter {} must be positive, got {}",
            dist,
            param,
            value.to_f64().unwrap_or(f64::NAN)
        );
    }
}

/// Normal density with mean `mu` and standard deviation `sigma`
pub fn norm_pdf<T: Scalar>(x: &Func<T>, mu: T, sigma: T) -> Func<T> {
    check_positive("norm_pdf", "sigma", sigma);
    let norm = sigma * cast::<T>(2.0 * PI).sqrt();
    let half: T = cast(0.5);
    x.map(move |v| {
        let z = (v - mu) / sigma;
        (-half * z * z).exp() / norm
    })
}

/// Normal distribution function with mean `mu` and standard deviation `sigma`
pub fn norm_cdf<T: Scalar>(x: &Func<T>, mu: T, sigma: T) -> Func<T> {
    check_positive("norm_cdf", "sigma", sigma);
    let scale = sigma * cast::<T>(SQRT_2);
    let half: T = cast(0.5);
    x.map(move |v| half * (T::one() + erf_at((v - mu) / scale)))
}

fn check_interval<T: Scalar>(dist: &str, a: T, b: T) {
    if a.is_nan() || b.is_nan() || b <= a {
        warn!(
            "{}: empty support [{}, {}]",
            dist,
            a.to_f64().unwrap_or(f64::NAN),
            b.to_f64().unwrap_or(f64::NAN)
        );
    }
}

/// Uniform density on `[a, b]`
pub fn uniform_pdf<T: Scalar>(x: &Func<T>, a: T, b: T) -> Func<T> {
    check_interval("uniform_pdf", a, b);
    let height = (b - a).recip();
    x.map(move |v| if v < a || v > b { T::zero() } else { height })
}

/// Uniform distribution function on `[a, b]`
pub fn uniform_cdf<T: Scalar>(x: &Func<T>, a: T, b: T) -> Func<T> {
    check_interval("uniform_cdf", a, b);
    x.map(move |v| {
        if v < a {
            T::zero()
        } else if v > b {
            T::one()
        } else {
            (v - a) / (b - a)
        }
    })
}

/// Exponential density with rate `lambda`
pub fn exp_pdf<T: Scalar>(x: &Func<T>, lambda: T) -> Func<T> {
    check_positive("exp_pdf", "lambda", lambda);
    x.map(move |v| {
        if v >= T::zero() {
            lambda * (-lambda * v).exp()
        } else {
            T::zero()
        }
    })
}

/// Exponential distribution function with rate `lambda`
pub fn exp_cdf<T: Scalar>(x: &Func<T>, lambda: T) -> Func<T> {
    check_positive("exp_cdf", "lambda", lambda);
    x.map(move |v| {
        if v >= T::zero() {
            T::one() - (-lambda * v).exp()
        } else {
            T::zero()
        }
    })
}

/// Weibull density with shape `k` and scale `lambda`
pub fn weibull_pdf<T: Scalar>(x: &Func<T>, k: T, lambda: T) -> Func<T> {
    check_positive("weibull_pdf", "shape", k);
    check_positive("weibull_pdf", "scale", lambda);
    x.map(move |v| {
        if v < T::zero() {
            return T::zero();
        }
        let r = v / lambda;
        (k / lambda) * r.powf(k - T::one()) * (-r.powf(k)).exp()
    })
}

/// Weibull distribution function with shape `k` and scale `lambda`
pub fn weibull_cdf<T: Scalar>(x: &Func<T>, k: T, lambda: T) -> Func<T> {
    check_positive("weibull_cdf", "shape", k);
    check_positive("weibull_cdf", "scale", lambda);
    x.map(move |v| {
        if v < T::zero() {
            T::zero()
        } else {
            T::one() - (-(v / lambda).powf(k)).exp()
        }
    })
}

/// Rayleigh density with scale `sigma`
pub fn rayleigh_pdf<T: Scalar>(x: &Func<T>, sigma: T) -> Func<T> {
    check_positive("rayleigh_pdf", "sigma", sigma);
    let s2 = sigma * sigma;
    let two: T = cast(2.0);
    x.map(move |v| {
        if v < T::zero() {
            T::zero()
        } else {
            (v / s2) * (-(v * v) / (two * s2)).exp()
        }
    })
}

/// Rayleigh distribution function with scale `sigma`
pub fn rayleigh_cdf<T: Scalar>(x: &Func<T>, sigma: T) -> Func<T> {
    check_positive("rayleigh_cdf", "sigma", sigma);
    let s2 = sigma * sigma;
    let two: T = cast(2.0);
    x.map(move |v| {
        if v < T::zero() {
            T::zero()
        } else {
            T::one() - (-(v * v) / (two * s2)).exp()
        }
    })
}

/// Log-normal density; `mu` and `sigma` describe `ln X`
pub fn lognorm_pdf<T: Scalar>(x: &Func<T>, mu: T, sigma: T) -> Func<T> {
    check_positive("lognorm_pdf", "sigma", sigma);
    let norm = sigma * cast::<T>(2.0 * PI).sqrt();
    let half: T = cast(0.5);
    x.map(move |v| {
        if v <= T::zero() {
            return T::zero();
        }
        let z = (v.ln() - mu) / sigma;
        (-half * z * z).exp() / (v * norm)
    })
}

/// Log-normal distribution function; `mu` and `sigma` describe `ln X`
pub fn lognorm_cdf<T: Scalar>(x: &Func<T>, mu: T, sigma: T) -> Func<T> {
    check_positive("lognorm_cdf", "sigma", sigma);
    let scale = sigma * cast::<T>(SQRT_2);
    let half: T = cast(0.5);
    x.map(move |v| {
        if v <= T::zero() {
            T::zero()
        } else {
            half * (T::one() + erf_at((v.ln() - mu) / scale))
        }
    })
}

/// Laplace density with location `mu` and scale `b`
pub fn laplace_pdf<T: Scalar>(x: &Func<T>, mu: T, b: T) -> Func<T> {
    check_positive("laplace_pdf", "b", b);
    let two: T = cast(2.0);
    x.map(move |v| (-(v - mu).abs() / b).exp() / (two * b))
}

/// Laplace distribution function with location `mu` and scale `b`
pub fn laplace_cdf<T: Scalar>(x: &Func<T>, mu: T, b: T) -> Func<T> {
    check_positive("laplace_cdf", "b", b);
    let half: T = cast(0.5);
    x.map(move |v| {
        if v < mu {
            half * ((v - mu) / b).exp()
        } else {
            T::one() - half * (-(v - mu) / b).exp()
        }
    })
}

/// Cauchy density with location `x0` and scale `gamma`
pub fn cauchy_pdf<T: Scalar>(x: &Func<T>, x0: T, gamma: T) -> Func<T> {
    check_positive("cauchy_pdf", "gamma", gamma);
    let pi: T = cast(PI);
    x.map(move |v| {
        let z = (v - x0) / gamma;
        (pi * gamma * (T::one() + z * z)).recip()
    })
}

/// Cauchy distribution function with location `x0` and scale `gamma`
pub fn cauchy_cdf<T: Scalar>(x: &Func<T>, x0: T, gamma: T) -> Func<T> {
    check_positive("cauchy_cdf", "gamma", gamma);
    let (pi, half): (T, T) = (cast(PI), cast(0.5));
    x.map(move |v| ((v - x0) / gamma).atan() / pi + half)
}

/// Pareto density with scale `xm` and shape `alpha`
pub fn pareto_pdf<T: Scalar>(x: &Func<T>, xm: T, alpha: T) -> Func<T> {
    check_positive("pareto_pdf", "xm", xm);
    check_positive("pareto_pdf", "alpha", alpha);
    let numerator = alpha * xm.powf(alpha);
    x.map(move |v| {
        if v < xm {
            T::zero()
        } else {
            numerator / v.powf(alpha + T::one())
        }
    })
}

/// Pareto distribution function with scale `xm` and shape `alpha`
pub fn pareto_cdf<T: Scalar>(x: &Func<T>, xm: T, alpha: T) -> Func<T> {
    check_positive("pareto_cdf", "xm", xm);
    check_positive("pareto_cdf", "alpha", alpha);
    x.map(move |v| {
        if v < xm {
            T::zero()
        } else {
            T::one() - (xm / v).powf(alpha)
        }
    })
}

/// Student's t density with `nu` degrees of freedom
pub fn student_t_pdf<T: Scalar>(x: &Func<T>, nu: T) -> Func<T> {
    check_positive("student_t_pdf", "nu", nu);
    let (one, half): (T, T) = (T::one(), cast(0.5));
    let exponent = -(nu + one) * half;
    // Γ((ν+1)/2) / (sqrt(νπ) Γ(ν/2)), through ln Γ for large ν
    let norm = (lgamma_at((nu + one) * half) - lgamma_at(nu * half)).exp()
        / (nu * cast::<T>(PI)).sqrt();
    x.map(move |v| norm * (one + v * v / nu).powf(exponent))
}

/// Chi-squared density with `k` degrees of freedom
pub fn chisq_pdf<T: Scalar>(x: &Func<T>, k: T) -> Func<T> {
    check_positive("chisq_pdf", "k", k);
    let half: T = cast(0.5);
    let h = k * half;
    let log_norm = h * cast::<T>(2.0).ln() + lgamma_at(h);
    x.map(move |v| {
        if v <= T::zero() {
            T::zero()
        } else {
            ((h - T::one()) * v.ln() - v * half - log_norm).exp()
        }
    })
}

/// Fisher-Snedecor F density with `d1` and `d2` degrees of freedom
pub fn f_pdf<T: Scalar>(x: &Func<T>, d1: T, d2: T) -> Func<T> {
    check_positive("f_pdf", "d1", d1);
    check_positive("f_pdf", "d2", d2);
    let half: T = cast(0.5);
    let b = beta_at(d1 * half, d2 * half);
    x.map(move |v| {
        if v <= T::zero() {
            return T::zero();
        }
        let log_num = d1 * half * (d1 * v).ln() + d2 * half * d2.ln()
            - (d1 + d2) * half * (d1 * v + d2).ln();
        log_num.exp() / (v * b)
    })
}

/// Gamma density with shape `k` and scale `theta`
pub fn gamma_pdf<T: Scalar>(x: &Func<T>, k: T, theta: T) -> Func<T> {
    check_positive("gamma_pdf", "shape", k);
    check_positive("gamma_pdf", "scale", theta);
    let log_norm = k * theta.ln() + lgamma_at(k);
    x.map(move |v| {
        if v <= T::zero() {
            T::zero()
        } else {
            ((k - T::one()) * v.ln() - v / theta - log_norm).exp()
        }
    })
}

/// Beta density with shape parameters `alpha` and `beta` on `[0, 1]`
pub fn beta_pdf<T: Scalar>(x: &Func<T>, alpha: T, beta: T) -> Func<T> {
    check_positive("beta_pdf", "alpha", alpha);
    check_positive("beta_pdf", "beta", beta);
    let b = beta_at(alpha, beta);
    let one = T::one();
    x.map(move |v| {
        if v < T::zero() || v > one {
            T::zero()
        } else {
            v.powf(alpha - one) * (one - v).powf(beta - one) / b
        }
    })
}
