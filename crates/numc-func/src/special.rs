//! Special functions
//!
//! Error and gamma functions, the beta function and integer-order Bessel
//! functions. Values are computed in `f64` by `libm` and cast back to the
//! element type, so `f32` functions carry `f64` accuracy before rounding.

use crate::func::{cast, Func, Scalar};

fn via_f64<T: Scalar>(x: T, g: fn(f64) -> f64) -> T {
    cast(g(x.to_f64().unwrap_or(f64::NAN)))
}

/// Error function `erf(x)`
pub fn erf_at<T: Scalar>(x: T) -> T {
    via_f64(x, libm::erf)
}

/// Complementary error function `1 - erf(x)`, accurate for large `x`
pub fn erfc_at<T: Scalar>(x: T) -> T {
    via_f64(x, libm::erfc)
}

/// Gamma function
pub fn tgamma_at<T: Scalar>(x: T) -> T {
    via_f64(x, libm::tgamma)
}

/// `ln |Γ(x)|`
pub fn lgamma_at<T: Scalar>(x: T) -> T {
    via_f64(x, libm::lgamma)
}

/// Beta function `Γ(a) Γ(b) / Γ(a + b)`
///
/// Evaluated through `ln |Γ|` with the signs tracked separately, so large
/// arguments do not overflow the intermediate gammas.
pub fn beta_at<T: Scalar>(a: T, b: T) -> T {
    let (a, b) = (
        a.to_f64().unwrap_or(f64::NAN),
        b.to_f64().unwrap_or(f64::NAN),
    );
    let (la, sa) = libm::lgamma_r(a);
    let (lb, sb) = libm::lgamma_r(b);
    let (lab, sab) = libm::lgamma_r(a + b);
    let sign = f64::from(sa * sb * sab);
    cast(sign * (la + lb - lab).exp())
}

/// Bessel function of the first kind `J_n(x)`
pub fn bessel_j_at<T: Scalar>(n: i32, x: T) -> T {
    cast(libm::jn(n, x.to_f64().unwrap_or(f64::NAN)))
}

/// Bessel function of the second kind `Y_n(x)`
///
/// `-inf` at zero and NaN for negative `x`.
pub fn bessel_y_at<T: Scalar>(n: i32, x: T) -> T {
    cast(libm::yn(n, x.to_f64().unwrap_or(f64::NAN)))
}

/// `erf(f(x))`
pub fn erf<T: Scalar>(f: &Func<T>) -> Func<T> {
    f.map(erf_at)
}

/// `erfc(f(x))`
pub fn erfc<T: Scalar>(f: &Func<T>) -> Func<T> {
    f.map(erfc_at)
}

/// `Γ(f(x))`
pub fn tgamma<T: Scalar>(f: &Func<T>) -> Func<T> {
    f.map(tgamma_at)
}

/// `ln |Γ(f(x))|`
pub fn lgamma<T: Scalar>(f: &Func<T>) -> Func<T> {
    f.map(lgamma_at)
}

/// `B(f(x), g(x))`
pub fn beta<T: Scalar>(f: &Func<T>, g: &Func<T>) -> Func<T> {
    f.zip_with(g, beta_at)
}

/// `J_n(f(x))`
pub fn bessel_j<T: Scalar>(n: i32, f: &Func<T>) -> Func<T> {
    f.map(move |v| bessel_j_at(n, v))
}

/// `Y_n(f(x))`
pub fn bessel_y<T: Scalar>(n: i32, f: &Func<T>) -> Func<T> {
    f.map(move |v| bessel_y_at(n, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-12;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_error_function() {
        assert_eq!(erf_at(0.0), 0.0);
        assert!(close(erf_at(1.0), 0.842_700_792_949_714_9));
        assert!(close(erf_at(-1.0), -0.842_700_792_949_714_9));
        assert!(close(erfc_at(1.0), 0.157_299_207_050_285_13));
        // erfc keeps precision where 1 - erf would cancel to zero
        assert!(erfc_at(10.0) > 0.0);
        assert!(erfc_at(10.0) < 1e-40);
    }

    #[test]
    fn test_gamma() {
        assert!(close(tgamma_at(5.0), 24.0));
        assert!(close(tgamma_at(1.0), 1.0));
        assert!(close(tgamma_at(0.5), PI.sqrt()));
        assert!(close(lgamma_at(10.0), 362_880.0_f64.ln()));
        // ln |Γ(-0.5)| = ln(2 sqrt(π))
        assert!(close(lgamma_at(-0.5), (2.0 * PI.sqrt()).ln()));
    }

    #[test]
    fn test_beta() {
        assert!(close(beta_at(2.0, 3.0), 1.0 / 12.0));
        assert!(close(beta_at(0.5, 0.5), PI));
        assert!(close(beta_at(1.0, 7.0), 1.0 / 7.0));
        // B(-0.5, 1) = Γ(-0.5) / Γ(0.5) = -2
        assert!(close(beta_at(-0.5, 1.0), -2.0));
        // Γ(200) alone overflows f64
        assert!(beta_at(200.0, 200.0) > 0.0);
    }

    #[test]
    fn test_bessel() {
        assert_eq!(bessel_j_at(0, 0.0), 1.0);
        assert_eq!(bessel_j_at(1, 0.0), 0.0);
        assert!((bessel_j_at::<f64>(0, 1.0) - 0.765_197_686_557_966_6).abs() < 1e-10);
        assert!((bessel_j_at::<f64>(2, 1.0) - 0.114_903_484_931_900_48).abs() < 1e-10);
        assert!(bessel_j_at::<f64>(0, 2.404_825_557_695_773).abs() < 1e-10);
        assert!((bessel_y_at::<f64>(0, 1.0) - 0.088_256_964_215_676_97).abs() < 1e-10);
        assert!((bessel_y_at::<f64>(1, 1.0) + 0.781_212_821_300_288_7).abs() < 1e-10);
        assert_eq!(bessel_y_at(0, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_f32_through_f64() {
        assert!((erf_at(1.0f32) - 0.842_700_8).abs() < 1e-6);
        assert_eq!(tgamma_at(4.0f32), 6.0);
    }

    #[test]
    fn test_lifted_forms() {
        let x = Func::<f64>::x();
        assert!(close(erf(&x).eval(1.0) + erfc(&x).eval(1.0), 1.0));
        assert!(close(tgamma(&(&x + 1.0)).eval(4.0), 24.0));
        assert!(close(lgamma(&x).eval(3.0), 2.0_f64.ln()));
        assert!(close(beta(&x, &Func::constant(1.0)).eval(4.0), 0.25));
        assert!(close(bessel_j(1, &x).eval(0.0), 0.0));
        assert!((bessel_y(0, &x).eval(1.0) - 0.088_256_964_215_676_97).abs() < 1e-10);
    }
}
