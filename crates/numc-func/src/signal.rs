//! Signal-processing primitives
//!
//! Discontinuous functions use the half-maximum convention at their jumps:
//! `heaviside(0) = 0.5` and `rect(±0.5) = 0.5`. Periodic waves have period `2π`.

use crate::func::{cast, Func, Scalar};
use std::f64::consts::TAU;

/// Unit step: `0` below zero, `1` above, `0.5` at zero
pub fn heaviside<T: Scalar>(f: &Func<T>) -> Func<T> {
    f.map(|v| {
        if v > T::zero() {
            T::one()
        } else if v < T::zero() {
            T::zero()
        } else {
            cast(0.5)
        }
    })
}

/// Discrete impulse: `1` where `f(x)` is exactly zero, else `0`
pub fn dirac<T: Scalar>(f: &Func<T>) -> Func<T> {
    f.map(|v| if v == T::zero() { T::one() } else { T::zero() })
}

/// `max(f(x), 0)`
pub fn ramp<T: Scalar>(f: &Func<T>) -> Func<T> {
    f.map(|v| if v > T::zero() { v } else { T::zero() })
}

/// Unnormalized sinc, `sin(v) / v`, with the removable singularity filled in
///
/// Returns exactly `1` for `|v| < 1e-9`.
pub fn sinc<T: Scalar>(f: &Func<T>) -> Func<T> {
    let eps: T = cast(1e-9);
    f.map(move |v| if v.abs() < eps { T::one() } else { v.sin() / v })
}

/// Rectangular pulse of unit width centred on zero
pub fn rect<T: Scalar>(f: &Func<T>) -> Func<T> {
    let half: T = cast(0.5);
    f.map(move |v| {
        let a = v.abs();
        if a < half {
            T::one()
        } else if a == half {
            half
        } else {
            T::zero()
        }
    })
}

/// Triangular pulse `max(1 - |v|, 0)`
pub fn tri<T: Scalar>(f: &Func<T>) -> Func<T> {
    f.map(|v| {
        let a = v.abs();
        if a < T::one() {
            T::one() - a
        } else {
            T::zero()
        }
    })
}

/// Sawtooth wave in `[-1, 1)`, rising through zero at multiples of `2π`
pub fn sawtooth<T: Scalar>(f: &Func<T>) -> Func<T> {
    let (period, two, half): (T, T, T) = (cast(TAU), cast(2.0), cast(0.5));
    f.map(move |v| {
        let phase = v / period;
        two * (phase - (phase + half).floor())
    })
}

/// Square wave: `1` for the first `duty` fraction of each period, `-1` after
///
/// `duty` is clamped to `[0, 1]`.
pub fn square<T: Scalar>(f: &Func<T>, duty: T) -> Func<T> {
    let duty = duty.max(T::zero()).min(T::one());
    let period: T = cast(TAU);
    f.map(move |v| {
        let phase = v / period;
        if phase - phase.floor() < duty {
            T::one()
        } else {
            -T::one()
        }
    })
}
