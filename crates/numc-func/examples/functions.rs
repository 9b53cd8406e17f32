//! Building functions from the identity and the catalog.
//!
//! Run with:
//! ```bash
//! cargo run -p numc-func --example functions
//! ```

use anyhow::Result;
use numc_core::logging::{init_logging, LoggingConfig};
use numc_func::{bessel_j, chebyshev, erf, norm_cdf, norm_pdf, sin, tgamma, Func, PI};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default())?;

    let x = Func::<f64>::x();

    let f = &x ^ &x; // f(x) = x^x
    let g = sin(&x); // g(x) = sin(x)

    println!("f(2) = {}", f.eval(2.0)); // 4
    println!("g(pi) = {:e}", g.eval(PI)); // ~1.22e-16
    println!("(f + g)(1) = {:.5}", (&f + &g).eval(1.0)); // 1.84147
    println!(
        "f(1) = {}, f(2) = {}, f(3) = {}",
        f.eval(1.0),
        f.eval(2.0),
        f.eval(3.0)
    );

    let t3 = chebyshev(3, &x);
    println!("T3(0.5) = {}", t3.eval(0.5)); // -1

    let phi = norm_pdf(&x, 0.0, 1.0);
    println!("phi(0) = {:.6}", phi.eval(0.0)); // 0.398942
    println!("Phi(1.96) = {:.4}", norm_cdf(&x, 0.0, 1.0).eval(1.96)); // 0.9750

    println!("erf(1) = {:.10}", erf(&x).eval(1.0)); // 0.8427007929
    println!("gamma(5) = {}", tgamma(&x).eval(5.0)); // 24
    println!("J0(1) = {:.6}", bessel_j(0, &x).eval(1.0)); // 0.765198

    // Parameters outside the domain are logged, not rejected
    let bad = norm_pdf(&x, 0.0, 0.0);
    println!("degenerate normal at 1 = {}", bad.eval(1.0));

    Ok(())
}
