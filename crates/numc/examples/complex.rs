//! Complex arithmetic through the re-exported `num_complex::Complex`.
//!
//! Run with:
//! ```bash
//! cargo run -p numc --example complex
//! ```

use anyhow::Result;
use numc::core::logging::{init_logging, LoggingConfig};
use numc::prelude::*;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default())?;

    let i = Complex::<f64>::i();

    let z1 = 3.0 + 4.0 * i;
    let z2 = 1.0 + 2.0 * i;

    let z3 = z1 + z2; // addition
    let z4 = z3.conj(); // conjugate
    let z5 = z1.powc(z2); // exponentiation
    let z6 = (PI * i).exp(); // Euler's formula

    println!("z1 = {}", z1); // 3+4i
    println!("z2 = {}", z2); // 1+2i
    println!("z1 + z2 = {}", z3); // 4+6i
    println!("conj(z3) = {}", z4); // 4-6i
    println!("z1 ^ z2 = {:.6}", z5); // -0.419813-0.660452i
    println!("e^(i pi) = {:.6}", z6); // -1+0i
    println!("|z1| = {}, arg(z1) = {:.6}", z1.norm(), z1.arg());
    println!("round(z5, 3) = {}", z5.round(3)); // -0.42-0.66i

    Ok(())
}
