//! Tensor walkthrough: construction, indexing, arithmetic and inversion.
//!
//! Run with:
//! ```bash
//! cargo run -p numc-core --example tensors
//! RUST_LOG=debug cargo run -p numc-core --features tracing --example tensors
//! ```

use anyhow::Result;
use numc_core::logging::{init_logging, LoggingConfig};
use numc_core::Tensor;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default())?;

    let a = Tensor::<f64>::from_vec(vec![4.0, 7.0, 2.0, 6.0], &[2, 2])?;
    let b = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2])?;
    let mut z = Tensor::<f64>::zeros(&[2, 3]);
    let i = Tensor::<f64>::eye(2);

    z[&[0, 1]] = 5.0;
    z.set(&[1, 2], 9.0)?;

    println!("A:\n{}\n", a);
    println!("B:\n{}\n", b);
    println!("Z:\n{}\n", z);
    println!("I:\n{}\n", i);

    println!("A + B =\n{}\n", a.add(&b)?);
    println!("A - B =\n{}\n", a.sub(&b)?);
    println!("2A =\n{}\n", 2.0 * &a);

    println!("A * B =\n{}\n", a.matmul(&b)?);
    println!("Hadamard product =\n{}\n", a.hadamard(&b)?);

    let inv = a.inverse()?;
    println!("Inverse (A^-1) =\n{}\n", inv);
    println!("Check: A * A^-1 (should be the identity):\n{}\n", a.matmul(&inv)?);

    println!("Z rank: {}D", z.dimensions());
    println!("Z shape: ({}, {})", z.shape()[0], z.shape()[1]);
    println!("Z total elements: {}", z.total_size());

    // Failures come back as values
    let singular = Tensor::from_vec(vec![1.0, 2.0, 2.0, 4.0], &[2, 2])?;
    if let Err(e) = singular.inverse() {
        println!("\nExpected failure: {}", e);
    }

    Ok(())
}
