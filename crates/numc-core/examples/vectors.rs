//! Vector arithmetic: sums, scaling, dot and cross products.
//!
//! Run with:
//! ```bash
//! cargo run -p numc-core --example vectors
//! ```

use anyhow::Result;
use numc_core::logging::{init_logging, LoggingConfig};
use numc_core::Vector;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default())?;

    let v1 = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    let v2 = Vector::from_vec(vec![4.0, 5.0, 6.0]);

    let v3 = v1.add(&v2)?;
    let v4 = &v1 * 2.0;
    let x5 = v1.dot(&v2)?;
    let v6 = v1.cross(&v2)?;

    println!("v1 = {}", v1); // (1, 2, 3)
    println!("v2 = {}", v2); // (4, 5, 6)
    println!("v1 + v2 = {}", v3); // (5, 7, 9)
    println!("v1 * 2 = {}", v4); // (2, 4, 6)
    println!("v1 . v2 = {}", x5); // 32
    println!("v1 x v2 = {}", v6); // (-3, 6, -3)
    println!("|v1| = {:.4}", v1.norm());

    Ok(())
}
