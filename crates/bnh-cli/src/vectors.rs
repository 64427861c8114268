//! Generate golden test vectors.

use std::path::Path;

use bnh_core::rng::OsRandom;
use bnh_core::vectors::{generate, VectorProfile};

pub fn run(
    count: usize,
    output_dir: &str,
    x_bits: usize,
    y_bits: usize,
    z_bits: usize,
    tag: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if count == 0 {
        return Err("count must be at least 1".into());
    }
    if x_bits == 0 || y_bits == 0 || z_bits == 0 {
        return Err("operand widths must be at least 1 bit".into());
    }

    let profile = VectorProfile {
        x_bits,
        y_bits,
        z_bits,
        tag: tag.to_string(),
    };

    println!("generating test vectors...");
    generate(&mut OsRandom, &profile, count, Path::new(output_dir))?;
    println!("wrote {count} records to {output_dir}");

    Ok(())
}
