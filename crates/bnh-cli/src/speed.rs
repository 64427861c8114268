//! Time repeated big-integer operations.

use bnh_core::bench;
use bnh_core::rng::OsRandom;

pub fn run(count: usize) -> Result<(), Box<dyn std::error::Error>> {
    // Each sample prints its own labeled line as it is measured
    bench::run(&mut OsRandom, count)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_single_iteration() {
        run(1).unwrap();
    }

    #[test]
    fn test_run_zero_iterations() {
        run(0).unwrap();
    }
}
