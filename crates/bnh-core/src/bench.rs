//! Wall-clock timing of the dominant engine operations.
//!
//! Single-shot measurement by design: one fixed random operand set, one
//! elapsed figure per operation, no warm-up and no statistical
//! aggregation.

use std::hint::black_box;
use std::time::Instant;

use bnh_types::HarnessError;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::engine;
use crate::rng::RandomSource;

/// One timed measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkSample {
    pub operation: &'static str,
    /// Elapsed wall-clock seconds, rounded to 6 decimal places.
    pub seconds: f64,
}

const OPERAND_BITS: usize = 2048;
const DIVISOR_BITS: usize = 1024;

/// Time the five operations on one fixed random operand set, printing each
/// sample as a labeled line as it is measured.
///
/// The looped operations run `count` iterations each. Modular
/// exponentiation is sampled with a single invocation: at these operand
/// sizes it dominates the others by orders of magnitude.
pub fn run(
    rng: &mut dyn RandomSource,
    count: usize,
) -> Result<Vec<BenchmarkSample>, HarnessError> {
    let x = rng.random_uint(OPERAND_BITS)?;
    let y = rng.random_uint(OPERAND_BITS)?;
    let z = rng.random_uint(OPERAND_BITS)?;
    let y_half = rng.random_uint(DIVISOR_BITS)?;

    // Fail fast rather than panic mid-measurement
    if y_half.is_zero() {
        return Err(HarnessError::DivisionByZero {
            op: "benchmark divisor",
        });
    }
    if z.is_zero() {
        return Err(HarnessError::ZeroModulus {
            op: "benchmark modulus",
        });
    }

    let mut samples = Vec::with_capacity(5);

    samples.push(timed_loop("multiplication", count, || {
        black_box(&x) * black_box(&y)
    }));
    samples.push(timed_loop("squaring", count, || {
        black_box(&x) * black_box(&x)
    }));
    samples.push(timed_loop("division", count, || {
        black_box(&x) / black_box(&y_half)
    }));
    samples.push(timed_loop("reduction", count, || {
        black_box(&x) % black_box(&y_half)
    }));

    let start = Instant::now();
    let result = engine::mod_exp(&x, &y, &z)?;
    let sample = emit("exponentiation", start.elapsed().as_secs_f64());
    black_box(result);
    samples.push(sample);

    Ok(samples)
}

fn timed_loop(
    operation: &'static str,
    count: usize,
    mut op: impl FnMut() -> BigUint,
) -> BenchmarkSample {
    let start = Instant::now();
    for _ in 0..count {
        black_box(op());
    }
    emit(operation, start.elapsed().as_secs_f64())
}

fn emit(operation: &'static str, elapsed: f64) -> BenchmarkSample {
    let seconds = round6(elapsed);
    println!("time {operation:<14} : {seconds:.6}");
    BenchmarkSample { operation, seconds }
}

fn round6(seconds: f64) -> f64 {
    (seconds * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct StubRandom {
        values: VecDeque<u64>,
    }

    impl RandomSource for StubRandom {
        fn random_uint(&mut self, _bits: usize) -> Result<BigUint, HarnessError> {
            self.values
                .pop_front()
                .map(BigUint::from)
                .ok_or(HarnessError::RandomFailure)
        }
    }

    fn stub(values: &[u64]) -> StubRandom {
        StubRandom {
            values: values.iter().copied().collect(),
        }
    }

    #[test]
    fn test_zero_count_still_produces_five_samples() {
        // x, y, z, y_half
        let mut rng = stub(&[5, 3, 7, 2]);
        let samples = run(&mut rng, 0).unwrap();
        assert_eq!(samples.len(), 5);
        let names: Vec<_> = samples.iter().map(|s| s.operation).collect();
        assert_eq!(
            names,
            [
                "multiplication",
                "squaring",
                "division",
                "reduction",
                "exponentiation"
            ]
        );
        for s in &samples {
            assert!(s.seconds >= 0.0);
        }
    }

    #[test]
    fn test_zero_divisor_is_fatal() {
        let mut rng = stub(&[5, 3, 7, 0]);
        assert!(matches!(
            run(&mut rng, 1),
            Err(HarnessError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_zero_modulus_is_fatal() {
        let mut rng = stub(&[5, 3, 0, 2]);
        assert!(matches!(
            run(&mut rng, 1),
            Err(HarnessError::ZeroModulus { .. })
        ));
    }

    #[test]
    fn test_round6() {
        assert_eq!(round6(0.123_456_789), 0.123_457);
        assert_eq!(round6(0.0), 0.0);
    }
}
