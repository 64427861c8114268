//! Random operand generation using OS randomness.

use bnh_types::HarnessError;
use num_bigint::BigUint;
use num_traits::Zero;

/// Source of uniformly distributed random integers.
///
/// Both harness components take this as an injected capability, so tests
/// can substitute a scripted source for deterministic operands.
pub trait RandomSource {
    /// Draw a value uniformly from `[0, 2^bits)`.
    fn random_uint(&mut self, bits: usize) -> Result<BigUint, HarnessError>;
}

/// Production source backed by the operating system RNG.
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn random_uint(&mut self, bits: usize) -> Result<BigUint, HarnessError> {
        if bits == 0 {
            return Ok(BigUint::zero());
        }

        let num_bytes = bits.div_ceil(8);
        let mut buf = vec![0u8; num_bytes];
        getrandom::getrandom(&mut buf).map_err(|_| HarnessError::RandomFailure)?;

        // Mask excess bits in the most significant byte
        let excess = num_bytes * 8 - bits;
        if excess > 0 {
            buf[0] &= 0xFF >> excess;
        }

        Ok(BigUint::from_bytes_be(&buf))
    }
}
