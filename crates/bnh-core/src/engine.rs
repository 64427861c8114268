//! Checked wrappers over the arbitrary-precision engine.
//!
//! The engine itself (`num-bigint`) is an external collaborator and is
//! assumed correct; these wrappers only turn its undefined inputs (zero
//! divisor, zero modulus) into typed errors instead of panics.

use bnh_types::HarnessError;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;

/// Floor division with remainder: returns (quotient, remainder).
pub fn div_rem(x: &BigUint, y: &BigUint) -> Result<(BigUint, BigUint), HarnessError> {
    if y.is_zero() {
        return Err(HarnessError::DivisionByZero { op: "div_rem" });
    }
    Ok(x.div_rem(y))
}

/// Modular exponentiation: x^y mod z.
///
/// A modulus of zero is an error; a modulus of one is defined and
/// yields zero.
pub fn mod_exp(x: &BigUint, y: &BigUint, z: &BigUint) -> Result<BigUint, HarnessError> {
    if z.is_zero() {
        return Err(HarnessError::ZeroModulus { op: "mod_exp" });
    }
    Ok(x.modpow(y, z))
}

/// Signed subtraction: x - y, which may be negative.
pub fn sub_signed(x: &BigUint, y: &BigUint) -> BigInt {
    BigInt::from(x.clone()) - BigInt::from(y.clone())
}
