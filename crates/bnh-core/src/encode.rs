//! Hex codec for test-vector values.
//!
//! One value per artifact line: lowercase digits, no prefix, no leading
//! zero padding (zero encodes as `"0"`), negatives carry a leading `-`.

use bnh_types::HarnessError;
use num_bigint::{BigInt, BigUint};
use num_traits::Num;

/// Encode a signed value as a hex line.
pub fn encode(value: &BigInt) -> String {
    format!("{value:x}")
}

/// Encode a non-negative value as a hex line.
pub fn encode_uint(value: &BigUint) -> String {
    format!("{value:x}")
}

/// Decode a hex line back to a signed value.
pub fn decode(text: &str) -> Result<BigInt, HarnessError> {
    BigInt::from_str_radix(text.trim(), 16).map_err(|_| HarnessError::InvalidHex {
        input: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode(&BigInt::zero()), "0");
        assert_eq!(encode_uint(&BigUint::zero()), "0");
    }

    #[test]
    fn test_encode_lowercase_unpadded() {
        assert_eq!(encode(&BigInt::from(0x0eff)), "eff");
        assert_eq!(encode_uint(&BigUint::from(0xdeadbeefu32)), "deadbeef");
    }

    #[test]
    fn test_encode_negative() {
        assert_eq!(encode(&BigInt::from(-255)), "-ff");
    }

    #[test]
    fn test_round_trip_full_width() {
        // 256-bit all-ones value
        let v = BigInt::from((BigUint::one() << 256u32) - BigUint::one());
        assert_eq!(decode(&encode(&v)).unwrap(), v);

        let neg = -v.clone();
        assert_eq!(decode(&encode(&neg)).unwrap(), neg);
    }

    #[test]
    fn test_round_trip_zero() {
        assert_eq!(decode("0").unwrap(), BigInt::zero());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("xyz").is_err());
        assert!(decode("").is_err());
        assert!(decode("12 34").is_err());
    }
}
