#![forbid(unsafe_code)]
#![doc = "Shared error types for the bignum test harness."]

pub mod error;

pub use error::*;
