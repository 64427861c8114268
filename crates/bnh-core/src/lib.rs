#![forbid(unsafe_code)]
#![doc = "Correctness and performance harness for big-integer arithmetic."]

pub mod bench;
pub mod encode;
pub mod engine;
pub mod rng;
pub mod vectors;

pub use bench::BenchmarkSample;
pub use rng::{OsRandom, RandomSource};
pub use vectors::{VectorProfile, VectorRecord};
