//! Golden test-vector generation.
//!
//! Each run draws `count` random operand triples, computes their exact
//! arithmetic results through the engine, and streams the values into ten
//! parallel hex-encoded text artifacts. Line `i` of every artifact
//! describes trial `i`. No seed is recorded: every run produces a fresh,
//! disposable vector set.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bnh_types::HarnessError;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::encode;
use crate::engine;
use crate::rng::RandomSource;

/// Operand widths and artifact filename tag for one vector suite.
#[derive(Debug, Clone)]
pub struct VectorProfile {
    /// Bit width of operand X (dividend, base).
    pub x_bits: usize,
    /// Bit width of operand Y (addend, divisor, exponent).
    pub y_bits: usize,
    /// Bit width of operand Z (modulus).
    pub z_bits: usize,
    /// Tag appended to each artifact name, distinguishing suites of
    /// different operand width classes.
    pub tag: String,
}

impl Default for VectorProfile {
    /// The 256/192/256-bit suite, tagged "8" (256 bits = 8 words).
    fn default() -> Self {
        Self {
            x_bits: 256,
            y_bits: 192,
            z_bits: 256,
            tag: "8".to_string(),
        }
    }
}

/// One trial: three operands and their seven derived results.
#[derive(Debug, Clone)]
pub struct VectorRecord {
    pub x: BigUint,
    pub y: BigUint,
    pub z: BigUint,
    pub add: BigUint,
    /// X - Y; signed, since Y may exceed X.
    pub sub: BigInt,
    pub mul: BigUint,
    pub sqr: BigUint,
    pub quo: BigUint,
    pub rem: BigUint,
    pub exp: BigUint,
}

impl VectorRecord {
    /// Draw operands and compute all derived results.
    ///
    /// A zero Y or Z is rejected and redrawn so division and modular
    /// exponentiation are always defined.
    pub fn draw(
        rng: &mut dyn RandomSource,
        profile: &VectorProfile,
    ) -> Result<Self, HarnessError> {
        let x = rng.random_uint(profile.x_bits)?;
        let y = draw_nonzero(rng, profile.y_bits)?;
        let z = draw_nonzero(rng, profile.z_bits)?;

        let (quo, rem) = engine::div_rem(&x, &y)?;
        let exp = engine::mod_exp(&x, &y, &z)?;

        Ok(Self {
            add: &x + &y,
            sub: engine::sub_signed(&x, &y),
            mul: &x * &y,
            sqr: &x * &x,
            quo,
            rem,
            exp,
            x,
            y,
            z,
        })
    }

    /// The ten hex-encoded lines of this record, in artifact order.
    pub fn hex_lines(&self) -> [String; 10] {
        [
            encode::encode_uint(&self.x),
            encode::encode_uint(&self.y),
            encode::encode_uint(&self.z),
            encode::encode_uint(&self.add),
            encode::encode(&self.sub),
            encode::encode_uint(&self.mul),
            encode::encode_uint(&self.sqr),
            encode::encode_uint(&self.quo),
            encode::encode_uint(&self.rem),
            encode::encode_uint(&self.exp),
        ]
    }
}

fn draw_nonzero(
    rng: &mut dyn RandomSource,
    bits: usize,
) -> Result<BigUint, HarnessError> {
    loop {
        let v = rng.random_uint(bits)?;
        if !v.is_zero() {
            return Ok(v);
        }
    }
}

/// Artifact file names for a suite, in the same order as
/// [`VectorRecord::hex_lines`].
pub fn artifact_names(profile: &VectorProfile) -> [String; 10] {
    [
        "operand_x",
        "operand_y",
        "operand_z",
        "addition",
        "subtraction",
        "multiplication",
        "squaring",
        "quotient",
        "remainder",
        "exponentiation",
    ]
    .map(|field| format!("{field}{}.txt", profile.tag))
}

/// Generate `count` records into ten parallel artifacts under `out_dir`.
///
/// The artifacts are created (or truncated) up front and written one line
/// per trial. On error the run aborts and partially written artifacts are
/// left in place; the buffered writers close on every exit path when they
/// drop, with an explicit flush on success.
pub fn generate(
    rng: &mut dyn RandomSource,
    profile: &VectorProfile,
    count: usize,
    out_dir: &Path,
) -> Result<(), HarnessError> {
    let mut writers: Vec<(PathBuf, BufWriter<File>)> = Vec::with_capacity(10);
    for name in artifact_names(profile) {
        let path = out_dir.join(name);
        let file = File::create(&path).map_err(|source| HarnessError::Io {
            path: path.clone(),
            source,
        })?;
        writers.push((path, BufWriter::new(file)));
    }

    for trial in 0..count {
        let record =
            VectorRecord::draw(rng, profile).map_err(|e| e.at_trial(trial))?;
        for (line, (path, writer)) in record.hex_lines().iter().zip(writers.iter_mut()) {
            writeln!(writer, "{line}")
                .map_err(|source| {
                    HarnessError::Io {
                        path: path.clone(),
                        source,
                    }
                    .at_trial(trial)
                })?;
        }
    }

    for (path, writer) in &mut writers {
        writer.flush().map_err(|source| HarnessError::Io {
            path: path.clone(),
            source,
        })?;
    }

    Ok(())
}
