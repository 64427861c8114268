use std::path::PathBuf;

/// Harness operation errors.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    // Artifact I/O errors
    #[error("i/o failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Arithmetic errors
    #[error("big number: division by zero in {op}")]
    DivisionByZero { op: &'static str },
    #[error("big number: zero modulus in {op}")]
    ZeroModulus { op: &'static str },

    // Randomness errors
    #[error("random generation failed")]
    RandomFailure,

    // Encoding errors
    #[error("invalid hex value: {input:?}")]
    InvalidHex { input: String },

    // Context wrapper naming the trial that failed
    #[error("trial {trial}: {source}")]
    Trial {
        trial: usize,
        #[source]
        source: Box<HarnessError>,
    },
}

impl HarnessError {
    /// Attach the index of the failing trial.
    pub fn at_trial(self, trial: usize) -> Self {
        Self::Trial {
            trial,
            source: Box::new(self),
        }
    }
}
