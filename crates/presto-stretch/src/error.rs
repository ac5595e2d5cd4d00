//! Error types for presto-stretch.

use thiserror::Error;

/// Errors that can occur during time stretching.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StretchError {
    /// Rate is non-positive or not finite.
    #[error("Invalid stretch rate: {0}. Must be finite and greater than zero")]
    InvalidRate(f64),

    /// Zero-length input cannot be stretched.
    #[error("Input is empty")]
    EmptyInput,

    /// Input contains NaN or infinite samples.
    #[error("Input contains non-finite samples")]
    NonFiniteInput,
}
