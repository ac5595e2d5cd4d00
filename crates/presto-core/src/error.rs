//! Error types for presto-core.

use thiserror::Error;

/// Error type for core type construction.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid sample rate: {0}. Must be greater than zero")]
    InvalidSampleRate(u32),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
