//! Centralized error type for the presto umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate
//! boundaries, plus the pipeline-level failures that belong to no subsystem.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The worker's input file does not exist or is not a file.
    #[error("Input not found: {0}")]
    InputNotFound(PathBuf),

    /// Speed factor must be finite and greater than zero.
    #[error("Invalid speed factor: {0}. Must be finite and greater than zero")]
    InvalidFactor(f64),

    /// Report columns differ in length.
    #[error("Report columns differ in length: {labels} labels, {durations} durations, {sizes} sizes")]
    ShapeMismatch {
        labels: usize,
        durations: usize,
        sizes: usize,
    },

    /// Pipeline configuration rejected at validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Core(#[from] presto_core::Error),

    #[error("Stretch: {0}")]
    Stretch(#[from] presto_stretch::StretchError),

    #[error("Codec: {0}")]
    Codec(#[from] presto_codec::CodecError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
