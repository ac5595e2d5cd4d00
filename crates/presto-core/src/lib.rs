//! # Presto Core
//!
//! Shared building blocks for the presto pipeline crates:
//!
//! - [`AudioClip`] - an owned mono sample buffer with a fixed sample rate
//! - [`forward_fft`] / [`inverse_fft`] - the FFT kernel used by both the
//!   time stretcher and the spectrum analyzer
//! - [`Error`] - construction errors for core types

pub mod clip;
pub mod error;
pub mod fft;

pub use clip::AudioClip;
pub use error::{Error, Result};
pub use fft::{forward_fft, inverse_fft, Complex32};
