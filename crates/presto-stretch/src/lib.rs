//! # Presto Stretch
//!
//! Offline time stretching using a phase vocoder.
//!
//! `presto-stretch` changes the duration of audio without altering its pitch,
//! using STFT analysis/synthesis with phase accumulation. Rates above 1.0
//! shorten the signal (speed it up); rates below 1.0 lengthen it.
//!
//! # Quick Start
//!
//! ```
//! use presto_stretch::{stretch, StretchParams};
//!
//! // 1 second of 440 Hz sine at 44.1 kHz
//! let input: Vec<f32> = (0..44100)
//!     .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 44100.0).sin())
//!     .collect();
//!
//! // Speed up 2x: output is half as long
//! let params = StretchParams::new(2.0);
//! let output = stretch(&input, &params).unwrap();
//! assert_eq!(output.len(), 22050);
//! ```

pub mod error;
pub mod params;
pub mod vocoder;

pub use error::StretchError;
pub use params::{FftSize, StretchParams};
pub use vocoder::PhaseVocoder;

use presto_core::AudioClip;

/// Validates that input is non-empty and contains only finite samples.
#[inline]
fn validate_input(input: &[f32]) -> Result<(), StretchError> {
    if input.is_empty() {
        return Err(StretchError::EmptyInput);
    }
    if input.iter().any(|s| !s.is_finite()) {
        return Err(StretchError::NonFiniteInput);
    }
    Ok(())
}

/// Stretches audio samples by the rate in `params`.
///
/// This is the main entry point for one-shot (non-streaming) time stretching.
/// The output holds exactly `round(input.len() / rate)` samples, so the
/// duration contract `duration(out) ~= duration(in) / rate` holds to within
/// one sample; spectral content is placed with analysis-hop granularity.
///
/// # Errors
///
/// Returns [`StretchError::InvalidRate`] if the rate is non-positive or not
/// finite, [`StretchError::EmptyInput`] for zero-length input, and
/// [`StretchError::NonFiniteInput`] if any sample is NaN or infinite.
pub fn stretch(input: &[f32], params: &StretchParams) -> Result<Vec<f32>, StretchError> {
    params.validate()?;
    validate_input(input)?;

    let mut vocoder = PhaseVocoder::new(params.fft_size());
    Ok(vocoder.stretch(input, params.rate()))
}

/// Stretches an [`AudioClip`], preserving its sample rate.
///
/// # Errors
///
/// Same failure conditions as [`stretch`].
pub fn stretch_clip(clip: &AudioClip, params: &StretchParams) -> Result<AudioClip, StretchError> {
    let output = stretch(clip.samples(), params)?;
    tracing::debug!(
        input_samples = clip.len(),
        output_samples = output.len(),
        rate = params.rate(),
        "time-scale transform complete"
    );
    // Sample rate was validated when the input clip was built.
    Ok(AudioClip::new(output, clip.sample_rate()).expect("input clip carries a valid sample rate"))
}
