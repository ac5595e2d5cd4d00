//! The transformation record bridging the worker and observer stages.

use presto_analysis::{analyze, Spectrum};
use presto_core::AudioClip;

use crate::{Error, Result};

/// Immutable metadata produced by the worker and required by the observer.
///
/// Carries exactly what the observer needs to attempt an inverse transform
/// (the speed factor) plus duration bookkeeping and two frequency snapshots.
/// The snapshots are diagnostic only: restoration is driven purely by
/// [`inverse_factor`](Self::inverse_factor) through the time-domain
/// stretcher, and never reads frequency-domain data.
///
/// All fields are fixed at construction; the record is dropped once
/// restoration completes and is never persisted across runs.
#[derive(Debug, Clone)]
pub struct TransformationRecord {
    speed_factor: f64,
    original_duration: f64,
    compressed_duration: f64,
    original_spectrum: Spectrum,
    compressed_spectrum: Spectrum,
}

impl TransformationRecord {
    /// Build a record from the forward factor and the pre/post-stretch clips.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFactor`] if `speed_factor` is non-positive or
    /// not finite.
    pub fn build(
        speed_factor: f64,
        original: &AudioClip,
        transformed: &AudioClip,
    ) -> Result<Self> {
        if !speed_factor.is_finite() || speed_factor <= 0.0 {
            return Err(Error::InvalidFactor(speed_factor));
        }

        Ok(Self {
            speed_factor,
            original_duration: original.duration(),
            compressed_duration: transformed.duration(),
            original_spectrum: analyze(original),
            compressed_spectrum: analyze(transformed),
        })
    }

    /// The forward factor the worker applied.
    #[inline]
    pub fn speed_factor(&self) -> f64 {
        self.speed_factor
    }

    /// The rate an observer must feed back into the stretcher to invert the
    /// transform. Single source of truth for inversion.
    #[inline]
    pub fn inverse_factor(&self) -> f64 {
        1.0 / self.speed_factor
    }

    /// Duration of the worker's input in seconds.
    #[inline]
    pub fn original_duration(&self) -> f64 {
        self.original_duration
    }

    /// Duration of the stretched clip in seconds.
    #[inline]
    pub fn compressed_duration(&self) -> f64 {
        self.compressed_duration
    }

    /// Frequency snapshot of the input clip (diagnostic only).
    pub fn original_spectrum(&self) -> &Spectrum {
        &self.original_spectrum
    }

    /// Frequency snapshot of the stretched clip (diagnostic only).
    pub fn compressed_spectrum(&self) -> &Spectrum {
        &self.compressed_spectrum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sine_clip(num_samples: usize, sample_rate: u32) -> AudioClip {
        let samples: Vec<f32> = (0..num_samples)
            .map(|i| {
                (2.0 * std::f32::consts::PI * 440.0 * i as f32 / sample_rate as f32).sin() * 0.5
            })
            .collect();
        AudioClip::new(samples, sample_rate).unwrap()
    }

    #[test]
    fn test_build_record() {
        let original = sine_clip(44100, 44100);
        let transformed = sine_clip(11025, 44100);

        let record = TransformationRecord::build(4.0, &original, &transformed).unwrap();
        assert_eq!(record.speed_factor(), 4.0);
        assert_abs_diff_eq!(record.original_duration(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(record.compressed_duration(), 0.25, epsilon = 1e-9);
        assert_abs_diff_eq!(record.inverse_factor(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_build_rejects_invalid_factor() {
        let clip = sine_clip(4096, 44100);
        for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                TransformationRecord::build(factor, &clip, &clip),
                Err(Error::InvalidFactor(_))
            ));
        }
    }

    #[test]
    fn test_record_captures_spectra() {
        let original = sine_clip(16384, 44100);
        let transformed = sine_clip(8192, 44100);

        let record = TransformationRecord::build(2.0, &original, &transformed).unwrap();
        assert_eq!(record.original_spectrum().analyzed_len(), 16384);
        assert_eq!(record.compressed_spectrum().analyzed_len(), 8192);
        // Pitch-preserving stretch: both snapshots peak near the same tone.
        let peak_a = record.original_spectrum().peak_frequency().unwrap();
        let peak_b = record.compressed_spectrum().peak_frequency().unwrap();
        assert!((peak_a - 440.0).abs() < 10.0);
        assert!((peak_b - 440.0).abs() < 10.0);
    }
}
