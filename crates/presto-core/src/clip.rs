//! Mono sample buffer with a fixed sample rate.

use crate::error::{Error, Result};

/// An owned mono audio buffer.
///
/// The sample rate is fixed at construction and never changes for the
/// lifetime of the clip. Samples are normalized f32 (nominally -1.0 to 1.0,
/// not enforced). A clip is exclusively owned by whichever pipeline stage
/// currently holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioClip {
    /// Create a clip from samples and a sample rate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSampleRate`] if `sample_rate` is zero.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(Error::InvalidSampleRate(sample_rate));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// The samples, immutably.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz.
    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the clip holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_clip_basics() {
        let clip = AudioClip::new(vec![0.0, 0.5, -0.5], 44100).unwrap();
        assert_eq!(clip.len(), 3);
        assert!(!clip.is_empty());
        assert_eq!(clip.sample_rate(), 44100);
        assert_eq!(clip.samples(), &[0.0, 0.5, -0.5]);
    }

    #[test]
    fn test_clip_duration() {
        let clip = AudioClip::new(vec![0.0; 44100], 44100).unwrap();
        assert_abs_diff_eq!(clip.duration(), 1.0, epsilon = 1e-12);

        let clip = AudioClip::new(vec![0.0; 22050], 44100).unwrap();
        assert_abs_diff_eq!(clip.duration(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_clip_empty() {
        let clip = AudioClip::new(vec![], 48000).unwrap();
        assert!(clip.is_empty());
        assert_eq!(clip.duration(), 0.0);
    }

    #[test]
    fn test_clip_rejects_zero_rate() {
        assert!(matches!(
            AudioClip::new(vec![0.0], 0),
            Err(Error::InvalidSampleRate(0))
        ));
    }
}
