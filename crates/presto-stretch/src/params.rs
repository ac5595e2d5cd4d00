//! Stretch parameters and FFT size presets.

use crate::error::StretchError;

/// FFT size presets for the quality/granularity trade-off.
///
/// Larger FFT sizes give better frequency resolution but coarser time
/// placement. Medium is the right default for music; Small suits short
/// percussive material, Large and XLarge suit extreme rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FftSize {
    /// 1024-point FFT
    Small = 1024,

    /// 2048-point FFT - Default
    #[default]
    Medium = 2048,

    /// 4096-point FFT
    Large = 4096,

    /// 8192-point FFT
    XLarge = 8192,
}

impl FftSize {
    /// Get the FFT size as usize
    pub fn size(&self) -> usize {
        *self as usize
    }

    /// Get the analysis hop size (FFT size / 4 = 75% overlap)
    pub fn hop_size(&self) -> usize {
        self.size() / 4
    }
}

/// Time-stretch parameters.
///
/// `rate` follows the speed convention: `rate > 1.0` shortens the output
/// (faster), `rate < 1.0` lengthens it (slower), `rate == 1.0` is a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StretchParams {
    rate: f64,
    fft_size: FftSize,
}

impl StretchParams {
    /// Create parameters for the given rate with the default FFT size.
    pub fn new(rate: f64) -> Self {
        Self {
            rate,
            fft_size: FftSize::default(),
        }
    }

    pub fn with_fft_size(mut self, fft_size: FftSize) -> Self {
        self.fft_size = fft_size;
        self
    }

    /// The stretch rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// The FFT size preset.
    #[inline]
    pub fn fft_size(&self) -> FftSize {
        self.fft_size
    }

    /// Check that the rate is usable.
    ///
    /// # Errors
    ///
    /// Returns [`StretchError::InvalidRate`] if the rate is non-positive,
    /// NaN, or infinite.
    pub fn validate(&self) -> Result<(), StretchError> {
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(StretchError::InvalidRate(self.rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fft_size() {
        assert_eq!(FftSize::Small.size(), 1024);
        assert_eq!(FftSize::Medium.size(), 2048);
        assert_eq!(FftSize::Large.size(), 4096);
        assert_eq!(FftSize::XLarge.size(), 8192);

        assert_eq!(FftSize::Medium.hop_size(), 512);
    }

    #[test]
    fn test_params_builder() {
        let params = StretchParams::new(2.0).with_fft_size(FftSize::Large);
        assert_eq!(params.rate(), 2.0);
        assert_eq!(params.fft_size(), FftSize::Large);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_params_validate_rejects_bad_rates() {
        assert!(StretchParams::new(0.0).validate().is_err());
        assert!(StretchParams::new(-2.0).validate().is_err());
        assert!(StretchParams::new(f64::NAN).validate().is_err());
        assert!(StretchParams::new(f64::INFINITY).validate().is_err());
        assert!(StretchParams::new(0.25).validate().is_ok());
        assert!(StretchParams::new(4.0).validate().is_ok());
    }
}
