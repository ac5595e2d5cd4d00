//! Pipeline configuration.

use presto_codec::BitDepth;
use presto_stretch::FftSize;

use crate::{Error, Result};

/// Configuration shared by the worker and observer pipelines.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Bit depth for encoded artifacts (FLAC supports 16/24-bit only).
    pub bit_depth: BitDepth,
    /// FLAC block size in samples.
    pub flac_block_size: u32,
    /// FFT size preset for the time stretcher.
    pub fft_size: FftSize,
    /// Relative tolerance for duration checks (0.02 = 2%).
    pub duration_tolerance: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            bit_depth: BitDepth::Int16,
            flac_block_size: 4096,
            fft_size: FftSize::Medium,
            duration_tolerance: 0.02,
        }
    }
}

impl PipelineConfig {
    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    pub fn with_fft_size(mut self, fft_size: FftSize) -> Self {
        self.fft_size = fft_size;
        self
    }

    pub fn with_duration_tolerance(mut self, tolerance: f64) -> Self {
        self.duration_tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.duration_tolerance) || self.duration_tolerance == 0.0 {
            return Err(Error::InvalidConfig(format!(
                "duration_tolerance {} out of range (must be in (0, 1))",
                self.duration_tolerance
            )));
        }
        if self.flac_block_size == 0 {
            return Err(Error::InvalidConfig("flac_block_size must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.bit_depth, BitDepth::Int16);
        assert_eq!(config.fft_size, FftSize::Medium);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_tolerance() {
        assert!(PipelineConfig::default()
            .with_duration_tolerance(0.0)
            .validate()
            .is_err());
        assert!(PipelineConfig::default()
            .with_duration_tolerance(1.5)
            .validate()
            .is_err());
        assert!(PipelineConfig::default()
            .with_duration_tolerance(-0.1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_builders() {
        let config = PipelineConfig::default()
            .with_bit_depth(BitDepth::Int24)
            .with_fft_size(FftSize::Large)
            .with_duration_tolerance(0.05);
        assert_eq!(config.bit_depth, BitDepth::Int24);
        assert_eq!(config.fft_size, FftSize::Large);
        assert_eq!(config.duration_tolerance, 0.05);
        assert!(config.validate().is_ok());
    }
}
