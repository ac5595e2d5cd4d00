//! FLAC encoding using flacenc.
//!
//! Encoding happens entirely in memory (no intermediate files); the encoded
//! stream is written to disk with a single write. 16-bit and 24-bit only:
//! FLAC has no 32-bit float representation.

use crate::error::{CodecError, Result};
use crate::options::{float_to_i16, float_to_i24, BitDepth};
use flacenc::bitsink::ByteSink;
use flacenc::component::BitRepr;
use flacenc::config::Encoder as EncoderConfig;
use flacenc::encode_with_fixed_block_size;
use flacenc::error::Verify;
use flacenc::source::MemSource;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use presto_core::AudioClip;

/// FLAC encoder configuration
#[derive(Debug, Clone)]
pub struct FlacConfig {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bit depth (16 or 24, 32-bit float not supported)
    pub bit_depth: BitDepth,
    /// Block size (samples per block, affects compression efficiency)
    pub block_size: u32,
}

impl Default for FlacConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            bit_depth: BitDepth::Int16,
            block_size: 4096,
        }
    }
}

impl FlacConfig {
    /// Create a mono FLAC config.
    pub fn mono(sample_rate: u32, bit_depth: BitDepth) -> Self {
        Self {
            sample_rate,
            bit_depth,
            ..Default::default()
        }
    }

    /// Set block size
    pub fn with_block_size(mut self, size: u32) -> Self {
        self.block_size = size;
        self
    }
}

/// Encode a mono clip to a FLAC file.
pub fn encode_flac_clip(path: impl AsRef<Path>, clip: &AudioClip, config: &FlacConfig) -> Result<()> {
    let flac_data = encode_flac_memory(clip.samples(), config)?;

    let mut file = File::create(path.as_ref())?;
    file.write_all(&flac_data)?;

    tracing::debug!(
        samples = clip.len(),
        bytes = flac_data.len(),
        path = %path.as_ref().display(),
        "encoded FLAC file"
    );
    Ok(())
}

/// Encode mono audio to FLAC in memory
pub fn encode_flac_memory(samples: &[f32], config: &FlacConfig) -> Result<Vec<u8>> {
    // FLAC doesn't support 32-bit float
    if config.bit_depth == BitDepth::Float32 {
        return Err(CodecError::UnsupportedFormat(
            "FLAC does not support 32-bit float, use 16-bit or 24-bit".into(),
        ));
    }

    let bits_per_sample = config.bit_depth.bits() as usize;

    // Convert float samples to integers
    let int_samples: Vec<i32> = samples
        .iter()
        .map(|&s| float_to_i32(s, config.bit_depth))
        .collect();

    // Create encoder config
    let encoder_config = EncoderConfig::default()
        .into_verified()
        .map_err(|e| CodecError::Encoding(format!("Invalid FLAC config: {:?}", e)))?;

    // Create source
    let source = MemSource::from_samples(
        &int_samples,
        1,
        bits_per_sample,
        config.sample_rate as usize,
    );

    // Encode
    let stream = encode_with_fixed_block_size(&encoder_config, source, config.block_size as usize)
        .map_err(|e| CodecError::Encoding(format!("FLAC encoding failed: {:?}", e)))?;

    // Write to ByteSink
    let mut sink = ByteSink::new();
    stream
        .write(&mut sink)
        .map_err(|e| CodecError::Encoding(format!("Failed to write FLAC stream: {:?}", e)))?;

    Ok(sink.into_inner())
}

/// Convert float sample to i32 with appropriate scaling
#[inline]
fn float_to_i32(sample: f32, bit_depth: BitDepth) -> i32 {
    match bit_depth {
        BitDepth::Int16 => float_to_i16(sample) as i32,
        BitDepth::Int24 => float_to_i24(sample),
        BitDepth::Float32 => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flac_config_default() {
        let config = FlacConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.bit_depth, BitDepth::Int16);
        assert_eq!(config.block_size, 4096);
    }

    #[test]
    fn test_flac_config_mono() {
        let config = FlacConfig::mono(48000, BitDepth::Int24).with_block_size(2048);
        assert_eq!(config.sample_rate, 48000);
        assert_eq!(config.bit_depth, BitDepth::Int24);
        assert_eq!(config.block_size, 2048);
    }

    #[test]
    fn test_flac_rejects_32bit_float() {
        let samples = vec![0.0; 100];
        let config = FlacConfig {
            bit_depth: BitDepth::Float32,
            ..Default::default()
        };

        let result = encode_flac_memory(&samples, &config);
        assert!(matches!(result, Err(CodecError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_encode_flac_memory_has_magic() {
        let samples: Vec<f32> = (0..8192)
            .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 44100.0).sin() * 0.5)
            .collect();
        let config = FlacConfig::default();

        let bytes = encode_flac_memory(&samples, &config).unwrap();
        assert_eq!(&bytes[0..4], b"fLaC");
        assert!(bytes.len() > 4);
    }

    #[test]
    fn test_tonal_signal_compresses() {
        // A steady sine should compress well below raw 16-bit size.
        let samples: Vec<f32> = (0..44100)
            .map(|i| (2.0 * std::f32::consts::PI * 220.0 * i as f32 / 44100.0).sin() * 0.5)
            .collect();
        let config = FlacConfig::default();

        let bytes = encode_flac_memory(&samples, &config).unwrap();
        assert!(
            bytes.len() < samples.len() * 2,
            "FLAC output {} bytes not smaller than raw {}",
            bytes.len(),
            samples.len() * 2
        );
    }
}
