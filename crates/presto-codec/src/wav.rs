//! WAV reading and writing using hound.
//!
//! Reads 16/24/32-bit integer and 32-bit float WAV files into mono clips
//! (multi-channel input is downmixed by averaging); writes mono clips at the
//! requested bit depth.

use crate::error::{CodecError, Result};
use crate::options::{float_to_i16, float_to_i24, BitDepth};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

use presto_core::AudioClip;

/// Read a WAV file into a mono [`AudioClip`].
///
/// Integer samples are normalized to -1.0..1.0; multi-channel files are
/// downmixed by averaging each frame's channels.
pub fn read_wav_clip(path: impl AsRef<Path>) -> Result<AudioClip> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()?,
        (SampleFormat::Int, bits @ (16 | 24 | 32)) => {
            let scale = 1.0 / (1i64 << (bits - 1)) as f32;
            match bits {
                16 => reader
                    .samples::<i16>()
                    .map(|s| s.map(|v| v as f32 * scale))
                    .collect::<std::result::Result<_, _>>()?,
                _ => reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 * scale))
                    .collect::<std::result::Result<_, _>>()?,
            }
        }
        (format, bits) => {
            return Err(CodecError::UnsupportedFormat(format!(
                "WAV {:?} at {} bits per sample",
                format, bits
            )))
        }
    };

    let samples = downmix(&interleaved, spec.channels as usize);
    tracing::debug!(
        samples = samples.len(),
        sample_rate = spec.sample_rate,
        channels = spec.channels,
        "read WAV file"
    );
    Ok(AudioClip::new(samples, spec.sample_rate)?)
}

/// Write a mono [`AudioClip`] to a WAV file at the given bit depth.
pub fn write_wav_clip(path: impl AsRef<Path>, clip: &AudioClip, bit_depth: BitDepth) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: clip.sample_rate(),
        bits_per_sample: bit_depth.bits(),
        sample_format: match bit_depth {
            BitDepth::Float32 => SampleFormat::Float,
            _ => SampleFormat::Int,
        },
    };

    let mut writer = WavWriter::create(path, spec)?;

    match bit_depth {
        BitDepth::Int16 => {
            for &sample in clip.samples() {
                writer.write_sample(float_to_i16(sample))?;
            }
        }
        BitDepth::Int24 => {
            for &sample in clip.samples() {
                writer.write_sample(float_to_i24(sample))?;
            }
        }
        BitDepth::Float32 => {
            for &sample in clip.samples() {
                writer.write_sample(sample)?;
            }
        }
    }

    writer.finalize()?;
    Ok(())
}

/// Average interleaved channels down to mono.
fn downmix(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}
