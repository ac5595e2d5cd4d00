//! Worker pipeline: speed up, FLAC-encode, capture the transformation record.

use std::path::Path;

use presto_codec::{encode_flac_clip, file_size_megabytes, read_wav_clip, FlacConfig};
use presto_stretch::{stretch_clip, StretchParams};

use crate::config::PipelineConfig;
use crate::record::TransformationRecord;
use crate::report::SizeReport;
use crate::{Error, Result};

/// Run the worker stage: load `input`, stretch it by `speed_factor`, encode
/// the result losslessly to `output`, and return the transformation record
/// the observer needs.
///
/// The speed factor and input path are validated before any file I/O. On
/// success the output file exists, decodes through the codec adapter, and its
/// duration is within the stretcher's hop granularity of
/// `original_duration / speed_factor`. No intermediate files are created; a
/// failure leaves no transient state behind.
///
/// # Errors
///
/// [`Error::InvalidFactor`], [`Error::InputNotFound`], stretch failures for
/// unprocessable audio, codec failures for unwritable output. All propagate
/// unchanged; nothing is retried.
pub fn run_worker(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    speed_factor: f64,
    config: &PipelineConfig,
) -> Result<TransformationRecord> {
    let input = input.as_ref();
    let output = output.as_ref();

    if !speed_factor.is_finite() || speed_factor <= 0.0 {
        return Err(Error::InvalidFactor(speed_factor));
    }
    config.validate()?;
    if !input.is_file() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }

    tracing::info!(input = %input.display(), speed_factor, "worker: loading input");
    let original = read_wav_clip(input)?;

    let params = StretchParams::new(speed_factor).with_fft_size(config.fft_size);
    let transformed = stretch_clip(&original, &params)?;

    let flac_config = FlacConfig::mono(transformed.sample_rate(), config.bit_depth)
        .with_block_size(config.flac_block_size);
    encode_flac_clip(output, &transformed, &flac_config)?;

    let record = TransformationRecord::build(speed_factor, &original, &transformed)?;

    if let Some(peak) = record.original_spectrum().peak_frequency() {
        tracing::debug!(peak_hz = peak, "dominant frequency of input");
    }

    let expected = record.original_duration() / speed_factor;
    if expected > 0.0
        && ((record.compressed_duration() - expected) / expected).abs() > config.duration_tolerance
    {
        tracing::warn!(
            compressed = record.compressed_duration(),
            expected,
            "compressed duration outside tolerance"
        );
    }

    let report = SizeReport::from_columns(
        &["Original File", "Compressed (FLAC) File"],
        &[record.original_duration(), record.compressed_duration()],
        &[file_size_megabytes(input)?, file_size_megabytes(output)?],
    )?;
    println!("{report}");

    tracing::info!(
        output = %output.display(),
        compressed_duration = record.compressed_duration(),
        "worker: done"
    );
    Ok(record)
}
