//! Observer pipeline: decode, inverse-stretch, write the restored audio.

use std::path::Path;

use presto_codec::{decode_clip, file_size_megabytes, write_wav_clip};
use presto_core::AudioClip;
use presto_stretch::{stretch_clip, StretchParams};

use crate::config::PipelineConfig;
use crate::record::TransformationRecord;
use crate::report::SizeReport;
use crate::{Error, Result};

/// Run the observer stage: decode the worker's compressed file, invert the
/// stretch using `record.inverse_factor()`, and write the result to `output`
/// as WAV.
///
/// Restoration is approximate. The codec step is lossless, but time-domain
/// stretching is not sample-faithful: only the gross duration returns to the
/// original within tolerance. The record's frequency snapshots play no role
/// here; inversion is driven entirely by the speed factor.
///
/// # Errors
///
/// [`Error::InvalidFactor`] (defensive re-check of the record), codec
/// failures for unreadable or corrupt compressed input, stretch failures,
/// and I/O failures on the write path. All propagate unchanged.
pub fn run_observer(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    record: &TransformationRecord,
    config: &PipelineConfig,
) -> Result<AudioClip> {
    let input = input.as_ref();
    let output = output.as_ref();

    let speed_factor = record.speed_factor();
    if !speed_factor.is_finite() || speed_factor <= 0.0 {
        return Err(Error::InvalidFactor(speed_factor));
    }
    config.validate()?;

    tracing::info!(input = %input.display(), "observer: decoding compressed file");
    let decoded = decode_clip(input)?;

    let params = StretchParams::new(record.inverse_factor()).with_fft_size(config.fft_size);
    let restored = stretch_clip(&decoded, &params)?;

    let expected = decoded.duration() * speed_factor;
    if expected > 0.0 && ((restored.duration() - expected) / expected).abs() > config.duration_tolerance
    {
        tracing::warn!(
            restored = restored.duration(),
            expected,
            "restored duration outside tolerance"
        );
    }

    write_wav_clip(output, &restored, config.bit_depth)?;

    let report = SizeReport::from_columns(
        &["Restored File"],
        &[restored.duration()],
        &[file_size_megabytes(output)?],
    )?;
    println!("{report}");

    tracing::info!(
        output = %output.display(),
        restored_duration = restored.duration(),
        "observer: done"
    );
    Ok(restored)
}
