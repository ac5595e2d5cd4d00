//! # Presto Codec
//!
//! Audio file I/O for the presto pipeline:
//!
//! - **WAV**: read/write via `hound` (pure Rust)
//! - **FLAC**: lossless encode via `flacenc` (pure Rust, in-memory)
//! - **Decode**: FLAC/WAV decode via `symphonia`
//!
//! All conversions between in-memory clips and container formats happen in
//! memory; no intermediate files are created.

pub mod decode;
pub mod error;
pub mod flac;
pub mod options;
pub mod wav;

pub use decode::decode_clip;
pub use error::{CodecError, Result};
pub use flac::{encode_flac_clip, encode_flac_memory, FlacConfig};
pub use options::BitDepth;
pub use wav::{read_wav_clip, write_wav_clip};

use std::path::Path;

/// On-disk size of a file in megabytes.
pub fn file_size_megabytes(path: impl AsRef<Path>) -> Result<f64> {
    let metadata = std::fs::metadata(path)?;
    Ok(metadata.len() as f64 / (1024.0 * 1024.0))
}
