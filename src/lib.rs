//! # Presto - Time-Compressed Lossless Audio Archival
//!
//! Presto speeds an audio recording up by a factor, archives it as FLAC, and
//! later stretches it back out to approximately the original timing.
//!
//! ## Architecture
//!
//! Presto is an umbrella crate that coordinates:
//! - **presto-core** - Sample clips and the shared FFT kernel
//! - **presto-stretch** - Phase-vocoder time stretching
//! - **presto-codec** - WAV/FLAC encoding and decoding
//! - **presto-analysis** - Frequency-domain snapshots (diagnostics)
//!
//! The two pipeline stages are plain functions invoked by an explicit caller:
//! [`run_worker`] produces a compressed artifact and a
//! [`TransformationRecord`]; [`run_observer`] consumes both to write the
//! restored audio. The record is the only bridge between the stages - there
//! is no ambient state, and an observer cannot run before a worker has
//! produced a record.
//!
//! ## Quick Start
//!
//! ```no_run
//! use presto::{run_observer, run_worker, PipelineConfig};
//!
//! # fn main() -> presto::Result<()> {
//! let config = PipelineConfig::default();
//!
//! // Speed up 4x and archive losslessly
//! let record = run_worker("input.wav", "output_fast.flac", 4.0, &config)?;
//!
//! // Restore to approximately the original timing
//! run_observer("output_fast.flac", "restored.wav", &record, &config)?;
//! # Ok(())
//! # }
//! ```
//!
//! Restoration is approximate by design: the codec round-trip is lossless,
//! but time stretching trades sample-level fidelity for duration. Only the
//! restored duration is guaranteed (within the configured tolerance).

pub mod config;
pub mod error;
pub mod observer;
pub mod record;
pub mod report;
pub mod worker;

/// Re-export of presto-core for direct access
pub use presto_core as core;

pub use presto_analysis as analysis;
pub use presto_codec as codec;
pub use presto_stretch as stretch;

// Core types
pub use presto_core::AudioClip;

// Subsystem types the pipelines surface directly
pub use presto_analysis::Spectrum;
pub use presto_codec::{BitDepth, FlacConfig};
pub use presto_stretch::{FftSize, StretchParams};

// Pipeline surface
pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use observer::run_observer;
pub use record::TransformationRecord;
pub use report::{ReportRow, SizeReport};
pub use worker::run_worker;
