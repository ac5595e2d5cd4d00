//! # Presto Analysis
//!
//! Frequency-domain snapshots of audio clips.
//!
//! [`analyze`] captures a full-signal spectrum; [`resynthesize`] inverts one
//! back to time-domain samples. Snapshots are diagnostic: the restoration
//! pipeline never consumes them (time-domain stretching alone reverses the
//! transform), but they expose magnitude and dominant-frequency information
//! for inspection and logging.

pub mod spectrum;

pub use spectrum::{analyze, resynthesize, Spectrum};
