//! Tolerance constants for audio testing.
//!
//! Different operations require different precision levels.

/// DSP processing tolerance (FFT round-trips, windowed overlap-add).
pub const DSP_EPSILON: f32 = 1e-4;

/// 16-bit quantization step size.
/// Use when testing bit-depth conversion to 16-bit.
pub const INT16_EPSILON: f32 = 1.0 / 32768.0;

/// Relative duration tolerance for the round-trip law (2%).
pub const DURATION_TOLERANCE: f64 = 0.02;
