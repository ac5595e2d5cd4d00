//! FFT kernel shared by the time stretcher and the spectrum analyzer.
//!
//! Thin wrappers over rustfft's planner. The inverse transform follows the
//! rustfft convention of being unnormalized; callers scale by `1/len`.

use rustfft::FftPlanner;

pub use rustfft::num_complex::Complex;

/// Single-precision complex sample.
pub type Complex32 = Complex<f32>;

/// In-place forward FFT.
pub fn forward_fft(buffer: &mut [Complex32]) {
    if buffer.is_empty() {
        return;
    }
    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(buffer.len()).process(buffer);
}

/// In-place inverse FFT. Unnormalized: scale the result by `1/buffer.len()`.
pub fn inverse_fft(buffer: &mut [Complex32]) {
    if buffer.is_empty() {
        return;
    }
    let mut planner = FftPlanner::new();
    planner.plan_fft_inverse(buffer.len()).process(buffer);
}
