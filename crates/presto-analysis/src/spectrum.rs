//! Full-signal frequency snapshots.

use presto_core::{forward_fft, inverse_fft, AudioClip, Complex32};

/// A frequency-domain snapshot of a clip.
///
/// Holds the complex bins of a forward FFT over the whole signal, zero-padded
/// to the next power of two. Pure data; inverting it with [`resynthesize`]
/// recovers the analyzed samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    bins: Vec<Complex32>,
    analyzed_len: usize,
    sample_rate: u32,
}

impl Spectrum {
    /// The complex bins (length is a power of two, or zero for empty input).
    pub fn bins(&self) -> &[Complex32] {
        &self.bins
    }

    /// Number of samples that were analyzed (before zero padding).
    pub fn analyzed_len(&self) -> usize {
        self.analyzed_len
    }

    /// Sample rate of the analyzed clip in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Magnitude of each bin up to the Nyquist bin.
    pub fn magnitudes(&self) -> Vec<f32> {
        if self.bins.is_empty() {
            return Vec::new();
        }
        self.bins[..self.bins.len() / 2 + 1]
            .iter()
            .map(|c| c.norm())
            .collect()
    }

    /// Frequency in Hz of the strongest non-DC bin, or `None` for empty or
    /// silent input.
    pub fn peak_frequency(&self) -> Option<f64> {
        let half = self.bins.len() / 2;
        let (peak_bin, peak_mag) = self
            .bins
            .iter()
            .take(half + 1)
            .enumerate()
            .skip(1)
            .max_by(|(_, a), (_, b)| a.norm().total_cmp(&b.norm()))
            .map(|(k, c)| (k, c.norm()))?;

        if peak_mag <= f32::EPSILON {
            return None;
        }
        Some(peak_bin as f64 * self.sample_rate as f64 / self.bins.len() as f64)
    }
}

/// Compute the frequency-domain snapshot of a clip.
///
/// The signal is zero-padded to the next power of two before the transform.
/// Empty clips yield an empty spectrum.
pub fn analyze(clip: &AudioClip) -> Spectrum {
    let analyzed_len = clip.len();
    let padded_len = analyzed_len.next_power_of_two();

    let mut bins: Vec<Complex32> = clip
        .samples()
        .iter()
        .map(|&s| Complex32::new(s, 0.0))
        .collect();
    bins.resize(padded_len, Complex32::new(0.0, 0.0));

    forward_fft(&mut bins);

    Spectrum {
        bins,
        analyzed_len,
        sample_rate: clip.sample_rate(),
    }
}

/// Invert a snapshot back to time-domain samples.
///
/// Returns exactly `analyzed_len` samples (the zero padding is dropped).
pub fn resynthesize(spectrum: &Spectrum) -> Vec<f32> {
    if spectrum.bins.is_empty() {
        return Vec::new();
    }

    let mut bins = spectrum.bins.clone();
    inverse_fft(&mut bins);

    let scale = 1.0 / bins.len() as f32;
    bins.iter()
        .take(spectrum.analyzed_len)
        .map(|c| c.re * scale)
        .collect()
}
