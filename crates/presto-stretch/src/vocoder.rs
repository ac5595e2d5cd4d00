//! Phase vocoder for offline time stretching.
//!
//! STFT analysis/synthesis: window the input with a Hann window, take the
//! FFT, derive each bin's instantaneous frequency from its phase difference
//! against the previous frame, re-accumulate phases at the synthesis hop,
//! and overlap-add the inverse transform. The ratio of synthesis hop to
//! analysis hop sets the stretch.

use std::f32::consts::PI;

use presto_core::{forward_fft, inverse_fft, Complex32};

use crate::params::FftSize;

/// Phase vocoder processor.
///
/// Construct once per stretch run; [`stretch`](Self::stretch) resets the
/// phase state before processing, so a processor may be reused.
pub struct PhaseVocoder {
    fft_size: usize,
    hop_analysis: usize,

    window: Vec<f32>,
    fft_buffer: Vec<Complex32>,
    phase_accumulator: Vec<f32>,
    last_phase: Vec<f32>,

    // Expected phase advance per bin per analysis hop.
    expected_phase_diff: Vec<f32>,
}

impl PhaseVocoder {
    /// Create a processor for the given FFT size preset.
    pub fn new(fft_size: FftSize) -> Self {
        let size = fft_size.size();
        let hop = fft_size.hop_size();
        let num_bins = size / 2 + 1;

        let window = Self::create_hann_window(size);

        let expected_phase_diff: Vec<f32> = (0..num_bins)
            .map(|k| 2.0 * PI * (k as f32) * (hop as f32) / (size as f32))
            .collect();

        Self {
            fft_size: size,
            hop_analysis: hop,
            window,
            fft_buffer: vec![Complex32::new(0.0, 0.0); size],
            phase_accumulator: vec![0.0; num_bins],
            last_phase: vec![0.0; num_bins],
            expected_phase_diff,
        }
    }

    /// Create a Hann window of the specified size
    fn create_hann_window(size: usize) -> Vec<f32> {
        (0..size)
            .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f32 / size as f32).cos()))
            .collect()
    }

    /// Reset the phase-tracking state.
    pub fn reset(&mut self) {
        self.fft_buffer.fill(Complex32::new(0.0, 0.0));
        self.phase_accumulator.fill(0.0);
        self.last_phase.fill(0.0);
    }

    /// Stretch `input` by `rate` and return the output samples.
    ///
    /// `rate` must be finite and positive (validated by the caller). The
    /// output holds exactly `round(input.len() / rate)` samples: the
    /// overlap-add result is trimmed, or zero-padded when the final analysis
    /// frame falls short of it.
    pub fn stretch(&mut self, input: &[f32], rate: f64) -> Vec<f32> {
        let size = self.fft_size;
        let hop_a = self.hop_analysis;
        let hop_s = ((hop_a as f64 / rate).round() as usize).max(1);

        // Frames start at multiples of the analysis hop; frames that overrun
        // the input are zero-padded.
        let num_frames = input.len().div_ceil(hop_a);
        let raw_len = (num_frames - 1) * hop_s + size;

        let mut output = vec![0.0f32; raw_len];
        let mut window_sum = vec![0.0f32; raw_len];

        self.reset();
        for frame in 0..num_frames {
            self.process_frame(input, frame * hop_a, hop_s, frame * hop_s, &mut output, &mut window_sum);
        }

        // Undo the analysis+synthesis window weighting accumulated per sample.
        for (sample, wsum) in output.iter_mut().zip(&window_sum) {
            if *wsum > 1e-6 {
                *sample /= *wsum;
            }
        }

        let expected_len = (input.len() as f64 / rate).round() as usize;
        output.resize(expected_len, 0.0);
        output
    }

    /// Analyze one frame, advance phases, and overlap-add the synthesis.
    fn process_frame(
        &mut self,
        input: &[f32],
        in_pos: usize,
        hop_synthesis: usize,
        out_pos: usize,
        output: &mut [f32],
        window_sum: &mut [f32],
    ) {
        let size = self.fft_size;
        let num_bins = size / 2 + 1;

        // 1. Windowed copy into the FFT buffer
        for i in 0..size {
            let sample = input.get(in_pos + i).copied().unwrap_or(0.0);
            self.fft_buffer[i] = Complex32::new(sample * self.window[i], 0.0);
        }

        // 2. Forward FFT
        forward_fft(&mut self.fft_buffer);

        // 3. Phase unwrapping and accumulation
        let hop_ratio = hop_synthesis as f32 / self.hop_analysis as f32;
        for k in 0..num_bins {
            let magnitude = self.fft_buffer[k].norm();
            let phase = self.fft_buffer[k].arg();

            let expected = self.expected_phase_diff[k];
            let deviation = Self::wrap_phase(phase - self.last_phase[k] - expected);
            let true_freq = expected + deviation;

            self.phase_accumulator[k] =
                Self::wrap_phase(self.phase_accumulator[k] + true_freq * hop_ratio);
            self.last_phase[k] = phase;

            self.fft_buffer[k] = Complex32::from_polar(magnitude, self.phase_accumulator[k]);
        }

        // 4. Mirror for real-valued output (conjugate symmetry)
        for i in 1..num_bins - 1 {
            self.fft_buffer[size - i] = self.fft_buffer[i].conj();
        }

        // 5. Inverse FFT (unnormalized), synthesis window, overlap-add
        inverse_fft(&mut self.fft_buffer);
        let scale = 1.0 / size as f32;
        for i in 0..size {
            let w = self.window[i];
            output[out_pos + i] += self.fft_buffer[i].re * scale * w;
            window_sum[out_pos + i] += w * w;
        }
    }

    /// Wrap phase to [-PI, PI]
    #[inline]
    fn wrap_phase(phase: f32) -> f32 {
        let mut p = phase;
        while p > PI {
            p -= 2.0 * PI;
        }
        while p < -PI {
            p += 2.0 * PI;
        }
        p
    }
}
