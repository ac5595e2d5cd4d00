//! Test helpers and fixtures for presto integration tests.
#![allow(dead_code)]

pub mod tolerances;

use std::path::{Path, PathBuf};

/// Default test sample rate.
pub const TEST_SAMPLE_RATE: u32 = 44100;

/// Generate a test signal: sine wave at given frequency for specified samples.
pub fn generate_sine(frequency: f64, sample_rate: u32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            ((2.0 * std::f64::consts::PI * frequency * t).sin() * 0.5) as f32
        })
        .collect()
}

/// Calculate RMS of a signal.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f32 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f32).sqrt()
}

/// Calculate peak amplitude of a signal.
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0_f32, |a, b| a.max(b))
}

/// Write a mono 16-bit PCM WAV fixture for the worker to load.
pub fn write_wav_fixture(path: &Path, samples: &[f32], sample_rate: u32) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("create fixture WAV");
    for &sample in samples {
        let s = (sample.clamp(-1.0, 1.0) * 32767.0) as i16;
        writer.write_sample(s).expect("write fixture sample");
    }
    writer.finalize().expect("finalize fixture WAV");
}

/// Write a sine fixture and return its path.
pub fn sine_fixture(dir: &Path, name: &str, seconds: f64) -> PathBuf {
    let path = dir.join(name);
    let samples = generate_sine(
        440.0,
        TEST_SAMPLE_RATE,
        (seconds * TEST_SAMPLE_RATE as f64) as usize,
    );
    write_wav_fixture(&path, &samples, TEST_SAMPLE_RATE);
    path
}

/// Names of all entries in a directory, sorted.
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read temp dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
