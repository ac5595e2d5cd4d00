//! Cross-crate quality checks: the stretcher should change duration, not
//! pitch, and the analyzer should be able to confirm it.

mod helpers;

use presto::stretch::stretch_clip;
use presto::{analysis, AudioClip, FftSize, StretchParams};

fn sine_clip(seconds: f64) -> AudioClip {
    let samples = helpers::generate_sine(
        440.0,
        helpers::TEST_SAMPLE_RATE,
        (seconds * helpers::TEST_SAMPLE_RATE as f64) as usize,
    );
    AudioClip::new(samples, helpers::TEST_SAMPLE_RATE).unwrap()
}

#[test]
fn test_speedup_preserves_pitch() {
    let clip = sine_clip(2.0);
    let stretched = stretch_clip(&clip, &StretchParams::new(2.0)).unwrap();

    let spectrum = analysis::analyze(&stretched);
    let peak = spectrum.peak_frequency().expect("stretched tone has a peak");
    assert!(
        (peak - 440.0).abs() < 15.0,
        "peak moved to {} Hz after 2x speedup",
        peak
    );
}

#[test]
fn test_slowdown_preserves_pitch() {
    let clip = sine_clip(1.0);
    let stretched = stretch_clip(&clip, &StretchParams::new(0.5)).unwrap();

    let spectrum = analysis::analyze(&stretched);
    let peak = spectrum.peak_frequency().expect("stretched tone has a peak");
    assert!(
        (peak - 440.0).abs() < 15.0,
        "peak moved to {} Hz after 0.5x slowdown",
        peak
    );
}

#[test]
fn test_fft_size_presets_all_honor_length() {
    let clip = sine_clip(1.0);
    for fft_size in [FftSize::Small, FftSize::Medium, FftSize::Large, FftSize::XLarge] {
        let params = StretchParams::new(2.0).with_fft_size(fft_size);
        let out = stretch_clip(&clip, &params).unwrap();
        assert_eq!(out.len(), clip.len() / 2, "fft size {:?}", fft_size);
    }
}

#[test]
fn test_inverse_stretch_restores_duration() {
    let clip = sine_clip(2.0);
    let fast = stretch_clip(&clip, &StretchParams::new(4.0)).unwrap();
    let restored = stretch_clip(&fast, &StretchParams::new(0.25)).unwrap();

    assert_eq!(fast.len(), clip.len() / 4);
    assert_eq!(restored.len(), clip.len());
    assert!(helpers::rms(restored.samples()) > helpers::rms(clip.samples()) * 0.1);
}
