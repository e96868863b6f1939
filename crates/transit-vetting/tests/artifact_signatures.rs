//! Artifact and shape diagnostics on characteristic light curves

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use transit_core::{Sample, Series};
use transit_vetting::{detect_artifacts, estimate_depth, ShapeAnalyzer};

fn with_noise(seed: u64, sigma: f64, f: impl Fn(f64) -> f64) -> Series {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, sigma).unwrap();
    Series::from_samples(
        (0..2000)
            .map(|i| {
                let t = i as f64 * 0.01;
                Sample::new(t, f(t) + noise.sample(&mut rng))
            })
            .collect(),
    )
}

#[test]
fn segment_jump_has_large_jump_ratio() {
    let series = with_noise(1, 0.0005, |t| if t < 10.0 { 1.0 } else { 1.02 });
    let metrics = detect_artifacts(&series).unwrap();
    assert!(metrics.jump_ratio > 20.0, "jump ratio {}", metrics.jump_ratio);
}

#[test]
fn steady_drift_has_high_r_squared() {
    let series = with_noise(2, 0.0005, |t| 0.99 + 0.001 * t);
    let metrics = detect_artifacts(&series).unwrap();
    assert!(metrics.linear_trend_r_squared > 0.9);
    assert!(metrics.jump_ratio < 20.0);
}

#[test]
fn white_noise_is_clean() {
    let series = with_noise(3, 0.001, |_| 1.0);
    let metrics = detect_artifacts(&series).unwrap();
    assert!(metrics.linear_trend_r_squared < 0.05);
    assert!(metrics.jump_ratio < 20.0);
}

#[test]
fn noise_depth_is_a_few_sigma() {
    let series = with_noise(4, 0.001, |_| 1.0);
    let est = estimate_depth(&series).unwrap();
    assert!(est.noise > 0.0008 && est.noise < 0.0012, "noise {}", est.noise);
    assert!(est.snr > 2.0 && est.snr < 5.0, "snr {}", est.snr);
}

#[test]
fn periodic_dips_accumulate_shape_score() {
    let series = Series::from_samples(
        (0..2000)
            .map(|i| {
                let t = i as f64 * 0.01;
                let from_center = ((t % 2.0) - 1.0).abs();
                let flux = if from_center < 0.1 { 0.99 + 0.05 * from_center } else { 1.0 };
                Sample::new(t, flux)
            })
            .collect(),
    );
    assert!(ShapeAnalyzer::default().score(&series) > 5.0);
}
