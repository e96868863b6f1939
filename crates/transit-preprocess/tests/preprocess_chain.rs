//! End-to-end preprocessing: text in, flattened unit-baseline series out

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::io::Cursor;
use transit_core::utils::median;
use transit_preprocess::{normalize, parse_reader, SigmaClip, SlidingMedianDetrender};
use transit_spread::robust_std_dev;

fn noisy_ramp_csv(n: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 2.0).unwrap();
    let mut text = String::from("time,flux,flux_err,quality\n");
    for i in 0..n {
        let t = i as f64 * 0.02;
        let mut flux = 12000.0 + 15.0 * t + noise.sample(&mut rng);
        if i == n / 3 {
            flux += 5000.0; // cosmic ray
        }
        text.push_str(&format!("{t:.4},{flux:.4},2.0,0\n"));
    }
    text
}

#[test]
fn test_chain_produces_unit_baseline() {
    let series = parse_reader(Cursor::new(noisy_ramp_csv(3000, 7))).unwrap();
    assert_eq!(series.len(), 3000);

    let normalized = normalize(&series).unwrap();
    assert!(normalized.baseline > 12000.0);

    let flux = normalized.series.flux_vec();
    let sigma = robust_std_dev(&flux).unwrap();
    assert!(sigma > 0.0);

    let clipped = SigmaClip::default().apply(&normalized.series, sigma);
    assert!(clipped.removed >= 1, "the cosmic ray should be clipped");

    let flat = SlidingMedianDetrender::default().detrend(&clipped.series).unwrap();
    let m = median(&flat.flux_vec()).unwrap();
    assert!((m - 1.0).abs() < 1e-3);

    // Detrended scatter is close to the injected white noise.
    let flat_sigma = robust_std_dev(&flat.flux_vec()).unwrap();
    assert!(flat_sigma < 2.0 * 2.0 / 12000.0);
}

#[test]
fn test_chain_rejects_tiny_input() {
    let text = "time,flux\n0,1\n1,1\n2,1\n3,1\n4,1\n";
    let err = parse_reader(Cursor::new(text)).unwrap_err();
    assert!(err.is_validation());
}
