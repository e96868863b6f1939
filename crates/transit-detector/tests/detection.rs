//! End-to-end behaviour of the transit detector on synthetic light curves

use approx::assert_relative_eq;
use transit_detector::test_data::{SyntheticLightCurves, TransitParams};
use transit_detector::{
    AnalysisOptions, Criterion, DetectionReport, DetectionResult, PlanetType, TransitDetector,
    TransitDetectorBuilder,
};

#[test]
fn injected_five_day_transit_is_accepted() {
    let result = TransitDetector::default()
        .analyze(&SyntheticLightCurves::default_transit())
        .unwrap();

    let DetectionResult::Acceptance(accepted) = &result else {
        panic!("expected acceptance, got {result}");
    };
    assert_relative_eq!(accepted.orbital_period, 5.0, max_relative = 0.05);
    assert_relative_eq!(accepted.duration_hours, accepted.orbital_period * 0.05 * 24.0);
    assert!(accepted.metrics.transit_count >= 3);
    assert!(accepted.probability > 0.5 && accepted.probability <= 0.96);
    assert!(accepted.confidence > 0.55 && accepted.confidence <= 0.97);
    assert!(accepted.planet_radius > 0.0);
    assert!(accepted.properties.semi_major_axis_au > 0.0);
}

#[test]
fn accepted_radius_matches_measured_depth() {
    let result = TransitDetector::default()
        .analyze(&SyntheticLightCurves::default_transit())
        .unwrap();
    let accepted = result.acceptance().unwrap();
    assert_relative_eq!(
        accepted.planet_radius,
        accepted.transit_depth.sqrt() * 11.0,
        epsilon = 1e-12
    );
}

#[test]
fn hint_overrides_only_the_label() {
    let series = SyntheticLightCurves::default_transit();
    let detector = TransitDetector::default();
    let plain = detector.analyze(&series).unwrap();
    let hinted = detector
        .analyze_with(
            &series,
            &AnalysisOptions::new()
                .with_hint(PlanetType::WaterWorld)
                .with_label("kepler-hint.csv"),
        )
        .unwrap();

    let (plain, hinted) = (plain.acceptance().unwrap(), hinted.acceptance().unwrap());
    assert_eq!(hinted.planet_type, PlanetType::WaterWorld);
    assert_eq!(hinted.planet_type_confidence, plain.planet_type_confidence);
    assert_eq!(hinted.orbital_period, plain.orbital_period);
    assert_eq!(hinted.metrics, plain.metrics);
}

#[test]
fn quiet_white_noise_is_rejected_at_the_sde_gate() {
    let detector = TransitDetector::default();
    let mut rejected = 0;
    for seed in 0..10 {
        let series = SyntheticLightCurves::gaussian_noise(5000, 0.01, 0.001, seed);
        let result = detector.analyze(&series).unwrap();
        if let Some(reason) = result.rejection_reason() {
            rejected += 1;
            assert_eq!(reason.criterion, Criterion::Sde);
        }
    }
    assert!(rejected >= 9, "only {rejected}/10 noise curves rejected");
}

// At 3 ppt white noise single low points reach 0.99, which clears every
// default threshold. Pinned so a threshold change is noticed.
#[test]
fn white_noise_at_three_ppt_passes_the_default_gate() {
    let detector = TransitDetector::default();
    let mut accepted = 0;
    for seed in 0..10 {
        let series = SyntheticLightCurves::gaussian_noise(5000, 0.01, 0.003, 100 + seed);
        let result = detector.analyze(&series).unwrap();
        assert!(result.metrics().transit_depth > 0.005);
        if result.is_exoplanet() {
            accepted += 1;
        }
    }
    assert!(accepted >= 8, "only {accepted}/10 noise curves accepted");
}

#[test]
fn rejection_report_names_the_failed_criterion() {
    let result = TransitDetector::default()
        .analyze(&SyntheticLightCurves::flat(1000, 0.01))
        .unwrap();
    let report = DetectionReport::from(&result);
    assert!(!report.is_exoplanet);
    assert_eq!(report.planet_type, "None");
    assert!(report.note.unwrap().starts_with("Rejected: snr"));
}

#[test]
fn stricter_sde_threshold_rejects_the_transit() {
    let detector = TransitDetectorBuilder::new().min_sde(1.0e6).build().unwrap();
    let result = detector.analyze(&SyntheticLightCurves::default_transit()).unwrap();
    assert_eq!(result.rejection_reason().unwrap().criterion, Criterion::Sde);
    let (p, c) = (result.probability(), result.confidence());
    assert!(p <= 0.35 && c <= 0.4);
}

#[test]
fn shallower_transit_still_found_with_lower_noise() {
    let params = TransitParams {
        depth: 0.004,
        noise: 0.0012,
        period: 7.0,
        ..Default::default()
    };
    let result = TransitDetector::default()
        .analyze(&SyntheticLightCurves::transit(&params, 7))
        .unwrap();
    assert!(result.is_exoplanet(), "{result}");
    assert_relative_eq!(result.metrics().best_period, 7.0, max_relative = 0.05);
}
