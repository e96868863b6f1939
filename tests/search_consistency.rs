//! The period search returns the same answer however the grid is scanned

use transit_detect::prelude::*;
use transit_detector::test_data::{SyntheticLightCurves, TransitParams};
use transit_search::{PeriodScore, PeriodogramPoint};

/// Plain low-to-high reference scan over the same grid
fn reference_scan(
    search: &PhaseFoldSearch,
    series: &Series,
    noise: f64,
) -> (Vec<PeriodogramPoint>, Option<PeriodScore>) {
    let t0 = series.first_time().unwrap();
    let periodogram: Vec<PeriodogramPoint> = search
        .grid_for(series)
        .periods()
        .into_iter()
        .map(|period| PeriodogramPoint {
            period,
            score: search.score_period(series.samples(), t0, period, noise),
        })
        .collect();

    let mut best: Option<PeriodScore> = None;
    for score in periodogram.iter().filter_map(|p| p.score) {
        if best.map_or(true, |b| score.sde > b.sde) {
            best = Some(score);
        }
    }
    (periodogram, best)
}

#[test]
fn search_matches_reference_scan() {
    let search = PhaseFoldSearch::default();
    for (seed, period) in [(1u64, 3.3), (2, 5.0), (3, 11.7)] {
        let params = TransitParams { period, ..Default::default() };
        let series = SyntheticLightCurves::transit(&params, seed);
        let result = search.search(&series, 0.003).unwrap();
        let (periodogram, best) = reference_scan(&search, &series, 0.003);

        assert_eq!(result.periodogram(), periodogram.as_slice());
        assert_eq!(result.best().copied(), best);
    }
}

#[test]
fn detector_verdicts_are_stable_across_threads() {
    let detector = TransitDetector::default();
    let series = SyntheticLightCurves::default_transit();
    let expected = detector.analyze(&series).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| detector.analyze(&series).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn logging_handler_observes_a_run() {
    let bus = EventBus::new();
    bus.register(LoggingHandler::new(log::Level::Info)).unwrap();
    let metrics = MetricsHandler::new();
    bus.register(metrics.clone()).unwrap();

    let detector = TransitDetectorBuilder::new().event_bus(bus).build().unwrap();
    let result = detector.analyze(&SyntheticLightCurves::default_transit()).unwrap();

    let snapshot = metrics.snapshot().unwrap();
    assert_eq!(snapshot.total_runs, 1);
    assert_eq!(snapshot.accepted, usize::from(result.is_exoplanet()));
}
