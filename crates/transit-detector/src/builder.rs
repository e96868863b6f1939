use crate::classifier::ClassifierConfig;
use crate::config::DetectorConfig;
use crate::detector::TransitDetector;
use crate::gate::DetectionThresholds;
use transit_core::pipeline::EventBus;
use transit_core::Result;

/// Builder for configuring and creating transit detectors.
///
/// Starts from [`DetectorConfig::default`]; every setter overrides one knob
/// and [`build`](Self::build) validates the result.
#[derive(Debug, Default)]
pub struct TransitDetectorBuilder {
    config: DetectorConfig,
    event_bus: Option<EventBus>,
}

impl TransitDetectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: DetectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the outlier clip multiplier (robust standard deviations).
    pub fn clip_sigma(mut self, k: f64) -> Self {
        self.config.preprocess.clip_sigma = k;
        self
    }

    /// Sets the detrender half-window as a fraction of the series length.
    pub fn detrend_window_fraction(mut self, fraction: f64) -> Self {
        self.config.preprocess.detrend_window_fraction = fraction;
        self
    }

    /// Sets the trial period range in days.
    ///
    /// The upper bound is still capped at half the time span of each input.
    pub fn period_range(mut self, min_period: f64, max_period: f64) -> Self {
        self.config.period_search.min_period = min_period;
        self.config.period_search.max_period = max_period;
        self
    }

    /// Sets the number of trial periods.
    pub fn period_count(mut self, count: usize) -> Self {
        self.config.period_search.period_count = count;
        self
    }

    pub fn thresholds(mut self, thresholds: DetectionThresholds) -> Self {
        self.config.thresholds = thresholds;
        self
    }

    pub fn min_snr(mut self, snr: f64) -> Self {
        self.config.thresholds.min_snr = snr;
        self
    }

    pub fn min_sde(mut self, sde: f64) -> Self {
        self.config.thresholds.min_sde = sde;
        self
    }

    pub fn classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.config.classifier = classifier;
        self
    }

    /// Attach an event bus that observes every analysis
    pub fn event_bus(mut self, bus: EventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Validates the configuration and builds the detector.
    pub fn build(self) -> Result<TransitDetector> {
        let detector = TransitDetector::new(self.config)?;
        Ok(match self.event_bus {
            Some(bus) => detector.with_event_bus(bus),
            None => detector,
        })
    }
}

/// Convenience function for creating a detector with the default thresholds.
pub fn default_detector() -> TransitDetector {
    TransitDetector::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::SyntheticLightCurves;
    use transit_core::pipeline::MetricsHandler;
    use transit_core::Error;

    #[test]
    fn test_builder_pattern() {
        let detector = TransitDetectorBuilder::new()
            .clip_sigma(4.0)
            .period_range(1.0, 20.0)
            .period_count(150)
            .min_snr(3.0)
            .build()
            .unwrap();
        let cfg = detector.config();
        assert_eq!(cfg.preprocess.clip_sigma, 4.0);
        assert_eq!(cfg.period_search.min_period, 1.0);
        assert_eq!(cfg.period_search.max_period, 20.0);
        assert_eq!(cfg.period_search.period_count, 150);
        assert_eq!(cfg.thresholds.min_snr, 3.0);
        assert_eq!(cfg.thresholds.min_sde, 3.0);
    }

    #[test]
    fn test_invalid_configuration_fails_to_build() {
        let err = TransitDetectorBuilder::new().period_range(10.0, 1.0).build().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
        let err = TransitDetectorBuilder::new().period_count(0).build().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_builder_attaches_event_bus() {
        let metrics = MetricsHandler::new();
        let bus = EventBus::new();
        bus.register(metrics.clone()).unwrap();
        let detector = TransitDetectorBuilder::new().event_bus(bus).build().unwrap();
        assert!(detector.event_bus().is_some());

        detector.analyze(&SyntheticLightCurves::flat(200, 0.01)).unwrap();
        assert_eq!(metrics.snapshot().unwrap().total_runs, 1);
    }

    #[test]
    fn test_default_detector_uses_default_config() {
        assert_eq!(*default_detector().config(), DetectorConfig::default());
    }
}
