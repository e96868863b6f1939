//! Detector configuration
//!
//! Every knob of the pipeline in one serde-friendly tree. Missing fields
//! fall back to their defaults, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "thresholds": { "min_snr": 3.0 }, "period_search": { "period_count": 600 } }
//! ```

use crate::classifier::ClassifierConfig;
use crate::gate::DetectionThresholds;
use serde::{Deserialize, Serialize};
use std::path::Path;
use transit_core::{Error, Result};
use transit_preprocess::DEFAULT_CLIP_SIGMA;
use transit_search::PeriodSearchConfig;
use transit_vetting::ShapeConfig;

/// Parameters of the normalize / clip / detrend stages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Clip multiplier in robust standard deviations
    pub clip_sigma: f64,
    /// Half-window of the detrender as a fraction of the series length
    pub detrend_window_fraction: f64,
    /// Smallest detrender half-window, in samples
    pub detrend_min_half_window: usize,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            clip_sigma: DEFAULT_CLIP_SIGMA,
            detrend_window_fraction: 0.05,
            detrend_min_half_window: 5,
        }
    }
}

impl PreprocessConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.clip_sigma > 0.0 && self.clip_sigma.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "clip_sigma must be positive, got {}",
                self.clip_sigma
            )));
        }
        if !(0.0..=0.5).contains(&self.detrend_window_fraction) {
            return Err(Error::InvalidParameter(format!(
                "detrend_window_fraction must be in [0, 0.5], got {}",
                self.detrend_window_fraction
            )));
        }
        if self.detrend_min_half_window == 0 {
            return Err(Error::InvalidParameter(
                "detrend_min_half_window must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Complete configuration of a [`TransitDetector`](crate::TransitDetector)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub preprocess: PreprocessConfig,
    pub period_search: PeriodSearchConfig,
    pub shape: ShapeConfig,
    pub thresholds: DetectionThresholds,
    pub classifier: ClassifierConfig,
}

impl DetectorConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidParameter(format!("invalid detector configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::InvalidParameter(format!("unserializable configuration: {e}")))
    }

    pub fn validate(&self) -> Result<()> {
        self.preprocess.validate()?;
        self.period_search.validate()?;
        self.shape.validate()?;
        self.thresholds.validate()?;
        self.classifier.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(DetectorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DetectorConfig::from_json_str(
            r#"{ "thresholds": { "min_snr": 3.0 }, "period_search": { "period_count": 600 } }"#,
        )
        .unwrap();
        assert_eq!(config.thresholds.min_snr, 3.0);
        assert_eq!(config.thresholds.min_sde, 3.0);
        assert_eq!(config.period_search.period_count, 600);
        assert_eq!(config.period_search.min_period, 0.5);
        assert_eq!(config.preprocess, PreprocessConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = DetectorConfig::default();
        config.classifier.host.temperature = 4500.0;
        let json = config.to_json().unwrap();
        assert_eq!(DetectorConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = DetectorConfig::from_json_str(r#"{ "preprocess": { "clip_sigma": -1.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));

        let err = DetectorConfig::from_json_str("{ not json").unwrap_err();
        assert!(err.to_string().contains("invalid detector configuration"));
    }

    #[test]
    fn test_missing_file() {
        let err = DetectorConfig::from_json_file("/no/such/detector.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
