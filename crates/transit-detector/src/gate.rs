//! Accept/reject decision over the vetting metrics

use crate::result::DetectionMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;
use transit_core::{Error, Result};

/// Fixed acceptance thresholds; every one must hold for a detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionThresholds {
    pub min_snr: f64,
    pub min_depth: f64,
    pub min_sde: f64,
    pub max_jump_ratio: f64,
    pub max_trend_r_squared: f64,
    pub min_shape_score: f64,
}

impl Default for DetectionThresholds {
    fn default() -> Self {
        Self {
            min_snr: 2.5,
            min_depth: 0.0008,
            min_sde: 3.0,
            max_jump_ratio: 20.0,
            max_trend_r_squared: 0.5,
            min_shape_score: 0.5,
        }
    }
}

impl DetectionThresholds {
    pub fn validate(&self) -> Result<()> {
        let all = [
            ("min_snr", self.min_snr),
            ("min_depth", self.min_depth),
            ("min_sde", self.min_sde),
            ("max_jump_ratio", self.max_jump_ratio),
            ("max_trend_r_squared", self.max_trend_r_squared),
            ("min_shape_score", self.min_shape_score),
        ];
        for (name, value) in all {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "threshold {name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Gate criteria in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Snr,
    Depth,
    Sde,
    Jump,
    Trend,
    Shape,
}

impl Criterion {
    pub const ORDER: [Criterion; 6] = [
        Criterion::Snr,
        Criterion::Depth,
        Criterion::Sde,
        Criterion::Jump,
        Criterion::Trend,
        Criterion::Shape,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Snr => "snr",
            Criterion::Depth => "depth",
            Criterion::Sde => "sde",
            Criterion::Jump => "jump",
            Criterion::Trend => "trend",
            Criterion::Shape => "shape",
        }
    }

    /// `(value, threshold, passed)` of this criterion
    fn check(&self, m: &DetectionMetrics, t: &DetectionThresholds) -> (f64, f64, bool) {
        match self {
            Criterion::Snr => (m.snr, t.min_snr, m.snr >= t.min_snr),
            Criterion::Depth => (m.transit_depth, t.min_depth, m.transit_depth >= t.min_depth),
            Criterion::Sde => (m.best_sde, t.min_sde, m.best_sde >= t.min_sde),
            Criterion::Jump => (m.jump_ratio, t.max_jump_ratio, m.jump_ratio <= t.max_jump_ratio),
            Criterion::Trend => (
                m.linear_trend_r_squared,
                t.max_trend_r_squared,
                m.linear_trend_r_squared <= t.max_trend_r_squared,
            ),
            Criterion::Shape => (
                m.transit_shape_score,
                t.min_shape_score,
                m.transit_shape_score >= t.min_shape_score,
            ),
        }
    }

    fn is_upper_bound(&self) -> bool {
        matches!(self, Criterion::Jump | Criterion::Trend)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first criterion a candidate failed, with the offending value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateFailure {
    pub criterion: Criterion,
    pub value: f64,
    pub threshold: f64,
}

impl fmt::Display for GateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relation = if self.criterion.is_upper_bound() { "above" } else { "below" };
        write!(
            f,
            "{} {:.4} is {} the threshold {}",
            self.criterion, self.value, relation, self.threshold
        )
    }
}

/// Checks metrics against [`DetectionThresholds`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionGate {
    thresholds: DetectionThresholds,
}

impl DecisionGate {
    pub fn new(thresholds: DetectionThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &DetectionThresholds {
        &self.thresholds
    }

    /// `None` when every criterion holds, else the first one that failed
    pub fn evaluate(&self, metrics: &DetectionMetrics) -> Option<GateFailure> {
        Criterion::ORDER.iter().find_map(|criterion| {
            let (value, threshold, passed) = criterion.check(metrics, &self.thresholds);
            (!passed).then_some(GateFailure {
                criterion: *criterion,
                value,
                threshold,
            })
        })
    }
}

/// Residual `(probability, confidence)` reported with a rejection
pub fn rejection_scores(snr: f64, depth: f64) -> (f64, f64) {
    ((snr / 10.0).clamp(0.0, 0.35), (depth * 100.0).clamp(0.0, 0.4))
}

/// Heuristic `(probability, confidence)` of an accepted detection
pub fn acceptance_scores(snr: f64, sde: f64) -> (f64, f64) {
    (
        (0.50 + 0.03 * snr + 0.01 * sde).min(0.96),
        (0.55 + 0.025 * snr + 0.01 * sde).min(0.97),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn passing() -> DetectionMetrics {
        DetectionMetrics {
            transit_depth: 0.01,
            snr: 8.0,
            best_period: 5.0,
            best_sde: 40.0,
            transit_count: 200,
            jump_ratio: 6.0,
            linear_trend_r_squared: 0.01,
            transit_shape_score: 12.0,
            noise: 0.002,
            secondary_eclipse_depth: 0.0,
            false_alarm_probability: 0.05,
        }
    }

    #[test]
    fn test_all_pass() {
        assert!(DecisionGate::default().evaluate(&passing()).is_none());
    }

    #[test]
    fn test_each_criterion_can_reject() {
        let gate = DecisionGate::default();
        let cases: [(Criterion, fn(&mut DetectionMetrics)); 6] = [
            (Criterion::Snr, |m| m.snr = 2.0),
            (Criterion::Depth, |m| m.transit_depth = 0.0005),
            (Criterion::Sde, |m| m.best_sde = 2.9),
            (Criterion::Jump, |m| m.jump_ratio = 25.0),
            (Criterion::Trend, |m| m.linear_trend_r_squared = 0.8),
            (Criterion::Shape, |m| m.transit_shape_score = 0.1),
        ];
        for (expected, spoil) in cases {
            let mut m = passing();
            spoil(&mut m);
            assert_eq!(gate.evaluate(&m).unwrap().criterion, expected);
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let mut m = passing();
        m.best_sde = 0.0;
        m.transit_shape_score = 0.0;
        m.jump_ratio = 100.0;
        let failure = DecisionGate::default().evaluate(&m).unwrap();
        assert_eq!(failure.criterion, Criterion::Sde);
        assert_eq!(failure.value, 0.0);
        assert_eq!(failure.threshold, 3.0);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let mut m = passing();
        m.snr = 2.5;
        m.transit_depth = 0.0008;
        m.best_sde = 3.0;
        m.jump_ratio = 20.0;
        m.linear_trend_r_squared = 0.5;
        m.transit_shape_score = 0.5;
        assert!(DecisionGate::default().evaluate(&m).is_none());
    }

    #[test]
    fn test_failure_display() {
        let failure = GateFailure {
            criterion: Criterion::Jump,
            value: 31.5,
            threshold: 20.0,
        };
        assert_eq!(failure.to_string(), "jump 31.5000 is above the threshold 20");
        let failure = GateFailure {
            criterion: Criterion::Snr,
            value: 1.0,
            threshold: 2.5,
        };
        assert_eq!(failure.to_string(), "snr 1.0000 is below the threshold 2.5");
    }

    #[test]
    fn test_rejection_scores_are_capped() {
        assert_eq!(rejection_scores(0.0, 0.0), (0.0, 0.0));
        assert_eq!(rejection_scores(100.0, 1.0), (0.35, 0.4));
        let (p, c) = rejection_scores(2.0, 0.002);
        assert_relative_eq!(p, 0.2, epsilon = 1e-12);
        assert_relative_eq!(c, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_acceptance_scores() {
        let (p, c) = acceptance_scores(4.0, 10.0);
        assert_relative_eq!(p, 0.72, epsilon = 1e-12);
        assert_relative_eq!(c, 0.75, epsilon = 1e-12);
        assert_eq!(acceptance_scores(50.0, 100.0), (0.96, 0.97));
    }

    #[test]
    fn test_threshold_validation() {
        assert!(DetectionThresholds::default().validate().is_ok());
        let bad = DetectionThresholds { min_snr: f64::NAN, ..Default::default() };
        assert!(bad.validate().is_err());
        let bad = DetectionThresholds { max_jump_ratio: -1.0, ..Default::default() };
        assert!(bad.validate().is_err());
    }
}
