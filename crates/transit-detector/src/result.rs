//! Detection outcomes

use crate::classifier::PlanetType;
use crate::gate::GateFailure;
use crate::properties::OrbitalProperties;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every metric the pipeline computes for one light curve
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectionMetrics {
    pub transit_depth: f64,
    pub snr: f64,
    pub best_period: f64,
    pub best_sde: f64,
    pub transit_count: usize,
    pub jump_ratio: f64,
    pub linear_trend_r_squared: f64,
    pub transit_shape_score: f64,
    /// Robust standard deviation of the detrended flux
    pub noise: f64,
    pub secondary_eclipse_depth: f64,
    pub false_alarm_probability: f64,
}

/// A light curve that did not pass the decision gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    pub reason: GateFailure,
    pub probability: f64,
    pub confidence: f64,
    pub metrics: DetectionMetrics,
}

/// A light curve that passed every gate criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acceptance {
    pub probability: f64,
    pub confidence: f64,
    /// Days
    pub orbital_period: f64,
    /// Earth radii
    pub planet_radius: f64,
    pub transit_depth: f64,
    pub duration_hours: f64,
    pub planet_type: PlanetType,
    pub planet_type_confidence: f64,
    pub properties: OrbitalProperties,
    pub metrics: DetectionMetrics,
}

/// Outcome of analysing one light curve
///
/// A rejection is an ordinary result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DetectionResult {
    Rejection(Rejection),
    Acceptance(Acceptance),
}

impl DetectionResult {
    pub fn is_exoplanet(&self) -> bool {
        matches!(self, DetectionResult::Acceptance(_))
    }

    pub fn metrics(&self) -> &DetectionMetrics {
        match self {
            DetectionResult::Rejection(r) => &r.metrics,
            DetectionResult::Acceptance(a) => &a.metrics,
        }
    }

    pub fn probability(&self) -> f64 {
        match self {
            DetectionResult::Rejection(r) => r.probability,
            DetectionResult::Acceptance(a) => a.probability,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            DetectionResult::Rejection(r) => r.confidence,
            DetectionResult::Acceptance(a) => a.confidence,
        }
    }

    pub fn rejection_reason(&self) -> Option<&GateFailure> {
        match self {
            DetectionResult::Rejection(r) => Some(&r.reason),
            DetectionResult::Acceptance(_) => None,
        }
    }

    pub fn acceptance(&self) -> Option<&Acceptance> {
        match self {
            DetectionResult::Acceptance(a) => Some(a),
            DetectionResult::Rejection(_) => None,
        }
    }
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionResult::Acceptance(a) => {
                writeln!(f, "Transit detected:")?;
                writeln!(f, "  Period: {:.4} d", a.orbital_period)?;
                writeln!(f, "  Radius: {:.2} R_earth ({})", a.planet_radius, a.planet_type)?;
                writeln!(f, "  Depth: {:.5}", a.transit_depth)?;
                writeln!(f, "  Duration: {:.2} h", a.duration_hours)?;
                writeln!(f, "  Probability: {:.2}, confidence: {:.2}", a.probability, a.confidence)
            }
            DetectionResult::Rejection(r) => {
                writeln!(f, "No transit detected: {}", r.reason)?;
                writeln!(f, "  Probability: {:.2}, confidence: {:.2}", r.probability, r.confidence)
            }
        }
    }
}
