//! Planet-type classification of accepted detections
//!
//! Radius comes from the transit depth assuming a Sun-sized host
//! (`R_p / R_sun = sqrt(depth)`, about 109 Earth radii per solar radius,
//! scaled down to the heuristic factor 11). The label is picked by a fixed
//! decision tree over radius, depth and period, and its confidence is
//! nudged by the SNR.

use crate::properties::HostStar;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use transit_core::{Error, Result};

/// Coarse planet categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetType {
    GasGiant,
    MiniNeptune,
    WaterWorld,
    SuperEarth,
    HotRockyPlanet,
    RockyPlanet,
    DesertPlanet,
    TemperateRockyPlanet,
}

impl PlanetType {
    pub const ALL: [PlanetType; 8] = [
        PlanetType::GasGiant,
        PlanetType::MiniNeptune,
        PlanetType::WaterWorld,
        PlanetType::SuperEarth,
        PlanetType::HotRockyPlanet,
        PlanetType::RockyPlanet,
        PlanetType::DesertPlanet,
        PlanetType::TemperateRockyPlanet,
    ];

    /// Human-readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            PlanetType::GasGiant => "Gas Giant",
            PlanetType::MiniNeptune => "Mini-Neptune",
            PlanetType::WaterWorld => "Water World",
            PlanetType::SuperEarth => "Super-Earth",
            PlanetType::HotRockyPlanet => "Hot Rocky Planet",
            PlanetType::RockyPlanet => "Rocky Planet",
            PlanetType::DesertPlanet => "Desert Planet",
            PlanetType::TemperateRockyPlanet => "Temperate Rocky Planet",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlanetType {
    type Err = Error;

    /// Accepts a label, case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        PlanetType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidParameter(format!("unknown planet type '{s}'")))
    }
}

/// Tunables of the classifier and of the derived orbital quantities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Earth radii per `sqrt(depth)`
    pub radius_scale: f64,
    /// Transit duration as a fraction of the period
    pub duration_fraction: f64,
    pub high_snr: f64,
    pub low_snr: f64,
    pub high_snr_bonus: f64,
    pub low_snr_penalty: f64,
    pub confidence_ceiling: f64,
    pub confidence_floor: f64,
    pub host: HostStar,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            radius_scale: 11.0,
            duration_fraction: 0.05,
            high_snr: 10.0,
            low_snr: 4.0,
            high_snr_bonus: 0.10,
            low_snr_penalty: 0.15,
            confidence_ceiling: 0.95,
            confidence_floor: 0.50,
            host: HostStar::default(),
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.radius_scale > 0.0 && self.radius_scale.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "radius_scale must be positive, got {}",
                self.radius_scale
            )));
        }
        if !(self.duration_fraction > 0.0 && self.duration_fraction <= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "duration_fraction must be in (0, 1], got {}",
                self.duration_fraction
            )));
        }
        if !(self.confidence_floor <= self.confidence_ceiling
            && self.confidence_floor >= 0.0
            && self.confidence_ceiling <= 1.0)
        {
            return Err(Error::InvalidParameter(
                "confidence bounds must satisfy 0 <= floor <= ceiling <= 1".into(),
            ));
        }
        self.host.validate()
    }
}

/// Outcome of classifying an accepted detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub planet_type: PlanetType,
    /// Earth radii
    pub radius: f64,
    pub confidence: f64,
    /// Whether `planet_type` came from a caller-supplied hint
    pub hinted: bool,
}

/// Decision-tree planet classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Planet radius in Earth radii
    pub fn radius(&self, depth: f64) -> f64 {
        depth.max(0.0).sqrt() * self.config.radius_scale
    }

    /// Base label and confidence from the decision tree
    pub fn base_type(radius: f64, depth: f64, period: f64) -> (PlanetType, f64) {
        let long_temperate = (100.0..=400.0).contains(&period);
        if radius > 8.0 || depth > 0.015 {
            (PlanetType::GasGiant, 0.85)
        } else if radius > 4.0 {
            (PlanetType::MiniNeptune, 0.80)
        } else if radius > 2.5 {
            if long_temperate {
                (PlanetType::WaterWorld, 0.72)
            } else {
                (PlanetType::SuperEarth, 0.78)
            }
        } else if radius > 1.2 {
            if period < 10.0 {
                (PlanetType::HotRockyPlanet, 0.75)
            } else if long_temperate {
                (PlanetType::WaterWorld, 0.70)
            } else {
                (PlanetType::RockyPlanet, 0.76)
            }
        } else if period < 50.0 {
            (PlanetType::DesertPlanet, 0.70)
        } else {
            (PlanetType::TemperateRockyPlanet, 0.72)
        }
    }

    /// Raise confidence for strong signals and lower it for weak ones
    pub fn adjust_for_snr(&self, confidence: f64, snr: f64) -> f64 {
        let c = &self.config;
        if snr > c.high_snr {
            (confidence + c.high_snr_bonus).min(c.confidence_ceiling)
        } else if snr < c.low_snr {
            (confidence - c.low_snr_penalty).max(c.confidence_floor)
        } else {
            confidence
        }
    }

    /// Classify from derived features; a hint replaces only the label
    pub fn classify(
        &self,
        depth: f64,
        period: f64,
        snr: f64,
        hint: Option<PlanetType>,
    ) -> Classification {
        let radius = self.radius(depth);
        let (derived, base) = Self::base_type(radius, depth, period);
        Classification {
            planet_type: hint.unwrap_or(derived),
            radius,
            confidence: self.adjust_for_snr(base, snr),
            hinted: hint.is_some(),
        }
    }
}
