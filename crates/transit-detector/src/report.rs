//! Serializable report of a detection outcome
//!
//! The report has one flat shape for both outcomes. Rejections carry
//! `isExoplanet: false`, `planetType: "None"`, zeroed orbital fields and a
//! `note` naming the failed criterion.

use crate::properties::OrbitalProperties;
use crate::result::{DetectionMetrics, DetectionResult};
use serde::{Deserialize, Serialize};
use transit_core::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetrics {
    pub snr: f64,
    pub sde: f64,
    pub transit_count: usize,
    pub transit_shape: f64,
    pub instrumental_jumps: f64,
    pub linear_trend: f64,
    pub mad: f64,
    pub secondary_eclipse_depth: f64,
    pub false_alarm_probability: f64,
}

impl From<&DetectionMetrics> for ReportMetrics {
    fn from(m: &DetectionMetrics) -> Self {
        Self {
            snr: m.snr,
            sde: m.best_sde,
            transit_count: m.transit_count,
            transit_shape: m.transit_shape_score,
            instrumental_jumps: m.jump_ratio,
            linear_trend: m.linear_trend_r_squared,
            mad: m.noise,
            secondary_eclipse_depth: m.secondary_eclipse_depth,
            false_alarm_probability: m.false_alarm_probability,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub is_exoplanet: bool,
    pub probability: f64,
    pub confidence: f64,
    pub orbital_period: f64,
    pub planet_radius: f64,
    pub transit_depth: f64,
    /// Hours
    pub duration: f64,
    pub planet_type: String,
    pub planet_type_confidence: f64,
    pub metrics: ReportMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<OrbitalProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DetectionReport {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::analysis("report", format!("serialization failed: {e}")))
    }
}

impl From<&DetectionResult> for DetectionReport {
    fn from(result: &DetectionResult) -> Self {
        match result {
            DetectionResult::Acceptance(a) => Self {
                is_exoplanet: true,
                probability: a.probability,
                confidence: a.confidence,
                orbital_period: a.orbital_period,
                planet_radius: a.planet_radius,
                transit_depth: a.transit_depth,
                duration: a.duration_hours,
                planet_type: a.planet_type.label().to_string(),
                planet_type_confidence: a.planet_type_confidence,
                metrics: ReportMetrics::from(&a.metrics),
                properties: Some(a.properties),
                note: None,
            },
            DetectionResult::Rejection(r) => Self {
                is_exoplanet: false,
                probability: r.probability,
                confidence: r.confidence,
                orbital_period: 0.0,
                planet_radius: 0.0,
                transit_depth: r.metrics.transit_depth,
                duration: 0.0,
                planet_type: "None".to_string(),
                planet_type_confidence: 0.0,
                metrics: ReportMetrics::from(&r.metrics),
                properties: None,
                note: Some(format!("Rejected: {}", r.reason)),
            },
        }
    }
}

impl From<DetectionResult> for DetectionReport {
    fn from(result: DetectionResult) -> Self {
        Self::from(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::PlanetType;
    use crate::gate::{Criterion, GateFailure};
    use crate::properties::HostStar;
    use crate::result::{Acceptance, Rejection};

    fn metrics() -> DetectionMetrics {
        DetectionMetrics {
            transit_depth: 0.01,
            snr: 6.0,
            best_period: 5.0,
            best_sde: 30.0,
            transit_count: 120,
            jump_ratio: 5.0,
            linear_trend_r_squared: 0.02,
            transit_shape_score: 40.0,
            noise: 0.003,
            secondary_eclipse_depth: 0.0005,
            false_alarm_probability: 0.27,
        }
    }

    #[test]
    fn test_rejection_report_shape() {
        let result = DetectionResult::Rejection(Rejection {
            reason: GateFailure { criterion: Criterion::Sde, value: 0.0, threshold: 3.0 },
            probability: 0.3,
            confidence: 0.4,
            metrics: metrics(),
        });
        let report = DetectionReport::from(&result);
        assert!(!report.is_exoplanet);
        assert_eq!(report.planet_type, "None");
        assert_eq!(report.orbital_period, 0.0);
        assert_eq!(report.planet_radius, 0.0);
        assert_eq!(report.duration, 0.0);
        assert!(report.properties.is_none());
        assert!(report.note.as_deref().unwrap().contains("sde"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["isExoplanet"], false);
        assert_eq!(json["planetType"], "None");
        assert_eq!(json["metrics"]["transitCount"], 120);
        assert!(json.get("properties").is_none());
        assert!(json["note"].is_string());
    }

    #[test]
    fn test_acceptance_report_shape() {
        let result = DetectionResult::Acceptance(Acceptance {
            probability: 0.9,
            confidence: 0.92,
            orbital_period: 5.0,
            planet_radius: 1.1,
            transit_depth: 0.01,
            duration_hours: 6.0,
            planet_type: PlanetType::DesertPlanet,
            planet_type_confidence: 0.7,
            properties: OrbitalProperties::from_period(5.0, &HostStar::default()),
            metrics: metrics(),
        });
        let json = serde_json::to_value(DetectionReport::from(result)).unwrap();
        for key in [
            "isExoplanet",
            "probability",
            "confidence",
            "orbitalPeriod",
            "planetRadius",
            "transitDepth",
            "duration",
            "planetType",
            "planetTypeConfidence",
            "metrics",
            "properties",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        for key in [
            "snr",
            "sde",
            "transitCount",
            "transitShape",
            "instrumentalJumps",
            "linearTrend",
            "mad",
            "secondaryEclipseDepth",
            "falseAlarmProbability",
        ] {
            assert!(json["metrics"].get(key).is_some(), "missing metrics.{key}");
        }
        assert_eq!(json["planetType"], "Desert Planet");
        assert!(json.get("note").is_none());
        assert!(json["properties"]["semiMajorAxisAu"].as_f64().unwrap() > 0.0);
    }
}
