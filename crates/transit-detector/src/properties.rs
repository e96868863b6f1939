//! Orbital properties derived from the period
//!
//! Kepler's third law with the host mass in solar masses and the period in
//! years gives the semi-major axis in AU. The equilibrium temperature assumes
//! zero albedo and full heat redistribution.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use transit_core::{Error, Result};

const DAYS_PER_YEAR: f64 = 365.25;
const SOLAR_RADII_PER_AU: f64 = 215.0;
const KM_PER_AU: f64 = 149.6e6;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Host star assumed when deriving orbital properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostStar {
    /// Solar masses
    pub mass: f64,
    /// Solar radii
    pub radius: f64,
    /// Effective temperature (K)
    pub temperature: f64,
}

impl Default for HostStar {
    fn default() -> Self {
        Self {
            mass: 1.0,
            radius: 1.0,
            temperature: 5778.0,
        }
    }
}

impl HostStar {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("mass", self.mass),
            ("radius", self.radius),
            ("temperature", self.temperature),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(Error::InvalidParameter(format!(
                    "host star {name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalProperties {
    pub semi_major_axis_au: f64,
    pub equilibrium_temp_k: f64,
    pub orbital_velocity_kms: f64,
}

impl OrbitalProperties {
    /// Derive properties for an orbit of `period_days` around `host`
    pub fn from_period(period_days: f64, host: &HostStar) -> Self {
        let years = period_days / DAYS_PER_YEAR;
        let a = (years * years * host.mass).cbrt();
        let equilibrium_temp_k = if a > 0.0 {
            host.temperature * (host.radius / (2.0 * a * SOLAR_RADII_PER_AU)).sqrt()
        } else {
            0.0
        };
        let orbital_velocity_kms = if period_days > 0.0 {
            2.0 * PI * a * KM_PER_AU / (period_days * SECONDS_PER_DAY)
        } else {
            0.0
        };

        Self {
            semi_major_axis_au: a,
            equilibrium_temp_k,
            orbital_velocity_kms,
        }
    }
}
