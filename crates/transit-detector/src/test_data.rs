//! Synthetic light curves for testing
//!
//! Seeded generators so every test and benchmark sees the same data.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use transit_core::{Sample, Series};
use transit_search::centered_phase;

/// Shape of an injected box transit train
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitParams {
    /// Orbital period (days)
    pub period: f64,
    /// Fractional depth of each dip
    pub depth: f64,
    /// Full dip width as a fraction of the period
    pub width_fraction: f64,
    /// Time of the first mid-transit (days)
    pub epoch: f64,
    /// Total length of the light curve (days)
    pub span: f64,
    /// Sampling interval (days)
    pub cadence: f64,
    /// Standard deviation of the white noise
    pub noise: f64,
}

impl Default for TransitParams {
    /// 50 days at 0.01 d cadence with 1% dips, 5% of a 5-day period wide
    fn default() -> Self {
        Self {
            period: 5.0,
            depth: 0.01,
            width_fraction: 0.05,
            epoch: 0.0,
            span: 50.0,
            cadence: 0.01,
            noise: 0.003,
        }
    }
}

/// Standard synthetic light curves
pub struct SyntheticLightCurves;

impl SyntheticLightCurves {
    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn generate(
        n: usize,
        cadence: f64,
        noise: f64,
        seed: u64,
        model: impl Fn(f64) -> f64,
    ) -> Series {
        let mut rng = Self::rng(seed);
        let normal = Normal::new(0.0, noise).unwrap();
        Series::from_samples(
            (0..n)
                .map(|i| {
                    let t = i as f64 * cadence;
                    Sample::new(t, model(t) + normal.sample(&mut rng))
                })
                .collect(),
        )
    }

    /// Periodic box dips plus Gaussian noise
    pub fn transit(params: &TransitParams, seed: u64) -> Series {
        let n = (params.span / params.cadence).round() as usize;
        let half_width = params.width_fraction / 2.0;
        Self::generate(n, params.cadence, params.noise, seed, |t| {
            let phase = centered_phase(t, params.epoch, params.period);
            if t >= params.epoch && phase.abs() < half_width {
                1.0 - params.depth
            } else {
                1.0
            }
        })
    }

    /// The default transit light curve with seed 42
    pub fn default_transit() -> Series {
        Self::transit(&TransitParams::default(), 42)
    }

    /// Constant unit flux
    pub fn flat(n: usize, cadence: f64) -> Series {
        Series::from_samples((0..n).map(|i| Sample::new(i as f64 * cadence, 1.0)).collect())
    }

    /// White noise about 1.0
    pub fn gaussian_noise(n: usize, cadence: f64, sigma: f64, seed: u64) -> Series {
        Self::generate(n, cadence, sigma, seed, |_| 1.0)
    }

    /// Linear drift of `slope` per day plus white noise
    pub fn ramp(n: usize, cadence: f64, slope: f64, sigma: f64, seed: u64) -> Series {
        Self::generate(n, cadence, sigma, seed, |t| 1.0 + slope * t)
    }

    /// A single flux step of `step` halfway through, plus white noise
    pub fn jump(n: usize, cadence: f64, step: f64, sigma: f64, seed: u64) -> Series {
        let at = n as f64 * cadence / 2.0;
        Self::generate(n, cadence, sigma, seed, |t| if t < at { 1.0 } else { 1.0 + step })
    }

    /// Render a series as `time,flux` text with a header row
    pub fn to_csv(series: &Series) -> String {
        let mut text = String::from("time,flux\n");
        for s in series.samples() {
            text.push_str(&format!("{},{}\n", s.time, s.flux));
        }
        text
    }
}
