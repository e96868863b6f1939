//! Instrumental artifact diagnostics
//!
//! Two cheap checks run on the clipped, normalized light curve before it is
//! detrended (the detrender would otherwise hide exactly what they look for):
//!
//! - **jump ratio**: largest step between consecutive samples relative to the
//!   typical step. Pointing jumps and segment seams give huge ratios.
//! - **linear trend R²**: how much of the flux variance a straight line in
//!   time explains. Strong drifts are instrumental, not planetary.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use transit_core::utils::{max_value, mean, median_in_place};
use transit_core::{Error, Result, Series};

/// Artifact metrics of one light curve
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ArtifactMetrics {
    pub jump_ratio: f64,
    pub linear_trend_r_squared: f64,
}

/// `max(|Δflux|) / median(|Δflux|)`, 0 when the typical step is 0
pub fn jump_ratio(series: &Series) -> f64 {
    let mut steps: Vec<f64> = series
        .samples()
        .windows(2)
        .map(|w| (w[1].flux - w[0].flux).abs())
        .collect();

    let Some(largest) = max_value(&steps) else {
        return 0.0;
    };
    match median_in_place(&mut steps) {
        Some(typical) if typical > 0.0 => largest / typical,
        _ => 0.0,
    }
}

/// Least-squares straight-line fit of flux against time
///
/// Time is centered before the fit so the normal equations stay well
/// conditioned for BJD-sized timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearTrendKernel;

impl LinearTrendKernel {
    pub fn new() -> Self {
        Self
    }

    /// Design matrix with columns `[1, t - mean(t)]`
    pub fn build_design_matrix(&self, time: &[f64], time_mean: f64) -> DMatrix<f64> {
        DMatrix::from_fn(time.len(), 2, |i, j| if j == 0 { 1.0 } else { time[i] - time_mean })
    }

    /// Fit `flux = intercept + slope * (t - mean(t))`
    ///
    /// Returns `None` when the system is singular (constant time).
    pub fn fit(&self, time: &[f64], flux: &[f64]) -> Option<(f64, f64)> {
        if time.len() != flux.len() || time.len() < 2 {
            return None;
        }
        let design = self.build_design_matrix(time, mean(time));
        let y = DVector::from_column_slice(flux);
        let xtx = design.transpose() * &design;
        let xty = design.transpose() * y;
        let coeffs = xtx.cholesky()?.solve(&xty);
        Some((coeffs[0], coeffs[1]))
    }

    /// Coefficient of determination of the straight-line fit
    ///
    /// 0 when either variance is 0 or the fit is singular; clamped to
    /// `[0, 1]` against rounding.
    pub fn r_squared(&self, time: &[f64], flux: &[f64]) -> f64 {
        if time.len() != flux.len() || time.len() < 2 {
            return 0.0;
        }
        let t_mean = mean(time);
        let f_mean = mean(flux);
        let var_t: f64 = time.iter().map(|t| (t - t_mean).powi(2)).sum();
        let ss_tot: f64 = flux.iter().map(|f| (f - f_mean).powi(2)).sum();
        if var_t == 0.0 || ss_tot == 0.0 {
            return 0.0;
        }

        let Some((intercept, slope)) = self.fit(time, flux) else {
            return 0.0;
        };
        let ss_res: f64 = time
            .iter()
            .zip(flux)
            .map(|(t, f)| (f - (intercept + slope * (t - t_mean))).powi(2))
            .sum();

        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    }
}

/// Compute both artifact metrics for a clipped, normalized series
#[instrument(level = "debug", skip(series), fields(n = series.len()))]
pub fn detect_artifacts(series: &Series) -> Result<ArtifactMetrics> {
    let time: Vec<f64> = series.times().collect();
    let flux = series.flux_vec();

    let metrics = ArtifactMetrics {
        jump_ratio: jump_ratio(series),
        linear_trend_r_squared: LinearTrendKernel::new().r_squared(&time, &flux),
    };

    if !metrics.jump_ratio.is_finite() {
        return Err(Error::non_finite("artifacts", "jump ratio"));
    }
    if !metrics.linear_trend_r_squared.is_finite() {
        return Err(Error::non_finite("artifacts", "linear trend R²"));
    }

    debug!(
        jump_ratio = metrics.jump_ratio,
        r_squared = metrics.linear_trend_r_squared,
        "artifact metrics"
    );
    Ok(metrics)
}
