//! Types produced by the period search

use std::fmt;

/// Score of a single trial period that had enough in-transit samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodScore {
    /// Trial period (days)
    pub period: f64,
    /// Signal detection efficiency
    pub sde: f64,
    /// Number of in-transit samples at this period
    pub transit_count: usize,
    /// `1 - min(in-transit flux)`
    pub depth: f64,
    /// Median flux outside the transit window
    pub out_of_transit_median: f64,
}

/// One row of the periodogram; `score` is `None` when the period was
/// skipped for lack of in-transit samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodogramPoint {
    pub period: f64,
    pub score: Option<PeriodScore>,
}

impl PeriodogramPoint {
    /// SDE at this period, 0 when skipped
    pub fn sde(&self) -> f64 {
        self.score.map_or(0.0, |s| s.sde)
    }
}

/// Result of scanning a period grid
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PeriodSearchResult {
    best: Option<PeriodScore>,
    periodogram: Vec<PeriodogramPoint>,
}

impl PeriodSearchResult {
    pub fn new(best: Option<PeriodScore>, periodogram: Vec<PeriodogramPoint>) -> Self {
        Self { best, periodogram }
    }

    /// Highest-SDE period, the lowest one on ties
    pub fn best(&self) -> Option<&PeriodScore> {
        self.best.as_ref()
    }

    /// Best period, 0 when nothing qualified
    pub fn best_period(&self) -> f64 {
        self.best.map_or(0.0, |s| s.period)
    }

    /// Best SDE, 0 when nothing qualified
    pub fn best_sde(&self) -> f64 {
        self.best.map_or(0.0, |s| s.sde)
    }

    /// In-transit sample count at the best period, 0 when nothing qualified
    pub fn best_transit_count(&self) -> usize {
        self.best.map_or(0, |s| s.transit_count)
    }

    /// Every evaluated trial period, ascending
    pub fn periodogram(&self) -> &[PeriodogramPoint] {
        &self.periodogram
    }

    pub fn periods_evaluated(&self) -> usize {
        self.periodogram.len()
    }
}

impl fmt::Display for PeriodSearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Period Search Result:")?;
        writeln!(f, "  Periods evaluated: {}", self.periods_evaluated())?;
        match &self.best {
            Some(best) => writeln!(
                f,
                "  Best period: {:.4} d (SDE {:.3}, {} in-transit samples, depth {:.5})",
                best.period, best.sde, best.transit_count, best.depth
            ),
            None => writeln!(f, "  No period had enough in-transit samples"),
        }
    }
}
