//! Trial period grids

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Linear grid of trial periods over `[min_period, max_period]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodGrid {
    pub min_period: f64,
    pub max_period: f64,
    pub count: usize,
}

impl PeriodGrid {
    pub fn new(min_period: f64, max_period: f64, count: usize) -> Self {
        Self {
            min_period,
            max_period,
            count,
        }
    }

    /// Grid for a light curve spanning `time_span` days: the upper bound is
    /// capped at half the span so every trial period repeats at least twice.
    pub fn for_time_span(min_period: f64, max_period: f64, count: usize, time_span: f64) -> Self {
        Self::new(min_period, max_period.min(time_span / 2.0), count)
    }

    /// An inverted or NaN range yields no periods at all
    pub fn is_empty(&self) -> bool {
        self.count == 0
            || matches!(
                self.max_period.partial_cmp(&self.min_period),
                None | Some(Ordering::Less)
            )
    }

    /// Evenly spaced periods, ascending, always inside `[min, max]`
    pub fn periods(&self) -> Vec<f64> {
        if self.is_empty() {
            return Vec::new();
        }
        if self.count == 1 {
            return vec![self.min_period];
        }
        let step = (self.max_period - self.min_period) / (self.count - 1) as f64;
        (0..self.count)
            .map(|i| (self.min_period + i as f64 * step).min(self.max_period))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_grid() {
        let periods = PeriodGrid::new(0.5, 25.0, 300).periods();
        assert_eq!(periods.len(), 300);
        assert_eq!(periods[0], 0.5);
        assert_relative_eq!(periods[299], 25.0);
        assert!(periods.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_span_caps_max_period() {
        let grid = PeriodGrid::for_time_span(0.5, 50.0, 300, 30.0);
        assert_eq!(grid.max_period, 15.0);
        let grid = PeriodGrid::for_time_span(0.5, 50.0, 300, 400.0);
        assert_eq!(grid.max_period, 50.0);
    }

    #[test]
    fn test_short_span_gives_empty_grid() {
        let grid = PeriodGrid::for_time_span(0.5, 50.0, 300, 0.6);
        assert!(grid.is_empty());
        assert!(grid.periods().is_empty());
    }

    #[test]
    fn test_degenerate_range() {
        let periods = PeriodGrid::new(0.5, 0.5, 300).periods();
        assert_eq!(periods.len(), 300);
        assert!(periods.iter().all(|&p| p == 0.5));
        assert_eq!(PeriodGrid::new(0.5, 5.0, 1).periods(), vec![0.5]);
        assert!(PeriodGrid::new(0.5, 5.0, 0).periods().is_empty());
    }
}
