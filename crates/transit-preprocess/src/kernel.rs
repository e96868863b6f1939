//! Windowed computation kernel
//!
//! Unlike a trailing rolling window, the detrender needs a window centered
//! on every sample. Windows are truncated at the series edges rather than
//! padded, so the first and last samples see fewer neighbours.

/// Centered, edge-truncated window over a slice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CenteredWindowKernel {
    half_width: usize,
}

impl CenteredWindowKernel {
    pub fn new(half_width: usize) -> Self {
        Self { half_width }
    }

    pub fn half_width(&self) -> usize {
        self.half_width
    }

    /// Index range `[i - half_width, i + half_width]` clipped to `0..len`
    pub fn bounds(&self, i: usize, len: usize) -> std::ops::Range<usize> {
        let start = i.saturating_sub(self.half_width);
        let end = (i + self.half_width + 1).min(len);
        start..end
    }

    /// Compute a statistic over the window centered on every index.
    ///
    /// `stat_fn` receives a scratch copy of the window it may reorder.
    pub fn compute_window_stats<F, R>(&self, data: &[f64], mut stat_fn: F) -> Vec<R>
    where
        F: FnMut(&mut [f64]) -> R,
    {
        let mut scratch = Vec::with_capacity(2 * self.half_width + 1);
        (0..data.len())
            .map(|i| {
                scratch.clear();
                scratch.extend_from_slice(&data[self.bounds(i, data.len())]);
                stat_fn(&mut scratch)
            })
            .collect()
    }
}
