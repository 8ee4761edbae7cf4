//! Equal-width histogram binning.

use serde::Serialize;

/// One histogram bin. `end` is exclusive except for the last bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    /// Lower edge.
    pub start: f64,
    /// Upper edge.
    pub end: f64,
    /// Number of values in the bin.
    pub count: usize,
}

/// Counts of values over `bins` equal-width intervals spanning the data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// Bin edges, `bins + 1` entries.
    pub edges: Vec<f64>,
    /// Count per bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` intervals over their own `[min, max]`.
    ///
    /// Non-finite values are ignored. A constant sample spans
    /// `[v - 0.5, v + 0.5]`; an empty one spans `[0, 1]`.
    pub fn compute(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

        let (lo, hi) = match finite.iter().copied().fold(None, |acc: Option<(f64, f64)>, v| {
            Some(acc.map_or((v, v), |(lo, hi)| (lo.min(v), hi.max(v))))
        }) {
            None => (0.0, 1.0),
            Some((lo, hi)) if lo == hi => (lo - 0.5, hi + 0.5),
            Some(range) => range,
        };

        // Operands are scaled before subtracting so ranges wider than
        // f64::MAX stay finite.
        #[allow(clippy::cast_precision_loss)]
        let n = bins as f64;
        let width = hi / n - lo / n;
        #[allow(clippy::cast_precision_loss)]
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0usize; bins];
        for v in finite {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let idx = ((v / width - lo / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Self { edges, counts }
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether there are no bins.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest bin count.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Lowest and highest edge.
    pub fn range(&self) -> (f64, f64) {
        (
            self.edges.first().copied().unwrap_or(0.0),
            self.edges.last().copied().unwrap_or(1.0),
        )
    }

    /// Bins with their edges.
    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        self.counts.iter().enumerate().map(|(i, &count)| Bin {
            start: self.edges[i],
            end: self.edges[i + 1],
            count,
        })
    }

    /// Outline of the histogram as a closed step path starting and ending
    /// on the baseline.
    pub fn step_outline(&self) -> Vec<(f64, f64)> {
        let mut points = Vec::with_capacity(self.len() * 2 + 2);
        let (lo, hi) = self.range();
        points.push((lo, 0.0));
        for bin in self.bins() {
            #[allow(clippy::cast_precision_loss)]
            let height = bin.count as f64;
            points.push((bin.start, height));
            points.push((bin.end, height));
        }
        points.push((hi, 0.0));
        points
    }
}
