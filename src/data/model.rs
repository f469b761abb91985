use std::ops::Range;

use serde::Serialize;

// ---------------------------------------------------------------------------
// NumericSeries – the values read from the input file
// ---------------------------------------------------------------------------

/// Values parsed from the input, in file order.
///
/// The first value is the rate of the distribution, everything after it is
/// a quantile boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericSeries {
    values: Vec<f64>,
}

impl NumericSeries {
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was parsed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for NumericSeries {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

// ---------------------------------------------------------------------------
// ExponentialCurve – sampled density over the plotting domain
// ---------------------------------------------------------------------------

/// Exponential density `rate * exp(-rate * x)` sampled on an evenly spaced
/// grid from 0 to `x_max`.
#[derive(Debug, Clone, Serialize)]
pub struct ExponentialCurve {
    pub rate: f64,
    /// Boundaries in the order they are shaded.
    pub quantiles: Vec<f64>,
    /// Right end of the grid: the last quantile plus 5 %.
    pub x_max: f64,
    #[serde(skip)]
    pub grid: Vec<f64>,
    /// Same length as `grid`.
    #[serde(skip)]
    pub pdf: Vec<f64>,
}

impl ExponentialCurve {
    /// Largest sampled density value (the value at x = 0 for a valid rate).
    pub fn y_max(&self) -> f64 {
        self.pdf.iter().copied().fold(0.0, f64::max)
    }

    /// `(x, pdf(x))` pairs for a range of grid indices.
    pub fn points(&self, range: Range<usize>) -> Vec<(f64, f64)> {
        self.grid[range.clone()]
            .iter()
            .copied()
            .zip(self.pdf[range].iter().copied())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Segment – one shaded interval between two boundaries
// ---------------------------------------------------------------------------

/// The interval `[start, end]` and the grid points it selects.
///
/// `grid_range` is empty when no grid point falls inside the interval
/// (repeated or out-of-order boundaries).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub grid_range: Range<usize>,
}

impl Segment {
    pub fn is_empty(&self) -> bool {
        self.grid_range.is_empty()
    }

    /// Width along x actually covered by the selected grid points.
    pub fn shaded_width(&self, grid: &[f64]) -> f64 {
        match self.grid_range.len() {
            0 | 1 => 0.0,
            _ => grid[self.grid_range.end - 1] - grid[self.grid_range.start],
        }
    }
}

// ---------------------------------------------------------------------------
// CurveSummary – what `--summary` prints
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CurveSummary<'a> {
    #[serde(flatten)]
    pub curve: &'a ExponentialCurve,
    pub y_max: f64,
    pub segments: &'a [Segment],
}

impl<'a> CurveSummary<'a> {
    pub fn new(curve: &'a ExponentialCurve, segments: &'a [Segment]) -> Self {
        Self {
            curve,
            y_max: curve.y_max(),
            segments,
        }
    }
}
