use thiserror::Error;

use super::model::{ExponentialCurve, NumericSeries};

/// Number of sample points on the plotting domain.
pub const GRID_POINTS: usize = 2000;
/// The domain ends this factor past the last quantile.
pub const DOMAIN_PADDING: f64 = 1.05;

#[derive(Debug, Error, PartialEq)]
pub enum CurveError {
    #[error("input contains no values; expected a rate followed by quantiles")]
    MissingRate,
    #[error("insufficient input: a rate was read but no quantiles follow it")]
    NoQuantiles,
    #[error("rate must be a positive finite number, got {0}")]
    InvalidRate(f64),
    #[error("quantile q[{index}] = {value} is not a finite number")]
    NonFiniteQuantile { index: usize, value: f64 },
    #[error("quantiles are not ascending: q[{index}] = {value} is below its predecessor")]
    NotAscending { index: usize, value: f64 },
    #[error("plotting domain [0, {0}] is empty; the last quantile must be positive")]
    EmptyDomain(f64),
}

/// What to do with quantiles that are not in ascending order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuantileOrder {
    /// Shade in file order. Out-of-order input only produces a warning.
    #[default]
    AsGiven,
    /// Sort ascending before shading.
    Sorted,
    /// Reject out-of-order input.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurveOptions {
    pub order: QuantileOrder,
}

/// Split the series into rate and quantiles and sample the density.
pub fn build_curve(
    series: &NumericSeries,
    options: &CurveOptions,
) -> Result<ExponentialCurve, CurveError> {
    let (&rate, rest) = series
        .values()
        .split_first()
        .ok_or(CurveError::MissingRate)?;
    if rest.is_empty() {
        return Err(CurveError::NoQuantiles);
    }
    if !rate.is_finite() || rate <= 0.0 {
        return Err(CurveError::InvalidRate(rate));
    }
    if let Some((index, &value)) = rest.iter().enumerate().find(|(_, q)| !q.is_finite()) {
        return Err(CurveError::NonFiniteQuantile { index, value });
    }

    let quantiles = order_quantiles(rest, options.order)?;

    let last = quantiles[quantiles.len() - 1];
    let x_max = last * DOMAIN_PADDING;
    if !x_max.is_finite() || x_max <= 0.0 {
        return Err(CurveError::EmptyDomain(x_max));
    }

    let grid = linspace(0.0, x_max, GRID_POINTS);
    let pdf = grid.iter().map(|&x| density(rate, x)).collect();

    log::info!(
        "Exponential curve: rate = {rate}, {} quantiles, domain [0, {x_max:.4}]",
        quantiles.len()
    );

    Ok(ExponentialCurve {
        rate,
        quantiles,
        x_max,
        grid,
        pdf,
    })
}

/// Exponential density at `x`.
pub fn density(rate: f64, x: f64) -> f64 {
    rate * (-rate * x).exp()
}

fn order_quantiles(quantiles: &[f64], order: QuantileOrder) -> Result<Vec<f64>, CurveError> {
    let descent = quantiles
        .windows(2)
        .position(|w| w[1] < w[0])
        .map(|i| i + 1);

    match (order, descent) {
        (_, None) => Ok(quantiles.to_vec()),
        (QuantileOrder::AsGiven, Some(index)) => {
            log::warn!(
                "Quantiles are not ascending (q[{index}] = {}); shaded segments will overlap",
                quantiles[index]
            );
            Ok(quantiles.to_vec())
        }
        (QuantileOrder::Sorted, Some(_)) => {
            let mut sorted = quantiles.to_vec();
            sorted.sort_by(f64::total_cmp);
            Ok(sorted)
        }
        (QuantileOrder::Strict, Some(index)) => Err(CurveError::NotAscending {
            index,
            value: quantiles[index],
        }),
    }
}

/// `n` evenly spaced values from `start` to `end`, both included.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(values: &[f64]) -> Result<ExponentialCurve, CurveError> {
        build_curve(&NumericSeries::from(values.to_vec()), &CurveOptions::default())
    }

    #[test]
    fn test_rate_and_quantiles_split() {
        let c = curve(&[2.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(c.rate, 2.0);
        assert_eq!(c.quantiles, vec![1.0, 2.0, 3.0]);
        assert!((c.x_max - 3.15).abs() < 1e-12);
    }

    #[test]
    fn test_grid_shape() {
        let c = curve(&[2.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(c.grid.len(), GRID_POINTS);
        assert_eq!(c.pdf.len(), GRID_POINTS);
        assert_eq!(c.grid[0], 0.0);
        assert_eq!(c.grid[GRID_POINTS - 1], c.x_max);
        assert!(c.grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_x_max_uses_last_quantile() {
        let c = curve(&[1.0, 0.5, 4.0]).unwrap();
        assert_eq!(c.x_max, 4.0 * DOMAIN_PADDING);
    }

    #[test]
    fn test_pdf_non_negative_and_decreasing() {
        let c = curve(&[0.7, 0.3, 1.1, 5.0, 12.0]).unwrap();
        assert!(c.pdf.iter().all(|&y| y >= 0.0));
        assert!(c.pdf.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(c.pdf[0], 0.7);
        assert_eq!(c.y_max(), 0.7);
    }

    #[test]
    fn test_pdf_matches_density() {
        let c = curve(&[5.0, 1.0]).unwrap();
        for (&x, &y) in c.grid.iter().zip(&c.pdf).step_by(97) {
            assert!((y - 5.0 * (-5.0 * x).exp()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(curve(&[]).unwrap_err(), CurveError::MissingRate);
    }

    #[test]
    fn test_rate_without_quantiles() {
        assert_eq!(curve(&[5.0]).unwrap_err(), CurveError::NoQuantiles);
    }

    #[test]
    fn test_invalid_rate() {
        assert_eq!(curve(&[0.0, 1.0]).unwrap_err(), CurveError::InvalidRate(0.0));
        assert_eq!(curve(&[-2.0, 1.0]).unwrap_err(), CurveError::InvalidRate(-2.0));
        assert!(matches!(
            curve(&[f64::NAN, 1.0]).unwrap_err(),
            CurveError::InvalidRate(_)
        ));
    }

    #[test]
    fn test_non_finite_quantile() {
        assert!(matches!(
            curve(&[1.0, 1.0, f64::NAN, 2.0]).unwrap_err(),
            CurveError::NonFiniteQuantile { index: 1, value } if value.is_nan()
        ));
        assert_eq!(
            curve(&[1.0, 1.0, f64::INFINITY]).unwrap_err(),
            CurveError::NonFiniteQuantile {
                index: 1,
                value: f64::INFINITY
            }
        );
        for order in [QuantileOrder::Sorted, QuantileOrder::Strict] {
            let options = CurveOptions { order };
            let err = build_curve(&NumericSeries::from(vec![1.0, f64::NAN, 2.0]), &options);
            assert!(matches!(err, Err(CurveError::NonFiniteQuantile { index: 0, .. })));
        }
    }

    #[test]
    fn test_non_positive_last_quantile() {
        assert!(matches!(
            curve(&[1.0, 0.0]).unwrap_err(),
            CurveError::EmptyDomain(_)
        ));
    }

    #[test]
    fn test_unordered_kept_as_given() {
        let c = curve(&[1.0, 3.0, 1.0, 2.0]).unwrap();
        assert_eq!(c.quantiles, vec![3.0, 1.0, 2.0]);
        assert_eq!(c.x_max, 2.0 * DOMAIN_PADDING);
    }

    #[test]
    fn test_unordered_sorted_on_request() {
        let options = CurveOptions {
            order: QuantileOrder::Sorted,
        };
        let c = build_curve(&NumericSeries::from(vec![1.0, 3.0, 1.0, 2.0]), &options).unwrap();
        assert_eq!(c.quantiles, vec![1.0, 2.0, 3.0]);
        assert_eq!(c.x_max, 3.0 * DOMAIN_PADDING);
    }

    #[test]
    fn test_unordered_rejected_when_strict() {
        let options = CurveOptions {
            order: QuantileOrder::Strict,
        };
        let err = build_curve(&NumericSeries::from(vec![1.0, 1.0, 3.0, 2.0]), &options).unwrap_err();
        assert_eq!(err, CurveError::NotAscending { index: 2, value: 2.0 });
    }

    #[test]
    fn test_strict_allows_repeated_boundaries() {
        let options = CurveOptions {
            order: QuantileOrder::Strict,
        };
        assert!(build_curve(&NumericSeries::from(vec![1.0, 1.0, 1.0, 2.0]), &options).is_ok());
    }

    #[test]
    fn test_linspace_endpoints() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
