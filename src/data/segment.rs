use super::model::{ExponentialCurve, Segment};

/// One segment per quantile: `[previous boundary, q_i]`, starting at 0.
///
/// Each segment selects the grid points `x` with `start <= x <= end`.
/// The grid is ascending, so the selection is a contiguous index range.
pub fn segments(curve: &ExponentialCurve) -> Vec<Segment> {
    let mut start = 0.0;
    curve
        .quantiles
        .iter()
        .enumerate()
        .map(|(index, &end)| {
            let segment = Segment {
                index,
                start,
                end,
                grid_range: select(&curve.grid, start, end),
            };
            start = end;
            segment
        })
        .collect()
}

fn select(grid: &[f64], start: f64, end: f64) -> std::ops::Range<usize> {
    let lo = grid.partition_point(|&x| x < start);
    let hi = grid.partition_point(|&x| x <= end);
    lo..hi.max(lo)
}
