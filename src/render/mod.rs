//! Backend-neutral description of the chart.
//!
//! ```text
//!   ExponentialCurve + Segments + palette
//!                 │
//!                 ▼
//!            ┌──────────┐
//!            │  Figure   │  curve line, shaded fills, labels, ranges
//!            └──────────┘
//!             │        │
//!             ▼        ▼
//!        egui_plot   plotters → PNG
//! ```

pub mod png;

use std::ops::Range;

use palette::Srgb;

use crate::color::segment_palette;
use crate::data::model::{ExponentialCurve, Segment};

pub const CURVE_LABEL: &str = "Exponential PDF";
pub const X_LABEL: &str = "t";
pub const Y_LABEL: &str = "f_X(t)";
/// Opacity of the shaded segments.
pub const FILL_ALPHA: f64 = 0.7;
/// Axis ranges extend this factor past the data.
const AXIS_PADDING: f64 = 1.05;

/// A labelled polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub color: Srgb<u8>,
}

/// Area between a polyline and y = 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub segment: usize,
    pub points: Vec<(f64, f64)>,
    pub color: Srgb<u8>,
    pub alpha: f64,
}

/// Everything a backend needs to draw the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub curve: Trace,
    pub fills: Vec<Fill>,
}

/// The drawing primitives a plotting backend has to provide.
pub trait Canvas {
    type Error;

    fn draw_line(&mut self, line: &Trace) -> Result<(), Self::Error>;

    fn fill_region(&mut self, fill: &Fill) -> Result<(), Self::Error>;
}

impl Figure {
    /// Pair each segment with its palette color and cut the curve into the
    /// shaded pieces. Segments that select no grid points get no fill.
    pub fn build(curve: &ExponentialCurve, segments: &[Segment], title: impl Into<String>) -> Self {
        let palette = segment_palette(segments.len());

        let fills = segments
            .iter()
            .zip(palette)
            .filter(|(segment, _)| !segment.is_empty())
            .map(|(segment, color)| Fill {
                segment: segment.index,
                points: curve.points(segment.grid_range.clone()),
                color,
                alpha: FILL_ALPHA,
            })
            .collect();

        Figure {
            title: title.into(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            x_range: 0.0..curve.x_max * AXIS_PADDING,
            y_range: 0.0..curve.y_max() * AXIS_PADDING,
            curve: Trace {
                label: CURVE_LABEL.to_string(),
                points: curve.points(0..curve.grid.len()),
                color: Srgb::new(0, 0, 0),
            },
            fills,
        }
    }

    /// Draw the fills, then the curve on top of them.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<(), C::Error> {
        for fill in &self.fills {
            canvas.fill_region(fill)?;
        }
        canvas.draw_line(&self.curve)
    }
}

/// Default chart title for an input file.
pub fn title_for(source: &std::path::Path) -> String {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());
    format!("Exponential distribution with quantiles from {name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::curve::{build_curve, CurveOptions};
    use crate::data::model::NumericSeries;
    use crate::data::segment::segments;

    #[derive(Debug, PartialEq)]
    enum Call {
        Line(String),
        Fill(usize),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Canvas for Recorder {
        type Error = ();

        fn draw_line(&mut self, line: &Trace) -> Result<(), ()> {
            self.calls.push(Call::Line(line.label.clone()));
            Ok(())
        }

        fn fill_region(&mut self, fill: &Fill) -> Result<(), ()> {
            self.calls.push(Call::Fill(fill.segment));
            Ok(())
        }
    }

    fn figure(values: &[f64]) -> Figure {
        let curve =
            build_curve(&NumericSeries::from(values.to_vec()), &CurveOptions::default()).unwrap();
        let segs = segments(&curve);
        Figure::build(&curve, &segs, "test")
    }

    #[test]
    fn test_one_fill_per_segment() {
        let fig = figure(&[2.0, 1.0, 2.0, 3.0]);
        assert_eq!(fig.fills.len(), 3);
        assert!(fig.fills.iter().all(|f| f.alpha == FILL_ALPHA));
        assert_eq!(fig.curve.points.len(), 2000);
        assert_eq!(fig.curve.label, CURVE_LABEL);
    }

    #[test]
    fn test_fill_colors_follow_palette() {
        let fig = figure(&[2.0, 1.0, 2.0, 3.0]);
        let colors: Vec<Srgb<u8>> = fig.fills.iter().map(|f| f.color).collect();
        assert_eq!(colors, segment_palette(3));
    }

    #[test]
    fn test_fills_stay_inside_their_segment() {
        let fig = figure(&[2.0, 1.0, 2.0, 3.0]);
        let bounds = [(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)];
        for (fill, (lo, hi)) in fig.fills.iter().zip(bounds) {
            assert!(fill.points.iter().all(|&(x, _)| x >= lo && x <= hi));
        }
    }

    #[test]
    fn test_empty_segment_is_skipped() {
        let fig = figure(&[1.0, 3.0, 1.0, 2.0]);
        let drawn: Vec<usize> = fig.fills.iter().map(|f| f.segment).collect();
        assert_eq!(drawn, vec![0, 2]);
        // Colors are still assigned by segment position.
        assert_eq!(fig.fills[1].color, segment_palette(3)[2]);
    }

    #[test]
    fn test_axis_ranges() {
        let fig = figure(&[2.0, 1.0, 2.0, 3.0]);
        assert_eq!(fig.x_range.start, 0.0);
        assert!((fig.x_range.end - 3.0 * 1.05 * 1.05).abs() < 1e-12);
        assert_eq!(fig.y_range, 0.0..2.0 * 1.05);
    }

    #[test]
    fn test_draw_order() {
        let fig = figure(&[5.0, 0.2, 0.4]);
        let mut recorder = Recorder::default();
        fig.draw(&mut recorder).unwrap();
        assert_eq!(
            recorder.calls,
            vec![
                Call::Fill(0),
                Call::Fill(1),
                Call::Line(CURVE_LABEL.to_string())
            ]
        );
    }

    #[test]
    fn test_title_uses_file_name() {
        let title = title_for(std::path::Path::new("data/run3/bins.csv"));
        assert_eq!(title, "Exponential distribution with quantiles from bins.csv");
    }
}
