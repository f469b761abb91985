use std::path::Path;

use anyhow::{Context, Result};

use crate::config::PipelineOptions;
use crate::data::curve::build_curve;
use crate::data::loader::load_series;
use crate::data::model::{CurveSummary, ExponentialCurve, Segment};
use crate::data::segment::segments;
use crate::render::{title_for, Figure};

/// Result of one read → compute → segment pass over an input file.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub curve: ExponentialCurve,
    pub segments: Vec<Segment>,
    pub figure: Figure,
}

impl Analysis {
    pub fn summary(&self) -> CurveSummary<'_> {
        CurveSummary::new(&self.curve, &self.segments)
    }
}

/// Load `input`, build the curve and lay out the figure.
pub fn analyze(input: &Path, options: &PipelineOptions) -> Result<Analysis> {
    let series = load_series(input, &options.load)
        .with_context(|| format!("loading {}", input.display()))?;
    let curve = build_curve(&series, &options.curve)
        .with_context(|| format!("building curve from {}", input.display()))?;
    let segments = segments(&curve);
    for segment in &segments {
        log::debug!(
            "segment {}: [{}, {}], {} grid points, shaded width {:.4}",
            segment.index,
            segment.start,
            segment.end,
            segment.grid_range.len(),
            segment.shaded_width(&curve.grid)
        );
    }
    let figure = Figure::build(&curve, &segments, title_for(input));

    log::info!(
        "{} segments, {} shaded",
        segments.len(),
        figure.fills.len()
    );

    Ok(Analysis {
        curve,
        segments,
        figure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::curve::CurveError;

    fn write_input(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("expo-bins-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_round_trip_scenario() {
        let path = write_input("round-trip.csv", "2.0\n\n1.0\n2.0\n3.0\n");
        let analysis = analyze(&path, &PipelineOptions::default()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(analysis.curve.rate, 2.0);
        assert_eq!(analysis.curve.quantiles, vec![1.0, 2.0, 3.0]);
        assert!((analysis.curve.x_max - 3.15).abs() < 1e-12);
        let bounds: Vec<(f64, f64)> = analysis.segments.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(bounds, vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
        assert_eq!(analysis.figure.fills.len(), 3);
    }

    #[test]
    fn test_malformed_rows_scenario() {
        let path = write_input("malformed.csv", "abc\n5.0\nx,y\n1.0\n");
        let analysis = analyze(&path, &PipelineOptions::default()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(analysis.curve.rate, 5.0);
        assert_eq!(analysis.curve.quantiles, vec![1.0]);
        assert_eq!(analysis.segments.len(), 1);
        assert_eq!((analysis.segments[0].start, analysis.segments[0].end), (0.0, 1.0));
    }

    #[test]
    fn test_rate_only_is_insufficient_input() {
        let path = write_input("rate-only.csv", "5.0\n");
        let err = analyze(&path, &PipelineOptions::default()).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            err.downcast_ref::<CurveError>(),
            Some(&CurveError::NoQuantiles)
        );
    }

    #[test]
    fn test_nan_boundary_is_rejected() {
        let path = write_input("nan.csv", "1.0\n1.0\nnan\n2.0\n");
        let err = analyze(&path, &PipelineOptions::default()).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            err.downcast_ref::<CurveError>(),
            Some(CurveError::NonFiniteQuantile { index: 1, .. })
        ));
    }

    #[test]
    fn test_summary_json() {
        let path = write_input("summary.csv", "2.0\n1.0\n1.0\n3.0\n");
        let analysis = analyze(&path, &PipelineOptions::default()).unwrap();
        std::fs::remove_file(&path).ok();

        let json = serde_json::to_value(analysis.summary()).unwrap();
        assert_eq!(json["rate"], 2.0);
        assert_eq!(json["quantiles"], serde_json::json!([1.0, 1.0, 3.0]));
        assert_eq!(json["y_max"], 2.0);
        assert_eq!(json["segments"].as_array().unwrap().len(), 3);
        assert_eq!(json["segments"][1]["start"], 1.0);
        assert!(json.get("grid").is_none());
    }
}
