//! Headless rendering: Figure → PNG bytes via plotters.

use std::path::Path;

use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use thiserror::Error;

use super::{Canvas, Figure, Fill, Trace};

/// Reference figure size (8 × 5 inches at 100 dpi).
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 500;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing chart: {0}")]
    Draw(String),
    #[error("encoding PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn draw_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Draw(e.to_string())
}

type Chart<'a, 'b> = ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

struct ChartCanvas<'c, 'a, 'b> {
    chart: &'c mut Chart<'a, 'b>,
}

fn rgb(color: palette::Srgb<u8>) -> RGBColor {
    RGBColor(color.red, color.green, color.blue)
}

impl Canvas for ChartCanvas<'_, '_, '_> {
    type Error = RenderError;

    fn draw_line(&mut self, line: &Trace) -> Result<(), RenderError> {
        let color = rgb(line.color);
        self.chart
            .draw_series(LineSeries::new(
                line.points.iter().copied(),
                color.stroke_width(2),
            ))
            .map_err(draw_err)?
            .label(line.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        Ok(())
    }

    fn fill_region(&mut self, fill: &Fill) -> Result<(), RenderError> {
        let style = rgb(fill.color).mix(fill.alpha);
        self.chart
            .draw_series(AreaSeries::new(fill.points.iter().copied(), 0.0, style))
            .map_err(|e| RenderError::Draw(format!("segment {}: {e}", fill.segment)))?;
        Ok(())
    }
}

/// Render a Figure to a PNG image of the given size.
pub fn render_png(figure: &Figure, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
    let mut buf = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&figure.title, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(figure.x_range.clone(), figure.y_range.clone())
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc(figure.x_label.as_str())
            .y_desc(figure.y_label.as_str())
            .draw()
            .map_err(draw_err)?;

        figure.draw(&mut ChartCanvas { chart: &mut chart })?;

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(&buf, width, height, image::ExtendedColorType::Rgb8)?;
    Ok(png)
}

/// Render and write the PNG to `path`.
pub fn save_png(figure: &Figure, path: &Path, width: u32, height: u32) -> Result<(), RenderError> {
    let png = render_png(figure, width, height)?;
    std::fs::write(path, png).map_err(|source| RenderError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("Wrote {width}x{height} chart to {}", path.display());
    Ok(())
}
