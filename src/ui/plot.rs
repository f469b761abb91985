use std::convert::Infallible;

use eframe::egui::{Color32, Stroke, Ui, Vec2};
use egui_plot::{Legend, Line, Plot, PlotPoints, Polygon};
use palette::Srgb;

use crate::render::{Canvas, Figure, Fill, Trace};

// ---------------------------------------------------------------------------
// PDF plot (central panel)
// ---------------------------------------------------------------------------

/// Render the figure in the central panel.
pub fn pdf_plot(ui: &mut Ui, figure: &Figure) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&figure.title);
    });

    Plot::new("pdf_plot")
        .legend(Legend::default())
        .x_axis_label(figure.x_label.as_str())
        .y_axis_label(figure.y_label.as_str())
        .include_x(figure.x_range.start)
        .include_x(figure.x_range.end)
        .include_y(figure.y_range.start)
        .include_y(figure.y_range.end)
        .set_margin_fraction(Vec2::ZERO)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let mut canvas = PlotCanvas(|shape: Shape<'_>| match shape {
                Shape::Line(trace) => plot_ui.line(line(trace)),
                Shape::Fill(fill) => {
                    for piece in fill_pieces(fill) {
                        plot_ui.polygon(piece);
                    }
                }
            });
            match figure.draw(&mut canvas) {
                Ok(()) => {}
                Err(never) => match never {},
            }
        });
}

enum Shape<'f> {
    Line(&'f Trace),
    Fill(&'f Fill),
}

/// Forwards every drawing call to one closure, which owns the plot borrow.
struct PlotCanvas<F>(F);

impl<F: FnMut(Shape<'_>)> Canvas for PlotCanvas<F> {
    type Error = Infallible;

    fn draw_line(&mut self, line: &Trace) -> Result<(), Infallible> {
        (self.0)(Shape::Line(line));
        Ok(())
    }

    fn fill_region(&mut self, fill: &Fill) -> Result<(), Infallible> {
        (self.0)(Shape::Fill(fill));
        Ok(())
    }
}

fn color32(color: Srgb<u8>, alpha: f64) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.red, color.green, color.blue, a)
}

fn line(trace: &Trace) -> Line<'static> {
    let points: PlotPoints = trace.points.iter().map(|&(x, y)| [x, y]).collect();
    Line::new(points)
        .name(&trace.label)
        .color(color32(trace.color, 1.0))
        .width(1.5)
}

/// egui only fills convex polygons, so the area under the curve is cut into
/// one trapezoid per pair of neighbouring grid points.
fn fill_pieces(fill: &Fill) -> Vec<Polygon<'static>> {
    let color = color32(fill.color, fill.alpha);
    fill.points
        .windows(2)
        .map(|w| {
            let ((x0, y0), (x1, y1)) = (w[0], w[1]);
            Polygon::new(PlotPoints::new(vec![[x0, 0.0], [x0, y0], [x1, y1], [x1, 0.0]]))
                .fill_color(color)
                .stroke(Stroke::NONE)
        })
        .collect()
}
