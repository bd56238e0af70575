//! Multi-panel line figures.
//!
//! Figures are described as data first (panels of line and fill series with
//! explicit ranges) and then drawn through any plotters backend, so the same
//! description renders as SVG, as a high-resolution raster, or as one video
//! frame.

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::RenderError;
use crate::style::{SHADE_ALPHA, series_color};

/// One polyline with an optional legend label.
#[derive(Debug, Clone)]
pub struct Line {
    /// Data points in axis coordinates.
    pub points: Vec<(f64, f64)>,
    /// Legend label; unlabeled lines stay out of the legend.
    pub label: Option<String>,
    /// Palette index.
    pub color: usize,
}

/// A translucent fill between two curves sharing an x axis.
#[derive(Debug, Clone)]
pub struct Fill {
    /// Lower boundary curve.
    pub lower: Vec<(f64, f64)>,
    /// Upper boundary curve.
    pub upper: Vec<(f64, f64)>,
    /// Palette index.
    pub color: usize,
}

/// One chart panel with fixed ranges and its series.
#[derive(Debug, Clone)]
pub struct Panel {
    /// Horizontal axis range.
    pub x_range: Range<f64>,
    /// Vertical axis range.
    pub y_range: Range<f64>,
    /// Horizontal axis description.
    pub x_desc: Option<String>,
    /// Vertical axis description.
    pub y_desc: Option<String>,
    /// Polylines, drawn over the fills.
    pub lines: Vec<Line>,
    /// Range fills, drawn first.
    pub fills: Vec<Fill>,
    /// Whether to draw a legend box for labeled lines.
    pub legend: bool,
}

impl Panel {
    /// An empty panel with the given ranges.
    pub fn new(x_range: Range<f64>, y_range: Range<f64>) -> Self {
        Panel {
            x_range,
            y_range: ensure_span(y_range),
            x_desc: None,
            y_desc: None,
            lines: Vec::new(),
            fills: Vec::new(),
            legend: false,
        }
    }

    fn draw<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), RenderError> {
        let mut chart = ChartBuilder::on(area)
            .margin(8)
            .x_label_area_size(if self.x_desc.is_some() { 36 } else { 24 })
            .y_label_area_size(48)
            .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())
            .map_err(RenderError::draw)?;

        let mut mesh = chart.configure_mesh();
        mesh.light_line_style(WHITE.mix(0.8))
            .label_style(("sans-serif", 12));
        if let Some(desc) = &self.x_desc {
            mesh.x_desc(desc);
        }
        if let Some(desc) = &self.y_desc {
            mesh.y_desc(desc);
        }
        mesh.draw().map_err(RenderError::draw)?;

        for fill in &self.fills {
            let mut polygon = fill.upper.clone();
            polygon.extend(fill.lower.iter().rev().copied());
            chart
                .draw_series(std::iter::once(Polygon::new(
                    polygon,
                    series_color(fill.color).mix(SHADE_ALPHA),
                )))
                .map_err(RenderError::draw)?;
        }

        for line in &self.lines {
            let color = series_color(line.color);
            let annotation = chart
                .draw_series(LineSeries::new(
                    line.points.iter().copied(),
                    color.stroke_width(1),
                ))
                .map_err(RenderError::draw)?;
            if let Some(label) = &line.label {
                annotation.label(label).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
                });
            }
        }

        if self.legend {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .label_font(("sans-serif", 12))
                .draw()
                .map_err(RenderError::draw)?;
        }
        Ok(())
    }
}

/// A stack of panels sharing one canvas.
#[derive(Debug, Clone)]
pub struct Figure {
    /// Canvas size in logical pixels.
    pub size: (u32, u32),
    /// Panels, stacked top to bottom.
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Render as an SVG file.
    pub fn render_svg(&self, path: &Path) -> Result<(), RenderError> {
        let root = SVGBackend::new(path, self.size).into_drawing_area();
        self.draw(&root)?;
        root.present().map_err(RenderError::draw)?;
        tracing::debug!(path = %path.display(), "wrote figure");
        Ok(())
    }

    /// Render as a PNG file, `scale` times the logical canvas size.
    pub fn render_png(&self, path: &Path, scale: u32) -> Result<(), RenderError> {
        let size = (self.size.0 * scale, self.size.1 * scale);
        let root = BitMapBackend::new(path, size).into_drawing_area();
        self.draw(&root)?;
        root.present().map_err(RenderError::draw)?;
        tracing::debug!(path = %path.display(), "wrote figure");
        Ok(())
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), RenderError> {
        root.fill(&WHITE).map_err(RenderError::draw)?;
        let areas = root.split_evenly((self.panels.len(), 1));
        for (panel, area) in self.panels.iter().zip(areas.iter()) {
            panel.draw(area)?;
        }
        Ok(())
    }
}

/// Zip an axis with a value series into plot points.
pub fn series_points(axis: &[f64], values: &[f64]) -> Vec<(f64, f64)> {
    axis.iter().copied().zip(values.iter().copied()).collect()
}

/// Widen degenerate ranges so the chart coordinate system stays valid.
pub fn ensure_span(range: Range<f64>) -> Range<f64> {
    if range.start < range.end {
        range
    } else {
        (range.start - 1.0)..(range.end + 1.0)
    }
}
