//! The three-panel statistics figure.
//!
//! The stats table is produced by the measurement suite with a fixed column
//! layout: axis, aliasing level, response mean, response min/max, delay-error
//! min/max. Panels: aliasing, response envelope, delay-error envelope.

use std::path::Path;

use trazo_analysis::{DELAY_TRIM_FRACTION, Table, aggregate_bounded};

use crate::error::RenderError;
use crate::figure::{Figure, Fill, Line, Panel, series_points};
use crate::fractional::FREQUENCY_RANGE;
use crate::style::{RASTER_SCALE, SQUARE_CANVAS};

const ALIASING: usize = 1;
const RESPONSE_MEAN: usize = 2;
const RESPONSE_MIN: usize = 3;
const RESPONSE_MAX: usize = 4;
const DELAY_MIN: usize = 5;
const DELAY_MAX: usize = 6;
const STATS_COLUMNS: usize = 7;

/// Render the statistics figure as SVG.
pub fn render_stats_svg(path: &Path, stats: &Table) -> Result<(), RenderError> {
    stats_figure(stats)?.render_svg(path)
}

/// Render the statistics figure as a high-resolution raster.
pub fn render_stats_raster(path: &Path, stats: &Table) -> Result<(), RenderError> {
    stats_figure(stats)?.render_png(path, RASTER_SCALE)
}

fn stats_figure(stats: &Table) -> Result<Figure, RenderError> {
    if stats.column_count() < STATS_COLUMNS {
        return Err(RenderError::MissingColumns {
            what: "fractional stats table",
            expected: STATS_COLUMNS,
            found: stats.column_count(),
        });
    }
    let axis = stats.axis();
    let column = |index: usize| stats.column(index).unwrap_or(&[]);

    let mut aliasing_panel = Panel::new(FREQUENCY_RANGE, -95.0..0.0);
    aliasing_panel.y_desc = Some("dB".into());
    aliasing_panel.lines.push(Line {
        points: series_points(axis, column(ALIASING)),
        label: Some("aliasing".into()),
        color: 0,
    });

    let mut response_panel = Panel::new(FREQUENCY_RANGE, -13.0..1.0);
    response_panel.y_desc = Some("dB".into());
    response_panel.legend = true;
    response_panel.fills.push(Fill {
        lower: series_points(axis, column(RESPONSE_MIN)),
        upper: series_points(axis, column(RESPONSE_MAX)),
        color: 0,
    });
    response_panel.lines.push(Line {
        points: series_points(axis, column(RESPONSE_MIN)),
        label: Some("response (range)".into()),
        color: 0,
    });
    response_panel.lines.push(Line {
        points: series_points(axis, column(RESPONSE_MAX)),
        label: None,
        color: 0,
    });
    response_panel.lines.push(Line {
        points: series_points(axis, column(RESPONSE_MEAN)),
        label: Some("response (mean)".into()),
        color: 1,
    });

    // Delay-error display bounds: trim the top 5% of bins, and the trailing
    // Nyquist entry never participates.
    let delay = stats.restricted(&[DELAY_MIN, DELAY_MAX])?;
    let bounds = aggregate_bounded(&delay, DELAY_TRIM_FRACTION);
    if !bounds.display_min.is_finite() || !bounds.display_max.is_finite() {
        return Err(RenderError::NoData {
            what: "delay-error statistics",
        });
    }
    let mut delay_panel = Panel::new(
        FREQUENCY_RANGE,
        (bounds.display_min - 0.1).floor()..(bounds.display_max + 0.1).ceil(),
    );
    delay_panel.y_desc = Some("samples".into());
    delay_panel.x_desc = Some("input frequency (normalised)".into());
    let keep = stats.bin_count().saturating_sub(1);
    delay_panel.fills.push(Fill {
        lower: series_points(&axis[..keep], &column(DELAY_MIN)[..keep]),
        upper: series_points(&axis[..keep], &column(DELAY_MAX)[..keep]),
        color: 0,
    });
    delay_panel.lines.push(Line {
        points: series_points(&axis[..keep], &column(DELAY_MIN)[..keep]),
        label: None,
        color: 0,
    });
    delay_panel.lines.push(Line {
        points: series_points(&axis[..keep], &column(DELAY_MAX)[..keep]),
        label: None,
        color: 0,
    });

    Ok(Figure {
        size: SQUARE_CANVAS,
        panels: vec![aliasing_panel, response_panel, delay_panel],
    })
}
