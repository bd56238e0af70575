//! The two-panel fractional-delay figure.
//!
//! Top: amplitude response per selected delay. Bottom: group-delay error per
//! selected delay, with the trailing Nyquist bin dropped since that entry is
//! always spurious.

use std::path::Path;

use trazo_analysis::{Table, aggregate_bounded};

use crate::error::RenderError;
use crate::figure::{Figure, Line, Panel, series_points};
use crate::style::MEDIUM_CANVAS;

/// Normalised-frequency axis span shared by all frequency panels.
pub const FREQUENCY_RANGE: std::ops::Range<f64> = 0.0..0.5;

/// Render the fractional-delay figure for nearest-selected tables.
///
/// `amplitude` and `group` are selected-column tables (axis plus one column
/// per target delay); the amplitude panel labels each line with its delay.
pub fn render_fractional_figure(
    path: &Path,
    amplitude: &Table,
    group: &Table,
) -> Result<(), RenderError> {
    let mut amplitude_panel = Panel::new(FREQUENCY_RANGE, -21.0..1.0);
    amplitude_panel.y_desc = Some("response (dB)".into());
    amplitude_panel.legend = true;
    for (index, column) in amplitude.trials().enumerate() {
        amplitude_panel.lines.push(Line {
            points: series_points(amplitude.axis(), column),
            label: Some(amplitude.labels()[index + 1].clone()),
            color: index,
        });
    }

    let bounds = aggregate_bounded(group, 0.0);
    if !bounds.display_min.is_finite() || !bounds.display_max.is_finite() {
        return Err(RenderError::NoData {
            what: "group-delay table",
        });
    }
    let mut delay_panel = Panel::new(
        FREQUENCY_RANGE,
        (bounds.display_min + 1e-6).floor()..(bounds.display_max - 1e-6).ceil(),
    );
    delay_panel.y_desc = Some("samples".into());
    delay_panel.x_desc = Some("input frequency (normalised)".into());
    let keep = group.bin_count().saturating_sub(1);
    for (index, column) in group.trials().enumerate() {
        delay_panel.lines.push(Line {
            points: series_points(&group.axis()[..keep], &column[..keep]),
            label: None,
            color: index,
        });
    }

    Figure {
        size: MEDIUM_CANVAS,
        panels: vec![amplitude_panel, delay_panel],
    }
    .render_svg(path)
}
