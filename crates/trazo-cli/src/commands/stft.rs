//! STFT window analysis figures.
//!
//! Three figures from the window-design analysis tables: the
//! synthesis/analysis windows with their effective partial-future windows,
//! the neat-ratio Kaiser windows with their oversampled spectra, and the
//! simulated aliasing level against overlap ratio.

use std::ops::Range;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use trazo_analysis::{DEFAULT_OVERSAMPLE, Table, aggregate, estimate_spectrum};
use trazo_io::read_table;
use trazo_render::style::{SMALL_CANVAS, SQUARE_CANVAS};
use trazo_render::{Figure, Line, Panel, series_points};

/// Window sizes covered by the simulated-aliasing sweep.
const ALIASING_SIZES: [usize; 4] = [257, 163, 128, 70];

#[derive(Args)]
pub struct StftArgs {
    /// Directory holding the stft-*.csv analysis tables
    #[arg(value_name = "DIR", default_value = "out/analysis")]
    dir: PathBuf,
}

pub fn run(args: StftArgs) -> anyhow::Result<()> {
    let dir = &args.dir;

    let windows = read_table(dir.join("stft-windows.csv"))?;
    let partial = read_table(dir.join("stft-windows-partial.csv"))?;
    let path = dir.join("stft-windows.svg");
    window_figure(&windows, &partial)?.render_svg(&path)?;
    println!("Saved {}", path.display());

    let kaiser = read_table(dir.join("stft-kaiser-windows-neat.csv"))?;
    let path = dir.join("stft-kaiser-windows-neat.svg");
    kaiser_figure(&kaiser)?.render_svg(&path)?;
    println!("Saved {}", path.display());

    let tables = ALIASING_SIZES
        .iter()
        .map(|&size| {
            read_table(dir.join(format!("stft-aliasing-simulated-{size}.csv")))
                .map(|table| (size, table))
                .map_err(anyhow::Error::from)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let path = dir.join("stft-aliasing-simulated.svg");
    aliasing_figure(&aliasing_series(&tables)?).render_svg(&path)?;
    println!("Saved {}", path.display());

    Ok(())
}

/// Two panels: the windows themselves and their partial-future counterparts,
/// on a time axis normalised by window length.
fn window_figure(windows: &Table, partial: &Table) -> anyhow::Result<Figure> {
    let window_len = windows.bin_count();
    anyhow::ensure!(window_len > 0, "window table has no samples");
    let x: Vec<f64> = windows
        .axis()
        .iter()
        .map(|&value| value / window_len as f64)
        .collect();
    let x_range = 0.0..x.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let labels: Vec<String> = windows.labels()[1..]
        .iter()
        .map(|label| {
            let interval: f64 = label
                .trim()
                .parse()
                .with_context(|| format!("window label '{label}' is not an interval"))?;
            let ratio = window_len as f64 / interval;
            Ok(format!("{ratio:.1}x ({}/{window_len})", interval as i64))
        })
        .collect::<anyhow::Result<_>>()?;

    let mut window_panel = Panel::new(x_range.clone(), padded_value_range(windows)?);
    window_panel.y_desc = Some("synthesis/analysis window".into());
    window_panel.legend = true;
    for (index, column) in windows.trials().enumerate() {
        window_panel.lines.push(Line {
            points: series_points(&x, column),
            label: Some(labels[index].clone()),
            color: index,
        });
    }

    let mut partial_panel = Panel::new(x_range, padded_value_range(partial)?);
    partial_panel.y_desc = Some("effective partial-future window".into());
    for (index, column) in partial.trials().enumerate() {
        partial_panel.lines.push(Line {
            points: series_points(&x, column),
            label: None,
            color: index,
        });
    }

    Ok(Figure {
        size: SQUARE_CANVAS,
        panels: vec![window_panel, partial_panel],
    })
}

/// Two panels: Kaiser windows in time, and their oversampled spectra.
fn kaiser_figure(data: &Table) -> anyhow::Result<Figure> {
    let axis = data.axis();
    anyhow::ensure!(!axis.is_empty(), "kaiser window table has no samples");
    let x_range = axis.iter().copied().fold(f64::INFINITY, f64::min)
        ..axis.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut time_panel = Panel::new(x_range, -0.1..1.1);
    time_panel.legend = true;
    let mut freq_panel = Panel::new(0.0..6.0, -100.0..1.0);
    freq_panel.x_desc = Some("bin".into());
    freq_panel.y_desc = Some("dB".into());

    for (index, column) in data.trials().enumerate() {
        time_panel.lines.push(Line {
            points: series_points(axis, column),
            label: Some(format!("{}x overlap", data.labels()[index + 1])),
            color: index,
        });
        let spectrum = estimate_spectrum(column, DEFAULT_OVERSAMPLE)?;
        let points = spectrum
            .bins
            .iter()
            .copied()
            .zip(spectrum.magnitude_db.iter().copied())
            .take_while(|&(bin, _)| bin <= 6.0)
            .collect();
        freq_panel.lines.push(Line {
            points,
            label: None,
            color: index,
        });
    }

    Ok(Figure {
        size: SQUARE_CANVAS,
        panels: vec![time_panel, freq_panel],
    })
}

/// One aliasing-level series per simulated window size.
struct AliasingSeries {
    label: String,
    points: Vec<(f64, f64)>,
}

/// Derive overlap-ratio/aliasing points for every size in one pass.
fn aliasing_series(tables: &[(usize, Table)]) -> anyhow::Result<Vec<AliasingSeries>> {
    tables
        .iter()
        .map(|(size, table)| {
            anyhow::ensure!(
                table.column_count() >= 3,
                "aliasing table for N={size} needs window, interval and level columns"
            );
            let windows = table.axis();
            let intervals = table.column(1).unwrap_or(&[]);
            let levels = table.column(2).unwrap_or(&[]);
            let points = windows
                .iter()
                .zip(intervals)
                .zip(levels)
                .map(|((&window, &interval), &level)| (window / interval, level))
                .collect();
            Ok(AliasingSeries {
                label: format!("N={size}"),
                points,
            })
        })
        .collect()
}

fn aliasing_figure(series: &[AliasingSeries]) -> Figure {
    let mut panel = Panel::new(1.0..12.0, -152.0..0.0);
    panel.x_desc = Some("overlap ratio (window/interval)".into());
    panel.y_desc = Some("aliasing (dB)".into());
    panel.legend = true;
    for (index, entry) in series.iter().enumerate() {
        panel.lines.push(Line {
            points: entry.points.clone(),
            label: Some(entry.label.clone()),
            color: index,
        });
    }
    Figure {
        size: SMALL_CANVAS,
        panels: vec![panel],
    }
}

/// Value range of a table's trials with a little headroom.
fn padded_value_range(table: &Table) -> anyhow::Result<Range<f64>> {
    let envelope = aggregate(table);
    let lo = envelope.min.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = envelope.max.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    anyhow::ensure!(
        lo.is_finite() && hi.is_finite(),
        "table has no data to size axes from"
    );
    let pad = 0.05 * (hi - lo).max(1e-12);
    Ok(lo - pad..hi + pad)
}
