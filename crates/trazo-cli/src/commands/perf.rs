//! Interpolation performance figures.
//!
//! One figure per sample type, plotting computation time against
//! interpolation order for every measured configuration.

use std::path::PathBuf;

use clap::Args;
use trazo_analysis::{Table, aggregate};
use trazo_io::read_table;
use trazo_render::style::{MEDIUM_CANVAS, RASTER_SCALE};
use trazo_render::{Figure, Line, Panel, series_points};

/// Sample types the benchmark suite measures.
const SAMPLE_TYPES: [&str; 2] = ["double", "float"];

#[derive(Args)]
pub struct PerfArgs {
    /// Directory holding the performance-*.csv benchmark tables
    #[arg(value_name = "DIR", default_value = "out/analysis")]
    dir: PathBuf,
}

pub fn run(args: PerfArgs) -> anyhow::Result<()> {
    for sample_type in SAMPLE_TYPES {
        let stem = format!("performance-lagrange-interpolation-{sample_type}");
        let table = read_table(args.dir.join(format!("{stem}.csv")))?;
        let figure = perf_figure(&table)?;

        let svg = args.dir.join(format!("{stem}.svg"));
        figure.render_svg(&svg)?;
        let raster = args.dir.join(format!("{stem}@2x.png"));
        figure.render_png(&raster, RASTER_SCALE)?;
        println!("Saved {} and {}", svg.display(), raster.display());
    }
    Ok(())
}

fn perf_figure(table: &Table) -> anyhow::Result<Figure> {
    let axis = table.axis();
    anyhow::ensure!(!axis.is_empty(), "performance table has no samples");
    let x_range = axis.iter().copied().fold(f64::INFINITY, f64::min)
        ..axis.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let ceiling = aggregate(table)
        .max
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    anyhow::ensure!(
        ceiling.is_finite(),
        "performance table has no data to size axes from"
    );

    let mut panel = Panel::new(x_range, 0.0..ceiling * 1.05);
    panel.x_desc = Some("order".into());
    panel.y_desc = Some("computation time".into());
    panel.legend = true;
    for (index, column) in table.trials().enumerate() {
        panel.lines.push(Line {
            points: series_points(axis, column),
            label: Some(table.labels()[index + 1].clone()),
            color: index,
        });
    }

    Ok(Figure {
        size: MEDIUM_CANVAS,
        panels: vec![panel],
    })
}
