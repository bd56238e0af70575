//! The fractional-delay dataset pipeline.
//!
//! One dataset prefix yields the two-panel fractional figure, the three-panel
//! statistics figure, and optionally an animated sweep and intermediate-file
//! cleanup. A directory argument batches over every dataset found beneath it.

use std::path::{Path, PathBuf};

use clap::Args;
use trazo_analysis::select_nearest;
use trazo_io::{discover_prefixes, naming, read_table, remove_intermediates};
use trazo_render::{
    AnimationOptions, render_animation, render_fractional_figure, render_stats_raster,
    render_stats_svg,
};

/// Number of target delays drawn in the fractional figure.
const TARGET_COUNT: usize = 6;

#[derive(Args)]
pub struct FractionalArgs {
    /// Dataset prefix, or a directory to search for datasets
    #[arg(value_name = "PREFIX")]
    prefix: Option<PathBuf>,

    /// Trailing task keywords: 'animate' renders videos, 'delete' removes
    /// the intermediate CSVs afterwards
    #[arg(value_name = "TASK")]
    tasks: Vec<String>,

    /// Render every n-th source column of the animation
    #[arg(long, default_value_t = 1)]
    frame_step: usize,

    /// Play the animation forward only instead of the mirrored loop
    #[arg(long)]
    no_double_back: bool,
}

pub fn run(args: FractionalArgs) -> anyhow::Result<()> {
    let Some(prefix) = args.prefix else {
        eprintln!("Need prefix or search-dir for the .fractional-???.csv files");
        std::process::exit(1);
    };

    let animate = args.tasks.iter().any(|task| task == "animate");
    let delete = args.tasks.iter().any(|task| task == "delete");
    for task in &args.tasks {
        if task != "animate" && task != "delete" {
            tracing::warn!(task = %task, "ignoring unknown task keyword");
        }
    }

    let options = AnimationOptions {
        double_back: !args.no_double_back,
        frame_step: args.frame_step,
    };

    if prefix.is_dir() {
        let prefixes = discover_prefixes(&prefix)?;
        if prefixes.is_empty() {
            anyhow::bail!(
                "no *{} datasets under '{}'",
                naming::AMPLITUDE_SUFFIX,
                prefix.display()
            );
        }
        run_batch(&prefixes, animate, delete, options)
    } else {
        figures(&prefix)?;
        if animate {
            animation(&prefix, options)?;
        }
        if delete {
            remove_intermediates(&prefix)?;
        }
        Ok(())
    }
}

/// Process a batch of prefixes, isolating per-dataset failures.
///
/// All figures first, then all animations, then cleanup; cleanup only runs
/// for prefixes whose plotting and animation fully succeeded.
fn run_batch(
    prefixes: &[PathBuf],
    animate: bool,
    delete: bool,
    options: AnimationOptions,
) -> anyhow::Result<()> {
    let mut healthy: Vec<bool> = vec![true; prefixes.len()];

    for (index, prefix) in prefixes.iter().enumerate() {
        if let Err(err) = figures(prefix) {
            healthy[index] = false;
            tracing::error!(prefix = %prefix.display(), error = %err, "figures failed");
        }
    }
    if animate {
        for (index, prefix) in prefixes.iter().enumerate() {
            if !healthy[index] {
                continue;
            }
            if let Err(err) = animation(prefix, options) {
                healthy[index] = false;
                tracing::error!(prefix = %prefix.display(), error = %err, "animation failed");
            }
        }
    }
    if delete {
        for (index, prefix) in prefixes.iter().enumerate() {
            if !healthy[index] {
                continue;
            }
            if let Err(err) = remove_intermediates(prefix) {
                healthy[index] = false;
                tracing::error!(prefix = %prefix.display(), error = %err, "cleanup failed");
            }
        }
    }

    let failed = healthy.iter().filter(|&&ok| !ok).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} datasets failed", prefixes.len());
    }
    Ok(())
}

/// Render the fractional and statistics figures for one prefix.
fn figures(prefix: &Path) -> anyhow::Result<()> {
    let amplitude = read_table(naming::with_suffix(prefix, naming::AMPLITUDE_SUFFIX))?;
    let group = read_table(naming::with_suffix(prefix, naming::GROUP_SUFFIX))?;

    let targets = target_delays();
    let amplitude = select_nearest(&amplitude, &targets)?;
    let group = select_nearest(&group, &targets)?;

    let fractional = naming::with_suffix(prefix, naming::FRACTIONAL_FIGURE_SUFFIX);
    render_fractional_figure(&fractional, &amplitude, &group)?;
    println!("Saved {}", fractional.display());

    let stats = read_table(naming::with_suffix(prefix, naming::STATS_SUFFIX))?;
    let svg = naming::with_suffix(prefix, naming::STATS_FIGURE_SUFFIX);
    render_stats_svg(&svg, &stats)?;
    let raster = naming::with_suffix(prefix, naming::STATS_RASTER_SUFFIX);
    render_stats_raster(&raster, &stats)?;
    println!("Saved {} and {}", svg.display(), raster.display());
    Ok(())
}

/// Render the animated sweep for one prefix.
fn animation(prefix: &Path, options: AnimationOptions) -> anyhow::Result<()> {
    let impulse = read_table(naming::with_suffix(prefix, naming::IMPULSE_SUFFIX))?;
    let amplitude = read_table(naming::with_suffix(prefix, naming::AMPLITUDE_SUFFIX))?;
    let delay_error = read_table(naming::with_suffix(prefix, naming::GROUP_SUFFIX))?;

    let output = naming::with_suffix(prefix, naming::ANIMATION_SUFFIX);
    render_animation(&output, &impulse, &amplitude, &delay_error, options)?;
    println!("Saved {}", output.display());
    Ok(())
}

/// The target delays drawn in the fractional figure: 0.0 to 0.5 inclusive.
fn target_delays() -> Vec<f64> {
    (0..TARGET_COUNT)
        .map(|index| 0.5 * index as f64 / (TARGET_COUNT - 1) as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_delays_span_zero_to_half() {
        let targets = target_delays();
        assert_eq!(targets.len(), 6);
        assert_eq!(targets[0], 0.0);
        assert_eq!(targets[5], 0.5);
        for pair in targets.windows(2) {
            assert!((pair[1] - pair[0] - 0.1).abs() < 1e-12);
        }
    }
}
