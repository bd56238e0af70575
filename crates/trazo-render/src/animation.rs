//! Frame rendering and video assembly.
//!
//! Frames are rendered to a temporary directory, one PNG per scheduled
//! source column, then assembled into a video by ffmpeg. Each frame is a
//! pure function of its resolved data and the precomputed layout bounds, so
//! frames carry no state between each other.

use std::path::{Path, PathBuf};
use std::process::Command;

use indicatif::{ProgressBar, ProgressStyle};
use trazo_analysis::{
    DELAY_TRIM_FRACTION, FrameData, FrameSequence, FrameTables, Table, aggregate,
    aggregate_bounded, resolve_frames, support_extent,
};

use crate::error::RenderError;
use crate::figure::{Figure, Line, Panel, series_points};
use crate::fractional::FREQUENCY_RANGE;
use crate::style::{RASTER_SCALE, SQUARE_CANVAS};

/// Frame rate of an animation with no frame stepping.
pub const BASE_FPS: f64 = 30.0;

/// Impulse magnitudes below this never extend the visible support.
const IMPULSE_THRESHOLD: f64 = 1e-4;

/// Animation scheduling options.
#[derive(Debug, Clone, Copy)]
pub struct AnimationOptions {
    /// Mirror the sweep into a seamless forward-then-reverse loop.
    pub double_back: bool,
    /// Render every n-th source column.
    pub frame_step: usize,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        AnimationOptions {
            double_back: true,
            frame_step: 1,
        }
    }
}

/// Axis bounds shared by every frame, computed once from the full tables.
#[derive(Debug, Clone, PartialEq)]
struct FrameLayout {
    impulse_x: std::ops::Range<f64>,
    impulse_y: std::ops::Range<f64>,
    amplitude_y: std::ops::Range<f64>,
    delay_y: std::ops::Range<f64>,
    delay_keep: usize,
}

impl FrameLayout {
    fn from_tables(impulse: &Table, delay_error: &Table) -> Result<Self, RenderError> {
        let extent = support_extent(impulse, IMPULSE_THRESHOLD);
        let impulse_floor = aggregate(impulse)
            .min
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        if !impulse_floor.is_finite() {
            return Err(RenderError::NoData {
                what: "impulse table",
            });
        }

        let bounds = aggregate_bounded(delay_error, DELAY_TRIM_FRACTION);
        if !bounds.display_min.is_finite() || !bounds.display_max.is_finite() {
            return Err(RenderError::NoData {
                what: "delay-error table",
            });
        }

        Ok(FrameLayout {
            impulse_x: -2.0..(extent as f64 + 3.0),
            impulse_y: (-0.1f64).min(impulse_floor - 0.1)..1.1,
            amplitude_y: -26.0..1.0,
            delay_y: (bounds.display_min - 0.1).floor()..(bounds.display_max + 0.1).ceil(),
            delay_keep: delay_error.bin_count().saturating_sub(1),
        })
    }
}

/// Render the animated sweep over the parallel tables and assemble a video.
///
/// The schedule is driven by the delay-error table's column count; all three
/// tables must be at least as wide as the schedule requires.
pub fn render_animation(
    output: &Path,
    impulse: &Table,
    amplitude: &Table,
    delay_error: &Table,
    options: AnimationOptions,
) -> Result<(), RenderError> {
    let layout = FrameLayout::from_tables(impulse, delay_error)?;
    let sequence = FrameSequence::new(
        delay_error.column_count(),
        options.double_back,
        options.frame_step,
    );
    let frames = resolve_frames(
        &sequence,
        &FrameTables {
            impulse,
            amplitude,
            delay_error,
        },
    )?;
    if frames.is_empty() {
        return Err(RenderError::NoData {
            what: "animation schedule",
        });
    }
    let fps = BASE_FPS / sequence.frame_step() as f64;

    animate(output, fps, frames.len(), |file, index, _time| {
        draw_frame(
            file,
            &frames[index],
            impulse.axis(),
            amplitude.axis(),
            delay_error.axis(),
            &layout,
        )
    })
}

/// Render `frame_count` frames through `draw` and assemble them at `fps`.
///
/// `draw` receives the frame file path, the frame index and its presentation
/// time in seconds, mirroring the single-frame renderer contract.
pub fn animate(
    output: &Path,
    fps: f64,
    frame_count: usize,
    mut draw: impl FnMut(&Path, usize, f64) -> Result<(), RenderError>,
) -> Result<(), RenderError> {
    let frame_dir = tempfile::tempdir().map_err(|source| RenderError::FrameDir { source })?;

    let progress = ProgressBar::new(frame_count as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("##-"),
    );
    for index in 0..frame_count {
        let file = frame_dir.path().join(frame_file_name(index));
        draw(&file, index, index as f64 / fps)?;
        progress.inc(1);
    }
    progress.finish_and_clear();

    assemble(output, fps, &frame_dir.path().join("frame_%05d.png"))
}

fn frame_file_name(index: usize) -> String {
    format!("frame_{index:05}.png")
}

fn assemble(output: &Path, fps: f64, pattern: &Path) -> Result<(), RenderError> {
    let run = Command::new("ffmpeg")
        .arg("-y")
        .arg("-framerate")
        .arg(fps.to_string())
        .arg("-i")
        .arg(pattern)
        .arg("-pix_fmt")
        .arg("yuv420p")
        .arg(output)
        .output();

    let captured = match run {
        Ok(captured) => captured,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Err(RenderError::FfmpegMissing { source });
        }
        Err(source) => return Err(RenderError::FfmpegLaunch { source }),
    };
    if !captured.status.success() {
        return Err(RenderError::FfmpegFailed {
            status: captured.status.to_string(),
            stderr: String::from_utf8_lossy(&captured.stderr).into_owned(),
        });
    }
    tracing::info!(path = %output.display(), "assembled animation");
    Ok(())
}

fn draw_frame(
    file: &Path,
    frame: &FrameData<'_>,
    impulse_axis: &[f64],
    amplitude_axis: &[f64],
    delay_axis: &[f64],
    layout: &FrameLayout,
) -> Result<(), RenderError> {
    let mut impulse_panel = Panel::new(layout.impulse_x.clone(), layout.impulse_y.clone());
    impulse_panel.y_desc = Some("impulse response".into());
    impulse_panel.x_desc = Some("sample".into());
    impulse_panel.lines.push(Line {
        points: series_points(impulse_axis, frame.impulse),
        label: None,
        color: 0,
    });

    let mut amplitude_panel = Panel::new(FREQUENCY_RANGE, layout.amplitude_y.clone());
    amplitude_panel.y_desc = Some("dB".into());
    amplitude_panel.lines.push(Line {
        points: series_points(amplitude_axis, frame.amplitude),
        label: None,
        color: 0,
    });

    let keep = layout.delay_keep;
    let mut delay_panel = Panel::new(FREQUENCY_RANGE, layout.delay_y.clone());
    delay_panel.y_desc = Some("samples".into());
    delay_panel.x_desc = Some("input frequency (normalised)".into());
    delay_panel.lines.push(Line {
        points: series_points(&delay_axis[..keep], &frame.delay_error[..keep]),
        label: None,
        color: 0,
    });

    Figure {
        size: SQUARE_CANVAS,
        panels: vec![impulse_panel, amplitude_panel, delay_panel],
    }
    .render_png(file, RASTER_SCALE)
}
