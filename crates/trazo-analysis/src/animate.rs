//! Animation frame scheduling.
//!
//! An animation sweeps across the trial columns of a set of parallel tables,
//! one frame per scheduled column. With double-back enabled the sweep runs
//! forward and then mirrors into reverse without duplicating the endpoint
//! frames, so a looping video appears seamless.

use crate::error::AnalysisError;
use crate::table::Table;

/// Playback schedule mapping frame numbers to source column indices.
///
/// Column 0 of the source tables is the shared axis, so frame sources start
/// at column 1. For `column_count = C` the forward sweep covers sources
/// `1..C-1`; with double-back the effective length is `2(C-1) - 1`: the
/// sequence folds at the far end and walks back to source 1, e.g.
/// `[1, 2, 3, 4, 3, 2, 1]` for `C = 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSequence {
    column_count: usize,
    double_back: bool,
    frame_step: usize,
    frame_count: usize,
}

impl FrameSequence {
    /// Build a schedule over a table with `column_count` columns (axis included).
    ///
    /// `frame_step` skips columns to shorten the video and is clamped to at
    /// least 1. Tables with fewer than two columns produce an empty schedule;
    /// exactly two produce the single frame `[1]`.
    pub fn new(column_count: usize, double_back: bool, frame_step: usize) -> Self {
        let frame_step = frame_step.max(1);
        let forward = column_count.saturating_sub(1);
        let effective = if double_back && forward > 0 {
            2 * forward - 1
        } else {
            forward
        };
        FrameSequence {
            column_count,
            double_back,
            frame_step,
            frame_count: effective.div_ceil(frame_step),
        }
    }

    /// Number of frames in the schedule.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Column step between consecutive frames.
    pub fn frame_step(&self) -> usize {
        self.frame_step
    }

    /// Source column for a frame number, or `None` past the end.
    pub fn source_index(&self, frame: usize) -> Option<usize> {
        if frame >= self.frame_count {
            return None;
        }
        let last = self.column_count as isize - 1;
        let mut raw = (frame * self.frame_step) as isize;
        if self.double_back && raw > last - 1 {
            // Fold past the forward end into the mirrored reverse sweep.
            raw = (last - 1) * 2 - raw;
        }
        Some((raw + 1).min(last) as usize)
    }

    /// The full source-column sequence in playback order.
    pub fn source_indices(&self) -> impl Iterator<Item = usize> {
        let sequence = *self;
        (0..self.frame_count).filter_map(move |frame| sequence.source_index(frame))
    }
}

/// The parallel tables an animation draws from.
///
/// All three are indexed by the same source column schedule; they normally
/// share labels, but only column counts are checked.
#[derive(Debug, Clone, Copy)]
pub struct FrameTables<'a> {
    /// Impulse-response table (sample index axis).
    pub impulse: &'a Table,
    /// Amplitude-response table (normalised frequency axis).
    pub amplitude: &'a Table,
    /// Delay-error table (normalised frequency axis).
    pub delay_error: &'a Table,
}

/// One resolved frame: borrowed series from each parallel table.
#[derive(Debug, Clone, Copy)]
pub struct FrameData<'a> {
    /// Frame number in playback order.
    pub frame: usize,
    /// Source column the frame was resolved from.
    pub source: usize,
    /// Impulse-response series for this frame.
    pub impulse: &'a [f64],
    /// Amplitude-response series for this frame.
    pub amplitude: &'a [f64],
    /// Delay-error series for this frame.
    pub delay_error: &'a [f64],
}

/// Resolve every scheduled frame against the parallel tables.
///
/// Each frame borrows immutably from the tables and carries no shared state,
/// so callers may render the resolved frames in any order. Fails if the
/// schedule needs a column some table does not have.
pub fn resolve_frames<'a>(
    sequence: &FrameSequence,
    tables: &FrameTables<'a>,
) -> Result<Vec<FrameData<'a>>, AnalysisError> {
    let mut frames = Vec::with_capacity(sequence.frame_count());
    for frame in 0..sequence.frame_count() {
        let source = match sequence.source_index(frame) {
            Some(source) => source,
            None => break,
        };
        let fetch = |name: &'static str, table: &'a Table| {
            table
                .column(source)
                .ok_or(AnalysisError::FrameIndexOutOfRange {
                    frame,
                    column: source,
                    table: name,
                    available: table.column_count(),
                })
        };
        frames.push(FrameData {
            frame,
            source,
            impulse: fetch("impulse", tables.impulse)?,
            amplitude: fetch("amplitude", tables.amplitude)?,
            delay_error: fetch("delay error", tables.delay_error)?,
        });
    }
    Ok(frames)
}
