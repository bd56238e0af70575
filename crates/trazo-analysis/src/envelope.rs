//! Per-bin summary statistics across trial columns.
//!
//! A figure showing dozens of trials draws an envelope instead: the per-bin
//! mean plus min/max bounds. Delay-error data additionally needs its display
//! range bounded away from the near-Nyquist tail, where the measurements are
//! numerically spurious.

use crate::table::Table;

/// Fraction of the highest bins excluded from delay-error display bounds.
pub const DELAY_TRIM_FRACTION: f64 = 0.05;

/// Per-bin {mean, min, max} across the trial columns of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Mean value per bin.
    pub mean: Vec<f64>,
    /// Minimum value per bin.
    pub min: Vec<f64>,
    /// Maximum value per bin.
    pub max: Vec<f64>,
}

/// An [`Envelope`] plus scalar bounds scanned over the trimmed bin range.
///
/// The per-bin series always cover every bin; only the scalar bounds used to
/// size a chart ignore the trimmed tail.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedEnvelope {
    /// Full-length per-bin summary, spurious tail included.
    pub envelope: Envelope,
    /// Smallest value over trials and bins `[0, retained_bins)`.
    pub display_min: f64,
    /// Largest value over trials and bins `[0, retained_bins)`.
    pub display_max: f64,
    /// Number of leading bins the bounds were scanned over.
    pub retained_bins: usize,
}

/// Reduce a multi-trial table to its per-bin envelope.
///
/// With a single trial column, mean, min and max all degenerate to that
/// series. A table with no trial columns yields empty series.
pub fn aggregate(table: &Table) -> Envelope {
    let bins = table.bin_count();
    let trials = table.trial_count();
    if trials == 0 {
        return Envelope {
            mean: Vec::new(),
            min: Vec::new(),
            max: Vec::new(),
        };
    }

    let mut mean = Vec::with_capacity(bins);
    let mut min = Vec::with_capacity(bins);
    let mut max = Vec::with_capacity(bins);
    for bin in 0..bins {
        let mut sum = 0.0;
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for trial in table.trials() {
            let value = trial[bin];
            sum += value;
            lo = lo.min(value);
            hi = hi.max(value);
        }
        mean.push(sum / trials as f64);
        min.push(lo);
        max.push(hi);
    }
    Envelope { mean, min, max }
}

/// Envelope plus display bounds that exclude the spurious high-bin tail.
///
/// The scan range is `[0, cutoff)` with
/// `cutoff = min(bin_count - 1, floor(bin_count * (1 - trim_fraction)))`,
/// so the final (near-Nyquist) bin never contributes to the bounds even with
/// a zero trim fraction. The per-bin series still cover every bin; dropping
/// the final bin from drawn curves is the renderer's job.
pub fn aggregate_bounded(table: &Table, trim_fraction: f64) -> BoundedEnvelope {
    let bins = table.bin_count();
    let cutoff = bins
        .saturating_sub(1)
        .min((bins as f64 * (1.0 - trim_fraction)) as usize);

    let mut display_min = f64::INFINITY;
    let mut display_max = f64::NEG_INFINITY;
    for trial in table.trials() {
        for &value in &trial[..cutoff] {
            display_min = display_min.min(value);
            display_max = display_max.max(value);
        }
    }

    BoundedEnvelope {
        envelope: aggregate(table),
        display_min,
        display_max,
        retained_bins: cutoff,
    }
}

/// Last bin index where any trial exceeds `threshold` in magnitude.
///
/// Used to size the time axis of impulse-response frames to the part of the
/// response that is actually visible. Returns 0 when nothing exceeds the
/// threshold.
pub fn support_extent(table: &Table, threshold: f64) -> usize {
    let mut extent = 0;
    for bin in 0..table.bin_count() {
        if table.trials().any(|trial| trial[bin].abs() > threshold) {
            extent = bin;
        }
    }
    extent
}
