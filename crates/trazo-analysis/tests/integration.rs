//! Integration tests for trazo-analysis.
//!
//! Exercises the public API the way the figure pipeline uses it: select
//! representative columns from a swept-parameter table, derive spectra and
//! envelopes, and schedule animation frames over parallel tables.

use trazo_analysis::{
    FrameSequence, FrameTables, Table, aggregate, aggregate_bounded, estimate_spectrum,
    resolve_frames, select_nearest, support_extent,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a swept-delay table: axis plus one column per delay value.
fn swept_table(delays: &[f64], bins: usize) -> Table {
    let mut labels = vec!["freq".to_string()];
    let mut columns = vec![(0..bins).map(|i| i as f64 * 0.5 / bins as f64).collect()];
    for &delay in delays {
        labels.push(format!("{delay}"));
        columns.push((0..bins).map(|i| delay * 10.0 + i as f64).collect());
    }
    Table::new(labels, columns).unwrap()
}

// ===========================================================================
// 1. Selection feeding aggregation
// ===========================================================================

#[test]
fn selected_columns_carry_their_data() {
    let table = swept_table(&[0.0, 0.1, 0.2, 0.3, 0.4, 0.5], 8);
    let targets = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5];
    let selected = select_nearest(&table, &targets).unwrap();

    assert_eq!(selected.column_count(), targets.len() + 1);
    // Column for delay 0.3 keeps the swept values.
    assert_eq!(selected.column(4).unwrap()[0], 3.0);

    let envelope = aggregate(&selected);
    assert_eq!(envelope.mean.len(), 8);
    // Per-bin means rise by one per bin in this construction.
    assert!((envelope.mean[1] - envelope.mean[0] - 1.0).abs() < 1e-12);
}

#[test]
fn selection_count_matches_targets_even_when_sparse() {
    let table = swept_table(&[0.0, 0.5], 4);
    let selected = select_nearest(&table, &[0.0, 0.1, 0.2, 0.3, 0.4, 0.5]).unwrap();
    assert_eq!(selected.column_count(), 7);
    // Every target below 0.25 resolves to the 0.0 column.
    assert_eq!(selected.labels()[1], "0");
    assert_eq!(selected.labels()[2], "0");
    assert_eq!(selected.labels()[3], "0");
}

// ===========================================================================
// 2. Spectrum properties
// ===========================================================================

#[test]
fn spectrum_of_selected_window_is_dc_normalised() {
    let window: Vec<f64> = (0..16)
        .map(|i| {
            let x = i as f64 / 16.0;
            0.5 - 0.5 * (2.0 * std::f64::consts::PI * x).cos()
        })
        .collect();
    let spectrum = estimate_spectrum(&window, 64).unwrap();
    assert_eq!(spectrum.magnitude_db[0], 0.0);
    assert_eq!(spectrum.bins.len(), 16 * 64 / 2 + 1);
    // Away from the mainlobe a Hann window is well below DC.
    let far = spectrum.bins.iter().position(|&b| b >= 6.0).unwrap();
    assert!(spectrum.magnitude_db[far] < -30.0);
}

// ===========================================================================
// 3. Animation over parallel tables
// ===========================================================================

#[test]
fn full_animation_pass_over_measurement_tables() {
    let impulse = swept_table(&[0.0, 0.1, 0.2, 0.3], 32);
    let amplitude = swept_table(&[0.0, 0.1, 0.2, 0.3], 16);
    let delay_error = swept_table(&[0.0, 0.1, 0.2, 0.3], 16);

    let sequence = FrameSequence::new(delay_error.column_count(), true, 1);
    let frames = resolve_frames(
        &sequence,
        &FrameTables {
            impulse: &impulse,
            amplitude: &amplitude,
            delay_error: &delay_error,
        },
    )
    .unwrap();

    // C = 5: forward 1..4 then mirrored back to 1.
    let sources: Vec<usize> = frames.iter().map(|f| f.source).collect();
    assert_eq!(sources, vec![1, 2, 3, 4, 3, 2, 1]);

    // Frame data is borrowed per source column, so mirrored frames alias
    // their forward counterparts.
    assert_eq!(frames[1].amplitude, frames[5].amplitude);

    // Layout bounds derived the way the renderer sizes its axes.
    let bounds = aggregate_bounded(&delay_error, 0.05);
    assert!(bounds.display_min <= bounds.display_max);
    assert!(bounds.retained_bins < delay_error.bin_count());
    let extent = support_extent(&impulse, 1e-4);
    assert!(extent < impulse.bin_count());
}
