//! Dataset file naming conventions.
//!
//! Every artifact is named by appending a fixed suffix to the dataset
//! prefix. Downstream documentation references these names literally, so
//! they are kept in one place and never rebuilt ad hoc.

use std::path::{Path, PathBuf};

/// Amplitude-response measurement table.
pub const AMPLITUDE_SUFFIX: &str = ".fractional-amplitude.csv";
/// Aliasing measurement table.
pub const ALIASING_SUFFIX: &str = ".fractional-aliasing.csv";
/// Group-delay-error measurement table.
pub const GROUP_SUFFIX: &str = ".fractional-group.csv";
/// Impulse-response measurement table.
pub const IMPULSE_SUFFIX: &str = ".fractional-impulse.csv";
/// Phase measurement table (produced by the test suite, not plotted).
pub const PHASE_SUFFIX: &str = ".fractional-phase.csv";
/// Aggregated per-bin statistics table.
pub const STATS_SUFFIX: &str = ".fractional-stats.csv";

/// Two-panel fractional-delay figure.
pub const FRACTIONAL_FIGURE_SUFFIX: &str = ".fractional.svg";
/// Three-panel statistics figure, vector form.
pub const STATS_FIGURE_SUFFIX: &str = ".svg";
/// Three-panel statistics figure, high-resolution raster form.
pub const STATS_RASTER_SUFFIX: &str = "@2x.png";
/// Animated sweep video.
pub const ANIMATION_SUFFIX: &str = ".mp4";

/// The intermediate measurement tables that cleanup removes.
pub const INTERMEDIATE_SUFFIXES: [&str; 5] = [
    AMPLITUDE_SUFFIX,
    ALIASING_SUFFIX,
    GROUP_SUFFIX,
    IMPULSE_SUFFIX,
    PHASE_SUFFIX,
];

/// Append a suffix to a dataset prefix.
///
/// The prefix is a path stem like `out/fractional/linear16`, not a
/// directory, so this is plain string concatenation on the OS path.
pub fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut os = prefix.as_os_str().to_os_string();
    os.push(suffix);
    PathBuf::from(os)
}
