//! Trazo Analysis - numeric core for DSP measurement figures
//!
//! This crate holds the pure transforms behind the figure and animation
//! pipeline; it never touches the filesystem:
//!
//! - [`table`] - header-labeled numeric tables (axis column + trial columns)
//! - [`select`] - nearest-value column selection against a target set
//! - [`spectrum`] - oversampled, DC-normalised magnitude spectra
//! - [`envelope`] - per-bin mean/min/max envelopes with trimmed display bounds
//! - [`animate`] - double-back frame scheduling over parallel tables
//!
//! ## Example
//!
//! ```rust,ignore
//! use trazo_analysis::{FrameSequence, select_nearest};
//!
//! let selected = select_nearest(&amplitude, &[0.0, 0.1, 0.2, 0.3, 0.4, 0.5])?;
//! let sequence = FrameSequence::new(amplitude.column_count(), true, 1);
//! ```

pub mod animate;
pub mod envelope;
pub mod error;
pub mod select;
pub mod spectrum;
pub mod table;

pub use animate::{FrameData, FrameSequence, FrameTables, resolve_frames};
pub use envelope::{
    BoundedEnvelope, DELAY_TRIM_FRACTION, Envelope, aggregate, aggregate_bounded, support_extent,
};
pub use error::AnalysisError;
pub use select::select_nearest;
pub use spectrum::{DEFAULT_OVERSAMPLE, Spectrum, estimate_spectrum};
pub use table::Table;
