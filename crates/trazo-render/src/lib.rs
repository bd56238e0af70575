//! Trazo Render - figures and animations for measurement data
//!
//! Chart assembly for the pipeline, split into:
//!
//! - [`figure`] - backend-agnostic multi-panel line figures (SVG / PNG)
//! - [`fractional`] - the two-panel fractional-delay figure
//! - [`stats`] - the three-panel statistics figure (SVG + @2x raster)
//! - [`animation`] - per-frame rendering and ffmpeg video assembly
//! - [`style`] - palette and canvas sizes
//!
//! The numeric inputs are [`trazo_analysis::Table`]s; everything here is
//! presentation. Frame rendering is side-effect isolated: each frame is a
//! pure function of its resolved data and precomputed layout bounds.

pub mod animation;
pub mod error;
pub mod figure;
pub mod fractional;
pub mod stats;
pub mod style;

pub use animation::{AnimationOptions, BASE_FPS, animate, render_animation};
pub use error::RenderError;
pub use figure::{Figure, Fill, Line, Panel, series_points};
pub use fractional::render_fractional_figure;
pub use stats::{render_stats_raster, render_stats_svg};
