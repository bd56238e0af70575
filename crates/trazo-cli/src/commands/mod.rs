//! CLI subcommand implementations.

pub mod fractional;
pub mod perf;
pub mod stft;
pub mod version;
