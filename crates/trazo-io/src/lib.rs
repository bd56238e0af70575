//! Trazo IO - measurement tables on disk
//!
//! The file-facing half of the pipeline:
//!
//! - [`reader`] - CSV measurement files into [`trazo_analysis::Table`]s
//! - [`dataset`] - dataset-prefix discovery and intermediate-file cleanup
//! - [`naming`] - the literal artifact suffix conventions
//!
//! The numeric core in `trazo-analysis` never sees a path; everything that
//! touches the filesystem lives here so the transforms stay testable without
//! fixtures.

pub mod dataset;
pub mod error;
pub mod naming;
pub mod reader;

pub use dataset::{discover_prefixes, remove_intermediates};
pub use error::IoError;
pub use reader::read_table;
