//! Error types for the numeric analysis core.

use thiserror::Error;

/// Errors produced by table construction and the analysis transforms.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A column label expected to encode a numeric parameter could not be parsed.
    #[error("column label '{label}' is not a numeric parameter value")]
    MalformedLabel {
        /// The offending label text.
        label: String,
    },

    /// Spectrum estimation was given a zero-length sequence.
    #[error("spectrum estimation needs at least one sample")]
    EmptyInput,

    /// An animation frame resolved to a column a table does not have.
    #[error("frame {frame} needs column {column} of the {table} table, which has only {available}")]
    FrameIndexOutOfRange {
        /// Frame number in the playback sequence.
        frame: usize,
        /// Resolved source column index.
        column: usize,
        /// Which of the parallel tables was too narrow.
        table: &'static str,
        /// Number of columns that table actually has.
        available: usize,
    },

    /// A table was built with a different number of labels and data rows.
    #[error("table has {labels} labels for {rows} data rows")]
    LabelCountMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Number of data rows supplied.
        rows: usize,
    },

    /// A table row does not match the length of the axis row.
    #[error("row '{label}' has {len} samples, expected {expected}")]
    RaggedRow {
        /// Label of the short or long row.
        label: String,
        /// Actual length of the row.
        len: usize,
        /// Length of the axis row.
        expected: usize,
    },

    /// Nearest-column selection was asked to pick from a table with no trial columns.
    #[error("table has no trial columns to select from")]
    NoTrialColumns,

    /// A table was built with no columns at all.
    #[error("table needs at least an axis column")]
    EmptyTable,

    /// A column index fell outside a table.
    #[error("column {index} is out of range for a table with {available} columns")]
    ColumnOutOfRange {
        /// Requested column index.
        index: usize,
        /// Number of columns the table has.
        available: usize,
    },
}

impl AnalysisError {
    /// Create a malformed-label error.
    pub fn malformed_label(label: impl Into<String>) -> Self {
        AnalysisError::MalformedLabel {
            label: label.into(),
        }
    }
}
