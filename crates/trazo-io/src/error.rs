//! Error types for table I/O.

use std::path::PathBuf;

use thiserror::Error;
use trazo_analysis::AnalysisError;

/// Errors that can occur while reading tables or managing dataset files.
#[derive(Debug, Error)]
pub enum IoError {
    /// Failed to open or read a file.
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to list a directory during dataset discovery.
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        /// Path of the directory that could not be listed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to delete an intermediate file.
    #[error("failed to remove file '{path}': {source}")]
    RemoveFile {
        /// Path of the file that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// CSV-level parse failure (bad quoting, uneven record lengths).
    #[error("malformed CSV in '{path}': {source}")]
    Csv {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A data field was not parseable as a floating-point number.
    #[error("'{path}' record {record}, field {field}: '{text}' is not a number")]
    NumericField {
        /// Path of the offending file.
        path: PathBuf,
        /// 1-based data record number (the header is record 0).
        record: usize,
        /// 0-based field index within the record.
        field: usize,
        /// The text that failed to parse.
        text: String,
    },

    /// The file had no records at all.
    #[error("'{path}' is empty")]
    Empty {
        /// Path of the empty file.
        path: PathBuf,
    },

    /// Two columns share a label.
    #[error("'{path}' has duplicate column label '{label}'")]
    DuplicateLabel {
        /// Path of the offending file.
        path: PathBuf,
        /// The repeated label.
        label: String,
    },

    /// The parsed data violated a table invariant.
    #[error("'{path}' is not a valid table: {source}")]
    Shape {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying table construction error.
        #[source]
        source: AnalysisError,
    },
}

impl IoError {
    /// Create a read-file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a read-directory error.
    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::ReadDir {
            path: path.into(),
            source,
        }
    }

    /// Create a remove-file error.
    pub fn remove_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::RemoveFile {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn read_file_factory_produces_correct_variant() {
        let err = IoError::read_file("/some/path.csv", mock_io_err());
        assert!(
            matches!(err, IoError::ReadFile { ref path, .. } if path == std::path::Path::new("/some/path.csv"))
        );
    }

    #[test]
    fn read_file_source_is_some() {
        let err = IoError::read_file("/x", mock_io_err());
        assert!(err.source().is_some(), "ReadFile must expose I/O source");
    }

    #[test]
    fn numeric_field_display_names_the_text() {
        let err = IoError::NumericField {
            path: "/a/b.csv".into(),
            record: 3,
            field: 2,
            text: "nan?".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("record 3"), "got: {msg}");
        assert!(msg.contains("nan?"), "got: {msg}");
    }

    #[test]
    fn duplicate_label_display() {
        let err = IoError::DuplicateLabel {
            path: "/a.csv".into(),
            label: "0.25".into(),
        };
        assert!(err.to_string().contains("0.25"));
    }
}
