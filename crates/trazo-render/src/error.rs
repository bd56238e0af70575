//! Error types for figure and animation rendering.

use thiserror::Error;
use trazo_analysis::AnalysisError;

/// Errors that can occur while drawing figures or assembling videos.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A plotters backend refused to draw.
    #[error("chart rendering failed: {0}")]
    Draw(String),

    /// A table had nothing to size the axes from.
    #[error("{what} has no data to size axes from")]
    NoData {
        /// Which input was empty.
        what: &'static str,
    },

    /// A statistics table was missing expected columns.
    #[error("{what} needs {expected} columns, found {found}")]
    MissingColumns {
        /// Which table was too narrow.
        what: &'static str,
        /// Number of columns the figure needs.
        expected: usize,
        /// Number of columns actually present.
        found: usize,
    },

    /// Could not create the temporary frame directory.
    #[error("failed to create frame directory: {source}")]
    FrameDir {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// ffmpeg was not found on PATH.
    #[error("ffmpeg not found on PATH (needed to assemble the video)")]
    FfmpegMissing {
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// ffmpeg could not be launched for another reason.
    #[error("failed to launch ffmpeg: {source}")]
    FfmpegLaunch {
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// ffmpeg ran but reported failure.
    #[error("ffmpeg exited with {status}: {stderr}")]
    FfmpegFailed {
        /// Exit status description.
        status: String,
        /// Captured standard error output.
        stderr: String,
    },

    /// Frame scheduling or table access failed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl RenderError {
    /// Wrap a backend drawing error.
    pub(crate) fn draw(err: impl ToString) -> Self {
        RenderError::Draw(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_display_names_the_table() {
        let err = RenderError::MissingColumns {
            what: "fractional stats table",
            expected: 7,
            found: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("stats"), "got: {msg}");
        assert!(msg.contains('7'), "got: {msg}");
    }

    #[test]
    fn analysis_errors_pass_through() {
        let err = RenderError::from(AnalysisError::EmptyInput);
        assert!(err.to_string().contains("at least one sample"));
    }
}
