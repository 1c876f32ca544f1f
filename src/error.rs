use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting path geometry to a polar table.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PolarError {
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No path provided")]
    MissingPath,

    #[error("No paths found in SVG")]
    NoPaths,

    #[error("No points parsed from path")]
    NoPoints,

    #[error("No coordinate pairs found")]
    NoCoordinatePairs,

    #[error("No pairs found")]
    NoPairs,

    #[error("Invalid path data: {0}")]
    InvalidPathData(String),

    #[error("Invalid SVG document: {0}")]
    InvalidSvg(String),

    #[error("invalid option: {0}")]
    InvalidOption(String),
}

impl PolarError {
    /// True when no geometry could be obtained from the input.
    ///
    /// These are reported as a one-line diagnostic in place of a record
    /// rather than aborting the run.
    pub fn is_empty_input(&self) -> bool {
        matches!(
            self,
            PolarError::MissingPath
                | PolarError::NoPaths
                | PolarError::NoPoints
                | PolarError::NoCoordinatePairs
                | PolarError::NoPairs
                | PolarError::InvalidPathData(_)
                | PolarError::InvalidSvg(_)
        )
    }
}
