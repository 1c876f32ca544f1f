//! Point sources: path text → ordered source-space points.
//!
//! Three interchangeable strategies feed the same polar pipeline:
//! - [`sample`]: dense uniform sampling of full SVG path data
//! - [`lines`]: vertices of straight-line `M L H V Z` commands
//! - [`pairs`]: every `x y` number pair found in the text

pub mod lines;
pub mod pairs;
pub mod sample;

use std::path::Path;

use crate::error::PolarError;

/// Read a whole input file, keeping the path for the error message.
pub fn read_input(path: &Path) -> Result<String, PolarError> {
    std::fs::read_to_string(path).map_err(|source| PolarError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}
