//! Grid loader.
//!
//! Reads a text file where each line is one grid row. Line endings are
//! stripped; rows may have different lengths.

use std::path::Path;

use ceres_core::Grid;

use crate::loaders::{LoadResult, read_file};

/// Loader for character grids from text files.
pub struct GridLoader;

impl GridLoader {
    /// Load a grid from a text file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the file, one row per line
    ///
    /// # Returns
    ///
    /// Returns the immutable grid. An empty file yields a grid with zero rows
    /// and zero columns.
    pub fn load(path: &Path) -> LoadResult<Grid> {
        let content = read_file(path)?;
        let grid = Grid::parse(&content);

        let dimensions = grid.dimensions();
        tracing::debug!(
            path = %path.display(),
            rows = dimensions.rows,
            cols = dimensions.cols,
            "Loaded grid"
        );
        if has_ragged_rows(&grid) {
            tracing::warn!(path = %path.display(), "Grid rows are ragged; short rows are padded");
        }

        Ok(grid)
    }
}

/// True when some declared cell holds the empty sentinel, i.e. at least one
/// row is shorter than the widest row.
fn has_ragged_rows(grid: &Grid) -> bool {
    grid.positions().any(|position| grid.get(position).is_none())
}
