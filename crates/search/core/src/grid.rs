//! Immutable character grid and bounds-safe lookup.
//!
//! A [`Grid`] is built once from an ordered sequence of text rows and never
//! mutated afterwards. Rows may be ragged: the declared column count is the
//! longest row, and cells past the end of a shorter row hold the empty
//! sentinel. The sentinel is `None`, so it can never compare equal to a real
//! input character.
use std::fmt;

use crate::direction::Direction;

/// Discrete grid coordinate expressed as (row, column).
///
/// Rows grow downward and columns grow rightward. Coordinates are signed so
/// that stepping off the top or left edge produces a representable position
/// that simply resolves to the sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring position one step along `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        self.offset(direction, 1)
    }

    /// Returns the position `distance` steps along `direction`. Negative
    /// distances walk backwards.
    #[inline]
    pub fn offset(self, direction: Direction, distance: i32) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr * distance, self.col + dc * distance)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Declared grid extent used to bound scans and lookups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub rows: u32,
    pub cols: u32,
}

impl GridDimensions {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as u32) < self.rows
            && (position.col as u32) < self.cols
    }

    /// Number of declared cells, including sentinel padding of ragged rows.
    pub fn area(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Iterates every declared coordinate in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.rows as i32)
            .flat_map(move |row| (0..self.cols as i32).map(move |col| Position::new(row, col)))
    }
}

/// Read-only character lookup shared by the matcher and the counters.
pub trait GridOracle: Send + Sync {
    fn dimensions(&self) -> GridDimensions;

    /// Returns the character at `position`, or `None` (the empty sentinel)
    /// when the coordinate is outside the grid or was never populated.
    fn get(&self, position: Position) -> Option<char>;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    fn rows(&self) -> u32 {
        self.dimensions().rows
    }

    fn cols(&self) -> u32 {
        self.dimensions().cols
    }
}

/// Row-major character grid with stored dimensions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Builds a grid from ordered rows. Rows are taken as-is; no
    /// rectangularity check is performed.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = lines
            .into_iter()
            .map(|line| line.as_ref().chars().collect())
            .collect();

        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let dimensions = GridDimensions::new(rows.len() as u32, cols as u32);

        let mut cells = Vec::with_capacity(dimensions.area());
        for row in &rows {
            cells.extend(row.iter().copied().map(Some));
            cells.extend(std::iter::repeat_n(None, cols - row.len()));
        }

        Self { dimensions, cells }
    }

    /// Splits `text` on line endings (`\n` or `\r\n`) and builds the grid.
    /// A trailing newline does not introduce an extra row.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn rows(&self) -> u32 {
        self.dimensions.rows
    }

    pub fn cols(&self) -> u32 {
        self.dimensions.cols
    }

    pub fn get(&self, position: Position) -> Option<char> {
        if !self.dimensions.contains(position) {
            return None;
        }
        let index = position.row as usize * self.dimensions.cols as usize + position.col as usize;
        self.cells.get(index).copied().flatten()
    }

    /// Iterates every declared coordinate in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        self.dimensions.positions()
    }
}

impl GridOracle for Grid {
    fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    fn get(&self, position: Position) -> Option<char> {
        Grid::get(self, position)
    }
}

impl fmt::Display for Grid {
    /// Writes one line per declared row; sentinel padding is omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.dimensions.cols as usize;
        for row in 0..self.dimensions.rows as usize {
            if row > 0 {
                writeln!(f)?;
            }
            let cells = &self.cells[row * cols..(row + 1) * cols];
            for cell in cells.iter().map_while(|cell| *cell) {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
