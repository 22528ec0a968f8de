//! Directional pattern matching over immutable character grids.
//!
//! `ceres-core` builds a [`grid::Grid`] once from text rows and answers two
//! questions about it: how many straight-line placements of a word exist in
//! any of the eight compass directions, and how many cells center an "X"
//! formed by two diagonal placements of a word. Every API here is a pure
//! function of the grid and its arguments; nothing performs I/O.
pub mod config;
pub mod counter;
pub mod direction;
pub mod error;
pub mod grid;
pub mod matcher;

pub use config::SearchConfig;
pub use counter::{CrossPattern, PatternCounter, SearchReport};
pub use direction::Direction;
pub use error::PatternError;
pub use grid::{Grid, GridDimensions, GridOracle, Position};
pub use matcher::{MatchAttempt, Occurrence, Word, count_matches};
