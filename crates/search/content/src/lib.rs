//! File loaders for puzzle grids and search configuration.
//!
//! Grids are plain text, one row per line. Search configuration is TOML that
//! deserializes directly into [`ceres_core::SearchConfig`]; missing keys fall
//! back to the defaults.

pub mod loaders;

pub use loaders::{ConfigLoader, GridLoader, LoadResult};
